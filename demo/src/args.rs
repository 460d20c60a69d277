use clap::Parser;

/// Demonstrates integer widening, narrowing and overflow checking.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Exit right after printing instead of waiting for a line on stdin
    #[arg(long, action)]
    pub no_pause: bool,
}
