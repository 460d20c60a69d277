use std::io::{self, BufRead, Write};

use common::{log_debug, log_span};
use numconv::{
    checked, checked_cast, unchecked, wrapping_cast, IntType, IntValue, OverflowError,
};

/// 32-bit multiplication; wraps like the default unchecked context does.
pub fn multiply(x: i32, y: i32) -> i32 {
    x.wrapping_mul(y)
}

pub fn add(x: i32, y: i32) -> i32 {
    x.wrapping_add(y)
}

/// Runs every step in order, writing their output to `out`.
pub fn run(out: &mut impl Write) -> io::Result<()> {
    show_widening(out)?;
    show_narrowing(out)?;
    using_checked(out)?;
    using_unchecked(out)
}

/// Both operands are promoted to the 32-bit accumulator before multiplying,
/// which can never lose information.
pub fn show_widening(out: &mut impl Write) -> io::Result<()> {
    log_span!("widening");
    let (numb1, numb2) = (20_i16, 21_i16);
    let product = multiply(numb1.into(), numb2.into());
    log_debug!(numb1, numb2, product, "Multiplied in a wider accumulator");
    writeln!(out, "{numb1} * {numb2} = {product}")
}

pub fn show_narrowing(out: &mut impl Write) -> io::Result<()> {
    log_span!("narrowing");
    let (numb3, numb4) = (2020_i16, 2021_i16);
    let product = multiply(numb3.into(), numb4.into());

    // `let answer: i16 = product;` does not type check: narrowing is always explicit.
    let implicit = IntValue::from(product).widen(IntType::I16);
    debug_assert!(implicit.is_err(), "i32 must not widen into i16");
    match implicit {
        Ok(value) => log_debug!(%value, "Accepted implicit conversion"),
        Err(err) => log_debug!(%err, "Rejected implicit narrowing"),
    }
    let answer: i16 = wrapping_cast(product);
    log_debug!(product, answer, "Truncated to 16 bits");

    writeln!(out, "\n{numb3} * {numb4} = {product}")?;
    writeln!(out, "{numb3} * {numb4} = {answer}")?;

    let my_int = 200_i32;
    let my_byte: u8 = wrapping_cast(my_int);
    log_debug!(
        my_int,
        my_byte,
        lossless = checked_cast::<u8>(my_int).is_ok(),
        "Narrowed to a byte"
    );
    writeln!(out, "\nValue of myByte: {my_byte}")
}

pub fn using_checked(out: &mut impl Write) -> io::Result<()> {
    log_span!("checked");
    let (b1, b2) = (100_u8, 250_u8);

    let sum: u8 = wrapping_cast(add(b1.into(), b2.into()));
    // The sum should be 350 but the byte silently holds 94.
    writeln!(out, "\nsum = {sum}")?;

    match checked_cast::<u8>(add(b1.into(), b2.into())) {
        Ok(sum) => writeln!(out, "sum = {sum}")?,
        Err(err) => report_overflow(out, &err)?,
    }

    let sum = checked(|scope| {
        let sum = scope.add(i32::from(b1), i32::from(b2))?;
        scope.cast::<u8>(sum)
    });
    match sum {
        Ok(sum) => writeln!(out, "sum = {sum}"),
        Err(err) => report_overflow(out, &err),
    }
}

pub fn using_unchecked(out: &mut impl Write) -> io::Result<()> {
    log_span!("unchecked");
    let (b1, b2) = (100_u8, 250_u8);

    let sum = unchecked(|scope| scope.cast::<u8>(scope.add(i32::from(b1), i32::from(b2))));
    log_debug!(b1, b2, sum, "Wrapped without checking");
    writeln!(out, "\nsum = {sum} ")
}

fn report_overflow(out: &mut impl Write, err: &OverflowError) -> io::Result<()> {
    log_debug!(operation = %err.operation, "Caught overflow");
    writeln!(out, "{err}")
}

/// Blocks until a line (or the end of input) is read. The content is discarded
/// and may be arbitrary bytes.
pub fn wait_for_input(input: &mut impl BufRead) -> io::Result<()> {
    let read = input.read_until(b'\n', &mut Vec::new())?;
    log_debug!(read, "Received input to exit");
    Ok(())
}
