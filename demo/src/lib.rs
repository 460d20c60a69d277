//! Console demonstration of integer widening, narrowing and overflow checking.
//!
//! [`run`] executes the four steps in their fixed order; the binary adds
//! logging, configuration and the final pause around it.

pub mod config;
pub mod steps;

pub use steps::{run, wait_for_input};
