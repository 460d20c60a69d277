use derive_more as dm;

use crate::{ops::BinaryOp, types::IntType};

/// The operation that could not produce a value of its result type.
#[derive(Clone, Copy, Debug, Eq, PartialEq, dm::Display)]
pub enum Operation {
    #[display("{value} as {to}")]
    Cast { value: i128, to: IntType },
    #[display("{first} {op} {second} ({ty})")]
    Binary {
        op: BinaryOp,
        first: i128,
        second: i128,
        ty: IntType,
    },
}

/// Raised by checked arithmetic and checked conversions when the result does not
/// fit its target type.
#[derive(Clone, Copy, Debug, Eq, PartialEq, dm::Display, dm::Error)]
#[display("Arithmetic operation resulted in an overflow.")]
pub struct OverflowError {
    #[error(not(source))]
    pub operation: Operation,
}

impl OverflowError {
    pub(crate) fn cast(value: i128, to: IntType) -> Self {
        Self {
            operation: Operation::Cast { value, to },
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, dm::Display, dm::Error, dm::From)]
pub enum ConversionError {
    /// A conversion that may lose data was requested where only widening is allowed.
    #[display("Cannot implicitly convert type '{from}' to '{to}'. An explicit conversion exists.")]
    ImplicitNarrowing { from: IntType, to: IntType },
    #[display("Operand types '{first}' and '{second}' do not match.")]
    TypeMismatch { first: IntType, second: IntType },
    #[from]
    #[display("{_0}")]
    Overflow(OverflowError),
}
