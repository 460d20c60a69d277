use std::{fmt, marker::PhantomData};

use derive_more as dm;

use common::log_trace;

use crate::{
    error::{Operation, OverflowError},
    ops::{self, BinaryOp},
    prim::Integral,
    value::IntValue,
};

/// Whether arithmetic reports results that do not fit their type or wraps them.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, dm::Display)]
pub enum OverflowMode {
    #[display("checked")]
    Checked,
    #[default]
    #[display("unchecked")]
    Unchecked,
}

/// How arithmetic and conversions behave when the result does not fit.
///
/// The outcome type differs per policy: checked operations produce a `Result`
/// while unchecked ones produce the wrapped value directly, so a scope cannot
/// silently ignore an overflow it was asked to detect.
pub trait OverflowPolicy {
    type Output<T>;

    const MODE: OverflowMode;

    fn binary_op<T: Integral>(first: T, second: T, op: BinaryOp) -> Self::Output<T>;

    fn cast<T: Integral>(value: impl Integral) -> Self::Output<T>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Checked;

#[derive(Clone, Copy, Debug, Default)]
pub struct Unchecked;

impl OverflowPolicy for Checked {
    type Output<T> = Result<T, OverflowError>;

    const MODE: OverflowMode = OverflowMode::Checked;

    fn binary_op<T: Integral>(first: T, second: T, op: BinaryOp) -> Self::Output<T> {
        ops::checked_op(op, first.to_bit_rep(), second.to_bit_rep(), T::TYPE)
            .map(T::from_bit_rep)
            .ok_or_else(|| {
                let operation = Operation::Binary {
                    op,
                    first: first.to_bit_rep() as i128,
                    second: second.to_bit_rep() as i128,
                    ty: T::TYPE,
                };
                log_trace!(%operation, "Overflow detected");
                OverflowError { operation }
            })
    }

    fn cast<T: Integral>(value: impl Integral) -> Self::Output<T> {
        Into::<IntValue>::into(value)
            .checked_cast(T::TYPE)
            .map(|v| T::from_bit_rep(v.bit_rep()))
            .inspect_err(|err| log_trace!(operation = %err.operation, "Overflow detected"))
    }
}

impl OverflowPolicy for Unchecked {
    type Output<T> = T;

    const MODE: OverflowMode = OverflowMode::Unchecked;

    fn binary_op<T: Integral>(first: T, second: T, op: BinaryOp) -> Self::Output<T> {
        T::from_bit_rep(ops::wrapping_op(
            op,
            first.to_bit_rep(),
            second.to_bit_rep(),
            T::TYPE,
        ))
    }

    fn cast<T: Integral>(value: impl Integral) -> Self::Output<T> {
        T::from_bit_rep(Into::<IntValue>::into(value).wrapping_cast(T::TYPE).bit_rep())
    }
}

/// A region of code in which every operation follows the policy `P`.
pub struct Scope<P> {
    _policy: PhantomData<P>,
}

impl<P: OverflowPolicy> Scope<P> {
    fn new() -> Self {
        Self {
            _policy: PhantomData,
        }
    }

    #[inline]
    pub fn mode(&self) -> OverflowMode {
        P::MODE
    }

    pub fn add<T: Integral>(&self, first: T, second: T) -> P::Output<T> {
        P::binary_op(first, second, BinaryOp::Add)
    }

    pub fn sub<T: Integral>(&self, first: T, second: T) -> P::Output<T> {
        P::binary_op(first, second, BinaryOp::Sub)
    }

    pub fn mul<T: Integral>(&self, first: T, second: T) -> P::Output<T> {
        P::binary_op(first, second, BinaryOp::Mul)
    }

    pub fn cast<T: Integral>(&self, value: impl Integral) -> P::Output<T> {
        P::cast(value)
    }
}

impl<P: OverflowPolicy> fmt::Debug for Scope<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scope").field("mode", &P::MODE).finish()
    }
}

/// Runs `body` with overflow checking enforced on every operation of the scope.
/// The first overflow ends the block and is returned.
pub fn checked<R>(
    body: impl FnOnce(&Scope<Checked>) -> Result<R, OverflowError>,
) -> Result<R, OverflowError> {
    body(&Scope::new())
}

/// Runs `body` with overflow checking suppressed; results wrap silently.
pub fn unchecked<R>(body: impl FnOnce(&Scope<Unchecked>) -> R) -> R {
    body(&Scope::new())
}

/// Checked conversion in expression form.
pub fn checked_cast<T: Integral>(value: impl Integral) -> Result<T, OverflowError> {
    Checked::cast(value)
}

/// Explicit truncating conversion in expression form. This is the only way to
/// narrow a primitive without checking.
pub fn wrapping_cast<T: Integral>(value: impl Integral) -> T {
    Unchecked::cast(value)
}
