use std::{fmt, num::Wrapping};

use crate::{
    error::{ConversionError, Operation, OverflowError},
    ops::{self, BinaryOp},
    policy::OverflowMode,
    types::IntType,
};

/// An integer value tagged with its type.
///
/// The bit representation is always normalized for `ty`: the leading bits are
/// copies of the sign bit for signed types and zeros for unsigned ones.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct IntValue {
    bit_rep: Wrapping<u128>,
    ty: IntType,
}

impl IntValue {
    /// Creates the value `value` of type `ty` or fails if it is out of range.
    pub fn new(value: i128, ty: IntType) -> Result<Self, OverflowError> {
        if ty.contains(value) {
            Ok(Self::from_normalized(value as u128, ty))
        } else {
            Err(OverflowError::cast(value, ty))
        }
    }

    /// Creates the value congruent to `value` modulo 2^bit_size in `ty`.
    pub fn new_wrapping(value: i128, ty: IntType) -> Self {
        Self::from_normalized(ty.to_size(value as u128), ty)
    }

    #[inline]
    pub(crate) fn from_normalized(bit_rep: u128, ty: IntType) -> Self {
        debug_assert!(ty.in_bounds(bit_rep), "{bit_rep:#x} is not a valid {ty}");
        Self {
            bit_rep: Wrapping(bit_rep),
            ty,
        }
    }

    #[inline]
    pub fn ty(&self) -> IntType {
        self.ty
    }

    #[inline]
    pub fn bit_rep(&self) -> u128 {
        self.bit_rep.0
    }

    /// The numeric value, exact for every supported type.
    #[inline]
    pub fn as_i128(&self) -> i128 {
        self.bit_rep.0 as i128
    }

    /// Converts to a type that can hold every value of the current one.
    /// Anything else is rejected, even when this particular value would fit.
    pub fn widen(&self, to: IntType) -> Result<Self, ConversionError> {
        if to.can_represent(&self.ty) {
            Ok(Self::from_normalized(self.bit_rep.0, to))
        } else {
            Err(ConversionError::ImplicitNarrowing { from: self.ty, to })
        }
    }

    /// Explicit truncating conversion: discards the high-order bits that do not fit `to`.
    pub fn wrapping_cast(&self, to: IntType) -> Self {
        Self::from_normalized(to.to_size(self.bit_rep.0), to)
    }

    /// Range-validated conversion.
    pub fn checked_cast(&self, to: IntType) -> Result<Self, OverflowError> {
        Self::new(self.as_i128(), to)
    }

    pub fn cast(&self, to: IntType, mode: OverflowMode) -> Result<Self, OverflowError> {
        match mode {
            OverflowMode::Checked => self.checked_cast(to),
            OverflowMode::Unchecked => Ok(self.wrapping_cast(to)),
        }
    }

    pub fn wrapping_op(first: &Self, second: &Self, op: BinaryOp) -> Result<Self, ConversionError> {
        let ty = Self::common_type(first, second)?;
        Ok(Self::from_normalized(
            ops::wrapping_op(op, first.bit_rep.0, second.bit_rep.0, ty),
            ty,
        ))
    }

    pub fn checked_op(first: &Self, second: &Self, op: BinaryOp) -> Result<Self, ConversionError> {
        let ty = Self::common_type(first, second)?;
        ops::checked_op(op, first.bit_rep.0, second.bit_rep.0, ty)
            .map(|bit_rep| Self::from_normalized(bit_rep, ty))
            .ok_or_else(|| {
                OverflowError {
                    operation: Operation::Binary {
                        op,
                        first: first.as_i128(),
                        second: second.as_i128(),
                        ty,
                    },
                }
                .into()
            })
    }

    pub fn binary_op(
        first: &Self,
        second: &Self,
        op: BinaryOp,
        mode: OverflowMode,
    ) -> Result<Self, ConversionError> {
        match mode {
            OverflowMode::Checked => Self::checked_op(first, second, op),
            OverflowMode::Unchecked => Self::wrapping_op(first, second, op),
        }
    }

    fn common_type(first: &Self, second: &Self) -> Result<IntType, ConversionError> {
        if first.ty == second.ty {
            Ok(first.ty)
        } else {
            Err(ConversionError::TypeMismatch {
                first: first.ty,
                second: second.ty,
            })
        }
    }
}

impl fmt::Display for IntValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.as_i128(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_checks_range() {
        assert_eq!(IntValue::new(200, IntType::U8).unwrap().as_i128(), 200);
        assert!(IntValue::new(256, IntType::U8).is_err());
        assert!(IntValue::new(-1, IntType::U8).is_err());
        assert_eq!(IntValue::new(-1, IntType::I8).unwrap().bit_rep(), u128::MAX);
    }

    #[test]
    fn new_wrapping_reduces_modulo_width() {
        assert_eq!(IntValue::new_wrapping(350, IntType::U8).as_i128(), 94);
        assert_eq!(IntValue::new_wrapping(-1, IntType::U8).as_i128(), 255);
        assert_eq!(IntValue::new_wrapping(4_082_420, IntType::I16).as_i128(), 19188);
    }

    #[test]
    fn display_prints_the_number() {
        assert_eq!(IntValue::new(-1234, IntType::I16).unwrap().to_string(), "-1234");
        assert_eq!(IntValue::new(94, IntType::U8).unwrap().to_string(), "94");
    }

    #[test]
    fn mismatched_operands_are_rejected() {
        let first = IntValue::new(1, IntType::I16).unwrap();
        let second = IntValue::new(1, IntType::I32).unwrap();
        assert_eq!(
            IntValue::wrapping_op(&first, &second, BinaryOp::Add),
            Err(ConversionError::TypeMismatch {
                first: IntType::I16,
                second: IntType::I32,
            })
        );
    }
}
