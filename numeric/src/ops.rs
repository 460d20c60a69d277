use std::num::Wrapping;

use derive_more as dm;

use crate::types::IntType;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, dm::Display)]
pub enum BinaryOp {
    #[display("+")]
    Add,
    #[display("-")]
    Sub,
    #[display("*")]
    Mul,
}

/* Both operands are expected to be valid representations of `ty`, i.e. sign-extended
 * for signed types. Arithmetic on the 128-bit representations is exact modulo 2^128,
 * so truncating the result to the type's width gives the wrapped result for that width.
 */
pub(crate) fn wrapping_op(op: BinaryOp, first: u128, second: u128, ty: IntType) -> u128 {
    let (first, second) = (Wrapping(first), Wrapping(second));
    let result = match op {
        BinaryOp::Add => first + second,
        BinaryOp::Sub => first - second,
        BinaryOp::Mul => first * second,
    };
    let result = ty.to_size(result.0);
    debug_assert!(ty.in_bounds(result), "result out of bounds");
    result
}

/// Returns `None` if the exact result is not representable in `ty`.
pub(crate) fn checked_op(op: BinaryOp, first: u128, second: u128, ty: IntType) -> Option<u128> {
    if ty.is_signed() {
        // Same-sized casts are bitwise reinterpretations.
        let (first, second) = (first as i128, second as i128);
        let result = match op {
            BinaryOp::Add => first.checked_add(second),
            BinaryOp::Sub => first.checked_sub(second),
            BinaryOp::Mul => first.checked_mul(second),
        };
        // If i128 overflows, any narrower type does too.
        result.filter(|r| ty.contains(*r)).map(|r| r as u128)
    } else {
        let result = match op {
            BinaryOp::Add => first.checked_add(second),
            BinaryOp::Sub => first.checked_sub(second),
            BinaryOp::Mul => first.checked_mul(second),
        };
        result.filter(|r| ty.in_bounds(*r))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(value: i128) -> u128 {
        value as u128
    }

    #[test]
    fn wrapping_matches_primitive_wrapping() {
        assert_eq!(wrapping_op(BinaryOp::Add, 100, 250, IntType::U8), 94);
        assert_eq!(
            wrapping_op(BinaryOp::Mul, bits(2020), bits(2021), IntType::I16) as i128,
            2020_i16.wrapping_mul(2021) as i128
        );
        assert_eq!(
            wrapping_op(BinaryOp::Sub, 0, 1, IntType::U16),
            0_u16.wrapping_sub(1) as u128
        );
        assert_eq!(
            wrapping_op(BinaryOp::Add, bits(i32::MAX as i128), 1, IntType::I32) as i128,
            i32::MIN as i128
        );
    }

    #[test]
    fn checked_detects_overflow_in_both_directions() {
        assert_eq!(checked_op(BinaryOp::Add, 100, 250, IntType::U8), None);
        assert_eq!(checked_op(BinaryOp::Add, 100, 155, IntType::U8), Some(255));
        assert_eq!(checked_op(BinaryOp::Sub, 0, 1, IntType::U32), None);
        assert_eq!(
            checked_op(BinaryOp::Sub, bits(i8::MIN as i128), 1, IntType::I8),
            None
        );
        assert_eq!(
            checked_op(BinaryOp::Mul, bits(-20), bits(21), IntType::I16).map(|r| r as i128),
            Some(-420)
        );
        assert_eq!(checked_op(BinaryOp::Mul, bits(2020), bits(2021), IntType::I16), None);
    }

    #[test]
    fn operators_display_as_symbols() {
        assert_eq!(BinaryOp::Add.to_string(), "+");
        assert_eq!(BinaryOp::Mul.to_string(), "*");
    }
}
