use std::fmt;

use crate::{error::ConversionError, types::IntType, value::IntValue};

/// Primitive integer types that have a counterpart [`IntType`].
pub trait Integral: Copy + fmt::Debug + fmt::Display + Into<IntValue> {
    const TYPE: IntType;

    /// Sign- or zero-extended representation, as `self as u128` gives.
    fn to_bit_rep(self) -> u128;

    /// Keeps the low bits of `bit_rep` that fit `Self`, as `bit_rep as Self` does.
    fn from_bit_rep(bit_rep: u128) -> Self;
}

macro_rules! impl_integral {
    ($($ty:ty => $int_ty:ident),* $(,)?) => {
        $(
            impl Integral for $ty {
                const TYPE: IntType = IntType::$int_ty;

                #[inline]
                fn to_bit_rep(self) -> u128 {
                    self as u128
                }

                #[inline]
                fn from_bit_rep(bit_rep: u128) -> Self {
                    bit_rep as $ty
                }
            }

            impl From<$ty> for IntValue {
                #[inline]
                fn from(value: $ty) -> Self {
                    IntValue::from_normalized(value.to_bit_rep(), <$ty as Integral>::TYPE)
                }
            }

            impl TryFrom<IntValue> for $ty {
                type Error = ConversionError;

                fn try_from(value: IntValue) -> Result<Self, Self::Error> {
                    let value = value.checked_cast(<$ty as Integral>::TYPE)?;
                    Ok(<$ty as Integral>::from_bit_rep(value.bit_rep()))
                }
            }
        )*
    };
}

impl_integral!(
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
);
