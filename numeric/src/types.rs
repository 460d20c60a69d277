use derive_more as dm;

/// A fixed-width integer type, at most 64 bits wide.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, dm::Display)]
#[display("{}{}", if *is_signed { "i" } else { "u" }, bit_size)]
pub struct IntType {
    bit_size: u32,
    is_signed: bool,
}

impl IntType {
    pub const MAX_BIT_SIZE: u32 = 64;

    pub const I8: Self = Self::of(8, true);
    pub const I16: Self = Self::of(16, true);
    pub const I32: Self = Self::of(32, true);
    pub const I64: Self = Self::of(64, true);
    pub const U8: Self = Self::of(8, false);
    pub const U16: Self = Self::of(16, false);
    pub const U32: Self = Self::of(32, false);
    pub const U64: Self = Self::of(64, false);

    const fn of(bit_size: u32, is_signed: bool) -> Self {
        Self {
            bit_size,
            is_signed,
        }
    }

    /// Returns `None` for zero-width types and types wider than [`Self::MAX_BIT_SIZE`].
    pub const fn new(bit_size: u32, is_signed: bool) -> Option<Self> {
        if bit_size == 0 || bit_size > Self::MAX_BIT_SIZE {
            None
        } else {
            Some(Self::of(bit_size, is_signed))
        }
    }

    #[inline]
    pub const fn bit_size(&self) -> u32 {
        self.bit_size
    }

    #[inline]
    pub const fn is_signed(&self) -> bool {
        self.is_signed
    }

    #[inline]
    pub(crate) fn bit_mask(bit_size: u32) -> u128 {
        u128::MAX >> (u128::BITS - bit_size)
    }

    pub fn min_value(&self) -> i128 {
        if self.is_signed {
            i128::MIN >> (i128::BITS - self.bit_size)
        } else {
            0
        }
    }

    pub fn max_value(&self) -> i128 {
        if self.is_signed {
            i128::MAX >> (i128::BITS - self.bit_size)
        } else {
            Self::bit_mask(self.bit_size) as i128
        }
    }

    /// Whether the number `value` lies within the range of this type.
    #[inline]
    pub fn contains(&self, value: i128) -> bool {
        (self.min_value()..=self.max_value()).contains(&value)
    }

    /// Determines whether `bit_rep` is a valid representation for this type, i.e.
    /// truncating it to this type and extending it back gives the same bits.
    pub(crate) fn in_bounds(&self, bit_rep: u128) -> bool {
        if self.is_signed {
            self.contains(bit_rep as i128)
        } else {
            bit_rep <= Self::bit_mask(self.bit_size)
        }
    }

    /// Keeps the low `bit_size` bits of `bit_rep` and extends them back to 128 bits,
    /// with the sign for signed types and with zeros for unsigned ones.
    /// This is the two's complement wraparound: the result is `bit_rep` modulo 2^bit_size.
    pub(crate) fn to_size(&self, bit_rep: u128) -> u128 {
        let value = bit_rep & Self::bit_mask(self.bit_size);
        if self.is_signed {
            Self::sign_ext(value, self.bit_size)
        } else {
            value
        }
    }

    fn sign_ext(value: u128, bit_size: u32) -> u128 {
        let bits_to_shift = u128::BITS - bit_size;
        (((value as i128) << bits_to_shift) >> bits_to_shift) as u128
    }

    /// Whether every value of `source` is also a value of this type, i.e. converting
    /// from `source` to this type is a widening.
    pub fn can_represent(&self, source: &IntType) -> bool {
        match (source.is_signed, self.is_signed) {
            (false, false) | (true, true) => self.bit_size >= source.bit_size,
            (false, true) => self.bit_size > source.bit_size,
            (true, false) => false,
        }
    }
}
