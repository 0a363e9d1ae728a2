//! Integer width for number flags.
//!
//! Number flags are plain decimal integers with an optional leading `-`.
//! Accumulation wraps on overflow instead of failing, so the width picked
//! here only decides where wrapping starts. `i64` is the default
//! everywhere a width can be chosen.

/// Integer type that number flags can be accumulated into.
pub trait FlagNumber: Copy + PartialEq + core::fmt::Debug {
    const ZERO: Self;

    /// `self * 10 + digit`, wrapping on overflow.
    fn push_digit(self, digit: u8) -> Self;

    /// Two's complement negation, wrapping on `MIN`.
    fn negate(self) -> Self;
}

macro_rules! impl_flag_number {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FlagNumber for $ty {
                const ZERO: Self = 0;

                #[inline]
                fn push_digit(self, digit: u8) -> Self {
                    self.wrapping_mul(10).wrapping_add(digit as $ty)
                }

                #[inline]
                fn negate(self) -> Self {
                    self.wrapping_neg()
                }
            }
        )*
    };
}

impl_flag_number!(i8, i16, i32, i64, i128, isize);
