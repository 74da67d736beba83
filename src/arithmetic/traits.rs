use std::fmt::{Debug, Display};
use std::ops::{Add, Sub, Mul, Neg};
use num_traits::{Zero, One};
use crate::field::FieldResult;

/// Trait for prime field elements usable as polynomial coefficients
pub trait Field:
    Sized
    + Copy
    + Debug
    + Display
    + PartialEq
    + Eq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
    + Zero
    + One
{
    /// Returns the characteristic of the field
    fn characteristic() -> u64;

    /// Returns the canonical integer in `[0, characteristic)` for this element
    fn value(&self) -> u64;

    /// Returns the multiplicative inverse of this element
    fn inverse(&self) -> FieldResult<Self>;

    /// Squares this element
    fn square(&self) -> Self {
        *self * *self
    }

    /// Raises this element to a power
    fn pow(&self, exp: u64) -> Self {
        let mut base = *self;
        let mut result = Self::one();
        let mut exp = exp;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result * base;
            }
            base = base.square();
            exp >>= 1;
        }

        result
    }
}
