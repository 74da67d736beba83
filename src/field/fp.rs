//! Prime field GF(p) with the characteristic fixed at the type level
//! 
//! These elements are the coefficients of generator polynomials and of the
//! polynomial representations inside an extension field.

use crate::arithmetic::traits::Field;
use crate::field::{FieldError, FieldResult};
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::Rng;
use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Element of the prime field GF(P)
///
/// `P` is expected to be prime. Nothing here checks that; the extension
/// field constructor rejects composite characteristics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fp<const P: u32> {
    /// Canonical value in `[0, P)`
    value: u32,
}

impl<const P: u32> Fp<P> {
    /// Create a new field element, reducing `value` modulo `P`
    pub fn new(value: u64) -> Self {
        Self {
            value: (value % P as u64) as u32,
        }
    }
    
    /// Create a field element from a signed integer, e.g. `-1` for `P - 1`
    pub fn from_i64(value: i64) -> Self {
        Self {
            value: value.rem_euclid(P as i64) as u32,
        }
    }
    
    /// Generates a uniformly random element
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self { value: rng.gen_range(0..P) }
    }
}

impl<const P: u32> Field for Fp<P> {
    fn characteristic() -> u64 {
        P as u64
    }
    
    fn value(&self) -> u64 {
        self.value as u64
    }
    
    fn inverse(&self) -> FieldResult<Self> {
        if self.is_zero() {
            return Err(FieldError::DivisionByZero);
        }
        
        // a*x + p*y = gcd(a, p) = 1 for prime p
        let gcd = (self.value as i64).extended_gcd(&(P as i64));
        if !gcd.gcd.is_one() {
            return Err(FieldError::NonPrimeModulus);
        }
        
        Ok(Self::from_i64(gcd.x))
    }
}

impl<const P: u32> Zero for Fp<P> {
    fn zero() -> Self {
        Self { value: 0 }
    }
    
    fn is_zero(&self) -> bool {
        self.value == 0
    }
}

impl<const P: u32> One for Fp<P> {
    fn one() -> Self {
        Self::new(1)
    }
}

impl<const P: u32> Add for Fp<P> {
    type Output = Self;
    
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.value as u64 + rhs.value as u64)
    }
}

impl<const P: u32> AddAssign for Fp<P> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<const P: u32> Sub for Fp<P> {
    type Output = Self;
    
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.value as u64 + P as u64 - rhs.value as u64)
    }
}

impl<const P: u32> SubAssign for Fp<P> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<const P: u32> Mul for Fp<P> {
    type Output = Self;
    
    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(self.value as u64 * rhs.value as u64)
    }
}

impl<const P: u32> MulAssign for Fp<P> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<const P: u32> Neg for Fp<P> {
    type Output = Self;
    
    fn neg(self) -> Self::Output {
        if self.is_zero() {
            return self;
        }
        
        Self { value: P - self.value }
    }
}

impl<const P: u32> fmt::Display for Fp<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
