//! Elements of an extension field, stored as table indices

use crate::field::extension::ExtendedField;
use crate::field::fp::Fp;
use crate::field::FieldResult;
use crate::polynomial::Polynomial;
use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Element of GF(p^n) borrowing its parent field
///
/// Index 0 is the additive identity and index `i >= 1` is `alpha^(i - 1)`
/// for the primitive element `alpha = x`. The element never owns the field;
/// it only carries the reference needed to look up the tables.
#[derive(Clone, Copy)]
pub struct ExtendedFieldElement<'a, const P: u32> {
    value: u32,
    field: &'a ExtendedField<P>,
}

impl<'a, const P: u32> ExtendedFieldElement<'a, P> {
    /// Callers go through `ExtendedField::element`, which range-checks `value`
    pub(crate) fn from_index(value: u32, field: &'a ExtendedField<P>) -> Self {
        Self { value, field }
    }
    
    /// Table index of this element
    pub fn value(&self) -> u32 {
        self.value
    }
    
    /// The field this element belongs to
    pub fn field(&self) -> &'a ExtendedField<P> {
        self.field
    }
    
    pub fn is_zero(&self) -> bool {
        self.value == 0
    }
    
    pub fn is_one(&self) -> bool {
        self.value == 1
    }
    
    /// Discrete logarithm to base `alpha`, `None` for zero
    pub fn exponent(&self) -> Option<u32> {
        self.value.checked_sub(1)
    }
    
    /// Polynomial residue representing this element
    pub fn polynomial(&self) -> &'a Polynomial<Fp<P>> {
        &self.field.representations()[self.value as usize]
    }
    
    pub fn additive_inverse(self) -> Self {
        self.field.additive_inverse(self)
    }
    
    pub fn multiplicative_inverse(self) -> FieldResult<Self> {
        self.field.multiplicative_inverse(self)
    }
    
    pub fn divide(self, rhs: Self) -> FieldResult<Self> {
        self.field.divide(self, rhs)
    }
    
    pub fn pow(self, exp: u64) -> Self {
        self.field.pow(self, exp)
    }
}

impl<'a, const P: u32> PartialEq for ExtendedFieldElement<'a, P> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && std::ptr::eq(self.field, other.field)
    }
}

impl<'a, const P: u32> Eq for ExtendedFieldElement<'a, P> {}

impl<'a, const P: u32> Add for ExtendedFieldElement<'a, P> {
    type Output = Self;
    
    fn add(self, rhs: Self) -> Self::Output {
        self.field.add(self, rhs)
    }
}

impl<'a, const P: u32> AddAssign for ExtendedFieldElement<'a, P> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<'a, const P: u32> Sub for ExtendedFieldElement<'a, P> {
    type Output = Self;
    
    fn sub(self, rhs: Self) -> Self::Output {
        self.field.subtract(self, rhs)
    }
}

impl<'a, const P: u32> SubAssign for ExtendedFieldElement<'a, P> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<'a, const P: u32> Mul for ExtendedFieldElement<'a, P> {
    type Output = Self;
    
    fn mul(self, rhs: Self) -> Self::Output {
        self.field.multiply(self, rhs)
    }
}

impl<'a, const P: u32> MulAssign for ExtendedFieldElement<'a, P> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<'a, const P: u32> Neg for ExtendedFieldElement<'a, P> {
    type Output = Self;
    
    fn neg(self) -> Self::Output {
        self.additive_inverse()
    }
}

impl<'a, const P: u32> fmt::Debug for ExtendedFieldElement<'a, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtendedFieldElement")
            .field("value", &self.value)
            .field("polynomial", &format_args!("{}", self.polynomial()))
            .finish()
    }
}

impl<'a, const P: u32> fmt::Display for ExtendedFieldElement<'a, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.polynomial())
    }
}
