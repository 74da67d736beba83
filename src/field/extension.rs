//! Extension fields GF(p^n) built from a generator polynomial
//! 
//! Nonzero elements are stored as discrete logarithms of the primitive
//! element `alpha = x`, which turns multiplication into exponent addition.
//! Addition goes through a Zech logarithm table computed with Imamura's
//! method ("A Method for Computing Addition Tables in GF(p^n)").

use crate::arithmetic::traits::Field;
use crate::field::element::ExtendedFieldElement;
use crate::field::fp::Fp;
use crate::field::{FieldError, FieldResult};
use crate::polynomial::Polynomial;
use crate::util::{field_size, increment_low_digit, is_prime, pack_digits};
use log::{debug, trace, warn};
use rand::Rng;
use std::collections::HashMap;

/// Largest field [`ExtendedField::new`] will build, 2^20 elements
///
/// Every table holds one entry per element, and the representation table
/// stores a polynomial per entry.
pub const MAX_FIELD_SIZE: u32 = 1 << 20;

/// Extension field GF(P^n) = GF(P)[x] / (generator)
///
/// All tables are computed once in [`ExtendedField::new`] and never change
/// afterwards, so a field can be shared between threads by reference.
#[derive(Clone, Debug)]
pub struct ExtendedField<const P: u32> {
    generator: Polynomial<Fp<P>>,
    extension_order: usize,
    size: u32,
    /// Index 0 is the zero polynomial, index i >= 1 is x^(i-1) mod generator
    representations: Vec<Polynomial<Fp<P>>>,
    /// Base-P packing of each representation, mapped back to its index
    indices: HashMap<u64, u32>,
    /// Entry i is the index of (element i) + 1
    zech_logarithms: Vec<u32>,
}

impl<const P: u32> ExtendedField<P> {
    /// Builds the field and its lookup tables
    ///
    /// The generator must be irreducible over GF(P) and `x` must be
    /// primitive modulo it. Both conditions are verified: a generator that
    /// fails them yields [`FieldError::InvalidGenerator`].
    pub fn new(generator: Polynomial<Fp<P>>) -> FieldResult<Self> {
        Self::build(generator).map_err(|err| {
            warn!("rejected generator over GF({}): {}", P, err);
            err
        })
    }
    
    fn build(generator: Polynomial<Fp<P>>) -> FieldResult<Self> {
        if !is_prime(P as u64) {
            return Err(FieldError::NonPrimeModulus);
        }
        
        let extension_order = generator.degree();
        if extension_order == 0 {
            return Err(FieldError::InvalidGenerator(format!(
                "{} has degree 0",
                generator
            )));
        }
        
        let size = field_size(P as u64, extension_order)
            .filter(|&size| size <= MAX_FIELD_SIZE)
            .ok_or_else(|| {
                FieldError::InvalidGenerator(format!(
                    "GF({}^{}) has more than {} elements",
                    P, extension_order, MAX_FIELD_SIZE
                ))
            })?;
        
        trace!("building polynomial representations of GF({}^{})", P, extension_order);
        let representations = build_representations(&generator, size)?;
        
        let packed: Vec<u64> = representations.iter().map(pack::<P>).collect();
        let indices = index_representations(&packed, &representations)?;
        
        trace!("building Zech logarithm table of GF({}^{})", P, extension_order);
        let zech_logarithms = build_zech_logarithms::<P>(&packed, &indices)?;
        
        debug!(
            "constructed GF({}^{}) with {} elements from generator {}",
            P, extension_order, size, generator
        );
        
        Ok(Self {
            generator,
            extension_order,
            size,
            representations,
            indices,
            zech_logarithms,
        })
    }
    
    pub fn characteristic(&self) -> u32 {
        P
    }
    
    /// Degree n of the extension
    pub fn extension_order(&self) -> usize {
        self.extension_order
    }
    
    /// Number of elements, P^n
    pub fn size(&self) -> u32 {
        self.size
    }
    
    pub fn generator(&self) -> &Polynomial<Fp<P>> {
        &self.generator
    }
    
    pub fn representations(&self) -> &[Polynomial<Fp<P>>] {
        &self.representations
    }
    
    pub fn representation(&self, index: u32) -> FieldResult<&Polynomial<Fp<P>>> {
        self.check_index(index)?;
        Ok(&self.representations[index as usize])
    }
    
    pub fn zech_logarithms(&self) -> &[u32] {
        &self.zech_logarithms
    }
    
    /// Order of the multiplicative group, P^n - 1
    fn group_order(&self) -> u64 {
        self.size as u64 - 1
    }
    
    fn check_index(&self, index: u32) -> FieldResult<()> {
        if index >= self.size {
            return Err(FieldError::InvalidElement {
                index: index as u64,
                size: self.size,
            });
        }
        Ok(())
    }
    
    /// Element with the given table index
    pub fn element(&self, index: u32) -> FieldResult<ExtendedFieldElement<'_, P>> {
        self.check_index(index)?;
        Ok(ExtendedFieldElement::from_index(index, self))
    }
    
    pub fn zero(&self) -> ExtendedFieldElement<'_, P> {
        ExtendedFieldElement::from_index(0, self)
    }
    
    pub fn one(&self) -> ExtendedFieldElement<'_, P> {
        ExtendedFieldElement::from_index(1, self)
    }
    
    /// `alpha^exp`, with the exponent taken modulo P^n - 1
    pub fn primitive_power(&self, exp: u64) -> ExtendedFieldElement<'_, P> {
        let index = (exp % self.group_order()) as u32 + 1;
        ExtendedFieldElement::from_index(index, self)
    }
    
    /// Element represented by `poly`, reduced modulo the generator first
    pub fn element_from_polynomial(
        &self,
        poly: &Polynomial<Fp<P>>,
    ) -> FieldResult<ExtendedFieldElement<'_, P>> {
        let reduced = poly.modulo(&self.generator)?;
        let packed = pack(&reduced);
        let index = self.indices.get(&packed).copied().ok_or(FieldError::InvalidElement {
            index: packed,
            size: self.size,
        })?;
        Ok(ExtendedFieldElement::from_index(index, self))
    }
    
    /// Iterates over all elements in index order
    pub fn elements(&self) -> impl Iterator<Item = ExtendedFieldElement<'_, P>> + '_ {
        (0..self.size).map(move |index| ExtendedFieldElement::from_index(index, self))
    }
    
    /// Generates a uniformly random element
    pub fn random_element<R: Rng + ?Sized>(&self, rng: &mut R) -> ExtendedFieldElement<'_, P> {
        ExtendedFieldElement::from_index(rng.gen_range(0..self.size), self)
    }
    
    /// Sum of two elements through the Zech logarithm table
    ///
    /// For nonzero `alpha^i` and `alpha^j` with `i >= j`,
    /// `alpha^i + alpha^j = alpha^j * (alpha^(i - j) + 1) = alpha^(j + Z(i - j))`.
    pub fn add<'f>(
        &'f self,
        a: ExtendedFieldElement<'f, P>,
        b: ExtendedFieldElement<'f, P>,
    ) -> ExtendedFieldElement<'f, P> {
        debug_assert!(std::ptr::eq(a.field(), self) && std::ptr::eq(b.field(), self));
        
        if a.is_zero() {
            return b;
        }
        if b.is_zero() {
            return a;
        }
        
        let (low, high) = if a.value() <= b.value() {
            (a.value(), b.value())
        } else {
            (b.value(), a.value())
        };
        
        // alpha^(high - low) sits at index high - low + 1
        let shifted = self.zech_logarithms[(high - low + 1) as usize];
        if shifted == 0 {
            // alpha^(high - low) = -1, so the operands cancel
            return self.zero();
        }
        
        let exponent = (low as u64 - 1 + shifted as u64 - 1) % self.group_order();
        ExtendedFieldElement::from_index(exponent as u32 + 1, self)
    }
    
    pub fn additive_inverse<'f>(
        &'f self,
        a: ExtendedFieldElement<'f, P>,
    ) -> ExtendedFieldElement<'f, P> {
        if a.is_zero() || P == 2 {
            return a;
        }
        
        // -1 = alpha^((P^n - 1) / 2) in odd characteristic
        let order = self.group_order();
        let exponent = (a.value() as u64 - 1 + order / 2) % order;
        ExtendedFieldElement::from_index(exponent as u32 + 1, self)
    }
    
    pub fn subtract<'f>(
        &'f self,
        a: ExtendedFieldElement<'f, P>,
        b: ExtendedFieldElement<'f, P>,
    ) -> ExtendedFieldElement<'f, P> {
        self.add(a, self.additive_inverse(b))
    }
    
    pub fn multiply<'f>(
        &'f self,
        a: ExtendedFieldElement<'f, P>,
        b: ExtendedFieldElement<'f, P>,
    ) -> ExtendedFieldElement<'f, P> {
        debug_assert!(std::ptr::eq(a.field(), self) && std::ptr::eq(b.field(), self));
        
        if a.is_zero() {
            return a;
        }
        if b.is_zero() {
            return b;
        }
        
        let exponent = (a.value() as u64 - 1 + b.value() as u64 - 1) % self.group_order();
        ExtendedFieldElement::from_index(exponent as u32 + 1, self)
    }
    
    pub fn multiplicative_inverse<'f>(
        &'f self,
        a: ExtendedFieldElement<'f, P>,
    ) -> FieldResult<ExtendedFieldElement<'f, P>> {
        if a.is_zero() {
            return Err(FieldError::DivisionByZero);
        }
        
        let order = self.group_order();
        let exponent = (order - (a.value() as u64 - 1)) % order;
        Ok(ExtendedFieldElement::from_index(exponent as u32 + 1, self))
    }
    
    pub fn divide<'f>(
        &'f self,
        a: ExtendedFieldElement<'f, P>,
        b: ExtendedFieldElement<'f, P>,
    ) -> FieldResult<ExtendedFieldElement<'f, P>> {
        Ok(self.multiply(a, self.multiplicative_inverse(b)?))
    }
    
    /// `a^exp`, with `0^0 = 1`
    pub fn pow<'f>(
        &'f self,
        a: ExtendedFieldElement<'f, P>,
        exp: u64,
    ) -> ExtendedFieldElement<'f, P> {
        if exp == 0 {
            return self.one();
        }
        if a.is_zero() {
            return a;
        }
        
        let order = self.group_order();
        let exponent = (a.value() as u64 - 1) * (exp % order) % order;
        ExtendedFieldElement::from_index(exponent as u32 + 1, self)
    }
}

/// Packs the coefficients of `poly` as base-P digits
fn pack<const P: u32>(poly: &Polynomial<Fp<P>>) -> u64 {
    pack_digits(poly.iter().map(|c| c.value()), P as u64)
}

/// Residues of 0, 1, x, x^2, ..., x^(size-2) modulo the generator
fn build_representations<const P: u32>(
    generator: &Polynomial<Fp<P>>,
    size: u32,
) -> FieldResult<Vec<Polynomial<Fp<P>>>> {
    let x = Polynomial::monomial(1);
    let mut representations = Vec::new();
    representations.try_reserve_exact(size as usize).map_err(|err| {
        FieldError::InvalidGenerator(format!("cannot allocate {} representations: {}", size, err))
    })?;
    representations.push(Polynomial::zero());
    
    let mut power = Polynomial::one().modulo(generator)?;
    for _ in 1..size {
        let next = (&power * &x).modulo(generator)?;
        representations.push(power);
        power = next;
    }
    
    Ok(representations)
}

/// Maps each packed representation to its index, rejecting collisions
///
/// A collision means some power of x repeats before all P^n - 1 nonzero
/// residues are reached, i.e. the generator is reducible or x is not
/// primitive modulo it.
fn index_representations<const P: u32>(
    packed: &[u64],
    representations: &[Polynomial<Fp<P>>],
) -> FieldResult<HashMap<u64, u32>> {
    let mut indices = HashMap::with_capacity(packed.len());
    for (index, &key) in packed.iter().enumerate() {
        if let Some(previous) = indices.insert(key, index as u32) {
            return Err(FieldError::InvalidGenerator(format!(
                "x^{} and {} both reduce to {}; generator is reducible or x is not primitive",
                index - 1,
                match previous {
                    0 => "0".to_string(),
                    p => format!("x^{}", p - 1),
                },
                representations[index]
            )));
        }
    }
    Ok(indices)
}

/// Imamura's construction: the successor of a packed element increments its
/// constant coefficient modulo P, which is adding 1 in the field
fn build_zech_logarithms<const P: u32>(
    packed: &[u64],
    indices: &HashMap<u64, u32>,
) -> FieldResult<Vec<u32>> {
    let successor_index = |key: &u64| {
        indices
            .get(&increment_low_digit(*key, P as u64))
            .copied()
            .ok_or_else(|| {
                FieldError::InvalidGenerator(format!("no element follows packed value {}", key))
            })
    };
    
    #[cfg(feature = "parallel")]
    let zech_logarithms: FieldResult<Vec<u32>> = {
        use rayon::prelude::*;
        packed.par_iter().map(successor_index).collect()
    };
    
    #[cfg(not(feature = "parallel"))]
    let zech_logarithms: FieldResult<Vec<u32>> = packed.iter().map(successor_index).collect();
    
    zech_logarithms
}

#[cfg(test)]
mod tests {
    use super::*;
    
    fn poly<const P: u32>(coefficients: &[u64]) -> Polynomial<Fp<P>> {
        Polynomial::new(coefficients.iter().map(|&c| Fp::new(c)).collect())
    }
    
    #[test]
    fn test_representations_gf4() {
        let field = ExtendedField::<2>::new(poly(&[1, 1, 1])).unwrap();
        let expected = vec![poly(&[0]), poly(&[1]), poly(&[0, 1]), poly(&[1, 1])];
        assert_eq!(field.representations(), &expected[..]);
        assert_eq!(field.zech_logarithms(), &[1, 0, 3, 2]);
    }
    
    #[test]
    fn test_zech_table_gf8() {
        let field = ExtendedField::<2>::new(poly(&[1, 1, 0, 1])).unwrap();
        assert_eq!(field.zech_logarithms(), &[1, 0, 4, 7, 2, 6, 5, 3]);
    }
    
    #[test]
    fn test_zech_entries_add_one() {
        // x^2 + x + 2 over GF(3)
        let field = ExtendedField::<3>::new(poly(&[2, 1, 1])).unwrap();
        let one = Polynomial::one();
        for (index, rep) in field.representations().iter().enumerate() {
            let target = field.zech_logarithms()[index] as usize;
            assert_eq!(&(rep + &one), &field.representations()[target]);
        }
    }
    
    #[test]
    fn test_minus_one_has_zero_zech_entry() {
        let field = ExtendedField::<3>::new(poly(&[2, 1, 1])).unwrap();
        // -1 = alpha^4 in GF(9)
        assert_eq!(field.representation(5).unwrap(), &poly(&[2]));
        let zeros: Vec<usize> = field
            .zech_logarithms()
            .iter()
            .enumerate()
            .filter(|&(_, &z)| z == 0)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(zeros, vec![5]);
    }
    
    #[test]
    fn test_field_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ExtendedField<2>>();
    }
    
    #[test]
    fn test_non_prime_characteristic() {
        let err = ExtendedField::<4>::new(poly(&[1, 1, 1])).unwrap_err();
        assert_eq!(err, FieldError::NonPrimeModulus);
    }
    
    #[test]
    fn test_constant_generator() {
        let err = ExtendedField::<2>::new(poly(&[1])).unwrap_err();
        assert!(matches!(err, FieldError::InvalidGenerator(_)));
    }
}
