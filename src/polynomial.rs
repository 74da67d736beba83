use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use crate::arithmetic::traits::Field;
use crate::field::{FieldError, FieldResult};

/// Represents a univariate dense polynomial over a field
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Polynomial<F: Field> {
    /// Coefficients of the polynomial in ascending order of degree
    coefficients: Vec<F>,
}

impl<F: Field> Polynomial<F> {
    /// Creates a new polynomial from its coefficients
    pub fn new(mut coefficients: Vec<F>) -> Self {
        // Remove trailing zeros
        while coefficients.len() > 1 && coefficients.last().map_or(false, |c| c.is_zero()) {
            coefficients.pop();
        }
        // Ensure at least one coefficient (zero polynomial has one zero coefficient)
        if coefficients.is_empty() {
            coefficients.push(F::zero());
        }
        Self { coefficients }
    }

    /// Returns the degree of the polynomial
    ///
    /// The zero polynomial reports degree 0, same as a nonzero constant.
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Returns a reference to the polynomial's coefficients
    pub fn coefficients(&self) -> &[F] {
        &self.coefficients
    }

    /// Iterates over coefficients from the constant term upwards
    pub fn iter(&self) -> std::slice::Iter<'_, F> {
        self.coefficients.iter()
    }

    /// Coefficient of the highest power
    pub fn leading_coefficient(&self) -> F {
        self.coefficients[self.degree()]
    }

    /// Creates a zero polynomial
    pub fn zero() -> Self {
        Self::new(vec![F::zero()])
    }

    /// Creates the constant polynomial 1
    pub fn one() -> Self {
        Self::new(vec![F::one()])
    }

    /// Creates `x^degree`
    pub fn monomial(degree: usize) -> Self {
        let mut coefficients = vec![F::zero(); degree + 1];
        coefficients[degree] = F::one();
        Self { coefficients }
    }

    /// Returns true if this is the zero polynomial
    pub fn is_zero(&self) -> bool {
        self.degree() == 0 && self.coefficients[0].is_zero()
    }

    /// Evaluates the polynomial at `x` using Horner's method
    pub fn evaluate(&self, x: &F) -> F {
        evaluate_polynomial(self, x)
    }

    /// Computes the formal derivative of the polynomial
    pub fn derivative(&self) -> Self {
        if self.degree() == 0 {
            return Self::zero();
        }

        let mut result = Vec::with_capacity(self.degree());
        let mut power = F::zero();
        for coeff in self.coefficients.iter().skip(1) {
            power = power + F::one();
            result.push(*coeff * power);
        }
        Self::new(result)
    }

    /// Long division, returning `(quotient, remainder)`
    pub fn div_rem(&self, divisor: &Self) -> FieldResult<(Self, Self)> {
        if divisor.is_zero() {
            return Err(FieldError::DivisionByZero);
        }

        if self.degree() < divisor.degree() {
            return Ok((Self::zero(), self.clone()));
        }

        let lead_inv = divisor.leading_coefficient().inverse()?;
        let divisor_degree = divisor.degree();
        let mut remainder = self.coefficients.clone();
        let mut quotient = vec![F::zero(); self.degree() - divisor_degree + 1];

        for shift in (0..quotient.len()).rev() {
            let coeff = remainder[shift + divisor_degree] * lead_inv;
            if coeff.is_zero() {
                continue;
            }
            quotient[shift] = coeff;
            for (i, d) in divisor.coefficients.iter().enumerate() {
                remainder[shift + i] = remainder[shift + i] - coeff * *d;
            }
        }

        remainder.truncate(divisor_degree.max(1));
        Ok((Self::new(quotient), Self::new(remainder)))
    }

    /// Reduces this polynomial modulo `divisor`
    pub fn modulo(&self, divisor: &Self) -> FieldResult<Self> {
        Ok(self.div_rem(divisor)?.1)
    }
}

impl<'a, F: Field> IntoIterator for &'a Polynomial<F> {
    type Item = &'a F;
    type IntoIter = std::slice::Iter<'a, F>;

    fn into_iter(self) -> Self::IntoIter {
        self.coefficients.iter()
    }
}

impl<'a, F: Field> Add for &'a Polynomial<F> {
    type Output = Polynomial<F>;

    fn add(self, other: Self) -> Self::Output {
        let max_len = self.coefficients.len().max(other.coefficients.len());
        let mut result = vec![F::zero(); max_len];

        for (i, coeff) in self.coefficients.iter().enumerate() {
            result[i] = *coeff;
        }

        for (i, coeff) in other.coefficients.iter().enumerate() {
            result[i] = result[i] + *coeff;
        }

        Polynomial::new(result)
    }
}

impl<'a, F: Field> Sub for &'a Polynomial<F> {
    type Output = Polynomial<F>;

    fn sub(self, other: Self) -> Self::Output {
        self + &(-other)
    }
}

impl<'a, F: Field> Neg for &'a Polynomial<F> {
    type Output = Polynomial<F>;

    fn neg(self) -> Self::Output {
        Polynomial::new(self.coefficients.iter().map(|c| -*c).collect())
    }
}

impl<'a, F: Field> Mul for &'a Polynomial<F> {
    type Output = Polynomial<F>;

    fn mul(self, other: Self) -> Self::Output {
        if self.is_zero() || other.is_zero() {
            return Polynomial::zero();
        }

        let n = self.coefficients.len();
        let m = other.coefficients.len();
        let mut result = vec![F::zero(); n + m - 1];

        for i in 0..n {
            for j in 0..m {
                let prod = self.coefficients[i] * other.coefficients[j];
                result[i + j] = result[i + j] + prod;
            }
        }

        Polynomial::new(result)
    }
}

impl<F: Field> fmt::Display for Polynomial<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        let mut first = true;
        for (power, coeff) in self.coefficients.iter().enumerate().rev() {
            if coeff.is_zero() {
                continue;
            }
            if !first {
                write!(f, " + ")?;
            }
            first = false;
            match (power, coeff.is_one()) {
                (0, _) => write!(f, "{}", coeff)?,
                (1, true) => write!(f, "x")?,
                (1, false) => write!(f, "{}x", coeff)?,
                (_, true) => write!(f, "x^{}", power)?,
                (_, false) => write!(f, "{}x^{}", coeff, power)?,
            }
        }
        Ok(())
    }
}

/// Evaluates a polynomial at a given point using Horner's method
pub fn evaluate_polynomial<F: Field>(poly: &Polynomial<F>, x: &F) -> F {
    let mut result = F::zero();
    for coeff in poly.coefficients.iter().rev() {
        result = result * *x + *coeff;
    }
    result
}
