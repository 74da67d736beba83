use rslib::{FieldError, Fp};
use rslib::polynomial::{Polynomial, evaluate_polynomial};

type F17 = Fp<17>;
type F2 = Fp<2>;

fn poly<const P: u32>(coefficients: &[u64]) -> Polynomial<Fp<P>> {
    Polynomial::new(coefficients.iter().map(|&c| Fp::new(c)).collect())
}

#[test]
fn test_polynomial_creation() {
    let p: Polynomial<F17> = poly(&[1, 0, 0, 4]);  // 4x^3 + 1
    assert_eq!(p.degree(), 3);
    assert_eq!(p.leading_coefficient(), F17::new(4));
}

#[test]
fn test_polynomial_trailing_zeros_trimmed() {
    let p: Polynomial<F17> = poly(&[1, 2, 0, 0]);
    assert_eq!(p.degree(), 1);
    assert_eq!(p.coefficients(), &[F17::new(1), F17::new(2)]);

    let zero: Polynomial<F17> = poly(&[0, 17, 34]);
    assert!(zero.is_zero());
    assert_eq!(zero, Polynomial::zero());
    assert_eq!(zero.degree(), 0);
}

#[test]
fn test_polynomial_evaluation() {
    let p: Polynomial<F17> = poly(&[1, 2, 3]);  // 3x^2 + 2x + 1

    // At x = 2: 3(2^2) + 2(2) + 1 = 12 + 4 + 1 = 17 = 0 (mod 17)
    assert_eq!(evaluate_polynomial(&p, &F17::new(2)), F17::new(0));
    assert_eq!(p.evaluate(&F17::new(1)), F17::new(6));
}

#[test]
fn test_polynomial_addition() {
    let p1: Polynomial<F17> = poly(&[1, 2]);  // 2x + 1
    let p2: Polynomial<F17> = poly(&[3, 4]);  // 4x + 3

    assert_eq!(&p1 + &p2, poly(&[4, 6]));
}

#[test]
fn test_polynomial_addition_cancels_leading_terms() {
    let p1: Polynomial<F17> = poly(&[1, 2, 5]);
    let p2: Polynomial<F17> = poly(&[3, 4, 12]);

    let sum = &p1 + &p2;
    assert_eq!(sum, poly(&[4, 6]));
    assert_eq!(sum.degree(), 1);
}

#[test]
fn test_polynomial_subtraction_and_negation() {
    let p1: Polynomial<F17> = poly(&[1, 2]);
    let p2: Polynomial<F17> = poly(&[3, 4]);

    assert_eq!(&p1 - &p2, poly(&[15, 15]));
    assert!((&p1 - &p1).is_zero());
    assert_eq!(-&p1, poly(&[16, 15]));
}

#[test]
fn test_polynomial_multiplication() {
    let p1: Polynomial<F17> = poly(&[1, 2]);  // 2x + 1
    let p2: Polynomial<F17> = poly(&[3, 4]);  // 4x + 3

    // (2x + 1)(4x + 3) = 8x^2 + 10x + 3
    assert_eq!(&p1 * &p2, poly(&[3, 10, 8]));
    assert!((&p1 * &Polynomial::zero()).is_zero());
}

#[test]
fn test_polynomial_properties() {
    let p1: Polynomial<F17> = poly(&[1, 2]);
    let p2: Polynomial<F17> = poly(&[3, 4]);
    let p3: Polynomial<F17> = poly(&[5, 6]);

    // Associativity: (p1 + p2) + p3 = p1 + (p2 + p3)
    assert_eq!(&(&p1 + &p2) + &p3, &p1 + &(&p2 + &p3));

    // Distributivity: p1 * (p2 + p3) = (p1 * p2) + (p1 * p3)
    assert_eq!(&p1 * &(&p2 + &p3), &(&p1 * &p2) + &(&p1 * &p3));
}

#[test]
fn test_polynomial_division() {
    // (x^3 + 2x + 5) = (x + 1)(x^2 + 16x + 3) + 2 over GF(17)
    let dividend: Polynomial<F17> = poly(&[5, 2, 0, 1]);
    let divisor: Polynomial<F17> = poly(&[1, 1]);

    let (quotient, remainder) = dividend.div_rem(&divisor).unwrap();
    assert_eq!(quotient, poly(&[3, 16, 1]));
    assert_eq!(remainder, poly(&[2]));
    assert_eq!(&(&quotient * &divisor) + &remainder, dividend);
}

#[test]
fn test_polynomial_division_non_monic() {
    let dividend: Polynomial<F17> = poly(&[7, 3, 9, 4, 11]);
    let divisor: Polynomial<F17> = poly(&[2, 0, 5]);

    let (quotient, remainder) = dividend.div_rem(&divisor).unwrap();
    assert!(remainder.degree() < divisor.degree());
    assert_eq!(&(&quotient * &divisor) + &remainder, dividend);
}

#[test]
fn test_polynomial_modulo_small_dividend() {
    let dividend: Polynomial<F17> = poly(&[1, 1]);
    let divisor: Polynomial<F17> = poly(&[1, 0, 1]);

    assert_eq!(dividend.modulo(&divisor).unwrap(), dividend);
}

#[test]
fn test_polynomial_modulo_binary() {
    // x^3 mod (x^3 + x + 1) = x + 1 over GF(2)
    let cube: Polynomial<F2> = Polynomial::monomial(3);
    let generator: Polynomial<F2> = poly(&[1, 1, 0, 1]);

    assert_eq!(cube.modulo(&generator).unwrap(), poly(&[1, 1]));
    assert!(generator.modulo(&generator).unwrap().is_zero());
}

#[test]
fn test_polynomial_division_by_zero() {
    let p: Polynomial<F17> = poly(&[1, 2]);
    assert_eq!(p.div_rem(&Polynomial::zero()), Err(FieldError::DivisionByZero));
}

#[test]
fn test_polynomial_derivative() {
    let p: Polynomial<F17> = poly(&[1, 2, 3]);  // 3x^2 + 2x + 1

    // Derivative: 6x + 2
    assert_eq!(p.derivative(), poly(&[2, 6]));
    assert!(poly::<17>(&[9]).derivative().is_zero());
}

#[test]
fn test_polynomial_derivative_characteristic_two() {
    // d/dx (x^3 + x^2 + 1) = 3x^2 + 2x = x^2 over GF(2)
    let p: Polynomial<F2> = poly(&[1, 0, 1, 1]);
    assert_eq!(p.derivative(), poly(&[0, 0, 1]));
}

#[test]
fn test_polynomial_display() {
    let p: Polynomial<F17> = poly(&[3, 1, 0, 5]);
    assert_eq!(p.to_string(), "5x^3 + x + 3");
    assert_eq!(Polynomial::<F17>::zero().to_string(), "0");
}
