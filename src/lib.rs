//! rslib: Galois field arithmetic for Reed-Solomon codes
//! 
//! This library builds extension fields GF(p^n) from a generator polynomial
//! and performs field arithmetic through discrete-log and Zech logarithm
//! tables, so that encoders and decoders never touch polynomials directly.

pub mod arithmetic;
pub mod field;
pub mod util;
pub mod polynomial;

// Re-export commonly used types
pub use arithmetic::traits::Field;
pub use field::{FieldError, FieldResult};
pub use field::fp::Fp;
pub use field::extension::{ExtendedField, MAX_FIELD_SIZE};
pub use field::element::ExtendedFieldElement;
pub use polynomial::Polynomial;

/// Feature flags
#[cfg(feature = "parallel")]
pub use rayon;
