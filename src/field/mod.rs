//! Finite field implementations for Reed-Solomon arithmetic
//! 
//! `fp` provides the prime field GF(p) used for polynomial coefficients,
//! `extension` builds GF(p^n) and its lookup tables, and `element` is the
//! lightweight value handed out to callers.

pub mod fp;
pub mod extension;
pub mod element;

/// Error types for field operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Division by zero")]
    DivisionByZero,
    
    #[error("Invalid field element: index {index} outside field of size {size}")]
    InvalidElement { index: u64, size: u32 },
    
    #[error("Invalid generator polynomial: {0}")]
    InvalidGenerator(String),
    
    #[error("Modulus must be prime")]
    NonPrimeModulus,
}

/// Result type for field operations
pub type FieldResult<T> = Result<T, FieldError>;
