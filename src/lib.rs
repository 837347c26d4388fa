//! Univariate polynomials with integer coefficients, in a dense and a sparse
//! representation.
//!
//! Polynomials are written in a canonical notation such as `5x^7 + 4x^3 + -2x + 8`
//! and support addition, subtraction, multiplication, negation and checked
//! equality. The sparse representation also allows negative exponents.
//!
//! For example:
//!
//! ```
//! use intpoly::{DensePolynomial, PolynomialOps, SparsePolynomial};
//!
//! let a: DensePolynomial = "12x^4 + 8x^3 + 5x^2 + 2x + 7".parse().unwrap();
//! let b: DensePolynomial = "3x^4 + 4x^3 + 6x".parse().unwrap();
//! assert_eq!(a.add(&b).unwrap().to_string(), "15x^4 + 12x^3 + 5x^2 + 8x + 7");
//!
//! let c: SparsePolynomial = "4x^2 + 8x + 2".parse().unwrap();
//! let d: SparsePolynomial = "12x^2 + 3x^-2".parse().unwrap();
//! assert_eq!(
//!     c.multiply(&d).unwrap().to_string(),
//!     "48x^4 + 96x^3 + 24x^2 + 12 + 24x^-1 + 6x^-2"
//! );
//!
//! // a dense polynomial cannot absorb a negative exponent
//! let e: SparsePolynomial = "7x^4 + 2x + 5x^-2".parse().unwrap();
//! assert!(a.add(&e).is_err());
//! ```

pub mod error;
pub mod parser;
pub mod poly;
pub mod printer;

#[cfg(test)]
mod proptests;

/// The integer type of a coefficient.
pub type Coefficient = i64;
/// The integer type of an exponent.
pub type Exponent = i64;

pub use error::{PolynomialError, Representation};
pub use poly::{BinaryOp, DensePolynomial, Operand, Polynomial, PolynomialOps, SparsePolynomial};
