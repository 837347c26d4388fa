//! Errors reported by parsing, arithmetic and comparison of polynomials.

use std::fmt;

use thiserror::Error;

use crate::Exponent;

/// The two internal forms a polynomial can take.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Representation {
    Dense,
    Sparse,
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Representation::Dense => f.write_str("dense"),
            Representation::Sparse => f.write_str("sparse"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolynomialError {
    #[error("invalid character {found:?} at position {position}")]
    InvalidCharacter { found: char, position: usize },
    #[error("malformed term {0:?}")]
    MalformedTerm(String),
    #[error("term {0:?} has a zero coefficient")]
    ZeroCoefficient(String),
    #[error("exponent {next} follows {previous}: terms must be in descending exponent order")]
    OutOfOrder { previous: Exponent, next: Exponent },
    #[error("exponent {0} appears more than once")]
    DuplicateExponent(Exponent),
    #[error("dense polynomials cannot have negative exponents (found {0})")]
    NegativeExponent(Exponent),
    #[error("degree {0} is too large for a dense polynomial")]
    DegreeTooLarge(Exponent),
    #[error("missing operand")]
    MissingOperand,
    #[error("cannot compare a {receiver} polynomial with a {operand} polynomial")]
    RepresentationMismatch {
        receiver: Representation,
        operand: Representation,
    },
    #[error("dense polynomials cannot represent the sparse operand term with exponent {exponent}")]
    IncompatibleOperand { exponent: Exponent },
    #[error("dense polynomials have no coefficient at negative exponent {0}")]
    NegativeExponentQuery(Exponent),
}

impl PolynomialError {
    /// Returns true if the input text is not a canonical string for the
    /// requested representation.
    ///
    /// [PolynomialError::DegreeTooLarge] is not included: it reports a capacity
    /// limit and also arises when a sparse operand is converted to dense form.
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            PolynomialError::InvalidCharacter { .. }
                | PolynomialError::MalformedTerm(_)
                | PolynomialError::ZeroCoefficient(_)
                | PolynomialError::OutOfOrder { .. }
                | PolynomialError::DuplicateExponent(_)
                | PolynomialError::NegativeExponent(_)
        )
    }

    pub(crate) fn malformed(term: &str) -> Self {
        PolynomialError::MalformedTerm(term.to_string())
    }
}

