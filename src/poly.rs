//! Univariate integer polynomials in two representations.
//!
//! A [DensePolynomial] stores one coefficient per exponent from `0` up to its
//! degree, while a [SparsePolynomial] only stores the non-zero terms and may
//! therefore also hold negative exponents. Both implement [PolynomialOps], and
//! [Polynomial] is the closed union of the two.
//!
//! Arithmetic between the two forms always produces a result in the form of the
//! receiver. A sparse operand is converted to dense form first when the receiver
//! is dense, which fails if the operand has a negative exponent.
//!
//! # Examples
//! ```
//! use intpoly::{DensePolynomial, PolynomialOps, SparsePolynomial};
//!
//! let a: DensePolynomial = "4x^2 + 8x + 2".parse().unwrap();
//! let b: SparsePolynomial = "2x + 3".parse().unwrap();
//!
//! assert_eq!(a.multiply(&b).unwrap().to_string(), "8x^3 + 28x^2 + 28x + 6");
//! assert_eq!(b.multiply(&a).unwrap().to_string(), "8x^3 + 28x^2 + 28x + 6");
//! ```

pub mod convert;
pub mod dense;
pub mod sparse;

use std::{fmt, str::FromStr};

use crate::{
    error::{PolynomialError, Representation},
    parser::ExponentDomain,
    Coefficient, Exponent,
};

pub use self::dense::DensePolynomial;
pub use self::sparse::SparsePolynomial;

/// The operations shared by every polynomial representation.
///
/// Every operation leaves `self` and its operand untouched and returns a
/// fresh value in the representation of `self`.
pub trait PolynomialOps: Sized + fmt::Display {
    /// Returns true if `input` is a canonical string this representation accepts.
    fn well_formed(input: &str) -> bool;

    fn representation(&self) -> Representation;

    /// The largest exponent with a non-zero coefficient, or `0` for the zero polynomial.
    fn degree(&self) -> Exponent;

    /// The coefficient of the term with the given exponent, `0` if there is none.
    fn coefficient(&self, exponent: Exponent) -> Result<Coefficient, PolynomialError>;

    fn is_zero(&self) -> bool;

    fn add<'a>(&self, other: impl Into<Operand<'a>>) -> Result<Self, PolynomialError>;

    fn subtract<'a>(&self, other: impl Into<Operand<'a>>) -> Result<Self, PolynomialError>;

    fn multiply<'a>(&self, other: impl Into<Operand<'a>>) -> Result<Self, PolynomialError>;

    fn negate(&self) -> Self;

    /// Compare with a polynomial of the same representation. Comparing against
    /// the other representation is an error rather than `false`.
    fn try_eq<'a>(&self, other: impl Into<Operand<'a>>) -> Result<bool, PolynomialError>;

    fn to_canonical_string(&self) -> String {
        self.to_string()
    }
}

/// Implement [PolynomialOps] by forwarding to the inherent methods of the same name.
macro_rules! forward_polynomial_ops {
    ($t:ty, $domain:expr) => {
        impl $crate::poly::PolynomialOps for $t {
            fn well_formed(input: &str) -> bool {
                $crate::parser::well_formed(input, $domain)
            }

            #[inline]
            fn representation(&self) -> $crate::error::Representation {
                <$t>::representation(self)
            }

            #[inline]
            fn degree(&self) -> $crate::Exponent {
                <$t>::degree(self)
            }

            #[inline]
            fn coefficient(
                &self,
                exponent: $crate::Exponent,
            ) -> Result<$crate::Coefficient, $crate::error::PolynomialError> {
                <$t>::coefficient(self, exponent)
            }

            #[inline]
            fn is_zero(&self) -> bool {
                <$t>::is_zero(self)
            }

            fn add<'a>(
                &self,
                other: impl Into<$crate::poly::Operand<'a>>,
            ) -> Result<Self, $crate::error::PolynomialError> {
                <$t>::add(self, other)
            }

            fn subtract<'a>(
                &self,
                other: impl Into<$crate::poly::Operand<'a>>,
            ) -> Result<Self, $crate::error::PolynomialError> {
                <$t>::subtract(self, other)
            }

            fn multiply<'a>(
                &self,
                other: impl Into<$crate::poly::Operand<'a>>,
            ) -> Result<Self, $crate::error::PolynomialError> {
                <$t>::multiply(self, other)
            }

            fn negate(&self) -> Self {
                <$t>::negate(self)
            }

            fn try_eq<'a>(
                &self,
                other: impl Into<$crate::poly::Operand<'a>>,
            ) -> Result<bool, $crate::error::PolynomialError> {
                <$t>::try_eq(self, other)
            }
        }
    };
}

forward_polynomial_ops!(DensePolynomial, ExponentDomain::NonNegative);
forward_polynomial_ops!(SparsePolynomial, ExponentDomain::Any);
forward_polynomial_ops!(Polynomial, ExponentDomain::Any);

/// A borrowed polynomial of either representation, used as the right-hand
/// side of an operation.
#[derive(Debug, Copy, Clone)]
pub enum Operand<'a> {
    Dense(&'a DensePolynomial),
    Sparse(&'a SparsePolynomial),
}

impl Operand<'_> {
    pub fn representation(&self) -> Representation {
        match self {
            Operand::Dense(_) => Representation::Dense,
            Operand::Sparse(_) => Representation::Sparse,
        }
    }
}

impl<'a> From<&'a DensePolynomial> for Operand<'a> {
    fn from(p: &'a DensePolynomial) -> Self {
        Operand::Dense(p)
    }
}

impl<'a> From<&'a SparsePolynomial> for Operand<'a> {
    fn from(p: &'a SparsePolynomial) -> Self {
        Operand::Sparse(p)
    }
}

impl<'a> From<&'a Polynomial> for Operand<'a> {
    fn from(p: &'a Polynomial) -> Self {
        match p {
            Polynomial::Dense(d) => Operand::Dense(d),
            Polynomial::Sparse(s) => Operand::Sparse(s),
        }
    }
}

/// A binary arithmetic operation between two polynomials.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BinaryOp::Add => f.write_str("+"),
            BinaryOp::Subtract => f.write_str("-"),
            BinaryOp::Multiply => f.write_str("*"),
        }
    }
}

/// A polynomial in either representation.
///
/// Equality is only available through [try_eq](Polynomial::try_eq), which
/// reports a comparison between different representations as an error.
#[derive(Clone, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Polynomial {
    Dense(DensePolynomial),
    Sparse(SparsePolynomial),
}

impl Polynomial {
    /// Parse a canonical string into the requested representation.
    pub fn parse(
        input: &str,
        representation: Representation,
    ) -> Result<Polynomial, PolynomialError> {
        match representation {
            Representation::Dense => Ok(Polynomial::Dense(input.parse()?)),
            Representation::Sparse => Ok(Polynomial::Sparse(input.parse()?)),
        }
    }

    #[inline]
    pub fn representation(&self) -> Representation {
        match self {
            Polynomial::Dense(_) => Representation::Dense,
            Polynomial::Sparse(_) => Representation::Sparse,
        }
    }

    #[inline]
    pub fn as_operand(&self) -> Operand<'_> {
        self.into()
    }

    pub fn degree(&self) -> Exponent {
        match self {
            Polynomial::Dense(d) => d.degree(),
            Polynomial::Sparse(s) => s.degree(),
        }
    }

    pub fn coefficient(&self, exponent: Exponent) -> Result<Coefficient, PolynomialError> {
        match self {
            Polynomial::Dense(d) => d.coefficient(exponent),
            Polynomial::Sparse(s) => s.coefficient(exponent),
        }
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Polynomial::Dense(d) => d.is_zero(),
            Polynomial::Sparse(s) => s.is_zero(),
        }
    }

    pub fn add<'a>(&self, other: impl Into<Operand<'a>>) -> Result<Polynomial, PolynomialError> {
        self.combine(BinaryOp::Add, Some(other))
    }

    pub fn subtract<'a>(
        &self,
        other: impl Into<Operand<'a>>,
    ) -> Result<Polynomial, PolynomialError> {
        self.combine(BinaryOp::Subtract, Some(other))
    }

    pub fn multiply<'a>(
        &self,
        other: impl Into<Operand<'a>>,
    ) -> Result<Polynomial, PolynomialError> {
        self.combine(BinaryOp::Multiply, Some(other))
    }

    /// Apply `op` with `self` on the left. The result has the representation of `self`.
    ///
    /// A missing right-hand side is reported as [PolynomialError::MissingOperand].
    pub fn combine<'a, O: Into<Operand<'a>>>(
        &self,
        op: BinaryOp,
        other: Option<O>,
    ) -> Result<Polynomial, PolynomialError> {
        let other = other.ok_or(PolynomialError::MissingOperand)?.into();

        Ok(match (self, op) {
            (Polynomial::Dense(d), BinaryOp::Add) => Polynomial::Dense(d.add(other)?),
            (Polynomial::Dense(d), BinaryOp::Subtract) => Polynomial::Dense(d.subtract(other)?),
            (Polynomial::Dense(d), BinaryOp::Multiply) => Polynomial::Dense(d.multiply(other)?),
            (Polynomial::Sparse(s), BinaryOp::Add) => Polynomial::Sparse(s.add(other)?),
            (Polynomial::Sparse(s), BinaryOp::Subtract) => Polynomial::Sparse(s.subtract(other)?),
            (Polynomial::Sparse(s), BinaryOp::Multiply) => Polynomial::Sparse(s.multiply(other)?),
        })
    }

    pub fn negate(&self) -> Polynomial {
        match self {
            Polynomial::Dense(d) => Polynomial::Dense(d.negate()),
            Polynomial::Sparse(s) => Polynomial::Sparse(s.negate()),
        }
    }

    pub fn try_eq<'a>(&self, other: impl Into<Operand<'a>>) -> Result<bool, PolynomialError> {
        match self {
            Polynomial::Dense(d) => d.try_eq(other),
            Polynomial::Sparse(s) => s.try_eq(other),
        }
    }

    /// Convert to dense form. Fails if there is a negative exponent.
    pub fn to_dense(&self) -> Result<DensePolynomial, PolynomialError> {
        match self {
            Polynomial::Dense(d) => Ok(d.clone()),
            Polynomial::Sparse(s) => DensePolynomial::try_from(s),
        }
    }

    pub fn to_sparse(&self) -> SparsePolynomial {
        match self {
            Polynomial::Dense(d) => SparsePolynomial::from(d),
            Polynomial::Sparse(s) => s.clone(),
        }
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Polynomial::Dense(d) => fmt::Display::fmt(d, f),
            Polynomial::Sparse(s) => fmt::Display::fmt(s, f),
        }
    }
}

/// Parses into the sparse representation, which accepts every canonical string.
impl FromStr for Polynomial {
    type Err = PolynomialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Polynomial::parse(s, Representation::Sparse)
    }
}

impl From<DensePolynomial> for Polynomial {
    fn from(p: DensePolynomial) -> Self {
        Polynomial::Dense(p)
    }
}

impl From<SparsePolynomial> for Polynomial {
    fn from(p: SparsePolynomial) -> Self {
        Polynomial::Sparse(p)
    }
}
