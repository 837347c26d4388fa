//! Conversion between the dense and the sparse representation.
//!
//! Every dense polynomial has a sparse counterpart. The reverse direction only
//! exists when the sparse polynomial has no negative exponents, which is checked
//! before any coefficient is copied.

use tracing::debug;

use crate::{error::PolynomialError, Exponent};

use super::{dense, DensePolynomial, SparsePolynomial};

impl TryFrom<&SparsePolynomial> for DensePolynomial {
    type Error = PolynomialError;

    fn try_from(s: &SparsePolynomial) -> Result<Self, Self::Error> {
        if let Some((exponent, _)) = s.terms().find(|(e, _)| *e < 0) {
            debug!(
                "Cannot convert {} to a dense polynomial: negative exponent {}",
                s, exponent
            );
            return Err(PolynomialError::IncompatibleOperand { exponent });
        }

        let mut coefficients = dense::zeroed(s.degree())?;
        for (e, c) in s.terms() {
            coefficients[e as usize] = c;
        }

        Ok(DensePolynomial::from_coefficients(coefficients))
    }
}

impl TryFrom<SparsePolynomial> for DensePolynomial {
    type Error = PolynomialError;

    #[inline]
    fn try_from(s: SparsePolynomial) -> Result<Self, Self::Error> {
        DensePolynomial::try_from(&s)
    }
}

impl From<&DensePolynomial> for SparsePolynomial {
    fn from(d: &DensePolynomial) -> Self {
        SparsePolynomial::from_terms(
            d.coefficients()
                .iter()
                .enumerate()
                .filter(|(_, c)| **c != 0)
                .map(|(e, c)| (e as Exponent, *c)),
        )
    }
}

impl From<DensePolynomial> for SparsePolynomial {
    #[inline]
    fn from(d: DensePolynomial) -> Self {
        SparsePolynomial::from(&d)
    }
}
