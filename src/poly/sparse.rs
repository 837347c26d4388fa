use std::{
    borrow::Cow,
    collections::BTreeMap,
    fmt,
    ops::{Add, Mul, Neg, Sub},
    str::FromStr,
};

use ahash::{HashMap, HashMapExt};
use tracing::trace;

use crate::{
    error::{PolynomialError, Representation},
    parser::{self, ExponentDomain},
    printer,
    Coefficient, Exponent,
};

use super::Operand;

/// A sparse univariate polynomial with integer coefficients.
///
/// Only non-zero terms are stored, keyed by their exponent, which may be
/// negative. The zero polynomial has no terms at all.
///
/// Coefficients and the exponent sums of a product wrap around on `i64` overflow.
#[derive(Clone, Default, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct SparsePolynomial {
    terms: BTreeMap<Exponent, Coefficient>,
}

impl SparsePolynomial {
    #[inline]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Construct a polynomial from `(exponent, coefficient)` pairs in any order.
    /// Pairs with the same exponent are summed and zero terms are dropped.
    pub fn from_terms<I: IntoIterator<Item = (Exponent, Coefficient)>>(terms: I) -> Self {
        let mut map: BTreeMap<Exponent, Coefficient> = BTreeMap::new();
        for (e, c) in terms {
            let entry = map.entry(e).or_insert(0);
            *entry = entry.wrapping_add(c);
        }
        Self::from_map(map)
    }

    fn from_map(mut terms: BTreeMap<Exponent, Coefficient>) -> Self {
        terms.retain(|_, c| *c != 0);
        Self { terms }
    }

    /// Parse a canonical string, for example `12x^2 + 3 + 3x^-2`.
    pub fn parse(input: &str) -> Result<Self, PolynomialError> {
        let terms = parser::parse_terms(input, ExponentDomain::Any)?;
        Ok(Self {
            terms: terms.iter().map(|t| (t.exponent, t.coefficient)).collect(),
        })
    }

    /// Returns true if `input` is a canonical string.
    pub fn well_formed(input: &str) -> bool {
        parser::well_formed(input, ExponentDomain::Any)
    }

    #[inline]
    pub fn representation(&self) -> Representation {
        Representation::Sparse
    }

    /// Iterate over the `(exponent, coefficient)` pairs in ascending exponent order.
    pub fn terms(&self) -> impl DoubleEndedIterator<Item = (Exponent, Coefficient)> + '_ {
        self.terms.iter().map(|(e, c)| (*e, *c))
    }

    #[inline]
    pub fn nterms(&self) -> usize {
        self.terms.len()
    }

    /// The largest exponent present. This is negative if every term has a
    /// negative exponent and `0` for the zero polynomial.
    #[inline]
    pub fn degree(&self) -> Exponent {
        self.terms.keys().next_back().copied().unwrap_or(0)
    }

    /// Get the coefficient of `x^exponent`. Any exponent may be queried.
    pub fn coefficient(&self, exponent: Exponent) -> Result<Coefficient, PolynomialError> {
        Ok(self.terms.get(&exponent).copied().unwrap_or(0))
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Compute `self + other`. A dense operand is converted to sparse form first.
    pub fn add<'a>(&self, other: impl Into<Operand<'a>>) -> Result<Self, PolynomialError> {
        let other = Self::resolve(other.into());
        Ok(self.merge(&other, Coefficient::wrapping_add))
    }

    /// Compute `self - other`. A dense operand is converted to sparse form first.
    pub fn subtract<'a>(&self, other: impl Into<Operand<'a>>) -> Result<Self, PolynomialError> {
        let other = Self::resolve(other.into());
        Ok(self.merge(&other, Coefficient::wrapping_sub))
    }

    /// Compute `self * other`. A dense operand is converted to sparse form first.
    pub fn multiply<'a>(&self, other: impl Into<Operand<'a>>) -> Result<Self, PolynomialError> {
        let other = Self::resolve(other.into());
        Ok(self.cross(&other))
    }

    pub fn negate(&self) -> Self {
        Self {
            terms: self.terms.iter().map(|(e, c)| (*e, c.wrapping_neg())).collect(),
        }
    }

    /// Compare two sparse polynomials. Comparing with a dense polynomial is an error.
    pub fn try_eq<'a>(&self, other: impl Into<Operand<'a>>) -> Result<bool, PolynomialError> {
        match other.into() {
            Operand::Sparse(s) => Ok(self == s),
            Operand::Dense(_) => Err(PolynomialError::RepresentationMismatch {
                receiver: Representation::Sparse,
                operand: Representation::Dense,
            }),
        }
    }

    pub fn to_canonical_string(&self) -> String {
        self.to_string()
    }

    fn resolve(other: Operand<'_>) -> Cow<'_, SparsePolynomial> {
        match other {
            Operand::Sparse(s) => Cow::Borrowed(s),
            Operand::Dense(d) => Cow::Owned(SparsePolynomial::from(d)),
        }
    }

    /// Fold every term of `other` into a copy of `self`.
    fn merge(&self, other: &Self, op: impl Fn(Coefficient, Coefficient) -> Coefficient) -> Self {
        let mut terms = self.terms.clone();
        for (e, c) in &other.terms {
            let entry = terms.entry(*e).or_insert(0);
            *entry = op(*entry, *c);
        }
        Self::from_map(terms)
    }

    fn cross(&self, rhs: &Self) -> Self {
        if self.is_zero() || rhs.is_zero() {
            return Self::zero();
        }

        trace!(
            "Sparse multiplication of {} by {} terms",
            self.nterms(),
            rhs.nterms()
        );

        let mut res: HashMap<Exponent, Coefficient> =
            HashMap::with_capacity(self.nterms() * rhs.nterms());
        for (e1, c1) in &self.terms {
            for (e2, c2) in &rhs.terms {
                let entry = res.entry(e1.wrapping_add(*e2)).or_insert(0);
                *entry = entry.wrapping_add(c1.wrapping_mul(*c2));
            }
        }

        Self::from_map(res.into_iter().collect())
    }
}

impl fmt::Display for SparsePolynomial {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        printer::write_canonical(f, self.terms().rev())
    }
}

impl FromStr for SparsePolynomial {
    type Err = PolynomialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for SparsePolynomial {
    type Error = PolynomialError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl TryFrom<String> for SparsePolynomial {
    type Error = PolynomialError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<SparsePolynomial> for String {
    fn from(p: SparsePolynomial) -> Self {
        p.to_string()
    }
}

impl<'a, 'b> Add<&'a SparsePolynomial> for &'b SparsePolynomial {
    type Output = SparsePolynomial;

    fn add(self, other: &'a SparsePolynomial) -> Self::Output {
        self.merge(other, Coefficient::wrapping_add)
    }
}

impl<'a, 'b> Sub<&'a SparsePolynomial> for &'b SparsePolynomial {
    type Output = SparsePolynomial;

    fn sub(self, other: &'a SparsePolynomial) -> Self::Output {
        self.merge(other, Coefficient::wrapping_sub)
    }
}

impl<'a, 'b> Mul<&'a SparsePolynomial> for &'b SparsePolynomial {
    type Output = SparsePolynomial;

    #[inline]
    fn mul(self, rhs: &'a SparsePolynomial) -> Self::Output {
        self.cross(rhs)
    }
}

impl Neg for &SparsePolynomial {
    type Output = SparsePolynomial;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}
