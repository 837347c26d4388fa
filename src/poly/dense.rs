use std::{
    borrow::Cow,
    fmt,
    ops::{Add, Mul, Neg, Sub},
    str::FromStr,
};

use tracing::trace;

use crate::{
    error::{PolynomialError, Representation},
    parser::{self, ExponentDomain},
    printer,
    Coefficient, Exponent,
};

use super::Operand;

/// A dense univariate polynomial with integer coefficients.
///
/// The coefficient of `x^i` is stored at index `i`. The vector is never empty and
/// its last entry is non-zero, except for the zero polynomial, which is stored as
/// `[0]`. Negative exponents cannot be represented.
///
/// Coefficient arithmetic wraps around on `i64` overflow.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct DensePolynomial {
    coefficients: Vec<Coefficient>,
}

impl DensePolynomial {
    /// Constructs the zero polynomial.
    #[inline]
    pub fn zero() -> Self {
        Self {
            coefficients: vec![0],
        }
    }

    /// Construct a polynomial from its coefficients, where `coefficients[i]`
    /// belongs to `x^i`. Trailing zeros are removed.
    pub fn from_coefficients(mut coefficients: Vec<Coefficient>) -> Self {
        let d = coefficients
            .iter()
            .rev()
            .position(|c| *c != 0)
            .unwrap_or(coefficients.len());
        coefficients.truncate(coefficients.len() - d);

        if coefficients.is_empty() {
            return Self::zero();
        }

        Self { coefficients }
    }

    /// Parse a canonical string, for example `5x^7 + 4x^3 + -2x + 8`.
    ///
    /// The string may not contain negative exponents.
    pub fn parse(input: &str) -> Result<Self, PolynomialError> {
        let terms = parser::parse_terms(input, ExponentDomain::NonNegative)?;

        // terms are in descending order, so the first one carries the degree
        let Some(leading) = terms.first() else {
            return Ok(Self::zero());
        };

        let mut coefficients = zeroed(leading.exponent)?;
        for t in &terms {
            coefficients[t.exponent as usize] = t.coefficient;
        }

        Ok(Self { coefficients })
    }

    /// Returns true if `input` is a canonical string without negative exponents.
    pub fn well_formed(input: &str) -> bool {
        parser::well_formed(input, ExponentDomain::NonNegative)
    }

    #[inline]
    pub fn representation(&self) -> Representation {
        Representation::Dense
    }

    /// The coefficients, where index `i` holds the coefficient of `x^i`.
    #[inline]
    pub fn coefficients(&self) -> &[Coefficient] {
        &self.coefficients
    }

    #[inline]
    pub fn degree(&self) -> Exponent {
        (self.coefficients.len() - 1) as Exponent
    }

    /// Get the coefficient of `x^exponent`. Exponents beyond the degree have
    /// coefficient `0`; negative exponents are an error.
    pub fn coefficient(&self, exponent: Exponent) -> Result<Coefficient, PolynomialError> {
        if exponent < 0 {
            return Err(PolynomialError::NegativeExponentQuery(exponent));
        }

        Ok(self.get(exponent as usize))
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.coefficients.iter().all(|c| *c == 0)
    }

    /// Compute `self + other`. Fails if `other` is sparse and has a negative exponent.
    pub fn add<'a>(&self, other: impl Into<Operand<'a>>) -> Result<Self, PolynomialError> {
        let other = Self::resolve(other.into())?;
        Ok(self.zip_with(&other, Coefficient::wrapping_add))
    }

    /// Compute `self - other`. Fails if `other` is sparse and has a negative exponent.
    pub fn subtract<'a>(&self, other: impl Into<Operand<'a>>) -> Result<Self, PolynomialError> {
        let other = Self::resolve(other.into())?;
        Ok(self.zip_with(&other, Coefficient::wrapping_sub))
    }

    /// Compute `self * other`. Fails if `other` is sparse and has a negative exponent.
    pub fn multiply<'a>(&self, other: impl Into<Operand<'a>>) -> Result<Self, PolynomialError> {
        let other = Self::resolve(other.into())?;
        Ok(self.convolve(&other))
    }

    /// Compute `-self` into a freshly allocated polynomial.
    pub fn negate(&self) -> Self {
        Self {
            coefficients: self.coefficients.iter().map(|c| c.wrapping_neg()).collect(),
        }
    }

    /// Compare two dense polynomials. Comparing with a sparse polynomial is an error.
    pub fn try_eq<'a>(&self, other: impl Into<Operand<'a>>) -> Result<bool, PolynomialError> {
        match other.into() {
            Operand::Dense(d) => Ok(self == d),
            Operand::Sparse(_) => Err(PolynomialError::RepresentationMismatch {
                receiver: Representation::Dense,
                operand: Representation::Sparse,
            }),
        }
    }

    pub fn to_canonical_string(&self) -> String {
        self.to_string()
    }

    fn resolve(other: Operand<'_>) -> Result<Cow<'_, DensePolynomial>, PolynomialError> {
        match other {
            Operand::Dense(d) => Ok(Cow::Borrowed(d)),
            Operand::Sparse(s) => Ok(Cow::Owned(DensePolynomial::try_from(s)?)),
        }
    }

    #[inline]
    fn get(&self, exponent: usize) -> Coefficient {
        self.coefficients.get(exponent).copied().unwrap_or(0)
    }

    /// Combine both operands entry by entry after padding them to the same length.
    fn zip_with(&self, other: &Self, op: impl Fn(Coefficient, Coefficient) -> Coefficient) -> Self {
        let len = self.coefficients.len().max(other.coefficients.len());
        let coefficients = (0..len).map(|i| op(self.get(i), other.get(i))).collect();
        Self::from_coefficients(coefficients)
    }

    fn convolve(&self, rhs: &Self) -> Self {
        if self.is_zero() || rhs.is_zero() {
            return Self::zero();
        }

        let n = self.coefficients.len();
        let m = rhs.coefficients.len();
        trace!("Dense multiplication of {} by {} coefficients", n, m);

        let mut res: Vec<Coefficient> = vec![0; n + m - 1];
        for (e1, c1) in self.coefficients.iter().enumerate() {
            if *c1 == 0 {
                continue;
            }

            for (e2, c2) in rhs.coefficients.iter().enumerate() {
                res[e1 + e2] = res[e1 + e2].wrapping_add(c1.wrapping_mul(*c2));
            }
        }

        Self::from_coefficients(res)
    }
}

/// Allocate a zeroed coefficient vector for a polynomial of the given degree.
pub(super) fn zeroed(degree: Exponent) -> Result<Vec<Coefficient>, PolynomialError> {
    let len = usize::try_from(degree)
        .ok()
        .and_then(|d| d.checked_add(1))
        .ok_or(PolynomialError::DegreeTooLarge(degree))?;

    let mut coefficients = Vec::new();
    coefficients
        .try_reserve_exact(len)
        .map_err(|_| PolynomialError::DegreeTooLarge(degree))?;
    coefficients.resize(len, 0);
    Ok(coefficients)
}

impl fmt::Display for DensePolynomial {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        printer::write_canonical(
            f,
            self.coefficients
                .iter()
                .enumerate()
                .rev()
                .map(|(e, c)| (e as Exponent, *c)),
        )
    }
}

impl FromStr for DensePolynomial {
    type Err = PolynomialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for DensePolynomial {
    type Error = PolynomialError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl TryFrom<String> for DensePolynomial {
    type Error = PolynomialError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<DensePolynomial> for String {
    fn from(p: DensePolynomial) -> Self {
        p.to_string()
    }
}

impl Default for DensePolynomial {
    fn default() -> Self {
        Self::zero()
    }
}

impl<'a, 'b> Add<&'a DensePolynomial> for &'b DensePolynomial {
    type Output = DensePolynomial;

    fn add(self, other: &'a DensePolynomial) -> Self::Output {
        self.zip_with(other, Coefficient::wrapping_add)
    }
}

impl<'a, 'b> Sub<&'a DensePolynomial> for &'b DensePolynomial {
    type Output = DensePolynomial;

    fn sub(self, other: &'a DensePolynomial) -> Self::Output {
        self.zip_with(other, Coefficient::wrapping_sub)
    }
}

impl<'a, 'b> Mul<&'a DensePolynomial> for &'b DensePolynomial {
    type Output = DensePolynomial;

    #[inline]
    fn mul(self, rhs: &'a DensePolynomial) -> Self::Output {
        self.convolve(rhs)
    }
}

impl Neg for &DensePolynomial {
    type Output = DensePolynomial;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}
