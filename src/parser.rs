//! Parsing of the canonical polynomial notation.
//!
//! A canonical string is a list of terms separated by `" + "`, for example
//! `5x^7 + 4x^3 + -2x + 8`. A term separator written as `" - "` is accepted as
//! well and is read as `" + -"`. Terms must appear in strictly descending
//! exponent order and may not have a zero coefficient. The zero polynomial is
//! written as `0`.
//!
//! Validation happens in a fixed order: the character set is checked first, then
//! every term is split into its coefficient and exponent, and only then are the
//! canonical-form rules (no zero coefficients, descending order, and for dense
//! polynomials non-negative exponents) applied.

use smallvec::SmallVec;
use tracing::debug;

use crate::{error::PolynomialError, Coefficient, Exponent};

/// Characters that may appear in a canonical string.
const ALLOWED_CHARACTERS: &[char] = &[
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '+', '-', '^', 'x', ' ',
];

/// Most polynomials written by hand have only a few terms.
pub const INLINED_TERMS: usize = 8;

/// A list of parsed terms in input order.
pub type Terms = SmallVec<[Term; INLINED_TERMS]>;

/// A single `coefficient * x^exponent` term.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Term {
    pub exponent: Exponent,
    pub coefficient: Coefficient,
}

impl Term {
    #[inline]
    pub fn new(coefficient: Coefficient, exponent: Exponent) -> Term {
        Term {
            exponent,
            coefficient,
        }
    }
}

/// The exponents a target representation is able to store.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ExponentDomain {
    /// Only exponents `>= 0`.
    NonNegative,
    /// Any exponent, including negative ones.
    Any,
}

/// Check that `input` only uses characters of the canonical notation.
///
/// This is necessary, but not sufficient, for `input` to be well formed.
pub fn is_valid(input: &str) -> bool {
    check_characters(input).is_ok()
}

fn check_characters(input: &str) -> Result<(), PolynomialError> {
    match input
        .char_indices()
        .find(|(_, c)| !ALLOWED_CHARACTERS.contains(c))
    {
        Some((position, found)) => Err(PolynomialError::InvalidCharacter { found, position }),
        None => Ok(()),
    }
}

/// Returns true if `input` is a canonical string for a polynomial whose
/// exponents lie in `domain`.
pub fn well_formed(input: &str, domain: ExponentDomain) -> bool {
    parse_terms(input, domain).is_ok()
}

/// Parse a canonical string into its terms.
///
/// The zero polynomial `"0"` yields an empty list. For every other input the
/// terms are returned in the order they were written, which after validation is
/// strictly descending in the exponent.
pub fn parse_terms(input: &str, domain: ExponentDomain) -> Result<Terms, PolynomialError> {
    let res = parse_terms_impl(input, domain);
    if let Err(e) = &res {
        debug!("Rejected polynomial {:?}: {}", input, e);
    }
    res
}

fn parse_terms_impl(input: &str, domain: ExponentDomain) -> Result<Terms, PolynomialError> {
    check_characters(input)?;

    if input == "0" {
        return Ok(Terms::new());
    }

    let normalized = input.replace(" - ", " + -");

    let mut raw_terms: SmallVec<[&str; INLINED_TERMS]> = SmallVec::new();
    let mut terms = Terms::new();
    for raw in normalized.split('+') {
        let raw = raw.trim();
        terms.push(parse_term(raw)?);
        raw_terms.push(raw);
    }

    if let Some(i) = terms.iter().position(|t| t.coefficient == 0) {
        return Err(PolynomialError::ZeroCoefficient(raw_terms[i].to_string()));
    }

    for w in terms.windows(2) {
        let (previous, next) = (w[0].exponent, w[1].exponent);
        if previous < next {
            return Err(PolynomialError::OutOfOrder { previous, next });
        }
        if previous == next {
            return Err(PolynomialError::DuplicateExponent(next));
        }
    }

    if domain == ExponentDomain::NonNegative {
        if let Some(t) = terms.iter().find(|t| t.exponent < 0) {
            return Err(PolynomialError::NegativeExponent(t.exponent));
        }
    }

    Ok(terms)
}

/// Parse a single trimmed term such as `-3x^2`, `x^-4`, `7x`, `-x` or `12`.
pub fn parse_term(term: &str) -> Result<Term, PolynomialError> {
    if term.contains("x^") {
        if term.starts_with('x') {
            let exponent = term
                .strip_prefix("x^")
                .ok_or_else(|| PolynomialError::malformed(term))?;
            return Ok(Term::new(1, parse_integer(exponent, term)?));
        }

        // a second `x^` ends up in the exponent and fails to parse there
        let (coefficient, exponent) = term
            .split_once("x^")
            .ok_or_else(|| PolynomialError::malformed(term))?;
        return Ok(Term::new(
            parse_integer(coefficient, term)?,
            parse_integer(exponent, term)?,
        ));
    }

    // Nothing may follow the `x` of a degree-one term, so `3x5` is malformed
    // rather than read as `3x`.
    if term.contains('x') {
        return match term {
            "x" => Ok(Term::new(1, 1)),
            "-x" => Ok(Term::new(-1, 1)),
            _ => match term.split_once('x') {
                Some((coefficient, "")) => Ok(Term::new(parse_integer(coefficient, term)?, 1)),
                _ => Err(PolynomialError::malformed(term)),
            },
        };
    }

    Ok(Term::new(parse_integer(term, term)?, 0))
}

fn parse_integer<T: std::str::FromStr>(digits: &str, term: &str) -> Result<T, PolynomialError> {
    digits
        .parse::<T>()
        .map_err(|_| PolynomialError::malformed(term))
}

#[cfg(test)]
mod test {
    use super::{is_valid, parse_term, parse_terms, well_formed, ExponentDomain, Term};
    use crate::error::PolynomialError;

    #[test]
    fn character_set() {
        assert!(is_valid("5x^7 + 4x^3 - 2x + 8"));
        assert!(is_valid(""));
        assert!(!is_valid("4.5x^2.4 + 8.3x"));
        assert!(!is_valid("3y^2"));
        assert!(!is_valid("3*x"));
    }

    #[test]
    fn term_shapes() {
        assert_eq!(parse_term("x^7"), Ok(Term::new(1, 7)));
        assert_eq!(parse_term("x^-2"), Ok(Term::new(1, -2)));
        assert_eq!(parse_term("-3x^2"), Ok(Term::new(-3, 2)));
        assert_eq!(parse_term("12x^-9"), Ok(Term::new(12, -9)));
        assert_eq!(parse_term("x"), Ok(Term::new(1, 1)));
        assert_eq!(parse_term("-x"), Ok(Term::new(-1, 1)));
        assert_eq!(parse_term("25x"), Ok(Term::new(25, 1)));
        assert_eq!(parse_term("-1x"), Ok(Term::new(-1, 1)));
        assert_eq!(parse_term("-8"), Ok(Term::new(-8, 0)));
    }

    #[test]
    fn malformed_terms() {
        for t in ["", "-", "-x^2", "x^", "^2", "3x^2x^4", "x3x^2", "3x5", "xx", "3 x", "--2"] {
            assert_eq!(
                parse_term(t),
                Err(PolynomialError::MalformedTerm(t.to_string())),
                "{:?}",
                t
            );
        }
    }

    #[test]
    fn integer_overflow_is_malformed() {
        assert!(matches!(
            parse_term("99999999999999999999x"),
            Err(PolynomialError::MalformedTerm(_))
        ));
    }

    #[test]
    fn zero() {
        assert!(parse_terms("0", ExponentDomain::NonNegative)
            .unwrap()
            .is_empty());
        assert_eq!(
            parse_terms("0x^2", ExponentDomain::Any),
            Err(PolynomialError::ZeroCoefficient("0x^2".to_string()))
        );
        assert_eq!(
            parse_terms("3x + 0", ExponentDomain::Any),
            Err(PolynomialError::ZeroCoefficient("0".to_string()))
        );
    }

    #[test]
    fn subtraction_is_normalized() {
        let a = parse_terms("4x^2 + 8x + -2", ExponentDomain::NonNegative).unwrap();
        let b = parse_terms("4x^2 + 8x - 2", ExponentDomain::NonNegative).unwrap();
        assert_eq!(a, b);
        assert_eq!(
            a.as_slice(),
            &[Term::new(4, 2), Term::new(8, 1), Term::new(-2, 0)]
        );
    }

    #[test]
    fn ordering() {
        assert_eq!(
            parse_terms("3x + 4x^2", ExponentDomain::Any),
            Err(PolynomialError::OutOfOrder {
                previous: 1,
                next: 2
            })
        );
        assert_eq!(
            parse_terms("3x^2 + 4x^2", ExponentDomain::Any),
            Err(PolynomialError::DuplicateExponent(2))
        );
        assert!(well_formed("x^2 + 2x - 5 + -9x^-3", ExponentDomain::Any));
    }

    #[test]
    fn negative_exponents_depend_on_domain() {
        let s = "4x^2 + 8x + 2x^-4";
        assert!(well_formed(s, ExponentDomain::Any));
        assert_eq!(
            parse_terms(s, ExponentDomain::NonNegative),
            Err(PolynomialError::NegativeExponent(-4))
        );
    }

    #[test]
    fn checks_run_in_order() {
        // a bad character wins over a bad term, which wins over a zero coefficient
        assert!(matches!(
            parse_terms("0 + 3.5", ExponentDomain::Any),
            Err(PolynomialError::InvalidCharacter {
                found: '.',
                position: 5
            })
        ));
        assert!(matches!(
            parse_terms("0 + 3x5", ExponentDomain::Any),
            Err(PolynomialError::MalformedTerm(_))
        ));
        assert!(matches!(
            parse_terms("x + 0x^-2 + x^3", ExponentDomain::NonNegative),
            Err(PolynomialError::ZeroCoefficient(_))
        ));
        assert!(matches!(
            parse_terms("x^-1 + x^3", ExponentDomain::NonNegative),
            Err(PolynomialError::OutOfOrder { .. })
        ));
    }

    #[test]
    fn empty_and_dangling_separators() {
        assert!(!well_formed("", ExponentDomain::Any));
        assert!(!well_formed("3x + ", ExponentDomain::Any));
        assert!(!well_formed(" - 3x", ExponentDomain::Any));
        assert!(!well_formed("4x^2 -8x", ExponentDomain::Any));
    }
}
