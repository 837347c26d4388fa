//! Rendering of polynomials in the canonical notation.
//!
//! The printer is the inverse of [parse_terms](crate::parser::parse_terms) for
//! canonical input: terms are written from the highest to the lowest exponent and
//! joined by `" + "`. Negative coefficients carry their sign inline, so the output
//! never contains a standalone `" - "`.

use std::fmt::{self, Write};

use smartstring::{LazyCompact, SmartString};

use crate::{Coefficient, Exponent};

const TERM_SEPARATOR: &str = " + ";

/// Render a single non-zero term.
pub fn format_term(
    coefficient: Coefficient,
    exponent: Exponent,
) -> Result<SmartString<LazyCompact>, fmt::Error> {
    let mut out = SmartString::new();
    write_term(&mut out, coefficient, exponent)?;
    Ok(out)
}

fn write_term<W: Write>(f: &mut W, coefficient: Coefficient, exponent: Exponent) -> fmt::Result {
    match exponent {
        0 => write!(f, "{}", coefficient),
        1 if coefficient == 1 => f.write_char('x'),
        1 => write!(f, "{}x", coefficient),
        _ if coefficient == 1 => write!(f, "x^{}", exponent),
        _ => write!(f, "{}x^{}", coefficient, exponent),
    }
}

/// Write the canonical form of the polynomial with the given terms.
///
/// The caller must yield the `(exponent, coefficient)` pairs in descending
/// exponent order. Zero coefficients are skipped and an empty polynomial is
/// written as `0`.
pub fn write_canonical<W, I>(f: &mut W, terms: I) -> fmt::Result
where
    W: Write,
    I: IntoIterator<Item = (Exponent, Coefficient)>,
{
    let mut first = true;
    for (exponent, coefficient) in terms {
        if coefficient == 0 {
            continue;
        }

        if first {
            first = false;
        } else {
            f.write_str(TERM_SEPARATOR)?;
        }

        write_term(f, coefficient, exponent)?;
    }

    if first {
        f.write_char('0')?;
    }

    Ok(())
}
