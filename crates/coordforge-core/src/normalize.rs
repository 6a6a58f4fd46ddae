use crate::error::{NormalizeError, Result};
use crate::format::{CoordinateFormat, FormatSpec, ZeroSuppression};
use crate::token::RawToken;

/// Power of ten between a file unit and an output coordinate
pub const COORD_SCALE_EXPONENT: usize = 3;

/// Output coordinates are 1000x the Gerber/drill unit
pub const COORD_SCALE: f64 = 1000.0;

/// Normalize one coordinate token to output scale.
///
/// Tokens with a decimal point (or any token under an unset format) are split
/// on the point. Undelimited tokens are split by position using the format's
/// zero suppression and digit counts. The result is `sign` + integer digits +
/// the first three fractional digits, with any further digits kept as a
/// fraction.
pub fn normalize_coord(token: Option<RawToken<'_>>, format: &CoordinateFormat) -> Result<f64> {
    let token = token.ok_or(NormalizeError::MissingInput)?;
    let text = token.as_text();

    let (sign, digits) = split_sign(&text);
    let (before, after) = if digits.contains('.') || format.is_unset() {
        split_on_point(digits, &text)?
    } else {
        split_by_format(digits, format, &text)?
    };

    let scaled = rescale(sign, &before, after);
    scaled.parse::<f64>().map_err(|_| NormalizeError::NonNumericResidue {
        token: text.into_owned(),
    })
}

/// Lossy variant of [`normalize_coord`]: every failure becomes `NaN`.
pub fn normalize_coord_lossy(token: Option<RawToken<'_>>, format: &CoordinateFormat) -> f64 {
    match normalize_coord(token, format) {
        Ok(value) => value,
        Err(e) => {
            log::trace!("Rejected coordinate under format {}: {}", format, e);
            f64::NAN
        }
    }
}

/// Normalizer bound to one validated coordinate format
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CoordinateNormalizer {
    format: CoordinateFormat,
}

impl CoordinateNormalizer {
    pub fn new(format: CoordinateFormat) -> Self {
        Self { format }
    }

    /// Validate loose format options once, up front
    pub fn from_spec(spec: &FormatSpec) -> Result<Self> {
        let format = CoordinateFormat::try_from(spec)?;
        log::debug!("Coordinate normalizer using format {}", format);
        Ok(Self { format })
    }

    pub fn format(&self) -> &CoordinateFormat {
        &self.format
    }

    pub fn normalize<'a>(&self, token: impl Into<RawToken<'a>>) -> Result<f64> {
        normalize_coord(Some(token.into()), &self.format)
    }

    pub fn normalize_or_nan<'a>(&self, token: impl Into<RawToken<'a>>) -> f64 {
        normalize_coord_lossy(Some(token.into()), &self.format)
    }
}

fn split_sign(text: &str) -> (char, &str) {
    match text.chars().next() {
        Some(sign @ ('+' | '-')) => (sign, &text[1..]),
        _ => ('+', text),
    }
}

/// Explicit decimal point: at most one, digits on both sides
fn split_on_point(digits: &str, token: &str) -> Result<(String, String)> {
    let points = digits.matches('.').count();
    if points > 1 {
        return Err(NormalizeError::MalformedToken {
            token: token.to_string(),
            points,
        });
    }

    let (before, after) = digits.split_once('.').unwrap_or((digits, ""));
    ensure_digits(before, token)?;
    ensure_digits(after, token)?;

    Ok((before.to_string(), after.to_string()))
}

/// No decimal point: split by the declared digit counts
fn split_by_format(
    digits: &str,
    format: &CoordinateFormat,
    token: &str,
) -> Result<(String, String)> {
    let (zero, places) = format.split_rule()?;
    // all-ASCII from here on, so byte offsets are char offsets
    ensure_digits(digits, token)?;

    match zero {
        ZeroSuppression::Trailing => {
            let leading = places.leading as usize;
            let (head, tail) = digits.split_at(leading.min(digits.len()));

            let mut before = String::with_capacity(leading);
            before.push_str(head);
            pad_right(&mut before, leading);

            Ok((before, tail.to_string()))
        }
        ZeroSuppression::Leading => {
            let trailing = places.trailing as usize;
            let (head, tail) = digits.split_at(digits.len().saturating_sub(trailing));

            let mut after = "0".repeat(trailing - tail.len());
            after.push_str(tail);

            Ok((head.to_string(), after))
        }
    }
}

/// Move the first three fractional digits into the integer part
fn rescale(sign: char, before: &str, mut after: String) -> String {
    pad_right(&mut after, COORD_SCALE_EXPONENT);
    let (shifted, remainder) = after.split_at(COORD_SCALE_EXPONENT);

    let mut scaled = String::with_capacity(before.len() + after.len() + 2);
    scaled.push(sign);
    scaled.push_str(before);
    scaled.push_str(shifted);
    if !remainder.is_empty() {
        scaled.push('.');
        scaled.push_str(remainder);
    }
    scaled
}

fn pad_right(digits: &mut String, width: usize) {
    while digits.len() < width {
        digits.push('0');
    }
}

fn ensure_digits(digits: &str, token: &str) -> Result<()> {
    if digits.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(NormalizeError::NonNumericResidue {
            token: token.to_string(),
        })
    }
}
