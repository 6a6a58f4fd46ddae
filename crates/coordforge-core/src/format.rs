use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{NormalizeError, Result};

/// Which zeros a Gerber/drill file leaves out of undelimited coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZeroSuppression {
    /// `T`: leading digits are explicit, trailing zeros are dropped
    Trailing,
    /// `L`: trailing digits are explicit, leading zeros are dropped
    Leading,
}

impl ZeroSuppression {
    pub fn from_flag(flag: char) -> Option<Self> {
        match flag {
            'T' => Some(Self::Trailing),
            'L' => Some(Self::Leading),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> char {
        match self {
            Self::Trailing => 'T',
            Self::Leading => 'L',
        }
    }
}

impl fmt::Display for ZeroSuppression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_flag())
    }
}

impl FromStr for ZeroSuppression {
    type Err = NormalizeError;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(flag), None) => {
                Self::from_flag(flag).ok_or_else(|| NormalizeError::UnknownZeroMode(s.to_string()))
            }
            _ => Err(NormalizeError::UnknownZeroMode(s.to_string())),
        }
    }
}

/// Declared digit counts of an undelimited coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Places {
    pub leading: u32,
    pub trailing: u32,
}

impl Places {
    pub fn new(leading: u32, trailing: u32) -> Self {
        Self { leading, trailing }
    }

    /// Validate a loosely-typed `[leading, trailing]` pair.
    ///
    /// Both entries must be finite, non-negative whole numbers.
    pub fn from_counts(counts: &[f64]) -> Result<Self> {
        let [leading, trailing] = counts else {
            return Err(NormalizeError::InvalidPlaces(format!(
                "expected 2 entries, got {}",
                counts.len()
            )));
        };

        Ok(Self {
            leading: digit_count(*leading)?,
            trailing: digit_count(*trailing)?,
        })
    }

    pub fn as_counts(&self) -> [f64; 2] {
        [self.leading as f64, self.trailing as f64]
    }
}

fn digit_count(value: f64) -> Result<u32> {
    if !value.is_finite() {
        return Err(NormalizeError::InvalidPlaces(format!("{} is not finite", value)));
    }
    if value < 0.0 || value.fract() != 0.0 || value > u32::MAX as f64 {
        return Err(NormalizeError::InvalidPlaces(format!(
            "{} is not a digit count",
            value
        )));
    }
    Ok(value as u32)
}

/// How to read a coordinate token that carries no decimal point.
///
/// Built once by whoever parsed the file header, so the normalizer never has
/// to re-check `places`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CoordinateFormat {
    /// No positional rule; only self-delimited or whole-unit tokens
    #[default]
    Unset,
    TrailingSuppressed(Places),
    LeadingSuppressed(Places),
}

impl CoordinateFormat {
    pub fn trailing(leading: u32, trailing: u32) -> Self {
        Self::TrailingSuppressed(Places::new(leading, trailing))
    }

    pub fn leading(leading: u32, trailing: u32) -> Self {
        Self::LeadingSuppressed(Places::new(leading, trailing))
    }

    pub fn with_suppression(zero: ZeroSuppression, places: Places) -> Self {
        match zero {
            ZeroSuppression::Trailing => Self::TrailingSuppressed(places),
            ZeroSuppression::Leading => Self::LeadingSuppressed(places),
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    pub fn zero_suppression(&self) -> Option<ZeroSuppression> {
        self.split_rule().ok().map(|(zero, _)| zero)
    }

    pub fn places(&self) -> Option<Places> {
        self.split_rule().ok().map(|(_, places)| places)
    }

    /// The positional rule for splitting an undelimited digit string.
    pub fn split_rule(&self) -> Result<(ZeroSuppression, Places)> {
        match self {
            Self::Unset => Err(NormalizeError::AmbiguousFormat),
            Self::TrailingSuppressed(places) => Ok((ZeroSuppression::Trailing, *places)),
            Self::LeadingSuppressed(places) => Ok((ZeroSuppression::Leading, *places)),
        }
    }
}

impl fmt::Display for CoordinateFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.split_rule() {
            Ok((zero, places)) => write!(f, "{}{}.{}", zero, places.leading, places.trailing),
            Err(_) => write!(f, "unset"),
        }
    }
}

/// Format options as they arrive from a file header or a JSON config.
///
/// `zero` is `"T"`, `"L"` or absent; `places` is `[leading, trailing]`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FormatSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zero: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub places: Option<Vec<f64>>,
}

impl TryFrom<FormatSpec> for CoordinateFormat {
    type Error = NormalizeError;

    fn try_from(spec: FormatSpec) -> Result<Self> {
        CoordinateFormat::try_from(&spec)
    }
}

impl TryFrom<&FormatSpec> for CoordinateFormat {
    type Error = NormalizeError;

    fn try_from(spec: &FormatSpec) -> Result<Self> {
        // places only matter once a zero mode is declared
        let Some(zero) = spec.zero.as_deref() else {
            return Ok(CoordinateFormat::Unset);
        };
        let zero: ZeroSuppression = zero.parse()?;

        let places = match spec.places.as_deref() {
            Some(counts) => Places::from_counts(counts)?,
            None => {
                return Err(NormalizeError::InvalidPlaces(format!(
                    "zero suppression {} requires places",
                    zero
                )));
            }
        };

        Ok(CoordinateFormat::with_suppression(zero, places))
    }
}

impl From<CoordinateFormat> for FormatSpec {
    fn from(format: CoordinateFormat) -> Self {
        match format.split_rule() {
            Ok((zero, places)) => FormatSpec {
                zero: Some(zero.to_string()),
                places: Some(places.as_counts().to_vec()),
            },
            Err(_) => FormatSpec::default(),
        }
    }
}
