/// Coordinate normalization errors
///
/// Every variant maps to the NaN sentinel returned by the lossy entry points.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NormalizeError {
    #[error("No coordinate token given")]
    MissingInput,

    #[error("Malformed coordinate {token:?}: {points} decimal points")]
    MalformedToken { token: String, points: usize },

    #[error("Coordinate has no decimal point and the format declares no zero suppression")]
    AmbiguousFormat,

    #[error("Invalid format places: {0}")]
    InvalidPlaces(String),

    #[error("Unknown zero suppression mode: {0:?}")]
    UnknownZeroMode(String),

    #[error("Coordinate {token:?} contains non-numeric characters")]
    NonNumericResidue { token: String },
}

pub type Result<T> = std::result::Result<T, NormalizeError>;
