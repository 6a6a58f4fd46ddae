// CoordForge Core Library
// Gerber / NC-drill coordinate normalization

pub mod error;
pub mod format;
pub mod normalize;
pub mod token;

pub use error::{NormalizeError, Result};
pub use format::{CoordinateFormat, FormatSpec, Places, ZeroSuppression};
pub use normalize::{
    normalize_coord, normalize_coord_lossy, CoordinateNormalizer, COORD_SCALE,
    COORD_SCALE_EXPONENT,
};
pub use token::RawToken;
