//! Failures raised by the note, scale and fretboard model.
use thiserror::Error;


#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Malformed note name.
    #[error("cannot parse note name '{input}': {reason}")]
    Parse { input: String, reason: String },

    #[error("unknown scale type '{0}'")]
    UnknownScaleType(String),

    #[error("unknown tuning '{0}'")]
    UnknownTuning(String),

    /// Negative, or above `instrument::MAX_FRETS`.
    #[error("fret count {0} is out of range (0..={max})", max = crate::instrument::MAX_FRETS)]
    InvalidFretCount(i64),

    #[error("unknown display mode '{0}', expected 'notes' or 'tabs'")]
    UnknownDisplayMode(String),

    /// String or fret address outside the built grid.
    #[error("{what} index {index} is out of range (0..{len})")]
    IndexOutOfRange { what: &'static str, index: i64, len: usize },

    #[error("scale type '{name}' has invalid intervals: {reason}")]
    InvalidIntervals { name: String, reason: String },

    #[error("tuning '{0}' has no strings")]
    EmptyTuning(String),

    #[error("configuration: {0}")]
    Config(String),

    #[error("playback: {0}")]
    Playback(String),
}


impl Error {
    pub(crate) fn parse(input: &str, reason: impl Into<String>) -> Self {
        Error::Parse { input: input.to_string(), reason: reason.into() }
    }
}


pub type Result<T> = std::result::Result<T, Error>;
