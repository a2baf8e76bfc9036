use thiserror::Error;

pub use crate::model::ParseIdError;

/// A timestamp string from the API that could not be interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid timestamp: {raw:?}")]
pub struct TimestampError {
    pub raw: String,
}
