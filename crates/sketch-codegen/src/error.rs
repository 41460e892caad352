use thiserror::Error;

use crate::overrides::OverrideError;

/// Why a translation run failed. Output written before the failure must be discarded.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// The source did not parse. Carries the parser's message verbatim.
    #[error("parse error: {0}")]
    Parse(String),

    #[error(transparent)]
    Overrides(#[from] OverrideError),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = TranslateError> = std::result::Result<T, E>;
