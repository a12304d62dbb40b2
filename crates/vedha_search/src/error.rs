//! Error types for phenomena search.

use std::error::Error;
use std::fmt::{Display, Formatter};

use vedha_core::CoreError;

/// Errors from the search engines.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SearchError {
    /// Invalid search configuration or range.
    InvalidConfig(&'static str),
    /// The data model or a collaborator rejected the request.
    Core(CoreError),
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::Core(e) => write!(f, "{e}"),
        }
    }
}

impl Error for SearchError {}

impl From<CoreError> for SearchError {
    fn from(e: CoreError) -> Self {
        Self::Core(e)
    }
}
