//! Error types for the satellite-phenomena core.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::body::Body;

/// Errors from the data model and collaborator seams.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum CoreError {
    /// The body is not a supported satellite-phenomena primary.
    UnsupportedPrimary(Body),
    /// The ephemeris collaborator failed.
    Ephemeris(String),
    /// Requested epoch is outside the collaborator's valid range.
    EpochOutOfRange { jd_tdb: f64 },
}

impl Display for CoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedPrimary(body) => {
                write!(f, "unsupported primary body: {body:?}")
            }
            Self::Ephemeris(msg) => write!(f, "ephemeris error: {msg}"),
            Self::EpochOutOfRange { jd_tdb } => {
                write!(f, "epoch out of range: JD {jd_tdb}")
            }
        }
    }
}

impl Error for CoreError {}
