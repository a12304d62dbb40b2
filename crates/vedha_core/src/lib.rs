//! Data model and collaborator contracts for satellite-phenomena search.
//!
//! This crate defines:
//! - Body and satellite identifiers with NAIF-style codes
//! - Physical shape parameters for the supported primaries
//! - The per-instant apparent-ephemeris and observation value types
//! - The traits through which orbital theories and the apparent-ephemeris
//!   pipeline are consumed (they live outside this workspace)

pub mod body;
pub mod ephemeris;
pub mod error;
pub mod observation;
pub mod observer;
pub mod provider;

pub use body::{Body, PrimaryShape, Satellite, satellites_of};
pub use ephemeris::ApparentEphemeris;
pub use error::CoreError;
pub use observation::{CauseKind, Occluder, PhenomenonCause, SatelliteObservation};
pub use observer::{GeoLocation, Observer, ObserverMode};
pub use provider::{EphemerisSource, SatelliteStateProvider};

/// Seconds per day, for step-size conversion.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Astronomical unit in km (IAU 2012 Resolution B2).
pub const AU_KM: f64 = 149_597_870.7;
