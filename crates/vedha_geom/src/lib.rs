//! Projective geometry for satellite phenomena.
//!
//! This crate turns apparent ephemerides into per-instant
//! [`SatelliteObservation`](vedha_core::SatelliteObservation) values:
//! - `overlap`: closed-form disk-disk intersection area
//! - `phenomena`: planet-disk projection and the four phenomenon flags,
//!   with partial-phase percentages and magnitude loss
//! - `mutual`: satellite-pair occultations and eclipses
//! - `state`: a ready-made `SatelliteStateProvider` composing the above
//!   over any `EphemerisSource`

pub mod mutual;
pub mod overlap;
pub mod phenomena;
pub mod state;

pub use mutual::apply_mutual;
pub use overlap::overlap_area;
pub use phenomena::classify;
pub use state::GeometricStateProvider;
