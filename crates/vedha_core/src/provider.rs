//! Collaborator contracts consumed by the geometry and search layers.
//!
//! The concrete orbital theories (numerical integration for the Martian
//! moons, periodic series for the Jovian, Saturnian and Uranian systems)
//! and the apparent-ephemeris pipeline live outside this workspace. Both
//! seams are deterministic pure functions of time and configuration; the
//! search engine relies on that for its own determinism guarantee.

use crate::body::Body;
use crate::ephemeris::ApparentEphemeris;
use crate::error::CoreError;
use crate::observation::SatelliteObservation;
use crate::observer::Observer;

/// Source of apparent ephemerides for one primary and its satellites.
///
/// Implementations perform light-time iteration, aberration and frame
/// conversion internally and must be deterministic: identical arguments
/// always yield identical results.
pub trait EphemerisSource {
    /// Apparent place of a body (the primary, the Sun, or a satellite of
    /// the primary) at `jd_tdb` for the given observer.
    fn apparent(
        &self,
        body_code: i32,
        jd_tdb: f64,
        observer: &Observer,
    ) -> Result<ApparentEphemeris, CoreError>;
}

/// Full per-instant geometric state of every satellite of one primary.
///
/// The search engine drives scans exclusively through this trait; it never
/// sees raw ephemerides. Observations must be returned in theory order so
/// consecutive snapshots can be compared positionally.
pub trait SatelliteStateProvider {
    /// The primary whose satellites this provider describes.
    fn primary(&self) -> Body;

    /// Observations for all satellites at `jd_tdb`, freshly computed.
    fn observations(
        &self,
        jd_tdb: f64,
        observer: &Observer,
    ) -> Result<Vec<SatelliteObservation>, CoreError>;
}
