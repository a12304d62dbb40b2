//! Types for satellite-phenomena search.

use vedha_core::{Occluder, Satellite};

/// Phenomenon classification of an event record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EventKind {
    /// Satellite inside the occluder's shadow.
    Eclipsed,
    /// Satellite hidden behind the occluder's disk.
    Occulted,
    /// Satellite in front of the planet's disk.
    Transit,
    /// Satellite's shadow on the planet's disk.
    ShadowTransit,
}

/// Boundary tag on mutual events: marks the edge of the partial phase when
/// it coincides with the satellite being fully eclipsed/occulted by the
/// primary itself (distinguishes "entering totality" from "event ending").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EventBoundary {
    #[default]
    None,
    Start,
    End,
}

/// One closed phenomenon event.
///
/// Records are immutable once produced; the open phase of an event's
/// lifecycle lives in the engine's internal slot table and is converted
/// into an `EventRecord` exactly once, when the qualifying condition is
/// observed false.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventRecord {
    /// The satellite the event happens to.
    pub satellite: Satellite,
    /// The obscuring body: the primary for planetary events, another
    /// satellite for mutual events.
    pub counterpart: Occluder,
    pub kind: EventKind,
    pub boundary: EventBoundary,
    /// Start time as Julian Date (TDB).
    pub jd_start: f64,
    /// End time as Julian Date (TDB). Never less than `jd_start`.
    pub jd_end: f64,
    /// Maximum obscured percent observed over the event's lifetime, when
    /// the phenomenon has a partial phase to track.
    pub max_percent: Option<f64>,
    /// Satellite elevation at detection, degrees.
    pub elevation_deg: f64,
    /// False when the satellite is not actually observable at detection,
    /// e.g. doubly obscured by the planet and its shadow.
    pub visible_from_earth: bool,
}

/// Configuration for planetary-phenomena scans.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhenomenaScanConfig {
    /// Coarse scan step in seconds.
    pub coarse_step_sec: f64,
    /// Fine refinement step in seconds; boundaries resolve to half of it.
    pub fine_step_sec: f64,
    /// Only report events detected with the satellite above the horizon.
    /// Meaningful for topocentric observers.
    pub topocentric_filter: bool,
}

impl Default for PhenomenaScanConfig {
    fn default() -> Self {
        Self {
            coarse_step_sec: 600.0,
            fine_step_sec: 2.0,
            topocentric_filter: false,
        }
    }
}

impl PhenomenaScanConfig {
    /// Validate the configuration.
    pub(crate) fn validate(&self) -> Result<(), &'static str> {
        if !self.coarse_step_sec.is_finite() || self.coarse_step_sec <= 0.0 {
            return Err("coarse_step_sec must be positive");
        }
        if !self.fine_step_sec.is_finite() || self.fine_step_sec <= 0.0 {
            return Err("fine_step_sec must be positive");
        }
        if self.fine_step_sec > self.coarse_step_sec {
            return Err("fine_step_sec must not exceed coarse_step_sec");
        }
        Ok(())
    }
}

/// Configuration for mutual-phenomena scans.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MutualScanConfig {
    /// Coarse scan step in seconds.
    pub coarse_step_sec: f64,
    /// Fold partial events caused by the planet itself into the output.
    pub include_planet_partials: bool,
}

impl Default for MutualScanConfig {
    fn default() -> Self {
        Self {
            coarse_step_sec: 120.0,
            include_planet_partials: false,
        }
    }
}

impl MutualScanConfig {
    /// Validate the configuration.
    pub(crate) fn validate(&self) -> Result<(), &'static str> {
        if !self.coarse_step_sec.is_finite() || self.coarse_step_sec <= 0.0 {
            return Err("coarse_step_sec must be positive");
        }
        Ok(())
    }
}
