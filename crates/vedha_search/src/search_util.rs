//! Shared helpers for the scan engines.

use vedha_core::{Occluder, SECONDS_PER_DAY, Satellite, SatelliteObservation};

use crate::phenomena_types::{EventBoundary, EventKind, EventRecord};

pub(crate) fn sec_to_days(sec: f64) -> f64 {
    sec / SECONDS_PER_DAY
}

/// An event whose end has not been observed yet. Converting it into an
/// [`EventRecord`] consumes it, so an event is closed exactly once.
#[derive(Debug, Clone)]
pub(crate) struct OpenEvent {
    pub satellite: Satellite,
    pub counterpart: Occluder,
    pub kind: EventKind,
    pub boundary: EventBoundary,
    pub jd_start: f64,
    pub max_percent: Option<f64>,
    pub elevation_deg: f64,
    pub visible_from_earth: bool,
}

impl OpenEvent {
    /// Fold a newly observed percent into the running maximum.
    pub fn update_percent(&mut self, percent: Option<f64>) {
        if let Some(p) = percent {
            self.max_percent = Some(self.max_percent.map_or(p, |m| m.max(p)));
        }
    }

    pub fn close(self, jd_end: f64) -> EventRecord {
        EventRecord {
            satellite: self.satellite,
            counterpart: self.counterpart,
            kind: self.kind,
            boundary: self.boundary,
            jd_start: self.jd_start,
            jd_end: jd_end.max(self.jd_start),
            max_percent: self.max_percent,
            elevation_deg: self.elevation_deg,
            visible_from_earth: self.visible_from_earth,
        }
    }
}

/// Order a refinement batch so the final output is non-decreasing in start
/// time with a deterministic tie-break.
pub(crate) fn sort_batch(batch: &mut [EventRecord]) {
    batch.sort_by(|a, b| {
        a.jd_start
            .total_cmp(&b.jd_start)
            .then_with(|| a.satellite.code().cmp(&b.satellite.code()))
            .then_with(|| a.kind.cmp(&b.kind))
    });
}

/// Whether two snapshots carry the identical per-satellite phenomenon
/// signature (the four planetary flags, position by position).
pub(crate) fn same_signature(a: &[SatelliteObservation], b: &[SatelliteObservation]) -> bool {
    a.len() == b.len()
        && a.iter().zip(b.iter()).all(|(x, y)| {
            x.satellite == y.satellite
                && x.transiting == y.transiting
                && x.occulted == y.occulted
                && x.eclipsed == y.eclipsed
                && x.shadow_transiting == y.shadow_transiting
        })
}

/// Minimum projected separation of any satellite from the planet center,
/// over both views, in planet radii.
pub(crate) fn min_disk_separation(observations: &[SatelliteObservation]) -> f64 {
    observations
        .iter()
        .flat_map(|o| [o.x.hypot(o.y), o.x_sun.hypot(o.y_sun)])
        .fold(f64::INFINITY, f64::min)
}

/// Minimum projected separation between two distinct satellites, over both
/// views, in planet radii.
pub(crate) fn min_pair_separation(observations: &[SatelliteObservation]) -> f64 {
    let mut min = f64::INFINITY;
    for i in 0..observations.len() {
        for j in (i + 1)..observations.len() {
            let (a, b) = (&observations[i], &observations[j]);
            min = min
                .min((a.x - b.x).hypot(a.y - b.y))
                .min((a.x_sun - b.x_sun).hypot(a.y_sun - b.y_sun));
        }
    }
    min
}
