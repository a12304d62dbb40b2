//! Mutual phenomena between satellite pairs of the same primary.
//!
//! Works on the per-instant observation set produced by
//! [`classify`](crate::phenomena::classify): for every unordered pair it
//! checks disk contact in the Earth view and the Sun view independently,
//! decides which body is in front, and charges the overlap to the occluded
//! body as a structured descriptor plus a magnitude reduction. History is
//! never consulted; only the passed-in instant is mutated.

use std::f64::consts::PI;

use vedha_core::{CauseKind, Occluder, PhenomenonCause, SatelliteObservation};

use crate::overlap::overlap_area;
use crate::phenomena::reduce_magnitude;

/// Partial percentages above this are reported as exactly 100.
const TOTALITY_CLAMP_PERCENT: f64 = 99.999;

#[derive(Clone, Copy)]
enum View {
    Earth,
    Sun,
}

/// Apply mutual occultations (Earth view) and eclipses (Sun view) to a
/// per-instant observation set. `planet_angular_radius_deg` converts the
/// planet-radii positions back to sky angles.
pub fn apply_mutual(observations: &mut [SatelliteObservation], planet_angular_radius_deg: f64) {
    let n = observations.len();
    for i in 0..n {
        for j in (i + 1)..n {
            interact(observations, i, j, planet_angular_radius_deg, View::Earth);
            interact(observations, i, j, planet_angular_radius_deg, View::Sun);
        }
    }
}

fn interact(
    observations: &mut [SatelliteObservation],
    i: usize,
    j: usize,
    planet_angular_radius_deg: f64,
    view: View,
) {
    let (xi, yi, zi, inf_i, within_i) = view_fields(&observations[i], view);
    let (xj, yj, zj, inf_j, within_j) = view_fields(&observations[j], view);
    let radius_i = observations[i].ephemeris.angular_radius_deg;
    let radius_j = observations[j].ephemeris.angular_radius_deg;

    // Bounding test: disks must touch, and a body on the near side that is
    // not itself near the planet's disk is not geometrically relevant.
    let separation = (xi - xj).hypot(yi - yj);
    if separation > (radius_i + radius_j) / planet_angular_radius_deg {
        return;
    }
    if (inf_i && !within_i) || (inf_j && !within_j) {
        return;
    }

    // The body nearer the viewpoint obscures the farther one.
    let (front, behind) = if zi <= zj { (i, j) } else { (j, i) };
    let behind_radius = observations[behind].ephemeris.angular_radius_deg;
    let area = overlap_area(radius_i, radius_j, separation * planet_angular_radius_deg);
    let mut percent = 100.0 * area / (PI * behind_radius * behind_radius);
    if percent > TOTALITY_CLAMP_PERCENT {
        percent = 100.0;
    }
    if percent <= 0.0 {
        return;
    }

    let kind = match view {
        View::Earth => CauseKind::OccultedBy,
        View::Sun => CauseKind::EclipsedBy,
    };
    let by = Occluder::Satellite(observations[front].satellite);
    let occluded = &mut observations[behind];
    occluded.causes.push(PhenomenonCause { kind, by, percent });
    occluded.magnitude = reduce_magnitude(occluded.magnitude, percent);
}

fn view_fields(obs: &SatelliteObservation, view: View) -> (f64, f64, f64, bool, bool) {
    match view {
        View::Earth => (obs.x, obs.y, obs.z, obs.inferior, obs.within_disc()),
        View::Sun => (
            obs.x_sun,
            obs.y_sun,
            obs.z_sun,
            obs.inferior_sun,
            obs.within_disc_sun(),
        ),
    }
}
