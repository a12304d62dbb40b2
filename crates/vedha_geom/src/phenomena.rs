//! Planet-disk projection and phenomenon classification for one satellite.
//!
//! Projects a satellite's apparent place into planet-centered disk
//! coordinates in two reference frames — as seen by the observer and as
//! seen from the Sun — then decides which of the four phenomenon states
//! hold and how much of the satellite's disk is obscured.
//!
//! The Sun view is obtained from the Earth view by a sky-plane rotation to
//! the bright-limb direction, a tilt of the (along-Sun, depth) plane by the
//! phase angle, and a rotation back to the axis frame. Small-angle
//! approximations are used throughout; satellite orbits subtend at most a
//! few arcminutes.

use std::f64::consts::PI;

use vedha_core::{
    ApparentEphemeris, AU_KM, CauseKind, Occluder, PhenomenonCause, PrimaryShape,
    Satellite, SatelliteObservation,
};

use crate::overlap::overlap_area;

/// Partial percentages above this are reported as exactly 100.
const TOTALITY_CLAMP_PERCENT: f64 = 99.999;

/// Planet→satellite offset in a frame aligned with the line of sight to the
/// planet: (east, north, depth), all in AU. Depth is positive when the
/// satellite is farther from the observer than the planet center.
fn planet_frame_offset(planet: &ApparentEphemeris, sat: &ApparentEphemeris) -> (f64, f64, f64) {
    let p = radec_to_cartesian(planet.ra_deg, planet.dec_deg, planet.distance_au);
    let s = radec_to_cartesian(sat.ra_deg, sat.dec_deg, sat.distance_au);
    let d = [s[0] - p[0], s[1] - p[1], s[2] - p[2]];

    let (sin_a, cos_a) = planet.ra_deg.to_radians().sin_cos();
    let (sin_d, cos_d) = planet.dec_deg.to_radians().sin_cos();

    // Rotate about the pole so the planet sits in the x-z plane, then about
    // the east axis so the line of sight becomes the depth axis.
    let x1 = d[0] * cos_a + d[1] * sin_a;
    let east = -d[0] * sin_a + d[1] * cos_a;
    let depth = x1 * cos_d + d[2] * sin_d;
    let north = -x1 * sin_d + d[2] * cos_d;

    (east, north, depth)
}

fn radec_to_cartesian(ra_deg: f64, dec_deg: f64, r: f64) -> [f64; 3] {
    let (sin_a, cos_a) = ra_deg.to_radians().sin_cos();
    let (sin_d, cos_d) = dec_deg.to_radians().sin_cos();
    [r * cos_d * cos_a, r * cos_d * sin_a, r * sin_d]
}

/// Percent of the satellite's disk obscured by the planet, given the
/// flattened radial distance of the satellite from disk center in planet
/// radii. Fully inside the limb counts as total.
fn obscured_percent(planet_radius_deg: f64, sat_radius_deg: f64, radial: f64) -> f64 {
    let sat_size = sat_radius_deg / planet_radius_deg;
    if radial <= 1.0 - sat_size {
        return 100.0;
    }
    let area = overlap_area(planet_radius_deg, sat_radius_deg, radial * planet_radius_deg);
    let percent = 100.0 * area / (PI * sat_radius_deg * sat_radius_deg);
    if percent > TOTALITY_CLAMP_PERCENT {
        100.0
    } else {
        percent
    }
}

/// Dim a magnitude by the given obscuration percent. Total obscuration
/// extinguishes the body.
pub(crate) fn reduce_magnitude(magnitude: Option<f64>, percent: f64) -> Option<f64> {
    match magnitude {
        None => None,
        Some(_) if percent >= 100.0 => None,
        Some(m) => Some(m - 2.5 * (1.0 - percent / 100.0).log10()),
    }
}

/// Classify one satellite against its primary at one instant.
///
/// Both ephemerides come from the external pipeline (the satellite's
/// already light-time corrected). The result is a fresh value; nothing is
/// shared or retained across instants. All branches are total — degenerate
/// disk geometry is resolved inside [`overlap_area`].
pub fn classify(
    shape: &PrimaryShape,
    planet: &ApparentEphemeris,
    satellite: Satellite,
    sat_eph: &ApparentEphemeris,
) -> SatelliteObservation {
    let (east, north, depth_au) = planet_frame_offset(planet, sat_eph);
    let planet_ang_rad = planet.angular_radius_deg.to_radians();

    // Offset in planet radii and its position angle (north toward east).
    let pr = (east.hypot(north) / planet.distance_au) / planet_ang_rad;
    let pang = east.atan2(north);

    // Earth view: rotate to the rotation-axis frame.
    let axis = planet.pos_angle_axis_deg.to_radians();
    let theta = pang - axis;
    let x = pr * theta.sin();
    let y = pr * theta.cos();
    let z = depth_au * AU_KM / shape.equatorial_radius_km;

    // Sun view: bright-limb rotation, phase-angle tilt, back to the axis frame.
    let limb = planet.bright_limb_angle_deg.to_radians();
    let phase = planet.phase_angle_deg.to_radians();
    let toward_sun = pang - limb;
    let u = pr * toward_sun.sin();
    let v = pr * toward_sun.cos();
    let v_sun = v * phase.cos() + z * phase.sin();
    let z_sun = -v * phase.sin() + z * phase.cos();
    let pr_sun = u.hypot(v_sun);
    let theta_sun = u.atan2(v_sun) + limb - axis;
    let x_sun = pr_sun * theta_sun.sin();
    let y_sun = pr_sun * theta_sun.cos();

    // Oblate disk approximated as a scaled circle.
    let sat_size = sat_eph.angular_radius_deg / planet.angular_radius_deg;
    let radial = (x * x + (y * shape.flattening).powi(2)).sqrt();
    let radial_sun = (x_sun * x_sun + (y_sun * shape.flattening).powi(2)).sqrt();
    let within = radial <= 1.0 + sat_size;
    let within_sun = radial_sun <= 1.0 + sat_size;

    let inferior = z <= 0.0;
    let inferior_sun = z_sun <= 0.0;
    let transiting = within && inferior;
    let occulted = within && !inferior;
    let shadow_transiting = within_sun && inferior_sun;
    let eclipsed = within_sun && !inferior_sun;

    let mut magnitude = Some(sat_eph.magnitude);
    let mut causes = Vec::new();

    if occulted {
        let percent =
            obscured_percent(planet.angular_radius_deg, sat_eph.angular_radius_deg, radial);
        if percent > 0.0 {
            causes.push(PhenomenonCause {
                kind: CauseKind::OccultedBy,
                by: Occluder::Primary(satellite.primary()),
                percent,
            });
            magnitude = reduce_magnitude(magnitude, percent);
        }
    }
    if eclipsed {
        let percent =
            obscured_percent(planet.angular_radius_deg, sat_eph.angular_radius_deg, radial_sun);
        if percent > 0.0 {
            causes.push(PhenomenonCause {
                kind: CauseKind::EclipsedBy,
                by: Occluder::Primary(satellite.primary()),
                percent,
            });
            magnitude = reduce_magnitude(magnitude, percent);
        }
    }

    SatelliteObservation {
        satellite,
        ephemeris: *sat_eph,
        x,
        y,
        z,
        x_sun,
        y_sun,
        z_sun,
        transiting,
        occulted,
        eclipsed,
        shadow_transiting,
        inferior,
        inferior_sun,
        magnitude,
        causes,
    }
}
