//! Apparent-ephemeris value type consumed from the external pipeline.

/// Apparent place of a body at one instant, as delivered by the external
/// ephemeris pipeline (light-time iteration, aberration and frame conversion
/// already applied).
///
/// Angles are in degrees, distances in AU, light time in days. For a
/// geocentric observer `elevation_deg`/`azimuth_deg` are zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApparentEphemeris {
    /// Apparent right ascension in degrees, range [0, 360).
    pub ra_deg: f64,
    /// Apparent declination in degrees, range [-90, 90].
    pub dec_deg: f64,
    /// Distance from the observer in AU.
    pub distance_au: f64,
    /// Distance from the Sun in AU.
    pub sun_distance_au: f64,
    /// One-way light time in days.
    pub light_time_days: f64,
    /// Angular radius in degrees.
    pub angular_radius_deg: f64,
    /// Elongation from the Sun in degrees.
    pub elongation_deg: f64,
    /// Illuminated fraction of the disk, range [0, 1].
    pub phase: f64,
    /// Signed phase angle (Sun-body-observer) in degrees.
    pub phase_angle_deg: f64,
    /// Position angle of the rotation axis in degrees, from north toward east.
    pub pos_angle_axis_deg: f64,
    /// Position angle of the midpoint of the bright limb in degrees.
    pub bright_limb_angle_deg: f64,
    /// Elevation above the observer's horizon in degrees.
    pub elevation_deg: f64,
    /// Azimuth in degrees, measured from north through east.
    pub azimuth_deg: f64,
    /// Baseline apparent magnitude from the physical model, before any
    /// phenomena-driven reduction.
    pub magnitude: f64,
}
