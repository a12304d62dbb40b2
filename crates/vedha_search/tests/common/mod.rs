//! Synthetic circular-orbit ephemeris source for the integration tests.
//!
//! Moons move on circles in the sky plane: disk position x = R sin θ,
//! depth z = -R cos θ with θ = 2π (t - epoch) / period + phase0, so every
//! contact time is known in closed form and the engine's boundary timing
//! can be checked against it.

use std::f64::consts::PI;

use vedha_core::{
    ApparentEphemeris, AU_KM, Body, CoreError, EphemerisSource, Observer, Satellite,
};

pub const EPOCH_JD: f64 = 2_454_846.5;
pub const PLANET_ANG_DEG: f64 = 0.00546;
pub const PLANET_DIST_AU: f64 = 5.2;
pub const MOON_ANG_DEG: f64 = 0.00025;

pub struct Moon {
    pub satellite: Satellite,
    pub orbit_radius_pr: f64,
    pub period_days: f64,
    pub phase0_rad: f64,
    pub angular_radius_deg: f64,
}

impl Moon {
    /// Orbital angle at `jd`: 0 at mid-transit, π at mid-occultation.
    pub fn theta(&self, jd: f64) -> f64 {
        2.0 * PI * (jd - EPOCH_JD) / self.period_days + self.phase0_rad
    }

    /// Disk position and depth in planet radii.
    pub fn disk_position(&self, jd: f64) -> (f64, f64) {
        let theta = self.theta(jd);
        (
            self.orbit_radius_pr * theta.sin(),
            -self.orbit_radius_pr * theta.cos(),
        )
    }

    /// Half-duration of transit/occultation: |x| <= 1 + s.
    pub fn disk_half_width_days(&self) -> f64 {
        let s = self.angular_radius_deg / PLANET_ANG_DEG;
        ((1.0 + s) / self.orbit_radius_pr).asin() * self.period_days / (2.0 * PI)
    }

    /// Half-duration of shadow transit/eclipse for a given phase angle and
    /// flattening: x² + (z sin φ · f)² <= (1 + s)².
    pub fn sun_view_half_width_days(&self, phase_angle_deg: f64, flattening: f64) -> f64 {
        let s = self.angular_radius_deg / PLANET_ANG_DEG;
        let a = phase_angle_deg.to_radians().sin() * flattening;
        let c = (1.0 + s) / self.orbit_radius_pr;
        let sin2 = (c * c - a * a) / (1.0 - a * a);
        (sin2.sqrt()).asin() * self.period_days / (2.0 * PI)
    }
}

pub struct SyntheticSystem {
    pub phase_angle_deg: f64,
    pub moons: Vec<Moon>,
}

impl SyntheticSystem {
    /// One Io-like moon, mid-transit at `EPOCH_JD` + k·period.
    pub fn io_like(phase_angle_deg: f64) -> Self {
        Self {
            phase_angle_deg,
            moons: vec![Moon {
                satellite: Satellite::Io,
                orbit_radius_pr: 5.9,
                period_days: 1.769,
                phase0_rad: 0.0,
                angular_radius_deg: MOON_ANG_DEG,
            }],
        }
    }

    fn parked(&self, x_pr: f64) -> ApparentEphemeris {
        let ang_rad = PLANET_ANG_DEG.to_radians();
        let shape = Body::Jupiter.shape().expect("supported primary");
        ApparentEphemeris {
            ra_deg: (x_pr * ang_rad).to_degrees(),
            dec_deg: 0.0,
            distance_au: PLANET_DIST_AU + x_pr * shape.equatorial_radius_km / AU_KM,
            sun_distance_au: 5.2,
            light_time_days: 0.03,
            angular_radius_deg: MOON_ANG_DEG,
            elongation_deg: 175.0,
            phase: 1.0,
            phase_angle_deg: self.phase_angle_deg,
            pos_angle_axis_deg: 0.0,
            bright_limb_angle_deg: 0.0,
            elevation_deg: 40.0,
            azimuth_deg: 180.0,
            magnitude: 5.0,
        }
    }

    fn planet(&self) -> ApparentEphemeris {
        ApparentEphemeris {
            ra_deg: 0.0,
            dec_deg: 0.0,
            distance_au: PLANET_DIST_AU,
            sun_distance_au: 5.2,
            light_time_days: 0.03,
            angular_radius_deg: PLANET_ANG_DEG,
            elongation_deg: 175.0,
            phase: 1.0,
            phase_angle_deg: self.phase_angle_deg,
            pos_angle_axis_deg: 0.0,
            bright_limb_angle_deg: 0.0,
            elevation_deg: 40.0,
            azimuth_deg: 180.0,
            magnitude: -2.5,
        }
    }
}

impl EphemerisSource for SyntheticSystem {
    fn apparent(
        &self,
        body_code: i32,
        jd_tdb: f64,
        _observer: &Observer,
    ) -> Result<ApparentEphemeris, CoreError> {
        if body_code == Body::Jupiter.code() {
            return Ok(self.planet());
        }
        let Some(moon) = self.moons.iter().find(|m| m.satellite.code() == body_code) else {
            // Moons the scenario does not script are parked far from the
            // disk, on the far side, at distinct offsets so they neither
            // raise flags nor graze each other.
            return Ok(self.parked(15.0 + (body_code % 100) as f64));
        };

        let (x, z) = moon.disk_position(jd_tdb);
        let ang_rad = PLANET_ANG_DEG.to_radians();
        let shape = Body::Jupiter.shape().expect("supported primary");
        Ok(ApparentEphemeris {
            ra_deg: (x * ang_rad).to_degrees(),
            dec_deg: 0.0,
            distance_au: PLANET_DIST_AU + z * shape.equatorial_radius_km / AU_KM,
            sun_distance_au: 5.2,
            light_time_days: 0.03,
            angular_radius_deg: moon.angular_radius_deg,
            elongation_deg: 175.0,
            phase: 1.0,
            phase_angle_deg: self.phase_angle_deg,
            pos_angle_axis_deg: 0.0,
            bright_limb_angle_deg: 0.0,
            elevation_deg: 40.0,
            azimuth_deg: 180.0,
            magnitude: 5.0,
        })
    }
}
