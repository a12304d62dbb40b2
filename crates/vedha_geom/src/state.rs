//! Satellite-state provider built from an ephemeris source and the geometry.

use vedha_core::{
    Body, CoreError, EphemerisSource, Observer, PrimaryShape, SatelliteObservation,
    SatelliteStateProvider, satellites_of,
};

use crate::mutual::apply_mutual;
use crate::phenomena::classify;

/// Ready-made [`SatelliteStateProvider`]: queries the primary's apparent
/// ephemeris and each satellite's from an [`EphemerisSource`], classifies
/// every satellite, then applies the mutual pass.
///
/// The source owns light-time correction and frame conversion; this adapter
/// is pure composition and inherits the source's determinism.
#[derive(Debug)]
pub struct GeometricStateProvider<S> {
    primary: Body,
    shape: PrimaryShape,
    source: S,
}

impl<S: EphemerisSource> GeometricStateProvider<S> {
    /// Build a provider for a supported primary. Unsupported bodies are
    /// rejected here, before any scanning can start.
    pub fn new(primary: Body, source: S) -> Result<Self, CoreError> {
        let shape = primary.shape()?;
        Ok(Self {
            primary,
            shape,
            source,
        })
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}

impl<S: EphemerisSource> SatelliteStateProvider for GeometricStateProvider<S> {
    fn primary(&self) -> Body {
        self.primary
    }

    fn observations(
        &self,
        jd_tdb: f64,
        observer: &Observer,
    ) -> Result<Vec<SatelliteObservation>, CoreError> {
        let planet = self.source.apparent(self.primary.code(), jd_tdb, observer)?;
        let satellites = satellites_of(self.primary);
        let mut observations = Vec::with_capacity(satellites.len());
        for sat in satellites {
            let eph = self.source.apparent(sat.code(), jd_tdb, observer)?;
            observations.push(classify(&self.shape, &planet, *sat, &eph));
        }
        apply_mutual(&mut observations, planet.angular_radius_deg);
        Ok(observations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vedha_core::{ApparentEphemeris, Satellite};

    /// Minimal source: primary at the origin, every satellite strung out
    /// along the equator, well clear of the disk.
    #[derive(Debug)]
    struct StaticSource;

    impl EphemerisSource for StaticSource {
        fn apparent(
            &self,
            body_code: i32,
            _jd_tdb: f64,
            _observer: &Observer,
        ) -> Result<ApparentEphemeris, CoreError> {
            let is_planet = body_code == Body::Jupiter.code();
            let slot = (body_code % 100) as f64;
            Ok(ApparentEphemeris {
                ra_deg: if is_planet { 0.0 } else { 0.02 * slot },
                dec_deg: 0.0,
                distance_au: 5.2,
                sun_distance_au: 5.2,
                light_time_days: 0.03,
                angular_radius_deg: if is_planet { 0.00546 } else { 0.00025 },
                elongation_deg: 175.0,
                phase: 1.0,
                phase_angle_deg: 0.0,
                pos_angle_axis_deg: 0.0,
                bright_limb_angle_deg: 0.0,
                elevation_deg: 10.0,
                azimuth_deg: 0.0,
                magnitude: 5.0,
            })
        }
    }

    #[test]
    fn unsupported_primary_rejected_at_construction() {
        let err = GeometricStateProvider::new(Body::Venus, StaticSource).unwrap_err();
        assert_eq!(err, CoreError::UnsupportedPrimary(Body::Venus));
    }

    #[test]
    fn observations_follow_theory_order() {
        let provider = GeometricStateProvider::new(Body::Jupiter, StaticSource).unwrap();
        let obs = provider
            .observations(2_455_000.0, &Observer::geocentric())
            .unwrap();
        let order: Vec<Satellite> = obs.iter().map(|o| o.satellite).collect();
        assert_eq!(order, satellites_of(Body::Jupiter));
    }

    #[test]
    fn quiet_sky_produces_no_flags() {
        let provider = GeometricStateProvider::new(Body::Jupiter, StaticSource).unwrap();
        let obs = provider
            .observations(2_455_000.0, &Observer::geocentric())
            .unwrap();
        for o in &obs {
            assert!(!o.any_phenomenon(), "{}", o.satellite.name());
            assert!(o.causes.is_empty());
            assert_eq!(o.magnitude, Some(5.0));
        }
    }
}
