//! Per-instant satellite observation produced by the phenomena geometry.

use crate::body::{Body, Satellite};
use crate::ephemeris::ApparentEphemeris;

/// What a phenomenon descriptor reports about the occluded body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CauseKind {
    /// The body is (partially) hidden behind the occluder as seen by the observer.
    OccultedBy,
    /// The body is (partially) inside the occluder's shadow.
    EclipsedBy,
}

/// The body doing the occulting or shadowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Occluder {
    /// The primary planet itself.
    Primary(Body),
    /// Another satellite of the same primary.
    Satellite(Satellite),
}

/// One concurrent phenomenon affecting a satellite at an instant.
///
/// Formatting these to text is a presentation concern; the search engine
/// consumes them structurally.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhenomenonCause {
    pub kind: CauseKind,
    pub by: Occluder,
    /// Percent of the satellite's own disk area obscured, range (0, 100].
    pub percent: f64,
}

/// Full geometric state of one satellite at one evaluated instant.
///
/// Created fresh for every instant and never mutated afterwards; the search
/// engine only ever compares consecutive values.
#[derive(Debug, Clone, PartialEq)]
pub struct SatelliteObservation {
    pub satellite: Satellite,
    /// Apparent ephemeris of the satellite (light-time corrected).
    pub ephemeris: ApparentEphemeris,
    /// Earth-view position in planet equatorial radii: x along the planet's
    /// equator, y along the projected rotation axis (north positive).
    pub x: f64,
    pub y: f64,
    /// Earth-view depth in planet equatorial radii; negative means the
    /// satellite is nearer the observer than the planet center.
    pub z: f64,
    /// Sun-view position, same conventions as the Earth view.
    pub x_sun: f64,
    pub y_sun: f64,
    pub z_sun: f64,
    /// Satellite in front of the planet's disk as seen by the observer.
    pub transiting: bool,
    /// Satellite behind the planet's disk as seen by the observer.
    pub occulted: bool,
    /// Satellite inside the planet's shadow.
    pub eclipsed: bool,
    /// Satellite's shadow on the planet's disk.
    pub shadow_transiting: bool,
    /// `z <= 0` in the Earth view.
    pub inferior: bool,
    /// `z_sun <= 0` in the Sun view.
    pub inferior_sun: bool,
    /// Apparent magnitude after phenomena reductions; `None` when the
    /// satellite is fully obscured (not visible).
    pub magnitude: Option<f64>,
    /// Concurrent phenomena affecting this satellite, append-only within
    /// the instant's evaluation.
    pub causes: Vec<PhenomenonCause>,
}

impl SatelliteObservation {
    /// Whether the satellite projects within the planet's disk in the Earth view.
    pub fn within_disc(&self) -> bool {
        self.transiting || self.occulted
    }

    /// Whether the satellite projects within the planet's disk in the Sun view.
    pub fn within_disc_sun(&self) -> bool {
        self.eclipsed || self.shadow_transiting
    }

    /// Any of the four planetary phenomenon flags.
    pub fn any_phenomenon(&self) -> bool {
        self.transiting || self.occulted || self.eclipsed || self.shadow_transiting
    }

    /// Percent obscured by the primary for the given kind, if any.
    pub fn primary_percent(&self, kind: CauseKind) -> Option<f64> {
        self.causes
            .iter()
            .find(|c| c.kind == kind && matches!(c.by, Occluder::Primary(_)))
            .map(|c| c.percent)
    }

    /// First mutual (satellite-caused) descriptor, if any.
    pub fn mutual_cause(&self) -> Option<&PhenomenonCause> {
        self.causes
            .iter()
            .find(|c| matches!(c.by, Occluder::Satellite(_)))
    }

    /// Fully obscured by the primary itself (100% occulted or eclipsed).
    pub fn fully_obscured_by_primary(&self) -> bool {
        [CauseKind::OccultedBy, CauseKind::EclipsedBy]
            .into_iter()
            .any(|k| self.primary_percent(k).is_some_and(|p| p >= 100.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank(sat: Satellite) -> SatelliteObservation {
        SatelliteObservation {
            satellite: sat,
            ephemeris: ApparentEphemeris {
                ra_deg: 0.0,
                dec_deg: 0.0,
                distance_au: 5.0,
                sun_distance_au: 5.2,
                light_time_days: 0.03,
                angular_radius_deg: 0.0003,
                elongation_deg: 0.0,
                phase: 1.0,
                phase_angle_deg: 0.0,
                pos_angle_axis_deg: 0.0,
                bright_limb_angle_deg: 0.0,
                elevation_deg: 0.0,
                azimuth_deg: 0.0,
                magnitude: 5.0,
            },
            x: 0.0,
            y: 0.0,
            z: 0.0,
            x_sun: 0.0,
            y_sun: 0.0,
            z_sun: 0.0,
            transiting: false,
            occulted: false,
            eclipsed: false,
            shadow_transiting: false,
            inferior: false,
            inferior_sun: false,
            magnitude: Some(5.0),
            causes: Vec::new(),
        }
    }

    #[test]
    fn within_disc_follows_flags() {
        let mut obs = blank(Satellite::Io);
        assert!(!obs.within_disc());
        obs.transiting = true;
        assert!(obs.within_disc());
        obs.transiting = false;
        obs.occulted = true;
        assert!(obs.within_disc());
    }

    #[test]
    fn primary_percent_picks_matching_kind() {
        let mut obs = blank(Satellite::Europa);
        obs.causes.push(PhenomenonCause {
            kind: CauseKind::EclipsedBy,
            by: Occluder::Primary(Body::Jupiter),
            percent: 42.0,
        });
        assert_eq!(obs.primary_percent(CauseKind::EclipsedBy), Some(42.0));
        assert_eq!(obs.primary_percent(CauseKind::OccultedBy), None);
    }

    #[test]
    fn mutual_cause_skips_primary_entries() {
        let mut obs = blank(Satellite::Europa);
        obs.causes.push(PhenomenonCause {
            kind: CauseKind::OccultedBy,
            by: Occluder::Primary(Body::Jupiter),
            percent: 10.0,
        });
        assert!(obs.mutual_cause().is_none());
        obs.causes.push(PhenomenonCause {
            kind: CauseKind::OccultedBy,
            by: Occluder::Satellite(Satellite::Io),
            percent: 30.0,
        });
        let cause = obs.mutual_cause().unwrap();
        assert_eq!(cause.by, Occluder::Satellite(Satellite::Io));
    }

    #[test]
    fn fully_obscured_needs_total_phase() {
        let mut obs = blank(Satellite::Io);
        obs.occulted = true;
        obs.causes.push(PhenomenonCause {
            kind: CauseKind::OccultedBy,
            by: Occluder::Primary(Body::Jupiter),
            percent: 60.0,
        });
        assert!(!obs.fully_obscured_by_primary());
        obs.causes[0].percent = 100.0;
        assert!(obs.fully_obscured_by_primary());
    }

    #[test]
    fn mutual_total_does_not_count_as_primary_obscuration() {
        let mut obs = blank(Satellite::Io);
        obs.causes.push(PhenomenonCause {
            kind: CauseKind::OccultedBy,
            by: Occluder::Satellite(Satellite::Ganymede),
            percent: 100.0,
        });
        assert!(!obs.fully_obscured_by_primary());
    }
}
