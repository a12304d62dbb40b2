//! Observer descriptor passed through to the ephemeris pipeline.

/// Geographic location for topocentric observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive.
    pub latitude_deg: f64,
    /// Longitude in degrees, east positive.
    pub longitude_deg: f64,
    /// Altitude above the reference ellipsoid in meters.
    pub altitude_m: f64,
}

/// Whether apparent places are geocentric or corrected for an observing site.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ObserverMode {
    Geocentric,
    Topocentric(GeoLocation),
}

/// Observer descriptor.
///
/// The ephemeris pipeline interprets the mode; this core only inspects
/// [`Observer::is_topocentric`] to decide whether elevation filtering is
/// meaningful.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observer {
    pub mode: ObserverMode,
}

impl Observer {
    /// Geocentric observer.
    pub const fn geocentric() -> Self {
        Self {
            mode: ObserverMode::Geocentric,
        }
    }

    /// Topocentric observer at a site.
    pub const fn topocentric(location: GeoLocation) -> Self {
        Self {
            mode: ObserverMode::Topocentric(location),
        }
    }

    pub const fn is_topocentric(&self) -> bool {
        matches!(self.mode, ObserverMode::Topocentric(_))
    }
}
