//! Body and satellite identifiers, and primary-body shape parameters.

use crate::error::CoreError;

/// Major solar-system bodies.
///
/// Any of these can be named in a request; only [`Body::supports_satellites`]
/// primaries are accepted by the phenomena scans. Keeping the full set here
/// lets an unsupported request be expressed and rejected fast instead of
/// being unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    Sun,
    Mercury,
    Venus,
    Earth,
    Moon,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

impl Body {
    /// NAIF-style body code.
    pub const fn code(self) -> i32 {
        match self {
            Self::Sun => 10,
            Self::Mercury => 199,
            Self::Venus => 299,
            Self::Earth => 399,
            Self::Moon => 301,
            Self::Mars => 499,
            Self::Jupiter => 599,
            Self::Saturn => 699,
            Self::Uranus => 799,
            Self::Neptune => 899,
            Self::Pluto => 999,
        }
    }

    /// Convert a NAIF-style body code into a [`Body`].
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            10 => Some(Self::Sun),
            199 => Some(Self::Mercury),
            299 => Some(Self::Venus),
            399 => Some(Self::Earth),
            301 => Some(Self::Moon),
            499 => Some(Self::Mars),
            599 => Some(Self::Jupiter),
            699 => Some(Self::Saturn),
            799 => Some(Self::Uranus),
            899 => Some(Self::Neptune),
            999 => Some(Self::Pluto),
            _ => None,
        }
    }

    /// Whether this body is a supported satellite-phenomena primary.
    pub const fn supports_satellites(self) -> bool {
        matches!(self, Self::Mars | Self::Jupiter | Self::Saturn | Self::Uranus)
    }

    /// Shape parameters for a supported primary.
    pub fn shape(self) -> Result<PrimaryShape, CoreError> {
        PrimaryShape::of(self).ok_or(CoreError::UnsupportedPrimary(self))
    }
}

/// Natural satellites handled by the phenomena system.
///
/// Mars carries its two moons, Jupiter the Galilean four, Saturn the eight
/// classical satellites through Iapetus, Uranus the five major moons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Satellite {
    Phobos,
    Deimos,
    Io,
    Europa,
    Ganymede,
    Callisto,
    Mimas,
    Enceladus,
    Tethys,
    Dione,
    Rhea,
    Titan,
    Hyperion,
    Iapetus,
    Miranda,
    Ariel,
    Umbriel,
    Titania,
    Oberon,
}

impl Satellite {
    /// The primary this satellite orbits.
    pub const fn primary(self) -> Body {
        match self {
            Self::Phobos | Self::Deimos => Body::Mars,
            Self::Io | Self::Europa | Self::Ganymede | Self::Callisto => Body::Jupiter,
            Self::Mimas
            | Self::Enceladus
            | Self::Tethys
            | Self::Dione
            | Self::Rhea
            | Self::Titan
            | Self::Hyperion
            | Self::Iapetus => Body::Saturn,
            Self::Miranda | Self::Ariel | Self::Umbriel | Self::Titania | Self::Oberon => {
                Body::Uranus
            }
        }
    }

    /// NAIF-style satellite code.
    pub const fn code(self) -> i32 {
        match self {
            Self::Phobos => 401,
            Self::Deimos => 402,
            Self::Io => 501,
            Self::Europa => 502,
            Self::Ganymede => 503,
            Self::Callisto => 504,
            Self::Mimas => 601,
            Self::Enceladus => 602,
            Self::Tethys => 603,
            Self::Dione => 604,
            Self::Rhea => 605,
            Self::Titan => 606,
            Self::Hyperion => 607,
            Self::Iapetus => 608,
            Self::Miranda => 705,
            Self::Ariel => 701,
            Self::Umbriel => 702,
            Self::Titania => 703,
            Self::Oberon => 704,
        }
    }

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Phobos => "Phobos",
            Self::Deimos => "Deimos",
            Self::Io => "Io",
            Self::Europa => "Europa",
            Self::Ganymede => "Ganymede",
            Self::Callisto => "Callisto",
            Self::Mimas => "Mimas",
            Self::Enceladus => "Enceladus",
            Self::Tethys => "Tethys",
            Self::Dione => "Dione",
            Self::Rhea => "Rhea",
            Self::Titan => "Titan",
            Self::Hyperion => "Hyperion",
            Self::Iapetus => "Iapetus",
            Self::Miranda => "Miranda",
            Self::Ariel => "Ariel",
            Self::Umbriel => "Umbriel",
            Self::Titania => "Titania",
            Self::Oberon => "Oberon",
        }
    }
}

/// Satellites of a primary, in theory order (increasing orbital distance).
/// Empty for bodies without supported satellites.
pub const fn satellites_of(primary: Body) -> &'static [Satellite] {
    match primary {
        Body::Mars => &[Satellite::Phobos, Satellite::Deimos],
        Body::Jupiter => &[
            Satellite::Io,
            Satellite::Europa,
            Satellite::Ganymede,
            Satellite::Callisto,
        ],
        Body::Saturn => &[
            Satellite::Mimas,
            Satellite::Enceladus,
            Satellite::Tethys,
            Satellite::Dione,
            Satellite::Rhea,
            Satellite::Titan,
            Satellite::Hyperion,
            Satellite::Iapetus,
        ],
        Body::Uranus => &[
            Satellite::Miranda,
            Satellite::Ariel,
            Satellite::Umbriel,
            Satellite::Titania,
            Satellite::Oberon,
        ],
        _ => &[],
    }
}

/// Shape parameters of a supported primary (IAU 2015 nominal values).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrimaryShape {
    /// Equatorial radius in km.
    pub equatorial_radius_km: f64,
    /// Flattening factor: ratio of equatorial to polar radius (>= 1).
    /// Used to approximate the oblate disk as a scaled circle.
    pub flattening: f64,
}

impl PrimaryShape {
    /// Shape of a supported primary; `None` for other bodies.
    pub const fn of(body: Body) -> Option<Self> {
        match body {
            Body::Mars => Some(Self {
                equatorial_radius_km: 3396.2,
                flattening: 3396.2 / 3376.2,
            }),
            Body::Jupiter => Some(Self {
                equatorial_radius_km: 71_492.0,
                flattening: 71_492.0 / 66_854.0,
            }),
            Body::Saturn => Some(Self {
                equatorial_radius_km: 60_268.0,
                flattening: 60_268.0 / 54_364.0,
            }),
            Body::Uranus => Some(Self {
                equatorial_radius_km: 25_559.0,
                flattening: 25_559.0 / 24_973.0,
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_code_roundtrip() {
        for body in [
            Body::Sun,
            Body::Mercury,
            Body::Venus,
            Body::Earth,
            Body::Moon,
            Body::Mars,
            Body::Jupiter,
            Body::Saturn,
            Body::Uranus,
            Body::Neptune,
            Body::Pluto,
        ] {
            assert_eq!(Body::from_code(body.code()), Some(body));
        }
    }

    #[test]
    fn unknown_body_code() {
        assert_eq!(Body::from_code(42), None);
    }

    #[test]
    fn supported_primaries() {
        assert!(Body::Mars.supports_satellites());
        assert!(Body::Jupiter.supports_satellites());
        assert!(Body::Saturn.supports_satellites());
        assert!(Body::Uranus.supports_satellites());
        assert!(!Body::Venus.supports_satellites());
        assert!(!Body::Neptune.supports_satellites());
    }

    #[test]
    fn satellite_counts() {
        assert_eq!(satellites_of(Body::Mars).len(), 2);
        assert_eq!(satellites_of(Body::Jupiter).len(), 4);
        assert_eq!(satellites_of(Body::Saturn).len(), 8);
        assert_eq!(satellites_of(Body::Uranus).len(), 5);
        assert!(satellites_of(Body::Venus).is_empty());
    }

    #[test]
    fn satellites_belong_to_their_primary() {
        for primary in [Body::Mars, Body::Jupiter, Body::Saturn, Body::Uranus] {
            for sat in satellites_of(primary) {
                assert_eq!(sat.primary(), primary, "{}", sat.name());
            }
        }
    }

    #[test]
    fn shape_rejects_unsupported() {
        assert!(Body::Venus.shape().is_err());
        assert!(Body::Jupiter.shape().is_ok());
    }

    #[test]
    fn flattening_at_least_one() {
        for primary in [Body::Mars, Body::Jupiter, Body::Saturn, Body::Uranus] {
            let shape = primary.shape().unwrap();
            assert!(shape.flattening >= 1.0);
            assert!(shape.equatorial_radius_km > 0.0);
        }
    }

    #[test]
    fn uranian_codes_follow_naif() {
        // Discovery-order codes: Ariel 701 .. Miranda 705.
        assert_eq!(Satellite::Ariel.code(), 701);
        assert_eq!(Satellite::Miranda.code(), 705);
    }
}
