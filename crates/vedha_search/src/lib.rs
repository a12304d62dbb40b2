//! Satellite-phenomena event search engine.
//!
//! Scans a time range for phenomena of a planet's natural satellites:
//! - Planetary events: occultations and transits (observer view), eclipses
//!   and shadow transits (Sun view)
//! - Mutual events: one satellite occulting or eclipsing another
//!
//! Both searches use a coarse scan that hands off to a fine boundary
//! refinement, with adaptive skip-ahead through event-free stretches. All
//! geometric state comes from a `SatelliteStateProvider`; the engine never
//! touches raw ephemerides.

pub mod error;
pub mod mutual;
pub mod phenomena;
pub mod phenomena_types;
pub(crate) mod search_util;

pub use error::SearchError;
pub use mutual::{next_mutual_phenomenon, scan_mutual_phenomena};
pub use phenomena::{next_planetary_phenomenon, scan_planetary_phenomena};
pub use phenomena_types::{
    EventBoundary, EventKind, EventRecord, MutualScanConfig, PhenomenaScanConfig,
};
