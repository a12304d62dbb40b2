//! Mutual-phenomena search engine.
//!
//! Same two-pass shape as the planetary scan, but detection is driven by
//! the structured phenomenon descriptors on each observation rather than
//! the four planetary flags, and the refinement tracks a single open slot
//! per satellite: the model assumes a satellite is never mid-event with two
//! different partners at once, so a second concurrent partner only feeds
//! the running maximum percent.

use std::collections::BTreeMap;

use log::warn;

use vedha_core::{
    CauseKind, Observer, Occluder, PhenomenonCause, SatelliteObservation,
    SatelliteStateProvider,
};

use crate::error::SearchError;
use crate::phenomena_types::{EventBoundary, EventKind, EventRecord, MutualScanConfig};
use crate::search_util::{OpenEvent, min_pair_separation, sec_to_days, sort_batch};

/// Fine refinement window bound in days.
const REFINE_WINDOW_DAYS: f64 = 1.0;

/// Fixed fine step for mutual refinement, seconds. The mutual entry point
/// takes no fine-accuracy parameter.
const MUTUAL_FINE_STEP_SEC: f64 = 10.0;

/// Adaptive skip through event-free stretches, seconds per planet radius of
/// pair clearance. Two satellites close at most at twice the fastest
/// orbital rate, hence half the planetary rate.
const MUTUAL_SKIP_SEC_PER_RADIUS: f64 = 300.0;

/// Backward widenings attempted when an event is already in progress at the
/// start of a refinement window.
const MAX_WIDENINGS: u32 = 3;

/// Forward horizon for `next_mutual_phenomenon`, in days.
const MAX_SCAN_DAYS: f64 = 800.0;
const NEXT_CHUNK_DAYS: f64 = 30.0;

/// The descriptor that makes an observation count as a mutual detection:
/// any satellite-caused entry, plus planet-caused partial entries when the
/// configuration folds those in.
fn detection_cause<'a>(
    obs: &'a SatelliteObservation,
    config: &MutualScanConfig,
) -> Option<&'a PhenomenonCause> {
    obs.causes.iter().find(|c| match c.by {
        Occluder::Satellite(_) => true,
        Occluder::Primary(_) => config.include_planet_partials && c.percent < 100.0,
    })
}

const fn cause_kind(kind: CauseKind) -> EventKind {
    match kind {
        CauseKind::OccultedBy => EventKind::Occulted,
        CauseKind::EclipsedBy => EventKind::Eclipsed,
    }
}

/// Search a time range for mutual phenomena between the primary's
/// satellites.
///
/// Records come back in non-decreasing start order; identical inputs always
/// produce identical output. `max_percent` carries the maximum obscuration
/// seen over each event's lifetime. An unsupported primary is rejected
/// before the provider is ever queried.
pub fn scan_mutual_phenomena<P: SatelliteStateProvider>(
    provider: &P,
    observer: &Observer,
    jd_start: f64,
    jd_end: f64,
    config: &MutualScanConfig,
) -> Result<Vec<EventRecord>, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;
    if jd_end <= jd_start {
        return Err(SearchError::InvalidConfig("jd_end must be after jd_start"));
    }
    provider.primary().shape()?;

    let coarse = sec_to_days(config.coarse_step_sec);
    let fine = sec_to_days(MUTUAL_FINE_STEP_SEC);
    let mut events = Vec::new();
    let mut t = jd_start;

    while t <= jd_end {
        let obs = provider.observations(t, observer)?;

        if obs.iter().any(|o| detection_cause(o, config).is_some()) {
            let batch = refine(provider, observer, t, config)?;
            if batch.is_empty() {
                t += coarse;
            } else {
                let latest = batch
                    .iter()
                    .map(|e| e.jd_end)
                    .fold(f64::NEG_INFINITY, f64::max);
                events.extend(batch);
                t = latest.max(t) + fine;
            }
        } else {
            // Distinct-pair clearance; see DESIGN.md on the original's
            // same-satellite-twice distance heuristic.
            let clearance = min_pair_separation(&obs) - 1.0;
            let extra = if clearance > 0.0 && clearance.is_finite() {
                sec_to_days(clearance * MUTUAL_SKIP_SEC_PER_RADIUS)
            } else {
                0.0
            };
            t += coarse + extra;
        }
    }

    Ok(events)
}

/// First mutual phenomenon at or after `jd_tdb`, scanning forward in
/// bounded chunks up to [`MAX_SCAN_DAYS`].
pub fn next_mutual_phenomenon<P: SatelliteStateProvider>(
    provider: &P,
    observer: &Observer,
    jd_tdb: f64,
    config: &MutualScanConfig,
) -> Result<Option<EventRecord>, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;
    provider.primary().shape()?;

    let limit = jd_tdb + MAX_SCAN_DAYS;
    let mut start = jd_tdb;
    while start < limit {
        let end = (start + NEXT_CHUNK_DAYS).min(limit);
        let events = scan_mutual_phenomena(provider, observer, start, end, config)?;
        if let Some(first) = events.into_iter().next() {
            return Ok(Some(first));
        }
        start = end;
    }
    Ok(None)
}

fn refine<P: SatelliteStateProvider>(
    provider: &P,
    observer: &Observer,
    trigger_jd: f64,
    config: &MutualScanConfig,
) -> Result<Vec<EventRecord>, SearchError> {
    let coarse = sec_to_days(config.coarse_step_sec);
    let mut window_start = trigger_jd - coarse;

    for _ in 0..MAX_WIDENINGS {
        match refine_window(provider, observer, window_start, config, false)? {
            Some(batch) => return Ok(batch),
            None => {
                warn!(
                    "mutual event already in progress at JD {window_start:.6}; widening window backward"
                );
                window_start -= 2.0 * coarse;
            }
        }
    }
    let batch = refine_window(provider, observer, window_start, config, true)?;
    Ok(batch.unwrap_or_default())
}

fn refine_window<P: SatelliteStateProvider>(
    provider: &P,
    observer: &Observer,
    window_start: f64,
    config: &MutualScanConfig,
    accept_active: bool,
) -> Result<Option<Vec<EventRecord>>, SearchError> {
    let fine = sec_to_days(MUTUAL_FINE_STEP_SEC);
    let window_end = window_start + REFINE_WINDOW_DAYS;

    let mut open: BTreeMap<vedha_core::Satellite, OpenEvent> = BTreeMap::new();
    let mut closed: Vec<EventRecord> = Vec::new();
    let mut opened_any = false;
    let mut first_sample = true;
    let mut t = window_start;

    while t <= window_end {
        let obs = provider.observations(t, observer)?;

        if first_sample {
            if !accept_active && obs.iter().any(|o| detection_cause(o, config).is_some()) {
                return Ok(None);
            }
            first_sample = false;
        }

        for o in &obs {
            match (detection_cause(o, config), open.contains_key(&o.satellite)) {
                (Some(cause), false) => {
                    opened_any = true;
                    // A partial-phase edge that coincides with the satellite
                    // being fully obscured by the primary marks entry into
                    // totality rather than a free-sky event start.
                    let in_totality = o.fully_obscured_by_primary();
                    let mut event = OpenEvent {
                        satellite: o.satellite,
                        counterpart: cause.by,
                        kind: cause_kind(cause.kind),
                        boundary: if in_totality {
                            EventBoundary::Start
                        } else {
                            EventBoundary::None
                        },
                        jd_start: t - fine / 2.0,
                        max_percent: None,
                        elevation_deg: o.ephemeris.elevation_deg,
                        visible_from_earth: !in_totality,
                    };
                    event.update_percent(Some(cause.percent));
                    open.insert(o.satellite, event);
                }
                (Some(cause), true) => {
                    if let Some(event) = open.get_mut(&o.satellite) {
                        event.update_percent(Some(cause.percent));
                    }
                }
                (None, true) => {
                    if let Some(mut event) = open.remove(&o.satellite) {
                        if event.boundary == EventBoundary::None
                            && o.fully_obscured_by_primary()
                        {
                            event.boundary = EventBoundary::End;
                        }
                        closed.push(event.close(t - fine / 2.0));
                    }
                }
                (None, false) => {}
            }
        }

        if opened_any && open.is_empty() && !closed.is_empty() {
            break;
        }

        t += fine;
    }

    let cap = t.min(window_end);
    for (_, event) in open {
        closed.push(event.close(cap));
    }
    sort_batch(&mut closed);
    Ok(Some(closed))
}
