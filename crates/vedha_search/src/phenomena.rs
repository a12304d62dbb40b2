//! Planetary-phenomena search engine.
//!
//! Two-pass search over a time range: a coarse scan detects that *some*
//! phenomenon is in progress, then a fine refinement pass resolves every
//! concurrent event's boundaries to half the fine step. Event-free
//! stretches are crossed with an adaptive skip proportional to the
//! satellites' projected clearance from the planet's disk, which never
//! changes the output, only how fast the cursor gets there.

use std::collections::BTreeMap;

use log::warn;

use vedha_core::{
    Body, CauseKind, Observer, Occluder, SatelliteObservation, SatelliteStateProvider,
};

use crate::error::SearchError;
use crate::phenomena_types::{EventBoundary, EventKind, EventRecord, PhenomenaScanConfig};
use crate::search_util::{
    OpenEvent, min_disk_separation, same_signature, sec_to_days, sort_batch,
};

/// Fine refinement window bound in days.
const REFINE_WINDOW_DAYS: f64 = 1.0;

/// Steady-state peek distance: multiple of the fine step, with a floor.
const PEEK_FACTOR: f64 = 20.0;
const PEEK_FLOOR_SEC: f64 = 20.0;

/// Adaptive skip through event-free stretches, in seconds per planet radius
/// of clearance. The fastest supported satellite (Phobos) needs ~1600 s to
/// cover one planet radius of projected sky distance, so this rate cannot
/// step over an onset.
const SKIP_SEC_PER_RADIUS: f64 = 600.0;

/// Backward widenings attempted when a phenomenon is already in progress at
/// the start of a refinement window.
const MAX_WIDENINGS: u32 = 3;

/// Forward horizon for `next_planetary_phenomenon`, in days.
const MAX_SCAN_DAYS: f64 = 800.0;
const NEXT_CHUNK_DAYS: f64 = 30.0;

/// The two open-event slots tracked per satellite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum SlotClass {
    /// Occultation or transit (observer view).
    ObserverView,
    /// Eclipse or shadow transit (Sun view).
    SunView,
}

impl SlotClass {
    const fn other(self) -> Self {
        match self {
            Self::ObserverView => Self::SunView,
            Self::SunView => Self::ObserverView,
        }
    }
}

/// Current phenomenon kind in a slot's class, if any. Within one view the
/// two kinds are mutually exclusive (they differ only in the sign of the
/// depth coordinate).
fn slot_kind(obs: &SatelliteObservation, class: SlotClass) -> Option<EventKind> {
    match class {
        SlotClass::ObserverView => {
            if obs.occulted {
                Some(EventKind::Occulted)
            } else if obs.transiting {
                Some(EventKind::Transit)
            } else {
                None
            }
        }
        SlotClass::SunView => {
            if obs.eclipsed {
                Some(EventKind::Eclipsed)
            } else if obs.shadow_transiting {
                Some(EventKind::ShadowTransit)
            } else {
                None
            }
        }
    }
}

/// Obscured percent backing a slot kind, when the kind has a partial phase.
fn slot_percent(obs: &SatelliteObservation, kind: EventKind) -> Option<f64> {
    match kind {
        EventKind::Occulted => obs.primary_percent(CauseKind::OccultedBy),
        EventKind::Eclipsed => obs.primary_percent(CauseKind::EclipsedBy),
        EventKind::Transit | EventKind::ShadowTransit => None,
    }
}

fn detection_gate(
    obs: &SatelliteObservation,
    observer: &Observer,
    config: &PhenomenaScanConfig,
) -> bool {
    if !obs.any_phenomenon() {
        return false;
    }
    if config.topocentric_filter && observer.is_topocentric() {
        return obs.ephemeris.elevation_deg > 0.0;
    }
    true
}

/// Search a time range for occultations, transits, eclipses and shadow
/// transits of the primary's satellites.
///
/// `jd_start`/`jd_end` are Julian Dates (TDB). Records come back in
/// non-decreasing start order; identical inputs always produce identical
/// output. An unsupported primary is rejected before the provider is ever
/// queried.
pub fn scan_planetary_phenomena<P: SatelliteStateProvider>(
    provider: &P,
    observer: &Observer,
    jd_start: f64,
    jd_end: f64,
    config: &PhenomenaScanConfig,
) -> Result<Vec<EventRecord>, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;
    if jd_end <= jd_start {
        return Err(SearchError::InvalidConfig("jd_end must be after jd_start"));
    }
    let primary = provider.primary();
    primary.shape()?;

    let coarse = sec_to_days(config.coarse_step_sec);
    let fine = sec_to_days(config.fine_step_sec);
    let mut events = Vec::new();
    let mut t = jd_start;

    while t <= jd_end {
        let obs = provider.observations(t, observer)?;

        if obs.iter().any(|o| detection_gate(o, observer, config)) {
            let batch = refine(provider, observer, primary, t, config)?;
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
            let clearance = min_disk_separation(&obs) - 1.0;
            let extra = if clearance > 0.0 {
                sec_to_days(clearance * SKIP_SEC_PER_RADIUS)
            } else {
                0.0
            };
            t += coarse + extra;
        }
    }

    Ok(events)
}

/// First planetary phenomenon at or after `jd_tdb`, scanning forward in
/// bounded chunks up to [`MAX_SCAN_DAYS`].
pub fn next_planetary_phenomenon<P: SatelliteStateProvider>(
    provider: &P,
    observer: &Observer,
    jd_tdb: f64,
    config: &PhenomenaScanConfig,
) -> Result<Option<EventRecord>, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;
    provider.primary().shape()?;

    let limit = jd_tdb + MAX_SCAN_DAYS;
    let mut start = jd_tdb;
    while start < limit {
        let end = (start + NEXT_CHUNK_DAYS).min(limit);
        let events = scan_planetary_phenomena(provider, observer, start, end, config)?;
        if let Some(first) = events.into_iter().next() {
            return Ok(Some(first));
        }
        start = end;
    }
    Ok(None)
}

/// Fine refinement around a coarse trigger. Rewinds one coarse step; if a
/// phenomenon is already in progress at the first fine sample the window is
/// widened backward by two coarse steps and restarted, a bounded number of
/// times.
fn refine<P: SatelliteStateProvider>(
    provider: &P,
    observer: &Observer,
    primary: Body,
    trigger_jd: f64,
    config: &PhenomenaScanConfig,
) -> Result<Vec<EventRecord>, SearchError> {
    let coarse = sec_to_days(config.coarse_step_sec);
    let mut window_start = trigger_jd - coarse;

    for _ in 0..MAX_WIDENINGS {
        match refine_window(provider, observer, primary, window_start, config, false)? {
            Some(batch) => return Ok(batch),
            None => {
                warn!(
                    "phenomenon already in progress at JD {window_start:.6}; widening window backward"
                );
                window_start -= 2.0 * coarse;
            }
        }
    }
    // Out of widenings: accept a truncated start rather than fail.
    let batch = refine_window(provider, observer, primary, window_start, config, true)?;
    Ok(batch.unwrap_or_default())
}

/// One fine-sampling pass over a refinement window. Returns `None` when a
/// phenomenon is active at the very first sample and `accept_active` is
/// false (the caller widens and retries).
fn refine_window<P: SatelliteStateProvider>(
    provider: &P,
    observer: &Observer,
    primary: Body,
    window_start: f64,
    config: &PhenomenaScanConfig,
    accept_active: bool,
) -> Result<Option<Vec<EventRecord>>, SearchError> {
    let fine = sec_to_days(config.fine_step_sec);
    let peek = (fine * PEEK_FACTOR).max(sec_to_days(PEEK_FLOOR_SEC));
    let window_end = window_start + REFINE_WINDOW_DAYS;

    let mut open: BTreeMap<(vedha_core::Satellite, SlotClass), OpenEvent> = BTreeMap::new();
    let mut closed: Vec<EventRecord> = Vec::new();
    let mut opened_any = false;
    let mut first_sample = true;
    let mut t = window_start;

    while t <= window_end {
        let obs = provider.observations(t, observer)?;

        if first_sample {
            if !accept_active && obs.iter().any(|o| o.any_phenomenon()) {
                return Ok(None);
            }
            first_sample = false;
        }

        for o in &obs {
            for class in [SlotClass::ObserverView, SlotClass::SunView] {
                let key = (o.satellite, class);
                match (slot_kind(o, class), open.contains_key(&key)) {
                    (Some(kind), false) => {
                        opened_any = true;
                        let doubly_obscured = slot_kind(o, class.other()).is_some();
                        let mut event = OpenEvent {
                            satellite: o.satellite,
                            counterpart: Occluder::Primary(primary),
                            kind,
                            boundary: EventBoundary::None,
                            jd_start: t - fine / 2.0,
                            max_percent: None,
                            elevation_deg: o.ephemeris.elevation_deg,
                            visible_from_earth: !doubly_obscured,
                        };
                        event.update_percent(slot_percent(o, kind));
                        open.insert(key, event);
                    }
                    (Some(_), true) => {
                        if let Some(event) = open.get_mut(&key) {
                            event.update_percent(slot_percent(o, event.kind));
                        }
                    }
                    (None, true) => {
                        if let Some(event) = open.remove(&key) {
                            closed.push(event.close(t - fine / 2.0));
                        }
                    }
                    (None, false) => {}
                }
            }
        }

        if opened_any && open.is_empty() && !closed.is_empty() {
            break;
        }

        // Steady state: if nothing in the flag signature changes one peek
        // ahead, jump there instead of crawling at the fine step.
        if !open.is_empty() {
            let t_peek = t + peek;
            if t_peek <= window_end {
                let peeked = provider.observations(t_peek, observer)?;
                if same_signature(&obs, &peeked) {
                    t = t_peek;
                    continue;
                }
            }
        }

        t += fine;
    }

    // The window cap cuts anything still open; no supported phenomenon
    // outlasts it.
    let cap = t.min(window_end);
    for (_, event) in open {
        closed.push(event.close(cap));
    }
    sort_batch(&mut closed);
    Ok(Some(closed))
}
