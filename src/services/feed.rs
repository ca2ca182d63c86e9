//! Hazard event feed: curated baseline events plus optional synthetic ones,
//! narrowed by country and type filters.
//!
//! Randomness is always passed in, so a seeded RNG reproduces a feed exactly.

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::baseline::baseline_events;
use crate::models::{EventLocation, FeedRequest, HazardEvent, HazardType, Severity, Timeframe};
use crate::regions::{self, RegionBox};

pub const MIN_GENERATED: i64 = 10;
pub const MAX_GENERATED: i64 = 1000;
pub const PROVIDER: &str = "internal-sample";

const GLOBAL: &str = "Global";
const SYNTHETIC_SOURCE: &str = "Generator sample + heuristic";
const GLOBAL_LAT: (f64, f64) = (-60.0, 60.0);
const GLOBAL_LON: (f64, f64) = (-180.0, 180.0);
const CONFIDENCE: (f64, f64) = (0.4, 0.9);

/// Per-request RNG factory. With a seed every request replays the same
/// sequence; without one each request draws fresh entropy.
pub(crate) struct FeedGenerator {
    seed: Option<u64>,
}

impl FeedGenerator {
    pub fn new(seed: Option<u64>) -> Self {
        Self { seed }
    }

    pub fn feed(&self, request: &FeedRequest, now: DateTime<Utc>) -> Vec<HazardEvent> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        get_feed(request, now, &mut rng)
    }
}

pub fn get_feed<R: Rng>(
    request: &FeedRequest,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Vec<HazardEvent> {
    let mut events = baseline_events(now);

    if let Some(count) = generated_count(request.count) {
        events.extend(generate(count, request.country.as_deref(), now, rng));
    }

    let total = events.len();
    let events = apply_filters(events, request);
    log::debug!("Hazard feed: {} of {total} events after filtering", events.len());
    events
}

/// Clamped number of synthetic events, or `None` when none were asked for.
pub fn generated_count(count: Option<i64>) -> Option<usize> {
    count
        .filter(|&c| c > 0)
        .map(|c| c.clamp(MIN_GENERATED, MAX_GENERATED) as usize)
}

/// Synthetic events with ids `EV-1-…` through `EV-<count>-…`.
///
/// `country` must already be lowercased. When it names a registered country
/// each event lands inside one of its region boxes; otherwise events are
/// scattered over non-polar latitudes.
pub fn generate<R: Rng>(
    count: usize,
    country: Option<&str>,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Vec<HazardEvent> {
    let boxes = country.map(regions::boxes_for).unwrap_or(&[]);
    let country_label = country.map(capitalize).unwrap_or_else(|| GLOBAL.to_string());

    (1..=count)
        .map(|index| {
            let kind = HazardType::ALL[rng.gen_range(0..HazardType::ALL.len())];
            let severity = Severity::ALL[rng.gen_range(0..Severity::ALL.len())];
            let region = pick_box(boxes, rng);
            let (lat, lon) = match region {
                Some(b) => (
                    rng.gen_range(b.lat_min..=b.lat_max),
                    rng.gen_range(b.lon_min..=b.lon_max),
                ),
                None => (
                    rng.gen_range(GLOBAL_LAT.0..=GLOBAL_LAT.1),
                    rng.gen_range(GLOBAL_LON.0..=GLOBAL_LON.1),
                ),
            };
            debug_assert!(region.map_or(true, |b| b.contains(lat, lon)));
            let region_name = region.map_or(GLOBAL, |b| b.name);

            HazardEvent {
                id: format!("EV-{index}-{kind}-{severity}"),
                kind,
                severity,
                country: country_label.clone(),
                location: EventLocation {
                    lat: round4(lat),
                    lon: round4(lon),
                    name: Some(region_name.to_string()),
                },
                timeframe: Timeframe { start: now, end: None },
                description: format!("Potential {severity} {kind} in the {region_name} region."),
                confidence: round2(rng.gen_range(CONFIDENCE.0..=CONFIDENCE.1)),
                source: SYNTHETIC_SOURCE.to_string(),
            }
        })
        .collect()
}

/// Keep events matching the country substring and the type set. Order is
/// preserved and applying the same filters again changes nothing.
pub fn apply_filters(mut events: Vec<HazardEvent>, request: &FeedRequest) -> Vec<HazardEvent> {
    if let Some(country) = request.country.as_deref() {
        events.retain(|e| e.country.to_lowercase().contains(country));
    }
    if let Some(types) = &request.types {
        events.retain(|e| types.contains(&e.kind));
    }
    events
}

fn pick_box<'a, R: Rng>(boxes: &'a [RegionBox], rng: &mut R) -> Option<&'a RegionBox> {
    if boxes.is_empty() {
        return None;
    }
    boxes.get(rng.gen_range(0..boxes.len()))
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[inline]
fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[inline]
fn round4(v: f64) -> f64 {
    (v * 10_000.0).round() / 10_000.0
}
