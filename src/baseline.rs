use chrono::{DateTime, Utc};

use crate::models::{EventLocation, HazardEvent, HazardType, Severity, Timeframe};

struct Curated {
    id: &'static str,
    kind: HazardType,
    severity: Severity,
    country: &'static str,
    lat: f64,
    lon: f64,
    place: &'static str,
    description: &'static str,
    confidence: f64,
    source: &'static str,
}

/// Hand-authored events that lead every feed.
const CURATED: &[Curated] = &[
    Curated {
        id: "ID-JKT-FLD-1",
        kind: HazardType::Flood,
        severity: Severity::High,
        country: "Indonesia",
        lat: -6.2088,
        lon: 106.8456,
        place: "Jakarta",
        description: "Heavy rainfall may flood Jakarta and its surroundings within the next 24 hours.",
        confidence: 0.82,
        source: "Internal model + Open-Meteo forecast",
    },
    Curated {
        id: "ID-JBR-LND-1",
        kind: HazardType::Landslide,
        severity: Severity::Medium,
        country: "Indonesia",
        lat: -7.8024,
        lon: 110.3647,
        place: "Yogyakarta / Hills",
        description: "Moderate landslide risk on hillsides after medium-intensity rain.",
        confidence: 0.66,
        source: "Rainfall heuristic + general contours",
    },
    Curated {
        id: "JP-TKO-ST-1",
        kind: HazardType::Storm,
        severity: Severity::Medium,
        country: "Japan",
        lat: 35.6762,
        lon: 139.6503,
        place: "Tokyo",
        description: "Strong winds and heavy rain are expected over Tokyo.",
        confidence: 0.58,
        source: "Open-Meteo forecast",
    },
    Curated {
        id: "US-NYC-FLD-1",
        kind: HazardType::Flood,
        severity: Severity::Low,
        country: "United States",
        lat: 40.7128,
        lon: -74.006,
        place: "New York",
        description: "Localized ponding may occur at several points in the city.",
        confidence: 0.44,
        source: "Open-Meteo forecast",
    },
    Curated {
        id: "IN-MUM-FLD-1",
        kind: HazardType::Flood,
        severity: Severity::High,
        country: "India",
        lat: 19.076,
        lon: 72.8777,
        place: "Mumbai",
        description: "Intense monsoon rainfall may cause major flooding.",
        confidence: 0.86,
        source: "Internal model + Open-Meteo",
    },
    Curated {
        id: "ID-ACE-TSU-1",
        kind: HazardType::Tsunami,
        severity: Severity::High,
        country: "Indonesia",
        lat: 5.55,
        lon: 95.3167,
        place: "Aceh (Coast)",
        description: "Possible tsunami on the Aceh coast linked to offshore seismic activity. Monitor official warnings.",
        confidence: 0.73,
        source: "Scenario simulation + seismic activity",
    },
    Curated {
        id: "JP-PAC-EQ-1",
        kind: HazardType::Earthquake,
        severity: Severity::Medium,
        country: "Japan",
        lat: 36.2048,
        lon: 138.2529,
        place: "Honshu",
        description: "Moderate seismic activity may produce an onshore earthquake. Follow local authority updates.",
        confidence: 0.51,
        source: "Global seismic feed (simulated)",
    },
];

/// The curated events, stamped as starting at `now`.
pub fn baseline_events(now: DateTime<Utc>) -> Vec<HazardEvent> {
    CURATED
        .iter()
        .map(|c| HazardEvent {
            id: c.id.to_string(),
            kind: c.kind,
            severity: c.severity,
            country: c.country.to_string(),
            location: EventLocation {
                lat: c.lat,
                lon: c.lon,
                name: Some(c.place.to_string()),
            },
            timeframe: Timeframe { start: now, end: None },
            description: c.description.to_string(),
            confidence: c.confidence,
            source: c.source.to_string(),
        })
        .collect()
}
