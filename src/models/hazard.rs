use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HazardType {
    Flood,
    Landslide,
    Storm,
    Earthquake,
    Tsunami,
}

impl HazardType {
    pub const ALL: [HazardType; 5] = [
        Self::Flood,
        Self::Landslide,
        Self::Storm,
        Self::Earthquake,
        Self::Tsunami,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Flood => "flood",
            Self::Landslide => "landslide",
            Self::Storm => "storm",
            Self::Earthquake => "earthquake",
            Self::Tsunami => "tsunami",
        }
    }

    /// Case-sensitive match against the lowercase wire name.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

impl fmt::Display for HazardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Self::Low, Self::Medium, Self::High];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct EventLocation {
    pub lat: f64,
    pub lon: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Timeframe {
    pub start: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct HazardEvent {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: HazardType,
    pub severity: Severity,
    pub country: String,
    pub location: EventLocation,
    pub timeframe: Timeframe,
    pub description: String,
    /// Likelihood in `[0, 1]`.
    pub confidence: f64,
    pub source: String,
}

/// Normalized feed parameters.
///
/// `types` is `Some` whenever the caller asked for a type filter, even if
/// none of the requested names is a known hazard type; such a filter
/// matches nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedRequest {
    /// Lowercased country name or fragment.
    pub country: Option<String>,
    pub types: Option<HashSet<HazardType>>,
    pub count: Option<i64>,
}
