/// WMO weather interpretation codes as reported by the forecast provider.
const DESCRIPTIONS: &[(i64, &str)] = &[
    (0, "Clear sky"),
    (1, "Mainly clear"),
    (2, "Partly cloudy"),
    (3, "Overcast"),
    (45, "Fog"),
    (48, "Depositing rime fog"),
    (51, "Light drizzle"),
    (53, "Moderate drizzle"),
    (55, "Dense drizzle"),
    (56, "Freezing drizzle"),
    (57, "Freezing drizzle"),
    (61, "Slight rain"),
    (63, "Moderate rain"),
    (65, "Heavy rain"),
    (66, "Freezing rain"),
    (67, "Freezing rain"),
    (71, "Slight snow fall"),
    (73, "Moderate snow fall"),
    (75, "Heavy snow fall"),
    (77, "Snow grains"),
    (80, "Rain showers"),
    (81, "Rain showers"),
    (82, "Rain showers"),
    (85, "Snow showers"),
    (86, "Snow showers"),
    (95, "Thunderstorm"),
    (96, "Thunderstorm with hail"),
    (99, "Thunderstorm with hail"),
];

pub const UNKNOWN: &str = "Unknown";

/// Human-readable description for a weather code. Total: missing or
/// unlisted codes yield `"Unknown"`.
pub fn describe(code: Option<i64>) -> &'static str {
    code.and_then(|c| {
        DESCRIPTIONS
            .iter()
            .find(|(known, _)| *known == c)
            .map(|(_, text)| *text)
    })
    .unwrap_or(UNKNOWN)
}

/// Coarse sky condition used for icons and background palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherCategory {
    Clear,
    Cloudy,
    Fog,
    Rain,
    Snow,
    Thunderstorm,
    Unknown,
}

impl WeatherCategory {
    pub fn from_code(code: Option<i64>) -> Self {
        match code {
            Some(0 | 1) => Self::Clear,
            Some(2 | 3) => Self::Cloudy,
            Some(45 | 48) => Self::Fog,
            Some(61 | 63 | 65 | 80..=82) => Self::Rain,
            Some(71 | 73 | 75 | 77 | 85 | 86) => Self::Snow,
            Some(95 | 96 | 99) => Self::Thunderstorm,
            _ => Self::Unknown,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Clear => "/icons/sun.svg",
            Self::Cloudy | Self::Unknown => "/icons/cloud.svg",
            Self::Fog => "/icons/fog.svg",
            Self::Rain => "/icons/rain.svg",
            Self::Snow => "/icons/snow.svg",
            Self::Thunderstorm => "/icons/storm.svg",
        }
    }

    /// Palette name for the backdrop; fog shares the overcast palette.
    pub fn gradient(self) -> &'static str {
        match self {
            Self::Clear => "sky",
            Self::Cloudy | Self::Fog => "overcast",
            Self::Rain => "rain",
            Self::Snow => "snow",
            Self::Thunderstorm => "storm",
            Self::Unknown => "slate",
        }
    }
}
