/// Named lat/lon rectangle used to bias synthetic event placement.
///
/// Boxes only approximate a country's geography; they are never used for
/// containment checks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionBox {
    pub name: &'static str,
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
}

impl RegionBox {
    const fn new(name: &'static str, lat_min: f64, lat_max: f64, lon_min: f64, lon_max: f64) -> Self {
        Self { name, lat_min, lat_max, lon_min, lon_max }
    }

    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        (self.lat_min..=self.lat_max).contains(&lat) && (self.lon_min..=self.lon_max).contains(&lon)
    }
}

const INDONESIA: &[RegionBox] = &[
    RegionBox::new("Sumatra", -6.0, 5.9, 95.0, 106.0),
    RegionBox::new("Jawa", -8.5, -5.5, 105.0, 114.0),
    RegionBox::new("Kalimantan", -3.0, 3.0, 108.0, 117.0),
    RegionBox::new("Sulawesi", -5.5, 1.6, 118.0, 125.0),
    RegionBox::new("Papua", -9.0, -1.0, 131.0, 141.0),
];

const JAPAN: &[RegionBox] = &[RegionBox::new("Honshu", 34.0, 41.0, 136.0, 141.0)];

const INDIA: &[RegionBox] = &[RegionBox::new("India", 8.0, 28.0, 72.0, 88.0)];

const UNITED_STATES: &[RegionBox] = &[RegionBox::new("US", 25.0, 49.0, -124.0, -66.0)];

/// Regions keyed by lowercased country name.
const REGISTRY: &[(&str, &[RegionBox])] = &[
    ("indonesia", INDONESIA),
    ("japan", JAPAN),
    ("india", INDIA),
    ("united states", UNITED_STATES),
];

/// Boxes for an exact lowercased country key. Unknown countries yield an
/// empty slice, meaning no regional bias is available.
pub fn boxes_for(country: &str) -> &'static [RegionBox] {
    REGISTRY
        .iter()
        .find(|(key, _)| *key == country)
        .map(|(_, boxes)| *boxes)
        .unwrap_or(&[])
}
