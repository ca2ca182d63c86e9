/// Where a weather lookup should happen. The two forms are exclusive.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationQuery {
    Name(String),
    Coordinates { latitude: f64, longitude: f64 },
}

/// Coordinates a request settled on, built fresh for every request.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub label: Option<String>,
    pub timezone: Option<String>,
}
