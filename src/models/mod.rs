pub mod hazard;
pub mod location;
pub mod requests;
pub mod responses;

pub use hazard::{EventLocation, FeedRequest, HazardEvent, HazardType, Severity, Timeframe};
pub use location::{LocationQuery, ResolvedLocation};
pub use requests::{FeedQuery, WeatherQuery};
pub use responses::{
    Coordinates, CurrentConditions, FeedPayload, HealthPayload, HourlyForecast, WeatherSnapshot,
};
