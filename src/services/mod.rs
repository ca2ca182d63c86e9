pub(crate) mod feed;
pub(crate) mod resolver;
pub(crate) mod weather;

pub(crate) use feed::FeedGenerator;
pub(crate) use weather::WeatherService;
