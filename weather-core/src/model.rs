use serde::Deserialize;

/// A free-text place lookup: city plus optional disambiguators.
#[derive(Debug, Clone)]
pub struct LocationQuery {
    pub city: String,
    pub state_code: Option<String>,
    pub country_code: Option<String>,
}

impl LocationQuery {
    pub fn new(city: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            state_code: None,
            country_code: None,
        }
    }

    pub fn with_state(mut self, state_code: Option<String>) -> Self {
        self.state_code = state_code;
        self
    }

    pub fn with_country(mut self, country_code: Option<String>) -> Self {
        self.country_code = country_code;
        self
    }

    /// Build the provider query string: non-empty parts joined by commas,
    /// in city -> state -> country order. Absent parts produce no token.
    pub fn query_string(&self) -> String {
        let mut parts = vec![self.city.as_str()];
        parts.extend(
            [self.state_code.as_deref(), self.country_code.as_deref()]
                .into_iter()
                .flatten()
                .filter(|s| !s.is_empty()),
        );
        parts.join(",")
    }
}

/// A latitude/longitude pair in decimal degrees.
///
/// Values are passed to the provider as-is; no range validation happens
/// on this side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// One candidate returned by the geocoding endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct GeoCandidate {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub country: Option<String>,
    pub state: Option<String>,
}

impl GeoCandidate {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            lat: self.lat,
            lon: self.lon,
        }
    }
}

/// Measurement system for temperature and wind speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Units {
    #[default]
    Metric,
    Imperial,
    Standard,
}

impl Units {
    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
            Units::Standard => "standard",
        }
    }

    pub fn temperature_suffix(&self) -> &'static str {
        match self {
            Units::Metric => "°C",
            Units::Imperial => "°F",
            Units::Standard => "K",
        }
    }

    pub fn wind_speed_suffix(&self) -> &'static str {
        match self {
            Units::Metric | Units::Standard => "m/s",
            Units::Imperial => "mph",
        }
    }
}

/// Current conditions as reported by the provider.
///
/// Every field is optional: the provider omits sections freely, and a
/// partially-populated report must still render. Defaulting to a
/// placeholder happens at render time, not here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WeatherReport {
    pub name: Option<String>,
    #[serde(default)]
    pub weather: Vec<Condition>,
    pub main: Option<MainMetrics>,
    pub wind: Option<Wind>,
}

impl WeatherReport {
    /// The primary condition entry, when the provider sent one.
    pub fn primary_condition(&self) -> Option<&Condition> {
        self.weather.first()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Condition {
    pub main: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MainMetrics {
    pub temp: Option<f64>,
    pub feels_like: Option<f64>,
    pub humidity: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Wind {
    pub speed: Option<f64>,
}
