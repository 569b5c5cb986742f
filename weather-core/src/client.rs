use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::error::ClientError;
use crate::model::{GeoCandidate, LocationQuery, Units, WeatherReport};

const CURRENT_WEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
const GEOCODING_URL: &str = "https://api.openweathermap.org/geo/1.0";

/// Client for the OpenWeatherMap geocoding and current-weather endpoints.
///
/// Both operations share one failure-normalization contract: the caller
/// sees either a parsed value or `None`. Transport errors, non-2xx
/// statuses, and malformed bodies are logged here and never propagated.
#[derive(Debug, Clone)]
pub struct OwmClient {
    api_key: String,
    http: Client,
    geocoding_url: String,
    weather_url: String,
}

impl OwmClient {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            http: Client::new(),
            geocoding_url: GEOCODING_URL.to_string(),
            weather_url: CURRENT_WEATHER_URL.to_string(),
        }
    }

    #[cfg(test)]
    pub fn new_with_base_urls(api_key: &str, geocoding_url: &str, weather_url: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            http: Client::new(),
            geocoding_url: geocoding_url.to_string(),
            weather_url: weather_url.to_string(),
        }
    }

    /// Resolve a place description to its best geocoding candidate.
    ///
    /// Asks the provider for a single match (`limit=1`). An empty candidate
    /// list is a normal outcome, reported as `None` like any failure.
    pub async fn resolve_coordinates(&self, query: &LocationQuery) -> Option<GeoCandidate> {
        let url = format!("{}/direct", self.geocoding_url);
        let params = [
            ("q", query.query_string()),
            ("appid", self.api_key.clone()),
            ("limit", "1".to_string()),
        ];

        let candidates: Vec<GeoCandidate> = match self.get_json(&url, &params).await {
            Ok(candidates) => candidates,
            Err(err) => {
                tracing::warn!("geocoding request for '{}' failed: {err}", query.query_string());
                return None;
            }
        };

        if candidates.is_empty() {
            tracing::debug!("geocoding returned no candidates for '{}'", query.query_string());
        }
        candidates.into_iter().next()
    }

    /// Fetch current conditions for a coordinate pair.
    ///
    /// lat/lon are passed through unvalidated; the provider decides what
    /// out-of-range values mean.
    pub async fn fetch_weather(
        &self,
        lat: f64,
        lon: f64,
        units: Units,
        lang: &str,
    ) -> Option<WeatherReport> {
        let params = [
            ("lat", lat.to_string()),
            ("lon", lon.to_string()),
            ("appid", self.api_key.clone()),
            ("units", units.as_str().to_string()),
            ("lang", lang.to_string()),
        ];

        match self.get_json(&self.weather_url, &params).await {
            Ok(report) => Some(report),
            Err(err) => {
                tracing::warn!("weather request for ({lat}, {lon}) failed: {err}");
                None
            }
        }
    }

    /// Shared GET helper: send, check status, parse JSON.
    ///
    /// Parsing goes through `serde_json` on the raw body so a malformed
    /// response surfaces as `ClientError::Parse` rather than being folded
    /// into the transport error.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> Result<T, ClientError> {
        let res = self.http.get(url).query(params).send().await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(ClientError::Status {
                status,
                body: truncate_body(&body),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        format!("{}...", &body[..MAX])
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server: &MockServer) -> OwmClient {
        let geo = format!("{}/geo/1.0", server.uri());
        let weather = format!("{}/data/2.5/weather", server.uri());
        OwmClient::new_with_base_urls("test-key", &geo, &weather)
    }

    #[tokio::test]
    async fn resolve_returns_first_candidate() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/geo/1.0/direct"))
            .and(query_param("q", "London,GB"))
            .and(query_param("appid", "test-key"))
            .and(query_param("limit", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"name": "London", "lat": 51.5073, "lon": -0.1276, "country": "GB"},
                {"name": "London", "lat": 42.9836, "lon": -81.2497, "country": "CA"}
            ])))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let query = LocationQuery::new("London").with_country(Some("GB".into()));
        let candidate = client.resolve_coordinates(&query).await.expect("candidate");

        assert_eq!(candidate.name, "London");
        assert_eq!(candidate.country.as_deref(), Some("GB"));
        assert_eq!(candidate.coordinates().lat, 51.5073);
    }

    #[tokio::test]
    async fn resolve_returns_none_on_empty_list() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/geo/1.0/direct"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let query = LocationQuery::new("Nowheresville");
        assert!(client.resolve_coordinates(&query).await.is_none());
    }

    #[tokio::test]
    async fn resolve_returns_none_on_malformed_body() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/geo/1.0/direct"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let query = LocationQuery::new("London");
        assert!(client.resolve_coordinates(&query).await.is_none());
    }

    #[tokio::test]
    async fn fetch_weather_parses_report() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .and(query_param("lat", "51.5"))
            .and(query_param("lon", "-0.12"))
            .and(query_param("units", "metric"))
            .and(query_param("lang", "en"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "name": "London",
                "weather": [{"main": "Clouds", "description": "overcast clouds"}],
                "main": {"temp": 15, "feels_like": 14, "humidity": 80},
                "wind": {"speed": 3.1}
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let report = client
            .fetch_weather(51.5, -0.12, Units::Metric, "en")
            .await
            .expect("report");

        assert_eq!(report.name.as_deref(), Some("London"));
        assert_eq!(
            report.primary_condition().and_then(|c| c.main.as_deref()),
            Some("Clouds")
        );
        assert_eq!(report.main.as_ref().and_then(|m| m.humidity), Some(80.0));
    }

    #[tokio::test]
    async fn fetch_weather_returns_none_on_404() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .respond_with(
                ResponseTemplate::new(404)
                    .set_body_json(serde_json::json!({"cod": "404", "message": "not found"})),
            )
            .mount(&server)
            .await;

        let client = test_client(&server);
        assert!(
            client
                .fetch_weather(0.0, 0.0, Units::Metric, "en")
                .await
                .is_none()
        );
    }

    #[tokio::test]
    async fn fetch_weather_returns_none_on_500() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = test_client(&server);
        assert!(
            client
                .fetch_weather(51.5, -0.12, Units::Metric, "en")
                .await
                .is_none()
        );
    }

    #[tokio::test]
    async fn fetch_weather_returns_none_on_connect_failure() {
        // Nothing is listening on this port; the connection is refused.
        let client =
            OwmClient::new_with_base_urls("test-key", "http://127.0.0.1:9", "http://127.0.0.1:9");
        assert!(
            client
                .fetch_weather(51.5, -0.12, Units::Metric, "en")
                .await
                .is_none()
        );
    }
}
