//! IP-based geolocation via ipinfo.io. Free endpoint, no API key required.

use reqwest::Client;
use serde::Deserialize;

use crate::error::ClientError;
use crate::model::Coordinates;

const IPINFO_URL: &str = "https://ipinfo.io/json";

#[derive(Debug, Deserialize)]
struct IpInfoResponse {
    /// "latitude,longitude" as a single comma-separated field.
    loc: Option<String>,
}

/// Locate the caller by public IP.
///
/// Returns `None` on any transport failure or when the response carries
/// no usable coordinate pair; the session falls back to manual lookups.
pub async fn current_location() -> Option<Coordinates> {
    location_from(IPINFO_URL).await
}

async fn location_from(url: &str) -> Option<Coordinates> {
    let response = match fetch(url).await {
        Ok(response) => response,
        Err(err) => {
            tracing::warn!("ip geolocation request failed: {err}");
            return None;
        }
    };

    let coords = response.loc.as_deref().and_then(parse_loc);
    if coords.is_none() {
        tracing::warn!("ip geolocation response carried no usable coordinates");
    }
    coords
}

async fn fetch(url: &str) -> Result<IpInfoResponse, ClientError> {
    let res = Client::new().get(url).send().await?;

    let status = res.status();
    if !status.is_success() {
        let body = res.text().await.unwrap_or_default();
        return Err(ClientError::Status { status, body });
    }

    let body = res.text().await?;
    Ok(serde_json::from_str(&body)?)
}

fn parse_loc(loc: &str) -> Option<Coordinates> {
    let (lat, lon) = loc.split_once(',')?;
    Some(Coordinates {
        lat: lat.trim().parse().ok()?,
        lon: lon.trim().parse().ok()?,
    })
}
