//! WeatherAPI.com forecast client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::config::ProviderConfig;
use crate::state::WeatherSnapshot;

/// Shown when the provider flags an error without saying what went wrong.
pub const CITY_NOT_FOUND: &str = "City not found";

const MAX_BODY_IN_ERROR: usize = 200;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected status {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("malformed response body: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A structurally successful exchange with the provider
#[derive(Clone, Debug, PartialEq)]
pub enum ProviderReply {
    Forecast(WeatherSnapshot),
    /// The provider answered with an `error` object (unknown city, bad key, quota...)
    Rejected(String),
}

/// Any non-null `error` is a rejection, whatever its shape.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: Option<Value>,
}

/// Source of forecasts for the controller
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn fetch_forecast(&self, city: &str) -> Result<ProviderReply, ApiError>;
}

/// HTTP client for `{base_url}/forecast.json`
#[derive(Debug, Clone)]
pub struct ForecastClient {
    http: Client,
    config: ProviderConfig,
}

impl ForecastClient {
    pub fn new(config: ProviderConfig) -> Result<Self, ApiError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build().map_err(ApiError::Client)?;
        Ok(Self { http, config })
    }

    /// Full request URL for `city` (contains the API key)
    pub fn forecast_url(&self, city: &str) -> String {
        format!(
            "{}/forecast.json?key={}&q={}&days={}",
            self.config.base_url.trim_end_matches('/'),
            urlencoding::encode(&self.config.api_key),
            urlencoding::encode(city),
            self.config.forecast_days
        )
    }
}

#[async_trait]
impl WeatherProvider for ForecastClient {
    async fn fetch_forecast(&self, city: &str) -> Result<ProviderReply, ApiError> {
        debug!(city, days = self.config.forecast_days, "requesting forecast");

        let response = self.http.get(self.forecast_url(city)).send().await?;
        let status = response.status();
        let body = response.text().await?;

        debug!(city, %status, bytes = body.len(), "forecast response received");
        classify(status, &body)
    }
}

/// Sort a raw response into a forecast, a provider rejection, or a failure.
///
/// An `error` object wins over everything else in the body, whatever the
/// status code. Without one, a non-2xx status is a failure and a 2xx body
/// must be a complete snapshot.
pub fn classify(status: StatusCode, body: &str) -> Result<ProviderReply, ApiError> {
    if let Ok(ErrorEnvelope { error: Some(error) }) = serde_json::from_str::<ErrorEnvelope>(body)
    {
        let message = error
            .get("message")
            .and_then(Value::as_str)
            .filter(|message| !message.is_empty())
            .unwrap_or(CITY_NOT_FOUND);
        return Ok(ProviderReply::Rejected(message.to_string()));
    }

    if !status.is_success() {
        return Err(ApiError::Status {
            status,
            body: truncate_body(body),
        });
    }

    let snapshot = serde_json::from_str(body)?;
    Ok(ProviderReply::Forecast(snapshot))
}

/// Absolute URL for a condition icon; the provider sends `//cdn...` paths.
pub fn icon_url(icon: &str) -> String {
    if icon.starts_with("//") {
        format!("https:{icon}")
    } else {
        icon.to_string()
    }
}

fn truncate_body(body: &str) -> String {
    match body.char_indices().nth(MAX_BODY_IN_ERROR) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL_FORECAST: &str = r#"{
        "location": {"name": "Oslo", "country": "Norway", "localtime": "2026-10-16 09:00"},
        "current": {
            "temp_c": 4.0, "humidity": 81, "wind_mph": 6.9, "pressure_mb": 1012.0,
            "vis_km": 10.0,
            "condition": {"text": "Overcast", "icon": "//cdn.weatherapi.com/weather/64x64/day/122.png"}
        },
        "forecast": {"forecastday": []}
    }"#;

    #[test]
    fn test_classify_forecast() {
        let reply = classify(StatusCode::OK, MINIMAL_FORECAST).unwrap();
        let ProviderReply::Forecast(snapshot) = reply else {
            panic!("expected a forecast, got {reply:?}");
        };
        assert_eq!(snapshot.location.name, "Oslo");
        assert_eq!(snapshot.current.humidity, 81.0);
        assert!(snapshot.days().is_empty());
    }

    #[test]
    fn test_classify_error_message() {
        let body = r#"{"error":{"code":1006,"message":"No matching location found."}}"#;
        let reply = classify(StatusCode::BAD_REQUEST, body).unwrap();
        assert_eq!(
            reply,
            ProviderReply::Rejected("No matching location found.".into())
        );
    }

    #[test]
    fn test_classify_error_without_message() {
        let reply = classify(StatusCode::BAD_REQUEST, r#"{"error":{"code":1006}}"#).unwrap();
        assert_eq!(reply, ProviderReply::Rejected(CITY_NOT_FOUND.into()));

        let reply = classify(StatusCode::OK, r#"{"error":{"message":""}}"#).unwrap();
        assert_eq!(reply, ProviderReply::Rejected(CITY_NOT_FOUND.into()));
    }

    #[test]
    fn test_error_of_any_shape_rejects() {
        let reply = classify(StatusCode::BAD_REQUEST, r#"{"error":"API key invalid"}"#).unwrap();
        assert_eq!(reply, ProviderReply::Rejected(CITY_NOT_FOUND.into()));

        let reply = classify(StatusCode::OK, r#"{"error":{"message":42}}"#).unwrap();
        assert_eq!(reply, ProviderReply::Rejected(CITY_NOT_FOUND.into()));

        let reply = classify(StatusCode::OK, r#"{"error":true,"location":{}}"#).unwrap();
        assert_eq!(reply, ProviderReply::Rejected(CITY_NOT_FOUND.into()));
    }

    #[test]
    fn test_null_error_is_not_a_rejection() {
        let err = classify(StatusCode::OK, r#"{"error":null,"location":{}}"#).unwrap_err();
        assert!(matches!(err, ApiError::Parse(_)));
    }

    #[test]
    fn test_error_overrides_partial_data() {
        let body = r#"{"location":{"name":"Oslo","country":"Norway","localtime":""},
                       "error":{"message":"API key has been disabled."}}"#;
        let reply = classify(StatusCode::OK, body).unwrap();
        assert_eq!(
            reply,
            ProviderReply::Rejected("API key has been disabled.".into())
        );
    }

    #[test]
    fn test_classify_status_without_payload() {
        let err = classify(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>").unwrap_err();
        assert!(matches!(err, ApiError::Status { status, .. } if status == StatusCode::BAD_GATEWAY));
    }

    #[test]
    fn test_classify_malformed_body() {
        let err = classify(StatusCode::OK, "{not json").unwrap_err();
        assert!(matches!(err, ApiError::Parse(_)));

        let err = classify(StatusCode::OK, r#"{"location":{}}"#).unwrap_err();
        assert!(matches!(err, ApiError::Parse(_)));
    }

    #[test]
    fn test_forecast_url_encodes_query() {
        let client = ForecastClient::new(
            ProviderConfig::new("abc 123").with_base_url("http://localhost:9999/v1/"),
        )
        .unwrap();
        assert_eq!(
            client.forecast_url("São Paulo"),
            "http://localhost:9999/v1/forecast.json?key=abc%20123&q=S%C3%A3o%20Paulo&days=3"
        );
    }

    #[test]
    fn test_icon_url() {
        assert_eq!(
            icon_url("//cdn.weatherapi.com/weather/64x64/day/113.png"),
            "https://cdn.weatherapi.com/weather/64x64/day/113.png"
        );
        assert_eq!(icon_url("https://x/y.png"), "https://x/y.png");
    }

    #[test]
    fn test_truncate_body() {
        let long = "x".repeat(MAX_BODY_IN_ERROR + 10);
        assert_eq!(truncate_body(&long).len(), MAX_BODY_IN_ERROR + 3);
        assert_eq!(truncate_body("short"), "short");
    }
}
