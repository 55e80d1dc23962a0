//! Effect runner for forecast queries
//!
//! Turns one `Effect::FetchForecast` into exactly one result action, so the
//! loading state always ends no matter how the request goes.

use tracing::{error, info, warn};

use crate::action::Action;
use crate::api::{ProviderReply, WeatherProvider};

/// Displayed for any transport or parse failure; details go to the log.
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

/// Run one forecast request for submission `seq`
pub async fn run_fetch<P>(provider: &P, seq: u64, city: &str) -> Action
where
    P: WeatherProvider + ?Sized,
{
    match provider.fetch_forecast(city).await {
        Ok(ProviderReply::Forecast(snapshot)) => {
            info!(
                seq,
                city,
                days = snapshot.days().len(),
                "forecast loaded"
            );
            Action::ForecastDidLoad { seq, snapshot }
        }
        Ok(ProviderReply::Rejected(message)) => {
            warn!(seq, city, %message, "provider rejected query");
            Action::ForecastDidError { seq, message }
        }
        Err(err) => {
            error!(seq, city, error = %err, "forecast request failed");
            Action::ForecastDidError {
                seq,
                message: GENERIC_FAILURE.to_string(),
            }
        }
    }
}
