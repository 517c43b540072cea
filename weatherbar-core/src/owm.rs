use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::{error::FetchError, model::Observation};

/// Client for the OpenWeatherMap current-weather endpoint.
#[derive(Debug, Clone)]
pub struct OwmClient {
    base_url: String,
    api_key: String,
    http: Client,
}

impl OwmClient {
    /// `base_url` is the full current-weather endpoint; tests point it at a
    /// mock server.
    pub fn new(base_url: impl Into<String>, api_key: String) -> Self {
        Self {
            base_url: base_url.into(),
            api_key,
            http: Client::new(),
        }
    }

    /// Fetch current conditions for `city`.
    ///
    /// Anything but a 200 with a parseable body is a typed error; the caller
    /// never sees a sentinel value in place of a payload.
    pub async fn current(&self, city: &str) -> Result<Observation, FetchError> {
        let res = self
            .http
            .get(&self.base_url)
            .query(&[
                ("q", city),
                ("units", "metric"),
                ("APPID", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;
        tracing::debug!(%status, "weather response received");

        if status != StatusCode::OK {
            return Err(FetchError::Status { status, body: truncate_body(&body) });
        }

        let parsed: OwmResponse = serde_json::from_str(&body)?;

        let condition = parsed
            .weather
            .into_iter()
            .next()
            .ok_or(FetchError::MissingCondition)?;

        Ok(Observation {
            icon_code: condition.icon,
            temperature_c: parsed.main.temp,
        })
    }
}

#[derive(Debug, Deserialize)]
struct OwmCondition {
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwmMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct OwmResponse {
    weather: Vec<OwmCondition>,
    main: OwmMain,
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        format!("{}...", &body[..MAX])
    } else {
        body.to_string()
    }
}
