use reqwest::StatusCode;

/// Failures raised by the OpenWeatherMap client.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Failed to reach the weather service: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered, but not with 200. Carries a truncated body
    /// excerpt so an invalid API key is diagnosable from the message.
    #[error("Weather request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Failed to parse weather response JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Weather response contained no condition entry")]
    MissingCondition,
}

/// Failures raised by the glyph table.
#[derive(Debug, thiserror::Error)]
pub enum IconError {
    /// The table has no entry for this condition code. Fatal; there is no
    /// fallback glyph.
    #[error("No glyph configured for condition code '{code}'")]
    Unknown { code: String },
}
