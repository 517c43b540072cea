use anyhow::{Context, Result, anyhow};
use directories::UserDirs;
use std::{env, path::PathBuf};

/// Environment variable holding the OpenWeatherMap API key (APPID).
pub const API_KEY_VAR: &str = "WEATHER_API";

/// The one city the status line reports on.
pub const CITY: &str = "Toenisvorst";

const WEATHER_URL: &str = "http://api.openweathermap.org/data/2.5/weather";
const PROBE_URL: &str = "https://google.com";

/// Runtime settings for a single run.
///
/// There is no settings file of our own: the only credential comes from the
/// process environment, optionally seeded from `<home>/.env` first. An absent
/// key is not rejected here; the remote service refuses the request later.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_key: Option<String>,
    pub city: String,
    pub weather_url: String,
    pub probe_url: String,
}

impl Settings {
    /// Load settings, seeding the environment from the secrets file first.
    pub fn load() -> Result<Self> {
        let path = Self::secrets_file_path()?;
        if path.exists() {
            dotenvy::from_path(&path)
                .with_context(|| format!("Failed to load secrets file: {}", path.display()))?;
            tracing::debug!(path = %path.display(), "loaded secrets file");
        }

        Ok(Self::from_env())
    }

    /// Read settings from the process environment only.
    pub fn from_env() -> Self {
        Self {
            api_key: env::var(API_KEY_VAR).ok().filter(|key| !key.is_empty()),
            city: CITY.to_string(),
            weather_url: WEATHER_URL.to_string(),
            probe_url: PROBE_URL.to_string(),
        }
    }

    /// Path to the secrets file. Fixed; the widget never writes it.
    pub fn secrets_file_path() -> Result<PathBuf> {
        let dirs =
            UserDirs::new().ok_or_else(|| anyhow!("Could not determine home directory"))?;

        Ok(dirs.home_dir().join(".env"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_env_treats_missing_or_empty_key_as_absent() {
        // Only this test touches the variable, so no cross-test races.
        unsafe { env::remove_var(API_KEY_VAR) };
        assert_eq!(Settings::from_env().api_key, None);

        unsafe { env::set_var(API_KEY_VAR, "") };
        assert_eq!(Settings::from_env().api_key, None);

        unsafe { env::set_var(API_KEY_VAR, "SECRET") };
        assert_eq!(Settings::from_env().api_key.as_deref(), Some("SECRET"));

        unsafe { env::remove_var(API_KEY_VAR) };
    }

    #[test]
    fn endpoints_are_fixed() {
        let settings = Settings::from_env();

        assert_eq!(settings.city, "Toenisvorst");
        assert_eq!(settings.weather_url, "http://api.openweathermap.org/data/2.5/weather");
        assert_eq!(settings.probe_url, "https://google.com");
    }

    #[test]
    fn secrets_file_lives_in_the_home_directory() {
        let path = Settings::secrets_file_path().expect("home directory must resolve");
        assert!(path.ends_with(".env"));
    }
}
