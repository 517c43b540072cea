use anyhow::{Context, bail};
use clap::Parser;
use weatherbar_core::{OwmClient, Settings, icons, model, probe};

/// Top-level CLI struct. The widget takes no arguments: the status bar
/// invokes it bare and renders whatever single line lands on stdout.
#[derive(Debug, Parser)]
#[command(name = "weatherbar", version, about = "Status-bar weather widget")]
pub struct Cli {}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let settings = Settings::load()?;

        match probe::is_online(&settings.probe_url).await {
            Ok(true) => {}
            // Reachable host, unexpected status. No weather request.
            Ok(false) => bail!("No Internet!"),
            Err(err) => {
                tracing::debug!(%err, "connectivity probe failed");
                println!("No Internet!");
                std::process::exit(-1);
            }
        }

        // An absent key goes out as an empty APPID; the service answers 401
        // and that surfaces as a fetch error.
        let api_key = settings.api_key.clone().unwrap_or_default();
        let client = OwmClient::new(settings.weather_url.clone(), api_key);

        let observation = client
            .current(&settings.city)
            .await
            .with_context(|| format!("Failed to fetch weather for {}", settings.city))?;

        let glyph = icons::glyph(&observation.icon_code)?;

        println!("{}", model::status_line(glyph, &observation));

        Ok(())
    }
}
