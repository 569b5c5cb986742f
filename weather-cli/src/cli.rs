use clap::{Parser, Subcommand};
use weather_core::{Config, LocationQuery, OwmClient, Units};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Weather CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeatherMap API key in the config file.
    Configure,

    /// Show current weather for a city and exit.
    Show {
        /// City name.
        city: String,

        /// State code (only meaningful for US cities).
        #[arg(long)]
        state: Option<String>,

        /// ISO country code, e.g. "GB".
        #[arg(long)]
        country: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Command::Configure) => configure(),
            Some(Command::Show {
                city,
                state,
                country,
            }) => show(city, state, country).await,
            None => {
                let client = build_client()?;
                crate::session::run(&client).await
            }
        }
    }
}

/// Resolve credentials and construct the client. A missing API key is
/// the one fatal startup condition.
fn build_client() -> anyhow::Result<OwmClient> {
    let config = Config::load()?;
    let api_key = config.resolve_api_key()?;
    Ok(OwmClient::new(api_key))
}

fn configure() -> anyhow::Result<()> {
    let api_key = inquire::Password::new("OpenWeatherMap API key:")
        .without_confirmation()
        .prompt()?;

    let mut config = Config::load()?;
    config.set_api_key(api_key.trim().to_string());
    config.save()?;

    println!("Saved API key to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn show(
    city: String,
    state: Option<String>,
    country: Option<String>,
) -> anyhow::Result<()> {
    let client = build_client()?;
    let units = Units::default();

    let query = LocationQuery::new(city)
        .with_state(state)
        .with_country(country);

    let Some(candidate) = client.resolve_coordinates(&query).await else {
        anyhow::bail!("City not found: {}", query.query_string());
    };

    let Some(report) = client
        .fetch_weather(candidate.lat, candidate.lon, units, "en")
        .await
    else {
        anyhow::bail!("Could not fetch weather data for {}", candidate.name);
    };

    println!("{}", crate::render::format_report(&report, units));
    Ok(())
}
