use crate::components::restaurant::RestaurantConfig;
use crate::components::roster::InMemoryRoster;
use crate::components::ScheduleWindow;
use crate::config::Config;
use crate::error::Error;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Initialize logging with environment-based configuration
pub fn init_logging() -> miette::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| Error::Other(format!("Failed to set up logging: {}", e)))?;

    Ok(())
}

/// Load the application config and apply its locale
pub fn load_config() -> miette::Result<Config> {
    match Config::load() {
        Ok(config) => {
            rust_i18n::set_locale(&config.locale);
            info!("Using locale {}", config.locale);
            Ok(config)
        }
        Err(e) => {
            error!("Failed to load configuration: {:?}", e);
            Err(e.into())
        }
    }
}

/// Load the roster, starting empty if the file can't be read
pub fn load_roster(config: &Config) -> miette::Result<InMemoryRoster> {
    if !config.roster_file.exists() {
        warn!(
            "Roster file {} not found, starting with an empty roster",
            config.roster_file.display()
        );
        return Ok(InMemoryRoster::new());
    }
    Ok(InMemoryRoster::load(&config.roster_file)?)
}

/// Load restaurant settings if present
pub fn load_restaurant(config: &Config) -> miette::Result<Option<RestaurantConfig>> {
    if !config.restaurant_file.exists() {
        warn!(
            "Restaurant config {} not found",
            config.restaurant_file.display()
        );
        return Ok(None);
    }
    Ok(Some(RestaurantConfig::load(&config.restaurant_file)?))
}

/// Scheduling week from the restaurant settings, or the configured start day
pub fn schedule_window(config: &Config, restaurant: Option<&RestaurantConfig>) -> ScheduleWindow {
    restaurant
        .map(|r| r.schedule_window)
        .unwrap_or_else(|| ScheduleWindow::starting(config.schedule_start_day))
}
