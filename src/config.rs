use anyhow::{Result, bail};
use common::{DigitGrouping, MoneyFormat, is_valid_date_pattern};
use config::{Config, ConfigBuilder, Environment, File, builder::DefaultState};
use serde::Deserialize;
use tracing::debug;

/// Base name of the optional configuration file (`passbook.toml`, `.yaml`, ...).
pub const CONFIG_FILE: &str = "passbook";

/// Prefix of environment overrides, e.g. `PASSBOOK_CURRENCY_CODE=USD`.
pub const ENV_PREFIX: &str = "PASSBOOK";

/// Application configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AppConfig {
    pub database_url: String,
    /// ISO 4217 code of the society's currency.
    pub currency_code: String,
    /// Overrides the currency's own minor-unit precision.
    pub decimal_places: Option<u32>,
    pub digit_grouping: DigitGrouping,
    /// strftime pattern for dates in terminal output and exports.
    pub date_format: String,
}

impl AppConfig {
    /// Loads defaults, then `passbook.*` if present, then `PASSBOOK_*` variables.
    pub fn load() -> Result<Self> {
        let config = Self::defaults()?
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?;
        Self::from_config(config)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("database_url", "sqlite://passbook.db?mode=rwc")?
            .set_default("currency_code", "INR")?
            .set_default("digit_grouping", "indian")?
            .set_default("date_format", "%d/%m/%Y")?)
    }

    fn from_config(config: Config) -> Result<Self> {
        let app: AppConfig = config.try_deserialize()?;
        if !is_valid_date_pattern(&app.date_format) {
            bail!("Invalid date_format pattern: {}", app.date_format);
        }
        debug!(?app, "Configuration loaded");
        Ok(app)
    }

    /// Money formatting derived from the configured currency.
    pub fn money_format(&self) -> MoneyFormat {
        let format = MoneyFormat::for_currency(&self.currency_code).with_grouping(self.digit_grouping);
        match self.decimal_places {
            Some(places) => format.with_decimal_places(places),
            None => format,
        }
    }
}
