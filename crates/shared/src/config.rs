//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::types::CurrencyFormat;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database configuration.
    pub database: DatabaseConfig,
    /// Reporting configuration.
    #[serde(default)]
    pub reporting: ReportingConfig,
    /// Currency display configuration.
    #[serde(default)]
    pub currency: CurrencyFormat,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL.
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

/// Reporting configuration.
///
/// Fiscal calendar and professional development allowances used by the
/// report builders.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportingConfig {
    /// Calendar month (1-12) on which the fiscal year starts.
    #[serde(default = "default_fiscal_year_start_month")]
    pub fiscal_year_start_month: u32,
    /// First fiscal year with travel data.
    #[serde(default = "default_inception_year")]
    pub inception_year: i32,
    /// Professional development spending allowance per fiscal year.
    #[serde(default = "default_profdev_spending_cap")]
    pub profdev_spending_cap: Decimal,
    /// Professional development days allowance per fiscal year.
    #[serde(default = "default_profdev_days_cap")]
    pub profdev_days_cap: i64,
}

impl Default for ReportingConfig {
    fn default() -> Self {
        Self {
            fiscal_year_start_month: default_fiscal_year_start_month(),
            inception_year: default_inception_year(),
            profdev_spending_cap: default_profdev_spending_cap(),
            profdev_days_cap: default_profdev_days_cap(),
        }
    }
}

fn default_fiscal_year_start_month() -> u32 {
    7
}

fn default_inception_year() -> i32 {
    2019
}

fn default_profdev_spending_cap() -> Decimal {
    Decimal::from(3000)
}

fn default_profdev_days_cap() -> i64 {
    10
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("TERRA").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_load_uses_defaults() {
        temp_env::with_vars(
            [
                ("TERRA__DATABASE__URL", Some("postgres://localhost/terra")),
                ("TERRA__REPORTING__FISCAL_YEAR_START_MONTH", None),
                ("TERRA__SERVER__PORT", None),
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.database.url, "postgres://localhost/terra");
                assert_eq!(config.database.max_connections, 10);
                assert_eq!(config.server.host, "0.0.0.0");
                assert_eq!(config.server.port, 8080);
                assert_eq!(config.reporting.fiscal_year_start_month, 7);
                assert_eq!(config.reporting.inception_year, 2019);
                assert_eq!(config.reporting.profdev_spending_cap, dec!(3000));
                assert_eq!(config.reporting.profdev_days_cap, 10);
                assert_eq!(config.currency.symbol, "$");
            },
        );
    }

    #[test]
    fn test_load_env_overrides() {
        temp_env::with_vars(
            [
                ("TERRA__DATABASE__URL", Some("postgres://db/terra")),
                ("TERRA__SERVER__PORT", Some("9090")),
                ("TERRA__REPORTING__FISCAL_YEAR_START_MONTH", Some("10")),
                ("TERRA__REPORTING__PROFDEV_SPENDING_CAP", Some("2500.50")),
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.server.port, 9090);
                assert_eq!(config.reporting.fiscal_year_start_month, 10);
                assert_eq!(config.reporting.profdev_spending_cap, dec!(2500.50));
            },
        );
    }

    #[test]
    fn test_load_requires_database_url() {
        temp_env::with_var_unset("TERRA__DATABASE__URL", || {
            assert!(AppConfig::load().is_err());
        });
    }
}
