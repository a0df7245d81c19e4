use std::env;

use clap::ValueEnum;
use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use potluck_mealplan::WeekStart;
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub observability: ObservabilityConfig,
    #[serde(default)]
    pub plan: PlanConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct PlanConfig {
    /// Day displayed weeks begin on
    #[serde(default)]
    pub week_start: WeekStart,
    /// Planned meal rows used when `--plan` is not given
    #[serde(default = "default_plan_path")]
    pub plan_path: String,
    /// Recipe rows used to resolve `--recipe` ids
    #[serde(default = "default_recipes_path")]
    pub recipes_path: String,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            week_start: WeekStart::default(),
            plan_path: default_plan_path(),
            recipes_path: default_recipes_path(),
        }
    }
}

fn default_plan_path() -> String {
    "meal_plan_items.json".to_string()
}

fn default_recipes_path() -> String {
    "recipes.json".to_string()
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DisplayConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (POTLUCK__PLAN__WEEK_START, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("observability.log_level", default_log_level())?
            .set_default("plan.week_start", WeekStart::default().to_string())?
            .set_default("plan.plan_path", default_plan_path())?
            .set_default("plan.recipes_path", default_recipes_path())?
            .set_default("display.format", "text")?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // The file is optional, defaults and environment are enough to run
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("POTLUCK")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if EnvFilter::try_new(&self.observability.log_level).is_err() {
            return Err(format!(
                "Invalid log level '{}'",
                self.observability.log_level
            ));
        }
        if self.plan.plan_path.trim().is_empty() {
            return Err("Plan path must not be empty".to_string());
        }
        if self.plan.recipes_path.trim().is_empty() {
            return Err("Recipes path must not be empty".to_string());
        }
        Ok(())
    }
}
