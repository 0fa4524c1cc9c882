use crate::error::ConfigError;
use config::{Environment, File, FileFormat, Source};

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{DashboardConfig, DatasetConfig, DatasetOverrides, DisplayConfig};

/// Loads the application configuration.
///
/// Sources, lowest precedence first: built-in defaults, an optional
/// `dashboard.toml` in the working directory, then `DASHBOARD__*` environment
/// variables (e.g. `DASHBOARD__DATASET__SEED=7`). The result is validated
/// before it is returned.
pub fn load_config() -> Result<DashboardConfig, ConfigError> {
    layered(File::with_name("dashboard").required(false), dashboard_env())
}

/// Loads the configuration from TOML text, without touching the filesystem
/// or the environment.
pub fn load_config_from_toml(contents: &str) -> Result<DashboardConfig, ConfigError> {
    let builder = config::Config::builder().add_source(File::from_str(contents, FileFormat::Toml));
    finish(builder)
}

/// The `DASHBOARD__SECTION__KEY` environment layer.
fn dashboard_env() -> Environment {
    Environment::with_prefix("DASHBOARD")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// Stacks a file layer over the defaults and the environment over the file.
fn layered<F>(file: F, env: Environment) -> Result<DashboardConfig, ConfigError>
where
    F: Source + Send + Sync + 'static,
{
    let builder = config::Config::builder().add_source(file).add_source(env);
    finish(builder)
}

fn finish(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
) -> Result<DashboardConfig, ConfigError> {
    // Attempt to deserialize the entire configuration into our `DashboardConfig` struct
    let config = builder.build()?.try_deserialize::<DashboardConfig>()?;
    config.validate()?;

    tracing::debug!(
        seed = config.dataset.seed,
        start = %config.dataset.start_date,
        end = %config.dataset.end_date,
        "Configuration loaded."
    );
    Ok(config)
}
