use crate::error::ConfigError;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{DisplaySettings, HistorySettings, Settings};

/// Loads the application configuration from the `config.toml` file.
///
/// This function is the primary entry point for this crate. The file is
/// optional: every setting has a sensible default, so a missing `config.toml`
/// yields `Settings::default()` rather than an error. Whatever is loaded is
/// range-validated before being handed out.
pub fn load_settings() -> Result<Settings, ConfigError> {
    let builder = config::Config::builder()
        // Tells the builder to look for a file named `config.toml`.
        .add_source(config::File::with_name("config.toml").required(false))
        // Environment variables override the file, e.g. TALLY_DISPLAY__PRECISION=4.
        .add_source(config::Environment::with_prefix("TALLY").separator("__"))
        .build()?;

    // Attempt to deserialize the entire configuration into our `Settings` struct.
    let settings = builder.try_deserialize::<Settings>()?;
    settings.validate()?;

    Ok(settings)
}
