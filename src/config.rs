use config::{Config, ConfigError, File as ConfigFile};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base name offered as the default when the user is prompted.
    pub default_base_name: Option<String>,
    /// Glob patterns matched against file names; matching files are
    /// left out of the batch.
    pub ignore_patterns: Vec<String>,
    /// Locale code (en/es/ja). When unset the shell asks interactively.
    pub language: Option<String>,
}

pub fn load_configuration() -> Result<AppConfig, ConfigError> {
    let builder = Config::builder()
        .add_source(ConfigFile::with_name("Config").required(false))
        .build()?;
    builder.try_deserialize::<AppConfig>()
}
