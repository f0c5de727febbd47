use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone, Default)]
pub struct MenuConfig {
    /// How parsed menus are written out
    #[serde(default)]
    pub output: OutputConfig,
}

/// Configuration for JSON output
#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    /// Pretty-print JSON
    #[serde(default = "default_pretty")]
    pub pretty: bool,
    /// Keep section and step ids; turn off for reproducible output
    #[serde(default = "default_include_ids")]
    pub include_ids: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
            include_ids: default_include_ids(),
        }
    }
}

fn default_pretty() -> bool {
    true
}

fn default_include_ids() -> bool {
    true
}

impl MenuConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_MENU__ prefix
    /// 2. recipe-menu.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_MENU__OUTPUT__PRETTY
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// See [`MenuConfig::load`] for the source priority.
pub fn load_config() -> Result<MenuConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("recipe-menu").required(false))
        // Use double underscore for nested: RECIPE_MENU__OUTPUT__PRETTY
        .add_source(
            Environment::with_prefix("RECIPE_MENU")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
