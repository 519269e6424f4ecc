use config::{Config, ConfigError, FileFormat};
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default = "default_api_port")]
    pub api_port: u16,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    #[serde(default = "default_provider_count")]
    pub provider_count: usize,
    /// Fixed seed for reproducible catalogs. Unset means a fresh catalog per load.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_avatar_base_url")]
    pub avatar_base_url: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            provider_count: default_provider_count(),
            seed: None,
            avatar_base_url: default_avatar_base_url(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            filter: default_log_filter(),
        }
    }
}

fn default_provider_count() -> usize {
    50
}

fn default_avatar_base_url() -> String {
    "https://api.dicebear.com/7.x/avataaars/svg?seed=".to_string()
}

fn default_api_port() -> u16 {
    3000
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig::default(),
            api_port: default_api_port(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Settings {
    pub fn new(path: &str) -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(config::File::with_name(path))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let settings: Settings = builder.build()?.try_deserialize()?;

        debug!(
            provider_count = settings.catalog.provider_count,
            seed = ?settings.catalog.seed,
            api_port = settings.api_port,
            "Loaded settings"
        );

        Ok(settings)
    }

    /// Builds settings from an inline TOML document, without environment overrides.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(config::File::from_str(contents, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let settings = Settings::from_toml_str("").unwrap();
        assert_eq!(settings.catalog.provider_count, 50);
        assert_eq!(settings.catalog.seed, None);
        assert_eq!(settings.api_port, 3000);
        assert_eq!(settings.logging.format, LogFormat::Pretty);
        assert_eq!(settings.logging.filter, "info");
        assert!(settings.catalog.avatar_base_url.starts_with("https://"));
    }

    #[test]
    fn test_overrides_from_toml() {
        let settings = Settings::from_toml_str(
            r#"
            api_port = 8080

            [catalog]
            provider_count = 5
            seed = 42

            [logging]
            format = "json"
            filter = "storefront=debug"
            "#,
        )
        .unwrap();

        assert_eq!(settings.api_port, 8080);
        assert_eq!(settings.catalog.provider_count, 5);
        assert_eq!(settings.catalog.seed, Some(42));
        assert_eq!(settings.logging.format, LogFormat::Json);
        assert_eq!(settings.logging.filter, "storefront=debug");
    }

    #[test]
    fn test_unknown_log_format_is_rejected() {
        let result = Settings::from_toml_str("[logging]\nformat = \"xml\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_environment_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storefront.toml");
        std::fs::write(&path, "api_port = 3000\n").unwrap();

        // Only this test touches APP_* variables.
        unsafe {
            std::env::set_var("APP_API_PORT", "8081");
            std::env::set_var("APP_CATALOG__SEED", "7");
        }
        let settings = Settings::new(path.to_str().unwrap());
        unsafe {
            std::env::remove_var("APP_API_PORT");
            std::env::remove_var("APP_CATALOG__SEED");
        }

        let settings = settings.unwrap();
        assert_eq!(settings.api_port, 8081);
        assert_eq!(settings.catalog.seed, Some(7));
        assert_eq!(settings.catalog.provider_count, 50);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(Settings::new("config/does-not-exist").is_err());
    }
}
