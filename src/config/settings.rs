use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub logging: LoggingSettings,
    pub routes: RouteSettings,
    pub directory: DirectorySettings,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ApplicationSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ApplicationSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl LoggingSettings {
    /// Filter directive used when `RUST_LOG` is not set.
    pub fn filter_directive(&self) -> String {
        format!("locslug={},actix_web=info", self.level)
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct RouteSettings {
    /// Prefix of the location pages, e.g. `/research-jobs`.
    pub base_path: String,
}

impl Default for RouteSettings {
    fn default() -> Self {
        Self {
            base_path: "/research-jobs".to_string(),
        }
    }
}

impl RouteSettings {
    /// Base path with exactly one leading slash and no trailing slash.
    pub fn normalized_base_path(&self) -> String {
        let trimmed = self.base_path.trim().trim_matches('/');
        if trimmed.is_empty() {
            String::new()
        } else {
            format!("/{trimmed}")
        }
    }
}

/// Names served by the in-memory location directory.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct DirectorySettings {
    pub countries: Vec<String>,
    pub cities: Vec<String>,
}

impl Settings {
    pub fn load() -> Result<Self, config::ConfigError> {
        let environment = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        Self::load_for_environment(&environment)
    }

    pub fn load_for_environment(environment: &str) -> Result<Self, config::ConfigError> {
        // defaults, then the environment file, then LOCSLUG__SECTION__KEY overrides
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", environment)).required(false))
            .add_source(config::Environment::with_prefix("LOCSLUG").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
