use serde::{Deserialize, Serialize};

const DEFAULT_GRAPHQL_URL: &str = "/api/graphql";
const DEFAULT_APP_NAME: &str = "Staff Portal";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub graphql_url: String,
    pub app_name: String,
    pub environment: String,
    pub enable_logging: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            graphql_url: DEFAULT_GRAPHQL_URL.to_string(),
            app_name: DEFAULT_APP_NAME.to_string(),
            environment: "development".to_string(),
            enable_logging: true,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("GRAPHQL_URL"),
            option_env!("APP_NAME"),
            option_env!("ENVIRONMENT"),
            option_env!("ENABLE_LOGGING"),
        )
    }

    fn from_values(
        graphql_url: Option<&str>,
        app_name: Option<&str>,
        environment: Option<&str>,
        enable_logging: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            graphql_url: non_empty(graphql_url).unwrap_or(defaults.graphql_url),
            app_name: non_empty(app_name).unwrap_or(defaults.app_name),
            environment: non_empty(environment).unwrap_or(defaults.environment),
            enable_logging: enable_logging
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.enable_logging),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Nivel de log según entorno y ENABLE_LOGGING
    pub fn log_level(&self) -> log::Level {
        if !self.enable_logging {
            log::Level::Error
        } else if self.is_production() {
            log::Level::Warn
        } else {
            log::Level::Debug
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_values_fall_back_to_defaults() {
        let config = AppConfig::from_values(None, Some("  "), None, Some("not-a-bool"));
        assert_eq!(config.graphql_url, "/api/graphql");
        assert_eq!(config.app_name, "Staff Portal");
        assert!(config.enable_logging);
        assert!(!config.is_production());
    }

    #[test]
    fn log_level_follows_environment() {
        let prod = AppConfig::from_values(Some("https://x/graphql"), None, Some("production"), Some("true"));
        assert_eq!(prod.graphql_url, "https://x/graphql");
        assert_eq!(prod.log_level(), log::Level::Warn);

        let quiet = AppConfig::from_values(None, None, None, Some("false"));
        assert_eq!(quiet.log_level(), log::Level::Error);
    }
}
