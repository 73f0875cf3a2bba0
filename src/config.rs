use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{AppError, AppResult};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub filter: FilterConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Paging defaults applied to every list filter
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct FilterConfig {
    #[serde(default = "default_items_per_page")]
    pub default_items_per_page: u32,
    #[serde(default = "default_max_items_per_page")]
    pub max_items_per_page: u32,
}

fn default_items_per_page() -> u32 {
    40
}

fn default_max_items_per_page() -> u32 {
    1000
}

impl Default for FilterConfig {
    fn default() -> Self {
        FilterConfig {
            default_items_per_page: default_items_per_page(),
            max_items_per_page: default_max_items_per_page(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LoggingConfig {
    /// Default tracing filter; `RUST_LOG` takes precedence
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn load_from_file<P: AsRef<Path>>(config_path: P) -> AppResult<Self> {
        let path = config_path.as_ref();

        if !path.exists() {
            return Err(AppError::Configuration(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Configuration(format!("Failed to read config file {}: {}", path.display(), e))
        })?;

        Self::from_yaml(&content).map_err(|e| match e {
            AppError::Configuration(msg) => {
                AppError::Configuration(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }

    /// Parse YAML after expanding `${VAR}` references
    pub fn from_yaml(content: &str) -> AppResult<Self> {
        let expanded_content = Self::expand_env_vars(content)?;

        let app_config: AppConfig = serde_yaml::from_str(&expanded_content)
            .map_err(|e| AppError::Configuration(format!("Failed to parse config: {}", e)))?;

        app_config.validate()?;
        Ok(app_config)
    }

    /// Local development defaults
    pub fn default_config() -> Self {
        AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            filter: FilterConfig::default(),
            logging: LoggingConfig::default(),
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.filter.max_items_per_page == 0 {
            return Err(AppError::Configuration(
                "filter.max_items_per_page must be greater than zero".to_string(),
            ));
        }
        if self.filter.default_items_per_page == 0
            || self.filter.default_items_per_page > self.filter.max_items_per_page
        {
            return Err(AppError::Configuration(format!(
                "filter.default_items_per_page must be between 1 and {}",
                self.filter.max_items_per_page
            )));
        }
        Ok(())
    }

    /// Expand environment variables in format ${VAR_NAME} or ${VAR_NAME:-default}
    fn expand_env_vars(content: &str) -> AppResult<String> {
        let mut expanded = String::with_capacity(content.len());
        let mut rest = content;

        while let Some(start) = rest.find("${") {
            expanded.push_str(&rest[..start]);
            let after = &rest[start + 2..];

            let Some(end) = after.find('}') else {
                // Unterminated reference stays as written
                expanded.push_str(&rest[start..]);
                return Ok(expanded);
            };

            let var_expr = &after[..end];
            let (var_name, default_value) = match var_expr.find(":-") {
                Some(pos) => (&var_expr[..pos], Some(&var_expr[pos + 2..])),
                None => (var_expr, None),
            };

            let value = match (std::env::var(var_name), default_value) {
                (Ok(val), _) => val,
                (Err(_), Some(default)) => default.to_string(),
                (Err(_), None) => {
                    return Err(AppError::Configuration(format!(
                        "Environment variable {} not found and no default provided",
                        var_name
                    )))
                }
            };

            expanded.push_str(&value);
            rest = &after[end + 1..];
        }

        expanded.push_str(rest);
        Ok(expanded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let yaml = r#"
server:
  host: "0.0.0.0"
  port: 8080
"#;
        let config = AppConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.filter, FilterConfig::default());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
server:
  host: "127.0.0.1"
  port: 9000
filter:
  default_items_per_page: 25
  max_items_per_page: 200
logging:
  level: "debug"
"#;
        let config = AppConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.filter.default_items_per_page, 25);
        assert_eq!(config.filter.max_items_per_page, 200);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_env_var_expansion() {
        std::env::set_var("LIST_FILTER_TEST_PORT", "4321");
        let yaml = r#"
server:
  host: "${LIST_FILTER_TEST_HOST:-localhost}"
  port: ${LIST_FILTER_TEST_PORT}
"#;
        let config = AppConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.server.host, "localhost");
        assert_eq!(config.server.port, 4321);
        std::env::remove_var("LIST_FILTER_TEST_PORT");
    }

    #[test]
    fn test_missing_env_var_without_default() {
        let yaml = "server:\n  host: ${LIST_FILTER_TEST_UNSET_VAR}\n  port: 1\n";
        let err = AppConfig::from_yaml(yaml).unwrap_err();
        assert!(err.to_string().contains("LIST_FILTER_TEST_UNSET_VAR"));
    }

    #[test]
    fn test_invalid_paging_is_rejected() {
        let yaml = r#"
server:
  host: "127.0.0.1"
  port: 3000
filter:
  default_items_per_page: 500
  max_items_per_page: 100
"#;
        assert!(matches!(
            AppConfig::from_yaml(yaml),
            Err(AppError::Configuration(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = AppConfig::load_from_file("/nonexistent/list-filter.yaml").unwrap_err();
        assert!(err.to_string().contains("Configuration file not found"));
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default_config().validate().is_ok());
    }
}
