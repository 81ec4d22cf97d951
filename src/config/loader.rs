//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the service
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{BridgeError, BridgeResult};

use super::types::ServiceConfig;

/// Loads and provides access to the service configuration.
///
/// # File Layout
///
/// ```text
/// server:
///   port: 8080
/// source:
///   kind: report            # or: spreadsheet (path, delimiter)
///   url: https://reports.example/api
///   token: "..."
///   timeout_secs: 3600
/// warehouse:
///   table: rrhh.rotation.employee_month_bridge
///   path: ./data/employee_month_bridge.ndjson
/// bridge:
///   excluded_employment_types: ["PART TIME BOLETA"]
///   parallel: false
/// ```
///
/// # Example
///
/// ```no_run
/// use rotation_bridge::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/service.yaml")?;
/// println!("Destination table: {}", loader.config().warehouse.table);
/// # Ok::<(), rotation_bridge::error::BridgeError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: ServiceConfig,
}

impl ConfigLoader {
    /// Loads configuration from the YAML file at `path`.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing or unreadable (`ConfigNotFound`)
    /// - The file is not valid YAML or misses a required section (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> BridgeResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| BridgeError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse(&content, &path_str)
    }

    /// Parses configuration from YAML text; `origin` names it in errors.
    pub fn parse(content: &str, origin: &str) -> BridgeResult<Self> {
        let config: ServiceConfig =
            serde_yaml::from_str(content).map_err(|e| BridgeError::ConfigParseError {
                path: origin.to_string(),
                message: e.to_string(),
            })?;

        Ok(Self { config })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> ServiceConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SourceConfig;
    use chrono::NaiveDate;

    fn config_path() -> &'static str {
        "./config/service.yaml"
    }

    #[test]
    fn test_load_bundled_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let config = result.unwrap().into_config();
        assert_eq!(config.server.port, 8080);
        assert!(matches!(config.source, SourceConfig::Report(_)));
        assert_eq!(
            config.bridge.excluded_employment_types,
            vec!["PART TIME BOLETA".to_string()]
        );
    }

    #[test]
    fn test_defaults_fill_optional_sections() {
        let yaml = r#"
source:
  kind: report
  url: http://localhost:9000/report
warehouse:
  table: rrhh.bridge
  path: /tmp/bridge.ndjson
"#;
        let config = ConfigLoader::parse(yaml, "inline").unwrap().into_config();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.log_level, "info");
        assert!(config.bridge.as_of.is_none());
        assert!(!config.bridge.parallel);

        let SourceConfig::Report(report) = config.source else {
            panic!("Expected report source");
        };
        assert_eq!(report.method, "report");
        assert_eq!(report.timeout_secs, 3600);
        assert!(report.token.is_none());
    }

    #[test]
    fn test_spreadsheet_source_with_delimiter() {
        let yaml = r#"
source:
  kind: spreadsheet
  path: ./data/planilla.csv
  delimiter: ";"
warehouse:
  table: rrhh.bridge
  path: /tmp/bridge.ndjson
bridge:
  as_of: 2024-03-10
  excluded_employment_types: []
  parallel: true
"#;
        let config = ConfigLoader::parse(yaml, "inline").unwrap().into_config();

        let SourceConfig::Spreadsheet(sheet) = &config.source else {
            panic!("Expected spreadsheet source");
        };
        assert_eq!(sheet.delimiter, b';');
        assert_eq!(config.bridge.as_of, NaiveDate::from_ymd_opt(2024, 3, 10));
        assert!(config.bridge.excluded_employment_types.is_empty());
        assert!(config.bridge.parallel);
    }

    #[test]
    fn test_multi_character_delimiter_is_rejected() {
        let yaml = r#"
source:
  kind: spreadsheet
  path: ./data/planilla.csv
  delimiter: "::"
warehouse:
  table: rrhh.bridge
  path: /tmp/bridge.ndjson
"#;
        assert!(matches!(
            ConfigLoader::parse(yaml, "inline"),
            Err(BridgeError::ConfigParseError { .. })
        ));
    }

    #[test]
    fn test_missing_warehouse_section_is_parse_error() {
        let yaml = "source:\n  kind: report\n  url: http://localhost/report\n";
        match ConfigLoader::parse(yaml, "inline") {
            Err(BridgeError::ConfigParseError { path, message }) => {
                assert_eq!(path, "inline");
                assert!(message.contains("warehouse"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_load_missing_file_returns_error() {
        match ConfigLoader::load("/nonexistent/service.yaml") {
            Err(BridgeError::ConfigNotFound { path }) => {
                assert!(path.contains("service.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }
}
