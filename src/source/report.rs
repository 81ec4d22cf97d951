//! HTTP report source.
//!
//! Fetches the employee report, a JSON array of objects keyed by raw report
//! headers, and converts it into [`EmployeeRecord`]s.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::bridge::{ISO_DATE_FORMAT, parse_day_first};
use crate::config::ReportSourceConfig;
use crate::error::{BridgeError, BridgeResult};
use crate::models::EmployeeRecord;

use super::EmployeeSource;
use super::normalize::normalize_keys;

/// Report columns delivered as `DD-MM-YYYY` text.
const REPORT_DATE_FIELDS: [&str; 2] = ["fecha_de_ingreso", "fecha_finiquito"];

/// Employee source backed by the upstream HTTP report.
#[derive(Debug, Clone)]
pub struct HttpReportSource {
    client: Client,
    url: String,
    method: String,
    token: Option<String>,
    timeout_secs: u64,
}

impl HttpReportSource {
    /// Creates a report source from its configuration.
    pub fn new(config: &ReportSourceConfig) -> BridgeResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| BridgeError::UpstreamConnection {
                message: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            url: config.url.clone(),
            method: config.method.clone(),
            token: config.token.clone(),
            timeout_secs: config.timeout_secs,
        })
    }

    fn map_request_error(&self, error: reqwest::Error) -> BridgeError {
        if error.is_timeout() {
            BridgeError::UpstreamTimeout {
                timeout_secs: self.timeout_secs,
            }
        } else if let Some(status) = error.status() {
            BridgeError::UpstreamStatus {
                status: status.as_u16(),
            }
        } else {
            BridgeError::UpstreamConnection {
                message: error.to_string(),
            }
        }
    }
}

#[async_trait]
impl EmployeeSource for HttpReportSource {
    async fn fetch(&self) -> BridgeResult<Vec<EmployeeRecord>> {
        info!(url = %self.url, "Requesting employee report");

        let mut request = self.client.get(&self.url).header("method", &self.method);
        if let Some(token) = &self.token {
            request = request.header("token", token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| self.map_request_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BridgeError::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.map_request_error(e))?;
        debug!(status = status.as_u16(), body_len = body.len(), "Report received");

        let records = parse_report(&body)?;
        info!(records = records.len(), "Employee report decoded");
        Ok(records)
    }
}

/// Decodes a report body into employee records.
///
/// Keys are normalized and the day-first report dates are rewritten as ISO
/// text; a date that does not match the report format is passed through for
/// the date normalizer to judge.
///
/// # Example
///
/// ```
/// use rotation_bridge::source::parse_report;
///
/// let body = r#"[{"RUT": "1-9", "FECHA DE INGRESO": "15-01-2024", "FECHA_FINIQUITO": null}]"#;
/// let records = parse_report(body).unwrap();
/// assert_eq!(records[0].hire_date.as_deref(), Some("2024-01-15"));
/// ```
pub fn parse_report(body: &str) -> BridgeResult<Vec<EmployeeRecord>> {
    let rows: Vec<Map<String, Value>> =
        serde_json::from_str(body).map_err(|e| BridgeError::UpstreamDecode {
            message: e.to_string(),
        })?;

    rows.into_iter()
        .map(|row| {
            let mut row = normalize_keys(row);
            for field in REPORT_DATE_FIELDS {
                if let Some(value) = row.get_mut(field) {
                    rewrite_report_date(value);
                }
            }
            serde_json::from_value(Value::Object(row)).map_err(|e| BridgeError::UpstreamDecode {
                message: e.to_string(),
            })
        })
        .collect()
}

fn rewrite_report_date(value: &mut Value) {
    let Value::String(text) = value else {
        return;
    };
    if let Some(date) = parse_day_first(text.trim()) {
        *text = date.format(ISO_DATE_FORMAT).to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_report_normalizes_keys_and_dates() {
        let body = r#"[
            {
                "RUT": "12345678-9",
                "NOMBRE COMPLETO": "ANA PEREZ",
                "CLIENTE": "ACME",
                "INSTALACIÓN": "BODEGA NORTE",
                "TIPO EMPLEADO": "PLAZO FIJO",
                "FECHA DE INGRESO": "15-01-2024",
                "FECHA_FINIQUITO": "20-06-2024",
                "CAUSAL FINIQUITO": "RENUNCIA VOLUNTARIA"
            }
        ]"#;

        let records = parse_report(body).unwrap();
        assert_eq!(records.len(), 1);

        let record = &records[0];
        assert_eq!(record.employee_id.as_deref(), Some("12345678-9"));
        assert_eq!(record.site.as_deref(), Some("BODEGA NORTE"));
        assert_eq!(record.hire_date.as_deref(), Some("2024-01-15"));
        assert_eq!(record.termination_date.as_deref(), Some("2024-06-20"));
        assert_eq!(record.termination_cause_text.as_deref(), Some("RENUNCIA VOLUNTARIA"));
    }

    #[test]
    fn test_parse_report_keeps_unrecognized_dates() {
        let body = r#"[{"FECHA DE INGRESO": "sin fecha"}]"#;
        let records = parse_report(body).unwrap();
        assert_eq!(records[0].hire_date.as_deref(), Some("sin fecha"));
    }

    #[test]
    fn test_parse_empty_report() {
        assert!(parse_report("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_report_rejects_non_array() {
        let result = parse_report(r#"{"error": "token invalido"}"#);
        assert!(matches!(result, Err(BridgeError::UpstreamDecode { .. })));
    }

    #[test]
    fn test_parse_report_rejects_invalid_json() {
        let result = parse_report("<html>502 Bad Gateway</html>");
        assert!(matches!(result, Err(BridgeError::UpstreamDecode { .. })));
    }

    #[tokio::test]
    async fn test_unreachable_report_source_is_connection_error() {
        let config = ReportSourceConfig {
            url: "http://127.0.0.1:9/report".to_string(),
            method: "report".to_string(),
            token: None,
            timeout_secs: 5,
        };
        let source = HttpReportSource::new(&config).unwrap();

        match source.fetch().await {
            Err(BridgeError::UpstreamConnection { .. }) | Err(BridgeError::UpstreamTimeout { .. }) => {}
            other => panic!("Expected upstream connection error, got {:?}", other),
        }
    }
}
