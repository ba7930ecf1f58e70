//! FFI type definitions.

use serde::{Deserialize, Serialize};
use stockcut_core::{Error, StockCutResult};

/// API version.
pub const API_VERSION: &str = "1.0";

/// HTTP-style status reported for a successful solve.
pub const STATUS_OK: u16 = 200;

/// Envelope fields of a solve request.
///
/// The job itself is read from the same JSON object: `max_length`,
/// `cut_width` and `target_sizes`, the latter either as a list of
/// `{"length", "quantity"}` objects or as an object keyed by length.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequestEnvelope {
    /// API version.
    #[serde(default)]
    pub version: Option<String>,

    /// Configuration overrides.
    #[serde(default)]
    pub config: Option<ConfigRequest>,
}

/// Configuration request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigRequest {
    /// Engine strategy: `auto`, `bruteforce` or `ffd`.
    pub strategy: Option<String>,

    /// Largest piece count for brute force.
    pub brute_piece_limit: Option<usize>,

    /// Brute-force budget in microseconds.
    pub brute_time_budget_us: Option<u64>,

    /// Brute-force budget in milliseconds. Ignored if `brute_time_budget_us` is set.
    pub time_limit_ms: Option<u64>,

    /// Upper bound on total pieces.
    pub max_total_pieces: Option<u64>,
}

/// Response for solve operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveResponse {
    /// API version.
    pub version: String,

    /// Whether the operation succeeded.
    pub success: bool,

    /// HTTP-style status: 200, 400, 406 or 507.
    pub status: u16,

    /// Error message if failed.
    pub error: Option<String>,

    /// Cutting layout if succeeded.
    #[serde(default)]
    pub result: Option<StockCutResult>,
}

impl SolveResponse {
    /// Creates a failure response from a solver error.
    pub fn failure(error: &Error) -> Self {
        Self {
            version: API_VERSION.to_string(),
            success: false,
            status: error.status_code(),
            error: Some(error.to_string()),
            result: None,
        }
    }
}

impl From<StockCutResult> for SolveResponse {
    fn from(result: StockCutResult) -> Self {
        Self {
            version: API_VERSION.to_string(),
            success: true,
            status: STATUS_OK,
            error: None,
            result: Some(result),
        }
    }
}

impl From<stockcut_core::Result<StockCutResult>> for SolveResponse {
    fn from(outcome: stockcut_core::Result<StockCutResult>) -> Self {
        match outcome {
            Ok(result) => result.into(),
            Err(e) => Self::failure(&e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockcut_core::{Job, SolverKind};

    #[test]
    fn test_failure_status() {
        let response = SolveResponse::failure(&Error::invalid_job("invalid max_length"));
        assert!(!response.success);
        assert_eq!(response.status, 406);
        assert_eq!(response.error.as_deref(), Some("invalid max_length"));
        assert!(response.result.is_none());
    }

    #[test]
    fn test_success_serializes_result_shape() {
        let job = Job::new(100, 0).with_target(50, 2);
        let result = StockCutResult::new(job, SolverKind::BruteForce, 12, vec![vec![50, 50]]);
        let json = serde_json::to_value(SolveResponse::from(result)).unwrap();

        assert_eq!(json["status"], 200);
        assert_eq!(json["result"]["solver_type"], "bruteforce");
        assert_eq!(json["result"]["time_us"], 12);
        assert_eq!(json["result"]["lengths"], serde_json::json!([[50, 50]]));
        assert_eq!(json["result"]["job"]["max_length"], 100);
    }

    #[test]
    fn test_config_request_defaults() {
        let config: ConfigRequest = serde_json::from_str("{}").unwrap();
        assert!(config.strategy.is_none());
        assert!(config.brute_piece_limit.is_none());
    }
}
