//! C FFI API functions.

use crate::types::*;
use std::ffi::{CStr, CString};
use std::os::raw::c_char;

use stockcut_core::solver::{Config, Strategy};
use stockcut_core::{Error, Job, Result};
use stockcut_d1::distribute_with_config;

/// Error codes.
pub const STOCKCUT_OK: i32 = 0;
pub const STOCKCUT_ERR_NULL_PTR: i32 = -1;
pub const STOCKCUT_ERR_INVALID_JSON: i32 = -2;
pub const STOCKCUT_ERR_INVALID_JOB: i32 = -3;
pub const STOCKCUT_ERR_SOLVE_FAILED: i32 = -4;
pub const STOCKCUT_ERR_UNKNOWN: i32 = -99;

/// Distributes a cutting job from JSON input.
///
/// On every return code other than `STOCKCUT_ERR_NULL_PTR` and
/// `STOCKCUT_ERR_UNKNOWN`, `*result_ptr` receives a JSON [`SolveResponse`].
///
/// # Safety
/// - `request_json` must be a valid null-terminated UTF-8 string
/// - `result_ptr` must be a valid pointer to a `*mut c_char`
/// - The caller must free the result string using `stockcut_free_string`
#[no_mangle]
pub unsafe extern "C" fn stockcut_solve(
    request_json: *const c_char,
    result_ptr: *mut *mut c_char,
) -> i32 {
    if request_json.is_null() || result_ptr.is_null() {
        return STOCKCUT_ERR_NULL_PTR;
    }

    let response = match CStr::from_ptr(request_json).to_str() {
        Ok(json_str) => solve_internal(json_str),
        Err(e) => SolveResponse::failure(&Error::Serialization(e.to_string())),
    };

    let response_json = match serde_json::to_string(&response) {
        Ok(s) => s,
        Err(_) => return STOCKCUT_ERR_UNKNOWN,
    };

    match CString::new(response_json) {
        Ok(cstr) => {
            *result_ptr = cstr.into_raw();
            response_code(&response)
        }
        Err(_) => STOCKCUT_ERR_UNKNOWN,
    }
}

/// Frees a string allocated by stockcut.
///
/// # Safety
/// - `ptr` must have been allocated by a stockcut function
/// - `ptr` must not be used after this call
#[no_mangle]
pub unsafe extern "C" fn stockcut_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(CString::from_raw(ptr));
    }
}

/// Returns the API version from Cargo.toml.
///
/// # Safety
/// - The returned string is statically allocated and must not be freed
#[no_mangle]
pub extern "C" fn stockcut_version() -> *const c_char {
    static VERSION: &[u8] = concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes();
    VERSION.as_ptr() as *const c_char
}

fn response_code(response: &SolveResponse) -> i32 {
    match response.status {
        STATUS_OK => STOCKCUT_OK,
        400 => STOCKCUT_ERR_INVALID_JSON,
        406 => STOCKCUT_ERR_INVALID_JOB,
        _ => STOCKCUT_ERR_SOLVE_FAILED,
    }
}

// Internal implementation functions

fn solve_internal(json_str: &str) -> SolveResponse {
    let request = parse_request(json_str);
    request
        .and_then(|(job, config)| distribute_with_config(&job, config))
        .into()
}

fn parse_request(json_str: &str) -> Result<(Job, Config)> {
    let value: serde_json::Value = serde_json::from_str(json_str).map_err(invalid_json)?;

    let job = Job::from_json_value(&value)?;

    let envelope: RequestEnvelope = serde_json::from_value(value).map_err(invalid_json)?;
    if let Some(version) = envelope.version.as_deref() {
        if version != API_VERSION {
            log::warn!("request version {} differs from API version {}", version, API_VERSION);
        }
    }

    Ok((job, build_config(envelope.config)))
}

fn invalid_json(e: serde_json::Error) -> Error {
    Error::Serialization(format!("Invalid JSON: {}", e))
}

fn build_config(request: Option<ConfigRequest>) -> Config {
    let mut config = Config::default();

    if let Some(req) = request {
        if let Some(limit) = req.brute_piece_limit {
            config = config.with_brute_piece_limit(limit);
        }
        if let Some(ms) = req.time_limit_ms {
            config = config.with_time_budget_us(ms.saturating_mul(1_000));
        }
        if let Some(us) = req.brute_time_budget_us {
            config = config.with_time_budget_us(us);
        }
        if let Some(max) = req.max_total_pieces {
            config = config.with_max_total_pieces(max);
        }
        if let Some(strategy) = req.strategy {
            config.strategy = match strategy.parse::<Strategy>() {
                Ok(s) => s,
                Err(_) => {
                    log::warn!("unknown strategy '{}', using auto", strategy);
                    Strategy::Auto
                }
            };
        }
    }

    config
}
