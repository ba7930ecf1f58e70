//! # Stockcut FFI
//!
//! C FFI interface for the stockcut one-dimensional cutting stock solver.
//!
//! A single JSON-in/JSON-out entry point lets services written in other
//! languages hand over a cutting job and read back the layout.
//!
//! ## Functions
//!
//! - [`stockcut_solve`] - Distributes a job
//! - [`stockcut_free_string`] - Frees result strings
//! - [`stockcut_version`] - Returns API version
//!
//! ## Error Codes
//!
//! | Code | Constant | Status | Meaning |
//! |------|----------|--------|---------|
//! | 0 | `STOCKCUT_OK` | 200 | Success |
//! | -1 | `STOCKCUT_ERR_NULL_PTR` | - | Null pointer passed |
//! | -2 | `STOCKCUT_ERR_INVALID_JSON` | 400 | Invalid JSON input |
//! | -3 | `STOCKCUT_ERR_INVALID_JOB` | 406 | Job failed validation |
//! | -4 | `STOCKCUT_ERR_SOLVE_FAILED` | 507 | Internal solver failure |
//! | -99 | `STOCKCUT_ERR_UNKNOWN` | - | Unknown error |
//!
//! ## JSON Request Format
//!
//! ```json
//! {
//!   "max_length": 6000,
//!   "cut_width": 3,
//!   "target_sizes": [
//!     {"length": 2500, "quantity": 2},
//!     {"length": 1200, "quantity": 3}
//!   ],
//!   "config": {
//!     "strategy": "auto",
//!     "brute_piece_limit": 12,
//!     "brute_time_budget_us": 5000000
//!   }
//! }
//! ```
//!
//! `target_sizes` may also be an object keyed by length, e.g.
//! `{"2500": 2, "1200": 3}`.
//!
//! ## JSON Response Format
//!
//! ```json
//! {
//!   "version": "1.0",
//!   "success": true,
//!   "status": 200,
//!   "error": null,
//!   "result": {
//!     "job": {"max_length": 6000, "cut_width": 3, "target_sizes": [...]},
//!     "solver_type": "bruteforce",
//!     "time_us": 184,
//!     "lengths": [[2500, 2500], [1200, 1200, 1200]]
//!   }
//! }
//! ```
//!
//! ## C Example
//!
//! ```c
//! #include "stockcut.h"
//! #include <stdio.h>
//!
//! int main() {
//!     const char* request = "{\"max_length\": 1000, \"cut_width\": 0, ...}";
//!     char* result = NULL;
//!     int code = stockcut_solve(request, &result);
//!     if (result != NULL) {
//!         printf("Result: %s\n", result);
//!     }
//!     stockcut_free_string(result);
//!     return code;
//! }
//! ```

mod api;
mod types;

pub use api::*;
pub use types::*;
