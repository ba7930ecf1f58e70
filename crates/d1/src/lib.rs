//! # Stockcut 1D
//!
//! One-dimensional cutting stock engines.
//!
//! Given a stock bar length, a kerf (the material lost to each cut) and a
//! list of requested piece lengths with quantities, the solver assigns every
//! piece to a bar so that no bar is overfilled, using as few bars as it can.
//!
//! ## Engines
//!
//! - **Brute force**: exhaustive partition search with bound and symmetry
//!   pruning. Minimal bar count for jobs of up to
//!   [`BRUTE_PIECE_LIMIT`] pieces that finish within the time budget.
//! - **First-Fit-Decreasing**: fast heuristic used for everything else.
//!
//! ## Quick Start
//!
//! ```rust
//! use stockcut_d1::{distribute, Job, SolverKind};
//!
//! let job = Job::new(1000, 10)
//!     .with_target(500, 1)
//!     .with_target(490, 1);
//!
//! let result = distribute(&job).unwrap();
//! assert_eq!(result.solver_kind, SolverKind::BruteForce);
//! assert_eq!(result.lengths, vec![vec![500, 490]]);
//! ```
//!
//! ## Kerf
//!
//! A bar holding pieces `l1..lk` uses `l1 + ... + lk + cut_width * (k - 1)`.
//! No kerf is charged after the last piece.

mod bin;
pub mod bruteforce;
pub mod cutter;
pub mod ffd;

pub use bruteforce::{lower_bound, BruteForce, BruteForceOutcome};
pub use cutter::{distribute, distribute_with_config, Cutter1D};
pub use ffd::first_fit_decreasing;

// Re-export core types
pub use stockcut_core::{
    bin_extent, Config, CutSummary, Error, Job, Length, LegacyJob, Result, SearchReport,
    SearchStats, SearchStatus, Solver, SolverKind, StockCutResult, Strategy, TargetSize,
    BRUTE_PIECE_LIMIT, BRUTE_TIME_BUDGET_US, MAX_TOTAL_PIECES,
};
