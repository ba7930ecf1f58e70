//! # Stockcut Core
//!
//! Core types and traits for the stockcut one-dimensional cutting stock solver.
//!
//! This crate holds everything the engines and the API layers share: the job
//! model, validation, the result model and its invariant checks, solver
//! configuration, and search reporting.
//!
//! ## Core Components
//!
//! - **Job model**: [`Job`], [`TargetSize`], [`LegacyJob`]
//! - **Result model**: [`StockCutResult`], [`SolverKind`], [`CutSummary`]
//! - **Solver trait**: [`Solver`] - Common interface for all engines
//! - **Search reporting**: [`SearchReport`], [`SearchStatus`], [`SearchStats`]
//!
//! ## Engine Selection
//!
//! | Strategy | Behaviour |
//! |----------|-----------|
//! | `Auto` | Brute force up to the piece limit, FFD otherwise or on timeout |
//! | `BruteForce` | Same as `Auto`, every fallback is reported |
//! | `FirstFitDecreasing` | FFD only |
//!
//! ## Configuration
//!
//! ```rust
//! use stockcut_core::{Config, Strategy};
//!
//! let config = Config::new()
//!     .with_strategy(Strategy::Auto)
//!     .with_brute_piece_limit(10)
//!     .with_time_budget_us(500_000);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod error;
pub mod exact;
pub mod job;
pub mod legacy;
pub mod result;
pub mod solver;

// Re-exports
pub use error::{Error, Result};
pub use exact::{SearchReport, SearchStats, SearchStatus};
pub use job::{Job, Length, TargetSize};
pub use legacy::LegacyJob;
pub use result::{bin_extent, CutSummary, SolverKind, StockCutResult};
pub use solver::{
    Config, Solver, Strategy, BRUTE_PIECE_LIMIT, BRUTE_TIME_BUDGET_US, MAX_TOTAL_PIECES,
};
