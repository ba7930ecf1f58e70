//! Solver traits and configuration.

use crate::job::Job;
use crate::result::StockCutResult;
use crate::Result;
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest piece count for which brute force is attempted.
pub const BRUTE_PIECE_LIMIT: usize = 12;

/// Wall-clock budget for brute force, in microseconds.
pub const BRUTE_TIME_BUDGET_US: u64 = 5_000_000;

/// Upper bound on pieces accepted by a solver.
pub const MAX_TOTAL_PIECES: u64 = 1_000_000;

/// Engine selection strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Strategy {
    /// Brute force within the piece limit, FFD otherwise or on timeout.
    #[default]
    Auto,
    /// Prefer brute force; behaves like `Auto` but reports every fallback.
    BruteForce,
    /// First-Fit-Decreasing only.
    FirstFitDecreasing,
}

impl Strategy {
    /// Returns true if the strategy may run the exhaustive search.
    pub fn allows_brute_force(&self) -> bool {
        !matches!(self, Self::FirstFitDecreasing)
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::BruteForce => write!(f, "bruteforce"),
            Self::FirstFitDecreasing => write!(f, "ffd"),
        }
    }
}

impl std::str::FromStr for Strategy {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "bruteforce" | "brute" | "brute_force" | "exact" => Ok(Self::BruteForce),
            "ffd" | "first_fit_decreasing" | "firstfitdecreasing" => Ok(Self::FirstFitDecreasing),
            other => Err(crate::Error::Serialization(format!(
                "unknown strategy: {}",
                other
            ))),
        }
    }
}

/// Common configuration for solvers.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Engine selection strategy.
    pub strategy: Strategy,

    /// Maximum total pieces for which brute force is attempted.
    pub brute_piece_limit: usize,

    /// Brute-force wall-clock budget in microseconds, measured from solve start.
    pub brute_time_budget_us: u64,

    /// Jobs with more pieces than this are rejected before expansion.
    pub max_total_pieces: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            brute_piece_limit: BRUTE_PIECE_LIMIT,
            brute_time_budget_us: BRUTE_TIME_BUDGET_US,
            max_total_pieces: MAX_TOTAL_PIECES,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the engine selection strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the brute-force piece limit.
    pub fn with_brute_piece_limit(mut self, limit: usize) -> Self {
        self.brute_piece_limit = limit;
        self
    }

    /// Sets the brute-force budget in microseconds.
    pub fn with_time_budget_us(mut self, us: u64) -> Self {
        self.brute_time_budget_us = us;
        self
    }

    /// Sets the brute-force budget.
    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.brute_time_budget_us = u64::try_from(budget.as_micros()).unwrap_or(u64::MAX);
        self
    }

    /// Sets the accepted piece count ceiling.
    pub fn with_max_total_pieces(mut self, max: u64) -> Self {
        self.max_total_pieces = max.max(1);
        self
    }

    /// Check if the number of pieces is within the brute-force limit.
    pub fn is_within_brute_limit(&self, total_pieces: usize) -> bool {
        total_pieces <= self.brute_piece_limit
    }

    /// Brute-force budget as a [`Duration`].
    pub fn time_budget(&self) -> Duration {
        Duration::from_micros(self.brute_time_budget_us)
    }
}

/// Trait for one-dimensional cutting solvers.
pub trait Solver {
    /// Distributes the job's pieces onto stock bars.
    fn solve(&self, job: &Job) -> Result<StockCutResult>;

    /// Configuration the solver runs with.
    fn config(&self) -> &Config;
}
