//! Exhaustive search status and statistics.
//!
//! The brute-force engine reports how its search ended and what it cost, so
//! callers can tell a proven optimum from a layout that merely beat the clock.
//!
//! - `SearchStatus`: Optimal, Feasible, Timeout or Skipped
//! - `SearchStats`: node, pruning and timing counters
//! - `SearchReport`: status, stats and bounds of one search

use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How an exhaustive search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SearchStatus {
    /// Search space exhausted or lower bound reached; the layout is optimal.
    Optimal,
    /// Deadline hit after at least one complete layout was found.
    Feasible,
    /// Deadline hit before any complete layout was found.
    Timeout,
    /// Search not attempted (too many pieces or strategy excludes it).
    #[default]
    Skipped,
}

impl SearchStatus {
    /// Returns true if the search produced a layout.
    pub fn has_layout(&self) -> bool {
        matches!(self, Self::Optimal | Self::Feasible)
    }
}

impl std::fmt::Display for SearchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Optimal => write!(f, "Optimal"),
            Self::Feasible => write!(f, "Feasible"),
            Self::Timeout => write!(f, "Timeout"),
            Self::Skipped => write!(f, "Skipped"),
        }
    }
}

/// Counters collected during an exhaustive search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchStats {
    /// Recursion entries.
    pub nodes_explored: u64,
    /// Placements undone.
    pub backtracks: u64,
    /// Branches cut because they could not beat the best layout.
    pub prunings_bound: u64,
    /// Open bins skipped because an equivalent bin was already tried.
    pub symmetry_skips: u64,
    /// Complete layouts that improved on the best one.
    pub solutions_found: u64,
    /// Deepest recursion level reached.
    pub max_depth: u64,
    /// Time spent searching.
    pub elapsed: Duration,
}

impl SearchStats {
    #[inline]
    pub fn on_node_explored(&mut self, depth: usize) {
        self.nodes_explored = self.nodes_explored.saturating_add(1);
        self.max_depth = self.max_depth.max(depth as u64);
    }

    #[inline]
    pub fn on_backtrack(&mut self) {
        self.backtracks = self.backtracks.saturating_add(1);
    }

    #[inline]
    pub fn on_pruning_bound(&mut self) {
        self.prunings_bound = self.prunings_bound.saturating_add(1);
    }

    #[inline]
    pub fn on_symmetry_skip(&mut self) {
        self.symmetry_skips = self.symmetry_skips.saturating_add(1);
    }

    #[inline]
    pub fn on_solution_found(&mut self) {
        self.solutions_found = self.solutions_found.saturating_add(1);
    }

    #[inline]
    pub fn set_elapsed(&mut self, elapsed: Duration) {
        self.elapsed = elapsed;
    }
}

impl std::fmt::Display for SearchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Brute-force search statistics:")?;
        writeln!(f, "  Nodes explored:   {}", self.nodes_explored)?;
        writeln!(f, "  Backtracks:       {}", self.backtracks)?;
        writeln!(f, "  Max depth:        {}", self.max_depth)?;
        writeln!(f, "  Prunings (bound): {}", self.prunings_bound)?;
        writeln!(f, "  Symmetry skips:   {}", self.symmetry_skips)?;
        writeln!(f, "  Solutions found:  {}", self.solutions_found)?;
        writeln!(f, "  Elapsed:          {:.2?}", self.elapsed)?;
        Ok(())
    }
}

/// Summary of one exhaustive search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchReport {
    /// How the search ended.
    pub status: SearchStatus,
    /// Admissible lower bound on the bin count.
    pub lower_bound: usize,
    /// Bins in the best layout found, if any.
    pub best_bins: Option<usize>,
    /// Search counters.
    pub stats: SearchStats,
}

impl SearchReport {
    /// Report for a search that was not attempted.
    pub fn skipped() -> Self {
        Self::default()
    }

    /// Gap between the best layout and the lower bound, in bins.
    pub fn gap(&self) -> Option<usize> {
        self.best_bins
            .map(|bins| bins.saturating_sub(self.lower_bound))
    }

    /// Returns true if the layout is proven optimal.
    pub fn is_optimal(&self) -> bool {
        self.status == SearchStatus::Optimal
    }
}
