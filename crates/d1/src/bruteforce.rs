//! Exhaustive partition search for the minimum number of stock bars.
//!
//! Pieces are placed one at a time, longest first. For every piece the search
//! tries each open bar it fits into and then a fresh bar, depth first, keeping
//! the best complete layout seen so far.
//!
//! Pruning
//! - A branch is cut as soon as its open bars plus a lower bound on the bars
//!   still needed reach the size of the best layout.
//! - Open bars with the same occupancy are interchangeable; only the first of
//!   them is tried for a given piece.
//! - The search stops early once a layout meets the global lower bound
//!   `ceil(sum(length + kerf) / (max_length + kerf))`.
//!
//! The deadline is checked on every recursion entry. When it expires the best
//! layout found so far is returned, or none if the search never completed one.
//! The search space grows with the Bell number of the piece count, so callers
//! gate it on a small piece limit.

use crate::bin::Bin;
use std::time::Instant;
use stockcut_core::{Length, SearchReport, SearchStats, SearchStatus};

/// Outcome of a brute-force run.
#[derive(Debug, Clone)]
pub struct BruteForceOutcome {
    /// Best layout found, one vector of piece lengths per bar.
    pub layout: Option<Vec<Vec<Length>>>,
    /// Status, bounds and counters of the search.
    pub report: SearchReport,
}

impl BruteForceOutcome {
    /// Returns true if the search produced a complete layout.
    pub fn has_layout(&self) -> bool {
        self.layout.is_some()
    }
}

/// Brute-force engine for one bar length and kerf.
#[derive(Debug, Clone)]
pub struct BruteForce {
    max_length: Length,
    cut_width: Length,
    deadline: Option<Instant>,
}

impl BruteForce {
    /// Creates an engine without a deadline.
    pub fn new(max_length: Length, cut_width: Length) -> Self {
        Self {
            max_length,
            cut_width,
            deadline: None,
        }
    }

    /// Stops the search once `deadline` has passed.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Searches for a minimum-bar layout of `pieces`.
    ///
    /// `pieces` must be sorted longest first and every piece must fit an
    /// empty bar; [`Job::validate`](stockcut_core::Job::validate) and
    /// [`Job::expand`](stockcut_core::Job::expand) guarantee both.
    pub fn run(&self, pieces: &[Length]) -> BruteForceOutcome {
        let start = Instant::now();
        let mut search = Search::new(self, pieces);
        if !pieces.is_empty() {
            search.descend(0);
        }
        search.finish(start)
    }
}

/// Admissible lower bound on the bars needed for `pieces`.
///
/// Every piece costs its length plus one kerf, and a bar absorbs at most
/// `max_length + cut_width` of that, so at least
/// `ceil(sum(length + kerf) / (max_length + kerf))` bars are needed.
pub fn lower_bound(pieces: &[Length], max_length: Length, cut_width: Length) -> usize {
    if pieces.is_empty() {
        return 0;
    }
    let cut = cut_width as i128;
    let load: i128 = pieces.iter().map(|&piece| piece as i128 + cut).sum();
    ceil_div(load, max_length as i128 + cut).max(1) as usize
}

struct Search<'a> {
    pieces: &'a [Length],
    max_length: Length,
    cut_width: Length,
    deadline: Option<Instant>,
    /// `load_from[i]` is the sum of `length + kerf` over `pieces[i..]`.
    load_from: Vec<i128>,
    lower_bound: usize,
    bins: Vec<Bin>,
    best: Option<Vec<Vec<Length>>>,
    best_count: usize,
    timed_out: bool,
    stats: SearchStats,
}

impl<'a> Search<'a> {
    fn new(engine: &BruteForce, pieces: &'a [Length]) -> Self {
        let cut = engine.cut_width as i128;
        let mut load_from = vec![0i128; pieces.len() + 1];
        for i in (0..pieces.len()).rev() {
            load_from[i] = load_from[i + 1] + pieces[i] as i128 + cut;
        }

        let lower_bound = lower_bound(pieces, engine.max_length, engine.cut_width);

        Self {
            pieces,
            max_length: engine.max_length,
            cut_width: engine.cut_width,
            deadline: engine.deadline,
            load_from,
            lower_bound,
            bins: Vec::with_capacity(pieces.len()),
            best: None,
            best_count: usize::MAX,
            timed_out: false,
            stats: SearchStats::default(),
        }
    }

    #[inline]
    fn should_stop(&self) -> bool {
        self.timed_out || self.best_count <= self.lower_bound
    }

    /// Lower bound on the bars still to open for `pieces[index..]`.
    ///
    /// An open bar can absorb at most `max_length - used` of the remaining
    /// `length + kerf` load, a fresh bar at most `max_length + kerf`.
    fn extra_bins_needed(&self, index: usize) -> usize {
        let free: i128 = self
            .bins
            .iter()
            .map(|bin| (self.max_length - bin.used()) as i128)
            .sum();
        let overflow = self.load_from[index] - free;
        if overflow <= 0 {
            return 0;
        }
        let capacity = self.max_length as i128 + self.cut_width as i128;
        ceil_div(overflow, capacity) as usize
    }

    fn descend(&mut self, index: usize) {
        self.stats.on_node_explored(index);

        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                self.timed_out = true;
                return;
            }
        }

        if index == self.pieces.len() {
            self.record_layout();
            return;
        }

        if self.bins.len().saturating_add(self.extra_bins_needed(index)) >= self.best_count {
            self.stats.on_pruning_bound();
            return;
        }

        let piece = self.pieces[index];

        let mut tried: Vec<Length> = Vec::with_capacity(self.bins.len());
        for slot in 0..self.bins.len() {
            if !self.bins[slot].fits(piece, self.max_length, self.cut_width) {
                continue;
            }
            let used = self.bins[slot].used();
            if tried.contains(&used) {
                self.stats.on_symmetry_skip();
                continue;
            }
            tried.push(used);

            self.bins[slot].push(piece, self.cut_width);
            self.descend(index + 1);
            self.bins[slot].pop(self.cut_width);
            self.stats.on_backtrack();

            if self.should_stop() {
                return;
            }
        }

        if self.bins.len() + 1 >= self.best_count {
            self.stats.on_pruning_bound();
            return;
        }

        self.bins.push(Bin::open(piece));
        self.descend(index + 1);
        self.bins.pop();
        self.stats.on_backtrack();
    }

    fn record_layout(&mut self) {
        if self.bins.len() >= self.best_count {
            return;
        }
        self.best_count = self.bins.len();
        self.best = Some(self.bins.iter().map(|bin| bin.pieces().to_vec()).collect());
        self.stats.on_solution_found();
        log::trace!(
            "brute force found layout with {} bars (lower bound {})",
            self.best_count,
            self.lower_bound
        );
    }

    fn finish(mut self, start: Instant) -> BruteForceOutcome {
        self.stats.set_elapsed(start.elapsed());

        let reached_bound = self.best_count <= self.lower_bound;
        let status = match (&self.best, self.timed_out && !reached_bound) {
            (Some(_), false) => SearchStatus::Optimal,
            (Some(_), true) => SearchStatus::Feasible,
            (None, _) => SearchStatus::Timeout,
        };

        let best_bins = self.best.as_ref().map(Vec::len);
        BruteForceOutcome {
            layout: self.best,
            report: SearchReport {
                status,
                lower_bound: self.lower_bound,
                best_bins,
                stats: self.stats,
            },
        }
    }
}

#[inline]
fn ceil_div(numerator: i128, denominator: i128) -> i128 {
    (numerator + denominator - 1) / denominator
}
