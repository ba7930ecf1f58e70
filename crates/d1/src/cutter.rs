//! One-dimensional stock cutting solver.

use crate::bruteforce::BruteForce;
use crate::ffd::first_fit_decreasing;
use stockcut_core::solver::{Config, Solver, Strategy};
use stockcut_core::{Error, Job, Length, Result, SearchReport, SolverKind, StockCutResult};

use std::time::Instant;

/// 1D stock cutting solver.
///
/// Runs the exhaustive search for small jobs and falls back to
/// First-Fit-Decreasing when the job is too large or the search runs out of
/// time without a complete layout.
#[derive(Debug, Clone, Default)]
pub struct Cutter1D {
    config: Config,
}

impl Cutter1D {
    /// Creates a new cutter with the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Creates a cutter with default configuration.
    pub fn default_config() -> Self {
        Self::new(Config::default())
    }

    /// Solves the job and also returns the brute-force search report.
    ///
    /// The report is [`SearchReport::skipped`] when the search was not run.
    pub fn solve_with_report(&self, job: &Job) -> Result<(StockCutResult, SearchReport)> {
        job.validate()?;

        let total_pieces = job.total_pieces();
        if total_pieces > self.config.max_total_pieces {
            return Err(Error::invalid_job(format!(
                "too many pieces: {} exceeds limit of {}",
                total_pieces, self.config.max_total_pieces
            )));
        }

        let start = Instant::now();
        let pieces = job.expand();

        let (layout, report) = self.brute_force(job, &pieces, start);
        let (solver_kind, lengths) = match layout {
            Some(layout) => (SolverKind::BruteForce, layout),
            None => (
                SolverKind::Ffd,
                first_fit_decreasing(&pieces, job.max_length, job.cut_width),
            ),
        };

        let time_us = u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX);
        let result = StockCutResult::new(job.clone(), solver_kind, time_us, lengths);

        if let Err(e) = result.validate() {
            log::error!("{} produced an invalid layout: {}", solver_kind, e);
            return Err(e);
        }

        log::debug!(
            "distributed {} pieces onto {} bars with {} in {}us",
            pieces.len(),
            result.bins_used(),
            solver_kind,
            time_us
        );

        Ok((result, report))
    }

    fn brute_force(
        &self,
        job: &Job,
        pieces: &[Length],
        start: Instant,
    ) -> (Option<Vec<Vec<Length>>>, SearchReport) {
        if !self.config.strategy.allows_brute_force() {
            return (None, SearchReport::skipped());
        }

        if !self.config.is_within_brute_limit(pieces.len()) {
            self.report_fallback(format_args!(
                "{} pieces exceed brute force limit of {}, using FFD",
                pieces.len(),
                self.config.brute_piece_limit
            ));
            return (None, SearchReport::skipped());
        }

        let mut engine = BruteForce::new(job.max_length, job.cut_width);
        if let Some(deadline) = start.checked_add(self.config.time_budget()) {
            engine = engine.with_deadline(deadline);
        }
        let outcome = engine.run(pieces);

        log::debug!(
            "brute force finished: {} ({} nodes, lower bound {})",
            outcome.report.status,
            outcome.report.stats.nodes_explored,
            outcome.report.lower_bound
        );
        if outcome.layout.is_none() {
            self.report_fallback(format_args!(
                "brute force timed out after {}us without a layout, using FFD",
                self.config.brute_time_budget_us
            ));
        }

        (outcome.layout, outcome.report)
    }

    fn report_fallback(&self, message: std::fmt::Arguments<'_>) {
        match self.config.strategy {
            Strategy::BruteForce => log::warn!("{}", message),
            _ => log::info!("{}", message),
        }
    }
}

impl Solver for Cutter1D {
    fn solve(&self, job: &Job) -> Result<StockCutResult> {
        self.solve_with_report(job).map(|(result, _)| result)
    }

    fn config(&self) -> &Config {
        &self.config
    }
}

/// Distributes a job with the default configuration.
///
/// Brute force for up to [`BRUTE_PIECE_LIMIT`](stockcut_core::BRUTE_PIECE_LIMIT)
/// pieces within [`BRUTE_TIME_BUDGET_US`](stockcut_core::BRUTE_TIME_BUDGET_US),
/// First-Fit-Decreasing otherwise.
///
/// Jobs with more than [`MAX_TOTAL_PIECES`](stockcut_core::MAX_TOTAL_PIECES)
/// pieces are rejected with [`Error::InvalidJob`] (status 406) before
/// expansion, even though they pass [`Job::validate`].
pub fn distribute(job: &Job) -> Result<StockCutResult> {
    Cutter1D::default_config().solve(job)
}

/// Distributes a job with the given configuration.
pub fn distribute_with_config(job: &Job, config: Config) -> Result<StockCutResult> {
    Cutter1D::new(config).solve(job)
}
