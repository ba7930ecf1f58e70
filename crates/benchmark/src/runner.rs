//! Benchmark runner comparing engine strategies on cutting jobs.

use crate::result::{BenchmarkResult, RunResult};
use crate::synthetic::NamedJob;
use stockcut_core::{Config, Strategy, BRUTE_PIECE_LIMIT, BRUTE_TIME_BUDGET_US, MAX_TOTAL_PIECES};
use stockcut_d1::{lower_bound, Cutter1D};

/// Configuration for benchmark runs.
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    /// Strategies to benchmark.
    pub strategies: Vec<Strategy>,
    /// Brute-force budget per run in microseconds.
    pub time_budget_us: u64,
    /// Brute-force piece limit.
    pub piece_limit: usize,
    /// Jobs with more pieces are skipped.
    pub max_total_pieces: u64,
    /// Number of runs per configuration (for averaging).
    pub runs_per_config: usize,
    /// Whether to show progress.
    pub show_progress: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            strategies: vec![Strategy::Auto, Strategy::FirstFitDecreasing],
            time_budget_us: BRUTE_TIME_BUDGET_US,
            piece_limit: BRUTE_PIECE_LIMIT,
            max_total_pieces: MAX_TOTAL_PIECES,
            runs_per_config: 1,
            show_progress: true,
        }
    }
}

impl BenchmarkConfig {
    /// Creates a new benchmark configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the strategies to benchmark.
    pub fn with_strategies(mut self, strategies: Vec<Strategy>) -> Self {
        self.strategies = strategies;
        self
    }

    /// Sets the brute-force budget per run.
    pub fn with_time_budget_us(mut self, us: u64) -> Self {
        self.time_budget_us = us;
        self
    }

    /// Sets the brute-force piece limit.
    pub fn with_piece_limit(mut self, limit: usize) -> Self {
        self.piece_limit = limit;
        self
    }

    /// Sets the piece count above which jobs are skipped.
    pub fn with_max_total_pieces(mut self, limit: u64) -> Self {
        self.max_total_pieces = limit.max(1);
        self
    }

    /// Sets the number of runs per configuration.
    pub fn with_runs_per_config(mut self, n: usize) -> Self {
        self.runs_per_config = n.max(1);
        self
    }

    /// Disables progress output.
    pub fn quiet(mut self) -> Self {
        self.show_progress = false;
        self
    }

    /// Quick preset: one run, 1s budget.
    pub fn quick() -> Self {
        Self {
            time_budget_us: 1_000_000,
            ..Self::default()
        }
    }

    /// Standard preset: all strategies, three runs each.
    pub fn standard() -> Self {
        Self {
            strategies: vec![
                Strategy::Auto,
                Strategy::BruteForce,
                Strategy::FirstFitDecreasing,
            ],
            runs_per_config: 3,
            ..Self::default()
        }
    }

    fn solver_config(&self, strategy: Strategy) -> Config {
        Config::new()
            .with_strategy(strategy)
            .with_brute_piece_limit(self.piece_limit)
            .with_time_budget_us(self.time_budget_us)
            .with_max_total_pieces(self.max_total_pieces)
    }
}

/// Benchmark runner.
pub struct BenchmarkRunner {
    config: BenchmarkConfig,
}

impl BenchmarkRunner {
    /// Creates a new benchmark runner.
    pub fn new(config: BenchmarkConfig) -> Self {
        Self { config }
    }

    /// Runs every strategy on a single job.
    pub fn run_job(&self, named: &NamedJob) -> BenchmarkResult {
        let mut results = BenchmarkResult::new();
        self.run_into(named, &mut results);
        results
    }

    /// Runs every strategy on every job.
    pub fn run_all(&self, jobs: &[NamedJob]) -> BenchmarkResult {
        let mut results = BenchmarkResult::new();
        for named in jobs {
            self.run_into(named, &mut results);
        }
        results
    }

    fn run_into(&self, named: &NamedJob, results: &mut BenchmarkResult) {
        // Expansion allocates one entry per piece, so reject before it.
        if let Err(e) = named.job.validate() {
            log::warn!("skipping {}: {}", named.name, e);
            return;
        }
        let total_pieces = named.job.total_pieces();
        if total_pieces > self.config.max_total_pieces {
            log::warn!(
                "skipping {}: {} pieces exceeds limit of {}",
                named.name,
                total_pieces,
                self.config.max_total_pieces
            );
            return;
        }

        let pieces = named.job.expand();
        let bound = lower_bound(&pieces, named.job.max_length, named.job.cut_width);

        if self.config.show_progress {
            println!("\nBenchmarking job: {}", named.name);
            println!("  Sizes: {}", named.job.target_sizes.len());
            println!("  Total pieces: {}", pieces.len());
            println!("  Lower bound: {} bars", bound);
        }

        for strategy in &self.config.strategies {
            let cutter = Cutter1D::new(self.config.solver_config(*strategy));

            for run_idx in 0..self.config.runs_per_config {
                match cutter.solve_with_report(&named.job) {
                    Ok((result, report)) => {
                        let run = RunResult::new(
                            named.name.clone(),
                            format!("run_{}", run_idx + 1),
                            *strategy,
                            &result,
                            &report,
                            bound,
                        );

                        if self.config.show_progress {
                            println!(
                                "    {} run {}: bars={}, solver={}, search={}, time={}us",
                                strategy,
                                run_idx + 1,
                                run.bins_used,
                                run.solver,
                                run.search_status,
                                run.time_us
                            );
                        }

                        results.add_run(run);
                    }
                    Err(e) => {
                        log::warn!("{} failed on {}: {}", strategy, named.name, e);
                        if self.config.show_progress {
                            println!("    {} run {}: FAILED - {}", strategy, run_idx + 1, e);
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockcut_core::Job;

    #[test]
    fn test_auto_beats_ffd_on_trap() {
        let job = Job::new(100, 0)
            .with_target(45, 2)
            .with_target(30, 2)
            .with_target(25, 2);
        let runner = BenchmarkRunner::new(BenchmarkConfig::new().quiet());
        let results = runner.run_job(&NamedJob::new("trap", job));

        assert_eq!(results.runs.len(), 2);
        let auto = &results.runs[0];
        let ffd = &results.runs[1];
        assert_eq!(auto.solver, "bruteforce");
        assert_eq!(auto.bins_used, 2);
        assert_eq!(ffd.solver, "FFD");
        assert_eq!(ffd.bins_used, 3);
        assert_eq!(auto.lower_bound, 2);
    }

    #[test]
    fn test_invalid_job_is_skipped() {
        let runner = BenchmarkRunner::new(BenchmarkConfig::new().quiet());
        let results = runner.run_job(&NamedJob::new("bad", Job::new(0, 0)));
        assert!(results.runs.is_empty());
    }

    #[test]
    fn test_oversized_job_is_skipped() {
        let runner = BenchmarkRunner::new(BenchmarkConfig::new().quiet());
        let job = Job::new(100, 0).with_target(10, 4_000_000_000);
        let results = runner.run_job(&NamedJob::new("big", job));
        assert!(results.runs.is_empty());
    }

    #[test]
    fn test_max_total_pieces_reaches_solver() {
        let config = BenchmarkConfig::new()
            .quiet()
            .with_strategies(vec![Strategy::FirstFitDecreasing])
            .with_max_total_pieces(3);
        let runner = BenchmarkRunner::new(config);

        let over = runner.run_job(&NamedJob::new("four", Job::new(10, 0).with_target(5, 4)));
        assert!(over.runs.is_empty());

        let within = runner.run_job(&NamedJob::new("three", Job::new(10, 0).with_target(5, 3)));
        assert_eq!(within.runs.len(), 1);
    }

    #[test]
    fn test_runs_per_config() {
        let config = BenchmarkConfig::new()
            .quiet()
            .with_strategies(vec![Strategy::FirstFitDecreasing])
            .with_runs_per_config(3);
        let runner = BenchmarkRunner::new(config);
        let results = runner.run_job(&NamedJob::new("halves", Job::new(10, 0).with_target(5, 4)));

        assert_eq!(results.runs.len(), 3);
        assert!(results.runs.iter().all(|r| r.bins_used == 2));
    }
}
