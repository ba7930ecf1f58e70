//! Benchmark result types and recording.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};
use stockcut_core::{SearchReport, Strategy, StockCutResult};

/// Result of a single benchmark run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunResult {
    /// Job name
    pub job: String,
    /// Run label
    pub run: String,
    /// Strategy requested
    pub strategy: String,
    /// Engine that produced the layout
    pub solver: String,
    /// Stock bars used (lower is better)
    pub bins_used: usize,
    /// Admissible lower bound on bars
    pub lower_bound: usize,
    /// Total pieces in the job
    pub total_pieces: usize,
    /// Material utilization (0.0 - 1.0)
    pub utilization: f64,
    /// Solve time in microseconds
    pub time_us: u64,
    /// Brute-force search outcome
    pub search_status: String,
    /// Search nodes explored
    pub nodes_explored: u64,
}

impl RunResult {
    /// Creates a run result from a solve.
    pub fn new(
        job: String,
        run: String,
        strategy: Strategy,
        result: &StockCutResult,
        report: &SearchReport,
        lower_bound: usize,
    ) -> Self {
        let summary = result.summary();
        Self {
            job,
            run,
            strategy: strategy.to_string(),
            solver: summary.solver,
            bins_used: summary.bins_used,
            lower_bound,
            total_pieces: summary.total_pieces,
            utilization: summary.utilization,
            time_us: summary.time_us,
            search_status: report.status.to_string(),
            nodes_explored: report.stats.nodes_explored,
        }
    }

    /// Bars above the lower bound.
    pub fn gap_bins(&self) -> usize {
        self.bins_used.saturating_sub(self.lower_bound)
    }
}

/// Collection of benchmark results.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct BenchmarkResult {
    /// Individual run results
    pub runs: Vec<RunResult>,
    /// Seconds since the Unix epoch when the benchmark was created
    pub timestamp: u64,
    /// Additional metadata
    pub metadata: BenchmarkMetadata,
}

/// Metadata about the benchmark run.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct BenchmarkMetadata {
    /// stockcut version
    pub version: String,
    /// Seed used for synthetic jobs, if any
    pub seed: Option<u64>,
}

impl BenchmarkResult {
    /// Creates a new benchmark result.
    pub fn new() -> Self {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self {
            runs: Vec::new(),
            timestamp,
            metadata: BenchmarkMetadata {
                version: env!("CARGO_PKG_VERSION").to_string(),
                seed: None,
            },
        }
    }

    /// Records the synthetic seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.metadata.seed = Some(seed);
        self
    }

    /// Adds a run result.
    pub fn add_run(&mut self, result: RunResult) {
        self.runs.push(result);
    }

    /// Saves results to a JSON file.
    pub fn save_json(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
    }

    /// Saves results to a CSV file.
    pub fn save_csv(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let mut file = File::create(path)?;

        writeln!(
            file,
            "job,run,strategy,solver,bins_used,lower_bound,total_pieces,utilization,time_us,search_status,nodes_explored"
        )?;

        for run in &self.runs {
            writeln!(
                file,
                "{},{},{},{},{},{},{},{:.4},{},{},{}",
                run.job,
                run.run,
                run.strategy,
                run.solver,
                run.bins_used,
                run.lower_bound,
                run.total_pieces,
                run.utilization,
                run.time_us,
                run.search_status,
                run.nodes_explored,
            )?;
        }

        Ok(())
    }

    /// Prints a summary table to stdout.
    pub fn print_summary(&self) {
        println!("\n{:=<96}", "");
        println!("BENCHMARK RESULTS");
        println!("{:=<96}", "");
        println!(
            "{:<20} {:<12} {:<12} {:>8} {:>6} {:>8} {:>8} {:>12}",
            "Job", "Strategy", "Solver", "Pieces", "Bars", "LB", "Util%", "Time(us)"
        );
        println!("{:-<96}", "");

        for run in &self.runs {
            println!(
                "{:<20} {:<12} {:<12} {:>8} {:>6} {:>8} {:>8.1} {:>12}",
                run.job,
                run.strategy,
                run.solver,
                run.total_pieces,
                run.bins_used,
                run.lower_bound,
                run.utilization * 100.0,
                run.time_us,
            );
        }

        println!("{:=<96}\n", "");
    }

    /// Computes summary statistics grouped by strategy.
    pub fn summary_by_strategy(&self) -> Vec<StrategySummary> {
        let mut by_strategy: BTreeMap<String, Vec<&RunResult>> = BTreeMap::new();
        for run in &self.runs {
            by_strategy
                .entry(run.strategy.clone())
                .or_default()
                .push(run);
        }

        by_strategy
            .into_iter()
            .map(|(strategy, runs)| {
                let n = runs.len() as f64;
                StrategySummary {
                    strategy,
                    run_count: runs.len(),
                    total_bins: runs.iter().map(|r| r.bins_used).sum(),
                    total_gap_bins: runs.iter().map(|r| r.gap_bins()).sum(),
                    avg_utilization: runs.iter().map(|r| r.utilization).sum::<f64>() / n,
                    avg_time_us: (runs.iter().map(|r| r.time_us).sum::<u64>() as f64 / n) as u64,
                }
            })
            .collect()
    }
}

/// Summary statistics for a strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategySummary {
    pub strategy: String,
    pub run_count: usize,
    pub total_bins: usize,
    pub total_gap_bins: usize,
    pub avg_utilization: f64,
    pub avg_time_us: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockcut_core::{Job, SolverKind};

    fn sample_run(strategy: Strategy, bins: Vec<Vec<i64>>, lower_bound: usize) -> RunResult {
        let job = Job::new(100, 0).with_target(45, 2).with_target(30, 2).with_target(25, 2);
        let kind = match strategy {
            Strategy::FirstFitDecreasing => SolverKind::Ffd,
            _ => SolverKind::BruteForce,
        };
        let result = StockCutResult::new(job, kind, 40, bins);
        RunResult::new(
            "trap".to_string(),
            "run_1".to_string(),
            strategy,
            &result,
            &SearchReport::skipped(),
            lower_bound,
        )
    }

    #[test]
    fn test_run_result() {
        let run = sample_run(
            Strategy::FirstFitDecreasing,
            vec![vec![45, 45], vec![30, 30, 25], vec![25]],
            2,
        );

        assert_eq!(run.solver, "FFD");
        assert_eq!(run.strategy, "ffd");
        assert_eq!(run.bins_used, 3);
        assert_eq!(run.gap_bins(), 1);
        assert_eq!(run.search_status, "Skipped");
        assert!((run.utilization - 200.0 / 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_summary_by_strategy() {
        let mut results = BenchmarkResult::new();
        results.add_run(sample_run(
            Strategy::FirstFitDecreasing,
            vec![vec![45, 45], vec![30, 30, 25], vec![25]],
            2,
        ));
        results.add_run(sample_run(
            Strategy::Auto,
            vec![vec![45, 30, 25], vec![45, 30, 25]],
            2,
        ));

        let summary = results.summary_by_strategy();
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].strategy, "auto");
        assert_eq!(summary[0].total_gap_bins, 0);
        assert_eq!(summary[1].strategy, "ffd");
        assert_eq!(summary[1].total_bins, 3);
    }
}
