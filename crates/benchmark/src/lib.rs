//! Benchmark suite and command-line tooling for stockcut.
//!
//! This crate provides:
//! - Seeded synthetic job generation
//! - Job file loading (list or legacy map `target_sizes`)
//! - A runner comparing engine strategies on the same jobs
//! - Result recording as JSON or CSV

mod jobfile;
mod result;
mod runner;
mod synthetic;

pub use jobfile::{load_job, parse_job};
pub use result::{BenchmarkMetadata, BenchmarkResult, RunResult, StrategySummary};
pub use runner::{BenchmarkConfig, BenchmarkRunner};
pub use synthetic::{NamedJob, SyntheticGenerator, SyntheticJobs};
