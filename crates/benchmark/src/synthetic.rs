//! Synthetic job generator.
//!
//! Produces seeded cutting jobs that exercise both engines: small jobs the
//! brute-force search solves exactly, known First-Fit-Decreasing traps, and
//! large jobs that only FFD handles.

use rand::prelude::*;
use serde::{Deserialize, Serialize};
use stockcut_core::{Job, Length};

/// A generated job with a name for reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedJob {
    pub name: String,
    pub job: Job,
}

impl NamedJob {
    pub fn new(name: impl Into<String>, job: Job) -> Self {
        Self {
            name: name.into(),
            job,
        }
    }
}

/// Generator for synthetic cutting jobs.
#[derive(Debug, Clone)]
pub struct SyntheticGenerator {
    rng: StdRng,
}

impl SyntheticGenerator {
    /// Creates a new generator with a random seed.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new generator with a specific seed for reproducibility.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniformly random piece lengths in `[max_length / 20, max_length / 2]`.
    ///
    /// Quantities are drawn until `pieces` pieces are requested.
    pub fn uniform(&mut self, pieces: i64, max_length: Length, cut_width: Length) -> Job {
        let low = (max_length / 20).max(1);
        let high = (max_length / 2).min(max_length - cut_width).max(low);
        self.fill(pieces, max_length, cut_width, low, high)
    }

    /// Job within the brute-force piece limit with mixed lengths.
    pub fn small_exact(&mut self, pieces: i64) -> Job {
        let max_length = self.rng.gen_range(500..=6000);
        let cut_width = self.rng.gen_range(0..=5);
        let low = (max_length / 10).max(1);
        let high = max_length * 7 / 10;
        self.fill(pieces, max_length, cut_width, low, high)
    }

    /// Pieces slightly longer than a third of the bar.
    ///
    /// Two fit a bar, three do not; FFD handles these well, bound pruning
    /// has to prove it.
    pub fn thirds(&mut self, pieces: i64, max_length: Length) -> Job {
        let third = max_length / 3;
        self.fill(pieces, max_length, 0, third + 1, third + third / 5)
    }

    /// Sizes for which First-Fit-Decreasing is known to waste a bar.
    ///
    /// Each triple `(45%, 30%, 25%)` fills one bar exactly, while FFD pairs
    /// the 45% pieces first.
    pub fn ffd_trap(&mut self, triples: i64) -> Job {
        let scale: Length = self.rng.gen_range(1..=50) * 20;
        Job::new(100 * scale, 0)
            .with_target(45 * scale, triples)
            .with_target(30 * scale, triples)
            .with_target(25 * scale, triples)
    }

    /// Many pieces with wide kerf, for FFD throughput.
    pub fn large_count(&mut self, pieces: i64) -> Job {
        let max_length = 12_000;
        self.fill(pieces, max_length, 4, 150, 4_000)
    }

    fn fill(
        &mut self,
        pieces: i64,
        max_length: Length,
        cut_width: Length,
        low: Length,
        high: Length,
    ) -> Job {
        let high = high.min(max_length - cut_width).max(low);
        let mut job = Job::new(max_length, cut_width);
        let mut remaining = pieces.max(1);
        while remaining > 0 {
            let quantity = self.rng.gen_range(1..=remaining.min(5));
            let length = self.rng.gen_range(low..=high);
            job = job.with_target(length, quantity);
            remaining -= quantity;
        }
        job
    }
}

impl Default for SyntheticGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Predefined synthetic jobs for benchmarking.
pub struct SyntheticJobs;

impl SyntheticJobs {
    /// Generates all standard synthetic jobs with default parameters.
    pub fn all(seed: u64) -> Vec<NamedJob> {
        let mut gen = SyntheticGenerator::with_seed(seed);
        vec![
            NamedJob::new("small_exact_8", gen.small_exact(8)),
            NamedJob::new("small_exact_12", gen.small_exact(12)),
            NamedJob::new("thirds_12", gen.thirds(12, 3000)),
            NamedJob::new("ffd_trap_2", gen.ffd_trap(2)),
            NamedJob::new("ffd_trap_4", gen.ffd_trap(4)),
            NamedJob::new("uniform_50", gen.uniform(50, 6000, 3)),
            NamedJob::new("uniform_500", gen.uniform(500, 6000, 3)),
            NamedJob::new("large_count_10000", gen.large_count(10_000)),
        ]
    }

    /// Returns the names of all synthetic jobs.
    pub fn names() -> &'static [&'static str] {
        &[
            "small_exact_8",
            "small_exact_12",
            "thirds_12",
            "ffd_trap_2",
            "ffd_trap_4",
            "uniform_50",
            "uniform_500",
            "large_count_10000",
        ]
    }
}
