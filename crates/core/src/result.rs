//! Solve result representation.

use crate::error::{Error, Result};
use crate::job::{Job, Length};
use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Engine that produced a cutting layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SolverKind {
    /// Exhaustive partition search.
    #[cfg_attr(feature = "serde", serde(rename = "bruteforce"))]
    BruteForce,
    /// First-Fit-Decreasing heuristic.
    #[cfg_attr(feature = "serde", serde(rename = "FFD"))]
    Ffd,
    /// Legacy tag kept for reading old stored results. Never produced.
    #[cfg_attr(feature = "serde", serde(rename = "gapfill"))]
    Gapfill,
}

impl SolverKind {
    /// Wire name of the tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BruteForce => "bruteforce",
            Self::Ffd => "FFD",
            Self::Gapfill => "gapfill",
        }
    }

    /// Returns true for tags the solver can emit.
    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Gapfill)
    }
}

impl std::fmt::Display for SolverKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SolverKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "bruteforce" => Ok(Self::BruteForce),
            "FFD" => Ok(Self::Ffd),
            "gapfill" => Ok(Self::Gapfill),
            other => Err(Error::Serialization(format!("unknown solver type: {}", other))),
        }
    }
}

/// Length a bin occupies on the bar: pieces plus one kerf between neighbours.
///
/// No kerf is charged after the last piece. Computed in `i128` so that
/// adversarial inputs cannot overflow.
pub fn bin_extent(bin: &[Length], cut_width: Length) -> i128 {
    if bin.is_empty() {
        return 0;
    }
    let pieces: i128 = bin.iter().map(|&l| l as i128).sum();
    pieces + cut_width as i128 * (bin.len() as i128 - 1)
}

/// Result of distributing a job onto stock bars.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StockCutResult {
    /// The job this layout was computed for.
    pub job: Job,

    /// Engine that produced the layout.
    #[cfg_attr(feature = "serde", serde(rename = "solver_type"))]
    pub solver_kind: SolverKind,

    /// Wall-clock solve time in microseconds.
    pub time_us: u64,

    /// One entry per stock bar, each listing the piece lengths cut from it.
    pub lengths: Vec<Vec<Length>>,
}

impl StockCutResult {
    /// Creates a new result.
    pub fn new(job: Job, solver_kind: SolverKind, time_us: u64, lengths: Vec<Vec<Length>>) -> Self {
        Self {
            job,
            solver_kind,
            time_us,
            lengths,
        }
    }

    /// Number of stock bars used.
    pub fn bins_used(&self) -> usize {
        self.lengths.len()
    }

    /// Number of pieces across all bars.
    pub fn pieces_placed(&self) -> usize {
        self.lengths.iter().map(Vec::len).sum()
    }

    /// Re-checks every layout invariant.
    ///
    /// A failure here means an engine produced a broken layout.
    pub fn validate(&self) -> Result<()> {
        if !self.solver_kind.is_supported() {
            return Err(Error::invalid_result(format!(
                "unsupported solver type {}",
                self.solver_kind
            )));
        }
        // time_us is unsigned, so the non-negativity invariant holds by construction.
        if self.lengths.is_empty() {
            return Err(Error::invalid_result("no stock bars in result"));
        }

        let max_length = self.job.max_length as i128;
        for (index, bin) in self.lengths.iter().enumerate() {
            if bin.is_empty() {
                return Err(Error::invalid_result(format!("stock bar {} is empty", index)));
            }
            if let Some(&piece) = bin.iter().find(|&&l| !self.job.has_length(l)) {
                return Err(Error::invalid_result(format!(
                    "stock bar {} holds unknown length {}",
                    index, piece
                )));
            }
            let extent = bin_extent(bin, self.job.cut_width);
            if extent > max_length {
                return Err(Error::invalid_result(format!(
                    "stock bar {} overflows: {} > {}",
                    index, extent, max_length
                )));
            }
        }

        let mut expected: BTreeMap<Length, u64> = BTreeMap::new();
        for target in &self.job.target_sizes {
            *expected.entry(target.length).or_insert(0) += target.quantity.max(0) as u64;
        }
        let mut actual: BTreeMap<Length, u64> = BTreeMap::new();
        for &piece in self.lengths.iter().flatten() {
            *actual.entry(piece).or_insert(0) += 1;
        }
        if expected != actual {
            return Err(Error::invalid_result(
                "pieces in result do not match the requested sizes",
            ));
        }

        Ok(())
    }

    /// Computes summary statistics.
    pub fn summary(&self) -> CutSummary {
        CutSummary::from(self)
    }
}

/// Material usage summary for a result.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CutSummary {
    /// Number of stock bars used.
    pub bins_used: usize,
    /// Total pieces placed.
    pub total_pieces: usize,
    /// Sum of all piece lengths.
    pub used_length: u64,
    /// Material lost to kerf.
    pub kerf_length: u64,
    /// Offcut left on the bars.
    pub waste_length: u64,
    /// `used_length / (bins_used * max_length)`, 0.0 - 1.0.
    pub utilization: f64,
    /// Solve time in microseconds.
    pub time_us: u64,
    /// Engine tag.
    pub solver: String,
}

fn clamp_u64(value: i128) -> u64 {
    u64::try_from(value.max(0)).unwrap_or(u64::MAX)
}

impl From<&StockCutResult> for CutSummary {
    fn from(result: &StockCutResult) -> Self {
        let cut_width = result.job.cut_width as i128;
        let used: i128 = result.lengths.iter().flatten().map(|&l| l as i128).sum();
        let kerf: i128 = result
            .lengths
            .iter()
            .filter(|bin| !bin.is_empty())
            .map(|bin| cut_width * (bin.len() as i128 - 1))
            .sum();
        let stock = result.job.max_length as i128 * result.lengths.len() as i128;

        Self {
            bins_used: result.bins_used(),
            total_pieces: result.pieces_placed(),
            used_length: clamp_u64(used),
            kerf_length: clamp_u64(kerf),
            waste_length: clamp_u64(stock - used - kerf),
            utilization: if stock > 0 {
                used as f64 / stock as f64
            } else {
                0.0
            },
            time_us: result.time_us,
            solver: result.solver_kind.to_string(),
        }
    }
}
