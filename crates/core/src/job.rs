//! Cutting job description and validation.
//!
//! A [`Job`] names the usable length of one stock bar, the kerf lost at every
//! cut, and the pieces that have to be cut from the stock. Jobs are validated
//! with [`Job::validate`] before any solver touches them; all solvers rely on
//! the guarantees it establishes:
//!
//! - `max_length > 0` and `cut_width >= 0`
//! - at least one target size
//! - every target length is positive and fits a bar next to one kerf
//!   (`length <= max_length - cut_width`)
//!
//! # Example
//!
//! ```rust
//! use stockcut_core::Job;
//!
//! let job = Job::new(1000, 10)
//!     .with_target(500, 2)
//!     .with_target(300, 1);
//!
//! assert!(job.validate().is_ok());
//! assert_eq!(job.total_pieces(), 3);
//! assert_eq!(job.expand(), vec![500, 500, 300]);
//! ```

use crate::error::{Error, Result};
use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Integer length unit used for stock, kerf and pieces.
pub type Length = i64;

/// A required piece length and how many of it are needed.
///
/// Equality and ordering only consider `length`.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TargetSize {
    /// Desired piece length.
    pub length: Length,
    /// Number of pieces of that length.
    pub quantity: i64,
}

impl TargetSize {
    /// Creates a new target size.
    pub fn new(length: Length, quantity: i64) -> Self {
        Self { length, quantity }
    }
}

impl PartialEq for TargetSize {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length
    }
}

impl Eq for TargetSize {}

impl PartialOrd for TargetSize {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TargetSize {
    fn cmp(&self, other: &Self) -> Ordering {
        self.length.cmp(&other.length)
    }
}

/// A one-dimensional cutting stock job.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Job {
    /// Usable length of one stock bar.
    pub max_length: Length,
    /// Material consumed by every cut between two adjacent pieces.
    pub cut_width: Length,
    /// Required pieces. Duplicate lengths are allowed.
    pub target_sizes: Vec<TargetSize>,
}

impl Job {
    /// Creates a job without target sizes.
    pub fn new(max_length: Length, cut_width: Length) -> Self {
        Self {
            max_length,
            cut_width,
            target_sizes: Vec::new(),
        }
    }

    /// Adds a target size.
    pub fn with_target(mut self, length: Length, quantity: i64) -> Self {
        self.target_sizes.push(TargetSize::new(length, quantity));
        self
    }

    /// Replaces all target sizes.
    pub fn with_targets(mut self, targets: impl IntoIterator<Item = TargetSize>) -> Self {
        self.target_sizes = targets.into_iter().collect();
        self
    }

    /// Checks the job against the data model.
    ///
    /// Checks run in a fixed order and the first failure is reported.
    pub fn validate(&self) -> Result<()> {
        if self.max_length <= 0 {
            return Err(Error::invalid_job("invalid max_length"));
        }
        if self.cut_width < 0 {
            return Err(Error::invalid_job("invalid cut_width"));
        }
        if self.target_sizes.is_empty() {
            return Err(Error::invalid_job("no target sizes given"));
        }

        let longest_piece = self.max_length - self.cut_width;
        let mut total: u64 = 0;
        for target in &self.target_sizes {
            if target.length <= 0 {
                return Err(Error::invalid_job("invalid target length"));
            }
            if target.quantity <= 0 {
                return Err(Error::invalid_job("invalid target quantity"));
            }
            if target.length > longest_piece {
                return Err(Error::invalid_job("target size longer than stock"));
            }
            total = total
                .checked_add(target.quantity as u64)
                .ok_or_else(|| Error::invalid_job("too many pieces"))?;
        }

        Ok(())
    }

    /// Returns true if [`validate`](Self::validate) succeeds.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Total number of pieces to cut.
    ///
    /// Non-positive quantities count as zero; the sum saturates.
    pub fn total_pieces(&self) -> u64 {
        self.target_sizes
            .iter()
            .map(|t| t.quantity.max(0) as u64)
            .fold(0u64, u64::saturating_add)
    }

    /// Yields every piece length `quantity` times, longest first.
    ///
    /// Equal lengths keep the order in which they appear in `target_sizes`.
    pub fn iterate_sizes(&self) -> impl Iterator<Item = Length> + '_ {
        let mut order: Vec<&TargetSize> = self.target_sizes.iter().collect();
        order.sort_by(|a, b| b.length.cmp(&a.length));
        order
            .into_iter()
            .flat_map(|t| std::iter::repeat(t.length).take(t.quantity.max(0) as usize))
    }

    /// Collects [`iterate_sizes`](Self::iterate_sizes) into a vector.
    pub fn expand(&self) -> Vec<Length> {
        let mut pieces = Vec::with_capacity(self.total_pieces().min(1 << 16) as usize);
        pieces.extend(self.iterate_sizes());
        pieces
    }

    /// Returns a copy with duplicate lengths merged, longest first.
    pub fn normalized(&self) -> Result<Job> {
        let mut merged: Vec<TargetSize> = Vec::with_capacity(self.target_sizes.len());
        let mut sorted = self.target_sizes.clone();
        sorted.sort_by(|a, b| b.length.cmp(&a.length));

        for target in sorted {
            match merged.last_mut() {
                Some(last) if last.length == target.length => {
                    last.quantity = last
                        .quantity
                        .checked_add(target.quantity)
                        .ok_or_else(|| Error::invalid_job("too many pieces"))?;
                }
                _ => merged.push(target),
            }
        }

        Ok(Job {
            max_length: self.max_length,
            cut_width: self.cut_width,
            target_sizes: merged,
        })
    }

    /// Returns true if `length` is one of the requested piece lengths.
    pub fn has_length(&self, length: Length) -> bool {
        self.target_sizes.iter().any(|t| t.length == length)
    }

    fn size_pairs(&self) -> Vec<(Length, i64)> {
        let mut pairs: Vec<(Length, i64)> = self
            .target_sizes
            .iter()
            .map(|t| (t.length, t.quantity))
            .collect();
        pairs.sort_unstable();
        pairs
    }
}

impl PartialEq for Job {
    fn eq(&self, other: &Self) -> bool {
        self.max_length == other.max_length
            && self.cut_width == other.cut_width
            && self.size_pairs() == other.size_pairs()
    }
}

impl Eq for Job {}
