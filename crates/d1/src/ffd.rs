//! First-Fit-Decreasing heuristic.
//!
//! Pieces are taken in the order given (callers pass them longest first) and
//! each goes into the first open bar, in opening order, that still holds it.
//! When no open bar fits, a new bar is opened. Every piece of a validated job
//! fits an empty bar, so this never fails.
//!
//! Runs in `O(n * b)` for `n` pieces and `b` bars, plus the caller's sort.

use crate::bin::Bin;
use stockcut_core::Length;

/// Distributes `pieces` with First-Fit-Decreasing.
pub fn first_fit_decreasing(
    pieces: &[Length],
    max_length: Length,
    cut_width: Length,
) -> Vec<Vec<Length>> {
    debug_assert!(
        pieces.windows(2).all(|w| w[0] >= w[1]),
        "pieces must be sorted longest first"
    );

    let mut bins: Vec<Bin> = Vec::new();
    for &piece in pieces {
        match bins
            .iter_mut()
            .find(|bin| bin.fits(piece, max_length, cut_width))
        {
            Some(bin) => bin.push(piece, cut_width),
            None => bins.push(Bin::open(piece)),
        }
    }

    bins.into_iter().map(Bin::into_pieces).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ffd_pairs_halves() {
        let bins = first_fit_decreasing(&[500, 500, 500, 500], 1000, 0);
        assert_eq!(bins, vec![vec![500, 500], vec![500, 500]]);
    }

    #[test]
    fn test_ffd_respects_kerf() {
        let bins = first_fit_decreasing(&[500, 500], 1000, 10);
        assert_eq!(bins, vec![vec![500], vec![500]]);
    }

    #[test]
    fn test_ffd_first_fit_not_best_fit() {
        // 5 fits bar 0 (60 used) and bar 1 (95 used); best fit would pick bar 1.
        let bins = first_fit_decreasing(&[60, 50, 45, 5], 100, 0);
        assert_eq!(bins, vec![vec![60, 5], vec![50, 45]]);
    }

    #[test]
    fn test_ffd_fills_earlier_bar_later() {
        let bins = first_fit_decreasing(&[60, 50, 40, 10], 100, 0);
        assert_eq!(bins, vec![vec![60, 40], vec![50, 10]]);
    }

    #[test]
    fn test_ffd_is_deterministic() {
        let pieces = [51; 50];
        let first = first_fit_decreasing(&pieces, 100, 0);
        let second = first_fit_decreasing(&pieces, 100, 0);
        assert_eq!(first.len(), 50);
        assert_eq!(first, second);
    }

    #[test]
    fn test_ffd_empty_input() {
        assert!(first_fit_decreasing(&[], 100, 0).is_empty());
    }
}
