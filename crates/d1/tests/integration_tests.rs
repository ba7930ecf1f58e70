//! Integration tests for stockcut-d1.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;
use stockcut_d1::{
    bin_extent, distribute, distribute_with_config, first_fit_decreasing, Config, Cutter1D,
    Error, Job, Length, SearchStatus, Solver, SolverKind, StockCutResult, Strategy,
    BRUTE_PIECE_LIMIT,
};

fn piece_counts(pieces: impl IntoIterator<Item = Length>) -> BTreeMap<Length, usize> {
    let mut counts = BTreeMap::new();
    for piece in pieces {
        *counts.entry(piece).or_insert(0) += 1;
    }
    counts
}

fn assert_capacity(result: &StockCutResult) {
    for bin in &result.lengths {
        assert!(!bin.is_empty(), "result contains an empty bar");
        assert!(
            bin_extent(bin, result.job.cut_width) <= result.job.max_length as i128,
            "bar {:?} exceeds {} with kerf {}",
            bin,
            result.job.max_length,
            result.job.cut_width
        );
    }
}

/// Random valid job with up to `max_pieces` pieces.
fn random_job(rng: &mut StdRng, max_pieces: i64) -> Job {
    let max_length: Length = rng.gen_range(50..=2000);
    let cut_width: Length = rng.gen_range(0..=max_length / 20);
    let longest = max_length - cut_width;

    let mut job = Job::new(max_length, cut_width);
    let mut remaining = rng.gen_range(1..=max_pieces);
    while remaining > 0 {
        let quantity = rng.gen_range(1..=remaining.min(4));
        let length = rng.gen_range(1..=longest);
        job = job.with_target(length, quantity);
        remaining -= quantity;
    }
    job
}

mod scenario_tests {
    use super::*;

    #[test]
    fn test_halves_without_kerf() {
        let job = Job::new(1000, 0).with_target(500, 4);
        let result = distribute(&job).unwrap();

        assert_eq!(result.lengths, vec![vec![500, 500], vec![500, 500]]);
        assert_eq!(result.solver_kind, SolverKind::BruteForce);
    }

    #[test]
    fn test_kerf_splits_halves() {
        let job = Job::new(1000, 10).with_target(500, 2);
        let result = distribute(&job).unwrap();

        assert_eq!(result.lengths, vec![vec![500], vec![500]]);
    }

    #[test]
    fn test_small_job_two_bars() {
        let job = Job::new(100, 0)
            .with_target(60, 1)
            .with_target(40, 1)
            .with_target(30, 1)
            .with_target(20, 1);
        let result = distribute(&job).unwrap();

        assert_eq!(result.solver_kind, SolverKind::BruteForce);
        assert_eq!(result.bins_used(), 2);
        assert_eq!(first_fit_decreasing(&job.expand(), 100, 0).len(), 2);
    }

    #[test]
    fn test_over_limit_uses_ffd() {
        let job = Job::new(100, 0).with_target(51, 50);
        let result = distribute(&job).unwrap();

        assert_eq!(result.solver_kind, SolverKind::Ffd);
        assert_eq!(result.bins_used(), 50);
        assert!(result.lengths.iter().all(|bin| bin == &vec![51]));
    }

    #[test]
    fn test_piece_longer_than_stock() {
        let job = Job::new(10, 0).with_target(11, 1);
        let err = distribute(&job).unwrap_err();

        assert!(matches!(err, Error::InvalidJob(_)));
        assert_eq!(err.to_string(), "target size longer than stock");
    }

    #[test]
    fn test_zero_stock_length() {
        let job = Job::new(0, 0).with_target(1, 1);
        let err = distribute(&job).unwrap_err();

        assert_eq!(err.to_string(), "invalid max_length");
        assert_eq!(err.status_code(), 406);
    }

    #[test]
    fn test_exact_limit_still_brute_force() {
        let job = Job::new(100, 0).with_target(25, BRUTE_PIECE_LIMIT as i64);
        let result = distribute(&job).unwrap();

        assert_eq!(result.solver_kind, SolverKind::BruteForce);
        assert_eq!(result.bins_used(), 3);
    }

    #[test]
    fn test_one_over_limit_uses_ffd() {
        let job = Job::new(100, 0).with_target(25, BRUTE_PIECE_LIMIT as i64 + 1);
        let result = distribute(&job).unwrap();

        assert_eq!(result.solver_kind, SolverKind::Ffd);
        assert_eq!(result.bins_used(), 4);
    }

    #[test]
    fn test_piece_plus_kerf_fills_bar() {
        let job = Job::new(100, 10).with_target(90, 1);
        let result = distribute(&job).unwrap();
        assert_eq!(result.lengths, vec![vec![90]]);
    }
}

mod validation_tests {
    use super::*;

    #[test]
    fn test_validation_order() {
        let job = Job::new(0, -1);
        assert_eq!(distribute(&job).unwrap_err().to_string(), "invalid max_length");

        let job = Job::new(10, -1);
        assert_eq!(distribute(&job).unwrap_err().to_string(), "invalid cut_width");

        let job = Job::new(10, 0);
        assert_eq!(
            distribute(&job).unwrap_err().to_string(),
            "no target sizes given"
        );
    }

    #[test]
    fn test_non_positive_targets() {
        let job = Job::new(10, 0).with_target(0, 1);
        assert_eq!(
            distribute(&job).unwrap_err().to_string(),
            "invalid target length"
        );

        let job = Job::new(10, 0).with_target(5, 0);
        assert_eq!(
            distribute(&job).unwrap_err().to_string(),
            "invalid target quantity"
        );
    }

    #[test]
    fn test_kerf_shrinks_longest_piece() {
        let job = Job::new(100, 10).with_target(91, 1);
        assert_eq!(
            distribute(&job).unwrap_err().to_string(),
            "target size longer than stock"
        );
    }

    #[test]
    fn test_validation_errors_are_user_errors() {
        let err = distribute(&Job::new(-5, 0).with_target(1, 1)).unwrap_err();
        assert!(err.is_user_error());
    }
}

mod property_tests {
    use super::*;

    #[test]
    fn test_conservation_and_capacity() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let job = random_job(&mut rng, 30);
            let result = distribute(&job).unwrap();

            assert_eq!(
                piece_counts(result.lengths.iter().flatten().copied()),
                piece_counts(job.expand()),
                "pieces lost or invented for {:?}",
                job
            );
            assert_capacity(&result);
            assert!(result.validate().is_ok());
        }
    }

    #[test]
    fn test_ffd_is_deterministic() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let job = random_job(&mut rng, 60);
            if job.total_pieces() <= BRUTE_PIECE_LIMIT as u64 {
                continue;
            }
            let first = distribute(&job).unwrap();
            let second = distribute(&job.clone()).unwrap();

            assert_eq!(first.solver_kind, SolverKind::Ffd);
            assert_eq!(first.lengths, second.lengths);
        }
    }

    #[test]
    fn test_brute_force_never_worse_than_ffd() {
        let mut rng = StdRng::seed_from_u64(1234);
        for _ in 0..100 {
            let job = random_job(&mut rng, BRUTE_PIECE_LIMIT as i64);
            let ffd = first_fit_decreasing(&job.expand(), job.max_length, job.cut_width);
            let result = distribute(&job).unwrap();

            assert_eq!(result.solver_kind, SolverKind::BruteForce);
            assert!(
                result.bins_used() <= ffd.len(),
                "brute force used {} bars, FFD {} for {:?}",
                result.bins_used(),
                ffd.len(),
                job
            );
        }
    }

    #[test]
    fn test_solver_tag_matches_engine() {
        let mut rng = StdRng::seed_from_u64(99);
        let cutter = Cutter1D::default_config();
        for _ in 0..100 {
            let job = random_job(&mut rng, 24);
            let (result, report) = cutter.solve_with_report(&job).unwrap();

            match result.solver_kind {
                SolverKind::BruteForce => {
                    assert!(report.status.has_layout());
                    assert_eq!(report.best_bins, Some(result.bins_used()));
                }
                SolverKind::Ffd => assert!(!report.status.has_layout()),
                SolverKind::Gapfill => panic!("gapfill is never produced"),
            }
        }
    }

    #[test]
    fn test_bar_count_respects_lower_bound() {
        let mut rng = StdRng::seed_from_u64(2024);
        for _ in 0..100 {
            let job = random_job(&mut rng, 40);
            let load: i128 = job
                .expand()
                .iter()
                .map(|&l| l as i128 + job.cut_width as i128)
                .sum();
            let capacity = job.max_length as i128 + job.cut_width as i128;
            let bound = ((load + capacity - 1) / capacity) as usize;

            assert!(distribute(&job).unwrap().bins_used() >= bound);
        }
    }
}

mod config_tests {
    use super::*;

    #[test]
    fn test_ffd_strategy() {
        let job = Job::new(100, 0)
            .with_target(45, 2)
            .with_target(30, 2)
            .with_target(25, 2);
        let config = Config::new().with_strategy(Strategy::FirstFitDecreasing);
        let result = distribute_with_config(&job, config).unwrap();

        assert_eq!(result.solver_kind, SolverKind::Ffd);
        assert_eq!(result.bins_used(), 3);

        let exact = distribute(&job).unwrap();
        assert_eq!(exact.solver_kind, SolverKind::BruteForce);
        assert_eq!(exact.bins_used(), 2);
    }

    #[test]
    fn test_lower_piece_limit() {
        let job = Job::new(100, 0).with_target(30, 4);
        let config = Config::new().with_brute_piece_limit(3);
        let result = distribute_with_config(&job, config).unwrap();
        assert_eq!(result.solver_kind, SolverKind::Ffd);
    }

    #[test]
    fn test_zero_budget_reports_timeout() {
        let job = Job::new(100, 0).with_target(30, 4);
        let cutter = Cutter1D::new(Config::new().with_time_budget_us(0));
        let (result, report) = cutter.solve_with_report(&job).unwrap();

        assert_eq!(result.solver_kind, SolverKind::Ffd);
        assert_eq!(report.status, SearchStatus::Timeout);
    }

    #[test]
    fn test_solver_trait_object() {
        let solver: Box<dyn Solver> = Box::new(Cutter1D::default_config());
        let job = Job::new(1000, 0).with_target(500, 4);
        let result = solver.solve(&job).unwrap();
        assert_eq!(result.bins_used(), 2);
    }
}

mod result_tests {
    use super::*;

    #[test]
    fn test_summary_accounts_kerf() {
        // 40 + 5 + 40 + 5 + 10 = 100 fills one bar exactly.
        let job = Job::new(100, 5).with_target(40, 2).with_target(10, 1);
        let result = distribute(&job).unwrap();
        let summary = result.summary();

        assert_eq!(summary.bins_used, 1);
        assert_eq!(summary.total_pieces, 3);
        assert_eq!(summary.used_length, 90);
        assert_eq!(summary.kerf_length, 10);
        assert_eq!(summary.waste_length, 0);
        assert_eq!(summary.solver, "bruteforce");
    }

    #[test]
    fn test_legacy_job_solves_like_current() {
        let legacy = stockcut_d1::LegacyJob {
            max_length: 1000,
            cut_width: 0,
            target_sizes: [(500, 4)].into_iter().collect(),
        };
        let result = distribute(&Job::from(legacy)).unwrap();
        assert_eq!(result.lengths, vec![vec![500, 500], vec![500, 500]]);
    }
}
