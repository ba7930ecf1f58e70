//! stockcut CLI

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use stockcut_benchmark::{load_job, BenchmarkConfig, BenchmarkRunner, NamedJob, SyntheticJobs};
use stockcut_core::{Config, Strategy, BRUTE_PIECE_LIMIT, BRUTE_TIME_BUDGET_US};
use stockcut_d1::Cutter1D;

#[derive(Parser)]
#[command(name = "stockcut")]
#[command(about = "One-dimensional stock cutting solver")]
#[command(version)]
struct Cli {
    /// Log engine decisions at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a job file and print the result JSON
    Solve {
        /// Path to the JSON job file
        file: PathBuf,

        /// Engine strategy
        #[arg(short, long, value_enum, default_value = "auto")]
        strategy: StrategyArg,

        /// Largest piece count for brute force
        #[arg(long, default_value_t = BRUTE_PIECE_LIMIT)]
        piece_limit: usize,

        /// Brute-force budget in milliseconds
        #[arg(long, default_value_t = BRUTE_TIME_BUDGET_US / 1_000)]
        time_budget_ms: u64,

        /// Print search statistics to stderr
        #[arg(long)]
        stats: bool,

        /// Write the result JSON to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write the synthetic benchmark jobs as JSON files
    Generate {
        /// Output directory
        #[arg(short, long, default_value = "jobs/synthetic")]
        output: PathBuf,

        /// Random seed for reproducibility
        #[arg(short, long, default_value = "42")]
        seed: u64,
    },

    /// Compare strategies on job files or the synthetic set
    Compare {
        /// Job files; the synthetic set is used when none are given
        files: Vec<PathBuf>,

        /// Strategies to compare
        #[arg(short, long, value_enum, default_values_t = vec![StrategyArg::Auto, StrategyArg::Ffd])]
        strategies: Vec<StrategyArg>,

        /// Random seed for the synthetic set
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Brute-force budget per run in milliseconds
        #[arg(short, long, default_value_t = BRUTE_TIME_BUDGET_US / 1_000)]
        time_budget_ms: u64,

        /// Number of runs per configuration
        #[arg(short, long, default_value = "1")]
        runs: usize,

        /// Output file for results (JSON)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output file for CSV results
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// List the synthetic benchmark jobs
    List,
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    /// Brute force within the piece limit, FFD otherwise
    Auto,
    /// Brute force, reporting every fallback
    Bruteforce,
    /// First-Fit-Decreasing only
    Ffd,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Auto => Strategy::Auto,
            StrategyArg::Bruteforce => Strategy::BruteForce,
            StrategyArg::Ffd => Strategy::FirstFitDecreasing,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match cli.command {
        Commands::Solve {
            file,
            strategy,
            piece_limit,
            time_budget_ms,
            stats,
            output,
        } => {
            let job = load_job(&file).with_context(|| format!("loading {}", file.display()))?;

            let config = Config::new()
                .with_strategy(strategy.into())
                .with_brute_piece_limit(piece_limit)
                .with_time_budget_us(time_budget_ms.saturating_mul(1_000));
            let (result, report) = Cutter1D::new(config)
                .solve_with_report(&job)
                .with_context(|| format!("solving {}", file.display()))?;

            if stats {
                eprintln!("Search: {} (lower bound {})", report.status, report.lower_bound);
                eprint!("{}", report.stats);
            }

            let json = serde_json::to_string_pretty(&result)?;
            match output {
                Some(path) => {
                    std::fs::write(&path, json)?;
                    println!("Result saved to: {}", path.display());
                }
                None => println!("{}", json),
            }
        }

        Commands::Generate { output, seed } => {
            std::fs::create_dir_all(&output)?;
            for named in SyntheticJobs::all(seed) {
                let path = output.join(format!("{}.json", named.name));
                std::fs::write(&path, serde_json::to_string_pretty(&named.job)?)?;
                println!("  Wrote {}", path.display());
            }
        }

        Commands::Compare {
            files,
            strategies,
            seed,
            time_budget_ms,
            runs,
            output,
            csv,
        } => {
            let jobs: Vec<NamedJob> = if files.is_empty() {
                SyntheticJobs::all(seed)
            } else {
                files
                    .iter()
                    .map(|path| {
                        let name = path
                            .file_stem()
                            .map(|s| s.to_string_lossy().into_owned())
                            .unwrap_or_else(|| path.display().to_string());
                        load_job(path)
                            .map(|job| NamedJob::new(name, job))
                            .with_context(|| format!("loading {}", path.display()))
                    })
                    .collect::<anyhow::Result<_>>()?
            };

            let config = BenchmarkConfig::new()
                .with_strategies(strategies.into_iter().map(Into::into).collect())
                .with_time_budget_us(time_budget_ms.saturating_mul(1_000))
                .with_runs_per_config(runs);

            let mut results = BenchmarkRunner::new(config).run_all(&jobs);
            if files.is_empty() {
                results = results.with_seed(seed);
            }

            results.print_summary();

            println!("Strategy Comparison:");
            println!("{:-<60}", "");
            for summary in results.summary_by_strategy() {
                println!(
                    "  {:<12} runs={:<3} bars={:<6} over_bound={:<4} avg_util={:.1}% avg_time={}us",
                    summary.strategy,
                    summary.run_count,
                    summary.total_bins,
                    summary.total_gap_bins,
                    summary.avg_utilization * 100.0,
                    summary.avg_time_us
                );
            }

            if let Some(path) = output {
                results.save_json(&path)?;
                println!("\nResults saved to: {}", path.display());
            }

            if let Some(path) = csv {
                results.save_csv(&path)?;
                println!("CSV saved to: {}", path.display());
            }
        }

        Commands::List => {
            println!("Synthetic Jobs:");
            println!("===============");
            for name in SyntheticJobs::names() {
                println!("  - {}", name);
            }
            println!("\nUse 'stockcut compare' to run them");
        }
    }

    Ok(())
}
