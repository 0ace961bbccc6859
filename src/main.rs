use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use env_logger::Env;
use log::{debug, info};

mod board;
mod errors;
mod search;

use board::is_valid_solution;
use search::{
    strategy_for, CollectingObserver, CompositeObserver, NoopObserver, PrintObserver,
    SearchConfig, SearchResult, SolutionObserver, Strategy,
};

// --- Command Line Arguments ---

#[derive(Parser)]
#[command(name = "queens")]
#[command(about = "queens - count every solution of the N-Queens problem")]
#[command(version)]
#[command(arg_required_else_help = true)]
struct Args {
    /// Number of queens, which is also the board side length (at least 4)
    queens: usize,
    /// Number of worker threads (defaults to the number of CPUs)
    threads: Option<usize>,
    /// Search strategy to run
    #[arg(long, value_enum, default_value = "work-sharing")]
    strategy: CliStrategy,
    /// Print every solution as it is found
    #[arg(long)]
    print_solutions: bool,
    /// Re-check every reported solution against the placement rules
    #[arg(long)]
    verify: bool,
    /// Run each strategy this many times and require identical counts
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    repeat: u32,
    /// Enable verbose output
    #[arg(long, short)]
    verbose: bool,
}

/// CLI strategy selection
#[derive(Clone, Copy, Debug, ValueEnum)]
enum CliStrategy {
    /// Single-threaded recursive search
    Sequential,
    /// One OS thread per residue class of the first-column rows
    Partitioned,
    /// First-column rows as tasks on a managed thread pool
    WorkSharing,
    /// Run all three strategies and compare their counts
    All,
}

impl CliStrategy {
    fn strategies(self) -> Vec<Strategy> {
        match self {
            CliStrategy::Sequential => vec![Strategy::Sequential],
            CliStrategy::Partitioned => vec![Strategy::Partitioned],
            CliStrategy::WorkSharing => vec![Strategy::WorkSharing],
            CliStrategy::All => Strategy::ALL.to_vec(),
        }
    }
}

// --- Search Driver ---

/// Run `strategy` once, wiring up the requested diagnostics.
fn run_once(strategy: Strategy, config: &SearchConfig, args: &Args) -> Result<SearchResult> {
    let collector = CollectingObserver::new();
    let mut observers = CompositeObserver::new();
    if args.print_solutions {
        observers.add(&PrintObserver);
    }
    if args.verify {
        observers.add(&collector);
    }

    let observer: &dyn SolutionObserver = if observers.is_empty() {
        &NoopObserver
    } else {
        &observers
    };
    let search = strategy_for(strategy);
    let result = search.search(config, observer)?;
    drop(observers);
    debug!(
        "{} search finished in {:.2?}",
        search.strategy(),
        result.statistics.elapsed_time
    );

    if args.verify {
        verify_solutions(&result, collector.into_solutions())?;
        info!("Verified {} solutions", result.solutions);
    }

    Ok(result)
}

fn verify_solutions(result: &SearchResult, solutions: Vec<(u64, Vec<u8>)>) -> Result<()> {
    if solutions.len() as u64 != result.solutions {
        bail!(
            "{} search counted {} solutions but reported {}",
            result.strategy,
            result.solutions,
            solutions.len()
        );
    }
    for (expected, (index, rows)) in (1..).zip(&solutions) {
        if *index != expected {
            bail!("Solution index {} is duplicated or missing", expected);
        }
        if rows.len() != result.board_size || !is_valid_solution(rows) {
            bail!("Solution {} is not a valid placement: {:?}", index, rows);
        }
    }
    Ok(())
}

/// Run `strategy` `args.repeat` times and return its solution count.
fn run_strategy(strategy: Strategy, config: &SearchConfig, args: &Args) -> Result<u64> {
    let mut count = None;

    for run in 1..=args.repeat {
        let result = run_once(strategy, config, args)?;
        println!("{}", result);
        println!("---------------------------");
        debug!("{} search statistics:\n{}", strategy, result.statistics.format_summary());

        match count {
            None => count = Some(result.solutions),
            Some(previous) if previous != result.solutions => bail!(
                "{} search is not deterministic: run {} found {} solutions, earlier runs found {}",
                strategy,
                run,
                result.solutions,
                previous
            ),
            Some(_) => {}
        }
    }

    Ok(count.unwrap_or(0))
}

// --- Main Function ---
fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    let config = SearchConfig::new(args.queens, args.threads.unwrap_or_else(num_cpus::get));
    // Configuration errors are fatal before any search starts
    config.validate()?;

    let mut counts: Vec<(Strategy, u64)> = Vec::new();
    for strategy in args.strategy.strategies() {
        let count = run_strategy(strategy, &config, &args)?;
        counts.push((strategy, count));
    }

    if let Some(&(first_strategy, first_count)) = counts.first() {
        for &(strategy, count) in &counts[1..] {
            if count != first_count {
                bail!(
                    "{} found {} solutions but {} found {}",
                    strategy,
                    count,
                    first_strategy,
                    first_count
                );
            }
        }
    }

    Ok(())
}
