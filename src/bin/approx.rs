//! Binary for the LP-guided randomized restart solver.

use std::error;
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use rand::{thread_rng, Rng, SeedableRng};
use rand::rngs::StdRng;

use run_and_cover::cust_error::ProcessingError;
use run_and_cover::relation::CoverRelation;
use run_and_cover::lp_report::LpReport;
use run_and_cover::hs_instance::HSInstance;

/// Approximates a minimum hitting set for a path coverage relation, biased
/// by the solution report of an external LP relaxation.
#[derive(Parser)]
struct Args {
    /// File holding one line per set with the path indices it covers.
    sets: PathBuf,
    /// Solution report of the LP relaxation.
    solution: PathBuf,
    /// Seed for the random number generator. Drawn at random if omitted.
    seed: Option<u64>,
    /// Number of construct-then-prune rounds. Defaults to the path count.
    #[arg(short, long)]
    rounds: Option<usize>,
    /// Number of worker threads. Values above one run restarts in parallel.
    #[arg(short, long)]
    threads: Option<usize>,
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(args) {
        println!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn error::Error>> {
    let report = LpReport::read_sol(BufReader::new(File::open(&args.solution)?))?;
    let relation = CoverRelation::read_sets(BufReader::new(File::open(&args.sets)?), report.num_paths)?;
    let mut instance = HSInstance::new(relation, report)?;
    let seed = args.seed.unwrap_or_else(|| thread_rng().gen());
    let stdout = std::io::stdout();
    let mut stdout = stdout.lock();
    writeln!(stdout, "using seed {}", seed)?;
    let (best, rounds_done) = match args.threads {
        Some(threads) if threads > 1 => {
            rayon::ThreadPoolBuilder::new().num_threads(threads).build_global()?;
            instance.approximate_parallel(seed, args.rounds, &mut stdout)?
        },
        _ => {
            let mut rng = StdRng::seed_from_u64(seed);
            instance.approximate(&mut rng, args.rounds, &mut stdout)?
        },
    };
    if !instance.relation.validate_cover(&best) {
        return Err(Box::new(ProcessingError::InvalidSolution(
            "the best cover misses at least one path".to_owned())))
    }
    writeln!(stdout, "Best solution after {} rounds: {}", rounds_done, best.len())?;
    writeln!(stdout, "Lower bound: {}", instance.lower_bound())?;
    HSInstance::write_cover(&best, &mut stdout)?;
    Ok(())
}
