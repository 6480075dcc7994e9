//! Binary for the deterministic max-coverage greedy solver.

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
use run_and_cover::hs_instance::HSInstance;

/// Covers every path with the deterministic max-coverage greedy, followed by
/// a randomized pruning pass.
#[derive(Parser)]
struct Args {
    /// File holding one line per set with the path indices it covers.
    sets: PathBuf,
    /// Seed for the pruning order. Drawn at random if omitted.
    seed: Option<u64>,
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(args) {
        println!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn error::Error>> {
    let relation = CoverRelation::read_sets_inferred(BufReader::new(File::open(&args.sets)?))?;
    relation.check_coverage()?;
    let seed = args.seed.unwrap_or_else(|| thread_rng().gen());
    let stdout = std::io::stdout();
    let mut stdout = stdout.lock();
    writeln!(stdout, "using seed {}", seed)?;
    let (cover, mut count_picked) = relation.greedy_cover()?;
    let mut rng = StdRng::seed_from_u64(seed);
    let pruned = relation.prune(cover, &mut count_picked, &mut rng)?;
    if !relation.validate_cover(&pruned) {
        return Err(Box::new(ProcessingError::InvalidSolution(
            "the pruned cover misses at least one path".to_owned())))
    }
    writeln!(stdout, "solution: {}", pruned.len())?;
    HSInstance::write_cover(&pruned, &mut stdout)?;
    Ok(())
}
