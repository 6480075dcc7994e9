//! Restart controllers that drive repeated construct-then-prune rounds and
//! keep the best cover found, sequentially or batch-parallel via `rayon`.

use std::cmp::min;
use std::io::Write;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use crate::cust_error::ProcessingError;
use crate::hs_instance::HSInstance;

impl HSInstance {

    /// Runs construct-then-prune rounds until the round budget is spent or
    /// the best cover matches the lower bound. The budget defaults to the
    /// number of paths. Each improvement is reported on `progress`.
    ///
    /// Returns the best cover together with the number of rounds executed.
    pub fn approximate<R: Rng, W: Write>(&mut self, rng: &mut R, rounds: Option<usize>, progress: &mut W) -> Result<(Vec<usize>, usize), ProcessingError> {
        let budget = rounds.unwrap_or_else(|| self.relation.num_paths());
        let mut rounds_done = 0;
        while rounds_done < budget && (rounds_done == 0 ||
            self.current_best.as_ref().expect("a completed round sets a best").len() > self.lower_bound()) {
            let (cover, mut count_picked) = self.random_biased_cover(rng)?;
            let pruned = self.relation.prune(cover, &mut count_picked, rng)?;
            if self.update_current_best(&pruned) {
                writeln!(progress, "best solution after {} rounds: {} (lower bound is {})",
                         rounds_done + 1, pruned.len(), self.lower_bound())?;
            }
            rounds_done += 1;
        }
        Ok((self.current_best.clone().unwrap_or_default(), rounds_done))
    }

    /// Batch-parallel variant of [`HSInstance::approximate`]: each rayon
    /// batch runs one restart per thread, with restart `i` drawing from its
    /// own stream seeded `base_seed + i`. Improvements and the lower-bound
    /// exit are evaluated between batches in round order, so the result only
    /// depends on `base_seed`, never on scheduling.
    pub fn approximate_parallel<W: Write>(&mut self, base_seed: u64, rounds: Option<usize>, progress: &mut W) -> Result<(Vec<usize>, usize), ProcessingError> {
        let budget = rounds.unwrap_or_else(|| self.relation.num_paths());
        let batch = rayon::current_num_threads();
        let mut rounds_done = 0;
        while rounds_done < budget && (rounds_done == 0 ||
            self.current_best.as_ref().expect("a completed batch sets a best").len() > self.lower_bound()) {
            let batch_end = min(rounds_done + batch, budget);
            let this: &HSInstance = self;
            let covers = (rounds_done..batch_end).into_par_iter()
                .map(|round| {
                    let mut rng = StdRng::seed_from_u64(base_seed.wrapping_add(round as u64));
                    let (cover, mut count_picked) = this.random_biased_cover(&mut rng)?;
                    this.relation.prune(cover, &mut count_picked, &mut rng)
                })
                .collect::<Result<Vec<Vec<usize>>, ProcessingError>>()?;
            for (offset, pruned) in covers.iter().enumerate() {
                if self.update_current_best(pruned) {
                    writeln!(progress, "best solution after {} rounds: {} (lower bound is {})",
                             rounds_done + offset + 1, pruned.len(), self.lower_bound())?;
                }
            }
            rounds_done = batch_end;
        }
        Ok((self.current_best.clone().unwrap_or_default(), rounds_done))
    }

}
