//! Implementation of the cover construction heuristics: the LP-biased
//! randomized constructor, the randomized pruner and the deterministic
//! max-coverage greedy.

use rand::Rng;
use rand::seq::SliceRandom;
use crate::cust_error::ProcessingError;
use crate::relation::CoverRelation;
use crate::hs_instance::HSInstance;

impl HSInstance {

    /// Builds a cover by visiting the paths in random order and, for each
    /// still uncovered path, drawing covering sets uniformly until one passes
    /// acceptance sampling against its LP activity.
    ///
    /// The sampling loop terminates because `HSInstance::new` rejects paths
    /// whose covering sets all have activity zero.
    ///
    /// Returns the cover together with the per-path counters of picked
    /// covering sets, which the pruner consumes.
    pub fn random_biased_cover<R: Rng>(&self, rng: &mut R) -> Result<(Vec<usize>, Vec<usize>), ProcessingError> {
        let num_paths = self.relation.num_paths();
        let mut order: Vec<usize> = (0..num_paths).collect();
        order.shuffle(rng);
        let mut cover = Vec::new();
        let mut count_picked = vec![0usize; num_paths];
        let mut num_uncovered = num_paths;
        for path in order {
            if count_picked[path] > 0 {
                continue;
            }
            let covering = self.relation.covering(path);
            let picked = loop {
                let candidate = covering[rng.gen_range(0..covering.len())];
                if rng.gen::<f64>() < self.activities[candidate] {
                    break candidate;
                }
            };
            cover.push(picked);
            for covered in self.relation.set(picked) {
                if count_picked[*covered] == 0 {
                    num_uncovered -= 1;
                }
                count_picked[*covered] += 1;
            }
            if num_uncovered == 0 {
                break;
            }
        }
        if num_uncovered != 0 {
            return Err(ProcessingError::InvalidSolution(
                format!("constructed cover leaves {} paths uncovered", num_uncovered)))
        }
        Ok((cover, count_picked))
    }

}

impl CoverRelation {

    /// Thins `cover` by visiting its sets in random order and dropping every
    /// set whose paths all stay covered without it. `count_picked` must hold,
    /// for each path, the number of sets of `cover` covering it, and is kept
    /// up to date while pruning.
    pub fn prune<R: Rng>(&self, mut cover: Vec<usize>, count_picked: &mut [usize], rng: &mut R) -> Result<Vec<usize>, ProcessingError> {
        cover.shuffle(rng);
        let mut pruned = Vec::with_capacity(cover.len());
        for set_index in cover {
            let mut removable = true;
            for path in self.set(set_index) {
                if count_picked[*path] == 0 {
                    return Err(ProcessingError::InvalidSolution(
                        format!("path {} lost its coverage while pruning", path)))
                }
                if count_picked[*path] == 1 {
                    removable = false;
                    break;
                }
            }
            if removable {
                for path in self.set(set_index) {
                    count_picked[*path] -= 1;
                }
            } else {
                pruned.push(set_index);
            }
        }
        Ok(pruned)
    }

    /// Builds a cover by repeatedly picking the set that covers the most
    /// still uncovered paths, with ties broken towards the lowest set index.
    ///
    /// Returns the cover together with the per-path counters of picked
    /// covering sets.
    pub fn greedy_cover(&self) -> Result<(Vec<usize>, Vec<usize>), ProcessingError> {
        let mut gain: Vec<usize> = (0..self.num_sets())
            .map(|set_index| self.set(set_index).len())
            .collect();
        let mut cover = Vec::new();
        let mut count_picked = vec![0usize; self.num_paths()];
        let mut num_uncovered = self.num_paths();
        while num_uncovered > 0 {
            let mut best_set = 0;
            let mut best_gain = 0;
            for (set_index, g) in gain.iter().enumerate() {
                if *g > best_gain {
                    best_gain = *g;
                    best_set = set_index;
                }
            }
            if best_gain == 0 {
                return Err(ProcessingError::InvalidSolution(
                    format!("no remaining set covers any of the {} uncovered paths", num_uncovered)))
            }
            cover.push(best_set);
            num_uncovered -= best_gain;
            for path in self.set(best_set) {
                if count_picked[*path] == 0 {
                    for covering in self.covering(*path) {
                        gain[*covering] -= 1;
                    }
                }
                count_picked[*path] += 1;
            }
            if gain[best_set] != 0 {
                return Err(ProcessingError::InvalidSolution(
                    format!("set {} retains gain after being picked", best_set)))
            }
        }
        Ok((cover, count_picked))
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use crate::lp_report::LpReport;

    fn fixture_instance() -> HSInstance {
        let raw = Cursor::new("0 1\n1 2\n2\n");
        let relation = CoverRelation::read_sets(raw, 3).unwrap();
        let report = LpReport {
            num_paths: 3,
            num_sets: 3,
            objective_value: 1.5,
            activities: vec![0.5, 0.5, 0.5],
        };
        HSInstance::new(relation, report).unwrap()
    }

    #[test]
    fn random_biased_cover_test() {
        let instance = fixture_instance();
        let mut rng = StdRng::seed_from_u64(1815);
        for _ in 0..20 {
            let built = instance.random_biased_cover(&mut rng);
            assert!(built.is_ok());
            let (cover, count_picked) = built.unwrap();
            assert!(instance.relation.validate_cover(&cover));
            for path in 0..3 {
                let covered = cover.iter()
                    .filter(|set_index| instance.relation.set(**set_index).contains(&path))
                    .count();
                assert_eq!(count_picked[path], covered);
            }
        }
    }

    #[test]
    fn prune_test() {
        let instance = fixture_instance();
        let mut rng = StdRng::seed_from_u64(1816);
        for _ in 0..20 {
            let (cover, mut count_picked) = instance.random_biased_cover(&mut rng).unwrap();
            let built_len = cover.len();
            let pruned = instance.relation.prune(cover, &mut count_picked, &mut rng);
            assert!(pruned.is_ok());
            let pruned = pruned.unwrap();
            assert!(pruned.len() <= built_len);
            assert!(instance.relation.validate_cover(&pruned));
            // Every pruned cover of this relation hits its minimum size.
            assert_eq!(pruned.len(), 2);
            let again = instance.relation.prune(pruned.clone(), &mut count_picked, &mut rng);
            assert_eq!(again.unwrap().len(), pruned.len());
        }
    }

    #[test]
    fn prune_detects_broken_counters_test() {
        let raw = Cursor::new("0 1\n1 2\n2\n");
        let relation = CoverRelation::read_sets(raw, 3).unwrap();
        let mut count_picked = vec![1, 1, 0];
        let mut rng = StdRng::seed_from_u64(1817);
        let pruned = relation.prune(vec![0, 2], &mut count_picked, &mut rng);
        assert!(matches!(pruned, Err(ProcessingError::InvalidSolution(_))));
    }

    #[test]
    fn greedy_cover_test() {
        let raw = Cursor::new("0 1\n1 2\n2\n");
        let relation = CoverRelation::read_sets(raw, 3).unwrap();
        let built = relation.greedy_cover();
        assert!(built.is_ok());
        let (cover, count_picked) = built.unwrap();
        assert_eq!(cover, vec![0, 1]);
        assert_eq!(count_picked, vec![1, 2, 1]);
        assert!(relation.validate_cover(&cover));
    }

    #[test]
    fn greedy_cover_large_test() {
        let raw = Cursor::new("0 1\n1 2\n2\n3 4\n4 5\n5\n");
        let relation = CoverRelation::read_sets(raw, 6).unwrap();
        let (cover, _) = relation.greedy_cover().unwrap();
        assert_eq!(cover, vec![0, 3, 1, 4]);
        assert!(relation.validate_cover(&cover));
    }

    #[test]
    fn greedy_cover_uncoverable_test() {
        let raw = Cursor::new("0 1\n1\n");
        let relation = CoverRelation::read_sets(raw, 3).unwrap();
        let built = relation.greedy_cover();
        assert!(matches!(built, Err(ProcessingError::InvalidSolution(_))));
    }

}
