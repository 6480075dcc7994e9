//! This module provides the structure of the hitting set instance the solvers
//! operate on, binding the coverage relation to the LP activities.

use std::io::{self, Write};
use crate::relation::CoverRelation;
use crate::lp_report::LpReport;
use crate::cust_error::ImportError;

/// A hitting set instance: the coverage relation, the per-set activities of
/// the LP relaxation, the lower bound it proves and the best cover found so
/// far.
#[derive(Debug, Clone)]
pub struct HSInstance {
    pub relation: CoverRelation,
    pub activities: Vec<f64>,
    lower_bound: usize,
    pub current_best: Option<Vec<usize>>,
}

impl HSInstance {

    /// Binds `relation` and `report` into an instance, cross-checking the two
    /// files against each other.
    ///
    /// Rejects a pair that disagrees on the instance size, a relation that
    /// leaves some path uncovered, and a report that puts no positive
    /// activity on any set covering some path. The last check guarantees that
    /// the acceptance sampling of the randomized constructor terminates.
    pub fn new(relation: CoverRelation, report: LpReport) -> Result<Self, ImportError> {
        if relation.num_sets() != report.num_sets {
            return Err(ImportError::InstanceMismatch{
                quantity: "sets",
                relation: relation.num_sets(),
                report: report.num_sets,
            })
        }
        if relation.num_paths() != report.num_paths {
            return Err(ImportError::InstanceMismatch{
                quantity: "paths",
                relation: relation.num_paths(),
                report: report.num_paths,
            })
        }
        relation.check_coverage()?;
        for path in 0..relation.num_paths() {
            if !relation.covering(path).iter().any(|set| report.activities[*set] > 0.0) {
                return Err(ImportError::ZeroActivityPath(path))
            }
        }
        let lower_bound = report.lower_bound();
        Ok(HSInstance {
            relation,
            activities: report.activities,
            lower_bound,
            current_best: None,
        })
    }

    /// Returns the lower bound of `self`.
    pub fn lower_bound(&self) -> usize {
        self.lower_bound
    }

    /// Replaces the current best cover with `cover` if it is strictly
    /// smaller. Returns `true` if the best cover was replaced.
    pub fn update_current_best(&mut self, cover: &[usize]) -> bool {
        match self.current_best {
            Some(ref best) if best.len() <= cover.len() => false,
            _ => {
                self.current_best = Some(cover.to_vec());
                true
            },
        }
    }

    /// Writes `cover` to `out` as a single `cover:` line of set indices.
    pub fn write_cover<W: Write>(cover: &[usize], mut out: W) -> Result<(), io::Error> {
        write!(out, "cover:")?;
        for set_index in cover {
            write!(out, " {}", set_index)?;
        }
        writeln!(out)?;
        Ok(())
    }

}
