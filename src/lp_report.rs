//! Parser for the fixed-layout solution report of the external LP solver.

use std::io::BufRead;
use crate::cust_error::ImportError;

/// Tolerated discrepancy between the summed activities and the reported
/// objective value.
const CONSISTENCY_EPS: f64 = 0.001;

/// The parts of the LP solution report the solvers consume: the declared
/// instance size, the objective value and the per-set activities.
#[derive(Debug, Clone)]
pub struct LpReport {
    pub num_paths: usize,
    pub num_sets: usize,
    pub objective_value: f64,
    pub activities: Vec<f64>,
}

impl LpReport {

    /// Reads a solution report in the fixed layout of the external LP solver.
    ///
    /// The nine header lines carry the path count, the set count and the
    /// objective value. The path section that follows is skipped. Each of the
    /// `num_sets` record lines holds one activity as its fourth token. A
    /// report whose activities do not sum to its objective value (within
    /// `CONSISTENCY_EPS`) is rejected.
    pub fn read_sol<R: BufRead>(sol: R) -> Result<Self, ImportError> {
        let mut lines = sol.lines();
        let mut num_paths = 0;
        let mut num_sets = 0;
        let mut objective_value = 0f64;
        for i in 0..9 {
            let line = lines.next().ok_or(ImportError::InputMalformedError)??;
            if i == 1 {
                num_paths = line.split_whitespace().nth(1)
                    .ok_or(ImportError::InputMalformedError)?
                    .parse()?;
            } else if i == 2 {
                num_sets = line.split_whitespace().nth(1)
                    .ok_or(ImportError::InputMalformedError)?
                    .parse()?;
            } else if i == 5 {
                objective_value = line.split_whitespace().nth(3)
                    .ok_or(ImportError::InputMalformedError)?
                    .parse()?;
            }
        }
        for _ in 0..num_paths + 3 {
            lines.next().ok_or(ImportError::InputMalformedError)??;
        }
        let mut activities = Vec::with_capacity(num_sets);
        for _ in 0..num_sets {
            let line = lines.next().ok_or(ImportError::InputMalformedError)??;
            let activity = line.split_whitespace().nth(3)
                .ok_or(ImportError::InputMalformedError)?
                .parse::<f64>()?;
            activities.push(activity);
        }
        let report = LpReport {
            num_paths,
            num_sets,
            objective_value,
            activities,
        };
        let sum_activity = report.sum_activity();
        if (sum_activity - objective_value).abs() >= CONSISTENCY_EPS {
            return Err(ImportError::InconsistentActivities{ sum_activity, objective_value })
        }
        Ok(report)
    }

    /// Returns the sum of all set activities.
    pub fn sum_activity(&self) -> f64 {
        self.activities.iter().sum()
    }

    /// Returns the lower bound proven by the LP relaxation, the rounded-up
    /// sum of activities.
    pub fn lower_bound(&self) -> usize {
        self.sum_activity().ceil() as usize
    }

}
