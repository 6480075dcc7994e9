//! Implementation of the path/set coverage relation, the bipartite structure
//! all solvers in this library operate on.

use fxhash::FxHashSet;
use std::io::BufRead;
use crate::cust_error::ImportError;

/// A coverage relation between paths and the candidate sets covering them,
/// with the inverse index kept alongside. Immutable once loaded, the solvers
/// only ever read it.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct CoverRelation {
    sets: Vec<Vec<usize>>,
    paths: Vec<Vec<usize>>,
}

// Static functions
impl CoverRelation {

    /// Returns the number of sets of `self`.
    pub fn num_sets(&self) -> usize {
        self.sets.len()
    }

    /// Returns the number of paths of `self`.
    pub fn num_paths(&self) -> usize {
        self.paths.len()
    }

    /// Returns the path indices covered by the set `set_index`.
    pub fn set(&self, set_index: usize) -> &[usize] {
        &self.sets[set_index]
    }

    /// Returns the indices of the sets that cover `path`.
    pub fn covering(&self, path: usize) -> &[usize] {
        &self.paths[path]
    }

    /// Checks that every path is covered by at least one set.
    pub fn check_coverage(&self) -> Result<(), ImportError> {
        for (path, covering) in self.paths.iter().enumerate() {
            if covering.is_empty() {
                return Err(ImportError::UncoveredPath(path))
            }
        }
        Ok(())
    }

    /// Checks if the sets in `cover` together cover every path.
    pub fn validate_cover(&self, cover: &[usize]) -> bool {
        let mut covered: FxHashSet<usize> = FxHashSet::default();
        for set_index in cover {
            if *set_index >= self.sets.len() {
                return false
            }
            covered.extend(self.sets[*set_index].iter().copied());
        }
        covered.len() == self.paths.len()
    }

}

impl CoverRelation {

    /// Reads a coverage relation with a known path count: one line per set,
    /// holding the whitespace-separated indices of the paths that set covers.
    ///
    /// The inverse index is allocated at `num_paths` up front, so a path index
    /// of `num_paths` or above is rejected instead of growing the relation.
    pub fn read_sets<R: BufRead>(reader: R, num_paths: usize) -> Result<Self, ImportError> {
        let mut sets = Vec::new();
        let mut paths = vec![Vec::new(); num_paths];
        for line in reader.lines() {
            let line = line?;
            let mut set = Vec::new();
            for token in line.split_whitespace() {
                let path = token.parse::<usize>()?;
                if path >= num_paths {
                    return Err(ImportError::PathOutOfRange{ path, num_paths })
                }
                paths[path].push(sets.len());
                set.push(path);
            }
            sets.push(set);
        }
        Ok(CoverRelation {
            sets,
            paths,
        })
    }

    /// Reads a coverage relation without a declared path count, growing the
    /// inverse index up to the largest path index seen.
    pub fn read_sets_inferred<R: BufRead>(reader: R) -> Result<Self, ImportError> {
        let mut sets = Vec::new();
        let mut paths: Vec<Vec<usize>> = Vec::new();
        for line in reader.lines() {
            let line = line?;
            let mut set = Vec::new();
            for token in line.split_whitespace() {
                let path = token.parse::<usize>()?;
                if path + 1 > paths.len() {
                    paths.resize(path + 1, Vec::new());
                }
                paths[path].push(sets.len());
                set.push(path);
            }
            sets.push(set);
        }
        Ok(CoverRelation {
            sets,
            paths,
        })
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn read_sets_test() {
        let raw = Cursor::new("0 1\n1 2\n2\n");
        let relation = CoverRelation::read_sets(raw, 3);
        assert!(relation.is_ok());
        let relation = relation.unwrap();
        assert_eq!(relation.num_sets(), 3);
        assert_eq!(relation.num_paths(), 3);
        assert_eq!(relation.set(0), &[0, 1]);
        assert_eq!(relation.covering(1), &[0, 1]);
        assert_eq!(relation.covering(2), &[1, 2]);
        assert!(relation.check_coverage().is_ok());
    }

    #[test]
    fn read_sets_inferred_test() {
        let raw = Cursor::new("0 1\n1 2\n2\n");
        let relation = CoverRelation::read_sets_inferred(raw);
        assert!(relation.is_ok());
        let relation = relation.unwrap();
        assert_eq!(relation.num_paths(), 3);
        assert_eq!(relation.num_sets(), 3);
    }

    #[test]
    fn path_out_of_range_test() {
        let raw = Cursor::new("0 1\n1 3\n2\n");
        let relation = CoverRelation::read_sets(raw, 3);
        assert!(matches!(relation, Err(ImportError::PathOutOfRange{ path: 3, num_paths: 3 })));
    }

    #[test]
    fn uncovered_path_test() {
        let raw = Cursor::new("0 1\n1\n");
        let relation = CoverRelation::read_sets(raw, 3);
        assert!(relation.is_ok());
        let check = relation.unwrap().check_coverage();
        assert!(matches!(check, Err(ImportError::UncoveredPath(2))));
    }

    #[test]
    fn validate_cover_test() {
        let raw = Cursor::new("0 1\n1 2\n2\n");
        let relation = CoverRelation::read_sets(raw, 3).unwrap();
        assert!(relation.validate_cover(&[0, 2]));
        assert!(relation.validate_cover(&[0, 1]));
        assert!(relation.validate_cover(&[0, 1, 2]));
        assert!(!relation.validate_cover(&[0]));
        assert!(!relation.validate_cover(&[1, 2]));
        assert!(!relation.validate_cover(&[0, 5]));
    }

}
