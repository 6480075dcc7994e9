//! This module contains all custom errors used in this library.

use std::fmt;
use std::error::Error;

#[derive(Debug)]
pub enum ImportError {
    IoError(std::io::Error),
    InputMalformedError,
    BadIntError(std::num::ParseIntError),
    BadFloatError(std::num::ParseFloatError),
    /// The activities of the solution report do not add up to its objective value.
    InconsistentActivities{ sum_activity: f64, objective_value: f64 },
    /// The coverage relation and the solution report disagree on the instance size.
    InstanceMismatch{ quantity: &'static str, relation: usize, report: usize },
    PathOutOfRange{ path: usize, num_paths: usize },
    UncoveredPath(usize),
    ZeroActivityPath(usize),
}

impl From<std::io::Error> for ImportError {
    fn from(e: std::io::Error) -> ImportError {
        ImportError::IoError(e)
    }
}

impl From<std::num::ParseIntError> for ImportError {
    fn from(e: std::num::ParseIntError) -> ImportError {
        ImportError::BadIntError(e)
    }
}

impl From<std::num::ParseFloatError> for ImportError {
    fn from(e: std::num::ParseFloatError) -> ImportError {
        ImportError::BadFloatError(e)
    }
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IoError(_) => write!(f, "Import: IoError"),
            Self::InputMalformedError => write!(f, "Import: Input is malformed."),
            Self::BadIntError(_) => write!(f, "Import: Integer is malformed."),
            Self::BadFloatError(_) => write!(f, "Import: Float is malformed."),
            Self::InconsistentActivities{ sum_activity, objective_value } =>
                write!(f, "Import: Activities sum to {} but the objective value is {} (off by {}).",
                       sum_activity, objective_value, (sum_activity - objective_value).abs()),
            Self::InstanceMismatch{ quantity, relation, report } =>
                write!(f, "Import: The relation holds {} {} but the report declares {}.",
                       relation, quantity, report),
            Self::PathOutOfRange{ path, num_paths } =>
                write!(f, "Import: Path index {} exceeds the declared {} paths.", path, num_paths),
            Self::UncoveredPath(path) => write!(f, "Import: Path {} is covered by no set.", path),
            Self::ZeroActivityPath(path) =>
                write!(f, "Import: No set covering path {} has positive activity.", path),
        }
    }
}

impl Error for ImportError {}

#[derive(Debug)]
pub enum ProcessingError {
    IoError(std::io::Error),
    InvalidSolution(String),
}

impl From<std::io::Error> for ProcessingError {
    fn from(e: std::io::Error) -> ProcessingError {
        ProcessingError::IoError(e)
    }
}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IoError(_) => write!(f, "Processing: IoError"),
            Self::InvalidSolution(msg) => write!(f, "InvalidSolution: {}", msg),
        }
    }
}

impl Error for ProcessingError {}
