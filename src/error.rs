/*!
Error types.

Classification itself never fails in the `Result` sense: every outcome, including malformed input, is a `PathClassification`.  `ClassificationError` exists for callers who would rather treat the failure tags as errors and use `?`.
*/
use thiserror::Error;

use crate::classify::PathClassification;

/**
The failure outcomes of a classification, with the offset (in units) of the first offending unit where there is one.
*/
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum ClassificationError {
    #[error("path is empty")]
    Empty,
    #[error("malformed path root at offset {at}")]
    Invalid { at: usize },
    #[error("invalid character at offset {at}")]
    InvalidChars { at: usize },
    #[error("repeated path separator at offset {at}")]
    InvalidSlashRuns { at: usize },
    #[error("UNC path lacks a complete server and share")]
    UncIncomplete,
}

impl ClassificationError {
    /**
    The classification tag this error was produced from.
    */
    pub fn kind(&self) -> PathClassification {
        match *self {
            ClassificationError::Empty => PathClassification::Empty,
            ClassificationError::Invalid { .. } => PathClassification::Invalid,
            ClassificationError::InvalidChars { .. } => PathClassification::InvalidChars,
            ClassificationError::InvalidSlashRuns { .. } => PathClassification::InvalidSlashRuns,
            ClassificationError::UncIncomplete => PathClassification::UncIncomplete,
        }
    }

    /**
    The offset of the offending unit, if the failure has one.
    */
    pub fn offset(&self) -> Option<usize> {
        match *self {
            ClassificationError::Invalid { at }
            | ClassificationError::InvalidChars { at }
            | ClassificationError::InvalidSlashRuns { at } => Some(at),
            ClassificationError::Empty | ClassificationError::UncIncomplete => None,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum FlagsError {
    #[error("unrecognised parse flag bits {0:#x}")]
    UnrecognisedBits(u32),
}

/**
Errors raised while loading a `ClassifierConfig`.
*/
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not load classifier configuration: {0}")]
    Load(#[from] ::config::ConfigError),
    #[error(transparent)]
    Flags(#[from] FlagsError),
}
