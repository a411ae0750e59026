//! Error types
//!
//! `SpecError` describes what is wrong with a single block or modifier spec.
//! `PuzzleError` is what the state machine and loaders return; spec errors are
//! wrapped with the index of the level they came from.

use std::path::PathBuf;

use thiserror::Error;

/// A malformed block or modifier spec
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpecError {
    #[error("unsupported block size {0} (expected 1 or 2)")]
    InvalidSize(String),
    #[error("unparseable color {0:?}")]
    InvalidColor(String),
    #[error("modifier list is empty")]
    EmptyModifiers,
    #[error("unrecognized modifier type at position {index}")]
    UnknownModifierType { index: usize },
    #[error("select modifier must be the only modifier of a level (found at position {index})")]
    MisplacedSelect { index: usize },
    #[error("select option {index} is itself a select modifier")]
    NestedSelect { index: usize },
}

/// Errors surfaced by level loading and the puzzle state machine
#[derive(Debug, Error)]
pub enum PuzzleError {
    /// The level file could not be read
    #[error("failed to read levels from {path}: {source}")]
    LevelRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The level payload does not have the expected shape
    #[error("failed to parse levels: {0}")]
    LevelParse(#[from] serde_json::Error),
    /// The level payload parsed but holds no levels
    #[error("level list is empty")]
    NoLevels,
    /// A level holds a malformed block or modifier spec
    #[error("invalid spec in level {level}: {source}")]
    InvalidSpec {
        level: usize,
        #[source]
        source: SpecError,
    },
    /// A step outside the level list was requested
    #[error("level index {step} out of range ({count} levels)")]
    LevelIndex { step: usize, count: usize },
}

impl PuzzleError {
    /// True for the failures that prevent a session from starting at all
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            PuzzleError::LevelRead { .. } | PuzzleError::LevelParse(_) | PuzzleError::NoLevels
        )
    }

    /// Index of the offending level, when the error is tied to one
    pub fn level(&self) -> Option<usize> {
        match self {
            PuzzleError::InvalidSpec { level, .. } => Some(*level),
            PuzzleError::LevelIndex { step, .. } => Some(*step),
            _ => None,
        }
    }
}
