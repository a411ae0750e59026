//! Level data as stored in the level file
//!
//! These types mirror the JSON layout and are read-only once loaded. Values
//! are kept raw here (sizes and colors may be numbers or strings) and are
//! validated when a level is set up, so that a bad level is reported by index.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::PuzzleError;
use crate::puzzle::{BlockState, modifier};

/// A numeric field that may be written as a number or a numeric string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SizeValue {
    Number(f64),
    Text(String),
    /// Anything else (booleans, null, arrays); rejected when the level is set up
    Other(serde_json::Value),
}

impl From<i32> for SizeValue {
    fn from(size: i32) -> Self {
        SizeValue::Number(size as f64)
    }
}

/// A color written as `"#rrggbb"`, `"#rgb"`, `"0xrrggbb"` or a plain integer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorValue {
    Number(u64),
    Text(String),
    /// Negative or fractional numbers and non-scalar values
    Other(serde_json::Value),
}

impl From<&str> for ColorValue {
    fn from(color: &str) -> Self {
        ColorValue::Text(color.to_string())
    }
}

/// Block properties as written in a level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockSpec {
    pub size: SizeValue,
    pub color: ColorValue,
}

impl BlockSpec {
    pub fn new(size: impl Into<SizeValue>, color: impl Into<ColorValue>) -> Self {
        Self {
            size: size.into(),
            color: color.into(),
        }
    }
}

/// A modifier entry, tagged by its `type` field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ModifierSpec {
    Resize { size: SizeValue },
    Colorize { color: ColorValue },
    Select { options: Vec<ModifierSpec> },
    /// Any other `type`; rejected when the level is set up
    #[serde(other)]
    Unknown,
}

impl ModifierSpec {
    pub fn resize(size: impl Into<SizeValue>) -> Self {
        ModifierSpec::Resize { size: size.into() }
    }

    pub fn colorize(color: impl Into<ColorValue>) -> Self {
        ModifierSpec::Colorize {
            color: color.into(),
        }
    }

    pub fn select(options: Vec<ModifierSpec>) -> Self {
        ModifierSpec::Select { options }
    }
}

/// One puzzle: transform `initial` into `final` using `modifiers`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub name: String,
    pub initial: BlockSpec,
    #[serde(rename = "final")]
    pub target: BlockSpec,
    pub modifiers: Vec<ModifierSpec>,
}

/// Parse a level list from JSON text
pub fn parse_levels(json: &str) -> Result<Vec<Level>, PuzzleError> {
    let levels: Vec<Level> = serde_json::from_str(json)?;
    if levels.is_empty() {
        return Err(PuzzleError::NoLevels);
    }
    log::info!("Loaded {} levels", levels.len());
    Ok(levels)
}

/// Read and parse a level file
pub fn load_levels(path: impl AsRef<Path>) -> Result<Vec<Level>, PuzzleError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| PuzzleError::LevelRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_levels(&json)
}

/// Check every level's blocks and modifiers without starting a session
pub fn validate_levels(levels: &[Level]) -> Result<(), PuzzleError> {
    for (index, level) in levels.iter().enumerate() {
        let wrap = |source| PuzzleError::InvalidSpec {
            level: index,
            source,
        };
        BlockState::create(&level.initial).map_err(wrap)?;
        BlockState::create(&level.target).map_err(wrap)?;
        modifier::build(&level.modifiers).map_err(wrap)?;
    }
    Ok(())
}
