//! Block model
//!
//! A block has a size tier and a color. The initial block is transformed by
//! patches; the final block is the fixed target.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::BLOCK_WIDTH;
use crate::error::SpecError;
use crate::level::{BlockSpec, ColorValue, SizeValue};

/// Supported size tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockSize {
    Small = 1,
    Large = 2,
}

impl BlockSize {
    pub fn tier(self) -> u8 {
        self as u8
    }

    /// Validate a raw size value from level data
    pub fn parse(value: &SizeValue) -> Result<Self, SpecError> {
        let number = match value {
            SizeValue::Number(n) => *n,
            SizeValue::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| SpecError::InvalidSize(format!("{s:?}")))?,
            SizeValue::Other(v) => return Err(SpecError::InvalidSize(v.to_string())),
        };
        if number == 1.0 {
            Ok(BlockSize::Small)
        } else if number == 2.0 {
            Ok(BlockSize::Large)
        } else {
            Err(SpecError::InvalidSize(number.to_string()))
        }
    }
}

/// 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color(pub u32);

impl Color {
    pub const MAX: u32 = 0xff_ffff;

    /// Normalize a raw color value to RGB
    pub fn parse(value: &ColorValue) -> Result<Self, SpecError> {
        match value {
            ColorValue::Number(n) if *n <= Self::MAX as u64 => Ok(Color(*n as u32)),
            ColorValue::Number(n) => Err(SpecError::InvalidColor(n.to_string())),
            ColorValue::Text(s) => Self::parse_str(s),
            ColorValue::Other(v) => Err(SpecError::InvalidColor(v.to_string())),
        }
    }

    fn parse_str(text: &str) -> Result<Self, SpecError> {
        let invalid = || SpecError::InvalidColor(text.to_string());
        let trimmed = text.trim();

        let digits = if let Some(hex) = trimmed.strip_prefix('#') {
            match hex.len() {
                6 => hex.to_string(),
                // #rgb shorthand
                3 => hex.chars().flat_map(|c| [c, c]).collect(),
                _ => return Err(invalid()),
            }
        } else if let Some(hex) = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
        {
            if hex.is_empty() || hex.len() > 6 {
                return Err(invalid());
            }
            hex.to_string()
        } else {
            return Err(invalid());
        };

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        u32::from_str_radix(&digits, 16)
            .map(Color)
            .map_err(|_| invalid())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

/// Partial block properties; absent fields are left untouched when applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BlockPatch {
    pub size: Option<BlockSize>,
    pub color: Option<Color>,
}

impl BlockPatch {
    pub fn size(size: BlockSize) -> Self {
        Self {
            size: Some(size),
            color: None,
        }
    }

    pub fn color(color: Color) -> Self {
        Self {
            size: None,
            color: Some(color),
        }
    }
}

/// Live block properties
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockState {
    pub size: BlockSize,
    pub color: Color,
}

impl BlockState {
    pub fn new(size: BlockSize, color: Color) -> Self {
        Self { size, color }
    }

    /// Build a block from level data
    pub fn create(spec: &BlockSpec) -> Result<Self, SpecError> {
        Ok(Self {
            size: BlockSize::parse(&spec.size)?,
            color: Color::parse(&spec.color)?,
        })
    }

    /// Overwrite the fields present in `patch`
    pub fn apply_patch(&mut self, patch: &BlockPatch) {
        if let Some(size) = patch.size {
            self.size = size;
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
    }

    /// Copy of this block with `patch` applied
    pub fn patched(mut self, patch: &BlockPatch) -> Self {
        self.apply_patch(patch);
        self
    }

    /// Drawn height in pixels (width is fixed)
    pub fn height(&self) -> f32 {
        self.size.tier() as f32 * BLOCK_WIDTH
    }
}
