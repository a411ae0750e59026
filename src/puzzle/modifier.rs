//! Modifier model
//!
//! Turns a level's modifier specs into positioned modifier entries. A level is
//! either a sequence of modifiers applied in order, or a single `select` whose
//! options are alternatives with exactly one active at a time.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::block::{BlockPatch, BlockSize, Color};
use crate::error::SpecError;
use crate::level::ModifierSpec;

/// How a level's modifiers combine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModifierMode {
    /// Every modifier applies, in track order
    Sequence,
    /// Only the active option applies
    Select,
}

/// A validated, non-select modifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModifierKind {
    Resize { size: BlockSize },
    Colorize { color: Color },
}

impl ModifierKind {
    /// Validate a single non-select spec
    fn from_spec(spec: &ModifierSpec, index: usize) -> Result<Self, SpecError> {
        match spec {
            ModifierSpec::Resize { size } => Ok(ModifierKind::Resize {
                size: BlockSize::parse(size)?,
            }),
            ModifierSpec::Colorize { color } => Ok(ModifierKind::Colorize {
                color: Color::parse(color)?,
            }),
            ModifierSpec::Select { .. } => Err(SpecError::MisplacedSelect { index }),
            ModifierSpec::Unknown => Err(SpecError::UnknownModifierType { index }),
        }
    }

    /// The properties this modifier overwrites
    pub fn patch(&self) -> BlockPatch {
        match *self {
            ModifierKind::Resize { size } => BlockPatch::size(size),
            ModifierKind::Colorize { color } => BlockPatch::color(color),
        }
    }
}

/// A modifier placed on the track
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModifierState {
    pub kind: ModifierKind,
    pub position: Vec2,
    /// Patch applied to the block when this modifier is used
    pub effective: BlockPatch,
    pub visible: bool,
}

impl ModifierState {
    pub fn new(kind: ModifierKind) -> Self {
        Self {
            kind,
            position: Vec2::ZERO,
            effective: kind.patch(),
            visible: true,
        }
    }
}

/// Materialize a level's modifier list.
///
/// A lone `select` expands to its options. Order is preserved.
pub fn build(specs: &[ModifierSpec]) -> Result<(ModifierMode, Vec<ModifierState>), SpecError> {
    let (mode, entries) = match specs {
        [] => return Err(SpecError::EmptyModifiers),
        [ModifierSpec::Select { options }] => {
            if options.is_empty() {
                return Err(SpecError::EmptyModifiers);
            }
            if let Some(index) = options
                .iter()
                .position(|o| matches!(o, ModifierSpec::Select { .. }))
            {
                return Err(SpecError::NestedSelect { index });
            }
            (ModifierMode::Select, options.as_slice())
        }
        _ => (ModifierMode::Sequence, specs),
    };

    let modifiers = entries
        .iter()
        .enumerate()
        .map(|(index, spec)| ModifierKind::from_spec(spec, index).map(ModifierState::new))
        .collect::<Result<Vec<_>, _>>()?;

    Ok((mode, modifiers))
}

/// Place modifiers along the track from `start` to `end`.
///
/// Sequence mode spaces them evenly strictly between the endpoints; select
/// mode stacks every option on the midpoint. All modifiers sit at `end.y`.
pub fn layout(modifiers: &mut [ModifierState], mode: ModifierMode, start: Vec2, end: Vec2) {
    match mode {
        ModifierMode::Sequence => {
            let increase = (end.x - start.x) / (modifiers.len() + 1) as f32;
            for (i, modifier) in modifiers.iter_mut().enumerate() {
                modifier.position = Vec2::new(start.x + (i + 1) as f32 * increase, end.y);
            }
        }
        ModifierMode::Select => {
            let mid = (start.x + end.x) / 2.0;
            for modifier in modifiers.iter_mut() {
                modifier.position = Vec2::new(mid, end.y);
            }
        }
    }
    log::debug!("Laid out {} modifiers ({:?})", modifiers.len(), mode);
}

pub fn set_visibility(modifiers: &mut [ModifierState], mode: ModifierMode, active_index: usize) {
    for (i, modifier) in modifiers.iter_mut().enumerate() {
        modifier.visible = match mode {
            ModifierMode::Sequence => true,
            ModifierMode::Select => i == active_index,
        };
    }
}

/// Next active option, wrapping around
pub fn cycle_selection(modifiers: &[ModifierState], current_index: usize) -> usize {
    debug_assert!(!modifiers.is_empty());
    (current_index + 1) % modifiers.len().max(1)
}
