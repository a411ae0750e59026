//! Puzzle state types
//!
//! `GameProgress` is the session-wide counter pair; `LevelContext` is rebuilt
//! for every level (including replays) and owns that round's blocks and
//! modifiers.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::block::BlockState;
use super::modifier::{ModifierMode, ModifierState};
use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH, POSITIONING_PAD};

/// Outcome of a commit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub is_correct: bool,
    pub is_final_answer: bool,
}

/// Lifecycle of a level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Accepting modifier and commit clicks
    AwaitingInput,
    /// Answer judged, input disabled, waiting for the host to advance
    Resolved(EvaluationResult),
    /// Setting up the next (or same) level; only left behind if that setup fails
    Advancing,
    /// Last level answered; nothing more to set up
    Finished,
}

/// What `advance` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advanced {
    /// A level was set up; `replay` is true when it is the same level again
    NextLevel { step: usize, replay: bool },
    Finished,
}

/// Session-wide progress counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameProgress {
    /// Index of the level being played; only a correct answer moves it
    pub current_step: usize,
    /// Active option in select mode; reset on every level setup
    pub selection_index: usize,
}

/// Geometry of the track the blocks sit on
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackLayout {
    pub width: f32,
    pub height: f32,
    /// Distance of each end block from the canvas edge
    pub pad: f32,
}

impl Default for TrackLayout {
    fn default() -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            pad: POSITIONING_PAD,
        }
    }
}

impl TrackLayout {
    pub fn initial_position(&self) -> Vec2 {
        Vec2::new(self.pad, self.height / 2.0)
    }

    pub fn final_position(&self) -> Vec2 {
        Vec2::new(self.width - self.pad, self.height / 2.0)
    }
}

/// Everything belonging to the level currently on screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelContext {
    pub step: usize,
    pub name: String,
    /// The block being transformed
    pub initial: BlockState,
    /// The block to match
    pub target: BlockState,
    pub initial_position: Vec2,
    pub target_position: Vec2,
    pub mode: ModifierMode,
    pub modifiers: Vec<ModifierState>,
    pub phase: GamePhase,
}

impl LevelContext {
    pub fn input_enabled(&self) -> bool {
        self.phase == GamePhase::AwaitingInput
    }

    pub fn is_finished(&self) -> bool {
        self.phase == GamePhase::Finished
    }

    /// Modifiers whose patches a commit would apply, in track order
    pub fn active_modifiers(&self, selection_index: usize) -> &[ModifierState] {
        match self.mode {
            ModifierMode::Sequence => &self.modifiers,
            ModifierMode::Select => self
                .modifiers
                .get(selection_index..selection_index + 1)
                .unwrap_or(&[]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_endpoints() {
        let track = TrackLayout::default();
        assert_eq!(track.initial_position(), Vec2::new(50.0, 240.0));
        assert_eq!(track.final_position(), Vec2::new(590.0, 240.0));
    }

    #[test]
    fn test_progress_starts_at_zero() {
        let progress = GameProgress::default();
        assert_eq!(progress.current_step, 0);
        assert_eq!(progress.selection_index, 0);
    }
}
