//! Puzzle core
//!
//! All game logic lives here. This module must stay pure and deterministic:
//! - No rendering or platform dependencies
//! - No process-wide state; progress is passed in and returned explicitly
//! - Every transition happens on an input event or an explicit `advance`

pub mod block;
pub mod feedback;
pub mod machine;
pub mod modifier;
pub mod state;

pub use block::{BlockPatch, BlockSize, BlockState, Color};
pub use feedback::{Approach, FeedbackPlan, TransformStop};
pub use machine::{
    advance, handle_commit_click, handle_modifier_click, prospective_block, setup_level, start,
};
pub use modifier::{ModifierKind, ModifierMode, ModifierState};
pub use state::{Advanced, EvaluationResult, GamePhase, GameProgress, LevelContext, TrackLayout};
