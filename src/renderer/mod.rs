//! Rendering contract
//!
//! The puzzle core never draws. It hands its outputs to a [`Renderer`], which
//! may animate them however it likes. Completion of an animation is reported
//! back by the host calling `Session::on_transition_complete`.

pub mod log_renderer;

pub use log_renderer::LogRenderer;

use glam::Vec2;

use crate::puzzle::{BlockState, FeedbackPlan, ModifierState};

/// Which end of the track a block sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockVariant {
    /// The block the player transforms
    Initial,
    /// The target block (drawn with a texture overlay)
    Final,
}

/// Side-effecting output of the puzzle core
pub trait Renderer {
    fn draw_block(&mut self, block: &BlockState, position: Vec2, variant: BlockVariant);

    fn position_modifiers(&mut self, modifiers: &[ModifierState]);

    fn set_modifier_visibility(&mut self, modifiers: &[ModifierState]);

    /// Fire-and-forget; the host reports completion separately
    fn play_transition_animation(&mut self, plan: &FeedbackPlan);

    fn play_end_game_animation(&mut self);

    /// Announce a level by name
    fn show_level_name(&mut self, _name: &str) {}

    /// Clear the previous level before the next one is drawn
    fn hide_all(&mut self) {}
}
