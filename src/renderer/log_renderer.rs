//! Renderer that writes every call to the log
//!
//! Used by the native demo and handy when debugging level files.

use glam::Vec2;

use super::{BlockVariant, Renderer};
use crate::consts::BLOCK_WIDTH;
use crate::puzzle::{Approach, BlockState, FeedbackPlan, ModifierKind, ModifierState};

#[derive(Debug, Default)]
pub struct LogRenderer {
    /// Number of transition animations started
    pub transitions: usize,
}

impl LogRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for LogRenderer {
    fn draw_block(&mut self, block: &BlockState, position: Vec2, variant: BlockVariant) {
        log::debug!(
            "draw {:?} block {}x{} {} at ({:.1}, {:.1})",
            variant,
            BLOCK_WIDTH,
            block.height(),
            block.color,
            position.x,
            position.y
        );
    }

    fn position_modifiers(&mut self, modifiers: &[ModifierState]) {
        for (i, m) in modifiers.iter().enumerate() {
            let label = match m.kind {
                ModifierKind::Resize { size } => format!("resize to {}", size.tier()),
                ModifierKind::Colorize { color } => format!("colorize {color}"),
            };
            log::debug!("modifier {i}: {label} at x={:.1}", m.position.x);
        }
    }

    fn set_modifier_visibility(&mut self, modifiers: &[ModifierState]) {
        let shown: Vec<usize> = modifiers
            .iter()
            .enumerate()
            .filter(|(_, m)| m.visible)
            .map(|(i, _)| i)
            .collect();
        log::debug!("visible modifiers: {shown:?}");
    }

    fn play_transition_animation(&mut self, plan: &FeedbackPlan) {
        self.transitions += 1;
        for stop in &plan.stops {
            log::info!(
                "block moves to x={:.1} and becomes size {} {}",
                stop.x,
                stop.block.size.tier(),
                stop.block.color
            );
        }
        match plan.approach {
            Approach::Fit { x } => log::info!("block fits target at x={x:.1}"),
            Approach::Bounce { near, back } => {
                log::info!("block bounces off target ({near:.1} -> {back:.1})")
            }
        }
        let end = plan.end_block();
        log::debug!("block ends as size {} {}", end.size.tier(), end.color);
    }

    fn play_end_game_animation(&mut self) {
        log::info!("Thanks for playing!");
    }

    fn show_level_name(&mut self, name: &str) {
        log::info!("== {name} ==");
    }

    fn hide_all(&mut self) {
        log::debug!("clear stage");
    }
}
