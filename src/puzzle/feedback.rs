//! Transition plan for a committed attempt
//!
//! Describes where the block travels and how it changes along the way so the
//! renderer can animate it. Timing and easing are left to the renderer.

use serde::{Deserialize, Serialize};

use super::block::{BlockSize, BlockState};
use super::modifier::ModifierKind;
use super::state::{EvaluationResult, LevelContext};

/// Share of the remaining distance the block covers when it fails to fit
pub const BOUNCE_NEAR: f32 = 0.75;
/// Where the block settles after bouncing off the target
pub const BOUNCE_BACK: f32 = 0.5;

/// Block passes a modifier and takes on its patch
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransformStop {
    pub x: f32,
    /// Block after this modifier
    pub block: BlockState,
    /// Vertical squash/stretch played for resize modifiers
    pub scale_pulse: Option<f32>,
}

/// Final movement toward the target block
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Approach {
    /// Slides onto the target
    Fit { x: f32 },
    /// Moves close to the target, then backs off
    Bounce { near: f32, back: f32 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackPlan {
    pub start: BlockState,
    pub stops: Vec<TransformStop>,
    pub approach: Approach,
    pub end_game: bool,
}

impl FeedbackPlan {
    /// Plan the transition from `start` (the block before commit)
    pub fn build(
        start: BlockState,
        context: &LevelContext,
        selection_index: usize,
        result: EvaluationResult,
    ) -> Self {
        let mut block = start;
        let stops: Vec<TransformStop> = context
            .active_modifiers(selection_index)
            .iter()
            .map(|m| {
                block.apply_patch(&m.effective);
                TransformStop {
                    x: m.position.x,
                    block,
                    scale_pulse: match m.kind {
                        ModifierKind::Resize {
                            size: BlockSize::Small,
                        } => Some(0.5),
                        ModifierKind::Resize { .. } => Some(2.0),
                        ModifierKind::Colorize { .. } => None,
                    },
                }
            })
            .collect();

        let target_x = context.target_position.x;
        let approach = if result.is_correct {
            Approach::Fit { x: target_x }
        } else {
            let last = stops
                .last()
                .map(|s| s.x)
                .unwrap_or(context.initial_position.x);
            let gap = target_x - last;
            Approach::Bounce {
                near: last + gap * BOUNCE_NEAR,
                back: last + gap * BOUNCE_BACK,
            }
        };

        Self {
            start,
            stops,
            approach,
            end_game: result.is_final_answer,
        }
    }

    /// Block shown once the transition has played
    pub fn end_block(&self) -> BlockState {
        self.stops.last().map(|s| s.block).unwrap_or(self.start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::{BlockSpec, Level, ModifierSpec};
    use crate::puzzle::block::Color;
    use crate::puzzle::machine::{handle_commit_click, handle_modifier_click, start};
    use crate::puzzle::state::TrackLayout;

    fn commit_plan(level: Level, cycles: usize) -> FeedbackPlan {
        let levels = vec![level];
        let (mut progress, mut ctx) = start(&levels, &TrackLayout::default()).unwrap();
        for _ in 0..cycles {
            handle_modifier_click(&mut ctx, &mut progress);
        }
        let before = ctx.initial;
        let result = handle_commit_click(&mut ctx, &progress, 1).unwrap();
        FeedbackPlan::build(before, &ctx, progress.selection_index, result)
    }

    #[test]
    fn test_sequence_plan_visits_every_modifier() {
        let plan = commit_plan(
            Level {
                name: "two".into(),
                initial: BlockSpec::new(1, "#ff0000"),
                target: BlockSpec::new(2, "#00ff00"),
                modifiers: vec![ModifierSpec::colorize("#00ff00"), ModifierSpec::resize(2)],
            },
            0,
        );
        assert_eq!(plan.stops.len(), 2);
        assert_eq!(plan.stops[0].x, 230.0);
        assert_eq!(plan.stops[0].block.color, Color(0x00ff00));
        assert_eq!(plan.stops[0].block.size, BlockSize::Small);
        assert_eq!(plan.stops[0].scale_pulse, None);
        assert_eq!(plan.stops[1].x, 410.0);
        assert_eq!(plan.stops[1].scale_pulse, Some(2.0));
        assert_eq!(plan.approach, Approach::Fit { x: 590.0 });
        assert!(plan.end_game);
        assert_eq!(plan.end_block(), BlockState::new(BlockSize::Large, Color(0x00ff00)));
    }

    #[test]
    fn test_wrong_select_plan_bounces() {
        let plan = commit_plan(
            Level {
                name: "pick".into(),
                initial: BlockSpec::new(2, "#0000ff"),
                target: BlockSpec::new(1, "#0000ff"),
                modifiers: vec![ModifierSpec::select(vec![
                    ModifierSpec::resize(2),
                    ModifierSpec::resize(1),
                ])],
            },
            0,
        );
        assert_eq!(plan.stops.len(), 1);
        assert_eq!(plan.stops[0].x, 320.0);
        // 320 + 270 * 0.75 and 320 + 270 * 0.5
        assert_eq!(
            plan.approach,
            Approach::Bounce {
                near: 522.5,
                back: 455.0
            }
        );
    }

    #[test]
    fn test_shrink_pulse() {
        let plan = commit_plan(
            Level {
                name: "shrink".into(),
                initial: BlockSpec::new(2, "#0000ff"),
                target: BlockSpec::new(1, "#0000ff"),
                modifiers: vec![ModifierSpec::select(vec![
                    ModifierSpec::resize(2),
                    ModifierSpec::resize(1),
                ])],
            },
            1,
        );
        assert_eq!(plan.stops[0].scale_pulse, Some(0.5));
        assert_eq!(plan.approach, Approach::Fit { x: 590.0 });
    }
}
