//! Host-side session
//!
//! Connects the puzzle core to a renderer. Input events come in through
//! `on_modifier_activated` / `on_commit_activated`; the host calls
//! `on_transition_complete` once it has finished playing the feedback, which
//! replaces the animation-completion callback with an explicit step.

use crate::error::PuzzleError;
use crate::level::Level;
use crate::puzzle::{
    Advanced, BlockState, EvaluationResult, FeedbackPlan, GameProgress, LevelContext,
    TrackLayout, machine,
};
use crate::renderer::{BlockVariant, Renderer};

pub struct Session<R: Renderer> {
    levels: Vec<Level>,
    track: TrackLayout,
    progress: GameProgress,
    context: LevelContext,
    renderer: R,
}

impl<R: Renderer> Session<R> {
    /// Set up the first level and draw it
    pub fn new(levels: Vec<Level>, track: TrackLayout, renderer: R) -> Result<Self, PuzzleError> {
        if levels.is_empty() {
            return Err(PuzzleError::NoLevels);
        }
        let (progress, context) = machine::start(&levels, &track)?;
        let mut session = Self {
            levels,
            track,
            progress,
            context,
            renderer,
        };
        session.present();
        Ok(session)
    }

    fn present(&mut self) {
        let ctx = &self.context;
        self.renderer.show_level_name(&ctx.name);
        self.renderer
            .draw_block(&ctx.target, ctx.target_position, BlockVariant::Final);
        self.renderer
            .draw_block(&ctx.initial, ctx.initial_position, BlockVariant::Initial);
        self.renderer.position_modifiers(&ctx.modifiers);
        self.renderer.set_modifier_visibility(&ctx.modifiers);
    }

    /// Select-mode cycle. No-op outside select mode or while input is disabled.
    pub fn on_modifier_activated(&mut self) -> bool {
        let cycled = machine::handle_modifier_click(&mut self.context, &mut self.progress);
        if cycled {
            self.renderer.set_modifier_visibility(&self.context.modifiers);
        }
        cycled
    }

    /// Attempt an answer. Input is disabled before any animation starts.
    pub fn on_commit_activated(&mut self) -> Option<EvaluationResult> {
        let before = self.context.initial;
        let result =
            machine::handle_commit_click(&mut self.context, &self.progress, self.levels.len())?;

        let selection = self.progress.selection_index;
        let plan = FeedbackPlan::build(before, &self.context, selection, result);
        self.renderer.play_transition_animation(&plan);
        if result.is_final_answer {
            self.renderer.play_end_game_animation();
        }
        Some(result)
    }

    /// Advance once the transition has played. Returns `None` when no
    /// answer was waiting.
    pub fn on_transition_complete(&mut self) -> Result<Option<Advanced>, PuzzleError> {
        let advanced = machine::advance(
            &self.levels,
            &mut self.context,
            &mut self.progress,
            &self.track,
        )?;
        if let Some(Advanced::NextLevel { .. }) = advanced {
            self.renderer.hide_all();
            self.present();
        }
        Ok(advanced)
    }

    /// Block a commit would produce right now
    pub fn preview(&self) -> BlockState {
        machine::prospective_block(&self.context, self.progress.selection_index)
    }

    pub fn is_finished(&self) -> bool {
        self.context.is_finished()
    }

    pub fn progress(&self) -> &GameProgress {
        &self.progress
    }

    pub fn context(&self) -> &LevelContext {
        &self.context
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}
