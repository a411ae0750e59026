//! Puzzle state machine
//!
//! Drives one level from setup through commit to the next level. Every
//! function here is synchronous and free of rendering; the host decides when
//! a transition has finished playing and calls [`advance`].

use super::block::BlockState;
use super::modifier::{self, ModifierMode};
use super::state::{Advanced, EvaluationResult, GamePhase, GameProgress, LevelContext, TrackLayout};
use crate::error::PuzzleError;
use crate::level::Level;

/// Build the context for `levels[step]` with input enabled
pub fn setup_level(
    levels: &[Level],
    step: usize,
    track: &TrackLayout,
) -> Result<LevelContext, PuzzleError> {
    let level = levels.get(step).ok_or(PuzzleError::LevelIndex {
        step,
        count: levels.len(),
    })?;
    let invalid = |source| PuzzleError::InvalidSpec {
        level: step,
        source,
    };

    let initial = BlockState::create(&level.initial).map_err(invalid)?;
    let target = BlockState::create(&level.target).map_err(invalid)?;
    let (mode, mut modifiers) = modifier::build(&level.modifiers).map_err(invalid)?;

    let initial_position = track.initial_position();
    let target_position = track.final_position();
    modifier::layout(&mut modifiers, mode, initial_position, target_position);
    modifier::set_visibility(&mut modifiers, mode, 0);

    let context = LevelContext {
        step,
        name: level.name.clone(),
        initial,
        target,
        initial_position,
        target_position,
        mode,
        modifiers,
        phase: GamePhase::AwaitingInput,
    };

    log::info!(
        "Level {} \"{}\" ready ({} modifiers, {:?})",
        step + 1,
        context.name,
        context.modifiers.len(),
        mode
    );
    Ok(context)
}

/// Start a session at the first level
pub fn start(
    levels: &[Level],
    track: &TrackLayout,
) -> Result<(GameProgress, LevelContext), PuzzleError> {
    let progress = GameProgress::default();
    let context = setup_level(levels, progress.current_step, track)?;
    Ok((progress, context))
}

/// Cycle the active select option. Returns false when the click is ignored.
pub fn handle_modifier_click(context: &mut LevelContext, progress: &mut GameProgress) -> bool {
    if context.mode != ModifierMode::Select {
        return false;
    }
    if !context.input_enabled() {
        log::warn!("Modifier click ignored while input is disabled");
        return false;
    }

    progress.selection_index =
        modifier::cycle_selection(&context.modifiers, progress.selection_index);
    modifier::set_visibility(
        &mut context.modifiers,
        context.mode,
        progress.selection_index,
    );
    log::debug!("Selected option {}", progress.selection_index);
    true
}

/// The block a commit would produce, without committing it
pub fn prospective_block(context: &LevelContext, selection_index: usize) -> BlockState {
    context
        .active_modifiers(selection_index)
        .iter()
        .fold(context.initial, |block, m| block.patched(&m.effective))
}

/// Judge the current attempt.
///
/// Leaves the context in `Resolved`, which disables input, so repeated
/// commits return `None` until the level is set up again. The derived block
/// is written back onto `context.initial` whether or not it matches.
pub fn handle_commit_click(
    context: &mut LevelContext,
    progress: &GameProgress,
    level_count: usize,
) -> Option<EvaluationResult> {
    if !context.input_enabled() {
        log::warn!("Commit ignored while input is disabled");
        return None;
    }
    let derived = prospective_block(context, progress.selection_index);
    let result = EvaluationResult {
        is_correct: derived == context.target,
        is_final_answer: progress.current_step + 1 == level_count,
    };
    context.initial = derived;
    context.phase = GamePhase::Resolved(result);

    log::info!(
        "Level {} answered {}",
        context.step + 1,
        if result.is_correct { "correctly" } else { "incorrectly" }
    );
    Some(result)
}

/// Move on after a judged attempt.
///
/// Only acts on a context holding a judged answer; any other phase returns
/// `None`. A correct answer advances the step, an incorrect one replays the
/// same level. After the final answer the context is marked finished and no
/// level is set up again. Progress is only updated once the next level is
/// built.
pub fn advance(
    levels: &[Level],
    context: &mut LevelContext,
    progress: &mut GameProgress,
    track: &TrackLayout,
) -> Result<Option<Advanced>, PuzzleError> {
    let GamePhase::Resolved(result) = context.phase else {
        log::warn!("Advance ignored in phase {:?}", context.phase);
        return Ok(None);
    };
    if result.is_final_answer {
        context.phase = GamePhase::Finished;
        log::info!("Game finished");
        return Ok(Some(Advanced::Finished));
    }

    context.phase = GamePhase::Advancing;
    let step = if result.is_correct {
        progress.current_step + 1
    } else {
        progress.current_step
    };
    let next = setup_level(levels, step, track)?;

    progress.current_step = step;
    progress.selection_index = 0;
    *context = next;

    Ok(Some(Advanced::NextLevel {
        step,
        replay: !result.is_correct,
    }))
}
