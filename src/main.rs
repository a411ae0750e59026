//! Blockshift entry point
//!
//! Loads the level file and plays it through with the log renderer, picking
//! select options by previewing each one.

use blockshift::puzzle::{Advanced, ModifierMode};
use blockshift::renderer::LogRenderer;
use blockshift::{PuzzleError, Session, Settings, load_levels, validate_levels};

fn main() {
    env_logger::init();
    log::info!("Blockshift starting...");

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), PuzzleError> {
    let settings = Settings::from_env();
    let levels = load_levels(&settings.levels_path)?;
    validate_levels(&levels)?;

    let mut session = Session::new(levels, settings.track, LogRenderer::new())?;
    let mut failures = 0;

    while !session.is_finished() {
        if session.context().mode == ModifierMode::Select {
            choose_option(&mut session);
        }

        let Some(result) = session.on_commit_activated() else {
            return ended_early(&session);
        };
        if !result.is_correct && !result.is_final_answer {
            failures += 1;
            if failures > settings.autoplay_attempts {
                log::warn!(
                    "Giving up on level {} after {} attempts",
                    session.progress().current_step + 1,
                    failures
                );
                return Ok(());
            }
        }

        match session.on_transition_complete()? {
            Some(Advanced::NextLevel { replay: false, .. }) => failures = 0,
            Some(_) => {}
            None => return ended_early(&session),
        }
    }

    log::info!("Played {} levels", session.level_count());
    Ok(())
}

fn ended_early(session: &Session<LogRenderer>) -> Result<(), PuzzleError> {
    log::warn!(
        "Run ended early at level {} of {}",
        session.progress().current_step + 1,
        session.level_count()
    );
    Ok(())
}

/// Cycle until the preview matches the target or every option was tried
fn choose_option(session: &mut Session<LogRenderer>) {
    let options = session.context().modifiers.len();
    for _ in 0..options {
        if session.preview() == session.context().target {
            return;
        }
        session.on_modifier_activated();
    }
}
