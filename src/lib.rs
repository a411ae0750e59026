//! Blockshift - a block transformation puzzle
//!
//! A block with a size and a color travels along a track past modifier tiles
//! and must come out matching the target block.
//!
//! Core modules:
//! - `level`: Level file format and loading
//! - `puzzle`: Deterministic puzzle core (blocks, modifiers, state machine)
//! - `renderer`: Rendering contract the core reports to
//! - `session`: Host glue between input, core and renderer
//! - `settings`: User-editable configuration

pub mod error;
pub mod level;
pub mod puzzle;
pub mod renderer;
pub mod session;
pub mod settings;

pub use error::{PuzzleError, SpecError};
pub use level::{Level, load_levels, parse_levels, validate_levels};
pub use session::Session;
pub use settings::Settings;

/// Layout constants
pub mod consts {
    /// Canvas dimensions
    pub const CANVAS_WIDTH: f32 = 640.0;
    pub const CANVAS_HEIGHT: f32 = 480.0;
    /// Distance of the end blocks from the canvas edge
    pub const POSITIONING_PAD: f32 = 50.0;
    /// Block width; height is width times the size tier
    pub const BLOCK_WIDTH: f32 = 40.0;
}
