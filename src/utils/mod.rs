//! Output formatting and logging helpers

pub mod display;
pub mod logging;

pub use display::{Color, ColorOutput, FrameFormatter, CLEAR_SCREEN};
pub use logging::init_tracing;
