//! synthdial: a terminal control surface for a remote synthesizer service.

pub mod cli;
pub mod config;
pub mod keyboard;
pub mod logging;
pub mod params;
pub mod playback;
pub mod tui;
