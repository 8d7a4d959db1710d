//! ansi-replay library
//!
//! Replays terminal output containing ANSI escape sequences into the styled
//! lines a terminal would display. Text is parsed into [`Action`]s which are
//! applied to a [`Window`]; output can arrive in arbitrary chunks.

pub mod cli;
pub mod config;
pub mod error;
pub mod parser;
pub mod percent;
pub mod render;
pub mod screen;
pub mod stream;
pub mod width;

pub use config::Config;
pub use error::{ConfigError, ReplayError};
pub use parser::{parse, Action, Color, EraseMode};
pub use screen::{Chunk, CursorPosition, Hyperlink, Line, LineDiscipline, Style, Window};
pub use width::string_width;
