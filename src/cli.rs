//! CLI definitions for ansi-replay
//!
//! This module contains the clap CLI structure, separated from main.rs so it
//! can be tested without spawning the binary.

use std::path::PathBuf;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{ArgAction, Parser};

use crate::config::{Config, OutputFormat};
use crate::screen::LineDiscipline;

/// Build clap styles for help output.
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser, Debug)]
#[command(name = "ansi-replay")]
#[command(about = "Replay terminal output with ANSI escapes into the text a terminal would show")]
#[command(
    long_about = "Replay terminal output with ANSI escapes into the text a terminal would show.

Carriage returns, cursor movement and erase sequences are applied to a virtual
screen, so progress bars and spinners collapse to their final state. Colors,
text attributes and OSC 8 hyperlinks are tracked per character.

EXAMPLES:
    cargo build 2>&1 | ansi-replay           Clean up a build log
    ansi-replay session.log --format json    Dump lines and styles as JSON
    ansi-replay --discipline raw out.txt     Keep trailing blank lines"
)]
#[command(version)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Input file; reads stdin when omitted or "-"
    pub file: Option<PathBuf>,

    /// Line discipline: "raw" keeps trailing blank lines, "cooked" trims them
    #[arg(long, value_name = "raw|cooked")]
    pub discipline: Option<LineDiscipline>,

    /// Output format
    #[arg(long, value_name = "auto|plain|ansi|json")]
    pub format: Option<OutputFormat>,

    /// Bytes read per update
    #[arg(long, value_name = "N")]
    pub chunk_size: Option<usize>,

    /// Do not emit OSC 8 hyperlinks in ansi output
    #[arg(long)]
    pub no_hyperlinks: bool,

    /// Config file (default: ~/.config/ansi-replay/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Input path, or `None` for stdin.
    pub fn input(&self) -> Option<&PathBuf> {
        self.file.as_ref().filter(|path| path.as_os_str() != "-")
    }

    /// Overlay command-line flags on top of file configuration.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(discipline) = self.discipline {
            config.render.discipline = discipline;
        }
        if let Some(format) = self.format {
            config.render.format = format;
        }
        if let Some(chunk_size) = self.chunk_size {
            config.input.chunk_size = chunk_size;
        }
        if self.no_hyperlinks {
            config.render.hyperlinks = false;
        }
    }

    /// Log filter directive implied by `-v` flags, if any.
    pub fn log_level(&self) -> Option<&'static str> {
        match self.verbose {
            0 => None,
            1 => Some("debug"),
            _ => Some("trace"),
        }
    }
}
