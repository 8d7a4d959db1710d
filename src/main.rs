//! ansi-replay - CLI entry point

use std::fs::File;
use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ansi_replay::cli::Cli;
use ansi_replay::config::{Config, OutputFormat};
use ansi_replay::render::{render_ansi, render_json, render_plain};
use ansi_replay::{stream, Window};

/// Environment variable holding the log filter (e.g. `ansi_replay=trace`).
const LOG_ENV: &str = "ANSI_REPLAY_LOG";

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let mut config = Config::load(cli.config.as_deref())?;
    cli.apply_to(&mut config);
    config.validate().context("Invalid options")?;

    let window = Window::new(config.render.discipline);
    let chunk_size = config.input.chunk_size;
    let window = match cli.input() {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
            stream::replay(file, window, chunk_size)
                .with_context(|| format!("Failed to replay {}", path.display()))?
        }
        None => stream::replay(io::stdin().lock(), window, chunk_size)
            .context("Failed to replay stdin")?,
    };

    let format = match config.render.format {
        OutputFormat::Auto if atty::is(atty::Stream::Stdout) => OutputFormat::Ansi,
        OutputFormat::Auto => OutputFormat::Plain,
        format => format,
    };
    let output = match format {
        OutputFormat::Ansi => render_ansi(&window, config.render.hyperlinks),
        OutputFormat::Json => render_json(&window).context("Failed to serialize output")?,
        OutputFormat::Plain | OutputFormat::Auto => render_plain(&window),
    };

    if output.is_empty() {
        return Ok(());
    }
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", output).context("Failed to write output")?;
    Ok(())
}

/// Install the stderr log subscriber. `-v` flags take precedence over the
/// environment; without either only warnings are shown.
fn init_logging(cli: &Cli) {
    let filter = match cli.log_level() {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
