//! Process-wide logging built on fern.
//!
//! One line format everywhere: RFC3339 timestamp, level tag, module
//! target, message. Output goes to stdout by default, or to an
//! append-only file when one is configured; file output is never colored.

use crate::error::{Result as ServerErrorResult, ServerError};

use std::path::PathBuf;
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;

/// Wire up the global logger. Call once, before the first log line.
pub fn initialize(
    level: LevelFilter,
    file: Option<PathBuf>,
    colored: bool,
) -> ServerErrorResult<()> {
    let logger = match &file {
        Some(path) => {
            let sink = fern::log_file(path).map_err(|e| ServerError::Logger {
                message: format!("cannot open log file {}: {}", path.display(), e),
            })?;
            Dispatch::new().format(line_format(None)).chain(sink)
        }
        None => {
            let palette = colored.then(level_palette);
            Dispatch::new()
                .format(line_format(palette))
                .chain(std::io::stdout())
        }
    };

    logger
        .level(level)
        .apply()
        .map_err(|e| ServerError::Logger {
            message: format!("logger already initialized: {e}"),
        })?;

    match file {
        Some(path) => log::info!("logging to {} at {}", path.display(), level),
        None => log::info!("logging to stdout at {}", level),
    }

    Ok(())
}

fn level_palette() -> ColoredLevelConfig {
    ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::Green)
        .debug(Color::Cyan)
        .trace(Color::BrightBlack)
}

fn line_format(
    palette: Option<ColoredLevelConfig>,
) -> impl Fn(fern::FormatCallback, &std::fmt::Arguments, &log::Record) + Send + Sync + 'static {
    move |out, message, record| {
        let stamp = humantime::format_rfc3339_seconds(SystemTime::now());
        match palette {
            Some(palette) => out.finish(format_args!(
                "{stamp} {:<5} [{}] {message}",
                palette.color(record.level()),
                record.target(),
            )),
            None => out.finish(format_args!(
                "{stamp} {:<5} [{}] {message}",
                record.level(),
                record.target(),
            )),
        }
    }
}
