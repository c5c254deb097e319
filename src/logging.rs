use tracing_appender::non_blocking::WorkerGuard;

use crate::config::LogSettings;

/// File name prefix of the daily rolling log
const LOG_FILE_NAME: &str = "bingo-caller.log";

/// Installs the global subscriber writing to a daily rolling file
///
/// The terminal belongs to the game display, so nothing is logged to stdout.
/// Keep the returned guard alive until shutdown to flush pending lines.
pub fn init_logger(settings: &LogSettings) -> WorkerGuard {
    let file_writer = tracing_appender::rolling::daily(&settings.directory, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(file_writer);

    tracing_subscriber::fmt()
        .with_target(false)
        .with_ansi(false)
        .with_max_level(settings.level.as_tracing_level())
        .with_writer(writer)
        .init();

    guard
}
