//! Error type for the terminal host.

use std::io;

/// Errors surfaced while running the host list view.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("terminal I/O: {0}")]
    Io(#[from] io::Error),

    #[error("logger init: {0}")]
    Logger(#[from] log::SetLoggerError),
}
