use miette::Diagnostic;
use thiserror::Error;

/// Main error type for icongen operations
#[derive(Error, Diagnostic, Debug)]
pub enum IconError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(icongen::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("PNG encode error: {message}")]
    #[diagnostic(code(icongen::encode))]
    Encode { message: String },
}

pub type Result<T> = std::result::Result<T, IconError>;
