use miette::Diagnostic;
use thiserror::Error;

/// Main error type for regen operations
#[derive(Error, Diagnostic, Debug)]
pub enum RegenError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(regen::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(regen::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Template error: {message}")]
    #[diagnostic(code(regen::template))]
    Template {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Build error: {message}")]
    #[diagnostic(code(regen::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Process error: {message}")]
    #[diagnostic(code(regen::process))]
    Process {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Image error with {path}: {message}")]
    #[diagnostic(code(regen::image))]
    Image {
        path: std::path::PathBuf,
        message: String,
    },
}

impl RegenError {
    /// Shorthand for a template error without help text.
    pub fn template(message: impl Into<String>) -> Self {
        Self::Template {
            message: message.into(),
            help: None,
        }
    }
}

pub type Result<T> = std::result::Result<T, RegenError>;
