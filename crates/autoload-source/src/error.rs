use std::path::PathBuf;
use thiserror::Error;
use miette::{Diagnostic, SourceSpan};

/// Errors that can occur while loading a resolved source file
#[derive(Debug, Error, Diagnostic, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// The file exists but could not be read
    #[error("Could not read source file {path}: {reason}")]
    #[diagnostic(
        code("AUTOLOAD-001"),
        help("Check file permissions and that the file was not removed after it was probed")
    )]
    Read {
        path: PathBuf,
        reason: String,
    },

    /// The file contents are not valid UTF-8 text
    #[error("Source file {0} is not valid UTF-8")]
    #[diagnostic(
        code("AUTOLOAD-002"),
        help("Class files are loaded as text; re-save the file with UTF-8 encoding")
    )]
    InvalidUtf8(PathBuf),
}

/// Errors that can occur when reading an autoload configuration file
#[derive(Debug, Error, Diagnostic, Clone)]
pub enum ConfigError {
    /// No configuration file at the given location
    #[error("Autoload configuration not found at {0}")]
    #[diagnostic(
        code("AUTOLOAD-010"),
        help("Pass the path of the configuration file, or a directory containing autoload.toml")
    )]
    NotFound(PathBuf),

    /// The configuration file exists but could not be read
    #[error("Error reading autoload configuration {path}: {reason}")]
    #[diagnostic(
        code("AUTOLOAD-011"),
        help("Check file permissions and ensure the file is not corrupted")
    )]
    Read {
        path: PathBuf,
        reason: String,
    },

    /// The configuration is not valid TOML or does not have the expected shape
    #[error("Invalid autoload configuration: {message}")]
    #[diagnostic(
        code("AUTOLOAD-012"),
        help("Roots live under [roots] as \"Prefix\" = \"dir\"; class overrides under [static_map]")
    )]
    Parse {
        message: String,
        #[source_code]
        src: String,
        #[label("error occurs here")]
        span: Option<SourceSpan>,
    },
}

impl ConfigError {
    pub(crate) fn from_toml(err: toml::de::Error, src: &str) -> Self {
        ConfigError::Parse {
            message: err.message().to_string(),
            src: src.to_string(),
            span: err.span().map(SourceSpan::from),
        }
    }
}
