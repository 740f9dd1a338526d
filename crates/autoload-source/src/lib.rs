//! Filesystem side of the autoload class resolver.
//!
//! This crate is responsible for:
//! - Enumerating a namespace root and all of its subdirectories
//! - Probing candidate paths for existing files
//! - Loading a resolved file at most once through the [`ModuleLoader`] capability
//! - Reading the resolver configuration from `autoload.toml`
//!
//! Nothing here decides *which* file belongs to a class; that policy lives in
//! `autoload-resolve`. Directory listings are not cached: every scan reflects
//! the filesystem as it is at the time of the call.
//!
//! ## Errors
//!
//! Scanning and probing never fail; unreadable or missing directories simply
//! contribute no candidates. Loading and configuration errors are reported as
//! [`SourceError`] and [`ConfigError`], both of which carry miette diagnostics.

mod config;
mod dir;
mod error;
mod file;
mod loader;
mod path;

pub use config::{AutoloadConfig, AutoloadSettings, NamespaceMatch, DEFAULT_CONFIG_NAME, default_extension};
pub use dir::scan_directories;
pub use error::{ConfigError, SourceError};
pub use file::SourceFile;
pub use loader::{IncludeOnce, LoadOutcome, ModuleLoader};
pub use path::{file_exists, join_candidate, normalize_dir};
