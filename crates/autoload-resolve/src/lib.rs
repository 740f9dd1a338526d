//! Lazy class resolution for plugin runtimes.
//!
//! Given a fully-qualified class name, a [`Resolver`] finds the single file
//! that defines it and loads it exactly once. Plugin code does not follow a
//! one-class-per-file naming convention, so the resolver tries, in order:
//!
//! 1. an explicit static map of class name to file;
//! 2. the canonical path derived from the class name under the first matching
//!    namespace root (`App\Admin\Notices` under `App` is `Admin/Notices.php`);
//! 3. the conventional `class-<name>.php` and `class-edd-<name>.php` names,
//!    lower-cased with `_` turned into `-`;
//! 4. a fixed list of misnamed files.
//!
//! Each name is tried in the root and in every one of its subdirectories.
//!
//! ```no_run
//! use autoload_resolve::{ClassHost, ResolutionChain, Resolver};
//!
//! let mut chain = ResolutionChain::new();
//! Resolver::new([("App", "/plugin/src")])
//!     .with_misnamed(["functions"])
//!     .register(&mut chain);
//!
//! if chain.request("App\\Widget") {
//!     assert!(chain.class_exists("App\\Widget"));
//! }
//! ```
//!
//! Candidate generation lives in [`candidates`] and is independent of how a
//! file is finally loaded; loading goes through the
//! [`ModuleLoader`](autoload_source::ModuleLoader) capability.

pub mod candidates;
pub mod chain;
pub mod host;
pub mod namespace;
pub mod resolver;

pub use chain::ResolutionChain;
pub use host::{ClassHost, ClassResolver, Registration};
pub use namespace::{NamespaceMatch, NamespaceRoots, NAMESPACE_SEPARATOR};
pub use resolver::{Resolution, Resolver, ResolverStats, DEFAULT_ROOT_NAMESPACE};

pub use autoload_source::{AutoloadConfig, ConfigError, IncludeOnce, LoadOutcome, ModuleLoader, SourceError, SourceFile};
