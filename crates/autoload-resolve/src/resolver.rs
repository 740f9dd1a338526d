use std::path::{Path, PathBuf};
use fxhash::FxHashMap;
use autoload_source::{
    file_exists, scan_directories, AutoloadConfig, IncludeOnce, LoadOutcome, ModuleLoader,
};

use crate::candidates::{alternative_names, candidate_paths, file_names, psr4_path};
use crate::host::{ClassHost, ClassResolver, Registration};
use crate::namespace::{NamespaceMatch, NamespaceRoots, QualifiedName};

/// Root namespace token used when no root is registered and none is configured.
pub const DEFAULT_ROOT_NAMESPACE: &str = "EDD";

/// Result of a single `resolve_and_load` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The file at this path was loaded by this call.
    Loaded(PathBuf),
    /// The file at this path was the first candidate found, but the loader had
    /// already loaded it.
    AlreadyLoaded(PathBuf),
    /// No candidate exists, or the one found could not be loaded.
    Unresolved,
}

impl Resolution {
    pub fn is_resolved(&self) -> bool {
        !matches!(self, Resolution::Unresolved)
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            Resolution::Loaded(path) | Resolution::AlreadyLoaded(path) => Some(path),
            Resolution::Unresolved => None,
        }
    }
}

/// Counters kept across calls to `resolve_and_load`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolverStats {
    /// Calls to `resolve_and_load`
    pub requests: usize,
    /// Namespace roots scanned
    pub scans: usize,
    /// Candidate paths tested for existence
    pub probes: usize,
    /// Files handed to the loader that it loaded for the first time
    pub loads: usize,
}

/// Turns class names into source files and loads them.
///
/// Resolution for a class goes:
/// 1. the static map, if it names an existing file;
/// 2. the first namespace root whose prefix matches the class, searching the
///    root and all its subdirectories for the canonical path, the two
///    conventional `class-*` names, then every misnamed entry.
///
/// Only the first matching root is ever searched, whether or not a file is
/// found in it. A class nobody can find is not an error: the resolver is one
/// link in a host's chain and simply reports [`Resolution::Unresolved`].
pub struct Resolver<L = IncludeOnce> {
    name: String,
    roots: NamespaceRoots,
    static_map: FxHashMap<String, PathBuf>,
    misnamed: Vec<String>,
    root_namespace: Option<String>,
    extension: String,
    namespace_match: NamespaceMatch,
    loader: L,
    stats: ResolverStats,
}

impl Resolver<IncludeOnce> {
    /// Create a resolver over `roots` with the default include-once loader.
    ///
    /// Nothing is read from disk here and nothing is registered anywhere.
    pub fn new(roots: impl Into<NamespaceRoots>) -> Self {
        let roots = roots.into();
        Resolver {
            name: roots.first_prefix().unwrap_or("autoload").to_string(),
            roots,
            static_map: FxHashMap::default(),
            misnamed: Vec::new(),
            root_namespace: None,
            extension: autoload_source::default_extension(),
            namespace_match: NamespaceMatch::default(),
            loader: IncludeOnce::new(),
            stats: ResolverStats::default(),
        }
    }

    pub fn from_config(config: &AutoloadConfig) -> Self {
        let settings = &config.autoload;
        let mut resolver = Self::new(NamespaceRoots::from(config.roots.clone()))
            .with_static_map(config.static_map.clone())
            .with_misnamed(settings.misnamed.iter().cloned())
            .with_extension(settings.extension.clone())
            .with_namespace_match(settings.namespace_match);
        if let Some(token) = &settings.root_namespace {
            resolver = resolver.with_root_namespace(token.clone());
        }
        resolver
    }
}

impl<L: ModuleLoader> Resolver<L> {
    pub fn with_static_map<I, K, P>(mut self, map: I) -> Self
    where
        I: IntoIterator<Item = (K, P)>,
        K: Into<String>,
        P: Into<PathBuf>,
    {
        self.static_map
            .extend(map.into_iter().map(|(class, path)| (class.into(), path.into())));
        self
    }

    /// Add bare file names (no directory, no extension) tried for every class.
    pub fn with_misnamed<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            let name = name.into();
            if !self.misnamed.contains(&name) {
                self.misnamed.push(name);
            }
        }
        self
    }

    pub fn with_root_namespace(mut self, token: impl Into<String>) -> Self {
        self.root_namespace = Some(token.into());
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into().trim_start_matches('.').to_string();
        self
    }

    pub fn with_namespace_match(mut self, namespace_match: NamespaceMatch) -> Self {
        self.namespace_match = namespace_match;
        self
    }

    /// Swap the loader, keeping every other setting.
    pub fn with_loader<M: ModuleLoader>(self, loader: M) -> Resolver<M> {
        Resolver {
            name: self.name,
            roots: self.roots,
            static_map: self.static_map,
            misnamed: self.misnamed,
            root_namespace: self.root_namespace,
            extension: self.extension,
            namespace_match: self.namespace_match,
            loader,
            stats: self.stats,
        }
    }

    pub fn roots(&self) -> &NamespaceRoots {
        &self.roots
    }

    pub fn misnamed(&self) -> &[String] {
        &self.misnamed
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn namespace_match(&self) -> NamespaceMatch {
        self.namespace_match
    }

    /// The fixed token prepended while matching and removed from alternative
    /// names: the configured one, else the first registered prefix.
    pub fn root_namespace(&self) -> &str {
        self.root_namespace
            .as_deref()
            .or_else(|| self.roots.first_prefix())
            .unwrap_or(DEFAULT_ROOT_NAMESPACE)
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    pub fn loader_mut(&mut self) -> &mut L {
        &mut self.loader
    }

    pub fn stats(&self) -> ResolverStats {
        self.stats
    }

    /// Locate the file defining `class` and load it.
    pub fn resolve_and_load(&mut self, class: &str) -> Resolution {
        self.stats.requests += 1;

        if let Some(path) = self.static_map.get(class) {
            if file_exists(path) {
                log::debug!("Static map resolves {} to {}", class, path.display());
                let path = path.clone();
                return self.load(class, path);
            }
            log::debug!("Static map entry for {} points at missing {}", class, path.display());
        }

        let Some(candidates) = self.candidates_for(class) else {
            log::trace!("No namespace root matches {}", class);
            return Resolution::Unresolved;
        };
        self.stats.scans += 1;

        for path in candidates {
            self.stats.probes += 1;
            log::trace!("Probing {}", path.display());
            if file_exists(&path) {
                return self.load(class, path);
            }
        }

        log::debug!("No candidate file found for {}", class);
        Resolution::Unresolved
    }

    /// Ordered candidate paths for `class` from the first matching root.
    ///
    /// Scans the root's directory tree but probes and loads nothing. `None`
    /// when no root matches.
    pub fn candidates_for(&self, class: &str) -> Option<Vec<PathBuf>> {
        let token = self.root_namespace();
        let mut name = QualifiedName::new(class, token, self.namespace_match);

        for (prefix, root) in self.roots.iter() {
            name.advance();
            if !name.matches(prefix) {
                continue;
            }

            log::debug!("{} matches namespace {} rooted at {}", class, prefix, root.display());
            let dirs = scan_directories(root);
            let names = file_names(
                psr4_path(name.as_str(), prefix),
                alternative_names(name.as_str(), token),
                &self.misnamed,
            );
            return Some(candidate_paths(&dirs, &names, &self.extension));
        }

        None
    }

    /// Hand the one-time host registration to the caller instead of performing it.
    pub fn into_registration(self) -> Registration
    where
        L: 'static,
    {
        Registration::new(Box::new(self))
    }

    /// Register with `host`'s class-resolution chain.
    pub fn register<H: ClassHost + ?Sized>(self, host: &mut H)
    where
        L: 'static,
    {
        self.into_registration().register(host);
    }

    fn load(&mut self, class: &str, path: PathBuf) -> Resolution {
        match self.loader.load(&path) {
            Ok(LoadOutcome::Loaded) => {
                self.stats.loads += 1;
                log::debug!("Loaded {} from {}", class, path.display());
                Resolution::Loaded(path)
            }
            Ok(LoadOutcome::AlreadyLoaded) => {
                log::trace!("{} already loaded from {}", class, path.display());
                Resolution::AlreadyLoaded(path)
            }
            Err(err) => {
                log::warn!("Failed to load {} from {}: {}", class, path.display(), err);
                Resolution::Unresolved
            }
        }
    }
}

impl<L: ModuleLoader> ClassResolver for Resolver<L> {
    fn name(&self) -> &str {
        &self.name
    }

    fn resolve_and_load(&mut self, class: &str) -> Resolution {
        Resolver::<L>::resolve_and_load(self, class)
    }
}

impl<L> std::fmt::Debug for Resolver<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver")
            .field("name", &self.name)
            .field("roots", &self.roots)
            .field("static_map", &self.static_map)
            .field("misnamed", &self.misnamed)
            .field("root_namespace", &self.root_namespace)
            .field("extension", &self.extension)
            .field("namespace_match", &self.namespace_match)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}
