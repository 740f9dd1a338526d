use std::path::{Path, PathBuf};
use fxhash::FxHashMap;

use crate::host::{ClassHost, ClassResolver};
use crate::Resolution;

/// In-process class registry with an ordered resolver chain.
///
/// This is the host side of the contract: it answers "is this class defined"
/// and, for classes that are not, asks every registered resolver in turn
/// until one of them loads a file.
#[derive(Default)]
pub struct ResolutionChain {
    resolvers: Vec<Box<dyn ClassResolver>>,
    /// Defined classes and the file each was loaded from
    defined: FxHashMap<String, Option<PathBuf>>,
}

impl ResolutionChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `class` as defined without loading anything.
    pub fn define(&mut self, class: impl Into<String>) {
        self.defined.entry(class.into()).or_insert(None);
    }

    /// Make sure `class` is defined, resolving it if needed.
    ///
    /// Only a resolver that loads a file for the first time defines `class`;
    /// one that lands on an already loaded file passes to the next resolver.
    /// Returns `false` when every resolver misses; reporting the missing class
    /// is up to the caller.
    pub fn request(&mut self, class: &str) -> bool {
        if self.class_exists(class) {
            return true;
        }

        for resolver in self.resolvers.iter_mut() {
            match resolver.resolve_and_load(class) {
                Resolution::Loaded(path) => {
                    log::debug!("{} resolved {} to {}", resolver.name(), class, path.display());
                    self.defined.insert(class.to_string(), Some(path));
                    return true;
                }
                // Including a file a second time defines nothing new.
                Resolution::AlreadyLoaded(path) => {
                    log::trace!(
                        "{} found {} for {}, but it was already loaded",
                        resolver.name(),
                        path.display(),
                        class
                    );
                }
                Resolution::Unresolved => {}
            }
        }

        log::debug!("No resolver could define {}", class);
        false
    }

    /// The file `class` was loaded from, if it was loaded by a resolver.
    pub fn defined_in(&self, class: &str) -> Option<&Path> {
        self.defined.get(class).and_then(|path| path.as_deref())
    }

    pub fn resolver_names(&self) -> Vec<&str> {
        self.resolvers.iter().map(|resolver| resolver.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }
}

impl ClassHost for ResolutionChain {
    fn class_exists(&self, class: &str) -> bool {
        self.defined.contains_key(class)
    }

    fn register(&mut self, resolver: Box<dyn ClassResolver>) {
        self.resolvers.push(resolver);
    }
}
