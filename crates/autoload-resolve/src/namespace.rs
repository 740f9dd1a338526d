//! Namespace root table and prefix matching.
//!
//! A class belongs to a root when its (qualified) name starts with the root's
//! prefix. Roots are tested in registration order and the first match wins.

use std::path::{Path, PathBuf};
use indexmap::IndexMap;

pub use autoload_source::NamespaceMatch;

/// Separator between namespace segments in a class name.
pub const NAMESPACE_SEPARATOR: char = '\\';

/// Ordered mapping from namespace prefix to root directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamespaceRoots {
    roots: IndexMap<String, PathBuf>,
}

impl NamespaceRoots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a root. Re-registering a prefix replaces its directory but
    /// keeps its original position.
    pub fn insert(&mut self, prefix: impl Into<String>, root: impl Into<PathBuf>) -> Option<PathBuf> {
        self.roots.insert(prefix.into(), root.into())
    }

    pub fn get(&self, prefix: &str) -> Option<&Path> {
        self.roots.get(prefix).map(PathBuf::as_path)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.roots.iter().map(|(prefix, root)| (prefix.as_str(), root.as_path()))
    }

    pub fn first_prefix(&self) -> Option<&str> {
        self.roots.keys().next().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

impl<P: Into<String>, R: Into<PathBuf>> FromIterator<(P, R)> for NamespaceRoots {
    fn from_iter<I: IntoIterator<Item = (P, R)>>(iter: I) -> Self {
        let mut roots = Self::new();
        for (prefix, root) in iter {
            roots.insert(prefix, root);
        }
        roots
    }
}

impl From<IndexMap<String, PathBuf>> for NamespaceRoots {
    fn from(roots: IndexMap<String, PathBuf>) -> Self {
        Self { roots }
    }
}

impl<P: Into<String>, R: Into<PathBuf>, const N: usize> From<[(P, R); N]> for NamespaceRoots {
    fn from(pairs: [(P, R); N]) -> Self {
        pairs.into_iter().collect()
    }
}

/// The class name as seen by each successive root test.
#[derive(Debug, Clone)]
pub(crate) struct QualifiedName<'a> {
    token: &'a str,
    policy: NamespaceMatch,
    name: String,
}

impl<'a> QualifiedName<'a> {
    pub(crate) fn new(class: &str, token: &'a str, policy: NamespaceMatch) -> Self {
        Self { token, policy, name: class.to_string() }
    }

    /// Qualify the name ahead of testing the next root.
    pub(crate) fn advance(&mut self) {
        let prepend = match self.policy {
            NamespaceMatch::Legacy => true,
            NamespaceMatch::Unqualified => !self.name.contains(NAMESPACE_SEPARATOR),
        };
        if prepend {
            self.name = format!("{}{}{}", self.token, NAMESPACE_SEPARATOR, self.name);
        }
    }

    /// Plain prefix test; no separator boundary is required after `prefix`.
    pub(crate) fn matches(&self, prefix: &str) -> bool {
        self.name.starts_with(prefix)
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.name
    }
}
