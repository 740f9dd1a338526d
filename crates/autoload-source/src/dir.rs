use crate::path::normalize_dir;
use fxhash::FxHashSet;
use std::{fs, path::{Path, PathBuf}};

/// Enumerate `root` and every directory below it
///
/// Directories are returned self first: `root`, then each subdirectory
/// followed by its own descendants. Siblings are visited in file-name order so
/// the candidate order built from this list is the same on every platform.
///
/// # Parameters
///
/// * `root` - The namespace root directory to scan
///
/// # Returns
///
/// The de-duplicated, normalized directory list. A missing or unreadable root
/// yields an empty list; directories that cannot be read are skipped. Nothing
/// here is reported as an error because a resolver treats it as "no candidates".
pub fn scan_directories(root: &Path) -> Vec<PathBuf> {
    let mut scan = DirectoryScan::default();

    if !root.is_dir() {
        log::debug!("Namespace root {} is not a directory, nothing to scan", root.display());
        return scan.dirs;
    }

    scan.visit(root);
    log::trace!("Scanned {} directories under {}", scan.dirs.len(), root.display());
    scan.dirs
}

#[derive(Default)]
struct DirectoryScan {
    dirs: Vec<PathBuf>,
    /// Normalized paths already pushed to `dirs`
    seen: FxHashSet<PathBuf>,
    /// Canonical paths already entered, guards against symlink cycles
    visited: FxHashSet<PathBuf>,
}

impl DirectoryScan {
    fn visit(&mut self, path: &Path) {
        match path.canonicalize() {
            Ok(canonical) => {
                if !self.visited.insert(canonical) {
                    log::debug!("Skipping {}: directory already visited", path.display());
                    return;
                }
            }
            Err(err) => {
                log::debug!("Skipping {}: {}", path.display(), err);
                return;
            }
        }

        let normalized = normalize_dir(path);
        if self.seen.insert(normalized.clone()) {
            self.dirs.push(normalized);
        }

        let entries = match fs::read_dir(path) {
            Ok(entries) => entries,
            Err(err) => {
                log::warn!("Could not read directory {}: {}", path.display(), err);
                return;
            }
        };

        let mut children: Vec<PathBuf> = entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|entry_path| entry_path.is_dir())
            .collect();
        children.sort();

        for child in children {
            self.visit(&child);
        }
    }
}
