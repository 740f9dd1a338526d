use crate::{SourceError, SourceFile};
use fxhash::FxHashSet;
use std::{fs, path::{Path, PathBuf}};

/// What a [`ModuleLoader`] did with a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The file was loaded for the first time.
    Loaded,
    /// The file had already been loaded; nothing happened.
    AlreadyLoaded,
}

/// The "load module by path" capability.
///
/// A resolver hands the first existing candidate to its loader. Whatever the
/// loader does with the file (evaluate it, register its contents, record it)
/// is what makes the requested class defined for the host.
pub trait ModuleLoader {
    fn load(&mut self, path: &Path) -> Result<LoadOutcome, SourceError>;
}

impl<L: ModuleLoader + ?Sized> ModuleLoader for Box<L> {
    fn load(&mut self, path: &Path) -> Result<LoadOutcome, SourceError> {
        (**self).load(path)
    }
}

/// Default loader: reads each file at most once.
///
/// Files are keyed by canonical path, so `includes/./class-fees.php` and
/// `includes/class-fees.php` count as the same file.
#[derive(Debug, Default)]
pub struct IncludeOnce {
    included: FxHashSet<PathBuf>,
    files: Vec<SourceFile>,
}

impl IncludeOnce {
    pub fn new() -> Self {
        Self::default()
    }

    /// Files loaded so far, in load order.
    pub fn files(&self) -> &[SourceFile] {
        &self.files
    }

    pub fn is_loaded(&self, path: &Path) -> bool {
        self.included.contains(&include_key(path))
    }
}

impl ModuleLoader for IncludeOnce {
    fn load(&mut self, path: &Path) -> Result<LoadOutcome, SourceError> {
        let key = include_key(path);
        if self.included.contains(&key) {
            log::trace!("{} already included", path.display());
            return Ok(LoadOutcome::AlreadyLoaded);
        }

        let bytes = fs::read(path).map_err(|err| SourceError::Read {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?;
        let contents = String::from_utf8(bytes)
            .map_err(|_| SourceError::InvalidUtf8(path.to_path_buf()))?;

        self.files.push(SourceFile::new(path.to_string_lossy().into_owned(), contents));
        self.included.insert(key);
        Ok(LoadOutcome::Loaded)
    }
}

fn include_key(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}
