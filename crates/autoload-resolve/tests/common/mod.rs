#![allow(dead_code)]

use std::{cell::RefCell, collections::HashMap, fs, path::{Path, PathBuf}, rc::Rc};
use tempfile::TempDir;
use autoload_resolve::{LoadOutcome, ModuleLoader, SourceError};

/// Relative file paths mapped to file contents.
pub type TestTree = HashMap<&'static str, &'static str>;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Writes the tree into a fresh temporary directory.
///
/// # Panics
/// Panics if the temporary directory or file creation fails.
pub fn setup_tree(tree: TestTree) -> TempDir {
    init_logging();
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    for (relative_path, content) in tree {
        let full_path = temp_dir.path().join(relative_path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)
                .unwrap_or_else(|_| panic!("Failed to create directory: {:?}", parent));
        }
        fs::write(&full_path, content)
            .unwrap_or_else(|_| panic!("Failed to write file: {:?}", full_path));
    }
    temp_dir
}

/// Path of `relative` inside `root`, spelled the way the resolver builds it.
pub fn candidate(root: &Path, relative: &str) -> PathBuf {
    let mut path = root.as_os_str().to_os_string();
    for segment in relative.split('/') {
        path.push(std::path::MAIN_SEPARATOR.to_string());
        path.push(segment);
    }
    PathBuf::from(path)
}

/// Loader that records every path it is given and loads each only once.
#[derive(Clone, Default)]
pub struct RecordingLoader {
    pub loaded: Rc<RefCell<Vec<PathBuf>>>,
}

impl ModuleLoader for RecordingLoader {
    fn load(&mut self, path: &Path) -> Result<LoadOutcome, SourceError> {
        let mut loaded = self.loaded.borrow_mut();
        if loaded.iter().any(|seen| seen == path) {
            return Ok(LoadOutcome::AlreadyLoaded);
        }
        loaded.push(path.to_path_buf());
        Ok(LoadOutcome::Loaded)
    }
}
