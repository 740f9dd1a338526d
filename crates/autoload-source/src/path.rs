use std::ffi::OsString;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

/// True only for an existing regular file, following symlinks.
pub fn file_exists(path: &Path) -> bool {
    path.is_file()
}

/// Strip trailing separators and trailing `.` components from a directory path.
///
/// `includes/./` and `includes/.` both render as `includes`. A path that would
/// be emptied entirely (`/`, `.`) is returned unchanged. Interior `.` components
/// and repeated separators collapse as well. Works on path components, so
/// names that are not valid UTF-8 survive untouched.
pub fn normalize_dir(path: &Path) -> PathBuf {
    let trimmed: PathBuf = path.components().collect();
    if trimmed.as_os_str().is_empty() {
        return path.to_path_buf();
    }
    trimmed
}

/// Join `dir`, a file name and an extension by plain concatenation.
///
/// Unlike [`Path::join`], a `name` that starts with a separator never replaces
/// `dir`; the result is always `dir/name.ext`.
pub fn join_candidate(dir: &Path, name: &str, extension: &str) -> PathBuf {
    let mut path = OsString::from(dir.as_os_str());
    path.push(MAIN_SEPARATOR.to_string());
    path.push(name);
    if !extension.is_empty() {
        path.push(".");
        path.push(extension);
    }
    PathBuf::from(path)
}
