//! Candidate file generation for a class name.
//!
//! Everything here is pure string and path manipulation; no filesystem access.
//! The order of the produced candidates is the probing priority.

use std::path::{PathBuf, MAIN_SEPARATOR};
use autoload_source::join_candidate;
use crate::namespace::NAMESPACE_SEPARATOR;

/// Relative path derived mechanically from the class name.
///
/// Drops `prefix` and the single character after it, then turns every
/// namespace separator into a directory separator. `App\Admin\Notices` under
/// prefix `App` gives `Admin/Notices`.
pub fn psr4_path(class: &str, prefix: &str) -> String {
    let rest = class.get(prefix.len()..).unwrap_or("");
    let mut chars = rest.chars();
    chars.next();
    chars.as_str().replace(NAMESPACE_SEPARATOR, &MAIN_SEPARATOR.to_string())
}

/// The two conventional file names for a class.
///
/// `EDD\EDD_Discount` with root token `EDD` gives `class-discount` and
/// `class-edd-discount`.
pub fn alternative_names(class: &str, root_token: &str) -> [String; 2] {
    let name = if root_token.is_empty() {
        class.to_string()
    } else {
        class.replace(&format!("{}{}", root_token, NAMESPACE_SEPARATOR), "")
    };
    let name = name.replace('_', "-").to_ascii_lowercase();
    let name = name.strip_prefix("edd-").unwrap_or(&name);

    [format!("class-{}", name), format!("class-edd-{}", name)]
}

/// Final file name list: canonical path, then alternatives, then misnamed entries.
pub fn file_names(psr4: String, alternatives: [String; 2], misnamed: &[String]) -> Vec<String> {
    let mut names = Vec::with_capacity(1 + alternatives.len() + misnamed.len());
    names.push(psr4);
    names.extend(alternatives);
    names.extend(misnamed.iter().cloned());
    names
}

/// Cross directories with file names.
///
/// Name-major: the first name is tried in every directory before the second
/// name is tried anywhere.
pub fn candidate_paths(dirs: &[PathBuf], names: &[String], extension: &str) -> Vec<PathBuf> {
    names
        .iter()
        .flat_map(|name| dirs.iter().map(move |dir| join_candidate(dir, name, extension)))
        .collect()
}
