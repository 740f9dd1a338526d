use std::{collections::HashMap, fs, path::{Path, PathBuf}};
use tempfile::TempDir;
use autoload_source::{
    file_exists, scan_directories, AutoloadConfig, ConfigError, IncludeOnce, LoadOutcome,
    ModuleLoader, SourceError,
};

/// Relative file paths mapped to file contents.
type TestTree = HashMap<&'static str, &'static str>;

/// Writes the tree into a fresh temporary directory.
fn setup_tree(tree: TestTree) -> TempDir {
    let _ = env_logger::builder().is_test(true).try_init();
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

fn relative(root: &Path, dirs: &[PathBuf]) -> Vec<String> {
    dirs.iter()
        .map(|dir| {
            dir.strip_prefix(root)
                .map(|rest| rest.to_string_lossy().replace('\\', "/"))
                .unwrap_or_else(|_| dir.to_string_lossy().into_owned())
        })
        .collect()
}

#[test]
fn test_scan_lists_root_first_then_preorder() {
    let dir = setup_tree(TestTree::from([
        ("b/inner/class-b.php", ""),
        ("a/class-a.php", ""),
        ("a/deep/er/class-x.php", ""),
        ("class-root.php", ""),
    ]));

    let dirs = scan_directories(dir.path());
    assert_eq!(dirs[0], dir.path());
    assert_eq!(
        relative(dir.path(), &dirs),
        vec!["", "a", "a/deep", "a/deep/er", "b", "b/inner"]
    );
}

#[test]
fn test_scan_normalizes_dot_root() {
    let dir = setup_tree(TestTree::from([("sub/class-a.php", "")]));
    let dotted = dir.path().join(".");

    let dirs = scan_directories(&dotted);
    assert_eq!(dirs[0], dir.path());
    assert_eq!(dirs.len(), 2);
}

#[test]
fn test_scan_missing_root_is_empty() {
    let dir = TempDir::new().unwrap();
    assert!(scan_directories(&dir.path().join("nope")).is_empty());
}

#[test]
fn test_scan_file_root_is_empty() {
    let dir = setup_tree(TestTree::from([("class-a.php", "")]));
    assert!(scan_directories(&dir.path().join("class-a.php")).is_empty());
}

#[cfg(unix)]
#[test]
fn test_scan_survives_symlink_loop() {
    let dir = setup_tree(TestTree::from([("a/class-a.php", "")]));
    std::os::unix::fs::symlink(dir.path(), dir.path().join("a/loop")).unwrap();

    let dirs = scan_directories(dir.path());
    assert_eq!(relative(dir.path(), &dirs), vec!["", "a"]);
}

#[test]
fn test_file_exists_only_for_files() {
    let dir = setup_tree(TestTree::from([("sub/class-a.php", "")]));
    assert!(file_exists(&dir.path().join("sub/class-a.php")));
    assert!(!file_exists(&dir.path().join("sub")));
    assert!(!file_exists(&dir.path().join("sub/class-b.php")));
}

#[test]
fn test_include_once_loads_each_file_once() {
    let dir = setup_tree(TestTree::from([("sub/class-a.php", "<?php class A {}")]));
    let path = dir.path().join("sub/class-a.php");
    let mut loader = IncludeOnce::new();

    assert_eq!(loader.load(&path), Ok(LoadOutcome::Loaded));
    assert_eq!(loader.load(&path), Ok(LoadOutcome::AlreadyLoaded));
    assert_eq!(
        loader.load(&dir.path().join("sub/./class-a.php")),
        Ok(LoadOutcome::AlreadyLoaded)
    );

    assert_eq!(loader.files().len(), 1);
    assert_eq!(loader.files()[0].contents(), "<?php class A {}");
    assert!(loader.is_loaded(&path));
}

#[test]
fn test_include_once_reports_unreadable_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.php");
    let mut loader = IncludeOnce::new();

    assert!(matches!(loader.load(&path), Err(SourceError::Read { .. })));
    assert!(loader.files().is_empty());
    assert!(!loader.is_loaded(&path));
}

#[test]
fn test_include_once_rejects_binary_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("blob.php");
    fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();
    let mut loader = IncludeOnce::new();

    assert_eq!(loader.load(&path), Err(SourceError::InvalidUtf8(path.clone())));
}

#[test]
fn test_load_config_from_directory_rebases_paths() {
    let dir = setup_tree(TestTree::from([(
        "autoload.toml",
        r#"
[autoload]
misnamed = ["class-misc"]

[roots]
"EDD" = "includes"
"Abs" = "/opt/abs"

[static_map]
"EDD_Fees" = "includes/fees.php"
"#,
    )]));

    let config = AutoloadConfig::load(dir.path()).unwrap();
    assert_eq!(config.roots["EDD"], dir.path().join("includes"));
    assert_eq!(config.roots["Abs"], PathBuf::from("/opt/abs"));
    assert_eq!(config.static_map["EDD_Fees"], dir.path().join("includes/fees.php"));
    assert_eq!(config.autoload.misnamed, vec!["class-misc"]);
}

#[test]
fn test_load_config_from_file_path() {
    let dir = setup_tree(TestTree::from([("conf/custom.toml", "[roots]\n\"App\" = \"src\"\n")]));

    let config = AutoloadConfig::load(&dir.path().join("conf/custom.toml")).unwrap();
    assert_eq!(config.roots["App"], dir.path().join("conf/src"));
}

#[test]
fn test_load_config_not_found() {
    let dir = TempDir::new().unwrap();
    match AutoloadConfig::load(dir.path()) {
        Err(ConfigError::NotFound(path)) => assert_eq!(path, dir.path().join("autoload.toml")),
        other => panic!("expected NotFound, got {:?}", other),
    }
}
