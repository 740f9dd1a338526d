use crate::ConfigError;
use fxhash::FxHashMap;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::{fs, path::{Path, PathBuf}};

/// File name looked up when [`AutoloadConfig::load`] is given a directory.
pub const DEFAULT_CONFIG_NAME: &str = "autoload.toml";

/// Construction-time configuration for a resolver.
///
/// ```toml
/// [autoload]
/// root_namespace = "EDD"
/// extension = "php"
/// namespace_match = "legacy"
/// misnamed = ["class-misc"]
///
/// [roots]
/// "EDD" = "includes"
///
/// [static_map]
/// "EDD_Fees" = "includes/class-fees.php"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AutoloadConfig {
    /// Resolver settings
    #[serde(default)]
    pub autoload: AutoloadSettings,

    /// Namespace prefix to root directory, in registration order
    #[serde(default)]
    pub roots: IndexMap<String, PathBuf>,

    /// Class names whose file is known up front
    #[serde(default)]
    pub static_map: FxHashMap<String, PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AutoloadSettings {
    /// Fixed root namespace token; the first root prefix when absent
    #[serde(default)]
    pub root_namespace: Option<String>,

    /// Extension appended to every candidate file name, without the dot
    #[serde(default = "default_extension")]
    pub extension: String,

    #[serde(default)]
    pub namespace_match: NamespaceMatch,

    /// Bare file names tried for every class after the derived names
    #[serde(default)]
    pub misnamed: Vec<String>,
}

impl Default for AutoloadSettings {
    fn default() -> Self {
        Self {
            root_namespace: None,
            extension: default_extension(),
            namespace_match: NamespaceMatch::default(),
            misnamed: vec![],
        }
    }
}

pub fn default_extension() -> String {
    "php".to_string()
}

/// How a class name is qualified with the root namespace token before it is
/// tested against each namespace prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NamespaceMatch {
    /// The token is prepended before every root is tested, whatever the class
    /// name looks like, and the prefixes accumulate from root to root.
    #[default]
    Legacy,
    /// The token is prepended once, and only to names without a `\` separator.
    Unqualified,
}

impl AutoloadConfig {
    /// Read a configuration file.
    ///
    /// `path` is either the file itself or a directory holding
    /// [`DEFAULT_CONFIG_NAME`]. Relative root and static-map paths are
    /// resolved against the directory of the file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let file = if path.is_dir() {
            path.join(DEFAULT_CONFIG_NAME)
        } else {
            path.to_path_buf()
        };

        if !file.is_file() {
            return Err(ConfigError::NotFound(file));
        }

        let content = fs::read_to_string(&file).map_err(|err| ConfigError::Read {
            path: file.clone(),
            reason: err.to_string(),
        })?;

        let mut config = Self::parse(&content)?;
        config.rebase(file.parent().unwrap_or_else(|| Path::new(".")));

        log::debug!(
            "Loaded autoload configuration from {} ({} roots, {} static entries)",
            file.display(),
            config.roots.len(),
            config.static_map.len()
        );
        Ok(config)
    }

    /// Parse configuration text; paths are kept exactly as written.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|err| ConfigError::from_toml(err, content))
    }

    fn rebase(&mut self, base: &Path) {
        for root in self.roots.values_mut() {
            if root.is_relative() {
                *root = base.join(&*root);
            }
        }
        for target in self.static_map.values_mut() {
            if target.is_relative() {
                *target = base.join(&*target);
            }
        }
    }
}
