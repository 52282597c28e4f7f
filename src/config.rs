use crate::error::{FixupError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_EXTENSION: &str = "dart";

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

/// What a fix runs over: an explicit file list, or every file with a given
/// extension below a root directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Targets {
    Files {
        files: Vec<PathBuf>,
    },
    Tree {
        root: PathBuf,
        #[serde(default = "default_extension")]
        extension: String,
    },
}

impl Targets {
    pub fn files<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Targets::Files {
            files: paths.into_iter().map(Into::into).collect(),
        }
    }

    pub fn tree(root: impl Into<PathBuf>, extension: &str) -> Self {
        Targets::Tree {
            root: root.into(),
            extension: extension.trim_start_matches('.').to_string(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        match self {
            Targets::Files { .. } => Ok(()),
            Targets::Tree { root, extension } => {
                if root.as_os_str().is_empty() {
                    return Err(FixupError::InvalidTargets("empty root directory".into()));
                }
                if extension.trim_start_matches('.').is_empty() {
                    return Err(FixupError::InvalidTargets(format!(
                        "empty extension for root {}",
                        root.display()
                    )));
                }
                Ok(())
            }
        }
    }
}

/// Per-fix target overrides read from a JSON file:
///
/// ```json
/// { "base_dir": "../app", "fixes": { "lucide-icons": { "root": "lib" } } }
/// ```
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub base_dir: Option<PathBuf>,
    #[serde(default)]
    pub fixes: BTreeMap<String, Targets>,
}

impl ConfigFile {
    pub fn parse(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Load a config file. A relative `base_dir` is taken relative to the
    /// directory holding the file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| FixupError::io(path, e))?;
        let mut config = Self::parse(&text).map_err(|source| FixupError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;

        if let Some(base) = config.base_dir.take() {
            let resolved = match path.parent() {
                Some(parent) if base.is_relative() => parent.join(base),
                _ => base,
            };
            config.base_dir = Some(resolved);
        }

        for targets in config.fixes.values() {
            targets.validate()?;
        }
        log::debug!("loaded config {} ({} overrides)", path.display(), config.fixes.len());
        Ok(config)
    }

    /// Reject overrides naming a fix that `known` does not recognise.
    pub fn check_names(&self, known: impl Fn(&str) -> bool) -> Result<()> {
        match self.fixes.keys().find(|name| !known(name)) {
            Some(name) => Err(FixupError::UnknownFix(name.clone())),
            None => Ok(()),
        }
    }

    pub fn targets_for(&self, fix: &str) -> Option<&Targets> {
        self.fixes.get(fix)
    }
}

/// Everything the runner needs for one invocation.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub base_dir: PathBuf,
    pub targets: Targets,
    pub dry_run: bool,
}

impl RunConfig {
    pub fn new(targets: Targets) -> Self {
        Self {
            base_dir: PathBuf::from("."),
            targets,
            dry_run: false,
        }
    }

    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = base_dir.into();
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Absolute-or-base-relative form of a target path.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }
}

/// Pick the targets for a run: command line first, then the config file,
/// then the fix's built-in list.
pub fn select_targets(
    fix: &str,
    cli: Option<Targets>,
    file: Option<&ConfigFile>,
    default: Targets,
) -> Targets {
    cli.or_else(|| file.and_then(|f| f.targets_for(fix).cloned()))
        .unwrap_or(default)
}
