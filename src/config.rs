use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Deserialize;

use crate::classify::DEFAULT_MIN_OCCURRENCES;

/// Root configuration structure, deserialized from `.layout-checkr/config.toml`.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Where the listing cache lives.
    #[serde(default)]
    pub corpus: CorpusConfig,
    /// Classification knobs.
    #[serde(default)]
    pub classify: ClassifyConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct CorpusConfig {
    /// Corpus root, resolved against the path given on the command
    /// line. Unset means the path itself is the root.
    #[serde(default)]
    pub root: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
pub struct ClassifyConfig {
    /// Names seen fewer times than this across the corpus are treated
    /// as noise and excluded from the grouped report.
    #[serde(default = "default_min_occurrences")]
    pub min_occurrences: u64,
}

fn default_min_occurrences() -> u64 {
    DEFAULT_MIN_OCCURRENCES
}

impl Default for ClassifyConfig {
    fn default() -> Self {
        ClassifyConfig {
            min_occurrences: default_min_occurrences(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            corpus: CorpusConfig::default(),
            classify: ClassifyConfig::default(),
        }
    }
}

impl Config {
    /// Resolve the corpus root against the path given on the command
    /// line. An absolute configured root stands on its own.
    pub fn corpus_root(&self, path: &Path) -> PathBuf {
        match &self.corpus.root {
            Some(root) => path.join(root),
            None => path.to_path_buf(),
        }
    }
}

/// Load the configuration, searching in order:
///
/// 1. `config_override`, the path passed via `--config`
/// 2. `<path>/.layout-checkr/config.toml`
/// 3. `~/.config/layout-checkr/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(path: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(p) = config_override {
        let content = std::fs::read_to_string(p)?;
        return Ok(toml::from_str(&content)?);
    }

    let project_config = path.join(".layout-checkr").join("config.toml");
    if project_config.exists() {
        let content = std::fs::read_to_string(&project_config)?;
        return Ok(toml::from_str(&content)?);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home
            .join(".config")
            .join("layout-checkr")
            .join("config.toml");
        if home_config.exists() {
            let content = std::fs::read_to_string(&home_config)?;
            return Ok(toml::from_str(&content)?);
        }
    }

    Ok(Config::default())
}
