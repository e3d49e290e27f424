use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use crate::rules::{DEFAULT_MIN_LENGTH, Rule, RuleSet};
use crate::wordnet;

pub const DEFAULT_INPUT: &str = "words.txt";
pub const DEFAULT_OUTPUT: &str = "words_final.txt";

/// One `config.toml` file. Every key is optional; unset keys fall through to
/// the next layer.
///
/// ```toml
/// input = "words.txt"
/// output = "words_final.txt"
/// wordnet = "/usr/share/wordnet"
/// min_length = 4
/// rules = ["letters_only", "lowercase_only", "must_be_base_form", "known_word"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub wordnet: Option<PathBuf>,
    pub min_length: Option<usize>,
    pub rules: Option<Vec<Rule>>,
}

impl ConfigFile {
    /// Try to load a config file from `path`. Returns `Ok(None)` if the file
    /// does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, is not valid
    /// TOML, or names an unknown key or rule.
    pub fn load(path: &Path) -> anyhow::Result<Option<Self>> {
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(anyhow::Error::new(e)
                    .context(format!("failed to read config file: {}", path.display())));
            }
        };
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))?;
        Ok(Some(config))
    }

    /// Merge field by field; values in `self` win over `fallback`.
    #[must_use]
    pub fn or(self, fallback: Self) -> Self {
        Self {
            input: self.input.or(fallback.input),
            output: self.output.or(fallback.output),
            wordnet: self.wordnet.or(fallback.wordnet),
            min_length: self.min_length.or(fallback.min_length),
            rules: self.rules.or(fallback.rules),
        }
    }
}

/// Config file locations in priority order:
/// 1. `.wordsieve/config.toml` (project-local, resolved from CWD)
/// 2. `{config_dir}/wordsieve/config.toml` (user-level, platform-native)
pub fn default_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(".wordsieve/config.toml"));
    }
    if let Some(config) = dirs::config_dir() {
        paths.push(config.join("wordsieve/config.toml"));
    }
    paths
}

/// A config file that was found, with where it came from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub path: PathBuf,
    pub config: ConfigFile,
}

/// Load config layers. An explicit path must exist and is the only layer;
/// otherwise every existing file in `search_paths` is loaded, highest
/// priority first.
///
/// # Errors
///
/// Returns an error if the explicit path is missing or any file fails to load.
pub fn load_layers(
    explicit: Option<&Path>,
    search_paths: &[PathBuf],
) -> anyhow::Result<Vec<LoadedConfig>> {
    if let Some(path) = explicit {
        let config = ConfigFile::load(path)?
            .ok_or_else(|| anyhow::anyhow!("config file not found: {}", path.display()))?;
        return Ok(vec![LoadedConfig {
            path: path.to_path_buf(),
            config,
        }]);
    }

    let mut layers = Vec::new();
    for path in search_paths {
        if let Some(config) = ConfigFile::load(path)? {
            layers.push(LoadedConfig {
                path: path.clone(),
                config,
            });
        }
    }
    Ok(layers)
}

/// Values supplied on the command line (or via `WORDSIEVE_WORDNET`). They win
/// over every config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub wordnet: Option<PathBuf>,
    pub min_length: Option<usize>,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub input: PathBuf,
    pub output: PathBuf,
    /// WordNet directory named explicitly by a flag, the environment or a
    /// config file. `None` means "search the default locations".
    pub wordnet: Option<PathBuf>,
    pub min_length: usize,
    pub rules: Vec<Rule>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            wordnet: None,
            min_length: DEFAULT_MIN_LENGTH,
            rules: Rule::DEFAULT_ORDER.to_vec(),
        }
    }
}

impl Settings {
    /// Priority: overrides → config layers (in order) → defaults.
    pub fn resolve(overrides: &Overrides, layers: &[LoadedConfig]) -> Self {
        let merged = layers
            .iter()
            .map(|l| l.config.clone())
            .fold(ConfigFile::default(), ConfigFile::or);
        let defaults = Self::default();
        Self {
            input: overrides
                .input
                .clone()
                .or(merged.input)
                .unwrap_or(defaults.input),
            output: overrides
                .output
                .clone()
                .or(merged.output)
                .unwrap_or(defaults.output),
            wordnet: overrides.wordnet.clone().or(merged.wordnet),
            min_length: overrides
                .min_length
                .or(merged.min_length)
                .unwrap_or(defaults.min_length),
            rules: merged.rules.unwrap_or(defaults.rules),
        }
    }

    /// # Errors
    ///
    /// Returns an error if the rule set cannot be built.
    pub fn rule_set(&self) -> anyhow::Result<RuleSet> {
        RuleSet::new(self.rules.clone(), self.min_length)
    }

    /// The WordNet directory to open: the explicit one if set, otherwise the
    /// first default location that holds a WordNet index.
    ///
    /// # Errors
    ///
    /// Returns an error if no explicit directory is set and none of the
    /// default locations has a WordNet index.
    pub fn wordnet_dir(&self) -> anyhow::Result<PathBuf> {
        if let Some(dir) = &self.wordnet {
            return Ok(dir.clone());
        }
        wordnet::find_dict_dir(&wordnet::default_search_dirs()).ok_or_else(|| {
            anyhow::anyhow!(
                "WordNet dictionary not found; pass --wordnet <DIR> or set {}",
                wordnet::WORDNET_ENV
            )
        })
    }
}
