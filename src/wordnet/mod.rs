mod morphy;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::pos::Pos;

/// Environment variable that points at a WordNet `dict/` directory.
pub const WORDNET_ENV: &str = "WORDSIEVE_WORDNET";

/// In-memory view of a WordNet `dict/` directory: the lemma index and the
/// irregular-form exception lists for each part of speech.
#[derive(Debug, Default, Clone)]
pub struct WordNet {
    /// lemma → `tagsense_cnt`, per part of speech.
    index: HashMap<Pos, HashMap<String, u32>>,
    /// inflected form → base forms, per part of speech.
    exceptions: HashMap<Pos, HashMap<String, Vec<String>>>,
}

impl WordNet {
    /// Load `index.{noun,verb,adj,adv}` and the matching `*.exc` files from `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if an index file is missing or unreadable. Missing
    /// exception files are treated as empty.
    pub fn open(dir: &Path) -> anyhow::Result<Self> {
        let mut wordnet = Self::default();
        for pos in Pos::ALL {
            let index_path = dir.join(format!("index.{}", pos.file_suffix()));
            let content = std::fs::read_to_string(&index_path).with_context(|| {
                format!("failed to read WordNet index: {}", index_path.display())
            })?;
            wordnet.load_index(pos, &content);

            let exc_path = dir.join(format!("{}.exc", pos.file_suffix()));
            match std::fs::read_to_string(&exc_path) {
                Ok(content) => wordnet.load_exceptions(pos, &content),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => {
                    return Err(anyhow::Error::new(e).context(format!(
                        "failed to read WordNet exceptions: {}",
                        exc_path.display()
                    )));
                }
            }
        }
        Ok(wordnet)
    }

    /// Parse the lines of an `index.*` file into the lemma table for `pos`.
    ///
    /// License header lines (leading space) and blank lines are skipped. Lines
    /// whose counters cannot be read still register the lemma with a zero score.
    pub fn load_index(&mut self, pos: Pos, content: &str) {
        for line in content.lines() {
            if line.starts_with(' ') || line.trim().is_empty() {
                continue;
            }
            let fields: Vec<&str> = line.split_whitespace().collect();
            let tagsense = parse_tagsense(&fields).unwrap_or(0);
            self.insert_lemma(pos, fields[0], tagsense);
        }
    }

    /// Parse the lines of a `*.exc` file into the exception table for `pos`.
    pub fn load_exceptions(&mut self, pos: Pos, content: &str) {
        for line in content.lines() {
            let mut words = line.split_whitespace();
            let Some(inflected) = words.next() else {
                continue;
            };
            let bases: Vec<String> = words.map(ToString::to_string).collect();
            if bases.is_empty() {
                continue;
            }
            self.insert_exception(pos, inflected, bases);
        }
    }

    pub fn insert_lemma(&mut self, pos: Pos, lemma: &str, tagsense: u32) {
        self.index
            .entry(pos)
            .or_default()
            .insert(lemma.to_string(), tagsense);
    }

    pub fn insert_exception(&mut self, pos: Pos, inflected: &str, bases: Vec<String>) {
        self.exceptions
            .entry(pos)
            .or_default()
            .insert(inflected.to_string(), bases);
    }

    /// True if `lemma` is listed in the index for `pos`.
    pub fn contains(&self, lemma: &str, pos: Pos) -> bool {
        self.index.get(&pos).is_some_and(|m| m.contains_key(lemma))
    }

    /// Sense-tagged frequency of `lemma` in `pos`, if the lemma is indexed.
    pub fn tagsense_count(&self, lemma: &str, pos: Pos) -> Option<u32> {
        self.index.get(&pos)?.get(lemma).copied()
    }

    /// Irregular base forms listed for `form` in `pos`.
    pub fn exceptions(&self, form: &str, pos: Pos) -> Option<&[String]> {
        self.exceptions.get(&pos)?.get(form).map(Vec::as_slice)
    }

    /// Number of indexed lemmas across all parts of speech.
    pub fn lemma_count(&self) -> usize {
        self.index.values().map(HashMap::len).sum()
    }

    /// Base form of `word` in `pos`: the shortest candidate found by
    /// [`WordNet::morphy`], or `word` unchanged when there is none.
    pub fn lemmatize(&self, word: &str, pos: Pos) -> String {
        self.morphy(word, pos)
            .into_iter()
            .min_by_key(|lemma| lemma.chars().count())
            .unwrap_or_else(|| word.to_string())
    }
}

/// Read `tagsense_cnt` from the fields of an index line:
/// `lemma pos synset_cnt p_cnt [ptr_symbol...] sense_cnt tagsense_cnt ...`.
fn parse_tagsense(fields: &[&str]) -> Option<u32> {
    let p_cnt: usize = fields.get(3)?.parse().ok()?;
    fields.get(p_cnt.checked_add(5)?)?.parse().ok()
}

/// Conventional WordNet locations, in lookup order.
///
/// 1. `{data_dir}/wordsieve/wordnet`
/// 2. `{home}/nltk_data/corpora/wordnet` (an existing NLTK download)
/// 3. `/usr/share/nltk_data/corpora/wordnet`
/// 4. `/usr/share/wordnet`
pub fn default_search_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    if let Some(data) = dirs::data_dir() {
        dirs.push(data.join("wordsieve/wordnet"));
    }
    if let Some(home) = dirs::home_dir() {
        dirs.push(home.join("nltk_data/corpora/wordnet"));
    }
    dirs.push(PathBuf::from("/usr/share/nltk_data/corpora/wordnet"));
    dirs.push(PathBuf::from("/usr/share/wordnet"));
    dirs
}

/// First directory in `candidates` that holds a WordNet noun index.
pub fn find_dict_dir(candidates: &[PathBuf]) -> Option<PathBuf> {
    candidates
        .iter()
        .find(|dir| dir.join("index.noun").is_file())
        .cloned()
}
