use std::fmt;

use serde::Serialize;

/// Lexical category used for lemma lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Pos {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

impl Pos {
    /// All categories, in tie-break order for tagging.
    pub const ALL: [Self; 4] = [Self::Noun, Self::Verb, Self::Adjective, Self::Adverb];

    /// Suffix used by the WordNet `index.*` and `*.exc` file names.
    pub const fn file_suffix(self) -> &'static str {
        match self {
            Self::Noun => "noun",
            Self::Verb => "verb",
            Self::Adjective => "adj",
            Self::Adverb => "adv",
        }
    }

    /// Penn tag for a word that is already in base form.
    pub const fn base_tag(self) -> &'static str {
        match self {
            Self::Noun => "NN",
            Self::Verb => "VB",
            Self::Adjective => "JJ",
            Self::Adverb => "RB",
        }
    }
}

/// A Penn-Treebank style part-of-speech tag (`NN`, `VBG`, `RB`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PennTag(String);

impl PennTag {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Map the tag's first character to a lemma category: `J` adjective,
    /// `V` verb, `N` noun, `R` adverb. Anything else is treated as a noun.
    pub fn lemma_pos(&self) -> Pos {
        match self.0.chars().next().map(|c| c.to_ascii_uppercase()) {
            Some('J') => Pos::Adjective,
            Some('V') => Pos::Verb,
            Some('R') => Pos::Adverb,
            _ => Pos::Noun,
        }
    }

    pub fn is_adverb(&self) -> bool {
        self.0.starts_with('R')
    }
}

impl fmt::Display for PennTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
