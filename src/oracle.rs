use std::path::Path;

use crate::pos::{PennTag, Pos};
use crate::tagger::LexiconTagger;
use crate::wordnet::WordNet;

/// Lexical knowledge the rules consult: tagging and lemma lookup.
pub trait Oracle {
    /// Part-of-speech tag for an isolated word.
    fn tag(&self, word: &str) -> PennTag;

    /// Dictionary base form of `word` read as `pos`. Unknown words come back
    /// unchanged.
    fn lemmatize(&self, word: &str, pos: Pos) -> String;

    /// True if the lexicon has the word, or a base form of it, in any category.
    fn is_known(&self, word: &str) -> bool;

    /// Base form of `word`, reading it in the category its tag implies.
    fn lemma(&self, word: &str) -> String {
        self.lemmatize(word, self.tag(word).lemma_pos())
    }
}

/// [`Oracle`] backed by a WordNet database.
pub struct WordNetOracle {
    wordnet: WordNet,
}

impl WordNetOracle {
    pub const fn new(wordnet: WordNet) -> Self {
        Self { wordnet }
    }

    /// Load the WordNet database in `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the WordNet index files cannot be read.
    pub fn open(dir: &Path) -> anyhow::Result<Self> {
        Ok(Self::new(WordNet::open(dir)?))
    }

    pub const fn wordnet(&self) -> &WordNet {
        &self.wordnet
    }
}

impl Oracle for WordNetOracle {
    fn tag(&self, word: &str) -> PennTag {
        LexiconTagger::new(&self.wordnet).tag(word)
    }

    fn lemmatize(&self, word: &str, pos: Pos) -> String {
        self.wordnet.lemmatize(word, pos)
    }

    fn is_known(&self, word: &str) -> bool {
        Pos::ALL
            .iter()
            .any(|&pos| !self.wordnet.morphy(word, pos).is_empty())
    }
}
