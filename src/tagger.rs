//! Part-of-speech tagging for isolated words, driven by the WordNet lexicon.

use crate::pos::{PennTag, Pos};
use crate::wordnet::WordNet;

/// Suffixes that mark an unknown word as an adjective.
const ADJECTIVE_SUFFIXES: &[&str] = &["ous", "ful", "able", "ible", "ive", "less", "ic", "al"];

/// The most likely reading of a word: its category and lemma.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reading {
    pub pos: Pos,
    pub lemma: String,
    /// `tagsense_cnt` of the lemma in `pos`.
    pub score: u32,
}

/// Tags single words by asking WordNet which category explains them best.
pub struct LexiconTagger<'a> {
    wordnet: &'a WordNet,
}

impl<'a> LexiconTagger<'a> {
    pub const fn new(wordnet: &'a WordNet) -> Self {
        Self { wordnet }
    }

    /// The category whose lemma has the highest sense-tagged frequency.
    /// Ties go to the earlier category in [`Pos::ALL`].
    pub fn best_reading(&self, word: &str) -> Option<Reading> {
        let mut best: Option<Reading> = None;
        for pos in Pos::ALL {
            let Some(lemma) = self
                .wordnet
                .morphy(word, pos)
                .into_iter()
                .min_by_key(|l| l.chars().count())
            else {
                continue;
            };
            let score = self.wordnet.tagsense_count(&lemma, pos).unwrap_or(0);
            if best.as_ref().is_none_or(|b| score > b.score) {
                best = Some(Reading { pos, lemma, score });
            }
        }
        best
    }

    pub fn tag(&self, word: &str) -> PennTag {
        self.best_reading(word).map_or_else(
            || suffix_tag(word),
            |reading| inflected_tag(word, &reading),
        )
    }
}

/// Refine a category into a Penn tag using the word's surface form.
fn inflected_tag(word: &str, reading: &Reading) -> PennTag {
    if word == reading.lemma {
        return PennTag::new(reading.pos.base_tag());
    }
    let tag = match reading.pos {
        Pos::Noun => "NNS",
        Pos::Verb if word.ends_with("ing") => "VBG",
        Pos::Verb if word.ends_with('s') => "VBZ",
        Pos::Verb => "VBD",
        Pos::Adjective if word.ends_with("st") => "JJS",
        Pos::Adjective => "JJR",
        Pos::Adverb if word.ends_with("st") => "RBS",
        Pos::Adverb => "RBR",
    };
    PennTag::new(tag)
}

/// Fallback tag for words the lexicon does not know.
pub fn suffix_tag(word: &str) -> PennTag {
    let tag = if word.ends_with("ly") {
        "RB"
    } else if word.ends_with("ing") {
        "VBG"
    } else if word.ends_with("ed") {
        "VBD"
    } else if ADJECTIVE_SUFFIXES.iter().any(|s| word.ends_with(s)) {
        "JJ"
    } else if word.ends_with('s') && !word.ends_with("ss") {
        "NNS"
    } else {
        "NN"
    };
    PennTag::new(tag)
}
