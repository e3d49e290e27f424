use std::fmt;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::oracle::Oracle;

/// Minimum word length used when nothing else is configured.
pub const DEFAULT_MIN_LENGTH: usize = 3;

/// A single accept/reject predicate over a word.
///
/// Variants are listed in the default evaluation order: cheap textual checks
/// first, lexicon lookups after.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// Only `a`–`z`.
    LettersOnly,
    /// Has a cased character and no uppercase ones.
    LowercaseOnly,
    /// Equal to its own lemma.
    MustBeBaseForm,
    /// Not tagged as an adverb.
    NotAdverb,
    /// At least `min_length` characters.
    MinimumLength,
    /// Present in the lexicon. Never part of the default list.
    KnownWord,
}

impl Rule {
    pub const DEFAULT_ORDER: [Self; 5] = [
        Self::LettersOnly,
        Self::LowercaseOnly,
        Self::MustBeBaseForm,
        Self::NotAdverb,
        Self::MinimumLength,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::LettersOnly => "letters_only",
            Self::LowercaseOnly => "lowercase_only",
            Self::MustBeBaseForm => "must_be_base_form",
            Self::NotAdverb => "not_adverb",
            Self::MinimumLength => "minimum_length",
            Self::KnownWord => "known_word",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::LettersOnly => "word matches [a-z]+",
            Self::LowercaseOnly => "word has a cased character and no uppercase ones",
            Self::MustBeBaseForm => "word equals its own lemma",
            Self::NotAdverb => "word is not tagged as an adverb",
            Self::MinimumLength => "word is at least the minimum length",
            Self::KnownWord => "word is in the lexicon",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of running a word through a [`RuleSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "verdict", content = "rule")]
pub enum Verdict {
    Accepted,
    /// The first rule that rejected the word.
    Rejected(Rule),
}

impl Verdict {
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// An ordered list of rules; a word is accepted only if every rule accepts it.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<Rule>,
    min_length: usize,
    letters: Regex,
}

impl RuleSet {
    /// # Errors
    ///
    /// Returns an error if the letters pattern fails to compile.
    pub fn new(rules: Vec<Rule>, min_length: usize) -> anyhow::Result<Self> {
        Ok(Self {
            rules,
            min_length,
            letters: Regex::new("^[a-z]+$")?,
        })
    }

    /// The default rules with the default minimum length.
    ///
    /// # Errors
    ///
    /// Returns an error if the letters pattern fails to compile.
    pub fn standard() -> anyhow::Result<Self> {
        Self::new(Rule::DEFAULT_ORDER.to_vec(), DEFAULT_MIN_LENGTH)
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub const fn min_length(&self) -> usize {
        self.min_length
    }

    /// Evaluate the rules in order, stopping at the first rejection.
    pub fn evaluate(&self, word: &str, oracle: &dyn Oracle) -> Verdict {
        self.rules
            .iter()
            .find(|&&rule| !self.check(rule, word, oracle))
            .map_or(Verdict::Accepted, |&rule| Verdict::Rejected(rule))
    }

    pub fn accepts(&self, word: &str, oracle: &dyn Oracle) -> bool {
        self.evaluate(word, oracle).is_accepted()
    }

    /// Evaluate one rule in isolation.
    pub fn check(&self, rule: Rule, word: &str, oracle: &dyn Oracle) -> bool {
        match rule {
            Rule::LettersOnly => self.letters.is_match(word),
            Rule::LowercaseOnly => is_lowercase(word),
            Rule::MustBeBaseForm => word == oracle.lemma(word),
            Rule::NotAdverb => !oracle.tag(word).is_adverb(),
            Rule::MinimumLength => word.chars().count() >= self.min_length,
            Rule::KnownWord => oracle.is_known(word),
        }
    }
}

/// At least one cased character, none of them uppercase.
fn is_lowercase(word: &str) -> bool {
    let mut cased = false;
    for c in word.chars() {
        if c.is_uppercase() {
            return false;
        }
        cased |= c.is_lowercase();
    }
    cased
}

#[cfg(test)]
mod tests;
