#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::cell::RefCell;
use std::collections::HashMap;

use super::*;
use crate::pos::{PennTag, Pos};

/// Oracle with canned answers; records which words were tagged.
#[derive(Default)]
struct StubOracle {
    tags: HashMap<&'static str, &'static str>,
    lemmas: HashMap<&'static str, &'static str>,
    tagged: RefCell<Vec<String>>,
}

impl StubOracle {
    fn with(entries: &[(&'static str, &'static str, &'static str)]) -> Self {
        let mut stub = Self::default();
        for &(word, tag, lemma) in entries {
            stub.tags.insert(word, tag);
            stub.lemmas.insert(word, lemma);
        }
        stub
    }
}

impl Oracle for StubOracle {
    fn tag(&self, word: &str) -> PennTag {
        self.tagged.borrow_mut().push(word.to_string());
        PennTag::new(*self.tags.get(word).unwrap_or(&"NN"))
    }

    fn lemmatize(&self, word: &str, _pos: Pos) -> String {
        self.lemmas
            .get(word)
            .map_or_else(|| word.to_string(), |lemma| (*lemma).to_string())
    }

    fn is_known(&self, word: &str) -> bool {
        self.tags.contains_key(word)
    }
}

fn example_oracle() -> StubOracle {
    StubOracle::with(&[
        ("running", "VBG", "run"),
        ("run", "VB", "run"),
        ("cats", "NNS", "cat"),
        ("cat", "NN", "cat"),
        ("ax", "NN", "ax"),
        ("quickly", "RB", "quickly"),
    ])
}

// --- individual rules ---

#[test]
fn letters_only_requires_ascii_lowercase() {
    let rs = RuleSet::standard().unwrap();
    let o = StubOracle::default();
    assert!(rs.check(Rule::LettersOnly, "cat", &o));
    assert!(!rs.check(Rule::LettersOnly, "Cat", &o));
    assert!(!rs.check(Rule::LettersOnly, "ice-cream", &o));
    assert!(!rs.check(Rule::LettersOnly, "ice cream", &o));
    assert!(!rs.check(Rule::LettersOnly, "café", &o));
    assert!(!rs.check(Rule::LettersOnly, "abc1", &o));
    assert!(!rs.check(Rule::LettersOnly, "", &o));
}

#[test]
fn letters_only_is_anchored_on_both_ends() {
    let rs = RuleSet::standard().unwrap();
    let o = StubOracle::default();
    assert!(!rs.check(Rule::LettersOnly, "cat\n", &o));
    assert!(!rs.check(Rule::LettersOnly, "1cat", &o));
}

#[test]
fn lowercase_only_needs_a_cased_character() {
    let rs = RuleSet::standard().unwrap();
    let o = StubOracle::default();
    assert!(rs.check(Rule::LowercaseOnly, "cat", &o));
    assert!(rs.check(Rule::LowercaseOnly, "café", &o));
    assert!(!rs.check(Rule::LowercaseOnly, "caT", &o));
    assert!(!rs.check(Rule::LowercaseOnly, "123", &o));
    assert!(!rs.check(Rule::LowercaseOnly, "", &o));
}

#[test]
fn must_be_base_form_compares_with_lemma() {
    let rs = RuleSet::standard().unwrap();
    let o = example_oracle();
    assert!(rs.check(Rule::MustBeBaseForm, "run", &o));
    assert!(!rs.check(Rule::MustBeBaseForm, "running", &o));
    assert!(!rs.check(Rule::MustBeBaseForm, "cats", &o));
}

#[test]
fn must_be_base_form_accepts_unknown_words() {
    let rs = RuleSet::standard().unwrap();
    let o = StubOracle::default();
    assert!(rs.check(Rule::MustBeBaseForm, "zorblax", &o));
}

#[test]
fn not_adverb_rejects_r_tags() {
    let rs = RuleSet::standard().unwrap();
    let o = StubOracle::with(&[("quickly", "RB", "quickly"), ("faster", "RBR", "fast")]);
    assert!(!rs.check(Rule::NotAdverb, "quickly", &o));
    assert!(!rs.check(Rule::NotAdverb, "faster", &o));
    assert!(rs.check(Rule::NotAdverb, "cat", &o));
}

#[test]
fn minimum_length_counts_characters() {
    let rs = RuleSet::standard().unwrap();
    let o = StubOracle::default();
    assert!(!rs.check(Rule::MinimumLength, "ax", &o));
    assert!(rs.check(Rule::MinimumLength, "axe", &o));
    assert!(!rs.check(Rule::MinimumLength, "éé", &o));

    let strict = RuleSet::new(vec![Rule::MinimumLength], 5).unwrap();
    assert!(!strict.check(Rule::MinimumLength, "cats", &o));
    assert!(strict.check(Rule::MinimumLength, "horse", &o));
}

#[test]
fn known_word_asks_the_oracle() {
    let rs = RuleSet::standard().unwrap();
    let o = example_oracle();
    assert!(rs.check(Rule::KnownWord, "cat", &o));
    assert!(!rs.check(Rule::KnownWord, "zorblax", &o));
}

#[test]
fn lowercase_description_mentions_cased_requirement() {
    let text = Rule::LowercaseOnly.description();
    assert!(text.contains("cased character"), "{text}");
    assert!(text.contains("no uppercase"), "{text}");
}

// --- evaluation ---

#[test]
fn evaluate_reports_first_failing_rule() {
    let rs = RuleSet::standard().unwrap();
    let o = example_oracle();
    assert_eq!(rs.evaluate("Run", &o), Verdict::Rejected(Rule::LettersOnly));
    assert_eq!(
        rs.evaluate("running", &o),
        Verdict::Rejected(Rule::MustBeBaseForm)
    );
    assert_eq!(rs.evaluate("run", &o), Verdict::Accepted);
    assert_eq!(rs.evaluate("cats", &o), Verdict::Rejected(Rule::MustBeBaseForm));
    assert_eq!(rs.evaluate("cat", &o), Verdict::Accepted);
    assert_eq!(rs.evaluate("ax", &o), Verdict::Rejected(Rule::MinimumLength));
    assert_eq!(rs.evaluate("quickly", &o), Verdict::Rejected(Rule::NotAdverb));
}

#[test]
fn evaluate_short_circuits_before_lexicon_rules() {
    let rs = RuleSet::standard().unwrap();
    let o = example_oracle();
    rs.evaluate("Run", &o);
    rs.evaluate("ice-cream", &o);
    assert!(o.tagged.borrow().is_empty());
}

#[test]
fn empty_rule_list_accepts_everything() {
    let rs = RuleSet::new(Vec::new(), DEFAULT_MIN_LENGTH).unwrap();
    let o = StubOracle::default();
    assert!(rs.accepts("Whatever 123", &o));
}

#[test]
fn rule_order_does_not_change_acceptance() {
    let forward = RuleSet::standard().unwrap();
    let mut reversed_rules = Rule::DEFAULT_ORDER.to_vec();
    reversed_rules.reverse();
    let reversed = RuleSet::new(reversed_rules, DEFAULT_MIN_LENGTH).unwrap();
    let o = example_oracle();
    for word in ["Run", "running", "run", "cats", "cat", "ax", "quickly", "zorblax"] {
        assert_eq!(
            forward.accepts(word, &o),
            reversed.accepts(word, &o),
            "acceptance differs for {word}"
        );
    }
}

// --- naming ---

#[test]
fn rule_names_round_trip_through_serde() {
    for rule in Rule::DEFAULT_ORDER.into_iter().chain([Rule::KnownWord]) {
        let json = serde_json::to_string(&rule).unwrap();
        assert_eq!(json, format!("\"{}\"", rule.name()));
        let back: Rule = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rule);
    }
}

#[test]
fn verdict_serializes_with_rule_name() {
    let json = serde_json::to_string(&Verdict::Rejected(Rule::NotAdverb)).unwrap();
    assert_eq!(json, r#"{"verdict":"rejected","rule":"not_adverb"}"#);
    let json = serde_json::to_string(&Verdict::Accepted).unwrap();
    assert_eq!(json, r#"{"verdict":"accepted"}"#);
}
