//! Suffix detachment for finding WordNet base forms.

use crate::pos::Pos;

use super::WordNet;

const NOUN_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ses", "s"),
    ("ves", "f"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

const VERB_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ies", "y"),
    ("es", "e"),
    ("es", ""),
    ("ed", "e"),
    ("ed", ""),
    ("ing", "e"),
    ("ing", ""),
];

const ADJECTIVE_RULES: &[(&str, &str)] = &[("er", ""), ("est", ""), ("er", "e"), ("est", "e")];

const fn detachment_rules(pos: Pos) -> &'static [(&'static str, &'static str)] {
    match pos {
        Pos::Noun => NOUN_RULES,
        Pos::Verb => VERB_RULES,
        Pos::Adjective => ADJECTIVE_RULES,
        Pos::Adverb => &[],
    }
}

/// Rewrite every form with every matching suffix rule. Duplicates are dropped,
/// first occurrence wins.
fn apply_rules(forms: &[String], rules: &[(&str, &str)]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for form in forms {
        for (old, new) in rules {
            if let Some(stem) = form.strip_suffix(old) {
                let candidate = format!("{stem}{new}");
                if !out.contains(&candidate) {
                    out.push(candidate);
                }
            }
        }
    }
    out
}

impl WordNet {
    /// Candidate lemmas of `form` in `pos`, in discovery order.
    ///
    /// Exception lists take precedence over suffix rules. Rules are applied
    /// round by round until some round produces an indexed form.
    pub fn morphy(&self, form: &str, pos: Pos) -> Vec<String> {
        if let Some(bases) = self.exceptions(form, pos) {
            let forms = std::iter::once(form.to_string()).chain(bases.iter().cloned());
            return self.indexed_forms(forms, pos);
        }

        let rules = detachment_rules(pos);
        let mut forms = apply_rules(&[form.to_string()], rules);
        let first =
            self.indexed_forms(std::iter::once(form.to_string()).chain(forms.clone()), pos);
        if !first.is_empty() {
            return first;
        }

        while !forms.is_empty() {
            forms = apply_rules(&forms, rules);
            let found = self.indexed_forms(forms.iter().cloned(), pos);
            if !found.is_empty() {
                return found;
            }
        }
        Vec::new()
    }

    fn indexed_forms(&self, forms: impl IntoIterator<Item = String>, pos: Pos) -> Vec<String> {
        let mut found: Vec<String> = Vec::new();
        for form in forms {
            if self.contains(&form, pos) && !found.contains(&form) {
                found.push(form);
            }
        }
        found
    }
}
