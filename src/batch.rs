//! Read a word list, run every word through the rules, write the survivors.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::Context;

use crate::oracle::Oracle;
use crate::rules::{Rule, RuleSet, Verdict};

/// Summary of one batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    pub read: usize,
    pub accepted: usize,
    /// How many words each rule was the first to reject.
    pub rejections: BTreeMap<Rule, usize>,
    pub output: PathBuf,
    /// Time spent evaluating rules (excludes file I/O).
    pub elapsed: Duration,
}

/// Accepted words plus per-rule rejection counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sieved {
    pub accepted: Vec<String>,
    pub rejections: BTreeMap<Rule, usize>,
}

/// Read the non-blank lines of `path`, trimmed.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid UTF-8.
pub fn read_words(path: &Path) -> anyhow::Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read word list: {}", path.display()))?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect())
}

/// Write `words` to `path`, one per line, each terminated by `\n`.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_words(path: &Path, words: &[String]) -> anyhow::Result<()> {
    let mut content = String::with_capacity(words.iter().map(|w| w.len() + 1).sum());
    for word in words {
        content.push_str(word);
        content.push('\n');
    }
    std::fs::write(path, content)
        .with_context(|| format!("failed to write word list: {}", path.display()))
}

/// Keep the words every rule accepts, in input order.
pub fn sieve(words: &[String], rules: &RuleSet, oracle: &dyn Oracle) -> Sieved {
    let mut out = Sieved::default();
    for word in words {
        match rules.evaluate(word, oracle) {
            Verdict::Accepted => out.accepted.push(word.clone()),
            Verdict::Rejected(rule) => *out.rejections.entry(rule).or_insert(0) += 1,
        }
    }
    out
}

/// Read `input`, sieve it, write the survivors to `output`.
///
/// # Errors
///
/// Returns an error if reading or writing fails. Nothing is written when the
/// read fails.
pub fn run(
    input: &Path,
    output: &Path,
    rules: &RuleSet,
    oracle: &dyn Oracle,
) -> anyhow::Result<BatchReport> {
    let words = read_words(input)?;

    let start = Instant::now();
    let sieved = sieve(&words, rules, oracle);
    let elapsed = start.elapsed();

    write_words(output, &sieved.accepted)?;

    Ok(BatchReport {
        read: words.len(),
        accepted: sieved.accepted.len(),
        rejections: sieved.rejections,
        output: output.to_path_buf(),
        elapsed,
    })
}
