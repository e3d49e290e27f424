pub mod batch;
pub mod config;
pub mod oracle;
pub mod pos;
pub mod rules;
pub mod tagger;
pub mod wordnet;

pub use oracle::{Oracle, WordNetOracle};
pub use pos::{PennTag, Pos};
pub use rules::{Rule, RuleSet, Verdict};
