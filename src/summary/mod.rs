//! Keyword based task summaries.

pub mod classifier;
pub mod rules;

pub use classifier::{Summary, classify, classify_value};
pub use rules::{Rule, RuleSet};
