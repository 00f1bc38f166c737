//! Ordered keyword rule table used by the classifier.
//!
//! Each rule pairs a set of trigger keywords with a template. Rules are tried
//! top to bottom and the first rule with a keyword contained in the
//! lower-cased title wins.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use once_cell::sync::{Lazy, OnceCell};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::config::AppConfig;
use crate::errors::RuleSetError;

/// Placeholder substituted with the trimmed title.
pub const TITLE_PLACEHOLDER: &str = "{title}";

const BUILTIN_RULES: [(&[&str], &str); 10] = [
    (&["fix", "bug"], "Resolve technical issue: {title}"),
    (&["implement", "add"], "Development task: {title}"),
    (&["review", "analyze"], "Analysis and review: {title}"),
    (&["update", "modify"], "Update task: {title}"),
    (&["test", "verify"], "Testing and validation: {title}"),
    (&["create", "build"], "Creation task: {title}"),
    (&["deploy", "release"], "Deployment task: {title}"),
    (&["meeting", "discuss"], "Meeting and discussion: {title}"),
    (&["research", "investigate"], "Research task: {title}"),
    (&["plan", "design"], "Planning and design: {title}"),
];

static BUILTIN: Lazy<RuleSet> = Lazy::new(|| RuleSet {
    rules: BUILTIN_RULES
        .iter()
        .map(|(keywords, template)| Rule {
            keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
            template: (*template).to_string(),
        })
        .collect(),
});

/// Table loaded from the first configured path. Failed loads are not cached.
static CONFIGURED: OnceCell<(PathBuf, RuleSet)> = OnceCell::new();

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub keywords: Vec<String>,
    pub template: String,
}

impl Rule {
    /// `lowered` must already be lower-cased.
    #[must_use]
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k.as_str()))
    }

    #[must_use]
    pub fn render(&self, title: &str) -> String {
        self.template.replace(TITLE_PLACEHOLDER, title)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// The English keyword table shipped with the function.
    #[must_use]
    pub fn builtin() -> &'static RuleSet {
        &BUILTIN
    }

    /// Builds a table from rules, lower-casing keywords.
    pub fn new(rules: Vec<Rule>) -> Result<Self, RuleSetError> {
        if rules.is_empty() {
            return Err(RuleSetError::Empty);
        }

        let mut normalized = Vec::with_capacity(rules.len());
        for (index, rule) in rules.into_iter().enumerate() {
            if rule.keywords.is_empty() {
                return Err(RuleSetError::NoKeywords { index });
            }
            if rule.keywords.iter().any(|k| k.trim().is_empty()) {
                return Err(RuleSetError::BlankKeyword { index });
            }
            if !rule.template.contains(TITLE_PLACEHOLDER) {
                return Err(RuleSetError::MissingPlaceholder { index });
            }
            normalized.push(Rule {
                keywords: rule
                    .keywords
                    .iter()
                    .map(|k| k.trim().to_lowercase())
                    .collect(),
                template: rule.template,
            });
        }

        Ok(Self { rules: normalized })
    }

    /// Parses a JSON array of `{ "keywords": [...], "template": "..." }`.
    pub fn from_json(raw: &str) -> Result<Self, RuleSetError> {
        let rules: Vec<Rule> = serde_json::from_str(raw)?;
        Self::new(rules)
    }

    pub fn from_path(path: &Path) -> Result<Self, RuleSetError> {
        let raw = std::fs::read_to_string(path).map_err(|source| RuleSetError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&raw)
    }

    /// The table named by the config, or the built-in one. The first
    /// configured table is read once and reused; a different path is read
    /// on every call.
    pub fn load(config: &AppConfig) -> Result<Cow<'static, RuleSet>, RuleSetError> {
        let Some(path) = &config.summary_rules_path else {
            return Ok(Cow::Borrowed(Self::builtin()));
        };

        let (cached_path, cached) = CONFIGURED.get_or_try_init(|| {
            let rules = Self::from_path(path)?;
            info!(path = %path.display(), rules = rules.len(), "Loaded custom summary rules");
            Ok::<_, RuleSetError>((path.clone(), rules))
        })?;

        if cached_path == path {
            Ok(Cow::Borrowed(cached))
        } else {
            Ok(Cow::Owned(Self::from_path(path)?))
        }
    }

    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// First rule matching the lower-cased title.
    #[must_use]
    pub fn first_match(&self, lowered: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.matches(lowered))
    }
}
