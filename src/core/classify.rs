//! Category rule engine.
//!
//! `classify` is total: every identifier gets a category. Resolution order:
//!
//! 1. specific-app rules (exact, `app-` prefix, `-app` suffix)
//! 2. keyword groups in category order, each keyword tested by exact match,
//!    `keyword-` prefix, whole word, all words of a multi-word keyword, and
//!    (for keywords of 8+ characters only) plain substring
//! 3. the `development` fallback

use serde::Serialize;
use std::collections::BTreeSet;

use crate::category::CategoryId;
use crate::rules::{RuleSet, SpecificAppRule};

/// Keywords at least this long may match anywhere inside an identifier.
pub const SUBSTRING_KEYWORD_MIN_LEN: usize = 8;

const VARIANT_SUFFIXES: [&str; 2] = ["-light", "-dark"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationStage {
    SpecificApp,
    Keyword,
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleStrategy {
    Exact,
    Prefix,
    Suffix,
    Word,
    AllWords,
    Substring,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    /// Identifier after extension and variant stripping.
    pub cleaned: String,
    pub category: CategoryId,
    pub stage: ClassificationStage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy: Option<RuleStrategy>,
}

#[derive(Debug, Clone)]
pub struct Classifier {
    rules: RuleSet,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(RuleSet::builtin())
    }
}

impl Classifier {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn classify(&self, identifier: &str) -> CategoryId {
        self.explain(identifier).category
    }

    pub fn explain(&self, identifier: &str) -> Classification {
        let cleaned = clean_identifier(identifier);

        if let Some((rule, strategy)) = self.match_specific_app(&cleaned) {
            return Classification {
                category: rule.category,
                stage: ClassificationStage::SpecificApp,
                rule: Some(rule.app_token.clone()),
                strategy: Some(strategy),
                cleaned,
            };
        }

        if let Some((category, keyword, strategy)) = self.match_keywords(&cleaned) {
            return Classification {
                category,
                stage: ClassificationStage::Keyword,
                rule: Some(keyword.to_string()),
                strategy: Some(strategy),
                cleaned,
            };
        }

        Classification {
            cleaned,
            category: CategoryId::FALLBACK,
            stage: ClassificationStage::Fallback,
            rule: None,
            strategy: None,
        }
    }

    fn match_keywords(&self, cleaned: &str) -> Option<(CategoryId, &str, RuleStrategy)> {
        let words = word_set(cleaned);
        self.rules.keyword_groups().iter().find_map(|group| {
            group.keywords.iter().find_map(|keyword| {
                match_keyword(cleaned, &words, keyword)
                    .map(|strategy| (group.category, keyword.as_str(), strategy))
            })
        })
    }

    fn match_specific_app(&self, cleaned: &str) -> Option<(&SpecificAppRule, RuleStrategy)> {
        self.rules.specific_apps().iter().find_map(|rule| {
            let app = rule.app_token.as_str();
            if cleaned == app {
                Some((rule, RuleStrategy::Exact))
            } else if cleaned.starts_with(&format!("{}-", app)) {
                Some((rule, RuleStrategy::Prefix))
            } else if cleaned.ends_with(&format!("-{}", app)) {
                Some((rule, RuleStrategy::Suffix))
            } else {
                None
            }
        })
    }
}

/// Lowercase, drop a `.svg` extension, then drop trailing `-light` / `-dark`.
pub fn clean_identifier(identifier: &str) -> String {
    let lower = identifier.trim().to_lowercase();
    let mut cleaned = lower.strip_suffix(".svg").unwrap_or(&lower).to_string();

    while let Some(suffix) = VARIANT_SUFFIXES.iter().find(|s| cleaned.ends_with(**s)) {
        cleaned.truncate(cleaned.len() - suffix.len());
    }

    cleaned
}

fn word_set(value: &str) -> BTreeSet<&str> {
    value
        .split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|w| !w.is_empty())
        .collect()
}

fn match_keyword(cleaned: &str, words: &BTreeSet<&str>, keyword: &str) -> Option<RuleStrategy> {
    if cleaned == keyword {
        return Some(RuleStrategy::Exact);
    }

    if cleaned.starts_with(&format!("{}-", keyword)) {
        return Some(RuleStrategy::Prefix);
    }

    if words.contains(keyword) {
        return Some(RuleStrategy::Word);
    }

    let keyword_words: BTreeSet<&str> = keyword.split('-').flat_map(str::split_whitespace).collect();
    if keyword_words.len() > 1 && keyword_words.is_subset(words) {
        return Some(RuleStrategy::AllWords);
    }

    if keyword.chars().count() >= SUBSTRING_KEYWORD_MIN_LEN && cleaned.contains(keyword) {
        return Some(RuleStrategy::Substring);
    }

    None
}
