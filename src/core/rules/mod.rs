//! Classification tables: specific-app overrides and per-category keywords.
//!
//! Order is significant everywhere. Specific-app rules are checked in list
//! order, keyword groups in category order and keywords in group order; the
//! first rule that matches decides the category.

use serde::{Deserialize, Serialize};

use crate::category::CategoryId;

mod builtin;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecificAppRule {
    pub app_token: String,
    pub category: CategoryId,
}

impl SpecificAppRule {
    pub fn new(app_token: impl Into<String>, category: CategoryId) -> Self {
        Self {
            app_token: app_token.into(),
            category,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordRule {
    pub category: CategoryId,
    pub keyword: String,
}

/// All keywords owned by one category, in declared order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordGroup {
    pub category: CategoryId,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RuleSet {
    specific_apps: Vec<SpecificAppRule>,
    keyword_groups: Vec<KeywordGroup>,
}

impl RuleSet {
    pub fn new(specific_apps: Vec<SpecificAppRule>, keyword_groups: Vec<KeywordGroup>) -> Self {
        Self {
            specific_apps,
            keyword_groups,
        }
    }

    /// The shipped dashboard-icons taxonomy.
    pub fn builtin() -> Self {
        let specific_apps = builtin::SPECIFIC_APPS
            .iter()
            .map(|(token, category)| SpecificAppRule::new(*token, *category))
            .collect();

        let keyword_groups = builtin::CATEGORY_KEYWORDS
            .iter()
            .map(|(category, keywords)| KeywordGroup {
                category: *category,
                keywords: keywords.iter().map(|k| k.to_string()).collect(),
            })
            .collect();

        Self::new(specific_apps, keyword_groups)
    }

    /// Place rules ahead of the existing specific-app rules.
    pub fn prepend_specific_apps(&mut self, rules: Vec<SpecificAppRule>) {
        if rules.is_empty() {
            return;
        }
        let existing = std::mem::take(&mut self.specific_apps);
        self.specific_apps = rules;
        self.specific_apps.extend(existing);
    }

    pub fn specific_apps(&self) -> &[SpecificAppRule] {
        &self.specific_apps
    }

    pub fn keyword_groups(&self) -> &[KeywordGroup] {
        &self.keyword_groups
    }

    /// Flattened view of the keyword table in evaluation order.
    pub fn keyword_rules(&self) -> impl Iterator<Item = KeywordRule> + '_ {
        self.keyword_groups.iter().flat_map(|group| {
            group.keywords.iter().map(move |keyword| KeywordRule {
                category: group.category,
                keyword: keyword.clone(),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_categories_follow_declared_order() {
        let rules = RuleSet::builtin();
        let order: Vec<CategoryId> = rules.keyword_groups().iter().map(|g| g.category).collect();
        assert_eq!(
            order,
            vec![
                CategoryId::Os,
                CategoryId::Cloud,
                CategoryId::Containers,
                CategoryId::Virtualization,
                CategoryId::Databases,
                CategoryId::Monitoring,
                CategoryId::Media,
                CategoryId::Downloads,
                CategoryId::Security,
                CategoryId::Networking,
                CategoryId::Development,
                CategoryId::Communication,
                CategoryId::Storage,
                CategoryId::Hardware,
                CategoryId::Automation,
            ]
        );
    }

    #[test]
    fn every_category_has_keywords() {
        let rules = RuleSet::builtin();
        assert_eq!(rules.keyword_groups().len(), CategoryId::ALL.len());
        assert!(rules.keyword_groups().iter().all(|g| !g.keywords.is_empty()));
    }

    #[test]
    fn keyword_rules_flatten_in_order() {
        let rules = RuleSet::builtin();
        let first = rules.keyword_rules().next().unwrap();
        assert_eq!(first.category, CategoryId::Os);
        assert_eq!(first.keyword, "linux");
    }

    #[test]
    fn prepended_specific_apps_take_precedence() {
        let mut rules = RuleSet::builtin();
        rules.prepend_specific_apps(vec![SpecificAppRule::new("steam", CategoryId::Hardware)]);
        assert_eq!(rules.specific_apps()[0].app_token, "steam");
        assert_eq!(rules.specific_apps()[0].category, CategoryId::Hardware);
    }
}
