//! The matching and taxonomy engine.
//!
//! Bundles the matcher, the rule engine and the override table. All tables
//! are handed in at construction and never mutated afterwards, so one engine
//! can be shared freely and every call is referentially transparent.

use serde::Serialize;

use crate::aliases::AliasTable;
use crate::category::CategoryId;
use crate::classify::{Classification, Classifier};
use crate::defaults::TaxonomyConfig;
use crate::matcher::{IconIndex, IconMatch, IconMatcher};
use crate::overrides::OverrideTable;
use crate::rules::RuleSet;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDecision {
    pub identifier: String,
    pub category: CategoryId,
    pub classification: Classification,
    /// Set when the override table replaced the rule engine's answer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overridden_by: Option<CategoryId>,
}

#[derive(Debug, Clone)]
pub struct Engine {
    matcher: IconMatcher,
    classifier: Classifier,
    overrides: OverrideTable,
}

impl Default for Engine {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Engine {
    pub fn new(matcher: IconMatcher, classifier: Classifier, overrides: OverrideTable) -> Self {
        Self {
            matcher,
            classifier,
            overrides,
        }
    }

    pub fn builtin() -> Self {
        Self::new(
            IconMatcher::default(),
            Classifier::default(),
            OverrideTable::builtin(),
        )
    }

    /// Built-in tables with the configured extra rows layered on top.
    pub fn from_config(taxonomy: &TaxonomyConfig) -> Self {
        let mut aliases = AliasTable::builtin();
        aliases.extend(taxonomy.extra_aliases.iter().cloned());

        let mut rules = RuleSet::builtin();
        rules.prepend_specific_apps(taxonomy.extra_specific_apps.clone());

        let mut overrides = OverrideTable::builtin();
        overrides.extend(taxonomy.extra_overrides.iter().cloned());

        Self::new(IconMatcher::new(aliases), Classifier::new(rules), overrides)
    }

    pub fn matcher(&self) -> &IconMatcher {
        &self.matcher
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    pub fn overrides(&self) -> &OverrideTable {
        &self.overrides
    }

    pub fn match_icon<'a>(&self, entry_name: &str, icons: &'a IconIndex) -> Option<&'a str> {
        self.matcher.match_icon(entry_name, icons)
    }

    pub fn explain_match(&self, entry_name: &str, icons: &IconIndex) -> Option<IconMatch> {
        self.matcher.explain(entry_name, icons)
    }

    /// Final category for an icon: rule engine first, override table last.
    pub fn categorize(&self, identifier: &str) -> CategoryId {
        let computed = self.classifier.classify(identifier);
        self.overrides.resolve(override_key(identifier), computed)
    }

    pub fn explain_category(&self, identifier: &str) -> CategoryDecision {
        let classification = self.classifier.explain(identifier);
        let overridden_by = self
            .overrides
            .get(override_key(identifier))
            .filter(|category| *category != classification.category);

        CategoryDecision {
            identifier: identifier.to_string(),
            category: overridden_by.unwrap_or(classification.category),
            classification,
            overridden_by,
        }
    }
}

/// Override rows are keyed by bare identifier; filenames drop `.svg`.
fn override_key(identifier: &str) -> &str {
    identifier.strip_suffix(".svg").unwrap_or(identifier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aliases::AliasEntry;
    use crate::overrides::Override;
    use crate::rules::SpecificAppRule;

    #[test]
    fn override_wins_over_rules() {
        let engine = Engine::builtin();
        assert_eq!(
            engine.classifier().classify("facebook-dark.svg"),
            CategoryId::Development
        );
        assert_eq!(engine.categorize("facebook-dark"), CategoryId::Communication);

        let decision = engine.explain_category("facebook-dark");
        assert_eq!(decision.category, CategoryId::Communication);
        assert_eq!(decision.overridden_by, Some(CategoryId::Communication));
    }

    #[test]
    fn override_applies_to_svg_filenames() {
        let engine = Engine::builtin();
        assert_eq!(engine.categorize("facebook-dark.svg"), CategoryId::Communication);

        let decision = engine.explain_category("facebook-dark.svg");
        assert_eq!(decision.identifier, "facebook-dark.svg");
        assert_eq!(decision.category, CategoryId::Communication);
        assert_eq!(decision.overridden_by, Some(CategoryId::Communication));

        // Only the extension is stripped; case is left to the override table.
        assert_eq!(override_key("Facebook-Dark.svg"), "Facebook-Dark");
        assert_eq!(override_key("facebook-dark.png"), "facebook-dark.png");
    }

    #[test]
    fn agreeing_override_is_not_reported() {
        // "pterodactyl" is both a specific app and an override, both media.
        let decision = Engine::builtin().explain_category("pterodactyl");
        assert_eq!(decision.category, CategoryId::Media);
        assert!(decision.overridden_by.is_none());
    }

    #[test]
    fn rules_apply_without_override() {
        assert_eq!(Engine::builtin().categorize("pi-hole"), CategoryId::Security);
    }

    #[test]
    fn config_rows_are_layered_on_builtins() {
        let taxonomy = TaxonomyConfig {
            extra_aliases: vec![AliasEntry::new("ha", "home-assistant")],
            extra_specific_apps: vec![SpecificAppRule::new("grafana", CategoryId::Development)],
            extra_overrides: vec![Override::new("facebook", CategoryId::Media)],
        };
        let engine = Engine::from_config(&taxonomy);

        assert_eq!(engine.categorize("grafana"), CategoryId::Development);
        assert_eq!(engine.categorize("facebook"), CategoryId::Media);
        assert_eq!(engine.categorize("facebook-dark"), CategoryId::Communication);

        let icons: IconIndex = [("home-assistant".to_string(), "/ha.svg".to_string())]
            .into_iter()
            .collect();
        assert_eq!(engine.match_icon("HA Tablet", &icons), Some("/ha.svg"));
    }

    #[test]
    fn categorize_is_stable_across_calls() {
        let engine = Engine::builtin();
        let ids = ["plex", "facebook-dark", "zzz", "docker-compose", "amp"];
        let first: Vec<CategoryId> = ids.iter().map(|id| engine.categorize(id)).collect();
        let second: Vec<CategoryId> = ids.iter().map(|id| engine.categorize(id)).collect();
        assert_eq!(first, second);
    }
}
