//! Bulk reclassification of stored icons.
//!
//! [`plan`] is pure: it compares each stored category with the engine's answer
//! and lists the differences. [`apply`] hands the changes to a [`CategoryWriter`].

use serde::Serialize;
use std::collections::BTreeMap;

use crate::category::CategoryId;
use crate::engine::Engine;
use crate::error::Result;

/// Per-identifier category write, applied by whoever owns the icon table.
pub trait CategoryWriter {
    /// Returns `false` when no row with `identifier` exists.
    fn set_category(&mut self, identifier: &str, category: CategoryId) -> Result<bool>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryChange {
    pub identifier: String,
    /// `None` when the stored value is not a known category.
    pub from: Option<CategoryId>,
    pub to: CategoryId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: CategoryId,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecategorizePlan {
    pub total: usize,
    pub changes: Vec<CategoryChange>,
    /// Categories after the changes, largest first.
    pub counts: Vec<CategoryCount>,
}

impl RecategorizePlan {
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplySummary {
    pub updated: usize,
    /// Identifiers that vanished from the store between plan and apply.
    pub missing: Vec<String>,
}

/// `icons` pairs each identifier with its parsed stored category. An
/// unparseable stored value always produces a change.
pub fn plan(engine: &Engine, icons: &[(String, Option<CategoryId>)]) -> RecategorizePlan {
    let mut changes = Vec::new();
    let mut tally: BTreeMap<CategoryId, usize> = BTreeMap::new();

    for (identifier, current) in icons {
        let computed = engine.categorize(identifier);
        *tally.entry(computed).or_insert(0) += 1;

        if *current != Some(computed) {
            changes.push(CategoryChange {
                identifier: identifier.clone(),
                from: *current,
                to: computed,
            });
        }
    }

    RecategorizePlan {
        total: icons.len(),
        changes,
        counts: sorted_counts(tally),
    }
}

pub fn apply<W: CategoryWriter>(writer: &mut W, plan: &RecategorizePlan) -> Result<ApplySummary> {
    let mut summary = ApplySummary::default();

    for change in &plan.changes {
        if writer.set_category(&change.identifier, change.to)? {
            summary.updated += 1;
        } else {
            summary.missing.push(change.identifier.clone());
        }
    }

    crate::log_status!(
        "recategorize",
        "Updated {} of {} icons",
        summary.updated,
        plan.total
    );

    Ok(summary)
}

/// Count descending, ties in display order.
pub fn sorted_counts(tally: BTreeMap<CategoryId, usize>) -> Vec<CategoryCount> {
    let mut counts: Vec<CategoryCount> = tally
        .into_iter()
        .map(|(category, count)| CategoryCount { category, count })
        .collect();
    counts.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.category.order().cmp(&b.category.order()))
    });
    counts
}
