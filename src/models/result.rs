//! Validation result models.

use serde::{Deserialize, Serialize};

use super::primitives::RuleId;

/// One failing element.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultDetails {
    /// Element id
    pub element_id: String,
    /// Element display label
    pub element_label: String,
    /// Index into [`ValidationResult::rule_list`]
    pub rule_index: String,
    /// The offending value
    pub bad_value: String,
}

/// A rule referenced by a result set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleSummary {
    /// Rule id
    pub id: RuleId,
    /// Rule display name
    pub display_name: String,
}

/// The result set of a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// Failing elements
    #[serde(default)]
    pub result: Vec<ResultDetails>,
    /// Rules referenced by `rule_index`
    #[serde(default)]
    pub rule_list: Vec<RuleSummary>,
}

impl ValidationResult {
    /// Look up the rule a row refers to.
    pub fn rule_for(&self, row: &ResultDetails) -> Option<&RuleSummary> {
        row.rule_index
            .parse::<usize>()
            .ok()
            .and_then(|i| self.rule_list.get(i))
    }
}
