//! Rule template models.

use serde::{Deserialize, Serialize};

use super::primitives::TemplateId;

/// A template from which rules are created.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleTemplate {
    /// Template id
    pub id: TemplateId,
    /// Template display name
    pub display_name: String,
    /// Template description
    #[serde(default)]
    pub description: String,
    /// Human readable prompt describing the function parameters
    #[serde(default)]
    pub prompt: Option<String>,
}
