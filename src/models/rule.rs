//! Validation rule models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{FunctionParameters, Link, SelfLink, UserInfoLinks};
use super::primitives::{RuleId, TemplateId};

/// Links carried by a rule in its minimal representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleDetailLink {
    /// The full rule
    pub rule: Link,
}

/// Minimal representation of a rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinimalRule {
    /// Rule id
    pub id: RuleId,
    /// Rule display name
    pub display_name: String,
    /// Link to the full rule
    #[serde(rename = "_links")]
    pub links: RuleDetailLink,
}

/// Full representation of a rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleDetails {
    /// Rule id
    pub id: RuleId,
    /// Rule display name
    pub display_name: String,
    /// Rule description
    #[serde(default)]
    pub description: String,
    /// When the rule was created
    pub creation_date_time: DateTime<Utc>,
    /// When the rule was last modified
    pub modification_date_time: DateTime<Utc>,
    /// Template the rule was created from
    pub template_id: TemplateId,
    /// Arguments of the template function
    #[serde(default)]
    pub function_parameters: FunctionParameters,
    /// Severity (`low`, `medium`, `high`, `veryHigh`)
    pub severity: String,
    /// EC schema the rule targets
    pub ec_schema: String,
    /// EC class the rule targets
    pub ec_class: String,
    /// Optional ECSQL where clause
    #[serde(default)]
    pub where_clause: Option<String>,
    /// Name of the template function
    #[serde(default)]
    pub function_name: String,
    /// What is validated (`property`, `aspect`, `typeDefinition`)
    pub data_type: String,
    /// Creator and modifier links
    #[serde(rename = "_links", default)]
    pub links: UserInfoLinks,
}

/// A rule as returned from create and update calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    /// Rule id
    pub id: RuleId,
    /// Rule display name
    pub display_name: String,
    /// Rule description
    #[serde(default)]
    pub description: String,
    /// Template the rule was created from
    pub template_id: TemplateId,
    /// Arguments of the template function
    #[serde(default)]
    pub function_parameters: FunctionParameters,
    /// Severity (`low`, `medium`, `high`, `veryHigh`)
    pub severity: String,
    /// EC schema the rule targets
    pub ec_schema: String,
    /// EC class the rule targets
    pub ec_class: String,
    /// Optional ECSQL where clause
    #[serde(default)]
    pub where_clause: Option<String>,
    /// What is validated (`property`, `aspect`, `typeDefinition`)
    pub data_type: String,
    /// Link to the rule
    #[serde(rename = "_links", default)]
    pub links: SelfLink,
}

/// Body of a create rule request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRule {
    /// Template to instantiate
    pub template_id: TemplateId,
    /// Display name
    pub display_name: String,
    /// Description
    pub description: String,
    /// EC class
    pub ec_class: String,
    /// EC schema
    pub ec_schema: String,
    /// ECSQL where clause
    #[serde(skip_serializing_if = "Option::is_none")]
    pub where_clause: Option<String>,
    /// Severity (`low`, `medium`, `high`, `veryHigh`)
    pub severity: String,
    /// What is validated (`property`, `aspect`, `typeDefinition`)
    pub data_type: String,
    /// Arguments of the template function
    pub function_parameters: FunctionParameters,
}

/// Body of an update rule request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRule {
    /// Display name
    pub display_name: String,
    /// Description
    pub description: String,
    /// EC class
    pub ec_class: String,
    /// EC schema
    pub ec_schema: String,
    /// ECSQL where clause
    #[serde(skip_serializing_if = "Option::is_none")]
    pub where_clause: Option<String>,
    /// Severity (`low`, `medium`, `high`, `veryHigh`)
    pub severity: String,
}
