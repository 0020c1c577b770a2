//! Shapes shared by several endpoints.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::{QueryParams, ToQueryParams};

use super::primitives::ProjectId;

/// A hypermedia link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Absolute URL of the linked resource
    pub href: String,
}

/// Links to the users that created and last modified an entity.
///
/// Only present when user metadata was requested.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfoLinks {
    /// Creator
    #[serde(default)]
    pub created_by: Option<Link>,
    /// Last modifier
    #[serde(default)]
    pub last_modified_by: Option<Link>,
}

/// Link to the entity itself, returned from create and update calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelfLink {
    /// The entity
    #[serde(rename = "self", default)]
    pub self_link: Option<Link>,
}

/// Representation requested with the `Prefer` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferReturn {
    /// Only ids, names and links
    Minimal,
    /// Every field of the entity
    Representation,
}

impl PreferReturn {
    /// Value of the `Prefer` header.
    pub fn header_value(&self) -> &'static str {
        match self {
            PreferReturn::Minimal => "return=minimal",
            PreferReturn::Representation => "return=representation",
        }
    }
}

/// Rule function arguments (`propertyName`, `lowerBound`, `pattern`, ...).
///
/// The set of keys depends on the template the rule was created from.
pub type FunctionParameters = Map<String, Value>;

/// Query parameters accepted by every list endpoint.
///
/// # Example
///
/// ```
/// use property_validation::client::ToQueryParams;
/// use property_validation::models::CollectionParams;
///
/// let params = CollectionParams::new("p1").top(5);
/// assert_eq!(params.to_query_params().to_string(), "?projectId=p1&$top=5");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionParams {
    /// Project the entities belong to
    pub project_id: ProjectId,
    /// Page size
    pub top: Option<u32>,
    /// Number of entities to skip
    pub skip: Option<u32>,
    /// Continuation token from an earlier page
    pub continuation_token: Option<String>,
}

impl CollectionParams {
    /// List everything in `project_id`.
    pub fn new(project_id: impl Into<ProjectId>) -> Self {
        Self {
            project_id: project_id.into(),
            top: None,
            skip: None,
            continuation_token: None,
        }
    }

    /// Set the page size.
    pub fn top(mut self, top: u32) -> Self {
        self.top = Some(top);
        self
    }

    /// Skip the first `skip` entities.
    pub fn skip(mut self, skip: u32) -> Self {
        self.skip = Some(skip);
        self
    }

    /// Resume from a continuation token.
    pub fn continuation_token(mut self, token: impl Into<String>) -> Self {
        self.continuation_token = Some(token.into());
        self
    }
}

impl ToQueryParams for CollectionParams {
    fn to_query_params(&self) -> QueryParams {
        QueryParams::new()
            .param("projectId", self.project_id.as_str())
            .param("$top", self.top)
            .param("$skip", self.skip)
            .param("continuationToken", self.continuation_token.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_params_query() {
        let params = CollectionParams::new("p1")
            .top(10)
            .skip(20)
            .continuation_token("tok");
        assert_eq!(
            params.to_query_params().to_string(),
            "?projectId=p1&$top=10&$skip=20&continuationToken=tok"
        );
    }

    #[test]
    fn test_collection_params_blank_project_omitted() {
        let params = CollectionParams::new("");
        assert_eq!(params.to_query_params().to_string(), "");
    }

    #[test]
    fn test_prefer_header_values() {
        assert_eq!(PreferReturn::Minimal.header_value(), "return=minimal");
        assert_eq!(
            PreferReturn::Representation.header_value(),
            "return=representation"
        );
    }

    #[test]
    fn test_self_link_field_name() {
        let link: SelfLink =
            serde_json::from_value(serde_json::json!({ "self": { "href": "https://x/rules/1" } }))
                .unwrap();
        assert_eq!(link.self_link.unwrap().href, "https://x/rules/1");
    }
}
