//! Rules service.

use std::sync::Arc;

use serde::Deserialize;

use crate::auth::Credentials;
use crate::client::{
    field_accessor, ClientInner, CollectionQuery, PaginatedStream, QueryParams, RequestOptions,
    ToQueryParams,
};
use crate::models::{
    CollectionParams, CreateRule, MinimalRule, PreferReturn, Rule, RuleDetails, RuleId, UpdateRule,
};
use crate::Result;

/// Service for property validation rules.
///
/// # Example
///
/// ```no_run
/// use futures_util::StreamExt;
/// use property_validation::models::CollectionParams;
///
/// # async fn example(client: property_validation::PropertyValidationClient) -> property_validation::Result<()> {
/// let mut rules = client
///     .rules()
///     .with_user_metadata(true)
///     .list(CollectionParams::new("my-project").top(100))?;
///
/// while let Some(rule) = rules.next().await {
///     let rule = rule?;
///     println!("{} on {}.{}", rule.display_name, rule.ec_schema, rule.ec_class);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct RulesService {
    inner: Arc<ClientInner>,
    credentials: Credentials,
    user_metadata: bool,
}

#[derive(Deserialize)]
struct RuleResponse<T> {
    rule: T,
}

impl RulesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        let credentials = inner.credentials();
        Self {
            inner,
            credentials,
            user_metadata: false,
        }
    }

    /// Use an explicit access token instead of the client callback.
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.credentials = self.credentials.with_token(token);
        self
    }

    /// Ask for creator/modifier links on full representations.
    pub fn with_user_metadata(mut self, enabled: bool) -> Self {
        self.user_metadata = enabled;
        self
    }

    /// Stream the rules of a project in their minimal form.
    pub fn list_minimal(&self, params: CollectionParams) -> Result<PaginatedStream<MinimalRule>> {
        let url = self.inner.endpoints.rules(&params.to_query_params());
        let query = CollectionQuery::new(url, field_accessor("rules")).prefer(PreferReturn::Minimal);

        PaginatedStream::from_query(self.inner.clone(), self.credentials.clone(), query)
    }

    /// Stream the rules of a project in full.
    pub fn list(&self, params: CollectionParams) -> Result<PaginatedStream<RuleDetails>> {
        let url = self.inner.endpoints.rules(&params.to_query_params());
        let query = CollectionQuery::new(url, field_accessor("rules"))
            .prefer(PreferReturn::Representation)
            .user_metadata(self.user_metadata);

        PaginatedStream::from_query(self.inner.clone(), self.credentials.clone(), query)
    }

    /// Get a single rule.
    pub async fn get(&self, rule_id: &RuleId) -> Result<RuleDetails> {
        let url = self.inner.endpoints.rule(rule_id)?;
        let options = RequestOptions::default().user_metadata(self.user_metadata);

        let response: RuleResponse<RuleDetails> =
            self.inner.get(&self.credentials, url, options).await?;
        Ok(response.rule)
    }

    /// Create a rule from a template.
    pub async fn create(&self, rule: &CreateRule) -> Result<Rule> {
        let url = self.inner.endpoints.rules(&QueryParams::new());
        let response: RuleResponse<Rule> = self.inner.post(&self.credentials, url, rule).await?;
        Ok(response.rule)
    }

    /// Replace the editable fields of a rule.
    pub async fn update(&self, rule_id: &RuleId, rule: &UpdateRule) -> Result<Rule> {
        let url = self.inner.endpoints.rule(rule_id)?;
        let response: RuleResponse<Rule> = self.inner.put(&self.credentials, url, rule).await?;
        Ok(response.rule)
    }

    /// Delete a rule.
    pub async fn delete(&self, rule_id: &RuleId) -> Result<()> {
        let url = self.inner.endpoints.rule(rule_id)?;
        self.inner.delete(&self.credentials, url).await
    }
}
