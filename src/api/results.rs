//! Results service.

use std::sync::Arc;

use crate::auth::Credentials;
use crate::client::{ClientInner, RequestOptions};
use crate::models::{ResultId, ValidationResult};
use crate::Result;

/// Service for the results of finished runs.
///
/// # Example
///
/// ```no_run
/// use property_validation::models::RunId;
///
/// # async fn example(client: property_validation::PropertyValidationClient) -> property_validation::Result<()> {
/// let run = client.runs().get(&RunId::new("run-id")).await?;
///
/// if let Some(result_id) = run.result_id {
///     let result = client.results().get(&result_id).await?;
///     for row in &result.result {
///         let rule = result.rule_for(row).map(|r| r.display_name.as_str());
///         println!("{} failed {:?}: {}", row.element_label, rule, row.bad_value);
///     }
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ResultsService {
    inner: Arc<ClientInner>,
    credentials: Credentials,
}

impl ResultsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        let credentials = inner.credentials();
        Self { inner, credentials }
    }

    /// Use an explicit access token instead of the client callback.
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.credentials = self.credentials.with_token(token);
        self
    }

    /// Get the failing elements of a run together with the rules involved.
    pub async fn get(&self, result_id: &ResultId) -> Result<ValidationResult> {
        let url = self.inner.endpoints.result(result_id)?;
        self.inner
            .get(&self.credentials, url, RequestOptions::default())
            .await
    }
}
