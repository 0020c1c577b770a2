//! Runs service.

use std::sync::Arc;

use serde::Deserialize;

use crate::auth::Credentials;
use crate::client::{
    field_accessor, ClientInner, CollectionQuery, PaginatedStream, RequestOptions, ToQueryParams,
};
use crate::models::{CollectionParams, MinimalRun, PreferReturn, RunDetails, RunId};
use crate::Result;

/// Service for test runs.
///
/// # Example
///
/// ```no_run
/// use property_validation::client::take;
/// use property_validation::models::CollectionParams;
///
/// # async fn example(client: property_validation::PropertyValidationClient) -> property_validation::Result<()> {
/// let mut runs = client.runs().list(CollectionParams::new("my-project"))?;
///
/// for run in take(&mut runs, 5).await? {
///     println!("{} {} finished={}", run.id, run.status, run.is_finished());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct RunsService {
    inner: Arc<ClientInner>,
    credentials: Credentials,
}

#[derive(Deserialize)]
struct RunResponse {
    run: RunDetails,
}

impl RunsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        let credentials = inner.credentials();
        Self { inner, credentials }
    }

    /// Use an explicit access token instead of the client callback.
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.credentials = self.credentials.with_token(token);
        self
    }

    /// Stream the runs of a project in their minimal form.
    pub fn list_minimal(&self, params: CollectionParams) -> Result<PaginatedStream<MinimalRun>> {
        let url = self.inner.endpoints.runs(&params.to_query_params());
        let query = CollectionQuery::new(url, field_accessor("runs")).prefer(PreferReturn::Minimal);

        PaginatedStream::from_query(self.inner.clone(), self.credentials.clone(), query)
    }

    /// Stream the runs of a project with status and result ids.
    pub fn list(&self, params: CollectionParams) -> Result<PaginatedStream<RunDetails>> {
        let url = self.inner.endpoints.runs(&params.to_query_params());
        let query =
            CollectionQuery::new(url, field_accessor("runs")).prefer(PreferReturn::Representation);

        PaginatedStream::from_query(self.inner.clone(), self.credentials.clone(), query)
    }

    /// Get a single run.
    pub async fn get(&self, run_id: &RunId) -> Result<RunDetails> {
        let url = self.inner.endpoints.run(run_id)?;
        let response: RunResponse = self
            .inner
            .get(&self.credentials, url, RequestOptions::default())
            .await?;
        Ok(response.run)
    }

    /// Delete a run and its result.
    pub async fn delete(&self, run_id: &RunId) -> Result<()> {
        let url = self.inner.endpoints.run(run_id)?;
        self.inner.delete(&self.credentials, url).await
    }
}
