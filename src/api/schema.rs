//! Schema and properties service.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::auth::Credentials;
use crate::client::{ClientInner, QueryParams, RequestOptions, ToQueryParams};
use crate::models::{IModelId, ProjectId, PropertiesInfo};
use crate::Result;

/// Query for [`SchemaService::properties_info`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertiesInfoQuery {
    /// Project the iModel belongs to
    pub project_id: ProjectId,
    /// Only return classes and properties matching this text
    pub filter: Option<String>,
}

impl PropertiesInfoQuery {
    /// Query for every schema of the iModel.
    pub fn new(project_id: impl Into<ProjectId>) -> Self {
        Self {
            project_id: project_id.into(),
            filter: None,
        }
    }

    /// Narrow the results down with a search filter.
    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }
}

impl ToQueryParams for PropertiesInfoQuery {
    fn to_query_params(&self) -> QueryParams {
        QueryParams::new()
            .param("projectId", self.project_id.as_str())
            .param("filter", self.filter.as_deref())
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExtractSchemaRequest<'a> {
    project_id: &'a ProjectId,
}

/// Service for the schema metadata rules are written against.
#[derive(Clone)]
pub struct SchemaService {
    inner: Arc<ClientInner>,
    credentials: Credentials,
}

impl SchemaService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        let credentials = inner.credentials();
        Self { inner, credentials }
    }

    /// Use an explicit access token instead of the client callback.
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.credentials = self.credentials.with_token(token);
        self
    }

    /// Get the schemas, classes and properties of an iModel.
    ///
    /// Returns a response with status `unavailable` until extraction has run
    /// for the iModel.
    pub async fn properties_info(
        &self,
        imodel_id: &IModelId,
        query: &PropertiesInfoQuery,
    ) -> Result<PropertiesInfo> {
        let url = self
            .inner
            .endpoints
            .properties_info(imodel_id, &query.to_query_params())?;
        self.inner
            .get(&self.credentials, url, RequestOptions::default())
            .await
    }

    /// Ask the service to extract schema information from an iModel.
    #[deprecated(note = "schema information is extracted automatically by the service")]
    pub async fn extract_schema_info(
        &self,
        imodel_id: &IModelId,
        project_id: &ProjectId,
    ) -> Result<()> {
        let url = self.inner.endpoints.schema_extraction(imodel_id)?;
        let _: Value = self
            .inner
            .post(&self.credentials, url, &ExtractSchemaRequest { project_id })
            .await?;
        Ok(())
    }
}
