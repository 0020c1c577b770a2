//! Rule templates service.

use std::sync::Arc;

use crate::auth::Credentials;
use crate::client::{field_accessor, ClientInner, CollectionQuery, PaginatedStream, ToQueryParams};
use crate::models::{CollectionParams, RuleTemplate};
use crate::Result;

/// Service for the templates rules are created from.
#[derive(Clone)]
pub struct TemplatesService {
    inner: Arc<ClientInner>,
    credentials: Credentials,
}

impl TemplatesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        let credentials = inner.credentials();
        Self { inner, credentials }
    }

    /// Use an explicit access token instead of the client callback.
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.credentials = self.credentials.with_token(token);
        self
    }

    /// Stream the rule templates available to a project.
    pub fn list(&self, params: CollectionParams) -> Result<PaginatedStream<RuleTemplate>> {
        let url = self.inner.endpoints.rule_templates(&params.to_query_params());
        let query = CollectionQuery::new(url, field_accessor("ruleTemplates"));

        PaginatedStream::from_query(self.inner.clone(), self.credentials.clone(), query)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::api::test_support::{client, BASE};
    use crate::client::mock::MockTransport;
    use crate::client::take;

    #[tokio::test]
    async fn test_list_templates() {
        let transport = Arc::new(
            MockTransport::new()
                .respond(json!({
                    "ruleTemplates": [
                        { "id": "t1", "displayName": "Range", "description": "Value in range", "prompt": "Between" },
                        { "id": "t2", "displayName": "Pattern", "description": "Matches regex" }
                    ],
                    "_links": { "next": { "href": "next-page" } }
                })),
        );
        let service = client(&transport).templates().with_access_token("tok");

        let mut stream = service.list(CollectionParams::new("p1").top(2)).unwrap();
        let templates = take(&mut stream, 2).await.unwrap();

        assert_eq!(templates[0].prompt.as_deref(), Some("Between"));
        assert!(templates[1].prompt.is_none());
        // The second page is never requested
        assert_eq!(transport.call_count(), 1);

        let request = &transport.requests()[0];
        assert_eq!(request.url, format!("{}/ruleTemplates?projectId=p1&$top=2", BASE));
        assert!(request.headers.get("prefer").is_none());
    }
}
