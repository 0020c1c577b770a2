//! URL construction for every Property Validation endpoint.

use crate::models::{IModelId, ResultId, RuleId, RunId, TestId};
use crate::Result;

use super::query::QueryParams;

/// Maps each operation to its absolute URL.
///
/// # Example
///
/// ```
/// use property_validation::client::{Endpoints, QueryParams};
///
/// let endpoints = Endpoints::new("https://api.bentley.com/validation/propertyValue");
/// let url = endpoints.rules(&QueryParams::new().param("projectId", "p1"));
/// assert_eq!(url, "https://api.bentley.com/validation/propertyValue/rules?projectId=p1");
/// ```
#[derive(Debug, Clone)]
pub struct Endpoints {
    base_url: String,
}

impl Endpoints {
    /// Resolve endpoints relative to `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// The base URL every endpoint is relative to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET`/`POST /rules`
    pub fn rules(&self, query: &QueryParams) -> String {
        format!("{}/rules{}", self.base_url, query)
    }

    /// `GET`/`PUT`/`DELETE /rules/{id}`
    pub fn rule(&self, rule_id: &RuleId) -> Result<String> {
        Ok(format!("{}/rules/{}", self.base_url, rule_id.segment()?))
    }

    /// `GET /ruleTemplates`
    pub fn rule_templates(&self, query: &QueryParams) -> String {
        format!("{}/ruleTemplates{}", self.base_url, query)
    }

    /// `GET`/`POST /tests`
    pub fn tests(&self, query: &QueryParams) -> String {
        format!("{}/tests{}", self.base_url, query)
    }

    /// `GET`/`PUT`/`DELETE /tests/{id}`
    pub fn test(&self, test_id: &TestId) -> Result<String> {
        Ok(format!("{}/tests/{}", self.base_url, test_id.segment()?))
    }

    /// `GET`/`POST /runs`
    pub fn runs(&self, query: &QueryParams) -> String {
        format!("{}/runs{}", self.base_url, query)
    }

    /// `GET`/`DELETE /runs/{id}`
    pub fn run(&self, run_id: &RunId) -> Result<String> {
        Ok(format!("{}/runs/{}", self.base_url, run_id.segment()?))
    }

    /// `GET /results/{id}`
    pub fn result(&self, result_id: &ResultId) -> Result<String> {
        Ok(format!("{}/results/{}", self.base_url, result_id.segment()?))
    }

    /// `GET /properties/imodels/{id}`
    pub fn properties_info(&self, imodel_id: &IModelId, query: &QueryParams) -> Result<String> {
        Ok(format!(
            "{}/properties/imodels/{}{}",
            self.base_url,
            imodel_id.segment()?,
            query
        ))
    }

    /// `POST /schema/imodels/{id}`
    pub fn schema_extraction(&self, imodel_id: &IModelId) -> Result<String> {
        Ok(format!(
            "{}/schema/imodels/{}",
            self.base_url,
            imodel_id.segment()?
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn endpoints() -> Endpoints {
        Endpoints::new("https://host/validation/propertyValue/")
    }

    #[test]
    fn test_collection_urls() {
        let query = QueryParams::new().param("projectId", "p1").param("$top", 5);
        let e = endpoints();
        assert_eq!(e.rules(&query), "https://host/validation/propertyValue/rules?projectId=p1&$top=5");
        assert_eq!(e.rule_templates(&QueryParams::new()), "https://host/validation/propertyValue/ruleTemplates");
        assert_eq!(e.tests(&QueryParams::new()), "https://host/validation/propertyValue/tests");
        assert_eq!(e.runs(&query), "https://host/validation/propertyValue/runs?projectId=p1&$top=5");
    }

    #[test]
    fn test_entity_urls() {
        let e = endpoints();
        assert_eq!(e.rule(&RuleId::new("r1")).unwrap(), "https://host/validation/propertyValue/rules/r1");
        assert_eq!(e.test(&TestId::new("t1")).unwrap(), "https://host/validation/propertyValue/tests/t1");
        assert_eq!(e.run(&RunId::new("u1")).unwrap(), "https://host/validation/propertyValue/runs/u1");
        assert_eq!(
            e.result(&ResultId::new("x1")).unwrap(),
            "https://host/validation/propertyValue/results/x1"
        );
    }

    #[test]
    fn test_imodel_urls() {
        let e = endpoints();
        let imodel = IModelId::new("im1");
        let query = QueryParams::new().param("projectId", "p1").param("filter", "Door");
        assert_eq!(
            e.properties_info(&imodel, &query).unwrap(),
            "https://host/validation/propertyValue/properties/imodels/im1?projectId=p1&filter=Door"
        );
        assert_eq!(
            e.schema_extraction(&imodel).unwrap(),
            "https://host/validation/propertyValue/schema/imodels/im1"
        );
    }

    #[test]
    fn test_blank_id_rejected() {
        assert!(matches!(endpoints().rule(&RuleId::new("")), Err(Error::InvalidInput(_))));
    }
}
