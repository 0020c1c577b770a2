//! API service modules for Property Validation endpoints.
//!
//! Each service covers one resource of the API. Services start out with the
//! client-wide access token callback; call `with_access_token` on a service
//! to use an explicit token instead.

mod results;
mod rules;
mod runs;
mod schema;
mod templates;

pub use results::ResultsService;
pub use rules::RulesService;
pub use runs::RunsService;
pub use schema::{PropertiesInfoQuery, SchemaService};
pub use templates::TemplatesService;
pub use validation_tests::TestsService;
