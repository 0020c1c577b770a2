//! HTTP client and service plumbing for the Property Validation API.
//!
//! This module provides the main entry point [`PropertyValidationClient`]
//! together with the pieces it is built from: configuration, endpoint
//! resolution, query encoding, the transport seam and paginated streams.
//!
//! # Example
//!
//! ```no_run
//! use property_validation::{ClientConfig, PropertyValidationClient};
//! use property_validation::client::take;
//! use property_validation::models::CollectionParams;
//!
//! # async fn example() -> property_validation::Result<()> {
//! let client = PropertyValidationClient::new(ClientConfig::default())?;
//!
//! // First ten rule templates of a project
//! let mut templates = client
//!     .templates()
//!     .with_access_token("Bearer eyJhbGciOi...")
//!     .list(CollectionParams::new("my-project"))?;
//! let first = take(&mut templates, 10).await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod endpoints;
mod http;
pub mod paginated;
mod query;
mod transport;

pub use config::{ClientConfig, DEFAULT_API_VERSION, DEFAULT_BASE_URL};
pub use endpoints::Endpoints;
pub use http::{PropertyValidationClient, USER_METADATA_HEADER};
pub use paginated::{
    collect_all, field_accessor, parse_collection, take, CollectionQuery, EntityAccessor, Page,
    PageStream, PaginatedStream,
};
pub use query::{IntoQueryValue, QueryParams, QueryValue, ToQueryParams};
pub use transport::{Method, ReqwestTransport, Transport, TransportRequest};
pub(crate) use http::{ClientInner, RequestOptions};

#[cfg(test)]
pub(crate) use transport::mock;
