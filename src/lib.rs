//! # property-validation-rs
//!
//! An async Rust client for the iTwin Property Validation API.
//!
//! The service checks the property values of elements in an iModel against
//! rules. This crate covers the whole REST surface: rule templates, rules,
//! tests, runs, results and the schema metadata rules are written against.
//!
//! ## Features
//!
//! - **Lazy pagination**: list operations return streams that fetch one page
//!   per pull by following the service's `next` links
//! - **Per-entity or per-page**: iterate entities, or borrow the page cursor
//!   with [`PaginatedStream::by_page`](client::PaginatedStream::by_page)
//! - **Flexible authentication**: a client-wide async token callback or an
//!   explicit token per service
//! - **Pluggable transport**: `reqwest` by default, any [`Transport`](client::Transport)
//!   for tests or custom stacks
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use futures_util::StreamExt;
//! use property_validation::{AccessTokenCallback, ClientConfig, PropertyValidationClient};
//! use property_validation::models::CollectionParams;
//!
//! #[tokio::main]
//! async fn main() -> property_validation::Result<()> {
//!     let client = PropertyValidationClient::new(ClientConfig::default())?
//!         .with_access_token_callback(AccessTokenCallback::new(|| async {
//!             Ok(std::env::var("ITWIN_ACCESS_TOKEN").unwrap_or_default())
//!         }));
//!
//!     // Every rule of the project, fetched page by page as needed
//!     let mut rules = client.rules().list_minimal(CollectionParams::new("my-project"))?;
//!     while let Some(rule) = rules.next().await {
//!         let rule = rule?;
//!         println!("{}: {}", rule.id, rule.display_name);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Pages and Limits
//!
//! ```rust,no_run
//! use futures_util::StreamExt;
//! use property_validation::client::take;
//! use property_validation::models::CollectionParams;
//!
//! # async fn example(client: property_validation::PropertyValidationClient) -> property_validation::Result<()> {
//! // At most 25 tests; no page beyond the one holding the 25th is requested
//! let mut tests = client.tests().list(CollectionParams::new("my-project").top(10))?;
//! let first = take(&mut tests, 25).await?;
//!
//! // Whole pages of runs
//! let mut runs = client.runs().list(CollectionParams::new("my-project"))?;
//! let pages = runs.by_page();
//! while let Some(page) = pages.next().await {
//!     println!("page with {} runs", page?.len());
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use auth::{AccessTokenCallback, Credentials};
pub use client::{ClientConfig, PropertyValidationClient};
pub use error::{Error, Result};
pub use models::{
    IModelId, NamedVersionId, ProjectId, ResultId, RuleId, RunId, TemplateId, TestId,
};

/// Prelude module for convenient imports.
///
/// ```rust
/// use property_validation::prelude::*;
/// ```
pub mod prelude {
    pub use crate::auth::AccessTokenCallback;
    pub use crate::client::{
        collect_all, take, ClientConfig, PageStream, PaginatedStream, PropertyValidationClient,
    };
    pub use crate::error::{Error, Result};
    pub use crate::models::{
        // Primitives
        IModelId, NamedVersionId, ProjectId, ResultId, RuleId, RunId, TemplateId, TestId,
        // Requests
        CollectionParams, CreateRule, CreateTest, RunTest, UpdateRule, UpdateTest,
        // Entities
        MinimalRule, MinimalRun, Rule, RuleDetails, RuleTemplate, RunDetails, StartedRun, Test,
        TestDetails, TestItem, ValidationResult,
    };
}
