//! Data models for the Property Validation API.
//!
//! Models are organized by resource:
//!
//! - [`primitives`] - Identifier newtypes like `RuleId`, `TestId`, etc.
//! - [`common`] - Links, the `Prefer` hint and list query parameters
//! - [`rule`] - Rules and their create/update bodies
//! - [`template`] - Rule templates
//! - [`validation_test`] - Tests and run requests
//! - [`run`] - Test runs
//! - [`result`] - Run results
//! - [`properties`] - Schema/properties metadata

pub mod primitives;
pub mod common;
pub mod rule;
pub mod template;
pub mod run;
pub mod result;
pub mod properties;

// Re-export commonly used types
pub use primitives::*;
pub use common::*;
pub use rule::*;
pub use template::*;
pub use validation_test::*;
pub use run::*;
pub use result::*;
pub use properties::*;
