//! Credential handling for the Property Validation API.
//!
//! Token acquisition is left to the caller. A request can be authorized in
//! two ways:
//!
//! 1. **Access token callback** - registered once on the client and invoked
//!    before every request.
//! 2. **Explicit token** - attached to a service handle with
//!    `with_access_token`, taking precedence over the callback.
//!
//! ```no_run
//! use property_validation::{AccessTokenCallback, ClientConfig, PropertyValidationClient};
//!
//! # fn example() -> property_validation::Result<()> {
//! let client = PropertyValidationClient::new(ClientConfig::default())?
//!     .with_access_token_callback(AccessTokenCallback::new(|| async {
//!         Ok(std::env::var("ITWIN_ACCESS_TOKEN").unwrap_or_default())
//!     }));
//!
//! // Explicit token for a single service handle
//! let rules = client.rules().with_access_token("Bearer eyJhbGciOi...");
//! # Ok(())
//! # }
//! ```

mod credentials;

pub use credentials::{AccessTokenCallback, Credentials};
pub(crate) use credentials::authorization_value;
