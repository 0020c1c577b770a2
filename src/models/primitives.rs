//! Strongly-typed identifiers.
//!
//! Every entity of the service is addressed by an opaque string id. The
//! newtypes below keep a rule id from being passed where a test id is
//! expected.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Error, Result};

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident, $what:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new id from a string.
            pub fn new(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            /// Get the id as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// The id as a URL path segment; blank ids are rejected.
            pub(crate) fn segment(&self) -> Result<&str> {
                if self.0.trim().is_empty() {
                    return Err(Error::InvalidInput(format!("{} must not be empty", $what)));
                }
                Ok(&self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }
    };
}

id_type!(
    /// Id of a validation rule.
    ///
    /// # Example
    ///
    /// ```
    /// use property_validation::RuleId;
    ///
    /// let rule = RuleId::new("b9f3c2a1");
    /// assert_eq!(rule.as_str(), "b9f3c2a1");
    /// ```
    RuleId,
    "rule id"
);

id_type!(
    /// Id of a rule template.
    TemplateId,
    "template id"
);

id_type!(
    /// Id of a validation test (a named set of rules).
    TestId,
    "test id"
);

id_type!(
    /// Id of a test run.
    RunId,
    "run id"
);

id_type!(
    /// Id of the result set produced by a run.
    ResultId,
    "result id"
);

id_type!(
    /// Id of an iTwin project.
    ProjectId,
    "project id"
);

id_type!(
    /// Id of an iModel.
    IModelId,
    "iModel id"
);

id_type!(
    /// Id of an iModel named version.
    NamedVersionId,
    "named version id"
);
