//! Test run models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::Link;
use super::primitives::{ResultId, RunId};

/// Links carried by a run in its minimal representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunDetailLink {
    /// The full run
    pub run: Link,
}

/// Minimal representation of a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinimalRun {
    /// Run id
    pub id: RunId,
    /// Run display name
    pub display_name: String,
    /// Link to the full run
    #[serde(rename = "_links")]
    pub links: RunDetailLink,
}

/// Links carried by a run in its full representation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunLinks {
    /// Result set of the run
    #[serde(default)]
    pub result: Option<Link>,
    /// Test that was run
    #[serde(default)]
    pub test: Option<Link>,
}

/// Full representation of a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunDetails {
    /// Run id
    pub id: RunId,
    /// Run display name
    pub display_name: String,
    /// When the run was started
    #[serde(default)]
    pub executed_date_time: Option<DateTime<Utc>>,
    /// Number of issues found, as reported by the service
    #[serde(default)]
    pub count: Option<String>,
    /// Run status (`queued`, `started`, `completed`, `failed`, ...)
    pub status: String,
    /// Id of the result set once the run completed
    #[serde(default)]
    pub result_id: Option<ResultId>,
    /// Name of the user that started the run
    #[serde(default)]
    pub user_name: Option<String>,
    /// Result and test links
    #[serde(rename = "_links", default)]
    pub links: RunLinks,
}

impl RunDetails {
    /// Returns `true` once the service will no longer change this run.
    pub fn is_finished(&self) -> bool {
        matches!(
            self.status.as_str(),
            "completed" | "failed" | "cancelled" | "terminatedOnError"
        )
    }
}
