//! Schema and properties metadata of an iModel.

use serde::{Deserialize, Serialize};

/// A property of an EC class.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyInfo {
    /// Property name
    pub name: String,
    /// Display label
    #[serde(default)]
    pub label: Option<String>,
}

/// An EC class or aspect with its properties.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassInfo {
    /// Class name
    pub name: String,
    /// Display label
    #[serde(default)]
    pub label: Option<String>,
    /// Properties of the class
    #[serde(default)]
    pub properties: Vec<PropertyInfo>,
}

/// An EC schema of the iModel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaInfo {
    /// Schema name
    pub name: String,
    /// Display label
    #[serde(default)]
    pub label: Option<String>,
    /// Entity classes
    #[serde(default)]
    pub entity_classes: Vec<ClassInfo>,
    /// Aspects
    #[serde(default)]
    pub aspects: Vec<ClassInfo>,
    /// Type definitions
    #[serde(default)]
    pub type_definitions: Vec<ClassInfo>,
}

/// Schemas matching the search filter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertiesSearchResults {
    /// Schemas
    #[serde(default)]
    pub schemas: Vec<SchemaInfo>,
}

/// Payload of a properties info response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertiesData {
    /// Search results
    pub search_property: PropertiesSearchResults,
}

/// Response of the properties info call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertiesInfo {
    /// Extraction status: `available` or `unavailable`
    pub status: String,
    /// Properties data, absent while unavailable
    #[serde(default)]
    pub data: Option<PropertiesData>,
}

impl PropertiesInfo {
    /// Returns `true` if schema extraction has finished for the iModel.
    pub fn is_available(&self) -> bool {
        self.status == "available"
    }

    /// All schemas, empty while unavailable.
    pub fn schemas(&self) -> &[SchemaInfo] {
        self.data
            .as_ref()
            .map(|d| d.search_property.schemas.as_slice())
            .unwrap_or(&[])
    }
}
