use serde::{Deserialize, Serialize};

/// A document-level name-value pair.
#[derive(Serialize, Deserialize, Clone, Eq, PartialEq, Debug)]
pub struct Property {
    /// The name of the property.
    pub name: String,
    /// The value of the property.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}
