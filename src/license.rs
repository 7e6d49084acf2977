use derive_more::From;
use serde::{Deserialize, Serialize};

/// A license reference, by SPDX identifier or by name.
#[derive(Serialize, Deserialize, Clone, Eq, PartialEq, Debug, Default)]
pub struct License {
    /// The SPDX license identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The name of the license, for licenses without an SPDX identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The URL of the license text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// The shapes producers emit for a `license` field.
///
/// Can be deserialised from a list of license references, a single license
/// reference, or an SPDX license expression. For example:
/// ```json
/// [{ "id": "MIT" }, { "id": "Apache-2.0" }]
/// ```
/// or
/// ```json
/// { "id": "MIT" }
/// ```
/// or
/// ```json
/// "MIT OR Apache-2.0"
/// ```
#[derive(Serialize, Deserialize, Clone, Eq, PartialEq, Debug, From)]
#[serde(untagged)]
pub enum LicenseChoice {
    /// A list of license references.
    List(Vec<License>),
    /// A single license reference.
    Single(License),
    /// An SPDX license expression.
    #[from(String, &str)]
    Expression(String),
}
