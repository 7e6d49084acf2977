use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::{Component, Metadata};

/// A bill of materials document envelope.
///
/// An example `JSON` document for a bill of materials:
/// ```json
/// {
///     "bomFormat": "CycloneDX",
///     "specVersion": "1.5",
///     "version": 1,
///     "metadata": {
///         "tools": [{ "name": "toolA" }]
///     },
///     "components": [
///         { "type": "library", "name": "libX", "version": "1.2.3" }
///     ]
/// }
/// ```
#[non_exhaustive]
#[derive(Serialize, Deserialize, Clone, Eq, PartialEq, Debug, Display)]
#[display("{}", serde_json::to_string(self).unwrap_or_default())]
#[serde(rename_all = "camelCase")]
pub struct Bom {
    /// The format of the document. Must be `CycloneDX`.
    pub bom_format: monostate::MustBe!("CycloneDX"),
    /// The version of the specification the document conforms to.
    pub spec_version: String,
    /// The unique serial number of the document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    /// The version of the document itself. Producers that omit it mean 1.
    #[serde(default = "bom_version_default")]
    pub version: u32,
    /// The metadata of the document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    /// The components the document describes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<Component>>,
}

const fn bom_version_default() -> u32 {
    1
}

impl Bom {
    /// Create a document envelope conforming to specification `spec_version`.
    #[must_use]
    pub fn new(spec_version: impl Into<String>) -> Self {
        Self {
            bom_format: monostate::MustBe!("CycloneDX"),
            spec_version: spec_version.into(),
            serial_number: None,
            version: 1,
            metadata: None,
            components: None,
        }
    }

    /// Serialize the document as a pretty-printed String of JSON.
    #[allow(clippy::missing_panics_doc)]
    #[must_use]
    pub fn to_string_pretty(&self) -> String {
        serde_json::to_string_pretty(self).expect("bill of materials is valid JSON")
    }

    /// Set the metadata.
    #[must_use]
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Set the components.
    #[must_use]
    pub fn with_components(mut self, components: Vec<Component>) -> Self {
        self.components = Some(components);
        self
    }
}

impl TryFrom<&str> for Bom {
    type Error = serde_json::Error;
    fn try_from(bom_json: &str) -> Result<Self, Self::Error> {
        serde_json::from_str::<Self>(bom_json)
    }
}
