use derive_more::Display;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::{
    Component, LicenseChoice, OrganizationalContact, OrganizationalEntity, Property, Tool,
    ToolChoice, ToolsMetadata,
};

/// The `metadata` node of a bill of materials document.
///
/// Can be deserialised from any conformant metadata node, reconciling the
/// shapes producers have emitted for the `authors` and `tools` fields over
/// successive schema revisions. For example:
/// ```json
/// {
///     "authors": [
///         { "name": "Alice", "email": "alice@example.com" }
///     ],
///     "component": {
///         "type": "application",
///         "name": "acme-app",
///         "version": "9.1.1"
///     },
///     "tools": {
///         "components": [
///             { "type": "application", "name": "toolA" }
///         ]
///     }
/// }
/// ```
///
/// A field is populated only if its key is present in the input. An absent
/// key is distinguishable from a present-but-empty collection.
#[non_exhaustive]
#[derive(Serialize, Clone, Eq, PartialEq, Debug, Default, Display)]
#[display("{}", serde_json::to_string(self).unwrap_or_default())]
pub struct Metadata {
    /// The authors of the document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authors: Option<Vec<OrganizationalContact>>,
    /// The component the document describes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<Component>,
    /// The organization that manufactured the described component.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacture: Option<OrganizationalEntity>,
    /// The organization that supplied the described component.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier: Option<OrganizationalEntity>,
    /// The license the document is made available under.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<LicenseChoice>,
    /// Document-level name-value pairs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<Property>>,
    /// The tooling that produced the document, in either schema revision.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<ToolsMetadata>,
}

impl Metadata {
    /// Create empty metadata.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconcile a `metadata` JSON node into [`Metadata`].
    ///
    /// Each known key is inspected independently and accepted in every shape
    /// producers emit for it:
    /// - `authors` may be a single object or an array of objects,
    /// - `tools` may be a legacy array of tools or a tool choice object with
    ///   optional `components` and `services` collections,
    /// - the remaining keys each have a single accepted shape.
    ///
    /// Unknown keys are ignored. Absent keys leave the corresponding field
    /// unset.
    ///
    /// # Errors
    /// Returns a [`MetadataConversionError`] if `node` is not an object, if a
    /// field holds a JSON kind no supported shape accepts, or if a sub-tree
    /// cannot be converted into its model type. A failure on any field fails
    /// the whole reconciliation.
    pub fn from_value(node: &Value) -> Result<Self, MetadataConversionError> {
        let Value::Object(node) = node else {
            return Err(MetadataConversionError::unexpected_kind(
                "metadata",
                "an object",
                node,
            ));
        };

        let mut metadata = Self::new();
        if let Some(authors) = node.get("authors") {
            metadata.authors = Some(authors_from_value(authors)?);
        }
        if let Some(component) = node.get("component") {
            metadata.component = Some(convert("component", component)?);
        }
        if let Some(manufacture) = node.get("manufacture") {
            metadata.manufacture = Some(convert("manufacture", manufacture)?);
        }
        if let Some(supplier) = node.get("supplier") {
            metadata.supplier = Some(convert("supplier", supplier)?);
        }
        if let Some(license) = node.get("license") {
            metadata.license = Some(convert("license", license)?);
        }
        if let Some(properties) = node.get("properties") {
            metadata.properties = Some(convert_elements("properties", properties)?);
        }
        if let Some(tools) = node.get("tools") {
            metadata.tools = Some(tools_from_value(tools)?);
        }
        Ok(metadata)
    }

    /// Return the tool list, if `tools` was the legacy flat array.
    #[must_use]
    pub fn legacy_tools(&self) -> Option<&[Tool]> {
        self.tools.as_ref().and_then(ToolsMetadata::as_list)
    }

    /// Return the tool choice, if `tools` was the structured choice object.
    #[must_use]
    pub fn tool_choice(&self) -> Option<&ToolChoice> {
        self.tools.as_ref().and_then(ToolsMetadata::as_choice)
    }
}

impl TryFrom<&str> for Metadata {
    type Error = serde_json::Error;
    fn try_from(metadata_json: &str) -> Result<Self, Self::Error> {
        serde_json::from_str::<Self>(metadata_json)
    }
}

impl<'de> serde::Deserialize<'de> for Metadata {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let node = Value::deserialize(d)?;
        Self::from_value(&node).map_err(serde::de::Error::custom)
    }
}

/// The `authors` of a document: a single contact object in some documents, an
/// array of contact objects in others.
fn authors_from_value(
    value: &Value,
) -> Result<Vec<OrganizationalContact>, MetadataConversionError> {
    match value {
        Value::Object(_) => Ok(vec![convert("authors", value)?]),
        Value::Array(_) => convert_elements("authors", value),
        _ => Err(MetadataConversionError::unexpected_kind(
            "authors",
            "an object or an array",
            value,
        )),
    }
}

/// The tooling provenance of a document, dispatched on the JSON kind of the
/// `tools` value: an array is the legacy flat tool list, an object is a
/// structured tool choice.
fn tools_from_value(value: &Value) -> Result<ToolsMetadata, MetadataConversionError> {
    match value {
        Value::Array(_) => Ok(ToolsMetadata::List(convert_elements("tools", value)?)),
        Value::Object(tools) => {
            let mut choice = ToolChoice::default();
            if let Some(components) = tools.get("components") {
                choice.components = Some(convert_elements("tools.components", components)?);
            }
            if let Some(services) = tools.get("services") {
                choice.services = Some(convert_elements("tools.services", services)?);
            }
            Ok(ToolsMetadata::Choice(choice))
        }
        _ => Err(MetadataConversionError::unexpected_kind(
            "tools",
            "an array or an object",
            value,
        )),
    }
}

/// Convert a sub-tree into a model type, recording the field path on failure.
fn convert<T: DeserializeOwned>(
    path: impl Into<String>,
    value: &Value,
) -> Result<T, MetadataConversionError> {
    T::deserialize(value).map_err(|source| MetadataConversionError::InvalidField {
        path: path.into(),
        source,
    })
}

/// Convert every element of an array sub-tree, preserving input order.
fn convert_elements<T: DeserializeOwned>(
    path: &str,
    value: &Value,
) -> Result<Vec<T>, MetadataConversionError> {
    let Value::Array(elements) = value else {
        return Err(MetadataConversionError::unexpected_kind(
            path, "an array", value,
        ));
    };
    elements
        .iter()
        .enumerate()
        .map(|(index, element)| convert(format!("{path}[{index}]"), element))
        .collect()
}

/// An error reconciling a `metadata` JSON node into [`Metadata`].
#[derive(Debug, Error)]
pub enum MetadataConversionError {
    /// A field holds a JSON kind that no supported schema revision emits for
    /// it.
    #[error("{path} must be {expected}, but found {found}")]
    UnexpectedKind {
        /// Path of the offending field.
        path: String,
        /// The accepted JSON kinds.
        expected: &'static str,
        /// The JSON kind found.
        found: &'static str,
    },
    /// A field could not be converted into its model type.
    #[error("{path} is invalid: {source}")]
    InvalidField {
        /// Path of the offending field, including the element index for array
        /// elements.
        path: String,
        /// The underlying conversion error.
        source: serde_json::Error,
    },
}

impl MetadataConversionError {
    fn unexpected_kind(path: impl Into<String>, expected: &'static str, found: &Value) -> Self {
        Self::UnexpectedKind {
            path: path.into(),
            expected,
            found: json_kind(found),
        }
    }

    /// Return the path of the offending field.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::UnexpectedKind { path, .. } | Self::InvalidField { path, .. } => path,
        }
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
