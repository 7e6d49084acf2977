use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

use crate::{Component, Service};

/// A tool used to create a bill of materials document, as described by the
/// legacy flat `tools` array.
#[derive(Serialize, Deserialize, Clone, Eq, PartialEq, Debug, Default)]
pub struct Tool {
    /// The vendor of the tool.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    /// The name of the tool.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The version of the tool.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Tooling provenance expressed as a structured choice between
/// component-shaped and service-shaped tool descriptions.
///
/// An example `JSON` document for a tool choice:
/// ```json
/// {
///     "components": [
///         { "type": "application", "name": "toolA", "version": "9.1" }
///     ],
///     "services": [
///         { "name": "scanner" }
///     ]
/// }
/// ```
///
/// Either, both, or neither collection may be present.
#[derive(Serialize, Deserialize, Clone, Eq, PartialEq, Debug, Default)]
pub struct ToolChoice {
    /// Tools described as components.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<Component>>,
    /// Tools described as services.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<Service>>,
}

/// A wrapper to handle the two schema revisions of the `tools` field.
///
/// Earlier documents emit a flat array of [`Tool`], later documents an object
/// holding a [`ToolChoice`]. Exactly one representation is held; the
/// [`Metadata`](crate::Metadata) accessors project whichever is present.
#[derive(Serialize, Deserialize, Clone, Eq, PartialEq, Debug, Display, From)]
#[display("{}", serde_json::to_string(self).unwrap_or_default())]
#[serde(untagged)]
pub enum ToolsMetadata {
    /// A legacy flat list of tools.
    List(Vec<Tool>),
    /// A structured choice between tool kinds.
    Choice(ToolChoice),
}

impl ToolsMetadata {
    /// Return the tool list, if this is the legacy representation.
    #[must_use]
    pub fn as_list(&self) -> Option<&[Tool]> {
        match self {
            Self::List(tools) => Some(tools),
            Self::Choice(_) => None,
        }
    }

    /// Return the tool choice, if this is the structured representation.
    #[must_use]
    pub const fn as_choice(&self) -> Option<&ToolChoice> {
        match self {
            Self::Choice(choice) => Some(choice),
            Self::List(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tools_untagged() {
        let list = serde_json::from_str::<ToolsMetadata>(r#"[{ "name": "toolA" }]"#).unwrap();
        assert_eq!(list.as_list().map(<[Tool]>::len), Some(1));
        assert!(list.as_choice().is_none());

        let choice =
            serde_json::from_str::<ToolsMetadata>(r#"{ "services": [{ "name": "scanner" }] }"#)
                .unwrap();
        assert!(choice.as_list().is_none());
        let choice = choice.as_choice().unwrap();
        assert_eq!(choice.services.as_ref().map(Vec::len), Some(1));
        assert!(choice.components.is_none());
    }

    #[test]
    fn tool_choice_serialises_only_present_collections() {
        let choice = ToolsMetadata::Choice(ToolChoice {
            components: None,
            services: Some(vec![Service::new("scanner")]),
        });
        assert_eq!(choice.to_string(), r#"{"services":[{"name":"scanner"}]}"#);
    }

    #[test]
    fn tools_display() {
        let tools = ToolsMetadata::List(vec![Tool {
            name: Some("toolA".to_string()),
            ..Tool::default()
        }]);
        assert_eq!(tools.to_string(), r#"[{"name":"toolA"}]"#);
    }
}
