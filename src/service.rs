use serde::{Deserialize, Serialize};

/// A service described by a bill of materials document.
///
/// An example `JSON` document for a service:
/// ```json
/// {
///     "group": "org.example",
///     "name": "scanner",
///     "version": "2.0.0",
///     "description": "Dependency scanning service"
/// }
/// ```
#[derive(Serialize, Deserialize, Clone, Eq, PartialEq, Debug)]
pub struct Service {
    /// The grouping name or identifier of the service provider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// The name of the service.
    pub name: String,
    /// The version of the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// A description of the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Service {
    /// Create a service with `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            group: None,
            name: name.into(),
            version: None,
            description: None,
        }
    }
}
