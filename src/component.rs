use serde::{Deserialize, Serialize};

/// The classification of a [`Component`].
#[derive(Serialize, Deserialize, Clone, Copy, Eq, PartialEq, Debug)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentType {
    /// A software application.
    Application,
    /// A software framework.
    Framework,
    /// A software library.
    Library,
    /// A packaging or deployment container.
    Container,
    /// An operating system.
    OperatingSystem,
    /// A hardware device.
    Device,
    /// Device firmware.
    Firmware,
    /// A file not covered by the other classifications.
    File,
}

/// A software component described by a bill of materials document.
///
/// An example `JSON` document for a component:
/// ```json
/// {
///     "type": "library",
///     "group": "org.example",
///     "name": "libX",
///     "version": "1.2.3",
///     "purl": "pkg:maven/org.example/libX@1.2.3"
/// }
/// ```
#[derive(Serialize, Deserialize, Clone, Eq, PartialEq, Debug)]
pub struct Component {
    /// The classification of the component.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub component_type: Option<ComponentType>,
    /// The grouping name, namespace, or identifier of the component.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// The name of the component.
    pub name: String,
    /// The version of the component.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// A description of the component.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The package URL of the component.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purl: Option<String>,
}

impl Component {
    /// Create a component with `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            component_type: None,
            group: None,
            name: name.into(),
            version: None,
            description: None,
            purl: None,
        }
    }

    /// Set the classification of the component.
    #[must_use]
    pub fn with_component_type(mut self, component_type: ComponentType) -> Self {
        self.component_type = Some(component_type);
        self
    }

    /// Set the version of the component.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }
}
