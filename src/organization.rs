use serde::{Deserialize, Serialize};

/// An individual contact within an organization.
///
/// For example:
/// ```json
/// {
///     "name": "Alice",
///     "email": "alice@example.com"
/// }
/// ```
#[derive(Serialize, Deserialize, Clone, Eq, PartialEq, Debug, Default)]
pub struct OrganizationalContact {
    /// The name of the contact.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The email address of the contact.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// The phone number of the contact.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// An organization such as the manufacturer or supplier of a component.
#[derive(Serialize, Deserialize, Clone, Eq, PartialEq, Debug, Default)]
pub struct OrganizationalEntity {
    /// The name of the organization.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// URLs of the organization.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<Vec<String>>,
    /// Contacts within the organization.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<Vec<OrganizationalContact>>,
}
