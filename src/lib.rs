//! [CycloneDX](https://cyclonedx.org/) bill of materials metadata support.
//!
//! This crate supports serialisation and deserialisation of the `metadata`
//! node of a bill of materials document across the shapes producers have
//! emitted for it over successive schema revisions.
//!
//! [`Metadata`] can hold any conformant metadata node. Two of its fields are
//! polymorphic:
//! - `authors` may be a single contact object or an array of contact objects,
//!   and
//! - `tools` may be a legacy flat array of tools or a structured choice
//!   between component-shaped and service-shaped tool descriptions.
//!
//! [`Metadata::from_value`] reconciles all of these shapes by dispatching on
//! the JSON kind of each field, without the caller choosing a schema revision
//! up front. [`Bom`] is a thin document envelope showing how the surrounding
//! document model consumes [`Metadata`].

mod bom;
pub use bom::Bom;

mod metadata;
pub use metadata::{Metadata, MetadataConversionError};

mod tool;
pub use tool::{Tool, ToolChoice, ToolsMetadata};

mod component;
pub use component::{Component, ComponentType};

mod service;
pub use service::Service;

mod organization;
pub use organization::{OrganizationalContact, OrganizationalEntity};

mod license;
pub use license::{License, LicenseChoice};

mod property;
pub use property::Property;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_full() {
        let json = r#"{
            "authors": [
                { "name": "Alice", "email": "alice@example.com" },
                { "name": "Bob" }
            ],
            "component": {
                "type": "application",
                "group": "org.example",
                "name": "acme-app",
                "version": "9.1.1"
            },
            "manufacture": {
                "name": "Acme Inc",
                "url": ["https://example.com"]
            },
            "supplier": {
                "name": "Acme Distribution",
                "contact": [{ "email": "sales@example.com" }]
            },
            "license": "Apache-2.0",
            "properties": [
                { "name": "impact", "value": "high" }
            ],
            "tools": {
                "components": [{ "type": "application", "name": "toolA" }],
                "services": [{ "name": "scanner" }]
            }
        }"#;
        let metadata = Metadata::try_from(json).unwrap();
        assert_eq!(metadata.authors.as_ref().map(Vec::len), Some(2));
        assert_eq!(metadata.component.as_ref().unwrap().name, "acme-app");
        assert_eq!(
            metadata.manufacture.as_ref().unwrap().name.as_deref(),
            Some("Acme Inc")
        );
        assert_eq!(
            metadata.supplier.as_ref().unwrap().name.as_deref(),
            Some("Acme Distribution")
        );
        assert_eq!(
            metadata.license,
            Some(LicenseChoice::Expression("Apache-2.0".to_string()))
        );
        assert_eq!(metadata.properties.as_ref().map(Vec::len), Some(1));
        let choice = metadata.tool_choice().unwrap();
        assert_eq!(choice.components.as_ref().map(Vec::len), Some(1));
        assert_eq!(choice.services.as_ref().map(Vec::len), Some(1));
        assert!(metadata.legacy_tools().is_none());
    }

    #[test]
    fn metadata_round_trip() {
        let json = r#"{
            "authors": [{ "name": "Alice" }],
            "component": { "name": "acme-app" },
            "tools": [{ "vendor": "Acme Inc", "name": "toolA", "version": "9.1" }]
        }"#;
        let metadata = Metadata::try_from(json).unwrap();
        let round_tripped =
            Metadata::try_from(serde_json::to_string(&metadata).unwrap().as_str()).unwrap();
        assert_eq!(metadata, round_tripped);
    }
}
