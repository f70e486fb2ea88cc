//! Core field-description and mapping types.
//!
//! A `FieldDescription` represents one editable field in an admin form.
//! Mapping descriptors (`FieldMapping`, `AssociationMapping`) are copied onto
//! it from persistence metadata during form construction; the options map is
//! an open `serde_json` map because the form layer consumes mixed values.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Relationship kind between two persisted entities.
///
/// `Scalar` covers plain value fields; the four relational kinds mirror the
/// association kinds of the persistence layer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum MappingType {
    Scalar,
    OneToOne,
    OneToMany,
    ManyToOne,
    ManyToMany,
}

impl MappingType {
    /// True for the four relational kinds.
    pub fn is_association(&self) -> bool {
        !matches!(self, Self::Scalar)
    }

    /// True when the field holds a collection of related entities.
    pub fn is_to_many(&self) -> bool {
        matches!(self, Self::OneToMany | Self::ManyToMany)
    }
}

/// Persistence descriptor for a scalar field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldMapping {
    pub field_name: String,
    /// Persistence-layer type, e.g. `string` or `long`.
    pub type_name: String,
    #[serde(default)]
    pub nullable: bool,
}

/// Persistence descriptor for a relational field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssociationMapping {
    pub field_name: String,
    pub mapping: MappingType,
    /// The persisted class on the other side of the association.
    pub target_entity: String,
}

/// The admin class attached to a relational field: the admin's identifier
/// and the persisted class that admin manages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssociatedAdmin {
    pub admin_class: String,
    pub model_class: String,
}

/// One editable field in an admin form.
///
/// Created by the form layer with a name and declared widget type, then
/// enriched in place: mapping descriptors copied from metadata, the owning
/// admin reference set, and options defaulted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldDescription {
    pub name: String,
    /// Declared form widget type. Must be set before the field is fixed up;
    /// a missing type is a configuration error.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub options: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_mapping: Option<FieldMapping>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub association_mapping: Option<AssociationMapping>,
    /// Owning admin, set during fixup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_class: Option<String>,
    /// Related admin, set when an admin class is attached to a relational
    /// field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub associated_admin: Option<AssociatedAdmin>,
}

impl FieldDescription {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: None,
            options: Map::new(),
            field_mapping: None,
            association_mapping: None,
            admin_class: None,
            associated_admin: None,
        }
    }

    /// Set the declared widget type.
    pub fn with_type(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    /// Set an option at construction time.
    pub fn with_option(mut self, name: impl Into<String>, value: Value) -> Self {
        self.options.insert(name.into(), value);
        self
    }

    /// The mapping kind: `Scalar` unless an association mapping is present.
    pub fn mapping_type(&self) -> MappingType {
        self.association_mapping
            .as_ref()
            .map(|a| a.mapping)
            .unwrap_or(MappingType::Scalar)
    }

    /// Target entity of the association, if this is a relational field.
    pub fn target_entity(&self) -> Option<&str> {
        self.association_mapping
            .as_ref()
            .map(|a| a.target_entity.as_str())
    }

    /// Look up an option by name.
    pub fn option(&self, name: &str) -> Option<&Value> {
        self.options.get(name)
    }

    /// Look up an option, falling back to a default value.
    pub fn option_or<'a>(&'a self, name: &str, default: &'a Value) -> &'a Value {
        self.options.get(name).unwrap_or(default)
    }

    /// Set an option, replacing any existing value.
    pub fn set_option(&mut self, name: impl Into<String>, value: Value) {
        self.options.insert(name.into(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn mapping_type_kebab_case_round_trip() {
        let mt = MappingType::OneToMany;
        let json = serde_json::to_string(&mt).unwrap();
        assert_eq!(json, "\"one-to-many\"");
        let parsed: MappingType = serde_json::from_str(&json).unwrap();
        assert_eq!(mt, parsed);
    }

    #[test]
    fn mapping_type_classification() {
        assert!(!MappingType::Scalar.is_association());
        assert!(MappingType::OneToOne.is_association());
        assert!(MappingType::ManyToOne.is_association());
        assert!(MappingType::OneToMany.is_to_many());
        assert!(MappingType::ManyToMany.is_to_many());
        assert!(!MappingType::ManyToOne.is_to_many());
        assert!(!MappingType::OneToOne.is_to_many());
    }

    #[test]
    fn mapping_type_defaults_to_scalar() {
        let field = FieldDescription::new("title").with_type("text");
        assert_eq!(field.mapping_type(), MappingType::Scalar);
        assert_eq!(field.target_entity(), None);
    }

    #[test]
    fn mapping_type_from_association() {
        let mut field = FieldDescription::new("comments");
        field.association_mapping = Some(AssociationMapping {
            field_name: "comments".into(),
            mapping: MappingType::OneToMany,
            target_entity: "App\\Comment".into(),
        });
        assert_eq!(field.mapping_type(), MappingType::OneToMany);
        assert_eq!(field.target_entity(), Some("App\\Comment"));
    }

    #[test]
    fn option_lookup_and_default() {
        let mut field = FieldDescription::new("title");
        assert!(field.option("edit").is_none());

        let standard = json!("standard");
        assert_eq!(field.option_or("edit", &standard), &standard);

        field.set_option("edit", json!("list"));
        assert_eq!(field.option("edit"), Some(&json!("list")));
        assert_eq!(field.option_or("edit", &standard), &json!("list"));
    }

    #[test]
    fn field_description_serializes_type_key() {
        let field = FieldDescription::new("title").with_type("text");
        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json["type"], "text");
        assert_eq!(json["name"], "title");
        assert!(json.get("type_name").is_none());
    }

    #[test]
    fn field_description_round_trip() {
        let mut field = FieldDescription::new("comments")
            .with_type("collection")
            .with_option("edit", json!("inline"));
        field.associated_admin = Some(AssociatedAdmin {
            admin_class: "CommentAdmin".into(),
            model_class: "App\\Comment".into(),
        });
        let json = serde_json::to_string(&field).unwrap();
        let parsed: FieldDescription = serde_json::from_str(&json).unwrap();
        assert_eq!(field, parsed);
    }
}
