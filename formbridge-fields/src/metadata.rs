//! Persistence metadata and the model-manager abstraction.
//!
//! `ClassMetadata` holds the field and association mappings the persistence
//! layer declared for one managed class, keyed by field name for lookup
//! during form fixup. `ModelManager` is the seam to the persistence backend.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::{AssociationMapping, FieldMapping};

/// Mapping metadata for one managed class.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClassMetadata {
    pub class: String,
    #[serde(default)]
    pub field_mappings: HashMap<String, FieldMapping>,
    #[serde(default)]
    pub association_mappings: HashMap<String, AssociationMapping>,
}

impl ClassMetadata {
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            field_mappings: HashMap::new(),
            association_mappings: HashMap::new(),
        }
    }

    /// Register a scalar field mapping, keyed by its field name.
    pub fn with_field(mut self, mapping: FieldMapping) -> Self {
        self.field_mappings
            .insert(mapping.field_name.clone(), mapping);
        self
    }

    /// Register an association mapping, keyed by its field name.
    pub fn with_association(mut self, mapping: AssociationMapping) -> Self {
        self.association_mappings
            .insert(mapping.field_name.clone(), mapping);
        self
    }

    /// Look up the scalar mapping declared for a field.
    pub fn field_mapping(&self, name: &str) -> Option<&FieldMapping> {
        self.field_mappings.get(name)
    }

    /// Look up the association mapping declared for a field.
    pub fn association_mapping(&self, name: &str) -> Option<&AssociationMapping> {
        self.association_mappings.get(name)
    }
}

/// Abstraction over the persistence layer providing metadata lookup.
pub trait ModelManager {
    /// Identifier of the persistence backend, stored as the `model_manager`
    /// option value in form options.
    fn name(&self) -> &str;

    /// Metadata for a managed class, if the backend manages it.
    fn metadata(&self, class: &str) -> Option<&ClassMetadata>;

    /// Whether the backend has metadata for a class.
    fn has_metadata(&self, class: &str) -> bool {
        self.metadata(class).is_some()
    }
}

/// In-memory model manager backed by registered `ClassMetadata`.
///
/// Production backends wrap a real object mapper; this one serves consumers
/// that assemble metadata by hand and is the manager used throughout tests.
#[derive(Debug, Default)]
pub struct InMemoryModelManager {
    name: String,
    classes: HashMap<String, ClassMetadata>,
}

impl InMemoryModelManager {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            classes: HashMap::new(),
        }
    }

    /// Register metadata for a class, replacing any previous registration.
    pub fn with_class(mut self, metadata: ClassMetadata) -> Self {
        debug!(class = %metadata.class, "registered class metadata");
        self.classes.insert(metadata.class.clone(), metadata);
        self
    }

    /// All classes with registered metadata.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.keys().map(|c| c.as_str())
    }
}

impl ModelManager for InMemoryModelManager {
    fn name(&self) -> &str {
        &self.name
    }

    fn metadata(&self, class: &str) -> Option<&ClassMetadata> {
        self.classes.get(class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MappingType;

    fn post_metadata() -> ClassMetadata {
        ClassMetadata::new("App\\Post")
            .with_field(FieldMapping {
                field_name: "title".into(),
                type_name: "string".into(),
                nullable: false,
            })
            .with_association(AssociationMapping {
                field_name: "comments".into(),
                mapping: MappingType::OneToMany,
                target_entity: "App\\Comment".into(),
            })
    }

    #[test]
    fn lookup_by_field_name() {
        let meta = post_metadata();
        assert_eq!(meta.field_mapping("title").unwrap().type_name, "string");
        assert_eq!(
            meta.association_mapping("comments").unwrap().target_entity,
            "App\\Comment"
        );
        assert!(meta.field_mapping("missing").is_none());
        assert!(meta.association_mapping("title").is_none());
    }

    #[test]
    fn manager_metadata_lookup() {
        let manager = InMemoryModelManager::new("memory").with_class(post_metadata());
        assert_eq!(manager.name(), "memory");
        assert!(manager.has_metadata("App\\Post"));
        assert!(!manager.has_metadata("App\\Unknown"));
        assert_eq!(
            manager.metadata("App\\Post").unwrap().class,
            "App\\Post"
        );
    }

    #[test]
    fn with_class_replaces_registration() {
        let manager = InMemoryModelManager::new("memory")
            .with_class(ClassMetadata::new("App\\Post"))
            .with_class(post_metadata());
        let meta = manager.metadata("App\\Post").unwrap();
        assert!(meta.field_mapping("title").is_some());
        assert_eq!(manager.classes().count(), 1);
    }

    #[test]
    fn metadata_round_trip() {
        let meta = post_metadata();
        let json = serde_json::to_string(&meta).unwrap();
        let parsed: ClassMetadata = serde_json::from_str(&json).unwrap();
        assert_eq!(meta, parsed);
    }
}
