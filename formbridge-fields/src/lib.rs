//! Field descriptions and persistence mapping metadata
//!
//! `formbridge-fields` is the data-model crate of the formbridge workspace.
//! It owns the vocabulary shared between the persistence side and the form
//! side: mapping kinds, per-class mapping metadata, the model-manager seam,
//! and the mutable `FieldDescription` the form layer enriches per field.
//!
//! # Architecture
//!
//! - **Schema-only**: describes fields and mappings, never field values
//! - **Backend-agnostic**: persistence access goes through `ModelManager`
//! - **Open options**: per-field options are a `serde_json` map because the
//!   consuming form layer works with mixed values

pub mod metadata;
pub mod types;

pub use metadata::{ClassMetadata, InMemoryModelManager, ModelManager};
pub use types::{AssociatedAdmin, AssociationMapping, FieldDescription, FieldMapping, MappingType};
