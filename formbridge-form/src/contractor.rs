//! The form contractor.
//!
//! Translates persistence mapping metadata into form-builder configuration:
//! `fix_field_description` enriches a field description from the metadata of
//! the admin's managed class, and `default_options` computes the option map a
//! widget type starts from. The form-building pipeline calls them in that
//! order for every field.

use serde_json::{json, Map, Value};
use tracing::debug;

use formbridge_fields::FieldDescription;

use crate::admin::Admin;
use crate::builder::{FormBuilder, FormFactory};
use crate::error::{FormError, Result};
use crate::widget::WidgetKind;

/// Option key under which the field description itself is embedded in every
/// default-option map.
pub const FIELD_DESCRIPTION_KEY: &str = "field_description";

/// Builds form configuration for admin fields.
pub struct FormContractor<F> {
    factory: F,
}

impl<F: FormFactory> FormContractor<F> {
    pub fn new(factory: F) -> Self {
        Self { factory }
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// Create a named form builder through the configured factory.
    pub fn form_builder(&self, name: &str, options: Map<String, Value>) -> FormBuilder {
        self.factory.create_builder(name, options)
    }

    /// Apply the default settings to a field description.
    ///
    /// Copies the matching field or association mapping from the metadata of
    /// the admin's managed class, sets the owning admin reference, defaults
    /// the `edit` option to `"standard"`, and asks the admin to attach a
    /// related admin class for relational fields.
    ///
    /// Fails if the field has no declared widget type: the caller must
    /// always declare one, so a missing type signals misconfiguration.
    pub fn fix_field_description(
        &self,
        admin: &dyn Admin,
        field: &mut FieldDescription,
    ) -> Result<()> {
        if let Some(metadata) = admin.model_manager().metadata(admin.model_class()) {
            if let Some(mapping) = metadata.field_mapping(&field.name) {
                debug!(field = %field.name, "copied field mapping from metadata");
                field.field_mapping = Some(mapping.clone());
            }
            if let Some(mapping) = metadata.association_mapping(&field.name) {
                debug!(
                    field = %field.name,
                    target = %mapping.target_entity,
                    "copied association mapping from metadata"
                );
                field.association_mapping = Some(mapping.clone());
            }
        }

        if field.type_name.is_none() {
            return Err(FormError::missing_field_type(
                &field.name,
                admin.admin_class(),
            ));
        }

        field.admin_class = Some(admin.admin_class().to_string());

        let edit = field.option_or("edit", &json!("standard")).clone();
        field.set_option("edit", edit);

        if field.mapping_type().is_association() {
            admin.attach_admin_class(field);
        }

        Ok(())
    }

    /// Compute the default option map for a widget type.
    ///
    /// The field description itself is always embedded under
    /// [`FIELD_DESCRIPTION_KEY`]; the three known widget kinds add their own
    /// options on top, any other type gets the base map unchanged.
    pub fn default_options(
        &self,
        admin: &dyn Admin,
        type_name: &str,
        field: &FieldDescription,
    ) -> Result<Map<String, Value>> {
        let mut options = Map::new();
        options.insert(FIELD_DESCRIPTION_KEY.into(), serde_json::to_value(field)?);

        let kind = WidgetKind::from_type(type_name);
        if let Some(kind) = kind {
            debug!(field = %field.name, widget = kind.as_str(), "computing widget default options");
        }

        match kind {
            Some(WidgetKind::ModelReference) => {
                model_reference_options(admin, field, &mut options)
            }
            Some(WidgetKind::InlineAdmin) => inline_admin_options(&mut options),
            Some(WidgetKind::Collection) => collection_options(field, &mut options)?,
            None => {}
        }

        Ok(options)
    }
}

/// Options for a reference to another persisted entity.
///
/// To-many mappings become a multiple choice; the `"list"` edit mode swaps
/// the parent widget to text and relaxes `required` unless already set.
fn model_reference_options(
    admin: &dyn Admin,
    field: &FieldDescription,
    options: &mut Map<String, Value>,
) {
    options.insert("class".into(), json!(field.target_entity()));
    options.insert("model_manager".into(), json!(admin.model_manager().name()));

    if field.mapping_type().is_to_many() {
        options.insert("multiple".into(), json!(true));
        options.insert("parent".into(), json!("choice"));
    }

    if field.option("edit") == Some(&json!("list")) {
        options.insert("parent".into(), json!("text"));
        if !options.contains_key("required") {
            options.insert("required".into(), json!(false));
        }
    }
}

/// Options for a related entity edited inline through its own admin.
fn inline_admin_options(options: &mut Map<String, Value>) {
    options.insert("edit".into(), json!("inline"));
}

/// Options for a modifiable collection of inline-admin entries.
fn collection_options(field: &FieldDescription, options: &mut Map<String, Value>) -> Result<()> {
    options.insert("type".into(), json!(WidgetKind::InlineAdmin.as_str()));
    options.insert("modifiable".into(), json!(true));
    options.insert(
        "type_options".into(),
        json!({
            FIELD_DESCRIPTION_KEY: serde_json::to_value(field)?,
            "data_class": field.associated_admin.as_ref().map(|a| a.model_class.as_str()),
        }),
    );
    Ok(())
}
