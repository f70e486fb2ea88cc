//! Form factory and builder surface.
//!
//! The contractor hands field options to a `FormBuilder`, a named form under
//! construction. Builders come from a `FormFactory` so the admin framework
//! can substitute its own form engine.

use serde_json::{Map, Value};

/// One field added to a form: name, widget type identifier, and the resolved
/// options for that field.
#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub name: String,
    pub type_name: String,
    pub options: Map<String, Value>,
}

/// A named form under construction.
#[derive(Debug, Clone, Default)]
pub struct FormBuilder {
    name: String,
    options: Map<String, Value>,
    fields: Vec<FormField>,
}

impl FormBuilder {
    pub fn new(name: impl Into<String>, options: Map<String, Value>) -> Self {
        Self {
            name: name.into(),
            options,
            fields: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Root-level form options.
    pub fn options(&self) -> &Map<String, Value> {
        &self.options
    }

    /// Add a field. Fields keep insertion order.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        type_name: impl Into<String>,
        options: Map<String, Value>,
    ) -> &mut Self {
        self.fields.push(FormField {
            name: name.into(),
            type_name: type_name.into(),
            options,
        });
        self
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Creates form builders. The admin framework provides its own factory when
/// it brings its own form engine.
pub trait FormFactory {
    fn create_builder(&self, name: &str, options: Map<String, Value>) -> FormBuilder;
}

/// Factory producing plain `FormBuilder`s.
#[derive(Debug, Default)]
pub struct BasicFormFactory;

impl FormFactory for BasicFormFactory {
    fn create_builder(&self, name: &str, options: Map<String, Value>) -> FormBuilder {
        FormBuilder::new(name, options)
    }
}
