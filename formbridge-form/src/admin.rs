//! The admin abstraction the contractor collaborates with.

use formbridge_fields::{FieldDescription, ModelManager};

/// One admin screen managing a persisted class.
///
/// The contractor only needs the managed class, access to the persistence
/// backend, and the hook that attaches a related admin class to relational
/// fields. The admin framework supplies the rest.
pub trait Admin {
    /// Identifier of this admin, used as the owning-admin reference on
    /// field descriptions and in error messages.
    fn admin_class(&self) -> &str;

    /// The persisted class this admin manages.
    fn model_class(&self) -> &str;

    /// Persistence backend for the managed class.
    fn model_manager(&self) -> &dyn ModelManager;

    /// Attach the related admin class for a relational field.
    ///
    /// Called exactly once per relational field during fixup.
    /// Implementations typically resolve the admin registered for the
    /// field's target entity and set `associated_admin` with the admin's
    /// identifier and its managed class.
    fn attach_admin_class(&self, field: &mut FieldDescription);
}
