//! Widget kinds with dedicated default-option handling.

/// The widget types the contractor computes extra default options for.
///
/// Any other type identifier receives the base options only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetKind {
    /// Reference to another persisted entity, single or multiple.
    ModelReference,
    /// The related entity edited inline through its own admin.
    InlineAdmin,
    /// A modifiable collection of inline-admin entries.
    Collection,
}

impl WidgetKind {
    pub fn from_type(s: &str) -> Option<Self> {
        match s {
            "model-reference" => Some(Self::ModelReference),
            "inline-admin" => Some(Self::InlineAdmin),
            "collection" => Some(Self::Collection),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ModelReference => "model-reference",
            Self::InlineAdmin => "inline-admin",
            Self::Collection => "collection",
        }
    }
}
