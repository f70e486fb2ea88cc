//! Form contractor for admin UIs
//!
//! `formbridge-form` translates persistence mapping metadata into
//! form-builder configuration options. The form-building pipeline calls
//! [`FormContractor::fix_field_description`] and then
//! [`FormContractor::default_options`] for each field of an admin form;
//! everything else — persistence, rendering, validation — belongs to the
//! frameworks on either side of this crate.
//!
//! # Architecture
//!
//! - **Traits at the seams**: the admin framework implements [`Admin`], the
//!   persistence layer implements `ModelManager` (from `formbridge-fields`),
//!   the form engine implements [`FormFactory`]
//! - **Enum dispatch**: the widget types with special defaults are the
//!   [`WidgetKind`] variants; unknown types get the base options only
//! - **Open options**: option maps are `serde_json` maps of mixed values

pub mod admin;
pub mod builder;
pub mod contractor;
pub mod error;
pub mod widget;

pub use admin::Admin;
pub use builder::{BasicFormFactory, FormBuilder, FormFactory, FormField};
pub use contractor::{FormContractor, FIELD_DESCRIPTION_KEY};
pub use error::{FormError, Result};
pub use widget::WidgetKind;
