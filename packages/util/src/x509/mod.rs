//! Certificate Distinguished Name formatting
//!
//! - `name`: label table and the DN formatter
//! - `view`: the `DnView` capability and its impls for std collections
//! - `name_extraction`: `DnView` for decoded `x509_cert` names

pub mod name;
pub mod name_extraction;
pub mod view;

pub use name::{
    attribute_label, attribute_rendering, get_certificate_name_string, known_attribute_ids,
    AttributeRendering, NameFormat, ATTRIBUTE_RENDERINGS, DEFAULT_DELIMITER,
};
pub use name_extraction::attribute_id_for_oid;
pub use view::DnView;
