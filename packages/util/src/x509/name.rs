//! Distinguished Name rendering
//!
//! Renders a decoded DN as `label=value` fields joined by a delimiter, e.g.
//! `CN=example.com, O=Example Corp, C=US`. Labels come from the RFC 4514
//! short/long form table below; identifiers missing from the table are used
//! as their own label in both forms.
//!
//! Values are emitted verbatim. No escaping is applied, so a value that
//! contains the delimiter cannot be split back unambiguously.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::view::DnView;
use crate::error::Result;

/// Delimiter used between fields unless the caller picks another one
pub const DEFAULT_DELIMITER: &str = ", ";

/// Short and long display labels for one attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttributeRendering {
    /// RFC 4514 short form, e.g. `CN`
    pub short: &'static str,
    /// Long form, e.g. `commonName`
    pub long: &'static str,
}

impl AttributeRendering {
    const fn new(short: &'static str, long: &'static str) -> Self {
        Self { short, long }
    }

    /// Label for the requested form
    #[must_use]
    pub fn label(&self, short: bool) -> &'static str {
        if short {
            self.short
        } else {
            self.long
        }
    }
}

/// Attribute identifiers with their labels, in table order
pub const ATTRIBUTE_RENDERINGS: [(&str, AttributeRendering); 23] = [
    ("business_category", AttributeRendering::new("businessCategory", "businessCategory")),
    ("serial_number", AttributeRendering::new("serialNumber", "serialNumber")),
    ("country_name", AttributeRendering::new("C", "countryName")),
    ("postal_code", AttributeRendering::new("postalCode", "postalCode")),
    ("state_or_province_name", AttributeRendering::new("ST", "stateOrProvinceName")),
    ("locality_name", AttributeRendering::new("L", "localityName")),
    ("street_address", AttributeRendering::new("street", "streetAddress")),
    ("organization_name", AttributeRendering::new("O", "organizationName")),
    ("organizational_unit_name", AttributeRendering::new("OU", "organizationalUnitName")),
    ("title", AttributeRendering::new("title", "title")),
    ("common_name", AttributeRendering::new("CN", "commonName")),
    ("initials", AttributeRendering::new("initials", "initials")),
    ("generation_qualifier", AttributeRendering::new("generationQualifier", "generationQualifier")),
    ("surname", AttributeRendering::new("SN", "surname")),
    ("given_name", AttributeRendering::new("GN", "givenName")),
    ("name", AttributeRendering::new("name", "name")),
    ("pseudonym", AttributeRendering::new("pseudonym", "pseudonym")),
    ("dn_qualifier", AttributeRendering::new("dnQualifier", "dnQualifier")),
    ("telephone_number", AttributeRendering::new("telephoneNumber", "telephoneNumber")),
    ("email_address", AttributeRendering::new("E", "emailAddress")),
    ("domain_component", AttributeRendering::new("DC", "domainComponent")),
    ("name_distinguisher", AttributeRendering::new("nameDistinguisher", "nameDistinguisher")),
    ("organization_identifier", AttributeRendering::new("organizationIdentifier", "organizationIdentifier")),
];

static RENDERING_TABLE: Lazy<HashMap<&'static str, AttributeRendering>> =
    Lazy::new(|| ATTRIBUTE_RENDERINGS.iter().copied().collect());

/// Look up the labels for an attribute identifier
#[must_use]
pub fn attribute_rendering(id: &str) -> Option<AttributeRendering> {
    RENDERING_TABLE.get(id).copied()
}

/// Label for `id` in the requested form, or `id` itself when it is not in the table
#[must_use]
pub fn attribute_label(id: &str, short: bool) -> &str {
    attribute_rendering(id).map_or(id, |rendering| rendering.label(short))
}

/// Identifiers that have a rendering, in table order
pub fn known_attribute_ids() -> impl Iterator<Item = &'static str> {
    ATTRIBUTE_RENDERINGS.iter().map(|(id, _)| *id)
}

/// Format a DN in a human readable form
///
/// Produces one `label=value` field per attribute of `name`, in the order the
/// view yields them, joined by `delimiter`. `short` selects `CN`-style labels
/// over `commonName`-style ones. An empty DN yields an empty string.
///
/// # Errors
///
/// Fails when a value cannot be read from `name` for an identifier it
/// listed ([`UtilError::MissingAttributeValue`] or
/// [`UtilError::MalformedAttributeValue`]).
///
/// [`UtilError::MissingAttributeValue`]: crate::UtilError::MissingAttributeValue
/// [`UtilError::MalformedAttributeValue`]: crate::UtilError::MalformedAttributeValue
pub fn get_certificate_name_string<N>(name: &N, short: bool, delimiter: &str) -> Result<String>
where
    N: DnView + ?Sized,
{
    let ids = name.attribute_ids();
    let mut fields = Vec::with_capacity(ids.len());
    for (index, id) in ids.iter().enumerate() {
        let value = name.attribute_value(index, id)?;
        fields.push(format!("{}={value}", attribute_label(id, short)));
    }
    Ok(fields.join(delimiter))
}

/// Formatting options for [`get_certificate_name_string`]
///
/// Defaults to long labels joined by [`DEFAULT_DELIMITER`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NameFormat {
    /// Use short labels (`CN`) instead of long ones (`commonName`)
    pub short: bool,
    /// Inserted between successive fields
    pub delimiter: String,
}

impl Default for NameFormat {
    fn default() -> Self {
        Self {
            short: false,
            delimiter: DEFAULT_DELIMITER.to_string(),
        }
    }
}

impl NameFormat {
    /// Long labels, default delimiter
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select short or long labels
    #[must_use]
    pub fn short(mut self, short: bool) -> Self {
        self.short = short;
        self
    }

    /// Replace the field delimiter
    #[must_use]
    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Render `name` with these options
    ///
    /// # Errors
    ///
    /// See [`get_certificate_name_string`].
    pub fn format<N>(&self, name: &N) -> Result<String>
    where
        N: DnView + ?Sized,
    {
        get_certificate_name_string(name, self.short, &self.delimiter)
    }
}
