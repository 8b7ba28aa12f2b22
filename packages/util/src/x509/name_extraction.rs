//! Distinguished name attribute extraction from decoded X.509 names
//!
//! Exposes an `x509_cert` [`Name`] as a [`DnView`] so it can be handed to the
//! formatter directly. Attribute types map to the lowercase identifiers used
//! by the rendering table; types without a known identifier are listed under
//! their dotted OID, and their values render even when they are not strings.

use std::borrow::Cow;

use const_oid::ObjectIdentifier;
use der::asn1::{Any, Ia5StringRef, PrintableStringRef, Utf8StringRef};
use der::{Encode, Tag, Tagged};
use x509_cert::attr::AttributeTypeAndValue;
use x509_cert::name::Name;

use super::view::DnView;
use crate::error::{Result, UtilError};

/// Attribute type OIDs with their identifiers
const NAME_TYPES: [(ObjectIdentifier, &str); 28] = [
    (ObjectIdentifier::new_unwrap("2.5.4.3"), "common_name"),
    (ObjectIdentifier::new_unwrap("2.5.4.4"), "surname"),
    (ObjectIdentifier::new_unwrap("2.5.4.5"), "serial_number"),
    (ObjectIdentifier::new_unwrap("2.5.4.6"), "country_name"),
    (ObjectIdentifier::new_unwrap("2.5.4.7"), "locality_name"),
    (ObjectIdentifier::new_unwrap("2.5.4.8"), "state_or_province_name"),
    (ObjectIdentifier::new_unwrap("2.5.4.9"), "street_address"),
    (ObjectIdentifier::new_unwrap("2.5.4.10"), "organization_name"),
    (ObjectIdentifier::new_unwrap("2.5.4.11"), "organizational_unit_name"),
    (ObjectIdentifier::new_unwrap("2.5.4.12"), "title"),
    (ObjectIdentifier::new_unwrap("2.5.4.15"), "business_category"),
    (ObjectIdentifier::new_unwrap("2.5.4.17"), "postal_code"),
    (ObjectIdentifier::new_unwrap("2.5.4.20"), "telephone_number"),
    (ObjectIdentifier::new_unwrap("2.5.4.41"), "name"),
    (ObjectIdentifier::new_unwrap("2.5.4.42"), "given_name"),
    (ObjectIdentifier::new_unwrap("2.5.4.43"), "initials"),
    (ObjectIdentifier::new_unwrap("2.5.4.44"), "generation_qualifier"),
    (ObjectIdentifier::new_unwrap("2.5.4.45"), "unique_identifier"),
    (ObjectIdentifier::new_unwrap("2.5.4.46"), "dn_qualifier"),
    (ObjectIdentifier::new_unwrap("2.5.4.65"), "pseudonym"),
    (ObjectIdentifier::new_unwrap("2.5.4.97"), "organization_identifier"),
    (ObjectIdentifier::new_unwrap("1.2.840.113549.1.9.1"), "email_address"),
    (ObjectIdentifier::new_unwrap("1.3.6.1.4.1.311.60.2.1.1"), "incorporation_locality"),
    (ObjectIdentifier::new_unwrap("1.3.6.1.4.1.311.60.2.1.2"), "incorporation_state_or_province"),
    (ObjectIdentifier::new_unwrap("1.3.6.1.4.1.311.60.2.1.3"), "incorporation_country"),
    (ObjectIdentifier::new_unwrap("0.9.2342.19200300.100.1.1"), "user_id"),
    (ObjectIdentifier::new_unwrap("0.9.2342.19200300.100.1.25"), "domain_component"),
    (ObjectIdentifier::new_unwrap("0.2.262.1.10.7.20"), "name_distinguisher"),
];

/// Identifier for a DN attribute type, if it has one
#[must_use]
pub fn attribute_id_for_oid(oid: &ObjectIdentifier) -> Option<&'static str> {
    NAME_TYPES
        .iter()
        .find(|(known, _)| known == oid)
        .map(|(_, id)| *id)
}

/// Attributes of every RDN in encoding order, multi-valued RDNs flattened
fn attributes(name: &Name) -> impl Iterator<Item = &AttributeTypeAndValue> {
    name.0.iter().flat_map(|rdn| rdn.0.iter())
}

/// Decode an attribute value as text
///
/// Covers the DirectoryString choices seen in certificate names. TeletexString
/// maps each byte to the Latin-1 character of the same value; BMPString is
/// UTF-16BE.
fn decode_value(atv: &AttributeTypeAndValue) -> std::result::Result<String, String> {
    let value = &atv.value;
    if let Ok(s) = PrintableStringRef::try_from(value) {
        return Ok(s.to_string());
    }
    if let Ok(s) = Utf8StringRef::try_from(value) {
        return Ok(s.to_string());
    }
    if let Ok(s) = Ia5StringRef::try_from(value) {
        return Ok(s.to_string());
    }

    let bytes = value.value();
    match value.tag() {
        Tag::TeletexString => Ok(bytes.iter().copied().map(char::from).collect()),
        Tag::BmpString => {
            if bytes.len() % 2 != 0 {
                return Err(format!("odd BMPString length {}", bytes.len()));
            }
            let units: Vec<u16> = bytes
                .chunks_exact(2)
                .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
                .collect();
            String::from_utf16(&units).map_err(|e| format!("invalid BMPString: {e}"))
        }
        tag => Err(format!("unsupported value encoding {tag}")),
    }
}

/// Render a value of an attribute type with no known identifier
///
/// INTEGER, BOOLEAN and OBJECT IDENTIFIER values render as their plain value;
/// anything else as `#` followed by the hex of its DER encoding.
fn render_untyped(value: &Any) -> std::result::Result<String, String> {
    let bytes = value.value();
    let plain = match value.tag() {
        Tag::Integer => integer_text(bytes),
        Tag::Boolean => match bytes {
            [0x00] => Some("false".to_string()),
            [_] => Some("true".to_string()),
            _ => None,
        },
        Tag::ObjectIdentifier => ObjectIdentifier::from_bytes(bytes)
            .ok()
            .map(|oid| oid.to_string()),
        _ => None,
    };
    if let Some(text) = plain {
        return Ok(text);
    }

    let der = value.to_der().map_err(|e| format!("cannot re-encode value: {e}"))?;
    Ok(der.iter().fold(String::from("#"), |mut out, byte| {
        out.push_str(&format!("{byte:02x}"));
        out
    }))
}

/// Decimal text of a two's complement INTEGER of at most 128 bits
fn integer_text(bytes: &[u8]) -> Option<String> {
    let first = *bytes.first()?;
    if bytes.len() > 16 {
        return None;
    }
    let fill = if first & 0x80 == 0 { 0x00 } else { 0xff };
    let mut buf = [fill; 16];
    buf[16 - bytes.len()..].copy_from_slice(bytes);
    Some(i128::from_be_bytes(buf).to_string())
}

impl DnView for Name {
    fn attribute_ids(&self) -> Vec<Cow<'_, str>> {
        attributes(self)
            .map(|atv| match attribute_id_for_oid(&atv.oid) {
                Some(id) => Cow::Borrowed(id),
                None => Cow::Owned(atv.oid.to_string()),
            })
            .collect()
    }

    fn attribute_value(&self, index: usize, id: &str) -> Result<Cow<'_, str>> {
        let atv = attributes(self)
            .nth(index)
            .ok_or_else(|| UtilError::missing_value(id))?;
        let text = match decode_value(atv) {
            Ok(text) => Ok(text),
            Err(_) if attribute_id_for_oid(&atv.oid).is_none() => render_untyped(&atv.value),
            Err(reason) => Err(reason),
        };
        text.map(Cow::Owned)
            .map_err(|reason| UtilError::malformed_value(id, reason))
    }
}
