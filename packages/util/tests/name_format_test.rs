//! Tests for Distinguished Name formatting over attribute-keyed views

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

use droidscope_util::x509::{
    attribute_label, attribute_rendering, known_attribute_ids, ATTRIBUTE_RENDERINGS,
    DEFAULT_DELIMITER,
};
use droidscope_util::{get_certificate_name_string, DnView, NameFormat, Result, UtilError};

fn example_dn() -> Vec<(&'static str, &'static str)> {
    vec![
        ("common_name", "example.com"),
        ("organization_name", "Example Corp"),
        ("country_name", "US"),
    ]
}

#[test]
fn test_short_form_rendering() {
    let rendered = get_certificate_name_string(&example_dn(), true, ", ");

    assert_eq!(rendered.ok().as_deref(), Some("CN=example.com, O=Example Corp, C=US"));
}

#[test]
fn test_long_form_rendering() {
    let rendered = get_certificate_name_string(&example_dn(), false, ", ");

    assert_eq!(
        rendered.ok().as_deref(),
        Some("commonName=example.com, organizationName=Example Corp, countryName=US")
    );
}

#[test]
fn test_empty_dn_renders_empty_string() {
    let empty: Vec<(&str, &str)> = Vec::new();

    assert_eq!(get_certificate_name_string(&empty, true, ", ").ok().as_deref(), Some(""));
    assert_eq!(NameFormat::default().format(&empty).ok().as_deref(), Some(""));
}

#[test]
fn test_unknown_attribute_falls_back_to_identifier() {
    let dn = [("unknown_attr", "x")];

    assert_eq!(get_certificate_name_string(&dn, true, ", ").ok().as_deref(), Some("unknown_attr=x"));
    assert_eq!(get_certificate_name_string(&dn, false, ", ").ok().as_deref(), Some("unknown_attr=x"));
}

#[test]
fn test_custom_delimiter_and_no_trailing_delimiter() {
    let rendered = get_certificate_name_string(&example_dn(), true, "/");

    assert_eq!(rendered.ok().as_deref(), Some("CN=example.com/O=Example Corp/C=US"));
}

#[test]
fn test_values_are_not_escaped() {
    let dn = [("organization_name", "Example, Inc."), ("common_name", "a=b")];
    let rendered = get_certificate_name_string(&dn, true, ", ");

    assert_eq!(rendered.ok().as_deref(), Some("O=Example, Inc., CN=a=b"));
}

#[test]
fn test_duplicate_attributes_are_kept_in_order() {
    let dn = [
        ("organizational_unit_name", "Mobile"),
        ("common_name", "app.example.com"),
        ("organizational_unit_name", "Android"),
    ];
    let rendered = get_certificate_name_string(&dn, true, ", ");

    assert_eq!(
        rendered.ok().as_deref(),
        Some("OU=Mobile, CN=app.example.com, OU=Android")
    );
}

#[test]
fn test_non_string_values_use_display() {
    let dn = vec![("serial_number".to_string(), 42u64)];
    let rendered = get_certificate_name_string(&dn, true, ", ");

    assert_eq!(rendered.ok().as_deref(), Some("serialNumber=42"));
}

#[test]
fn test_btree_map_renders_in_key_order() {
    let mut dn = BTreeMap::new();
    dn.insert("organization_name".to_string(), "Example Corp".to_string());
    dn.insert("common_name".to_string(), "example.com".to_string());

    let rendered = get_certificate_name_string(&dn, true, ", ");

    assert_eq!(rendered.ok().as_deref(), Some("CN=example.com, O=Example Corp"));
}

#[test]
fn test_hash_map_renders_every_entry_once() {
    let mut dn = HashMap::new();
    dn.insert("email_address", "dev@example.com");
    dn.insert("domain_component", "example");

    let rendered = get_certificate_name_string(&dn, true, "; ").unwrap_or_default();

    assert!(
        rendered == "E=dev@example.com; DC=example" || rendered == "DC=example; E=dev@example.com",
        "unexpected rendering: {rendered}"
    );
}

/// A view that lists an attribute it cannot supply
struct TruncatedDn;

impl DnView for TruncatedDn {
    fn attribute_ids(&self) -> Vec<Cow<'_, str>> {
        vec![Cow::Borrowed("common_name"), Cow::Borrowed("country_name")]
    }

    fn attribute_value(&self, index: usize, id: &str) -> Result<Cow<'_, str>> {
        if index == 0 {
            Ok(Cow::Borrowed("example.com"))
        } else {
            Err(UtilError::missing_value(id))
        }
    }
}

#[test]
fn test_unreadable_value_is_lookup_error() {
    let result = get_certificate_name_string(&TruncatedDn, true, ", ");

    match result {
        Err(UtilError::MissingAttributeValue { attribute }) => {
            assert_eq!(attribute, "country_name");
        }
        other => panic!("Expected MissingAttributeValue, got {other:?}"),
    }
}

#[test]
fn test_rendering_table_contents() {
    assert_eq!(ATTRIBUTE_RENDERINGS.len(), 23);
    assert_eq!(known_attribute_ids().count(), 23);

    let expected = [
        ("business_category", "businessCategory", "businessCategory"),
        ("serial_number", "serialNumber", "serialNumber"),
        ("country_name", "C", "countryName"),
        ("postal_code", "postalCode", "postalCode"),
        ("state_or_province_name", "ST", "stateOrProvinceName"),
        ("locality_name", "L", "localityName"),
        ("street_address", "street", "streetAddress"),
        ("organization_name", "O", "organizationName"),
        ("organizational_unit_name", "OU", "organizationalUnitName"),
        ("title", "title", "title"),
        ("common_name", "CN", "commonName"),
        ("initials", "initials", "initials"),
        ("generation_qualifier", "generationQualifier", "generationQualifier"),
        ("surname", "SN", "surname"),
        ("given_name", "GN", "givenName"),
        ("name", "name", "name"),
        ("pseudonym", "pseudonym", "pseudonym"),
        ("dn_qualifier", "dnQualifier", "dnQualifier"),
        ("telephone_number", "telephoneNumber", "telephoneNumber"),
        ("email_address", "E", "emailAddress"),
        ("domain_component", "DC", "domainComponent"),
        ("name_distinguisher", "nameDistinguisher", "nameDistinguisher"),
        ("organization_identifier", "organizationIdentifier", "organizationIdentifier"),
    ];
    let ids: Vec<&str> = known_attribute_ids().collect();
    let expected_ids: Vec<&str> = expected.iter().map(|(id, _, _)| *id).collect();
    assert_eq!(ids, expected_ids);

    for (id, short, long) in expected {
        let rendering = attribute_rendering(id);
        assert_eq!(rendering.map(|r| r.short), Some(short), "{id}");
        assert_eq!(rendering.map(|r| r.long), Some(long), "{id}");
        assert_eq!(attribute_label(id, true), short);
        assert_eq!(attribute_label(id, false), long);
    }

    assert!(attribute_rendering("user_id").is_none());
    assert_eq!(attribute_label("user_id", true), "user_id");
}

#[test]
fn test_name_format_builder_and_defaults() {
    let default = NameFormat::new();
    assert!(!default.short);
    assert_eq!(default.delimiter, DEFAULT_DELIMITER);

    let format = NameFormat::new().short(true).delimiter(" + ");
    let rendered = format.format(&example_dn());

    assert_eq!(rendered.ok().as_deref(), Some("CN=example.com + O=Example Corp + C=US"));
}

#[test]
fn test_name_format_deserializes_with_defaults() {
    let format: NameFormat =
        serde_json::from_str(r#"{ "short": true }"#).expect("format should deserialize");

    assert!(format.short);
    assert_eq!(format.delimiter, ", ");
}
