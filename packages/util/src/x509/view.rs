//! Attribute-keyed views over decoded Distinguished Names

use std::borrow::{Borrow, Cow};
use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;
use std::hash::{BuildHasher, Hash};

use crate::error::{Result, UtilError};

/// A decoded DN seen as ordered `(identifier, value)` pairs
///
/// Identifiers are the lowercase underscore names used by the rendering
/// table (`common_name`, `organization_name`, ...). The formatter lists the
/// identifiers once, then reads each value back by position and identifier.
pub trait DnView {
    /// Attribute identifiers in rendering order, duplicates included
    fn attribute_ids(&self) -> Vec<Cow<'_, str>>;

    /// Display value of the `index`-th attribute, listed as `id`
    ///
    /// # Errors
    ///
    /// Returns [`UtilError::MissingAttributeValue`] when no value can be
    /// found for `id`, or [`UtilError::MalformedAttributeValue`] when the
    /// stored value cannot be shown as text.
    fn attribute_value(&self, index: usize, id: &str) -> Result<Cow<'_, str>>;
}

impl<K, V> DnView for [(K, V)]
where
    K: AsRef<str>,
    V: Display,
{
    fn attribute_ids(&self) -> Vec<Cow<'_, str>> {
        self.iter().map(|(k, _)| Cow::Borrowed(k.as_ref())).collect()
    }

    fn attribute_value(&self, index: usize, id: &str) -> Result<Cow<'_, str>> {
        match self.get(index) {
            Some((k, v)) if k.as_ref() == id => Ok(Cow::Owned(v.to_string())),
            _ => Err(UtilError::missing_value(id)),
        }
    }
}

impl<K, V> DnView for Vec<(K, V)>
where
    K: AsRef<str>,
    V: Display,
{
    fn attribute_ids(&self) -> Vec<Cow<'_, str>> {
        self.as_slice().attribute_ids()
    }

    fn attribute_value(&self, index: usize, id: &str) -> Result<Cow<'_, str>> {
        self.as_slice().attribute_value(index, id)
    }
}

impl<K, V, const N: usize> DnView for [(K, V); N]
where
    K: AsRef<str>,
    V: Display,
{
    fn attribute_ids(&self) -> Vec<Cow<'_, str>> {
        self.as_slice().attribute_ids()
    }

    fn attribute_value(&self, index: usize, id: &str) -> Result<Cow<'_, str>> {
        self.as_slice().attribute_value(index, id)
    }
}

// Maps are read by key; the position is irrelevant.

impl<K, V, S> DnView for HashMap<K, V, S>
where
    K: Borrow<str> + Eq + Hash,
    V: Display,
    S: BuildHasher,
{
    fn attribute_ids(&self) -> Vec<Cow<'_, str>> {
        self.keys()
            .map(|k| Cow::Borrowed(Borrow::<str>::borrow(k)))
            .collect()
    }

    fn attribute_value(&self, _index: usize, id: &str) -> Result<Cow<'_, str>> {
        self.get(id)
            .map(|v| Cow::Owned(v.to_string()))
            .ok_or_else(|| UtilError::missing_value(id))
    }
}

impl<K, V> DnView for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    V: Display,
{
    fn attribute_ids(&self) -> Vec<Cow<'_, str>> {
        self.keys()
            .map(|k| Cow::Borrowed(Borrow::<str>::borrow(k)))
            .collect()
    }

    fn attribute_value(&self, _index: usize, id: &str) -> Result<Cow<'_, str>> {
        self.get(id)
            .map(|v| Cow::Owned(v.to_string()))
            .ok_or_else(|| UtilError::missing_value(id))
    }
}
