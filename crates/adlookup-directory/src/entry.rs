//! Directory entry model shared by the normalization routines.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Attribute value as returned by a directory search.
///
/// Servers return some attributes (notably `memberOf`) as a bare string when
/// single-valued and as an array otherwise. Modeling the two shapes as an
/// explicit variant keeps that distinction out of the consuming code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// A single attribute value.
    Single(String),
    /// An ordered list of attribute values.
    Many(Vec<String>),
}

impl AttributeValue {
    /// Returns the first value, if any.
    #[must_use]
    pub fn first(&self) -> Option<&str> {
        match self {
            Self::Single(value) => Some(value),
            Self::Many(values) => values.first().map(String::as_str),
        }
    }

    /// Returns all values as a slice, preserving server order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        match self {
            Self::Single(value) => std::slice::from_ref(value),
            Self::Many(values) => values.as_slice(),
        }
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}

impl From<Vec<String>> for AttributeValue {
    fn from(values: Vec<String>) -> Self {
        Self::Many(values)
    }
}

/// A binary-encoded attribute, e.g. `objectGUID`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryAttribute {
    /// Attribute name.
    #[serde(rename = "type")]
    pub attr_type: String,
    /// Raw value buffers in server order.
    pub buffers: Vec<Vec<u8>>,
}

/// A raw search result entry as handed over by the directory client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    /// String-valued attributes keyed by attribute name.
    #[serde(default)]
    pub object: HashMap<String, AttributeValue>,
    /// Distinguished name of the entry, verbatim from the server.
    #[serde(rename = "objectName")]
    pub object_name: String,
    /// Binary-encoded attributes in server order.
    #[serde(default)]
    pub attributes: Vec<BinaryAttribute>,
}

impl DirectoryEntry {
    /// Creates a builder for an entry with the given distinguished name.
    #[must_use]
    pub fn builder(object_name: impl Into<String>) -> DirectoryEntryBuilder {
        DirectoryEntryBuilder {
            object: HashMap::new(),
            object_name: object_name.into(),
            attributes: Vec::new(),
        }
    }

    /// Returns the first value of the attribute if present.
    #[must_use]
    pub fn first(&self, attribute: &str) -> Option<&str> {
        self.object.get(attribute).and_then(AttributeValue::first)
    }

    /// Returns all values for the attribute.
    #[must_use]
    pub fn values(&self, attribute: &str) -> Option<&[String]> {
        self.object.get(attribute).map(AttributeValue::as_slice)
    }

    /// Returns the binary attribute with the given name.
    #[must_use]
    pub fn binary(&self, attribute: &str) -> Option<&BinaryAttribute> {
        self.attributes.iter().find(|a| a.attr_type == attribute)
    }
}

/// Builder for [`DirectoryEntry`].
#[derive(Debug)]
pub struct DirectoryEntryBuilder {
    object: HashMap<String, AttributeValue>,
    object_name: String,
    attributes: Vec<BinaryAttribute>,
}

impl DirectoryEntryBuilder {
    /// Sets a string-valued attribute.
    #[must_use]
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.object.insert(name.into(), value.into());
        self
    }

    /// Sets a multi-valued attribute from an iterator of values.
    #[must_use]
    pub fn attribute_values<I, V>(mut self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let values = values.into_iter().map(Into::into).collect();
        self.object
            .insert(name.into(), AttributeValue::Many(values));
        self
    }

    /// Appends a buffer to a binary attribute, creating it if needed.
    #[must_use]
    pub fn binary_attribute(mut self, attr_type: impl Into<String>, buffer: Vec<u8>) -> Self {
        let attr_type = attr_type.into();
        if let Some(existing) = self
            .attributes
            .iter_mut()
            .find(|a| a.attr_type == attr_type)
        {
            existing.buffers.push(buffer);
        } else {
            self.attributes.push(BinaryAttribute {
                attr_type,
                buffers: vec![buffer],
            });
        }
        self
    }

    /// Finalises the builder and returns the [`DirectoryEntry`].
    #[must_use]
    pub fn build(self) -> DirectoryEntry {
        DirectoryEntry {
            object: self.object,
            object_name: self.object_name,
            attributes: self.attributes,
        }
    }
}
