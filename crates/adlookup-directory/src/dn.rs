//! Distinguished name parsing for directory entries.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use adlookup_core::Error as CoreError;

/// Errors that can occur when parsing a distinguished name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DistinguishedNameError {
    /// The distinguished name was empty.
    #[error("distinguished name cannot be empty")]
    Empty,
    /// A component in the distinguished name was invalid.
    #[error("invalid distinguished name component: {0}")]
    InvalidComponent(String),
    /// A component was missing the attribute name to the left of the `=`.
    #[error("distinguished name component missing attribute: {0}")]
    MissingAttribute(String),
    /// A component was missing the value to the right of the `=`.
    #[error("distinguished name component missing value for attribute {0}")]
    MissingValue(String),
    /// The distinguished name ended with an escape character.
    #[error("distinguished name contains an unterminated escape sequence")]
    UnterminatedEscape,
}

impl From<DistinguishedNameError> for CoreError {
    fn from(err: DistinguishedNameError) -> Self {
        CoreError::InvalidDn(err.to_string())
    }
}

/// Relative distinguished name (single attribute/value pair).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelativeDistinguishedName {
    attribute: String,
    value: String,
}

impl RelativeDistinguishedName {
    /// Creates a new relative distinguished name.
    #[must_use]
    pub fn new(attribute: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
            value: value.into(),
        }
    }

    /// Attribute portion of the RDN (e.g. `CN`).
    #[must_use]
    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    /// Attribute value portion of the RDN.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns true if this RDN matches the provided attribute name (case-insensitive).
    #[must_use]
    pub fn matches_attribute(&self, attribute: &str) -> bool {
        self.attribute.eq_ignore_ascii_case(attribute)
    }
}

/// Strongly-typed distinguished name wrapper.
///
/// Keeps the input string verbatim while providing access to the individual
/// relative distinguished names. Parsing is strict so that malformed DNs
/// surface early; logon-type classification relies on that strictness to
/// tell a DN apart from a plain account name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistinguishedName {
    raw: String,
    rdns: Vec<RelativeDistinguishedName>,
}

impl DistinguishedName {
    /// Parses a distinguished name from a string.
    ///
    /// # Errors
    ///
    /// Returns [`DistinguishedNameError`] if the distinguished name is empty
    /// or contains invalid syntax.
    pub fn parse(input: impl AsRef<str>) -> Result<Self, DistinguishedNameError> {
        let raw = input.as_ref().trim();
        if raw.is_empty() {
            return Err(DistinguishedNameError::Empty);
        }

        let mut rdns = Vec::new();
        for component in split_components(raw)? {
            let (attribute, value) = split_attribute_value(&component)?;
            rdns.push(RelativeDistinguishedName::new(attribute, value));
        }

        Ok(Self {
            raw: raw.to_string(),
            rdns,
        })
    }

    /// Borrows the distinguished name string as given.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns an iterator over the relative distinguished names in order.
    pub fn components(&self) -> impl Iterator<Item = &RelativeDistinguishedName> + '_ {
        self.rdns.iter()
    }

    /// Looks up the value for the first attribute that matches `attribute` (case-insensitive).
    #[must_use]
    pub fn get(&self, attribute: &str) -> Option<&str> {
        self.components()
            .find(|rdn| rdn.matches_attribute(attribute))
            .map(RelativeDistinguishedName::value)
    }

    /// Returns the values of every RDN matching `attribute`, in order.
    pub fn get_all<'a>(&'a self, attribute: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.components()
            .filter(move |rdn| rdn.matches_attribute(attribute))
            .map(RelativeDistinguishedName::value)
    }

    /// Returns true if the distinguished name contains a matching attribute/value pair.
    #[must_use]
    pub fn contains(&self, attribute: &str, value: &str) -> bool {
        self.components()
            .any(|rdn| rdn.matches_attribute(attribute) && rdn.value.eq_ignore_ascii_case(value))
    }
}

impl fmt::Display for DistinguishedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for DistinguishedName {
    type Err = DistinguishedNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<DistinguishedName> for String {
    fn from(value: DistinguishedName) -> Self {
        value.raw
    }
}

impl TryFrom<&str> for DistinguishedName {
    type Error = DistinguishedNameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

fn split_components(input: &str) -> Result<Vec<String>, DistinguishedNameError> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut escape = false;

    for ch in input.chars() {
        if escape {
            current.push(ch);
            escape = false;
            continue;
        }

        if ch == '\\' {
            escape = true;
            continue;
        }

        if ch == ',' {
            parts.push(current.trim().to_string());
            current.clear();
            continue;
        }

        current.push(ch);
    }

    if escape {
        return Err(DistinguishedNameError::UnterminatedEscape);
    }

    parts.push(current.trim().to_string());
    if parts.iter().any(String::is_empty) {
        return Err(DistinguishedNameError::InvalidComponent(input.to_string()));
    }
    Ok(parts)
}

fn split_attribute_value(
    component: &str,
) -> Result<(String, String), DistinguishedNameError> {
    let idx = component
        .find('=')
        .ok_or_else(|| DistinguishedNameError::InvalidComponent(component.to_string()))?;
    let attribute = component[..idx].trim();
    let value = component[idx + 1..].trim_start();

    if attribute.is_empty() {
        return Err(DistinguishedNameError::MissingAttribute(
            component.to_string(),
        ));
    }

    if value.is_empty() {
        return Err(DistinguishedNameError::MissingValue(attribute.to_string()));
    }

    Ok((attribute.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_dn() {
        let dn = DistinguishedName::parse("CN=Test Test,OU=Users,DC=test,DC=com").unwrap();
        assert_eq!(dn.get("cn"), Some("Test Test"));
        assert_eq!(dn.get("ou"), Some("Users"));
        assert!(dn.contains("dc", "test"));
        assert_eq!(dn.to_string(), "CN=Test Test,OU=Users,DC=test,DC=com");
    }

    #[test]
    fn parse_keeps_raw_verbatim() {
        let raw = "CN=Test test,OU=Users,DC=domain,DC=local";
        let dn = DistinguishedName::parse(raw).unwrap();
        assert_eq!(dn.as_str(), raw);
    }

    #[test]
    fn get_all_returns_repeated_attributes_in_order() {
        let dn = DistinguishedName::parse("CN=Group1,CN=Group2,DC=domain,DC=com").unwrap();
        let cns: Vec<&str> = dn.get_all("CN").collect();
        assert_eq!(cns, ["Group1", "Group2"]);
    }

    #[test]
    fn parse_dn_with_escaped_comma() {
        let dn = DistinguishedName::parse("CN=Smith\\, John,OU=Users,DC=test,DC=com").unwrap();
        assert_eq!(dn.get("CN"), Some("Smith, John"));
    }

    #[test]
    fn rejects_plain_account_names() {
        assert!(DistinguishedName::parse("test").is_err());
        assert!(DistinguishedName::parse("test\\test").is_err());
    }

    #[test]
    fn rejects_empty_and_trailing_components() {
        assert!(matches!(
            DistinguishedName::parse("").unwrap_err(),
            DistinguishedNameError::Empty
        ));
        assert!(matches!(
            DistinguishedName::parse("CN=Test,").unwrap_err(),
            DistinguishedNameError::InvalidComponent(_)
        ));
    }

    #[test]
    fn rejects_missing_attribute_or_value() {
        assert!(matches!(
            DistinguishedName::parse("=Test").unwrap_err(),
            DistinguishedNameError::MissingAttribute(_)
        ));
        assert!(matches!(
            DistinguishedName::parse("CN=").unwrap_err(),
            DistinguishedNameError::MissingValue(_)
        ));
    }

    #[test]
    fn converts_to_core_error() {
        let err = DistinguishedName::parse("").unwrap_err();
        let core: adlookup_core::Error = err.into();
        assert_eq!(core.error_code(), "INVALID_DN");
    }
}
