//! Strongly-typed GUID wrapper for directory objects.
//!
//! Active Directory stores the `objectGUID` attribute as 16 raw bytes in the
//! Windows mixed-endian layout: the first three groups are little-endian and
//! the final eight bytes are kept in wire order. This module wraps [`Uuid`]
//! so the decoded value cannot be confused with an ordinary big-endian UUID
//! that was never byte-swapped.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::{Error, Result};

/// The decoded `objectGUID` of a directory object.
///
/// Renders as the canonical lower-case hyphenated form, e.g.
/// `17d4e710-624d-4978-900b-8549cb753699`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectGuid(Uuid);

impl ObjectGuid {
    /// Creates a wrapper from an already-decoded [`Uuid`].
    #[must_use]
    pub const fn new(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Creates a new random GUID (v4).
    #[must_use]
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    /// Decodes the raw attribute bytes as stored by Active Directory.
    ///
    /// The buffer must be exactly 16 bytes; the first three groups are
    /// byte-swapped per the mixed-endian layout.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGuid`] if the buffer is not 16 bytes long.
    pub fn from_ad_bytes(bytes: &[u8]) -> Result<Self> {
        let raw: [u8; 16] = bytes
            .try_into()
            .map_err(|_| Error::InvalidGuid(format!("expected 16 bytes, got {}", bytes.len())))?;
        Ok(Self(Uuid::from_bytes_le(raw)))
    }

    /// Re-encodes the GUID into the raw byte layout used on the wire.
    #[must_use]
    pub const fn to_ad_bytes(&self) -> [u8; 16] {
        self.0.to_bytes_le()
    }

    /// Parses a GUID from its canonical string form.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGuid`] if the string is not a valid GUID.
    pub fn parse_str(input: &str) -> Result<Self> {
        Uuid::parse_str(input)
            .map(Self)
            .map_err(|_| Error::InvalidGuid(input.to_string()))
    }

    /// Returns the inner [`Uuid`].
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Converts to the inner [`Uuid`].
    #[must_use]
    pub const fn into_uuid(self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for ObjectGuid {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<ObjectGuid> for Uuid {
    fn from(guid: ObjectGuid) -> Self {
        guid.0
    }
}

impl FromStr for ObjectGuid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_str(s)
    }
}

impl fmt::Display for ObjectGuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<Uuid> for ObjectGuid {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}
