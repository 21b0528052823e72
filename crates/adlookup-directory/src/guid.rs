//! `objectGUID` extraction from directory entries.

use adlookup_core::{Error, ObjectGuid, Result};

use crate::entry::DirectoryEntry;

const OBJECT_GUID: &str = "objectGUID";

/// Extracts and decodes the `objectGUID` attribute of an entry.
///
/// The attribute is carried as a single 16-byte buffer in the Windows
/// mixed-endian layout; only the first buffer is consulted.
///
/// # Errors
///
/// Returns [`Error::MissingAttribute`] if the entry carries no `objectGUID`
/// buffer and [`Error::InvalidGuid`] if the buffer is not 16 bytes long.
pub fn resolve_guid(entry: &DirectoryEntry) -> Result<ObjectGuid> {
    let attribute = entry
        .binary(OBJECT_GUID)
        .ok_or_else(|| Error::MissingAttribute(OBJECT_GUID.to_string()))?;
    let buffer = attribute
        .buffers
        .first()
        .ok_or_else(|| Error::MissingAttribute(format!("{OBJECT_GUID} buffer")))?;
    ObjectGuid::from_ad_bytes(buffer)
}
