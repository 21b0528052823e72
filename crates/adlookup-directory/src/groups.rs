//! Group membership extraction from the `memberOf` attribute.

use crate::entry::DirectoryEntry;

const MEMBER_OF: &str = "memberOf";
const CN_PREFIX: &str = "CN=";

/// Extracts group common names from an entry's `memberOf` attribute.
///
/// Every comma-delimited component whose trimmed text starts with `CN=`
/// contributes one group name with the prefix stripped, in left-to-right
/// order across all membership strings. An absent `memberOf` attribute
/// yields an empty vector; duplicates are kept.
#[must_use]
pub fn resolve_groups(entry: &DirectoryEntry) -> Vec<String> {
    let Some(values) = entry.values(MEMBER_OF) else {
        return Vec::new();
    };

    let mut groups = Vec::new();
    for value in values {
        for component in value.split(',') {
            if let Some(name) = component.trim().strip_prefix(CN_PREFIX) {
                groups.push(name.to_string());
            }
        }
    }
    groups
}
