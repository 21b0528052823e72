//! Normalized user record built from a directory entry.

use serde::{Deserialize, Serialize};

use adlookup_core::ObjectGuid;

use crate::dn::DistinguishedName;
use crate::entry::DirectoryEntry;
use crate::groups::resolve_groups;
use crate::guid::resolve_guid;
use crate::Result;

const MAIL: &str = "mail";
const TELEPHONE_NUMBER: &str = "telephoneNumber";
const NAME: &str = "name";

/// Application-friendly identity record for a directory user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserObject {
    /// Group common names in source order.
    pub groups: Vec<String>,
    /// Primary email address.
    #[serde(default)]
    pub mail: Option<String>,
    /// Phone number (from `telephoneNumber`).
    #[serde(default)]
    pub phone: Option<String>,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Decoded `objectGUID`.
    pub guid: ObjectGuid,
    /// Distinguished name, verbatim from the entry.
    pub dn: String,
}

impl UserObject {
    /// Builds a normalized user record from a raw search entry.
    ///
    /// Combines group resolution and GUID decoding with a projection of the
    /// `mail`, `telephoneNumber` and `name` attributes; no other source
    /// fields are carried over. The record is only returned when every part
    /// succeeds.
    ///
    /// # Errors
    ///
    /// Propagates the first failure from [`resolve_guid`].
    pub fn from_entry(entry: &DirectoryEntry) -> Result<Self> {
        let groups = resolve_groups(entry);
        let guid = resolve_guid(entry)?;

        Ok(Self {
            groups,
            mail: entry.first(MAIL).map(str::to_owned),
            phone: entry.first(TELEPHONE_NUMBER).map(str::to_owned),
            name: entry.first(NAME).map(str::to_owned),
            guid,
            dn: entry.object_name.clone(),
        })
    }

    /// Returns true if the user belongs to the provided group (case-insensitive).
    #[must_use]
    pub fn in_group(&self, group: &str) -> bool {
        self.groups.iter().any(|g| g.eq_ignore_ascii_case(group))
    }

    /// Parses the verbatim `dn` field into a [`DistinguishedName`].
    ///
    /// # Errors
    ///
    /// Returns an error if the stored distinguished name is malformed.
    pub fn distinguished_name(&self) -> Result<DistinguishedName> {
        DistinguishedName::parse(&self.dn).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adlookup_core::Error;

    const SAMPLE_BYTES: [u8; 16] = [
        0x10, 0xE7, 0xD4, 0x17, 0x4D, 0x62, 0x78, 0x49, 0x90, 0x0B, 0x85, 0x49, 0xCB, 0x75, 0x36,
        0x99,
    ];

    fn sample_entry() -> DirectoryEntry {
        DirectoryEntry::builder("CN=Test test,OU=Users,DC=domain,DC=local")
            .attribute_values(
                "memberOf",
                [
                    "CN=Group1,OU=Test,DC=domain,DC=com",
                    "CN=Group2,OU=Test,OU=Test2,DC=domain,DC=com",
                ],
            )
            .attribute("mail", "test@domain.com")
            .attribute("telephoneNumber", "+1 12312312324")
            .attribute("name", "Test User")
            .binary_attribute("objectGUID", SAMPLE_BYTES.to_vec())
            .build()
    }

    #[test]
    fn builds_full_user_object() {
        let user = UserObject::from_entry(&sample_entry()).unwrap();

        assert_eq!(user.groups, ["Group1", "Group2"]);
        assert_eq!(user.mail.as_deref(), Some("test@domain.com"));
        assert_eq!(user.phone.as_deref(), Some("+1 12312312324"));
        assert_eq!(user.name.as_deref(), Some("Test User"));
        assert_eq!(user.guid.to_string(), "17d4e710-624d-4978-900b-8549cb753699");
        assert_eq!(user.dn, "CN=Test test,OU=Users,DC=domain,DC=local");
    }

    #[test]
    fn absent_scalars_stay_none() {
        let entry = DirectoryEntry::builder("CN=Test test,OU=Users,DC=domain,DC=local")
            .binary_attribute("objectGUID", SAMPLE_BYTES.to_vec())
            .build();
        let user = UserObject::from_entry(&entry).unwrap();

        assert!(user.groups.is_empty());
        assert!(user.mail.is_none());
        assert!(user.phone.is_none());
        assert!(user.name.is_none());
    }

    #[test]
    fn missing_guid_fails_without_partial_record() {
        let entry = DirectoryEntry::builder("CN=Test test,OU=Users,DC=domain,DC=local")
            .attribute("mail", "test@domain.com")
            .build();
        assert!(matches!(
            UserObject::from_entry(&entry).unwrap_err(),
            Error::MissingAttribute(_)
        ));
    }

    #[test]
    fn extra_attributes_are_not_projected() {
        let mut entry = sample_entry();
        entry
            .object
            .insert("sAMAccountName".to_string(), "tuser".into());
        let user = UserObject::from_entry(&entry).unwrap();
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("sAMAccountName").is_none());
    }

    #[test]
    fn in_group_is_case_insensitive() {
        let user = UserObject::from_entry(&sample_entry()).unwrap();
        assert!(user.in_group("group1"));
        assert!(!user.in_group("group3"));
    }

    #[test]
    fn distinguished_name_parses_dn_field() {
        let user = UserObject::from_entry(&sample_entry()).unwrap();
        let dn = user.distinguished_name().unwrap();
        assert_eq!(dn.get("ou"), Some("Users"));
    }
}
