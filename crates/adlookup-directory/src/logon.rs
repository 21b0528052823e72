//! Logon name classification and SAM account cleanup.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::dn::DistinguishedName;

/// The identifier kind of a raw logon string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogonType {
    /// Email-like logon identifier, e.g. `user@domain.com`.
    #[serde(rename = "userPrincipalName")]
    UserPrincipalName,
    /// Full directory path, e.g. `CN=User,OU=Users,DC=domain,DC=com`.
    #[serde(rename = "distinguishedName")]
    DistinguishedName,
    /// Legacy short name, bare or qualified as `DOMAIN\name`.
    #[serde(rename = "sAMAccountName")]
    SamAccountName,
}

impl LogonType {
    /// Classifies a raw logon string.
    ///
    /// Precedence: anything containing `@` is a UPN; otherwise a string
    /// that parses as a distinguished name is a DN; everything else is a
    /// SAM account name.
    #[must_use]
    pub fn classify(logon: &str) -> Self {
        if logon.contains('@') {
            return Self::UserPrincipalName;
        }
        if DistinguishedName::parse(logon).is_ok() {
            return Self::DistinguishedName;
        }
        Self::SamAccountName
    }

    /// Returns the Active Directory attribute name for this logon kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::UserPrincipalName => "userPrincipalName",
            Self::DistinguishedName => "distinguishedName",
            Self::SamAccountName => "sAMAccountName",
        }
    }
}

impl fmt::Display for LogonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strips the `DOMAIN\` qualifier from a SAM account name.
///
/// Returns the text after the last backslash, or the input unchanged when
/// no backslash is present.
#[must_use]
pub fn clean_sam_account_name(logon: &str) -> &str {
    match logon.rfind('\\') {
        Some(idx) => &logon[idx + 1..],
        None => logon,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_user_principal_name() {
        assert_eq!(
            LogonType::classify("test@test.com"),
            LogonType::UserPrincipalName
        );
    }

    #[test]
    fn classifies_distinguished_name() {
        assert_eq!(
            LogonType::classify("CN=Test Test,OU=Users,DC=test,DC=com"),
            LogonType::DistinguishedName
        );
    }

    #[test]
    fn classifies_sam_account_name() {
        assert_eq!(LogonType::classify("test\\test"), LogonType::SamAccountName);
        assert_eq!(LogonType::classify("test"), LogonType::SamAccountName);
    }

    #[test]
    fn upn_takes_precedence_over_dn_shape() {
        assert_eq!(
            LogonType::classify("CN=x@y,DC=test,DC=com"),
            LogonType::UserPrincipalName
        );
    }

    #[test]
    fn as_str_yields_attribute_names() {
        assert_eq!(LogonType::UserPrincipalName.as_str(), "userPrincipalName");
        assert_eq!(LogonType::DistinguishedName.as_str(), "distinguishedName");
        assert_eq!(LogonType::SamAccountName.as_str(), "sAMAccountName");
        assert_eq!(LogonType::SamAccountName.to_string(), "sAMAccountName");
    }

    #[test]
    fn cleans_domain_qualifier() {
        assert_eq!(clean_sam_account_name("test\\test"), "test");
        assert_eq!(clean_sam_account_name("test"), "test");
    }

    #[test]
    fn cleans_after_last_backslash() {
        assert_eq!(clean_sam_account_name("corp\\sub\\user"), "user");
        assert_eq!(clean_sam_account_name("corp\\"), "");
    }
}
