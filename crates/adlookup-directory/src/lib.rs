//! Normalization of Active Directory search results.
//!
//! This crate turns raw, already-fetched LDAP entry and error values into
//! stable, application-friendly identity records. It performs no I/O: the
//! bind and search against the directory server happen in an external
//! client, which hands the resulting entries and failures to this crate.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod bind;
mod dn;
mod entry;
mod groups;
mod guid;
mod logon;
mod time;
mod user;

pub use bind::{resolve_bind_error, resolve_bind_value, BindFailure};
pub use dn::{DistinguishedName, DistinguishedNameError, RelativeDistinguishedName};
pub use entry::{AttributeValue, BinaryAttribute, DirectoryEntry, DirectoryEntryBuilder};
pub use groups::resolve_groups;
pub use guid::resolve_guid;
pub use logon::{clean_sam_account_name, LogonType};
pub use time::parse_generalized_time;
pub use user::UserObject;

/// Convenient result alias that reuses the core error type.
pub type Result<T> = adlookup_core::Result<T>;
