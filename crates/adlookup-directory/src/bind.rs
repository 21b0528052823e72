//! Bind failure classification.
//!
//! Translates the failure value returned by a directory server during an
//! authentication attempt into a displayable cause. The resolver never
//! fails: values that do not look like a directory bind error resolve to a
//! generic message.

use serde_json::Value;
use tracing::debug;

const INVALID_CREDENTIALS: &str = "InvalidCredentialsError";
// Sub-status 775 in the server diagnostic marks a locked-out account.
const LOCKOUT_CODE: &str = "775";

const MSG_UNKNOWN: &str = "Unknown Auth Error";
const MSG_LOCKED_OUT: &str = "Account is locked out";
const MSG_INVALID_CREDENTIALS: &str = "Invalid username or password";

/// A bind/authentication failure in a shape this crate can reason about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindFailure {
    /// A recognized directory bind error.
    Directory {
        /// Error name reported by the client library.
        name: String,
        /// Server diagnostic message (`lde_message`).
        diagnostic: String,
    },
    /// Anything that does not carry the expected error fields.
    Unrecognized,
}

impl BindFailure {
    /// Classifies an arbitrary JSON value into a bind failure.
    ///
    /// Only objects carrying string `name` and `lde_message` fields become
    /// [`BindFailure::Directory`]; primitives, nulls and unrelated objects
    /// are [`BindFailure::Unrecognized`].
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let (Some(name), Some(diagnostic)) = (
            value.get("name").and_then(Value::as_str),
            value.get("lde_message").and_then(Value::as_str),
        ) else {
            debug!("bind failure value does not carry name/lde_message fields");
            return Self::Unrecognized;
        };

        Self::Directory {
            name: name.to_string(),
            diagnostic: diagnostic.to_string(),
        }
    }
}

/// Maps a bind failure to a human-readable cause.
///
/// Invalid-credentials errors whose diagnostic carries the lockout
/// sub-status resolve to a lockout message; every other error name falls
/// through to the generic message.
#[must_use]
pub fn resolve_bind_error(failure: &BindFailure) -> &'static str {
    match failure {
        BindFailure::Directory { name, diagnostic } if name == INVALID_CREDENTIALS => {
            if diagnostic.contains(LOCKOUT_CODE) {
                MSG_LOCKED_OUT
            } else {
                MSG_INVALID_CREDENTIALS
            }
        }
        BindFailure::Directory { .. } | BindFailure::Unrecognized => MSG_UNKNOWN,
    }
}

/// Convenience wrapper that classifies and resolves a raw JSON value.
#[must_use]
pub fn resolve_bind_value(value: &Value) -> &'static str {
    resolve_bind_error(&BindFailure::from_value(value))
}
