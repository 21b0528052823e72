//! # adlookup-core
//!
//! Core types for normalizing Active Directory lookup results.
//!
//! This crate provides the error taxonomy shared by the adlookup workspace
//! and the strongly-typed `objectGUID` wrapper with its binary decoding.
//!
//! ## Modules
//!
//! - [`error`] - Error types and structured error responses
//! - [`guid`] - Strongly-typed GUID wrapper and mixed-endian decoding

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod guid;

// Re-export commonly used types
pub use error::{Error, Result};
pub use guid::ObjectGuid;
