//! # quayside-error
//!
//! Error taxonomy for the Quayside container-registry client.
//!
//! The registry reports a closed set of failure kinds. This crate gives the
//! rest of the client one shared contract over them:
//!
//! - [`RegistryErrorKind`]: which failure occurred, with its stable code
//! - [`RegistryError`]: the immutable error value a failed call carries
//! - [`Fault`]: whether the caller or the service caused the failure
//!
//! The transport layer decodes a failure response into a [`RegistryError`];
//! retry/backoff logic consults [`RegistryError::fault`] and
//! [`RegistryError::code`]; reporting surfaces use the `Display` form
//! `"<code>: <message>"`.

#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

mod error;
mod fault;
mod kind;

pub use error::{LayerPartDetails, RegistryError};
pub use fault::Fault;
pub use kind::RegistryErrorKind;

/// Result type alias for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
