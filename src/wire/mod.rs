//! Carrier wire-format plumbing.
//!
//! # Responsibilities
//! - Defer serialization of built carrier requests (`Serializable`)
//! - Probe and (de)serialize carrier XML documents (`xml`)
//! - Distinguish "success payload absent" from "document malformed"
//!
//! # Design Decisions
//! - Mappers never perform I/O; they hand back a `Serializable` so the
//!   transport decides when bytes are actually produced
//! - A malformed document is a fatal error (`Err`), never a carrier
//!   `Message`: carrier faults are data, broken documents are bugs

pub mod xml;

mod serializable;

pub use serializable::Serializable;

use thiserror::Error;

/// Errors raised while encoding or decoding carrier documents.
#[derive(Debug, Error)]
pub enum WireError {
    /// The document could not be parsed at all.
    #[error("malformed document: {0}")]
    MalformedDocument(String),

    /// The document parsed but did not match the expected schema.
    #[error("deserialization failed: {0}")]
    Deserialize(String),

    /// The carrier request could not be serialized.
    #[error("serialization failed: {0}")]
    Serialize(String),
}

/// Outcome of probing a carrier response for its success payload.
///
/// `NotFound` is a legitimate business outcome (the carrier rejected the
/// request and returned only faults), not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome<T> {
    Found(T),
    NotFound,
}

impl<T> ParseOutcome<T> {
    pub fn into_option(self) -> Option<T> {
        match self {
            ParseOutcome::Found(value) => Some(value),
            ParseOutcome::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, ParseOutcome::Found(_))
    }
}
