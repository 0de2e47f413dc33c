//! Peer finder errors
//!
//! Every stage returns one of these. Only peer group lookup failures are
//! non-fatal: they are carried in [`crate::types::PeerLookup`] instead of
//! being returned as `Err`.

use std::path::PathBuf;

/// Errors raised by the peer finder pipeline
#[derive(Debug, thiserror::Error)]
pub enum PeerFinderError {
    /// A required input is missing or empty
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Host resolution failed or returned nothing
    #[error("failed to resolve {name}: {reason}")]
    Resolution { name: String, reason: String },

    /// The peers file could not be written
    #[error("failed to write peers file {path:?}: {source}")]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PeerFinderError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn resolution(name: impl Into<String>, reason: impl ToString) -> Self {
        Self::Resolution {
            name: name.into(),
            reason: reason.to_string(),
        }
    }
}
