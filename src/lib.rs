//! Peer Finder
//!
//! Discovers the sibling instances of a workload that sits behind a
//! headless governing service, and publishes them for a co-located
//! process to consume.
//!
//! ## Pipeline
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │ Identity        HOSTNAME → self address, self FQDN           │
//! │ Enumeration     {svc}.{ns}.endpoints.{domain} → address set  │
//! │ Peer list       sorted set − self address + self name        │
//! │ Publication     truncate and write the peers file            │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! One run per invocation, no state carried between runs.

pub mod config;
pub mod error;
pub mod finder;
pub mod identity;
pub mod peers;
pub mod publish;
pub mod resolver;
pub mod types;

pub use config::PeerFinderConfig;
pub use error::PeerFinderError;
pub use finder::{PeerFinder, PeerFinderReport};
pub use resolver::{HostResolver, SystemResolver};
pub use types::{InstanceIdentity, PeerLookup};
