//! Core types for the peer finder
//!
//! Naming rules for the governing service's DNS records and the values
//! passed between pipeline stages.

use std::collections::BTreeSet;
use std::net::IpAddr;

use crate::error::PeerFinderError;

// =============================================================================
// CONSTANTS
// =============================================================================

/// Label inserted between the namespace and the cluster domain
pub const ENDPOINTS_SEGMENT: &str = "endpoints";

/// Default cluster domain
pub const DEFAULT_CLUSTER_DOMAIN: &str = "cluster.local";

/// Where the peer list is published unless overridden
pub const DEFAULT_PEERS_FILE: &str = "/tmp/peers";

/// Separator between tokens of the published peer list
pub const PEER_SEPARATOR: &str = " ";

// =============================================================================
// NAMING
// =============================================================================

/// `endpoints.{domain}`
pub fn service_suffix(domain: &str) -> String {
    [ENDPOINTS_SEGMENT, domain].join(".")
}

/// DNS group name of the governing service: `{service}.{namespace}.endpoints.{domain}`
pub fn group_query(service: &str, namespace: &str, domain: &str) -> String {
    [service, namespace, &service_suffix(domain)].join(".")
}

/// Fully qualified peer name of one instance:
/// `{hostname}.{service}.{namespace}.endpoints.{domain}`
pub fn instance_fqdn(hostname: &str, service: &str, namespace: &str, domain: &str) -> String {
    [hostname, &group_query(service, namespace, domain)].join(".")
}

// =============================================================================
// INSTANCE IDENTITY
// =============================================================================

/// Who this instance is, resolved once per run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceIdentity {
    /// DNS short name (the `HOSTNAME` of the instance)
    pub self_name: String,

    /// Address excluded from the peer list
    pub self_address: String,

    /// Fully qualified peer name under the governing service
    pub fqdn: String,

    /// Every address the hostname resolved to, in selection order
    pub candidates: Vec<IpAddr>,
}

impl InstanceIdentity {
    /// Whether `addr` is the address this instance answers on
    pub fn is_self(&self, addr: &str) -> bool {
        self.self_address == addr
    }
}

// =============================================================================
// PEER LOOKUP
// =============================================================================

/// Outcome of resolving the governing service's DNS group
///
/// A transport failure does not abort the run: `peers` is empty and the
/// failure is kept in `error` for logging.
#[derive(Debug)]
pub struct PeerLookup {
    /// Name that was resolved
    pub query: String,

    /// Deduplicated addresses, iterated in lexicographic order
    pub peers: BTreeSet<String>,

    /// Transport error, if the lookup failed
    pub error: Option<PeerFinderError>,
}

impl PeerLookup {
    pub fn empty(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            peers: BTreeSet::new(),
            error: None,
        }
    }

    pub fn failed(query: impl Into<String>, error: PeerFinderError) -> Self {
        Self {
            error: Some(error),
            ..Self::empty(query)
        }
    }

    pub fn success(&self) -> bool {
        self.error.is_none()
    }

    pub fn len(&self) -> usize {
        self.peers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.peers.is_empty()
    }
}
