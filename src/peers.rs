//! Peer enumeration and peer list construction
//!
//! The governing service's DNS group resolves to one address per live
//! member, this instance included. The published list is every other
//! member followed by this instance's own name.

use std::collections::BTreeSet;
use tracing::{debug, info, warn};

use crate::error::PeerFinderError;
use crate::resolver::HostResolver;
use crate::types::{InstanceIdentity, PeerLookup, PEER_SEPARATOR};

/// Resolve the governing service's DNS group into its member addresses.
///
/// Exactly one lookup is made. A failed lookup yields an empty set with
/// the error attached, so the caller can still publish a self-only list.
pub async fn enumerate_peers<R: HostResolver + ?Sized>(resolver: &R, query: &str) -> PeerLookup {
    match resolver.lookup(query).await {
        Ok(addrs) => {
            info!("LookupHost {} returned {} addresses", query, addrs.len());

            let peers: BTreeSet<String> = addrs.iter().map(|ip| ip.to_string()).collect();
            PeerLookup {
                query: query.to_string(),
                peers,
                error: None,
            }
        }
        Err(e) => {
            warn!("LookupHost {} failed: {}", query, e);
            PeerLookup::failed(query, PeerFinderError::resolution(query, e))
        }
    }
}

/// Build the space separated peer list, with `self_name` as the last token.
///
/// Peers come out in lexicographic order; the self address is dropped.
pub fn build_peer_list(identity: &InstanceIdentity, peers: &BTreeSet<String>) -> String {
    let mut tokens: Vec<&str> = Vec::with_capacity(peers.len() + 1);

    for peer in peers {
        let peer = peer.trim();
        if peer.is_empty() {
            continue;
        }

        debug!("peer {}", peer);
        if !identity.is_self(peer) {
            tokens.push(peer);
        }
    }

    tokens.push(identity.self_name.trim());
    tokens.join(PEER_SEPARATOR)
}
