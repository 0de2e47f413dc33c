//! Peer finder driver
//!
//! Runs the stages in order: identity, peer enumeration, peer list,
//! publication. Any fatal error stops the run before the peers file is
//! touched; a failed peer lookup degrades to a self-only list.

use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

use crate::config::PeerFinderConfig;
use crate::error::PeerFinderError;
use crate::identity::resolve_identity;
use crate::peers::{build_peer_list, enumerate_peers};
use crate::publish::publish;
use crate::resolver::HostResolver;
use crate::types::{InstanceIdentity, PeerLookup};

/// What a successful run resolved and published
#[derive(Debug)]
pub struct PeerFinderReport {
    pub identity: InstanceIdentity,
    pub lookup: PeerLookup,
    pub peer_list: String,
    pub peers_file: PathBuf,
}

impl PeerFinderReport {
    /// Number of published peers, not counting this instance
    pub fn peer_count(&self) -> usize {
        self.peer_list.split_whitespace().count().saturating_sub(1)
    }
}

/// Single-shot peer discovery for one instance
pub struct PeerFinder<R: HostResolver> {
    config: Arc<PeerFinderConfig>,
    resolver: R,
}

impl<R: HostResolver> PeerFinder<R> {
    pub fn new(config: Arc<PeerFinderConfig>, resolver: R) -> Self {
        Self { config, resolver }
    }

    /// Resolve, build and publish the peer list
    pub async fn run(&self) -> Result<PeerFinderReport, PeerFinderError> {
        let identity = resolve_identity(&self.config, &self.resolver).await?;

        let query = self.config.group_query();
        let lookup = enumerate_peers(&self.resolver, &query).await;
        if let Some(e) = &lookup.error {
            warn!("⚠️  Peer lookup failed, publishing self only: {}", e);
        } else if lookup.is_empty() {
            info!("No members behind {} yet", lookup.query);
        } else {
            info!("🔍 {} has {} members", lookup.query, lookup.len());
        }

        let peer_list = build_peer_list(&identity, &lookup.peers);
        info!("peerList {}", peer_list);

        publish(&self.config.peers_file, &peer_list).await?;
        info!("📝 Peer list written to {:?}", self.config.peers_file);

        Ok(PeerFinderReport {
            identity,
            lookup,
            peer_list,
            peers_file: self.config.peers_file.clone(),
        })
    }
}
