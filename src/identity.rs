//! Instance identity
//!
//! Derives this instance's peer name and the address it is known by.

use std::net::IpAddr;
use tracing::{debug, info};

use crate::config::PeerFinderConfig;
use crate::error::PeerFinderError;
use crate::resolver::HostResolver;
use crate::types::InstanceIdentity;

/// Resolve who this instance is.
///
/// Fails with a configuration error if the service, namespace or hostname
/// is missing, and with a resolution error if the hostname does not
/// resolve to at least one address.
pub async fn resolve_identity<R: HostResolver + ?Sized>(
    config: &PeerFinderConfig,
    resolver: &R,
) -> Result<InstanceIdentity, PeerFinderError> {
    config.validate()?;

    // Configs built by hand may still carry whitespace
    let config = config.clone().trimmed();
    let hostname = config.hostname.as_str();
    info!("hostname {}", hostname);

    let fqdn = config.self_fqdn();
    info!("myName {}", fqdn);

    let addrs = resolver
        .lookup(hostname)
        .await
        .map_err(|e| PeerFinderError::resolution(hostname, e))?;
    debug!("addrs {:?}", addrs);

    let candidates = order_candidates(addrs);
    let self_address = candidates
        .first()
        .ok_or_else(|| PeerFinderError::resolution(hostname, "ip not found"))?
        .to_string();

    if candidates.len() > 1 {
        debug!(
            "{} resolved to {} addresses, using {}",
            hostname,
            candidates.len(),
            self_address
        );
    }

    Ok(InstanceIdentity {
        self_name: hostname.to_string(),
        self_address,
        fqdn,
        candidates,
    })
}

/// Deduplicate and order self addresses: IPv4 first, then numerically.
///
/// The head of the result is the address excluded from the peer list, so
/// a dual-stack host always picks the same one regardless of resolver order.
pub fn order_candidates(mut addrs: Vec<IpAddr>) -> Vec<IpAddr> {
    addrs.sort();
    addrs.dedup();
    addrs
}
