//! Peer Finder Configuration
//!
//! Built once at startup from defaults, an optional TOML file and the
//! command line, then shared read-only with every stage.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::PeerFinderError;
use crate::types::{self, DEFAULT_CLUSTER_DOMAIN, DEFAULT_PEERS_FILE};

/// Main configuration for a peer finder run
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PeerFinderConfig {
    /// Governing service responsible for the DNS records of this instance
    pub service: String,

    /// Namespace the instance runs in
    pub namespace: String,

    /// Cluster domain
    pub domain: String,

    /// DNS short name of this instance
    pub hostname: String,

    /// Output file for the peer list
    pub peers_file: PathBuf,
}

impl Default for PeerFinderConfig {
    fn default() -> Self {
        Self {
            service: String::new(),
            namespace: String::new(),
            domain: DEFAULT_CLUSTER_DOMAIN.to_string(),
            hostname: String::new(),
            peers_file: PathBuf::from(DEFAULT_PEERS_FILE),
        }
    }
}

impl PeerFinderConfig {
    /// Load configuration from TOML file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config.trimmed())
    }

    /// Strip surrounding whitespace from every name
    pub fn trimmed(mut self) -> Self {
        for value in [&mut self.service, &mut self.namespace, &mut self.domain, &mut self.hostname] {
            *value = value.trim().to_string();
        }
        self
    }

    // Builder-style methods for CLI overrides. `None` keeps the current value.

    pub fn with_service(mut self, service: Option<String>) -> Self {
        if let Some(service) = service {
            self.service = service.trim().to_string();
        }
        self
    }

    pub fn with_namespace(mut self, namespace: Option<String>) -> Self {
        if let Some(namespace) = namespace {
            self.namespace = namespace.trim().to_string();
        }
        self
    }

    pub fn with_domain(mut self, domain: Option<String>) -> Self {
        if let Some(domain) = domain {
            self.domain = domain.trim().to_string();
        }
        self
    }

    pub fn with_hostname(mut self, hostname: Option<String>) -> Self {
        if let Some(hostname) = hostname {
            self.hostname = hostname.trim().to_string();
        }
        self
    }

    pub fn with_peers_file(mut self, peers_file: Option<PathBuf>) -> Self {
        if let Some(peers_file) = peers_file {
            self.peers_file = peers_file;
        }
        self
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), PeerFinderError> {
        if is_blank(&self.service) || is_blank(&self.namespace) {
            return Err(PeerFinderError::configuration(
                "incomplete args, require --service and --ns or an env var for POD_NAMESPACE",
            ));
        }

        if is_blank(&self.hostname) {
            return Err(PeerFinderError::configuration(
                "failed to get hostname, HOSTNAME is not set",
            ));
        }

        if is_blank(&self.domain) {
            return Err(PeerFinderError::configuration("cluster domain must not be empty"));
        }

        if self.peers_file.as_os_str().is_empty() {
            return Err(PeerFinderError::configuration("peers file path must not be empty"));
        }

        Ok(())
    }

    /// DNS group holding every member of the governing service
    pub fn group_query(&self) -> String {
        types::group_query(&self.service, &self.namespace, &self.domain)
    }

    /// This instance's fully qualified peer name
    pub fn self_fqdn(&self) -> String {
        types::instance_fqdn(&self.hostname, &self.service, &self.namespace, &self.domain)
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
pub(crate) fn test_config(peers_file: PathBuf) -> PeerFinderConfig {
    PeerFinderConfig::default()
        .with_service(Some("web".to_string()))
        .with_namespace(Some("default".to_string()))
        .with_hostname(Some("pod-0".to_string()))
        .with_peers_file(Some(peers_file))
}
