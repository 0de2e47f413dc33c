//! Peer finder CLI
//!
//! Resolves the members of a governing service and writes them to the
//! peers file, then exits.

use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

use peer_finder::{PeerFinder, PeerFinderConfig, SystemResolver};

/// Peer finder - lists the other members of a headless service
#[derive(Parser, Debug)]
#[command(name = "peer-finder")]
#[command(author = "KratOs Contributors")]
#[command(version)]
#[command(about = "Looks up the endpoints of a governing service and publishes them", long_about = None)]
struct Args {
    /// Governing service responsible for the DNS records of the domain this pod is in
    #[arg(long)]
    service: Option<String>,

    /// The namespace this pod is running in
    #[arg(long = "ns", env = "POD_NAMESPACE")]
    namespace: Option<String>,

    /// The cluster domain used by the cluster
    #[arg(long)]
    domain: Option<String>,

    /// Short DNS name of this pod
    #[arg(long, env = "HOSTNAME")]
    hostname: Option<String>,

    /// Where to write the peer list
    #[arg(long)]
    peers_file: Option<PathBuf>,

    /// Optional TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.clone().into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = build_config(args)?;
    let finder = PeerFinder::new(Arc::new(config), SystemResolver);

    let report = finder.run().await?;
    info!(
        "✅ Published {} peers for {} to {:?}",
        report.peer_count(),
        report.identity.fqdn,
        report.peers_file
    );

    info!("Peer finder exiting");
    Ok(())
}

/// Layer defaults, the optional config file and the command line
fn build_config(args: Args) -> anyhow::Result<PeerFinderConfig> {
    let config = match &args.config {
        Some(path) if path.exists() => PeerFinderConfig::load(path)?,
        Some(path) => {
            warn!("Config file {:?} not found, using defaults", path);
            PeerFinderConfig::default()
        }
        None => PeerFinderConfig::default(),
    };

    // Override config with CLI args
    Ok(config
        .with_service(args.service)
        .with_namespace(args.namespace)
        .with_domain(args.domain)
        .with_hostname(args.hostname)
        .with_peers_file(args.peers_file))
}
