//! Host resolution
//!
//! The only network access the peer finder performs. Stages take a
//! [`HostResolver`] so tests can substitute fixed answers.

use async_trait::async_trait;
use std::io;
use std::net::IpAddr;
use tracing::debug;

/// Resolves a host name to the addresses it currently points at
#[async_trait]
pub trait HostResolver: Send + Sync {
    /// Look up `name`, returning addresses in resolver order.
    ///
    /// An empty `Ok` means the name exists but has no addresses; `Err` is a
    /// transport or lookup failure.
    async fn lookup(&self, name: &str) -> io::Result<Vec<IpAddr>>;
}

/// Resolver backed by the system's `getaddrinfo`
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemResolver;

#[async_trait]
impl HostResolver for SystemResolver {
    async fn lookup(&self, name: &str) -> io::Result<Vec<IpAddr>> {
        // lookup_host wants a socket address, the port is irrelevant
        let addrs = tokio::net::lookup_host((name, 0)).await?;
        let ips: Vec<IpAddr> = addrs.map(|a| a.ip()).collect();

        debug!("LookupHost {} -> {:?}", name, ips);
        Ok(ips)
    }
}

#[cfg(test)]
pub(crate) mod mock {
    use super::*;
    use std::collections::HashMap;

    enum Answer {
        Addrs(Vec<IpAddr>),
        Fail(io::ErrorKind),
    }

    /// Fixed answers per name; unknown names resolve to nothing
    #[derive(Default)]
    pub struct StaticResolver {
        answers: HashMap<String, Answer>,
    }

    impl StaticResolver {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_addrs(mut self, name: &str, addrs: &[&str]) -> Self {
            let ips = addrs.iter().map(|a| a.parse().unwrap()).collect();
            self.answers.insert(name.to_string(), Answer::Addrs(ips));
            self
        }

        pub fn with_failure(mut self, name: &str, kind: io::ErrorKind) -> Self {
            self.answers.insert(name.to_string(), Answer::Fail(kind));
            self
        }
    }

    #[async_trait]
    impl HostResolver for StaticResolver {
        async fn lookup(&self, name: &str) -> io::Result<Vec<IpAddr>> {
            match self.answers.get(name) {
                Some(Answer::Addrs(ips)) => Ok(ips.clone()),
                Some(Answer::Fail(kind)) => Err(io::Error::new(*kind, "lookup failed")),
                None => Ok(Vec::new()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_system_resolver_localhost() {
        let ips = SystemResolver.lookup("localhost").await.unwrap();
        assert!(ips.iter().all(|ip| ip.is_loopback()));
    }

    #[tokio::test]
    async fn test_system_resolver_literal() {
        let ips = SystemResolver.lookup("127.0.0.1").await.unwrap();
        assert_eq!(ips, vec!["127.0.0.1".parse::<IpAddr>().unwrap()]);
    }

    #[tokio::test]
    async fn test_static_resolver() {
        let resolver = mock::StaticResolver::new()
            .with_addrs("pod-0", &["10.0.0.5"])
            .with_failure("broken", io::ErrorKind::TimedOut);

        assert_eq!(resolver.lookup("pod-0").await.unwrap().len(), 1);
        assert!(resolver.lookup("unknown").await.unwrap().is_empty());
        assert!(resolver.lookup("broken").await.is_err());
    }
}
