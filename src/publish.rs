//! Peer list publication
//!
//! The peers file is the only interface to the co-located consumer. Each
//! run truncates and rewrites it in place; there is no append and no
//! atomic rename, the last writer wins.

use std::path::Path;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::error::PeerFinderError;

/// Replace the contents of `path` with `content`
pub async fn publish(path: &Path, content: &str) -> Result<(), PeerFinderError> {
    let persistence = |source: std::io::Error| PeerFinderError::Persistence {
        path: path.to_path_buf(),
        source,
    };

    // File is closed on drop, including the early returns below
    let mut file = tokio::fs::File::create(path).await.map_err(persistence)?;
    file.write_all(content.as_bytes()).await.map_err(persistence)?;
    file.flush().await.map_err(persistence)?;
    file.sync_all().await.map_err(persistence)?;

    debug!("Wrote {} bytes to {:?}", content.len(), path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_publish_creates_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("peers");

        publish(&path, "10.0.0.6 pod-0").await.unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "10.0.0.6 pod-0");
    }

    #[tokio::test]
    async fn test_publish_truncates() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("peers");
        std::fs::write(&path, "10.0.0.6 10.0.0.7 10.0.0.8 pod-0").unwrap();

        publish(&path, "pod-0").await.unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "pod-0");
    }

    #[tokio::test]
    async fn test_publish_missing_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("peers");

        let err = publish(&path, "pod-0").await.unwrap_err();
        assert!(matches!(err, PeerFinderError::Persistence { .. }));
        assert!(!path.exists());
    }
}
