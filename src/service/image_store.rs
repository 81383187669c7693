use anyhow::Context;
use std::path::{Path, PathBuf};

use crate::constants::API_NAME;

/// Filesystem store for uploaded car images. Files are written under a
/// name derived from the upload's original name plus a millisecond
/// timestamp, which is what keeps concurrent uploads from clobbering
/// each other.
#[derive(Clone)]
pub struct ImageStore {
    dir: PathBuf,
}

impl ImageStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Persists the uploaded bytes and returns the stored filename.
    pub async fn store(&self, original_name: &str, bytes: &[u8]) -> anyhow::Result<String> {
        let filename = stored_filename(original_name, chrono::Utc::now().timestamp_millis());
        let path = self.dir.join(&filename);

        tokio::fs::write(&path, bytes)
            .await
            .with_context(|| format!("Failed to write image file {}", path.display()))?;

        tracing::info!("{} Stored uploaded image as {}", API_NAME, filename);
        Ok(filename)
    }
}

// Any directory components in the client-supplied name are discarded by
// taking only the file stem and extension.
fn stored_filename(original: &str, millis: i64) -> String {
    let path = Path::new(original);
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .unwrap_or("image");

    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{}_{}.{}", stem, millis, ext),
        None => format!("{}_{}", stem, millis),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    fn stored_filename_keeps_stem_and_extension() {
        assert_eq!(stored_filename("civic.png", 1700000000000), "civic_1700000000000.png");
    }

    #[test]
    fn stored_filename_handles_missing_extension() {
        assert_eq!(stored_filename("civic", 42), "civic_42");
    }

    #[test]
    fn stored_filename_strips_directory_components() {
        assert_eq!(stored_filename("../../etc/passwd.png", 42), "passwd_42.png");
    }

    #[test]
    fn stored_filename_falls_back_for_empty_name() {
        assert_eq!(stored_filename("", 42), "image_42");
    }

    #[tokio::test]
    #[traced_test]
    async fn store_writes_file_into_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = ImageStore::new(dir.path());

        let name = store.store("civic.png", b"fake image bytes").await.unwrap();
        assert!(name.starts_with("civic_"));
        assert!(name.ends_with(".png"));

        let written = tokio::fs::read(dir.path().join(&name)).await.unwrap();
        assert_eq!(written, b"fake image bytes");
        assert!(logs_contain("Stored uploaded image"));
    }

    #[tokio::test]
    async fn store_fails_when_directory_is_missing() {
        let store = ImageStore::new("/nonexistent/images/dir");
        assert!(store.store("civic.png", b"bytes").await.is_err());
    }
}
