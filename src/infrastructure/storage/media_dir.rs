use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use uuid::Uuid;

use crate::domain::{ARTIFACT_PREFIX, ArtifactName};

const UPLOAD_PREFIX: &str = "upload_";
const NORMALIZED_PREFIX: &str = "norm_";

/// The single on-disk directory holding transient upload files and synthesis
/// artifacts. Unique per-operation filenames are the only concurrency-safety
/// mechanism: nothing here is ever shared between requests.
pub struct MediaDir {
    root: PathBuf,
}

impl MediaDir {
    pub fn new(root: PathBuf) -> Result<Self, MediaStoreError> {
        std::fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Fresh unique path for persisting an upload, keeping the caller's
    /// extension.
    pub fn upload_path(&self, extension: &str) -> PathBuf {
        self.root.join(format!(
            "{}{}.{}",
            UPLOAD_PREFIX,
            Uuid::new_v4().simple(),
            extension
        ))
    }

    /// Fresh unique path for the canonical PCM output of normalization.
    pub fn normalized_path(&self) -> PathBuf {
        self.root
            .join(format!("{}{}.wav", NORMALIZED_PREFIX, Uuid::new_v4().simple()))
    }

    pub async fn save(&self, path: &Path, data: &[u8]) -> Result<(), MediaStoreError> {
        tokio::fs::write(path, data).await?;
        Ok(())
    }

    /// Size of a persisted file, or `None` if it is missing.
    pub async fn persisted_len(&self, path: &Path) -> Option<u64> {
        tokio::fs::metadata(path).await.ok().map(|m| m.len())
    }

    pub async fn write_artifact(
        &self,
        name: &ArtifactName,
        data: &[u8],
    ) -> Result<(), MediaStoreError> {
        tokio::fs::write(self.root.join(name.as_str()), data).await?;
        Ok(())
    }

    pub async fn read_artifact(&self, name: &ArtifactName) -> Result<Vec<u8>, MediaStoreError> {
        match tokio::fs::read(self.root.join(name.as_str())).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(MediaStoreError::NotFound(name.to_string()))
            }
            Err(e) => Err(MediaStoreError::Io(e)),
        }
    }

    /// Remove a temporary file, suppressing failures so cleanup can never
    /// mask or replace a request's primary result. A missing file is not an
    /// error: the path may never have been produced.
    pub async fn remove_quietly(&self, path: &Path) {
        match tokio::fs::remove_file(path).await {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to remove temporary file");
            }
        }
    }

    /// Delete synthesis artifacts older than `ttl`. Upload and normalization
    /// temporaries belong to in-flight requests and are never touched.
    pub async fn sweep_expired(&self, ttl: Duration) -> Result<usize, MediaStoreError> {
        let mut removed = 0;
        let mut entries = tokio::fs::read_dir(&self.root).await?;

        while let Some(entry) = entries.next_entry().await? {
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                continue;
            };
            if !name.starts_with(ARTIFACT_PREFIX) {
                continue;
            }

            let Ok(meta) = entry.metadata().await else {
                continue;
            };
            let expired = meta
                .modified()
                .ok()
                .and_then(|m| m.elapsed().ok())
                .map(|age| age >= ttl)
                .unwrap_or(false);

            if expired && tokio::fs::remove_file(entry.path()).await.is_ok() {
                removed += 1;
            }
        }

        Ok(removed)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MediaStoreError {
    #[error("artifact not found: {0}")]
    NotFound(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn media_dir() -> (tempfile::TempDir, MediaDir) {
        let dir = tempfile::tempdir().unwrap();
        let media = MediaDir::new(dir.path().to_path_buf()).unwrap();
        (dir, media)
    }

    #[test]
    fn generated_paths_are_unique() {
        let (_dir, media) = media_dir();

        assert_ne!(media.upload_path("wav"), media.upload_path("wav"));
        assert_ne!(media.normalized_path(), media.normalized_path());
    }

    #[tokio::test]
    async fn artifact_roundtrip() {
        let (_dir, media) = media_dir();
        let name = ArtifactName::generate();

        media.write_artifact(&name, b"mp3 bytes").await.unwrap();
        let bytes = media.read_artifact(&name).await.unwrap();

        assert_eq!(bytes, b"mp3 bytes");
    }

    #[tokio::test]
    async fn missing_artifact_is_not_found() {
        let (_dir, media) = media_dir();
        let name = ArtifactName::parse("speech_missing.mp3").unwrap();

        let err = media.read_artifact(&name).await.unwrap_err();

        assert!(matches!(err, MediaStoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn remove_quietly_tolerates_missing_files() {
        let (_dir, media) = media_dir();

        media.remove_quietly(&media.upload_path("wav")).await;
    }

    #[tokio::test]
    async fn sweep_removes_only_expired_artifacts() {
        let (_dir, media) = media_dir();
        let artifact = ArtifactName::generate();
        media.write_artifact(&artifact, b"old").await.unwrap();
        let upload = media.upload_path("wav");
        media.save(&upload, b"in flight").await.unwrap();

        let removed = media.sweep_expired(Duration::ZERO).await.unwrap();

        assert_eq!(removed, 1);
        assert!(media.read_artifact(&artifact).await.is_err());
        assert_eq!(media.persisted_len(&upload).await, Some(9));
    }

    #[tokio::test]
    async fn sweep_keeps_fresh_artifacts() {
        let (_dir, media) = media_dir();
        let artifact = ArtifactName::generate();
        media.write_artifact(&artifact, b"fresh").await.unwrap();

        let removed = media.sweep_expired(Duration::from_secs(3600)).await.unwrap();

        assert_eq!(removed, 0);
        assert!(media.read_artifact(&artifact).await.is_ok());
    }
}
