use std::fmt;
use std::path::Path;

use uuid::Uuid;

/// Filename prefix shared by all synthesis artifacts in the media directory.
pub const ARTIFACT_PREFIX: &str = "speech_";

/// A validated synthesis-artifact filename.
///
/// Construction is the only place artifact names are checked, so every
/// consumer of a name is confined to the media directory: separators,
/// `..` components, hidden-file prefixes, and NUL bytes never pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactName(String);

impl ArtifactName {
    /// Generate a fresh unique artifact name. Repeated calls always yield
    /// distinct names; artifacts are never deduplicated.
    pub fn generate() -> Self {
        Self(format!("{}{}.mp3", ARTIFACT_PREFIX, Uuid::new_v4().simple()))
    }

    pub fn parse(name: &str) -> Option<Self> {
        if name.is_empty() || name.len() > 255 {
            return None;
        }
        if name.starts_with('.') {
            return None;
        }
        if name.contains(['/', '\\', '\0']) || name.contains("..") {
            return None;
        }
        Some(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Content type served for this artifact, inferred from the extension.
    pub fn content_type(&self) -> &'static str {
        match Path::new(&self.0).extension().and_then(|e| e.to_str()) {
            Some("mp3") => "audio/mpeg",
            Some("wav") => "audio/wav",
            Some("ogg") => "audio/ogg",
            _ => "application/octet-stream",
        }
    }
}

impl fmt::Display for ArtifactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_names_are_distinct_mp3_artifacts() {
        let a = ArtifactName::generate();
        let b = ArtifactName::generate();

        assert_ne!(a, b);
        assert!(a.as_str().starts_with(ARTIFACT_PREFIX));
        assert!(a.as_str().ends_with(".mp3"));
        assert_eq!(a.content_type(), "audio/mpeg");
    }

    #[test]
    fn parse_accepts_plain_filenames() {
        assert!(ArtifactName::parse("speech_abc123.mp3").is_some());
        assert!(ArtifactName::parse("clip.wav").is_some());
    }

    #[test]
    fn parse_rejects_traversal_and_separators() {
        assert!(ArtifactName::parse("../etc/passwd").is_none());
        assert!(ArtifactName::parse("..").is_none());
        assert!(ArtifactName::parse("a/b.mp3").is_none());
        assert!(ArtifactName::parse("a\\b.mp3").is_none());
        assert!(ArtifactName::parse(".hidden").is_none());
        assert!(ArtifactName::parse("").is_none());
        assert!(ArtifactName::parse("nul\0byte.mp3").is_none());
    }

    #[test]
    fn content_type_follows_extension() {
        assert_eq!(
            ArtifactName::parse("x.wav").unwrap().content_type(),
            "audio/wav"
        );
        assert_eq!(
            ArtifactName::parse("x.ogg").unwrap().content_type(),
            "audio/ogg"
        );
        assert_eq!(
            ArtifactName::parse("x.bin").unwrap().content_type(),
            "application/octet-stream"
        );
    }
}
