use std::path::Path;

/// An uploaded audio clip exactly as received: raw bytes plus the declared
/// filename. Owned by a single pipeline invocation and destroyed with it.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedAudio {
    pub filename: String,
    pub data: Vec<u8>,
}

impl UploadedAudio {
    pub fn new(filename: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            data,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Extension of the declared filename, sanitized for use in a generated
    /// temporary-file name. Anything unusual falls back to `None` and the
    /// pipeline's default container extension applies.
    pub fn extension(&self) -> Option<&str> {
        Path::new(&self.filename)
            .extension()
            .and_then(|e| e.to_str())
            .filter(|e| {
                !e.is_empty() && e.len() <= 8 && e.chars().all(|c| c.is_ascii_alphanumeric())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_is_taken_from_filename() {
        let upload = UploadedAudio::new("clip.webm", vec![1]);
        assert_eq!(upload.extension(), Some("webm"));
    }

    #[test]
    fn missing_or_odd_extensions_are_dropped() {
        assert_eq!(UploadedAudio::new("clip", vec![1]).extension(), None);
        assert_eq!(UploadedAudio::new("clip.", vec![1]).extension(), None);
        assert_eq!(
            UploadedAudio::new("clip.no-good", vec![1]).extension(),
            None
        );
        assert_eq!(
            UploadedAudio::new("clip.waytoolongext", vec![1]).extension(),
            None
        );
    }
}
