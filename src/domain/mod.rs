mod artifact;
mod upload;

pub use artifact::{ARTIFACT_PREFIX, ArtifactName};
pub use upload::UploadedAudio;
