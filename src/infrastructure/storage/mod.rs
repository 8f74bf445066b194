mod media_dir;

pub use media_dir::{MediaDir, MediaStoreError};
