mod ffmpeg_normalizer;

pub use ffmpeg_normalizer::{DEFAULT_FFMPEG_BINARY, FfmpegNormalizer, check_ffmpeg_binary};
