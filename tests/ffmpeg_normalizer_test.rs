use voicegate::application::ports::{AudioNormalizer, NormalizeError};
use voicegate::infrastructure::audio::{FfmpegNormalizer, check_ffmpeg_binary};

fn build_wav(sample_rate: u32, channels: u16, samples: &[i16]) -> Vec<u8> {
    let num_samples = samples.len() as u32;
    let block_align = channels * 2;
    let byte_rate = sample_rate * block_align as u32;
    let data_size = num_samples * 2;
    let file_size = 36 + data_size;

    let mut wav = Vec::with_capacity(44 + data_size as usize);
    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&file_size.to_le_bytes());
    wav.extend_from_slice(b"WAVE");
    wav.extend_from_slice(b"fmt ");
    wav.extend_from_slice(&16u32.to_le_bytes());
    wav.extend_from_slice(&1u16.to_le_bytes()); // PCM
    wav.extend_from_slice(&channels.to_le_bytes());
    wav.extend_from_slice(&sample_rate.to_le_bytes());
    wav.extend_from_slice(&byte_rate.to_le_bytes());
    wav.extend_from_slice(&block_align.to_le_bytes());
    wav.extend_from_slice(&16u16.to_le_bytes()); // bits per sample
    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&data_size.to_le_bytes());
    for &s in samples {
        wav.extend_from_slice(&s.to_le_bytes());
    }
    wav
}

fn ffmpeg_available() -> bool {
    check_ffmpeg_binary("ffmpeg")
}

#[tokio::test]
async fn given_wav_input_when_normalizing_then_produces_output_file() {
    if !ffmpeg_available() {
        return;
    }

    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.wav");
    let output = dir.path().join("output.wav");
    std::fs::write(&input, build_wav(44_100, 2, &vec![0i16; 8820])).unwrap();

    let normalizer = FfmpegNormalizer::default();
    normalizer.normalize(&input, &output).await.unwrap();

    let meta = std::fs::metadata(&output).unwrap();
    assert!(meta.len() > 44);
}

#[tokio::test]
async fn given_garbage_input_when_normalizing_then_fails_without_partial_output() {
    if !ffmpeg_available() {
        return;
    }

    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.webm");
    let output = dir.path().join("output.wav");
    std::fs::write(&input, b"definitely not audio").unwrap();

    let normalizer = FfmpegNormalizer::default();
    let err = normalizer.normalize(&input, &output).await.unwrap_err();

    assert!(matches!(
        err,
        NormalizeError::Transcode(_) | NormalizeError::Spawn(_)
    ));
    assert!(!output.exists());
}

#[tokio::test]
async fn given_missing_binary_when_normalizing_then_spawn_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.wav");
    let output = dir.path().join("output.wav");
    std::fs::write(&input, b"ignored").unwrap();

    let normalizer = FfmpegNormalizer::new("definitely-not-a-real-transcoder");
    let err = normalizer.normalize(&input, &output).await.unwrap_err();

    assert!(matches!(err, NormalizeError::Spawn(_)));
}

#[test]
fn check_reports_missing_binary() {
    assert!(!check_ffmpeg_binary("definitely-not-a-real-transcoder"));
}
