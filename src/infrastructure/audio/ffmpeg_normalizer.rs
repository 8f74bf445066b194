use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{AudioNormalizer, NormalizeError};

const TARGET_SAMPLE_RATE: u32 = 16_000;
const TRANSCODE_TIMEOUT: Duration = Duration::from_secs(30);

pub const DEFAULT_FFMPEG_BINARY: &str = "ffmpeg";

/// Normalizes uploads by shelling out to ffmpeg: any container or codec the
/// transcoder understands becomes mono 16 kHz 16-bit linear PCM.
pub struct FfmpegNormalizer {
    binary: String,
}

impl FfmpegNormalizer {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

impl Default for FfmpegNormalizer {
    fn default() -> Self {
        Self::new(DEFAULT_FFMPEG_BINARY)
    }
}

/// Startup probe so a missing transcoder is surfaced once in the logs rather
/// than per-request.
pub fn check_ffmpeg_binary(binary: &str) -> bool {
    std::process::Command::new(binary)
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}

#[async_trait]
impl AudioNormalizer for FfmpegNormalizer {
    async fn normalize(&self, input: &Path, output: &Path) -> Result<(), NormalizeError> {
        let mut command = Command::new(&self.binary);
        command
            .arg("-y")
            .arg("-i")
            .arg(input)
            .args(["-ac", "1"])
            .args(["-ar", &TARGET_SAMPLE_RATE.to_string()])
            .args(["-acodec", "pcm_s16le"])
            .arg(output)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped());

        tracing::debug!(
            input = %input.display(),
            output = %output.display(),
            "Transcoding upload to canonical PCM"
        );

        let result = match tokio::time::timeout(TRANSCODE_TIMEOUT, command.output()).await {
            Ok(result) => result,
            Err(_) => {
                remove_partial_output(output).await;
                return Err(NormalizeError::TimedOut(TRANSCODE_TIMEOUT));
            }
        };

        let process_output = result.map_err(|e| NormalizeError::Spawn(e.to_string()))?;

        if !process_output.status.success() {
            remove_partial_output(output).await;
            let stderr = String::from_utf8_lossy(&process_output.stderr);
            return Err(NormalizeError::Transcode(format!(
                "{}: {}",
                process_output.status,
                last_stderr_line(&stderr)
            )));
        }

        Ok(())
    }
}

async fn remove_partial_output(output: &Path) {
    let _ = tokio::fs::remove_file(output).await;
}

fn last_stderr_line(stderr: &str) -> &str {
    stderr
        .lines()
        .rev()
        .find(|line| !line.trim().is_empty())
        .unwrap_or("no transcoder output")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_stderr_line_picks_final_diagnostic() {
        let stderr = "ffmpeg version n7.0\n\nfile.webm: Invalid data found\n\n";
        assert_eq!(last_stderr_line(stderr), "file.webm: Invalid data found");
    }

    #[test]
    fn last_stderr_line_handles_empty_output() {
        assert_eq!(last_stderr_line(""), "no transcoder output");
    }
}
