use std::io::Write;
use std::path::Path;

use crate::error::{VoiceError, VoiceResult};

/// Header facts of a WAV recording
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavInfo {
    pub sample_rate: u32,
    pub channels: u16,
    pub frames: u32,
}

impl WavInfo {
    pub fn duration_ms(&self) -> u64 {
        if self.sample_rate == 0 {
            return 0;
        }
        u64::from(self.frames) * 1000 / u64::from(self.sample_rate)
    }
}

/// A recording staged for submission to a recognition provider
#[derive(Debug, Clone)]
pub struct RecordedAudio {
    pub bytes: Vec<u8>,
    /// `None` when the upload is not a readable WAV file
    pub wav: Option<WavInfo>,
}

impl RecordedAudio {
    /// Stage an uploaded clip through a per-call scratch file.
    ///
    /// The file gets a unique name so concurrent requests never share it, and
    /// it is removed when this call returns. All file work runs on the
    /// blocking pool.
    ///
    /// # Errors
    ///
    /// Returns [`VoiceError::Io`] if the scratch file cannot be written or read.
    pub async fn stage(upload: &[u8]) -> VoiceResult<Self> {
        let upload = upload.to_vec();
        tokio::task::spawn_blocking(move || stage_blocking(&upload))
            .await
            .map_err(|e| VoiceError::AudioProcessing(format!("audio staging task failed: {e}")))?
    }

    /// True when the upload holds no audio at all
    pub fn is_silent(&self) -> bool {
        self.bytes.is_empty() || self.wav.is_some_and(|info| info.frames == 0)
    }
}

fn stage_blocking(upload: &[u8]) -> VoiceResult<RecordedAudio> {
    let mut scratch = tempfile::Builder::new()
        .prefix("medivoice-rec-")
        .suffix(".wav")
        .tempfile()?;
    scratch.write_all(upload)?;
    scratch.flush()?;

    let wav = inspect_wav(scratch.path());
    let bytes = std::fs::read(scratch.path())?;
    scratch.close()?;

    Ok(RecordedAudio { bytes, wav })
}

fn inspect_wav(path: &Path) -> Option<WavInfo> {
    let reader = hound::WavReader::open(path).ok()?;
    let spec = reader.spec();
    Some(WavInfo {
        sample_rate: spec.sample_rate,
        channels: spec.channels,
        frames: reader.duration(),
    })
}
