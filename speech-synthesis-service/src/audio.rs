use base64::{engine::general_purpose, Engine as _};

/// Synthesized speech ready for transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedAudio {
    /// Standard base64 alphabet with padding, no line breaks
    pub base64: String,
    pub byte_len: usize,
}

impl EncodedAudio {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            base64: general_purpose::STANDARD.encode(bytes),
            byte_len: bytes.len(),
        }
    }

    /// Decode back to the raw audio bytes
    ///
    /// # Errors
    ///
    /// Fails if the payload is not valid base64.
    pub fn decode(&self) -> Result<Vec<u8>, base64::DecodeError> {
        general_purpose::STANDARD.decode(&self.base64)
    }
}

/// Whether `bytes` start like an MP3 stream: an ID3v2 tag or an MPEG audio frame header
pub fn looks_like_mp3(bytes: &[u8]) -> bool {
    match bytes.get(..3) {
        Some(b"ID3") => true,
        Some(&[first, second, _]) => first == 0xFF && second & 0xE0 == 0xE0,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id3_and_frame_sync_are_mp3() {
        assert!(looks_like_mp3(b"ID3\x04\x00\x00\x00\x00\x00\x00"));
        assert!(looks_like_mp3(&[0xFF, 0xFB, 0x90, 0x64]));
        assert!(looks_like_mp3(&[0xFF, 0xF3, 0x44, 0xC4]));
    }

    #[test]
    fn test_other_data_is_not_mp3() {
        assert!(!looks_like_mp3(b"<!DOCTYPE html>"));
        assert!(!looks_like_mp3(b"RIFF\x24\x00\x00\x00WAVE"));
        assert!(!looks_like_mp3(&[0xFF]));
        assert!(!looks_like_mp3(&[]));
    }

    #[test]
    fn test_base64_uses_standard_alphabet_without_wrapping() {
        let bytes: Vec<u8> = (0..=255u8).cycle().take(300).collect();
        let encoded = EncodedAudio::from_bytes(&bytes);
        assert!(!encoded.base64.contains('\n'));
        assert!(encoded.base64.contains('+') || encoded.base64.contains('/'));
        assert_eq!(encoded.byte_len, 300);
        assert_eq!(encoded.decode().unwrap(), bytes);
    }
}
