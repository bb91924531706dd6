//! WAV export
//!
//! Writes generated buffers as standard RIFF/WAV so they can be inspected in
//! an editor or shipped as assets instead of synthesized at runtime. The
//! on-disk format matches the in-memory one: mono, 16-bit, 44 100 Hz.

use std::path::Path;

use crate::pcm::{self, SAMPLE_RATE_HZ};
use crate::Result;

/// Write a PCM buffer to `path` as a mono 16-bit 44 100 Hz WAV file.
///
/// # Errors
///
/// [`crate::SoundError::Wav`] if the file cannot be created or written.
pub fn write_wav<P: AsRef<Path>>(buf: &[u8], path: P) -> Result<()> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE_HZ,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec)?;
    for sample in pcm::decode_samples(buf) {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators;

    #[test]
    fn test_wav_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chime.wav");
        let buf = generators::chime(880, 120, 0.5).unwrap();
        write_wav(&buf, &path).unwrap();

        let mut reader = hound::WavReader::open(&path).unwrap();
        let spec = reader.spec();
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.sample_rate, SAMPLE_RATE_HZ);
        assert_eq!(spec.bits_per_sample, 16);
        assert_eq!(spec.sample_format, hound::SampleFormat::Int);

        let samples: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
        assert_eq!(samples, pcm::decode_samples(&buf));
    }

    #[test]
    fn test_wav_write_to_bad_path_fails() {
        let buf = generators::tone(440, 10, 0.5).unwrap();
        let err = write_wav(&buf, "/nonexistent-dir/beep.wav").unwrap_err();
        assert!(matches!(err, crate::SoundError::Wav(_)));
    }
}
