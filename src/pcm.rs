//! PCM sample format and buffer sizing
//!
//! Every buffer in this crate is raw PCM: signed 16-bit little-endian, mono,
//! at a fixed 44 100 Hz. Buffers carry no header and no per-buffer rate
//! metadata; producers and consumers share the format by construction.

/// Sampling rate of every generated buffer: 44 100 Hz.
///
/// 22 050 Hz would halve buffer sizes but adds audible hiss on most outputs.
pub const SAMPLE_RATE_HZ: u32 = 44_100;

/// Bytes occupied by one signed 16-bit sample.
pub const BYTES_PER_SAMPLE: usize = 2;

/// Number of whole samples covering `duration_ms` milliseconds.
#[inline]
pub fn sample_count(duration_ms: u32) -> usize {
    duration_ms as usize * SAMPLE_RATE_HZ as usize / 1000
}

/// Byte length of a buffer holding `duration_ms` milliseconds of audio.
///
/// Always an even number: [`BYTES_PER_SAMPLE`] bytes for each of
/// [`sample_count`] samples, never a stray half-sample byte.
/// `buffer_len(1000)` is 88 200.
#[inline]
pub fn buffer_len(duration_ms: u32) -> usize {
    BYTES_PER_SAMPLE * sample_count(duration_ms)
}

/// Decode the little-endian sample starting at byte `pos`.
///
/// # Panics
///
/// Panics if `pos + 1` is out of bounds.
#[inline]
pub fn read_sample(buf: &[u8], pos: usize) -> i16 {
    i16::from_le_bytes([buf[pos], buf[pos + 1]])
}

/// Encode `value` little-endian into the two bytes starting at `pos`.
///
/// # Panics
///
/// Panics if `pos + 1` is out of bounds.
#[inline]
pub fn write_sample(buf: &mut [u8], pos: usize, value: i16) {
    buf[pos..pos + 2].copy_from_slice(&value.to_le_bytes());
}

/// Decode a whole byte buffer into samples.
///
/// A trailing odd byte, if any, is ignored.
pub fn decode_samples(buf: &[u8]) -> Vec<i16> {
    buf.chunks_exact(BYTES_PER_SAMPLE)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
        .collect()
}
