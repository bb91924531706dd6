//! Tone and chime generation
//!
//! Both generators write signed 16-bit little-endian mono samples at
//! [`SAMPLE_RATE_HZ`] into caller-owned byte buffers and return the position
//! one past the last byte written, so successive calls can be chained into a
//! single buffer. Generation is pure computation with no device access:
//! buffers built once can be cached and replayed without paying the sine
//! evaluation again on the latency-critical play path.

use std::f64::consts::TAU;

use crate::pcm::{self, SAMPLE_RATE_HZ};
use crate::{Result, SoundError};

/// Upper duration bound for the allocating convenience APIs, in milliseconds.
///
/// Long single buffers play back unreliably on some outputs; callers who need
/// more than a second of audio should compose and play shorter buffers.
pub const MAX_BUFFER_MS: u32 = 1_000;

/// Length of a chime's attack phase: 10 ms.
const ATTACK_MS: u32 = 10;

/// Chimes shorter than this are all release, with no attack phase.
const MIN_ATTACK_CHIME_MS: u32 = 40;

/// Fraction of the requested volume a chime's attack starts at.
const ATTACK_START_RATIO: f64 = 0.8;

/// Peak amplitude of a full-volume sample.
const AMPLITUDE: f64 = 32_767.0;

/// Bounds-check a generation request and return its length in samples.
fn checked_region(duration_ms: u32, buf: &[u8], offset: usize) -> Result<usize> {
    let samples = pcm::sample_count(duration_ms);
    let needed = samples * pcm::BYTES_PER_SAMPLE;
    if buf.len() < offset.saturating_add(needed) {
        return Err(SoundError::BufferTooShort {
            needed,
            offset,
            len: buf.len(),
        });
    }
    Ok(samples)
}

/// Sine value for the given absolute sample index.
///
/// The phase is derived from the index alone, so regions generated at
/// different offsets of one buffer share a single continuous timeline.
#[inline]
fn sine_at(sample_index: usize, samples_per_cycle: f64) -> f64 {
    (sample_index as f64 / samples_per_cycle * TAU).sin()
}

/// Generate a constant-amplitude sine tone into an existing buffer.
///
/// Writes [`pcm::buffer_len`]`(duration_ms)` bytes starting at `offset` and
/// returns the position one past the last byte written, ready to be passed as
/// the offset of a follow-up call. `volume` scales the amplitude and is
/// expected in `0.0..=1.0`.
///
/// # Errors
///
/// [`SoundError::BufferTooShort`] if the region starting at `offset` cannot
/// hold the requested duration.
pub fn tone_into(
    freq_hz: u32,
    duration_ms: u32,
    volume: f64,
    buf: &mut [u8],
    offset: usize,
) -> Result<usize> {
    let samples = checked_region(duration_ms, buf, offset)?;

    let samples_per_cycle = SAMPLE_RATE_HZ as f64 / freq_hz as f64;
    let peak = AMPLITUDE * volume;
    let mut pos = offset;
    let mut sample_index = offset / pcm::BYTES_PER_SAMPLE;
    for _ in 0..samples {
        let value = (sine_at(sample_index, samples_per_cycle) * peak).round() as i16;
        pcm::write_sample(buf, pos, value);
        pos += pcm::BYTES_PER_SAMPLE;
        sample_index += 1;
    }
    Ok(pos)
}

/// Generate a struck-note chime into an existing buffer.
///
/// The amplitude envelope has two linear phases: a 10 ms attack from 80% of
/// `volume` up to `volume` (skipped entirely when `duration_ms` is under
/// 40 ms), then a release fading from `volume` to silence over the rest of
/// the duration.
///
/// With `overlay` set, generated samples are added to the buffer's existing
/// contents instead of replacing them, which stacks notes into a chord.
/// Sample addition wraps on overflow rather than clipping, so keep the summed
/// volumes of overlaid notes at or below 1.0.
///
/// Returns the position one past the last byte written. See [`tone_into`] for
/// the cursor-chaining convention.
///
/// # Errors
///
/// [`SoundError::BufferTooShort`] if the region starting at `offset` cannot
/// hold the requested duration.
pub fn chime_into(
    freq_hz: u32,
    duration_ms: u32,
    volume: f64,
    buf: &mut [u8],
    offset: usize,
    overlay: bool,
) -> Result<usize> {
    let samples = checked_region(duration_ms, buf, offset)?;

    let samples_per_cycle = SAMPLE_RATE_HZ as f64 / freq_hz as f64;
    let mut pos = offset;
    let mut sample_index = offset / pcm::BYTES_PER_SAMPLE;

    let mut put = |pos: usize, sample_index: usize, envelope: f64| {
        let mut value =
            (sine_at(sample_index, samples_per_cycle) * AMPLITUDE * envelope).round() as i16;
        if overlay {
            value = value.wrapping_add(pcm::read_sample(buf, pos));
        }
        pcm::write_sample(buf, pos, value);
    };

    let attack = if duration_ms >= MIN_ATTACK_CHIME_MS {
        pcm::sample_count(ATTACK_MS)
    } else {
        0
    };
    let start_volume = ATTACK_START_RATIO * volume;
    let rise = volume - start_volume;
    for i in 0..attack {
        put(pos, sample_index, start_volume + rise * i as f64 / attack as f64);
        pos += pcm::BYTES_PER_SAMPLE;
        sample_index += 1;
    }

    // Release: the countdown reaches 1 rather than 0, so the final sample is
    // quiet but the very first sample of a follow-up region starts clean.
    let release = samples - attack;
    for i in (1..=release).rev() {
        put(pos, sample_index, volume * i as f64 / release as f64);
        pos += pcm::BYTES_PER_SAMPLE;
        sample_index += 1;
    }

    Ok(pos)
}

/// Generate a constant tone into a freshly allocated, exactly sized buffer.
///
/// # Errors
///
/// [`SoundError::DurationTooLong`] if `duration_ms` exceeds
/// [`MAX_BUFFER_MS`].
pub fn tone(freq_hz: u32, duration_ms: u32, volume: f64) -> Result<Vec<u8>> {
    let mut buf = allocate(duration_ms)?;
    tone_into(freq_hz, duration_ms, volume, &mut buf, 0)?;
    Ok(buf)
}

/// Generate a chime into a freshly allocated, exactly sized buffer.
///
/// # Errors
///
/// [`SoundError::DurationTooLong`] if `duration_ms` exceeds
/// [`MAX_BUFFER_MS`].
pub fn chime(freq_hz: u32, duration_ms: u32, volume: f64) -> Result<Vec<u8>> {
    let mut buf = allocate(duration_ms)?;
    chime_into(freq_hz, duration_ms, volume, &mut buf, 0, false)?;
    Ok(buf)
}

/// Allocate a zeroed buffer for `duration_ms`, enforcing [`MAX_BUFFER_MS`].
fn allocate(duration_ms: u32) -> Result<Vec<u8>> {
    if duration_ms > MAX_BUFFER_MS {
        return Err(SoundError::DurationTooLong(duration_ms));
    }
    Ok(vec![0u8; pcm::buffer_len(duration_ms)])
}
