//! Composed notification cues
//!
//! Chords overlay several chimes at the start of one buffer; sequences chain
//! chimes back-to-back by threading the cursor each generator returns. Both
//! allocate a buffer sized exactly for the composition, so the result can be
//! cached and replayed without regenerating.

use crate::generators::{chime_into, MAX_BUFFER_MS};
use crate::pcm;
use crate::{Result, SoundError};

/// One chime note inside a composed effect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Note {
    /// Pitch in Hertz.
    pub freq_hz: u32,
    /// Length in milliseconds.
    pub duration_ms: u32,
    /// Volume in `0.0..=1.0`.
    pub volume: f64,
}

impl Note {
    /// A chime note with the given pitch, length, and volume.
    pub fn new(freq_hz: u32, duration_ms: u32, volume: f64) -> Self {
        Note {
            freq_hz,
            duration_ms,
            volume,
        }
    }
}

/// Overlay every note at the start of a single buffer, forming a chord.
///
/// The buffer is sized for the longest note, so a short bright strike can sit
/// on top of a longer low fade. Overlaid samples add without clipping; keep
/// the summed volumes at or below 1.0 to avoid wraparound.
///
/// An empty slice yields an empty buffer.
///
/// # Errors
///
/// [`SoundError::DurationTooLong`] if any note exceeds
/// [`MAX_BUFFER_MS`].
pub fn chord(notes: &[Note]) -> Result<Vec<u8>> {
    let longest = notes.iter().map(|n| n.duration_ms).max().unwrap_or(0);
    if longest > MAX_BUFFER_MS {
        return Err(SoundError::DurationTooLong(longest));
    }
    let mut buf = vec![0u8; pcm::buffer_len(longest)];
    for note in notes {
        chime_into(note.freq_hz, note.duration_ms, note.volume, &mut buf, 0, true)?;
    }
    Ok(buf)
}

/// Generate the notes back-to-back into a single buffer.
///
/// Each note starts where the previous one ended, on the buffer's shared
/// sample timeline. An empty slice yields an empty buffer.
///
/// # Errors
///
/// [`SoundError::DurationTooLong`] if the notes sum to more than
/// [`MAX_BUFFER_MS`].
pub fn sequence(notes: &[Note]) -> Result<Vec<u8>> {
    let total_ms: u32 = notes.iter().map(|n| n.duration_ms).sum();
    if total_ms > MAX_BUFFER_MS {
        return Err(SoundError::DurationTooLong(total_ms));
    }
    let len = notes.iter().map(|n| pcm::buffer_len(n.duration_ms)).sum();
    let mut buf = vec![0u8; len];
    let mut cursor = 0;
    for note in notes {
        cursor = chime_into(note.freq_hz, note.duration_ms, note.volume, &mut buf, cursor, false)?;
    }
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pcm::decode_samples;

    #[test]
    fn test_chord_matches_manual_overlay() {
        let chorded = chord(&[Note::new(880, 600, 0.5), Note::new(330, 600, 0.5)]).unwrap();

        let mut manual = vec![0u8; pcm::buffer_len(600)];
        chime_into(880, 600, 0.5, &mut manual, 0, false).unwrap();
        chime_into(330, 600, 0.5, &mut manual, 0, true).unwrap();

        assert_eq!(chorded, manual);
    }

    #[test]
    fn test_chord_is_sized_for_longest_note() {
        let buf = chord(&[
            Note::new(140, 60, 0.15),
            Note::new(160, 50, 0.15),
            Note::new(240, 30, 0.2),
        ])
        .unwrap();
        assert_eq!(buf.len(), pcm::buffer_len(60));

        // Past the shorter strikes only the 60 ms note is left.
        let solo = {
            let mut b = vec![0u8; pcm::buffer_len(60)];
            chime_into(140, 60, 0.15, &mut b, 0, false).unwrap();
            b
        };
        let from = pcm::buffer_len(50);
        assert_eq!(buf[from..], solo[from..]);
    }

    #[test]
    fn test_sequence_concatenates_on_one_timeline() {
        let seq = sequence(&[Note::new(330, 120, 0.9), Note::new(262, 90, 0.9)]).unwrap();
        assert_eq!(seq.len(), pcm::buffer_len(120) + pcm::buffer_len(90));

        let mut manual = vec![0u8; seq.len()];
        let mid = chime_into(330, 120, 0.9, &mut manual, 0, false).unwrap();
        assert_eq!(mid, pcm::buffer_len(120));
        chime_into(262, 90, 0.9, &mut manual, mid, false).unwrap();

        assert_eq!(seq, manual);
    }

    #[test]
    fn test_empty_compositions_are_empty_buffers() {
        assert!(chord(&[]).unwrap().is_empty());
        assert!(sequence(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_chord_rejects_overlong_note() {
        let err = chord(&[Note::new(880, 1001, 0.5)]).unwrap_err();
        assert!(matches!(err, SoundError::DurationTooLong(1001)));
    }

    #[test]
    fn test_sequence_rejects_overlong_total() {
        // Each note fits on its own; together they pass the cap.
        let err = sequence(&[Note::new(880, 600, 0.5), Note::new(440, 600, 0.5)]).unwrap_err();
        assert!(matches!(err, SoundError::DurationTooLong(1200)));
        assert!(sequence(&[Note::new(880, 500, 0.5), Note::new(440, 500, 0.5)]).is_ok());
    }

    #[test]
    fn test_chord_notes_fade_independently() {
        let buf = chord(&[Note::new(880, 100, 0.3), Note::new(440, 40, 0.3)]).unwrap();
        let samples = decode_samples(&buf);
        // The tail beyond the short note still carries the long one.
        let tail = &samples[pcm::sample_count(40)..pcm::sample_count(50)];
        assert!(tail.iter().any(|&s| s != 0));
    }
}
