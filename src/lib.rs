//! Tone and chime synthesis for short notification sounds
//!
//! Generates raw 16-bit mono PCM buffers at 44 100 Hz, as constant tones or
//! struck-note chimes with a short attack and a fading release, and plays
//! them through the system's default audio output. Generation and playback
//! are separate steps, so a sound effect can be built once, cached, and
//! replayed with no allocation or sine evaluation on the latency-critical
//! path.
//!
//! # Features
//! - Exact buffer sizing for the fixed mono s16le / 44 100 Hz format
//! - Constant tones and attack/release chimes
//! - Additive overlay for chords, cursor chaining for sequences
//! - A cached output-device handle for low-latency repeat playback
//! - Optional WAV export of generated buffers
//!
//! # Crate feature flags
//! - `playback` (default): Audio output through the system default device
//!   (enables optional `rodio` dep)
//! - `export-wav` (opt-in): WAV file export (enables optional `hound` dep)
//!
//! # Quick start
//! ## Fire-and-forget notification
//! ```no_run
//! # #[cfg(feature = "playback")]
//! # {
//! use chimes::{notes, playback};
//! playback::play_chime(notes::A5_HZ, 180, 0.9).unwrap();
//! # }
//! ```
//!
//! ## Generate once, replay cheaply
//! ```no_run
//! # #[cfg(feature = "playback")]
//! # {
//! use chimes::{generators, notes, playback};
//! let ding = generators::chime(notes::B5_HZ, 160, 0.4).unwrap();
//! // on every notification:
//! playback::play_pcm(&ding).unwrap();
//! # }
//! ```
//!
//! ## Compose a chord and a two-note chirp
//! ```
//! use chimes::effects::{chord, sequence, Note};
//! use chimes::notes;
//! let alert = chord(&[
//!     Note::new(notes::A5_HZ, 600, 0.5),
//!     Note::new(notes::E4_HZ, 600, 0.5),
//! ])
//! .unwrap();
//! let chirp = sequence(&[
//!     Note::new(notes::E4_HZ, 120, 0.9),
//!     Note::new(notes::C4_HZ, 90, 0.9),
//! ])
//! .unwrap();
//! ```

#![warn(missing_docs)]

// Domain modules (playback and export are feature-gated for modular use)
pub mod effects; // Chords & Sequences
pub mod generators; // Tone & Chime Synthesis
pub mod notes; // Note Frequencies
pub mod pcm; // Sample Format & Buffer Sizing
#[cfg(feature = "playback")]
pub mod playback; // Audio Output
#[cfg(feature = "export-wav")]
pub mod wav; // WAV File Export

/// Error types for generation and playback operations
#[derive(thiserror::Error, Debug)]
pub enum SoundError {
    /// An allocating API was asked for more audio than fits one buffer
    #[error("duration {0} ms exceeds the {max} ms single-buffer limit", max = generators::MAX_BUFFER_MS)]
    DurationTooLong(u32),

    /// The target buffer cannot hold the requested region
    #[error("buffer too short: need {needed} bytes at offset {offset}, have {len}")]
    BufferTooShort {
        /// Bytes the requested duration occupies.
        needed: usize,
        /// Byte offset generation was to start at.
        offset: usize,
        /// Actual buffer length.
        len: usize,
    },

    /// The audio output device could not be opened or reopened
    #[error("audio device unavailable: {0}")]
    DeviceUnavailable(String),

    /// WAV encoding or file output failed
    #[cfg(feature = "export-wav")]
    #[error("WAV export error: {0}")]
    Wav(#[from] hound::Error),
}

/// Result type for generation and playback operations
pub type Result<T> = std::result::Result<T, SoundError>;

// Public API exports
pub use effects::{chord, sequence, Note};
pub use generators::{chime, chime_into, tone, tone_into, MAX_BUFFER_MS};
pub use pcm::{buffer_len, SAMPLE_RATE_HZ};

#[cfg(feature = "playback")]
pub use playback::{play_chime, play_pcm, play_tone};

#[cfg(feature = "export-wav")]
pub use wav::write_wav;
