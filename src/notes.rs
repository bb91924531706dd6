//! Musical note frequencies used by the stock notification cues.
//!
//! Frequencies are rounded to whole Hertz, which is well under the pitch
//! difference anyone notices in a 100 ms beep.

/// Musical note C4, 262 Hz.
pub const C4_HZ: u32 = 262;

/// Musical note E4, 330 Hz.
pub const E4_HZ: u32 = 330;

/// Musical note A5, 880 Hz.
pub const A5_HZ: u32 = 880;

/// Musical note B5, 988 Hz.
pub const B5_HZ: u32 = 988;
