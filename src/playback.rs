//! Audio output
//!
//! Playback keeps one process-wide connection to the default output device so
//! repeated notification sounds skip device setup latency. The output stream
//! is pinned to a resident worker thread; [`play_pcm`] hands decoded samples
//! to the worker and blocks on its completion reply, which keeps the
//! write-then-drain contract of a direct device write.
//!
//! Plays are serialized in submission order. A stale device handle (output
//! unplugged, backend restarted) is detected on the next play and reopened
//! once before the play is reported as failed.

use std::sync::mpsc;
use std::thread;

use parking_lot::Mutex;
use rodio::buffer::SamplesBuffer;
use rodio::{OutputStream, OutputStreamHandle, Sink};

use crate::generators;
use crate::pcm::{self, SAMPLE_RATE_HZ};
use crate::{Result, SoundError};

/// One queued play: pre-decoded samples plus the caller's reply channel.
struct Job {
    samples: Vec<i16>,
    done: mpsc::Sender<Result<()>>,
}

/// Submission handle to the resident worker thread.
struct Worker {
    jobs: mpsc::Sender<Job>,
}

/// Process-wide playback worker, spawned on first play.
static WORKER: Mutex<Option<Worker>> = Mutex::new(None);

impl Worker {
    /// Spawn the thread that owns the cached output stream.
    fn spawn() -> Result<Worker> {
        let (jobs, queue) = mpsc::channel::<Job>();
        thread::Builder::new()
            .name("chimes-playback".into())
            .spawn(move || worker_loop(queue))
            .map_err(|e| {
                SoundError::DeviceUnavailable(format!("cannot spawn playback thread: {e}"))
            })?;
        Ok(Worker { jobs })
    }
}

/// Cached connection to the default output device.
struct Output {
    // Dropping the stream closes the device, so it is held alongside the
    // handle even though only the handle is used directly.
    _stream: OutputStream,
    handle: OutputStreamHandle,
}

/// Worker loop: owns the cached output for the life of the process.
fn worker_loop(queue: mpsc::Receiver<Job>) {
    let mut output: Option<Output> = None;
    while let Ok(job) = queue.recv() {
        let outcome = play_samples(&mut output, job.samples);
        // The submitting thread may have given up waiting; that is its call.
        let _ = job.done.send(outcome);
    }
    log::debug!("playback worker stopping: no more submitters");
}

/// Validate the cached output or open a fresh one, and hand back a sink.
fn open_sink(output: &mut Option<Output>) -> Result<Sink> {
    if let Some(out) = output.as_ref() {
        match Sink::try_new(&out.handle) {
            Ok(sink) => return Ok(sink),
            Err(e) => {
                log::warn!("cached audio output went stale, reopening: {e}");
                *output = None;
            }
        }
    }
    let (stream, handle) =
        OutputStream::try_default().map_err(|e| SoundError::DeviceUnavailable(e.to_string()))?;
    let sink =
        Sink::try_new(&handle).map_err(|e| SoundError::DeviceUnavailable(e.to_string()))?;
    log::debug!("opened default audio output");
    *output = Some(Output {
        _stream: stream,
        handle,
    });
    Ok(sink)
}

/// Play one decoded buffer to completion on the worker thread.
fn play_samples(output: &mut Option<Output>, samples: Vec<i16>) -> Result<()> {
    let sink = open_sink(output)?;
    sink.append(SamplesBuffer::new(1, SAMPLE_RATE_HZ, samples));
    sink.sleep_until_end();
    Ok(())
}

/// Queue a job on the worker, spawning or respawning it as needed.
fn submit(job: Job) -> Result<()> {
    let mut slot = WORKER.lock();
    let worker = match slot.take() {
        Some(worker) => worker,
        None => Worker::spawn()?,
    };
    // A send only fails if the worker thread died (e.g. a backend panic);
    // respawn it once and requeue.
    let worker = match worker.jobs.send(job) {
        Ok(()) => worker,
        Err(mpsc::SendError(job)) => {
            log::error!("playback worker died, respawning");
            let fresh = Worker::spawn()?;
            fresh.jobs.send(job).map_err(|_| {
                SoundError::DeviceUnavailable("playback worker died right after respawn".into())
            })?;
            fresh
        }
    };
    *slot = Some(worker);
    Ok(())
}

/// Play a PCM buffer, blocking until the device has consumed all of it.
///
/// `buf` is signed 16-bit little-endian mono at [`SAMPLE_RATE_HZ`], exactly
/// as the generators produce it. Buffers can be generated once, cached, and
/// passed here on every notification; each play revalidates the cached device
/// handle and reopens it if it went stale.
///
/// Concurrent callers are serialized in submission order, so overlapping
/// notifications queue up rather than mix.
///
/// # Errors
///
/// [`SoundError::DeviceUnavailable`] if no output device can be opened. The
/// failure is not retried internally; notification callers usually log it
/// and stay silent.
pub fn play_pcm(buf: &[u8]) -> Result<()> {
    let samples = pcm::decode_samples(buf);
    let (done, finished) = mpsc::channel();
    submit(Job { samples, done })?;
    match finished.recv() {
        Ok(outcome) => outcome,
        Err(_) => Err(SoundError::DeviceUnavailable(
            "playback worker exited mid-play".into(),
        )),
    }
}

/// Generate a constant tone and play it to completion.
///
/// # Errors
///
/// [`SoundError::DurationTooLong`] for durations over
/// [`generators::MAX_BUFFER_MS`], or [`SoundError::DeviceUnavailable`] if the
/// output cannot be opened.
pub fn play_tone(freq_hz: u32, duration_ms: u32, volume: f64) -> Result<()> {
    play_pcm(&generators::tone(freq_hz, duration_ms, volume)?)
}

/// Generate a chime and play it to completion.
///
/// # Errors
///
/// [`SoundError::DurationTooLong`] for durations over
/// [`generators::MAX_BUFFER_MS`], or [`SoundError::DeviceUnavailable`] if the
/// output cannot be opened.
pub fn play_chime(freq_hz: u32, duration_ms: u32, volume: f64) -> Result<()> {
    play_pcm(&generators::chime(freq_hz, duration_ms, volume)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Playback tests need a real output device; skip gracefully without one
    /// (CI runners and containers usually have no audio backend).
    fn device_available() -> bool {
        match OutputStream::try_default() {
            Ok(_) => true,
            Err(e) => {
                eprintln!("skipping playback test, no audio output: {e}");
                false
            }
        }
    }

    #[test]
    fn test_play_pcm_accepts_empty_buffer() {
        if !device_available() {
            return;
        }
        play_pcm(&[]).unwrap();
    }

    #[test]
    fn test_repeat_plays_reuse_cached_output() {
        if !device_available() {
            return;
        }
        let beep = generators::tone(880, 25, 0.1).unwrap();
        play_pcm(&beep).unwrap();
        play_pcm(&beep).unwrap();
    }

    #[test]
    fn test_play_tone_rejects_overlong_duration() {
        // Validation runs before any device access, so this needs no output.
        let err = play_tone(880, 1001, 0.5).unwrap_err();
        assert!(matches!(err, SoundError::DurationTooLong(1001)));
    }
}
