#[cfg(not(feature = "playback"))]
fn main() {
    eprintln!(
        "The chimes sound check requires the \"playback\" feature. Rebuild with `--features playback` to enable audio output."
    );
}

#[cfg(feature = "playback")]
mod cli {
    use std::env;
    #[cfg(feature = "export-wav")]
    use std::fs;
    #[cfg(feature = "export-wav")]
    use std::path::PathBuf;
    use std::thread;
    use std::time::Duration;

    use anyhow::Context;
    use chimes::effects::{chord, sequence, Note};
    use chimes::generators::{chime, tone};
    use chimes::{notes, pcm, playback};

    /// Pause between cues so they stay distinguishable by ear.
    const CUE_GAP: Duration = Duration::from_millis(60);

    struct Cue {
        name: &'static str,
        describe: &'static str,
        buffer: Vec<u8>,
    }

    impl Cue {
        fn new(name: &'static str, describe: &'static str, buffer: Vec<u8>) -> Self {
            Cue {
                name,
                describe,
                buffer,
            }
        }
    }

    fn build_cues() -> chimes::Result<Vec<Cue>> {
        Ok(vec![
            Cue::new(
                "tone",
                "steady A5, 180 ms",
                tone(notes::A5_HZ, 180, 0.9)?,
            ),
            Cue::new(
                "chime",
                "struck A5, 180 ms",
                chime(notes::A5_HZ, 180, 0.9)?,
            ),
            Cue::new(
                "chime-low",
                "struck A4, 270 ms",
                chime(notes::A5_HZ / 2, 270, 0.9)?,
            ),
            Cue::new(
                "chord",
                "A5 over E4, 600 ms",
                chord(&[
                    Note::new(notes::A5_HZ, 600, 0.5),
                    Note::new(notes::E4_HZ, 600, 0.5),
                ])?,
            ),
            Cue::new(
                "chirp",
                "E4 then C4, falling",
                sequence(&[
                    Note::new(notes::E4_HZ, 120, 0.9),
                    Note::new(notes::C4_HZ, 90, 0.9),
                ])?,
            ),
            Cue::new(
                "thump",
                "low 140/160/240 Hz stack, 60 ms",
                chord(&[
                    Note::new(140, 60, 0.15),
                    Note::new(160, 50, 0.15),
                    Note::new(240, 30, 0.2),
                ])?,
            ),
        ])
    }

    pub fn run() -> anyhow::Result<()> {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .init();

        let mut show_help = false;
        #[cfg(feature = "export-wav")]
        let mut wav_dir: Option<PathBuf> = None;

        let mut args = env::args().skip(1);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--help" | "-h" => {
                    show_help = true;
                }
                #[cfg(feature = "export-wav")]
                "--wav" => {
                    if let Some(dir) = args.next() {
                        wav_dir = Some(PathBuf::from(dir));
                    } else {
                        eprintln!("--wav requires a directory argument");
                        show_help = true;
                    }
                }
                _ => {
                    eprintln!("Unknown flag: {}", arg);
                    show_help = true;
                }
            }
        }

        if show_help {
            eprintln!(
                "Usage:\n  chimes [flags]\n\nPlays the built-in notification cues through the default output device.\n\nFlags:{}\n  -h, --help     Show this help",
                if cfg!(feature = "export-wav") {
                    "\n  --wav <dir>    Also write each cue to <dir> as a WAV file"
                } else {
                    ""
                }
            );
            return Ok(());
        }

        println!("Chimes Sound Check - Notification Cue Playback");
        println!("==============================================\n");

        #[cfg(feature = "export-wav")]
        if let Some(dir) = &wav_dir {
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
        }

        let cues = build_cues().context("failed to generate cues")?;
        println!("Playing {} cues through the default output device\n", cues.len());

        for (index, cue) in cues.iter().enumerate() {
            if index > 0 {
                thread::sleep(CUE_GAP);
            }
            println!(
                "[{}/{}] {:<10} {}",
                index + 1,
                cues.len(),
                cue.name,
                cue.describe
            );
            // Playback is best-effort: a machine without audio still gets to
            // run the generation path, it just stays silent.
            if let Err(e) = playback::play_pcm(&cue.buffer) {
                log::warn!("skipping {}: {}", cue.name, e);
            }

            #[cfg(feature = "export-wav")]
            if let Some(dir) = &wav_dir {
                let path = dir.join(format!("{:02}-{}.wav", index + 1, cue.name));
                chimes::wav::write_wav(&cue.buffer, &path)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                println!("          wrote {}", path.display());
            }
        }

        let total_bytes: usize = cues.iter().map(|c| c.buffer.len()).sum();
        let total_secs =
            total_bytes as f64 / (pcm::BYTES_PER_SAMPLE as f64 * pcm::SAMPLE_RATE_HZ as f64);

        println!("\n=== Sound Check Summary ===");
        println!("Cues played:    {}", cues.len());
        println!(
            "Audio rendered: {:.2} seconds ({} bytes of PCM)",
            total_secs, total_bytes
        );
        println!("\nSound check complete!");

        Ok(())
    }
}

#[cfg(feature = "playback")]
fn main() -> anyhow::Result<()> {
    cli::run()
}
