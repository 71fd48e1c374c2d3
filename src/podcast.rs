//! The podcast pipeline: prompt → summary → speech → file.
//!
//! A single straight-line pass with no branching and no retry. The two
//! remote collaborators come in behind traits so the pipeline itself can be
//! exercised without network access.

use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Local;

use crate::audio::save_audio_stream;
use crate::prompt::build_prompt;
use crate::sanitize::sanitize_component;
use crate::speech::AudioGenerator;
use crate::summary::SummaryGenerator;

/// Episode filename for one run.
///
/// `timestamp` is second-resolution wall-clock time formatted
/// `yyyymmdd-HHMMSS`; two runs in the same second collide by design.
pub fn episode_filename(artist: &str, track: &str, timestamp: &str) -> String {
    format!(
        "geogroove_bio_{}_{}_{}.mp3",
        sanitize_component(artist),
        sanitize_component(track),
        timestamp
    )
}

/// Run the whole pipeline for one just-played track.
///
/// Generates the summary, synthesizes it, and writes the audio to a
/// timestamped file under `output_dir`. Returns the path of the written
/// file. Every failure aborts the run; nothing is retried.
pub fn run(
    artist: &str,
    track: &str,
    summarizer: &dyn SummaryGenerator,
    tts: &dyn AudioGenerator,
    output_dir: &Path,
) -> Result<PathBuf> {
    let prompt = build_prompt(artist, track);

    log::info!("Generating summary for '{artist}' — '{track}'");
    let summary = summarizer.summarize(&prompt)?;
    log::info!("Generated summary: {summary}");

    let stream = tts.synthesize(&summary)?;

    let timestamp = Local::now().format("%Y%m%d-%H%M%S").to_string();
    let path = output_dir.join(episode_filename(artist, track, &timestamp));
    save_audio_stream(stream, &path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::speech::AudioStream;

    struct FakeSummarizer(&'static str);

    impl SummaryGenerator for FakeSummarizer {
        fn summarize(&self, _prompt: &str) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    struct FakeSpeech(Vec<Vec<u8>>);

    impl AudioGenerator for FakeSpeech {
        fn synthesize(&self, _text: &str) -> Result<AudioStream> {
            Ok(AudioStream::from_chunks(self.0.clone()))
        }
    }

    #[test]
    fn test_episode_filename_sanitises_both_parts() {
        let name = episode_filename("Queen", "Bohemian Rhapsody!", "20260825-120000");
        assert_eq!(name, "geogroove_bio_Queen_Bohemian_Rhapsody_20260825-120000.mp3");
    }

    #[test]
    fn test_end_to_end_with_fakes() {
        let dir = tempfile::tempdir().expect("tempdir");
        let output_dir = dir.path().join("output");

        let summarizer = FakeSummarizer("Hello world");
        let tts = FakeSpeech(vec![vec![0x00, 0x01]]);

        let path = run("Queen", "Bohemian Rhapsody", &summarizer, &tts, &output_dir).unwrap();

        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("geogroove_bio_Queen_Bohemian_Rhapsody_"), "{name}");
        assert!(name.ends_with(".mp3"));
        assert_eq!(std::fs::read(&path).unwrap(), vec![0x00, 0x01]);

        // Exactly one episode file was produced.
        assert_eq!(std::fs::read_dir(&output_dir).unwrap().count(), 1);
    }

    #[test]
    fn test_summarizer_failure_writes_nothing() {
        struct FailingSummarizer;
        impl SummaryGenerator for FailingSummarizer {
            fn summarize(&self, _prompt: &str) -> Result<String> {
                anyhow::bail!("service unavailable")
            }
        }

        let dir = tempfile::tempdir().expect("tempdir");
        let output_dir = dir.path().join("output");

        let tts = FakeSpeech(vec![vec![1]]);
        let err = run("Queen", "Bohemian Rhapsody", &FailingSummarizer, &tts, &output_dir)
            .unwrap_err();

        assert!(format!("{err}").contains("service unavailable"));
        assert!(!output_dir.exists());
    }
}
