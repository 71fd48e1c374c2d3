//! Audio stream writer.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::speech::AudioStream;

/// Drain `stream` into the file at `path` and return the final path.
///
/// The containing directory is created if absent (pre-existence is fine).
/// Chunks are written in arrival order; empty chunks are skipped. An
/// existing file at `path` is overwritten without confirmation, and the
/// handle is closed on every exit path. There is no transactional
/// guarantee: a failure mid-write leaves a partial file behind.
pub fn save_audio_stream(stream: AudioStream, path: &Path) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Cannot create directory: {}", parent.display()))?;
        }
    }

    let mut file =
        File::create(path).with_context(|| format!("Cannot create file: {}", path.display()))?;

    let mut bytes_written = 0usize;
    for chunk in stream {
        let chunk = chunk?;
        if chunk.is_empty() {
            continue;
        }
        file.write_all(&chunk)
            .with_context(|| format!("Write failed: {}", path.display()))?;
        bytes_written += chunk.len();
    }

    log::info!("Saved {} bytes to {}", bytes_written, path.display());
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concatenates_chunks_and_skips_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("clip.mp3");

        let stream = AudioStream::from_chunks(vec![
            b"abc".to_vec(),
            Vec::new(),
            b"def".to_vec(),
        ]);
        let out = save_audio_stream(stream, &path).unwrap();

        assert_eq!(out, path);
        assert_eq!(fs::read(&path).unwrap(), b"abcdef");
    }

    #[test]
    fn test_creates_missing_directories() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("output").join("sub").join("x.mp3");

        let stream = AudioStream::from_chunks(vec![b"x".to_vec()]);
        save_audio_stream(stream, &path).unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"x");
    }

    #[test]
    fn test_tolerates_existing_directory_and_overwrites() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("clip.mp3");
        fs::write(&path, b"old contents").unwrap();

        let stream = AudioStream::from_chunks(vec![b"new".to_vec()]);
        save_audio_stream(stream, &path).unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"new");
    }

    #[test]
    fn test_bare_filename_writes_to_cwd_relative_path() {
        // A path with no parent component must not trip directory creation.
        let dir = tempfile::tempdir().expect("tempdir");
        let prev = std::env::current_dir().unwrap();
        std::env::set_current_dir(dir.path()).unwrap();

        let stream = AudioStream::from_chunks(vec![b"hi".to_vec()]);
        let result = save_audio_stream(stream, Path::new("bare.mp3"));

        std::env::set_current_dir(prev).unwrap();
        let out = result.unwrap();
        assert_eq!(fs::read(dir.path().join(out)).unwrap(), b"hi");
    }
}
