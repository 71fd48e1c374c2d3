//! Speech synthesis through the ElevenLabs text-to-speech API.
//!
//! The API streams the encoded audio back as the raw response body; this
//! module exposes that body as an [`AudioStream`] of byte chunks so the
//! writer never holds the whole episode in memory.

use std::io::Read;

use anyhow::Result;
use serde::Serialize;

use crate::config::{OUTPUT_FORMAT, VOICE_ID, VOICE_MODEL_ID, VOICE_STYLE};
use crate::http::check_response;

/// Bytes read from the response body per chunk.
const CHUNK_SIZE: usize = 8 * 1024;

// ─────────────────────────────────────────────────────────────────────────────
// AudioStream
// ─────────────────────────────────────────────────────────────────────────────

/// A finite, lazily-produced sequence of encoded-audio chunks.
///
/// Not restartable: the chunks come straight off a network body, so the
/// stream must be iterated exactly once. A fresh call to
/// [`AudioGenerator::synthesize`] yields a fresh stream.
pub struct AudioStream {
    inner: Box<dyn Iterator<Item = Result<Vec<u8>>>>,
}

impl AudioStream {
    /// Stream chunks from a reader (the HTTP response body).
    pub fn from_reader(reader: impl Read + 'static) -> Self {
        Self { inner: Box::new(ReaderChunks { reader, done: false }) }
    }

    /// Stream pre-built chunks. Used by tests and fakes.
    pub fn from_chunks(chunks: Vec<Vec<u8>>) -> Self {
        Self { inner: Box::new(chunks.into_iter().map(Ok::<_, anyhow::Error>)) }
    }
}

impl Iterator for AudioStream {
    type Item = Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

struct ReaderChunks<R> {
    reader: R,
    done: bool,
}

impl<R: Read> Iterator for ReaderChunks<R> {
    type Item = Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let mut buf = vec![0u8; CHUNK_SIZE];
        match self.reader.read(&mut buf) {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(n) => {
                buf.truncate(n);
                Some(Ok(buf))
            }
            Err(err) => {
                self.done = true;
                Some(Err(anyhow::Error::new(err).context("Audio stream read failed")))
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// AudioGenerator
// ─────────────────────────────────────────────────────────────────────────────

/// Anything that can turn summary text into an audio stream.
pub trait AudioGenerator {
    fn synthesize(&self, text: &str) -> Result<AudioStream>;
}

#[derive(Serialize)]
struct SpeechRequest<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: VoiceSettings,
}

#[derive(Serialize)]
struct VoiceSettings {
    style: f32,
}

/// Blocking ElevenLabs client with the pipeline's fixed voice, model and
/// encoding (see [`crate::config`]).
pub struct ElevenLabsClient {
    base_url: String,
    api_key: String,
    agent: ureq::Agent,
}

impl ElevenLabsClient {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            agent: ureq::Agent::new(),
        }
    }
}

impl AudioGenerator for ElevenLabsClient {
    fn synthesize(&self, text: &str) -> Result<AudioStream> {
        let url = format!("{}/v1/text-to-speech/{VOICE_ID}/stream", self.base_url);
        log::debug!("POST {url} (model {VOICE_MODEL_ID}, format {OUTPUT_FORMAT})");

        let request = SpeechRequest {
            text,
            model_id: VOICE_MODEL_ID,
            voice_settings: VoiceSettings { style: VOICE_STYLE },
        };

        let response = check_response(
            "ElevenLabs",
            self.agent
                .post(&url)
                .query("output_format", OUTPUT_FORMAT)
                .set("xi-api-key", &self.api_key)
                .send_json(&request),
        )?;

        Ok(AudioStream::from_reader(response.into_reader()))
    }
}
