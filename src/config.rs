//! Runtime configuration for the podcast pipeline.
//!
//! Credentials are injected through the environment — never embedded in
//! source. Endpoints and the output directory have overridable defaults;
//! model, voice and encoding identifiers are fixed for this pipeline and
//! live here as constants.

use std::path::PathBuf;

use anyhow::{Context, Result};

/// Chat model routed through OpenRouter.
pub const CHAT_MODEL_ID: &str = "openai/gpt-5-nano";

/// ElevenLabs voice used for every episode.
pub const VOICE_ID: &str = "9x3LCv1U6rJuU05dIEO3";

/// ElevenLabs synthesis model.
pub const VOICE_MODEL_ID: &str = "eleven_multilingual_v2";

/// Requested audio encoding: MP3, 44.1 kHz, 128 kbps.
pub const OUTPUT_FORMAT: &str = "mp3_44100_128";

/// Style intensity passed to the voice settings.
pub const VOICE_STYLE: f32 = 0.5;

const DEFAULT_OPENROUTER_BASE: &str = "https://openrouter.ai/api/v1";
const DEFAULT_ELEVENLABS_BASE: &str = "https://api.elevenlabs.io";
const DEFAULT_OUTPUT_DIR: &str = "output";

/// Everything the podcast pipeline reads from the environment.
#[derive(Debug, Clone)]
pub struct GeoGrooveConfig {
    /// Bearer token for the OpenRouter chat-completions API.
    pub openrouter_api_key: String,
    /// `xi-api-key` for the ElevenLabs text-to-speech API.
    pub elevenlabs_api_key: String,
    /// Chat-completions base URL (override for tests/proxies).
    pub openrouter_base_url: String,
    /// Text-to-speech base URL (override for tests/proxies).
    pub elevenlabs_base_url: String,
    /// Directory episode files are written to.
    pub output_dir: PathBuf,
}

impl GeoGrooveConfig {
    /// Read configuration from the environment.
    ///
    /// `OPENROUTER_API_KEY` and `ELEVENLABS_API_KEY` are required; the run
    /// aborts with the variable name if either is missing. Optional
    /// overrides: `OPENROUTER_BASE_URL`, `ELEVENLABS_BASE_URL`,
    /// `GEOGROOVE_OUTPUT_DIR`.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            openrouter_api_key: require_env("OPENROUTER_API_KEY")?,
            elevenlabs_api_key: require_env("ELEVENLABS_API_KEY")?,
            openrouter_base_url: env_or("OPENROUTER_BASE_URL", DEFAULT_OPENROUTER_BASE),
            elevenlabs_base_url: env_or("ELEVENLABS_BASE_URL", DEFAULT_ELEVENLABS_BASE),
            output_dir: PathBuf::from(env_or("GEOGROOVE_OUTPUT_DIR", DEFAULT_OUTPUT_DIR)),
        })
    }
}

fn require_env(name: &str) -> Result<String> {
    std::env::var(name).with_context(|| format!("Missing required environment variable {name}"))
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}
