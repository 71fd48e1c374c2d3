//! # geogroove
//!
//! Pipeline tools for the GeoGroove app: a one-shot conversion pipeline
//! that packages the on-device summarizer model, and the podcast pipeline
//! that turns a just-played track into a radio-style spoken intro.
//!
//! ## Podcast quick start
//!
//! ```no_run
//! use geogroove::{config::GeoGrooveConfig, podcast, summary::OpenRouterClient,
//!                 speech::ElevenLabsClient};
//!
//! // Credentials from OPENROUTER_API_KEY / ELEVENLABS_API_KEY.
//! let config = GeoGrooveConfig::from_env().unwrap();
//!
//! let summarizer = OpenRouterClient::new(&config.openrouter_base_url,
//!                                        &config.openrouter_api_key);
//! let tts = ElevenLabsClient::new(&config.elevenlabs_base_url,
//!                                 &config.elevenlabs_api_key);
//!
//! let path = podcast::run("Queen", "Bohemian Rhapsody",
//!                         &summarizer, &tts, &config.output_dir).unwrap();
//! println!("episode at {}", path.display());
//! ```
//!
//! ## Pipelines
//!
//! Podcast (see [`podcast::run`]):
//! 1. **Prompt** — fixed radio-host template with artist and track.
//! 2. **Summary** — one chat-completions call, first choice only.
//! 3. **Speech** — one text-to-speech call, audio streamed back in chunks.
//! 4. **Filename** — sanitised artist/track plus a second-resolution
//!    timestamp.
//! 5. **Write** — chunks appended in arrival order under the output dir.
//!
//! Conversion (see [`convert::convert_summarizer`]): load the pretrained
//! model, wrap it to a scores-only surface, trace one forward pass, convert
//! under a flexible `[1, 1..=512]` int32 input, save the package. The
//! tracing/conversion toolchain itself is an external collaborator behind
//! [`convert::ConversionBackend`].
//!
//! Both pipelines are synchronous straight-line passes: no retries, no
//! loops, no shared state between them.

pub mod audio;
pub mod config;
pub mod convert;
pub mod http;
pub mod podcast;
pub mod prompt;
pub mod sanitize;
pub mod speech;
pub mod summary;

// ─── Re-exports for convenience ─────────────────────────────────────────────

pub use config::GeoGrooveConfig;
pub use podcast::run as run_podcast;
