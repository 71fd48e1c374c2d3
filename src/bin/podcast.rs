//! Proof-of-concept podcast run: one hard-coded track, one episode file.
//!
//! Usage:
//!   OPENROUTER_API_KEY=... ELEVENLABS_API_KEY=... cargo run --bin podcast
//!
//! Writes `output/geogroove_bio_Queen_Bohemian_Rhapsody_<timestamp>.mp3`.
//! Exit code is non-zero on any failure; nothing is retried.

use geogroove::config::GeoGrooveConfig;
use geogroove::podcast;
use geogroove::speech::ElevenLabsClient;
use geogroove::summary::OpenRouterClient;

const ARTIST: &str = "Queen";
const TRACK: &str = "Bohemian Rhapsody";

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = GeoGrooveConfig::from_env()?;

    let summarizer = OpenRouterClient::new(&config.openrouter_base_url, &config.openrouter_api_key);
    let tts = ElevenLabsClient::new(&config.elevenlabs_base_url, &config.elevenlabs_api_key);

    let path = podcast::run(ARTIST, TRACK, &summarizer, &tts, &config.output_dir)?;
    log::info!("Saved audio to: {}", path.display());
    Ok(())
}
