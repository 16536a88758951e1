//! Tabletale - Interactive narrative session engine for turn-based RPGs
//!
//! The binary wires the pieces together:
//! - Assembles the party and the shared session state
//! - Selects the narration strategy (remote backend if an API key is
//!   available, local fallback otherwise)
//! - Drives the interactive read loop

mod application;
mod domain;
mod infrastructure;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::application::services::NarrationEngine;
use crate::domain::entities::{Character, SessionState};
use crate::infrastructure::cli;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::openai::OpenAiClient;

const PERSONA: &str = "You are a dungeon master who follows the provided game state \
faithfully. Narrate in a classic fantasy tone, stay consistent, and never cheat the rules.";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tabletale=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Tabletale");

    let config = AppConfig::from_env()?;
    tracing::info!("  Backend: {}", config.openai_base_url);
    tracing::info!("  Model: {}", config.openai_model);

    // Assemble the party: the created player character plus demo companions.
    let player_character = cli::create_player_character()?;
    let party = vec![
        player_character,
        Character::new("Lira", "Half-elf", "Rogue", 3, 22),
        Character::new("Thamior", "Elf", "Wizard", 3, 16),
    ];
    let mut state = SessionState::new("Emerald Crypts", party);

    // Strategy is fixed here for the whole session.
    let backend = cli::prompt_api_key()?
        .map(|key| OpenAiClient::new(&config.openai_base_url, key, &config.openai_model));
    if backend.is_some() {
        tracing::info!("Remote narration backend configured");
    } else {
        tracing::info!("No API key available, using local fallback narrator");
    }
    let mut engine = NarrationEngine::new(backend, PERSONA);

    cli::run(&mut state, &mut engine).await
}
