//! Interactive CLI - character creation, API key prompt, and the read loop
//!
//! Thin glue around the narration engine: collects one action per turn,
//! prints the narration and the refreshed snapshot, and repeats until the
//! player quits. Empty input is rejected here, before the engine is called.

use std::env;
use std::io::{self, Write};

use crate::application::services::NarrationEngine;
use crate::domain::entities::{Character, SessionState};

const ANCESTRIES: [&str; 5] = ["Human", "Elf", "Dwarf", "Halfling", "Tiefling"];
const CLASSES: [&str; 5] = ["Fighter", "Rogue", "Wizard", "Cleric", "Ranger"];

/// Resolve the API key: environment first, then an optional interactive
/// prompt. `None` selects the local fallback narrator.
pub fn prompt_api_key() -> io::Result<Option<String>> {
    if let Ok(key) = env::var("OPENAI_API_KEY") {
        if !key.trim().is_empty() {
            return Ok(Some(key));
        }
    }

    let choice = read_line("Do you have an OPENAI_API_KEY to use? [y/N]: ")?;
    if !matches!(choice.to_lowercase().as_str(), "y" | "yes") {
        return Ok(None);
    }

    let typed = read_line("Enter your OPENAI_API_KEY now: ")?;
    Ok(if typed.is_empty() { None } else { Some(typed) })
}

/// Guided creation of the player's character: free-text name with a
/// default, numbered ancestry and class menus.
pub fn create_player_character() -> io::Result<Character> {
    println!("\n--- Player character creation ---");

    let mut name = read_line("Character name: ")?;
    if name.is_empty() {
        name = "Nameless Hero".to_string();
    }

    let ancestry = choose_from_list(&ANCESTRIES, "ancestry")?;
    let class_name = choose_from_list(&CLASSES, "class")?;

    Ok(Character::new(name, ancestry, class_name, 1, 20))
}

/// Drive the session: one narration request in flight at a time, until the
/// player types `quit` or `exit`.
pub async fn run(state: &mut SessionState, engine: &mut NarrationEngine) -> anyhow::Result<()> {
    println!("Welcome to the table! Type 'quit' to leave.\n");

    loop {
        let action = read_line("What does the player do? ")?;
        if matches!(action.to_lowercase().as_str(), "quit" | "exit") {
            println!("Session over. See you soon!");
            return Ok(());
        }
        if action.is_empty() {
            println!("No action entered. Try again.\n");
            continue;
        }

        match engine.narrate(&action, state).await {
            Ok(narration) => {
                println!("\n--- Dungeon Master ---");
                println!("{narration}");
                println!("\nState summary:");
                println!("{}", state.snapshot());
                println!();
            }
            Err(e) => {
                // Backend failures are not retried here; the player decides
                // whether to try another action or quit.
                tracing::error!("narration failed: {e}");
                println!("\nThe narrator falls silent ({e}). Try again or type 'quit'.\n");
            }
        }
    }
}

fn read_line(prompt: &str) -> io::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Numbered menu; any invalid choice falls back to the first option.
fn choose_from_list(options: &[&str], label: &str) -> io::Result<String> {
    println!("Choose the {label}:");
    for (idx, option) in options.iter().enumerate() {
        println!("  {}) {option}", idx + 1);
    }

    let choice = read_line("Enter a number or leave blank for the default: ")?;
    if let Ok(n) = choice.parse::<usize>() {
        if (1..=options.len()).contains(&n) {
            return Ok(options[n - 1].to_string());
        }
    }
    println!("No valid choice, defaulting to {}.", options[0]);
    Ok(options[0].to_string())
}
