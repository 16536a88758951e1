//! Prompt building functions for the remote narration path

/// Build the user prompt sent to the remote backend for one turn.
///
/// Combines the fixed dungeon-master preamble, the current state snapshot,
/// and the verbatim player action. The persona/system instruction is carried
/// separately as the system message.
pub fn build_scene_prompt(action: &str, snapshot: &str) -> String {
    let mut prompt = String::new();

    prompt.push_str("You are a seasoned dungeon master. Describe the next scene.\n\n");

    prompt.push_str("CURRENT STATE:\n");
    prompt.push_str(snapshot);
    prompt.push_str("\n\n");

    prompt.push_str("INSTRUCTIONS:\n");
    prompt.push_str("- Respond in 4-6 concise sentences.\n");
    prompt.push_str("- Maintain a consistent fantasy tone.\n");
    prompt.push_str("- Narrate outcomes only, do not alter established facts.\n\n");

    prompt.push_str(&format!("PLAYER ACTION: {}", action));

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Character, SessionState};

    #[test]
    fn test_prompt_embeds_snapshot_and_action() {
        let party = vec![Character::new("Lira", "Half-elf", "Rogue", 3, 22)];
        let state = SessionState::new("Emerald Crypts", party);

        let prompt = build_scene_prompt("search the altar", &state.snapshot());

        assert!(prompt.contains("Scene: 1"));
        assert!(prompt.contains("Location: Emerald Crypts"));
        assert!(prompt.contains("Lira (Half-elf Rogue lvl. 3) — 22 HP"));
        assert!(prompt.contains("PLAYER ACTION: search the altar"));
    }

    #[test]
    fn test_prompt_carries_output_constraints() {
        let prompt = build_scene_prompt("listen", "Scene: 1\nLocation: Crypt\nParty:\nNo members");

        assert!(prompt.contains("4-6 concise sentences"));
        assert!(prompt.contains("fantasy tone"));
        assert!(prompt.contains("do not alter established facts"));
    }

    #[test]
    fn test_action_is_verbatim() {
        let action = "shout 'who goes there?'";
        let prompt = build_scene_prompt(action, "Scene: 1\nLocation: Crypt\nParty:\nNo members");
        assert!(prompt.ends_with(action));
    }
}
