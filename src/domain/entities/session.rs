//! Session state - the shared mutable context of a running session

use super::Character;

/// Shared state of a narrative session: where the party is, who is in it,
/// and how far the story has progressed.
///
/// Owned by the session driver; the narration engine receives a mutable
/// reference each turn so its side effects are visible to all holders.
#[derive(Debug, Clone)]
pub struct SessionState {
    /// Current place name
    pub location: String,
    /// Party roster in turn-sheet order
    pub party: Vec<Character>,
    /// Scene counter, starts at 1 and never decreases
    pub scene: u32,
}

impl SessionState {
    pub fn new(location: impl Into<String>, party: Vec<Character>) -> Self {
        Self {
            location: location.into(),
            party,
            scene: 1,
        }
    }

    /// Render the canonical textual snapshot of the session.
    ///
    /// The format is stable and consumed verbatim by prompt construction
    /// and by the console display:
    ///
    /// ```text
    /// Scene: 3
    /// Location: Emerald Crypts
    /// Party:
    /// - Lira (Half-elf Rogue lvl. 3) — 22 HP
    /// ```
    ///
    /// An empty party renders the single line `No members` instead.
    pub fn snapshot(&self) -> String {
        let mut out = format!("Scene: {}\nLocation: {}\nParty:", self.scene, self.location);
        if self.party.is_empty() {
            out.push_str("\nNo members");
        } else {
            for member in &self.party {
                out.push_str(&format!(
                    "\n- {} ({} {} lvl. {}) — {} HP",
                    member.name, member.ancestry, member.class_name, member.level, member.hit_points
                ));
            }
        }
        out
    }

    /// Advance the scene counter by exactly one.
    pub fn advance_scene(&mut self) {
        self.scene += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_starts_at_one() {
        let state = SessionState::new("Crypt", Vec::new());
        assert_eq!(state.scene, 1);
    }

    #[test]
    fn test_advance_scene_increments_by_one() {
        let mut state = SessionState::new("Crypt", Vec::new());
        for expected in 2..=10 {
            state.advance_scene();
            assert_eq!(state.scene, expected);
        }
    }

    #[test]
    fn test_snapshot_empty_party() {
        let state = SessionState::new("Crypt", Vec::new());
        assert_eq!(state.snapshot(), "Scene: 1\nLocation: Crypt\nParty:\nNo members");
    }

    #[test]
    fn test_snapshot_lists_members_in_order() {
        let party = vec![
            Character::new("Lira", "Half-elf", "Rogue", 3, 22),
            Character::new("Thamior", "Elf", "Wizard", 3, 16),
        ];
        let state = SessionState::new("Emerald Crypts", party);
        assert_eq!(
            state.snapshot(),
            "Scene: 1\nLocation: Emerald Crypts\nParty:\n\
             - Lira (Half-elf Rogue lvl. 3) — 22 HP\n\
             - Thamior (Elf Wizard lvl. 3) — 16 HP"
        );
    }

    #[test]
    fn test_snapshot_reflects_damage() {
        let party = vec![Character::new("Lira", "Half-elf", "Rogue", 3, 22)];
        let mut state = SessionState::new("Emerald Crypts", party);
        state.party[0].apply_damage(10).unwrap();
        assert!(state.snapshot().contains("— 12 HP"));
    }
}
