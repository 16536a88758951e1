//! Character entity - player characters and companions in the party

use thiserror::Error;

/// Errors raised by domain entity operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// Damage amounts must be non-negative; healing is a separate concern
    #[error("invalid damage amount: {amount} (must be non-negative)")]
    InvalidDamage { amount: i32 },
}

/// A participant in the session: the player's character or a companion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    pub name: String,
    /// Ancestry/race label, e.g. "Elf"
    pub ancestry: String,
    /// Class/role label, e.g. "Wizard"
    pub class_name: String,
    pub level: u32,
    /// Current hit points, never negative
    pub hit_points: i32,
}

impl Character {
    pub fn new(
        name: impl Into<String>,
        ancestry: impl Into<String>,
        class_name: impl Into<String>,
        level: u32,
        hit_points: i32,
    ) -> Self {
        Self {
            name: name.into(),
            ancestry: ancestry.into(),
            class_name: class_name.into(),
            level,
            hit_points,
        }
    }

    /// Apply damage, clamped so hit points never drop below zero.
    ///
    /// Negative amounts are rejected: this entity does not model healing,
    /// and a silent sign flip would corrupt the party sheet.
    pub fn apply_damage(&mut self, amount: i32) -> Result<(), DomainError> {
        if amount < 0 {
            return Err(DomainError::InvalidDamage { amount });
        }
        self.hit_points = (self.hit_points - amount).max(0);
        Ok(())
    }

    /// A character at zero hit points stays in the party but cannot act.
    pub fn is_conscious(&self) -> bool {
        self.hit_points > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hero(hit_points: i32) -> Character {
        Character::new("Arden", "Human", "Fighter", 1, hit_points)
    }

    #[test]
    fn test_apply_damage_subtracts() {
        let mut character = hero(20);
        character.apply_damage(7).unwrap();
        assert_eq!(character.hit_points, 13);
    }

    #[test]
    fn test_apply_damage_clamps_at_zero() {
        let mut character = hero(5);
        character.apply_damage(12).unwrap();
        assert_eq!(character.hit_points, 0);
    }

    #[test]
    fn test_apply_zero_damage_is_noop() {
        let mut character = hero(5);
        character.apply_damage(0).unwrap();
        assert_eq!(character.hit_points, 5);
    }

    #[test]
    fn test_negative_damage_is_rejected() {
        let mut character = hero(5);
        let result = character.apply_damage(-3);
        assert_eq!(result, Err(DomainError::InvalidDamage { amount: -3 }));
        assert_eq!(character.hit_points, 5);
    }

    #[test]
    fn test_consciousness_tracks_hit_points() {
        let mut character = hero(1);
        assert!(character.is_conscious());
        character.apply_damage(1).unwrap();
        assert!(!character.is_conscious());
    }
}
