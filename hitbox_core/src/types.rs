//! Core types shared by attackers and defenders

use serde::{Deserialize, Serialize};

/// Team tag used to prevent friendly fire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    Party,
    Enemy,
    #[default]
    None,
}

impl Alignment {
    /// Get all alignments
    pub fn all() -> &'static [Alignment] {
        &[Alignment::Party, Alignment::Enemy, Alignment::None]
    }

    /// Whether an attacker with this alignment may hit `other`.
    ///
    /// Equal tags never hit each other, `None` included.
    pub fn is_hostile_to(self, other: Alignment) -> bool {
        self != other
    }
}

/// How a single damage attempt resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interaction {
    /// No damage was computed
    #[default]
    PassThrough,
    Land,
    Block,
    Parry,
    Absorb,
}

impl Interaction {
    /// Get all interactions
    pub fn all() -> &'static [Interaction] {
        &[
            Interaction::PassThrough,
            Interaction::Land,
            Interaction::Block,
            Interaction::Parry,
            Interaction::Absorb,
        ]
    }
}

/// Override flags carried by a damage attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DamageOptions {
    /// Hit through invincibility windows and overrides
    #[serde(default)]
    pub ignore_invincibility: bool,
    /// Hit through parry windows
    #[serde(default)]
    pub ignore_parry: bool,
}

impl DamageOptions {
    /// Options with no overrides
    pub fn new() -> Self {
        Self::default()
    }

    /// Options that ignore both invincibility and parrying
    pub fn unstoppable() -> Self {
        DamageOptions {
            ignore_invincibility: true,
            ignore_parry: true,
        }
    }

    /// Set whether invincibility is ignored
    pub fn with_ignore_invincibility(mut self, ignore: bool) -> Self {
        self.ignore_invincibility = ignore;
        self
    }

    /// Set whether parrying is ignored
    pub fn with_ignore_parry(mut self, ignore: bool) -> Self {
        self.ignore_parry = ignore;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_alignment_is_not_hostile() {
        for alignment in Alignment::all() {
            assert!(!alignment.is_hostile_to(*alignment));
        }
        assert!(Alignment::Party.is_hostile_to(Alignment::Enemy));
        assert!(Alignment::None.is_hostile_to(Alignment::Party));
    }

    #[test]
    fn test_interaction_serializes_snake_case() {
        let json = serde_json::to_string(&Interaction::PassThrough).unwrap();
        assert_eq!(json, "\"pass_through\"");

        let parsed: Alignment = serde_json::from_str("\"enemy\"").unwrap();
        assert_eq!(parsed, Alignment::Enemy);
    }

    #[test]
    fn test_damage_options_builders() {
        let options = DamageOptions::new().with_ignore_parry(true);
        assert!(options.ignore_parry);
        assert!(!options.ignore_invincibility);
        assert_eq!(
            DamageOptions::unstoppable(),
            DamageOptions::new()
                .with_ignore_invincibility(true)
                .with_ignore_parry(true)
        );
    }
}
