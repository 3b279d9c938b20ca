//! Roster configuration - Named combatants for a host to spawn

use super::{ConfigError, HitboxConfig};
use crate::hitbox::Hitbox;
use crate::timer::SimClock;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// A named hitbox configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatantConfig {
    /// Unique identifier (e.g., "knight", "goblin_archer")
    pub id: String,
    #[serde(flatten)]
    pub hitbox: HitboxConfig,
}

/// Container for combatant configurations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RosterConfig {
    #[serde(rename = "combatant", default)]
    pub combatants: Vec<CombatantConfig>,
}

impl RosterConfig {
    /// Validate every entry and reject duplicate ids
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for combatant in &self.combatants {
            if !seen.insert(combatant.id.as_str()) {
                return Err(ConfigError::ValidationError(format!(
                    "duplicate combatant id '{}'",
                    combatant.id
                )));
            }
            combatant.hitbox.validate().map_err(|err| match err {
                ConfigError::ValidationError(msg) => {
                    ConfigError::ValidationError(format!("{}: {}", combatant.id, msg))
                }
                other => other,
            })?;
        }
        Ok(())
    }

    /// Get a combatant configuration by id
    pub fn get(&self, id: &str) -> Option<&HitboxConfig> {
        self.combatants
            .iter()
            .find(|c| c.id == id)
            .map(|c| &c.hitbox)
    }

    /// Build one hitbox per combatant, all timed by the same clock.
    ///
    /// The whole roster is validated first, so nothing is built from a
    /// roster that failed to load through `load_roster`.
    pub fn spawn(&self, clock: &SimClock) -> Result<Vec<(String, Hitbox)>, ConfigError> {
        self.validate()?;

        self.combatants
            .iter()
            .map(|c| {
                let hitbox = Hitbox::from_config(&c.hitbox, Box::new(clock.timer()))?;
                Ok((c.id.clone(), hitbox))
            })
            .collect()
    }
}

/// Load a roster from a TOML or JSON file
pub fn load_roster(path: &Path) -> Result<RosterConfig, ConfigError> {
    let roster: RosterConfig = super::load_any(path)?;
    roster.validate()?;
    Ok(roster)
}

/// Load a roster from a TOML string
pub fn parse_roster(content: &str) -> Result<RosterConfig, ConfigError> {
    let roster: RosterConfig = super::parse_toml(content)?;
    roster.validate()?;
    Ok(roster)
}
