//! Per-entity hitbox tunables

use super::ConfigError;
use crate::health::DamageThresholds;
use crate::hitbox::ContactPolicy;
use crate::types::Alignment;
use serde::{Deserialize, Serialize};

/// Tunables for one hitbox, set at construction time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitboxConfig {
    #[serde(default)]
    pub alignment: Alignment,
    /// Whether the hitbox starts armed
    #[serde(default)]
    pub active: bool,
    /// Permanent invincibility regardless of the grace period
    #[serde(default)]
    pub override_invincible: bool,
    /// Seconds of invincibility after each damage attempt
    #[serde(default)]
    pub invincible_period: f64,
    #[serde(default = "default_max_health")]
    pub max_health: u32,
    #[serde(default = "default_medium_damage_proportion")]
    pub medium_damage_proportion: f64,
    #[serde(default = "default_high_damage_proportion")]
    pub high_damage_proportion: f64,
    #[serde(default = "default_true")]
    pub deactivate_on_contact: bool,
    #[serde(default = "default_true")]
    pub deactivate_on_death: bool,
}

impl Default for HitboxConfig {
    fn default() -> Self {
        HitboxConfig {
            alignment: Alignment::None,
            active: false,
            override_invincible: false,
            invincible_period: 0.0,
            max_health: 100,
            medium_damage_proportion: 0.1,
            high_damage_proportion: 0.15,
            deactivate_on_contact: true,
            deactivate_on_death: true,
        }
    }
}

fn default_max_health() -> u32 {
    100
}
fn default_medium_damage_proportion() -> f64 {
    0.1
}
fn default_high_damage_proportion() -> f64 {
    0.15
}
fn default_true() -> bool {
    true
}

impl HitboxConfig {
    /// Check ranges and ordering of the tunables
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_health == 0 {
            return Err(ConfigError::ValidationError(
                "max_health must be greater than zero".to_string(),
            ));
        }

        if !self.invincible_period.is_finite() || self.invincible_period < 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "invincible_period must be a non-negative number of seconds, got {}",
                self.invincible_period
            )));
        }

        for (name, value) in [
            ("medium_damage_proportion", self.medium_damage_proportion),
            ("high_damage_proportion", self.high_damage_proportion),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }

        if self.medium_damage_proportion > self.high_damage_proportion {
            return Err(ConfigError::ValidationError(format!(
                "medium_damage_proportion ({}) exceeds high_damage_proportion ({})",
                self.medium_damage_proportion, self.high_damage_proportion
            )));
        }

        Ok(())
    }

    pub fn thresholds(&self) -> DamageThresholds {
        DamageThresholds::new(self.medium_damage_proportion, self.high_damage_proportion)
    }

    pub fn contact_policy(&self) -> ContactPolicy {
        ContactPolicy {
            deactivate_on_contact: self.deactivate_on_contact,
            deactivate_on_death: self.deactivate_on_death,
        }
    }
}
