//! Damage application state machine
//!
//! Every damage attempt runs the same ordered checks:
//! 1. Clamp the raw amount to current health
//! 2. Nullify it if the entity is invincible (unless overridden)
//! 3. Subtract from current health
//! 4. Restart the invincibility timer, even for zero damage
//! 5. At zero health: death (only on the first transition)
//! 6. Otherwise classify `final / remaining` into block or a stagger tier
//!
//! The denominator in step 6 is the health *after* subtraction, so the same
//! hit ranks higher as an entity gets weaker.

use super::invincibility::Invincibility;
use crate::combat::{CombatError, DamageResult};
use crate::types::DamageOptions;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Damage proportion boundaries between stagger tiers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DamageThresholds {
    /// Proportions below this are low damage
    pub medium: f64,
    /// Proportions below this (and at least `medium`) are medium damage
    pub high: f64,
}

impl Default for DamageThresholds {
    fn default() -> Self {
        DamageThresholds {
            medium: 0.10,
            high: 0.15,
        }
    }
}

impl DamageThresholds {
    pub fn new(medium: f64, high: f64) -> Self {
        DamageThresholds { medium, high }
    }

    /// Pick the stagger tier for a non-zero proportion
    pub fn classify(&self, proportion: f64) -> Reaction {
        if proportion < self.medium {
            Reaction::LowDamage
        } else if proportion < self.high {
            Reaction::MediumDamage
        } else {
            Reaction::HighDamage
        }
    }
}

/// Which reaction a damage attempt triggered on the receiving entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reaction {
    /// Health reached zero for the first time
    Died,
    /// Health was already at zero and the death was handled; no hook fires
    AlreadyDefeated,
    /// Nothing got through
    Blocked,
    LowDamage,
    MediumDamage,
    HighDamage,
}

/// Everything a damage reaction gets to see
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HitContext {
    /// Raw amount requested by the attacker
    pub base_amount: u32,
    /// What was actually applied
    pub result: DamageResult,
    pub health_before: u32,
    pub health_after: u32,
    pub max_health: u32,
    /// `final / health_after`; absent when health reached zero
    pub proportion: Option<f64>,
}

/// Current and maximum health
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "HealthRepr")]
pub struct Health {
    max: u32,
    current: u32,
    /// Whether the death transition has already been reported
    death_handled: bool,
}

/// Serialized form of [`Health`], clamped on the way in
#[derive(Deserialize)]
struct HealthRepr {
    max: u32,
    current: u32,
    #[serde(default)]
    death_handled: bool,
}

impl From<HealthRepr> for Health {
    fn from(repr: HealthRepr) -> Self {
        let current = repr.current.min(repr.max);
        Health {
            max: repr.max,
            current,
            death_handled: repr.death_handled && current == 0,
        }
    }
}

impl Default for Health {
    fn default() -> Self {
        Health::new(100)
    }
}

impl Health {
    /// Create at full health
    pub fn new(max: u32) -> Self {
        Health {
            max,
            current: max,
            death_handled: false,
        }
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    /// Whether the death transition has happened and not been undone
    pub fn is_dead(&self) -> bool {
        self.current == 0 && self.death_handled
    }

    /// Set current health directly, clamped to max.
    ///
    /// Setting a positive value revives an entity, so a later lethal hit
    /// reports death again.
    pub fn set_current(&mut self, value: u32) {
        self.current = value.min(self.max);
        if self.current > 0 {
            self.death_handled = false;
        }
    }

    /// Change max health, clamping current health down if needed
    pub fn set_max(&mut self, max: u32) {
        self.max = max;
        self.current = self.current.min(max);
    }

    /// Return to full health
    pub fn restore(&mut self) {
        self.set_current(self.max);
    }

    /// Apply steps 1, 2, 3, 5 and 6 of the state machine.
    ///
    /// `nullified` is true when invincibility cancels the hit.
    pub fn apply(
        &mut self,
        base_amount: u32,
        nullified: bool,
        thresholds: &DamageThresholds,
    ) -> (HitContext, Reaction) {
        let health_before = self.current;

        let final_amount = if nullified {
            0
        } else {
            base_amount.min(self.current)
        };
        self.current -= final_amount;

        let mut context = HitContext {
            base_amount,
            result: DamageResult::landed(final_amount),
            health_before,
            health_after: self.current,
            max_health: self.max,
            proportion: None,
        };

        if self.current == 0 {
            let reaction = if self.death_handled {
                Reaction::AlreadyDefeated
            } else {
                self.death_handled = true;
                Reaction::Died
            };
            return (context, reaction);
        }

        let proportion = f64::from(final_amount) / f64::from(self.current);
        context.proportion = Some(proportion);

        if final_amount == 0 {
            context.result = DamageResult::blocked();
            return (context, Reaction::Blocked);
        }

        (context, thresholds.classify(proportion))
    }
}

/// Health, invincibility and thresholds of one entity
#[derive(Debug, Default)]
pub struct Vitals {
    pub health: Health,
    pub invincibility: Invincibility,
    pub thresholds: DamageThresholds,
}

impl Vitals {
    pub fn new(health: Health, invincibility: Invincibility, thresholds: DamageThresholds) -> Self {
        Vitals {
            health,
            invincibility,
            thresholds,
        }
    }

    pub fn is_invincible(&self) -> bool {
        self.invincibility.is_active()
    }

    /// Run the full damage-application state machine
    pub fn take_damage(
        &mut self,
        base_amount: i32,
        options: DamageOptions,
    ) -> Result<(HitContext, Reaction), CombatError> {
        if base_amount < 0 {
            return Err(CombatError::NegativeDamage(base_amount));
        }

        let nullified = self.invincibility.is_active() && !options.ignore_invincibility;
        let (context, reaction) =
            self.health
                .apply(base_amount.unsigned_abs(), nullified, &self.thresholds);
        self.invincibility.restart();

        debug!(
            base = context.base_amount,
            applied = context.result.amount(),
            health = context.health_after,
            ?reaction,
            "damage applied"
        );

        Ok((context, reaction))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::SimClock;

    fn vitals(max: u32, current: u32, grace: f64, clock: &SimClock) -> Vitals {
        let mut health = Health::new(max);
        health.set_current(current);
        Vitals::new(
            health,
            Invincibility::new(grace, Box::new(clock.timer())),
            DamageThresholds::default(),
        )
    }

    #[test]
    fn test_low_damage_uses_post_hit_health() {
        let clock = SimClock::new();
        let mut v = vitals(100, 100, 0.0, &clock);

        let (ctx, reaction) = v.take_damage(5, DamageOptions::default()).unwrap();

        assert_eq!(ctx.result, DamageResult::landed(5));
        assert_eq!(v.health.current(), 95);
        assert_eq!(reaction, Reaction::LowDamage);
        assert!((ctx.proportion.unwrap() - 5.0 / 95.0).abs() < 1e-12);
    }

    #[test]
    fn test_medium_and_high_tiers() {
        let clock = SimClock::new();

        // 10 / 90 = 0.111
        let mut v = vitals(100, 100, 0.0, &clock);
        let (_, reaction) = v.take_damage(10, DamageOptions::default()).unwrap();
        assert_eq!(reaction, Reaction::MediumDamage);

        // 14 / 86 = 0.163
        let mut v = vitals(100, 100, 0.0, &clock);
        let (_, reaction) = v.take_damage(14, DamageOptions::default()).unwrap();
        assert_eq!(reaction, Reaction::HighDamage);
    }

    #[test]
    fn test_post_hit_denominator_pushes_tier_up() {
        let clock = SimClock::new();
        // 19 / 200 = 0.095 would be low; 19 / 181 = 0.105 is medium
        let mut v = vitals(200, 200, 0.0, &clock);
        let (ctx, reaction) = v.take_damage(19, DamageOptions::default()).unwrap();
        assert!(ctx.proportion.unwrap() > 0.10);
        assert_eq!(reaction, Reaction::MediumDamage);
    }

    #[test]
    fn test_lethal_hit_clamps_and_dies_once() {
        let clock = SimClock::new();
        let mut v = vitals(100, 10, 0.0, &clock);

        let (ctx, reaction) = v.take_damage(10, DamageOptions::default()).unwrap();
        assert_eq!(ctx.result, DamageResult::landed(10));
        assert_eq!(reaction, Reaction::Died);
        assert_eq!(ctx.proportion, None);
        assert!(v.health.is_dead());

        let (ctx, reaction) = v.take_damage(50, DamageOptions::default()).unwrap();
        assert_eq!(ctx.result, DamageResult::landed(0));
        assert_eq!(reaction, Reaction::AlreadyDefeated);
        assert_eq!(v.health.current(), 0);
    }

    #[test]
    fn test_overkill_clamped_to_current() {
        let clock = SimClock::new();
        let mut v = vitals(100, 30, 0.0, &clock);
        let (ctx, _) = v.take_damage(1000, DamageOptions::default()).unwrap();
        assert_eq!(ctx.result.amount(), 30);
        assert_eq!(ctx.base_amount, 1000);
    }

    #[test]
    fn test_invincible_hit_blocks_and_restarts_timer() {
        let clock = SimClock::new();
        let mut v = vitals(100, 100, 1.0, &clock);

        v.take_damage(5, DamageOptions::default()).unwrap();
        clock.advance(0.5);
        assert!(v.is_invincible());

        let (ctx, reaction) = v.take_damage(20, DamageOptions::default()).unwrap();
        assert_eq!(ctx.result, DamageResult::blocked());
        assert_eq!(reaction, Reaction::Blocked);
        assert_eq!(v.health.current(), 95);
        assert!(v.invincibility.time_since_restart().abs() < 1e-9);
    }

    #[test]
    fn test_ignore_invincibility_lands() {
        let clock = SimClock::new();
        let mut v = vitals(100, 100, 0.0, &clock);
        v.invincibility.set_override(true);

        let options = DamageOptions::new().with_ignore_invincibility(true);
        let (ctx, _) = v.take_damage(20, options).unwrap();
        assert_eq!(ctx.result, DamageResult::landed(20));
    }

    #[test]
    fn test_zero_damage_blocks() {
        let clock = SimClock::new();
        let mut v = vitals(100, 100, 0.0, &clock);
        let (ctx, reaction) = v.take_damage(0, DamageOptions::default()).unwrap();
        assert_eq!(ctx.result, DamageResult::blocked());
        assert_eq!(reaction, Reaction::Blocked);
    }

    #[test]
    fn test_negative_damage_rejected_without_side_effects() {
        let clock = SimClock::new();
        let mut v = vitals(100, 100, 1.0, &clock);

        let err = v.take_damage(-5, DamageOptions::default()).unwrap_err();
        assert_eq!(err, CombatError::NegativeDamage(-5));
        assert_eq!(v.health.current(), 100);
        assert!(!v.is_invincible());
    }

    #[test]
    fn test_revive_rearms_death() {
        let clock = SimClock::new();
        let mut v = vitals(50, 5, 0.0, &clock);
        let (_, reaction) = v.take_damage(5, DamageOptions::default()).unwrap();
        assert_eq!(reaction, Reaction::Died);

        v.health.restore();
        assert_eq!(v.health.current(), 50);
        let (_, reaction) = v.take_damage(50, DamageOptions::default()).unwrap();
        assert_eq!(reaction, Reaction::Died);
    }

    #[test]
    fn test_invincible_hit_on_defeated_target() {
        let clock = SimClock::new();
        let mut v = vitals(100, 5, 0.0, &clock);
        v.take_damage(5, DamageOptions::default()).unwrap();
        v.invincibility.set_override(true);

        let (ctx, reaction) = v.take_damage(20, DamageOptions::default()).unwrap();
        assert_eq!(ctx.result, DamageResult::landed(0));
        assert_eq!(reaction, Reaction::AlreadyDefeated);
    }

    #[test]
    fn test_deserialize_clamps_current_to_max() {
        let health: Health = serde_json::from_str(r#"{"max":10,"current":50}"#).unwrap();
        assert_eq!(health.max(), 10);
        assert_eq!(health.current(), 10);
        assert!(!health.is_dead());

        let revived: Health =
            serde_json::from_str(r#"{"max":10,"current":4,"death_handled":true}"#).unwrap();
        assert_eq!(revived.current(), 4);
        assert!(!revived.is_dead());

        let dead: Health =
            serde_json::from_str(r#"{"max":10,"current":0,"death_handled":true}"#).unwrap();
        assert!(dead.is_dead());
    }

    #[test]
    fn test_set_max_clamps_current() {
        let mut health = Health::new(100);
        health.set_max(40);
        assert_eq!(health.current(), 40);
        health.set_current(500);
        assert_eq!(health.current(), 40);
    }
}
