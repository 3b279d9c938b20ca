//! Hitbox - An actor that deals and receives damage through one component

use crate::combat::{
    resolve_candidate, AttackReport, CandidateOutcome, Collider, CombatError, DamageResult,
    NoDamage, SkipReason, Strike,
};
use crate::config::{ConfigError, HitboxConfig};
use crate::health::{Damageable, DamageThresholds, Health, Invincibility, Reaction, Vitals};
use crate::hooks::{AttackHooks, DamageReactions, TargetView};
use crate::timer::{Stopwatch, Timer};
use crate::types::{Alignment, DamageOptions};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// What a hitbox does to itself after contact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPolicy {
    /// Deactivate after any blocked, parried, absorbed or landed outcome
    pub deactivate_on_contact: bool,
    /// Deactivate when health first reaches zero
    pub deactivate_on_death: bool,
}

impl Default for ContactPolicy {
    fn default() -> Self {
        ContactPolicy {
            deactivate_on_contact: true,
            deactivate_on_death: true,
        }
    }
}

/// Combat component for one actor.
///
/// As an attacker it sweeps candidates handed over by the physics layer; as a
/// defender it runs its own health state machine through [`Damageable`].
#[derive(Debug)]
pub struct Hitbox {
    alignment: Alignment,
    active: bool,
    paused: bool,
    parrying: bool,
    vitals: Vitals,
    policy: ContactPolicy,
    strike: Box<dyn Strike>,
    hooks: AttackHooks,
    reactions: DamageReactions,
}

impl Hitbox {
    /// Create an inactive hitbox at full health with no strike and no hooks
    pub fn new(alignment: Alignment, max_health: u32) -> Self {
        Hitbox {
            alignment,
            active: false,
            paused: false,
            parrying: false,
            vitals: Vitals::new(
                Health::new(max_health),
                Invincibility::new(0.0, Box::new(Stopwatch::new())),
                DamageThresholds::default(),
            ),
            policy: ContactPolicy::default(),
            strike: Box::new(NoDamage),
            hooks: AttackHooks::default(),
            reactions: DamageReactions::default(),
        }
    }

    /// Create from configuration, rejecting tunables that fail validation
    pub fn from_config(
        config: &HitboxConfig,
        timer: Box<dyn Timer>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut invincibility = Invincibility::new(config.invincible_period, timer);
        invincibility.set_override(config.override_invincible);

        Ok(Hitbox {
            alignment: config.alignment,
            active: config.active,
            paused: false,
            parrying: false,
            vitals: Vitals::new(
                Health::new(config.max_health),
                invincibility,
                config.thresholds(),
            ),
            policy: config.contact_policy(),
            strike: Box::new(NoDamage),
            hooks: AttackHooks::default(),
            reactions: DamageReactions::default(),
        })
    }

    pub fn with_strike(mut self, strike: impl Strike + 'static) -> Self {
        self.strike = Box::new(strike);
        self
    }

    pub fn with_hooks(mut self, hooks: AttackHooks) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn with_reactions(mut self, reactions: DamageReactions) -> Self {
        self.reactions = reactions;
        self
    }

    pub fn with_timer(mut self, timer: Box<dyn Timer>) -> Self {
        self.vitals.invincibility.set_timer(timer);
        self
    }

    pub fn with_invincible_period(mut self, seconds: f64) -> Self {
        self.vitals.invincibility.set_grace_period(seconds);
        self
    }

    pub fn with_thresholds(mut self, thresholds: DamageThresholds) -> Self {
        self.vitals.thresholds = thresholds;
        self
    }

    pub fn with_policy(mut self, policy: ContactPolicy) -> Self {
        self.policy = policy;
        self
    }

    // === Activation ===

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Open the gate; the hook fires even if already active
    pub fn activate(&mut self) {
        self.active = true;
        debug!(alignment = ?self.alignment, "hitbox activated");
        self.hooks.activated();
    }

    /// Close the gate; the hook fires even if already inactive
    pub fn deactivate(&mut self) {
        self.active = false;
        debug!(alignment = ?self.alignment, "hitbox deactivated");
        self.hooks.deactivated();
    }

    // === Host-driven state ===

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn set_parrying(&mut self, parrying: bool) {
        self.parrying = parrying;
    }

    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.alignment = alignment;
    }

    pub fn set_invincible_override(&mut self, overridden: bool) {
        self.vitals.invincibility.set_override(overridden);
    }

    /// Set current health directly (clamped to max)
    pub fn set_health(&mut self, health: u32) {
        self.vitals.health.set_current(health);
    }

    /// Return to full health
    pub fn restore_health(&mut self) {
        self.vitals.health.restore();
    }

    pub fn set_strike(&mut self, strike: Box<dyn Strike>) {
        self.strike = strike;
    }

    pub fn hooks_mut(&mut self) -> &mut AttackHooks {
        &mut self.hooks
    }

    pub fn reactions_mut(&mut self) -> &mut DamageReactions {
        &mut self.reactions
    }

    pub fn thresholds(&self) -> DamageThresholds {
        self.vitals.thresholds
    }

    pub fn policy(&self) -> ContactPolicy {
        self.policy
    }

    // === Attacking ===

    /// Attempt to damage every candidate the physics layer reported.
    ///
    /// Does nothing while paused or inactive. Otherwise each candidate is
    /// resolved independently and in order; no candidate aborts the batch.
    pub fn attack(
        &mut self,
        candidates: &mut [&mut dyn Collider],
        options: DamageOptions,
    ) -> AttackReport {
        if self.paused || !self.active {
            debug!(paused = self.paused, active = self.active, "attack gated");
            return AttackReport::gated();
        }

        let mut report = AttackReport::new();

        for (index, candidate) in candidates.iter_mut().enumerate() {
            let Some(target) = candidate.damageable() else {
                debug!(index, "candidate is not damageable");
                report.push(CandidateOutcome::Skipped(SkipReason::NotDamageable));
                continue;
            };

            let outcome = resolve_candidate(self.alignment, &mut *self.strike, target, options);
            if let CandidateOutcome::Resolved(result) = outcome {
                let view = TargetView::of(index, target);
                self.on_outcome(&view, &result);
            }
            report.push(outcome);
        }

        report
    }

    fn on_outcome(&mut self, target: &TargetView, result: &DamageResult) {
        debug!(
            index = target.index,
            interaction = ?result.interaction(),
            amount = result.amount(),
            "attack resolved"
        );

        let contact = self.hooks.dispatch(target, result);
        if contact && self.policy.deactivate_on_contact {
            self.deactivate();
        }
    }
}

impl Damageable for Hitbox {
    fn alignment(&self) -> Alignment {
        self.alignment
    }

    fn max_health(&self) -> u32 {
        self.vitals.health.max()
    }

    fn current_health(&self) -> u32 {
        self.vitals.health.current()
    }

    fn is_invincible(&self) -> bool {
        self.vitals.is_invincible()
    }

    fn is_parrying(&self) -> bool {
        self.parrying
    }

    fn take_damage(
        &mut self,
        base_amount: i32,
        options: DamageOptions,
    ) -> Result<DamageResult, CombatError> {
        let (context, reaction) = self.vitals.take_damage(base_amount, options)?;

        self.reactions.dispatch(reaction, &context);

        if reaction == Reaction::Died {
            debug!(alignment = ?self.alignment, "hitbox defeated");
            if self.policy.deactivate_on_death {
                self.deactivate();
            }
        }

        Ok(context.result)
    }
}

impl Collider for Hitbox {
    fn damageable(&mut self) -> Option<&mut dyn Damageable> {
        Some(self)
    }
}
