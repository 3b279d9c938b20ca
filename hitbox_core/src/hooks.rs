//! Hooks - Optional callbacks fired by attackers and defenders
//!
//! Every hook defaults to a no-op. Concrete attack types install closures for
//! the outcomes they care about (VFX, knockback, chaining) and inherit the
//! targeting rules unchanged.

use crate::combat::DamageResult;
use crate::health::{Damageable, HitContext, Reaction};
use crate::types::{Alignment, Interaction};
use std::fmt;

type OutcomeHook = Box<dyn FnMut(&TargetView, &DamageResult)>;
type LifecycleHook = Box<dyn FnMut()>;
type ReactionHook = Box<dyn FnMut(&HitContext)>;

/// Snapshot of a target taken right after an outcome was decided
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetView {
    /// Position of the target in the candidate list
    pub index: usize,
    pub alignment: Alignment,
    pub current_health: u32,
    pub max_health: u32,
}

impl TargetView {
    pub fn of(index: usize, target: &dyn Damageable) -> Self {
        TargetView {
            index,
            alignment: target.alignment(),
            current_health: target.current_health(),
            max_health: target.max_health(),
        }
    }

    pub fn is_defeated(&self) -> bool {
        self.current_health == 0
    }
}

/// Attacker-side callbacks
#[derive(Default)]
pub struct AttackHooks {
    on_land: Option<OutcomeHook>,
    on_blocked: Option<OutcomeHook>,
    on_parried: Option<OutcomeHook>,
    on_absorbed: Option<OutcomeHook>,
    on_activate: Option<LifecycleHook>,
    on_deactivate: Option<LifecycleHook>,
}

impl AttackHooks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Damage landed on a target
    pub fn on_land(mut self, hook: impl FnMut(&TargetView, &DamageResult) + 'static) -> Self {
        self.on_land = Some(Box::new(hook));
        self
    }

    /// A target blocked, either through invincibility or its own block
    pub fn on_blocked(mut self, hook: impl FnMut(&TargetView, &DamageResult) + 'static) -> Self {
        self.on_blocked = Some(Box::new(hook));
        self
    }

    /// A target parried
    pub fn on_parried(mut self, hook: impl FnMut(&TargetView, &DamageResult) + 'static) -> Self {
        self.on_parried = Some(Box::new(hook));
        self
    }

    /// A target absorbed the strike
    pub fn on_absorbed(mut self, hook: impl FnMut(&TargetView, &DamageResult) + 'static) -> Self {
        self.on_absorbed = Some(Box::new(hook));
        self
    }

    pub fn on_activate(mut self, hook: impl FnMut() + 'static) -> Self {
        self.on_activate = Some(Box::new(hook));
        self
    }

    pub fn on_deactivate(mut self, hook: impl FnMut() + 'static) -> Self {
        self.on_deactivate = Some(Box::new(hook));
        self
    }

    /// Fire the hook for an outcome.
    ///
    /// Returns whether the interaction is one that has an outcome hook at
    /// all, installed or not; `PassThrough` has none.
    pub(crate) fn dispatch(&mut self, target: &TargetView, result: &DamageResult) -> bool {
        let slot = match result.interaction() {
            Interaction::Land => &mut self.on_land,
            Interaction::Block => &mut self.on_blocked,
            Interaction::Parry => &mut self.on_parried,
            Interaction::Absorb => &mut self.on_absorbed,
            Interaction::PassThrough => return false,
        };
        if let Some(hook) = slot.as_mut() {
            hook(target, result);
        }
        true
    }

    pub(crate) fn activated(&mut self) {
        if let Some(hook) = self.on_activate.as_mut() {
            hook();
        }
    }

    pub(crate) fn deactivated(&mut self) {
        if let Some(hook) = self.on_deactivate.as_mut() {
            hook();
        }
    }
}

impl fmt::Debug for AttackHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttackHooks")
            .field("on_land", &self.on_land.is_some())
            .field("on_blocked", &self.on_blocked.is_some())
            .field("on_parried", &self.on_parried.is_some())
            .field("on_absorbed", &self.on_absorbed.is_some())
            .field("on_activate", &self.on_activate.is_some())
            .field("on_deactivate", &self.on_deactivate.is_some())
            .finish()
    }
}

/// Defender-side callbacks, keyed by [`Reaction`]
#[derive(Default)]
pub struct DamageReactions {
    on_die: Option<ReactionHook>,
    on_block: Option<ReactionHook>,
    on_low_damage: Option<ReactionHook>,
    on_medium_damage: Option<ReactionHook>,
    on_high_damage: Option<ReactionHook>,
}

impl DamageReactions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Health reached zero
    pub fn on_die(mut self, hook: impl FnMut(&HitContext) + 'static) -> Self {
        self.on_die = Some(Box::new(hook));
        self
    }

    /// A damage attempt did nothing
    pub fn on_block(mut self, hook: impl FnMut(&HitContext) + 'static) -> Self {
        self.on_block = Some(Box::new(hook));
        self
    }

    pub fn on_low_damage(mut self, hook: impl FnMut(&HitContext) + 'static) -> Self {
        self.on_low_damage = Some(Box::new(hook));
        self
    }

    pub fn on_medium_damage(mut self, hook: impl FnMut(&HitContext) + 'static) -> Self {
        self.on_medium_damage = Some(Box::new(hook));
        self
    }

    pub fn on_high_damage(mut self, hook: impl FnMut(&HitContext) + 'static) -> Self {
        self.on_high_damage = Some(Box::new(hook));
        self
    }

    pub(crate) fn dispatch(&mut self, reaction: Reaction, context: &HitContext) {
        let slot = match reaction {
            Reaction::Died => &mut self.on_die,
            Reaction::Blocked => &mut self.on_block,
            Reaction::LowDamage => &mut self.on_low_damage,
            Reaction::MediumDamage => &mut self.on_medium_damage,
            Reaction::HighDamage => &mut self.on_high_damage,
            Reaction::AlreadyDefeated => return,
        };
        if let Some(hook) = slot.as_mut() {
            hook(context);
        }
    }
}

impl fmt::Debug for DamageReactions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DamageReactions")
            .field("on_die", &self.on_die.is_some())
            .field("on_block", &self.on_block.is_some())
            .field("on_low_damage", &self.on_low_damage.is_some())
            .field("on_medium_damage", &self.on_medium_damage.is_some())
            .field("on_high_damage", &self.on_high_damage.is_some())
            .finish()
    }
}
