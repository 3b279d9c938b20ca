//! Strike - How an attack type computes the damage it gives

use super::{CombatError, DamageResult};
use crate::health::Damageable;
use crate::types::DamageOptions;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Damage computation plugged into a hitbox.
///
/// The targeting loop has already filtered alignment, invincibility and
/// parrying by the time `give_damage` runs. Implementations normally call
/// `target.take_damage` and return its result; the default gives nothing.
pub trait Strike: fmt::Debug {
    fn give_damage(
        &mut self,
        target: &mut dyn Damageable,
        options: DamageOptions,
    ) -> Result<DamageResult, CombatError> {
        let _ = (target, options);
        Ok(DamageResult::pass_through())
    }
}

/// Strike that never computes damage
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDamage;

impl Strike for NoDamage {}

/// Strike that deals the same amount every time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedStrike {
    pub amount: i32,
}

impl FixedStrike {
    pub fn new(amount: i32) -> Self {
        FixedStrike { amount }
    }
}

impl Strike for FixedStrike {
    fn give_damage(
        &mut self,
        target: &mut dyn Damageable,
        options: DamageOptions,
    ) -> Result<DamageResult, CombatError> {
        target.take_damage(self.amount, options)
    }
}

/// Strike that rolls its amount uniformly from `min..=max`
#[derive(Debug, Clone)]
pub struct RolledStrike<R = StdRng> {
    min: i32,
    max: i32,
    rng: R,
}

impl RolledStrike<StdRng> {
    /// Create a rolled strike with a deterministic seed
    pub fn seeded(min: i32, max: i32, seed: u64) -> Result<Self, CombatError> {
        Self::new(min, max, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RolledStrike<R> {
    /// Create a rolled strike with the given RNG
    pub fn new(min: i32, max: i32, rng: R) -> Result<Self, CombatError> {
        if min < 0 || min > max {
            return Err(CombatError::InvalidRange { min, max });
        }
        Ok(RolledStrike { min, max, rng })
    }

    /// The inclusive damage range
    pub fn range(&self) -> (i32, i32) {
        (self.min, self.max)
    }

    /// Roll the next amount
    pub fn roll(&mut self) -> i32 {
        self.rng.gen_range(self.min..=self.max)
    }
}

impl<R: Rng + fmt::Debug> Strike for RolledStrike<R> {
    fn give_damage(
        &mut self,
        target: &mut dyn Damageable,
        options: DamageOptions,
    ) -> Result<DamageResult, CombatError> {
        let amount = self.roll();
        target.take_damage(amount, options)
    }
}
