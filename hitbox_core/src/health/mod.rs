//! Health - Damage application, invincibility windows and stagger tiers

mod invincibility;
mod state;

pub use invincibility::Invincibility;
pub use state::{DamageThresholds, Health, HitContext, Reaction, Vitals};

use crate::combat::{CombatError, DamageResult};
use crate::types::{Alignment, DamageOptions};

/// Capability an entity needs to receive damage.
///
/// Attackers only ever touch a target through this trait; health is mutated
/// by the target's own `take_damage`.
pub trait Damageable {
    fn alignment(&self) -> Alignment;

    fn max_health(&self) -> u32;

    fn current_health(&self) -> u32;

    fn is_invincible(&self) -> bool;

    fn is_parrying(&self) -> bool {
        false
    }

    /// Apply a raw damage amount and report how it resolved.
    ///
    /// Negative amounts are rejected without touching any state.
    fn take_damage(
        &mut self,
        base_amount: i32,
        options: DamageOptions,
    ) -> Result<DamageResult, CombatError>;

    fn is_defeated(&self) -> bool {
        self.current_health() == 0
    }
}
