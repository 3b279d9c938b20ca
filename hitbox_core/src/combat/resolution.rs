//! Targeting resolution - Decide what happens to one candidate

use super::result::{CandidateOutcome, DamageResult, SkipReason};
use super::strike::Strike;
use crate::health::Damageable;
use crate::types::{Alignment, DamageOptions};
use tracing::{debug, warn};

/// Opaque handle supplied by the physics layer for each overlap.
///
/// Colliders without the damageable capability (walls, triggers, props)
/// keep the default implementation.
pub trait Collider {
    fn damageable(&mut self) -> Option<&mut dyn Damageable> {
        None
    }
}

/// Resolve one damageable candidate against an attacker.
///
/// Checks run in a fixed order:
/// 1. Same alignment: skipped
/// 2. Invincible (unless ignored): blocked with zero damage
/// 3. Parrying (unless ignored): parried with zero damage
/// 4. Otherwise the strike computes the result
///
/// Hooks are not dispatched here; the caller owns them.
pub fn resolve_candidate(
    attacker: Alignment,
    strike: &mut dyn Strike,
    target: &mut dyn Damageable,
    options: DamageOptions,
) -> CandidateOutcome {
    if !attacker.is_hostile_to(target.alignment()) {
        debug!(alignment = ?attacker, "skipping friendly candidate");
        return CandidateOutcome::Skipped(SkipReason::SameAlignment);
    }

    if target.is_invincible() && !options.ignore_invincibility {
        return CandidateOutcome::Resolved(DamageResult::blocked());
    }

    if target.is_parrying() && !options.ignore_parry {
        return CandidateOutcome::Resolved(DamageResult::parried());
    }

    match strike.give_damage(target, options) {
        Ok(result) => CandidateOutcome::Resolved(result),
        Err(err) => {
            warn!(error = %err, "strike failed for candidate");
            CandidateOutcome::Failed(err)
        }
    }
}
