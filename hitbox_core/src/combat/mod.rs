//! Combat resolution - Sweep candidates and apply strikes

mod resolution;
mod result;
mod strike;

pub use resolution::{resolve_candidate, Collider};
pub use result::{AttackReport, CandidateOutcome, DamageResult, SkipReason};
pub use strike::{FixedStrike, NoDamage, RolledStrike, Strike};

use thiserror::Error;

/// Error raised by a single damage attempt
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CombatError {
    #[error("Damage amount must be non-negative, got {0}")]
    NegativeDamage(i32),
    #[error("Invalid damage range {min}..={max}")]
    InvalidRange { min: i32, max: i32 },
}
