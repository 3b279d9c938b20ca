//! hitbox_core - Melee hit resolution for game actors
//!
//! This library provides:
//! - Hitbox: An actor that can both deal and receive damage
//! - Damageable: The capability an entity needs to be hit
//! - Strike: The damage computation an attack type plugs in
//! - Health state machine: Clamping, invincibility windows, stagger tiers
//! - Configuration: Per-entity tunables loaded from TOML or JSON

pub mod combat;
pub mod config;
pub mod health;
pub mod hitbox;
pub mod hooks;
pub mod prelude;
pub mod simulation;
pub mod timer;
pub mod types;

// Re-export core types for convenience
pub use combat::{
    AttackReport, CandidateOutcome, Collider, CombatError, DamageResult, FixedStrike, NoDamage,
    RolledStrike, SkipReason, Strike,
};
pub use config::{ConfigError, HitboxConfig, RosterConfig};
pub use health::{Damageable, DamageThresholds, Health, HitContext, Invincibility, Reaction, Vitals};
pub use hitbox::{ContactPolicy, Hitbox};
pub use hooks::{AttackHooks, DamageReactions, TargetView};
pub use simulation::{DuelReport, DuelSettings, DuelSimulation};
pub use timer::{ClockTimer, ManualTimer, SimClock, Stopwatch, Timer};
pub use types::{Alignment, DamageOptions, Interaction};
