//! Prelude module for convenient imports
//!
//! ```rust
//! use hitbox_core::prelude::*;
//! ```

// Core types
pub use crate::types::{Alignment, DamageOptions, Interaction};

// Actors
pub use crate::hitbox::Hitbox;
pub use crate::health::Damageable;

// Combat
pub use crate::combat::{AttackReport, Collider, DamageResult, FixedStrike, RolledStrike, Strike};

// Hooks
pub use crate::hooks::{AttackHooks, DamageReactions};

// Time
pub use crate::timer::{ManualTimer, SimClock, Stopwatch, Timer};
