//! Duel simulation - Drive two hitboxes through a frame loop

use crate::combat::{CandidateOutcome, Collider};
use crate::health::Damageable;
use crate::hitbox::Hitbox;
use crate::timer::SimClock;
use crate::types::{DamageOptions, Interaction};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Timing and randomness of a duel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DuelSettings {
    /// Seconds per frame
    pub tick: f64,
    /// Seconds before the duel is called off
    pub duration: f64,
    /// Seconds between attacker swings; each swing re-arms the hitbox
    pub swing_interval: f64,
    /// Chance the defender is parrying during a given swing
    pub parry_chance: f64,
    pub options: DamageOptions,
}

impl Default for DuelSettings {
    fn default() -> Self {
        DuelSettings {
            tick: 1.0 / 60.0,
            duration: 10.0,
            swing_interval: 0.5,
            parry_chance: 0.0,
            options: DamageOptions::default(),
        }
    }
}

/// What happened over a duel
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DuelReport {
    pub swings: u32,
    pub lands: u32,
    pub blocks: u32,
    pub parries: u32,
    pub absorbs: u32,
    pub total_damage: u64,
    /// Simulated seconds that elapsed
    pub elapsed: f64,
    /// Seconds into the duel when the defender fell
    pub kill_time: Option<f64>,
}

impl DuelReport {
    /// Damage per second over the elapsed time
    pub fn dps(&self) -> f64 {
        if self.elapsed > 0.0 {
            self.total_damage as f64 / self.elapsed
        } else {
            0.0
        }
    }

    /// Fraction of swings that landed
    pub fn land_rate(&self) -> f64 {
        if self.swings > 0 {
            f64::from(self.lands) / f64::from(self.swings)
        } else {
            0.0
        }
    }

    /// Serialize the report as JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Runs one attacker against one defender
pub struct DuelSimulation;

impl DuelSimulation {
    /// Simulate until `settings.duration` passes or the defender is defeated.
    ///
    /// The defender is the attacker's only candidate every frame, as if the
    /// two were permanently overlapping. Both hitboxes should be timed by
    /// `clock`, which this advances by `settings.tick` per frame.
    pub fn run(
        attacker: &mut Hitbox,
        defender: &mut Hitbox,
        clock: &SimClock,
        settings: &DuelSettings,
        rng: &mut impl Rng,
    ) -> DuelReport {
        let mut report = DuelReport::default();
        let parry_chance = settings.parry_chance.clamp(0.0, 1.0);
        let tick = if settings.tick > 0.0 {
            settings.tick
        } else {
            DuelSettings::default().tick
        };

        let mut time = 0.0;
        let mut next_swing = 0.0;

        while time < settings.duration && !defender.is_defeated() {
            if time >= next_swing {
                attacker.activate();
                defender.set_parrying(rng.gen_bool(parry_chance));
                report.swings += 1;
                next_swing += settings.swing_interval.max(tick);
            }

            let mut candidates: [&mut dyn Collider; 1] = [&mut *defender];
            let attack = attacker.attack(&mut candidates, settings.options);

            for outcome in &attack.outcomes {
                let CandidateOutcome::Resolved(result) = outcome else {
                    continue;
                };
                match result.interaction() {
                    Interaction::Land => report.lands += 1,
                    Interaction::Block => report.blocks += 1,
                    Interaction::Parry => report.parries += 1,
                    Interaction::Absorb => report.absorbs += 1,
                    Interaction::PassThrough => {}
                }
                report.total_damage += u64::from(result.amount());
            }

            if defender.is_defeated() && report.kill_time.is_none() {
                report.kill_time = Some(time);
            }

            clock.advance(tick);
            time += tick;
        }

        report.elapsed = time.min(settings.duration);
        defender.set_parrying(false);

        debug!(
            swings = report.swings,
            lands = report.lands,
            damage = report.total_damage,
            "duel finished"
        );

        report
    }
}
