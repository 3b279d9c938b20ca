//! Property tests for the damage state machine and targeting filter

use hitbox_core::prelude::*;
use proptest::prelude::*;
use std::cell::Cell;
use std::rc::Rc;

fn alignment() -> impl Strategy<Value = Alignment> {
    prop_oneof![
        Just(Alignment::Party),
        Just(Alignment::Enemy),
        Just(Alignment::None),
    ]
}

proptest! {
    #[test]
    fn lethal_damage_floors_health_and_dies_once(
        max in 1u32..10_000,
        current_frac in 0.0f64..=1.0,
        extra in 0i32..10_000,
        repeats in 1usize..4,
    ) {
        let current = ((f64::from(max) * current_frac) as u32).max(1);
        let deaths = Rc::new(Cell::new(0u32));
        let counter = deaths.clone();
        let mut target = Hitbox::new(Alignment::Enemy, max)
            .with_reactions(DamageReactions::new().on_die(move |_| counter.set(counter.get() + 1)));
        target.set_health(current);

        let base = i32::try_from(current).unwrap().saturating_add(extra);
        let result = target.take_damage(base, DamageOptions::default()).unwrap();
        prop_assert_eq!(result, DamageResult::landed(current));
        prop_assert_eq!(target.current_health(), 0);

        for _ in 0..repeats {
            target.take_damage(base, DamageOptions::default()).unwrap();
        }
        prop_assert_eq!(deaths.get(), 1);
    }

    #[test]
    fn invincible_targets_block_without_losing_health(
        max in 1u32..10_000,
        base in 0i32..20_000,
    ) {
        let clock = SimClock::new();
        let mut target = Hitbox::new(Alignment::Enemy, max)
            .with_timer(Box::new(clock.timer()))
            .with_invincible_period(1.0);
        target.set_invincible_override(true);

        clock.advance(5.0);
        let result = target.take_damage(base, DamageOptions::default()).unwrap();

        prop_assert_eq!(result, DamageResult::blocked());
        prop_assert_eq!(target.current_health(), max);

        // The attempt restarted the grace period
        target.set_invincible_override(false);
        prop_assert!(target.is_invincible());
    }

    #[test]
    fn non_lethal_hits_land_exactly(
        max in 2u32..10_000,
        base_frac in 0.0f64..1.0,
    ) {
        let base = (f64::from(max) * base_frac) as u32;
        prop_assume!(base > 0 && base < max);
        let mut target = Hitbox::new(Alignment::Enemy, max);

        let result = target.take_damage(base as i32, DamageOptions::default()).unwrap();

        prop_assert_eq!(result, DamageResult::landed(base));
        prop_assert_eq!(target.current_health(), max - base);
    }

    #[test]
    fn negative_damage_always_rejected(base in i32::MIN..0) {
        let mut target = Hitbox::new(Alignment::Enemy, 100);
        prop_assert!(target.take_damage(base, DamageOptions::default()).is_err());
        prop_assert_eq!(target.current_health(), 100);
    }

    #[test]
    fn friendly_targets_never_damaged(
        side in alignment(),
        amount in 0i32..1_000,
        options in any::<(bool, bool)>(),
    ) {
        let mut attacker = Hitbox::new(side, 100).with_strike(FixedStrike::new(amount));
        attacker.activate();
        let mut ally = Hitbox::new(side, 100);

        let options = DamageOptions::new()
            .with_ignore_invincibility(options.0)
            .with_ignore_parry(options.1);
        let mut candidates: [&mut dyn Collider; 1] = [&mut ally];
        let report = attacker.attack(&mut candidates, options);

        prop_assert_eq!(report.results().count(), 0);
        prop_assert_eq!(ally.current_health(), 100);
    }

    #[test]
    fn activation_is_idempotent(calls in proptest::collection::vec(any::<bool>(), 1..20)) {
        let fired = Rc::new(Cell::new(0usize));
        let (on, off) = (fired.clone(), fired.clone());
        let mut hitbox = Hitbox::new(Alignment::Party, 10).with_hooks(
            AttackHooks::new()
                .on_activate(move || on.set(on.get() + 1))
                .on_deactivate(move || off.set(off.get() + 1)),
        );

        for &activate in &calls {
            if activate {
                hitbox.activate();
            } else {
                hitbox.deactivate();
            }
            prop_assert_eq!(hitbox.is_active(), activate);
        }
        prop_assert_eq!(fired.get(), calls.len());
    }
}
