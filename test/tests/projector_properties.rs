use proptest::prelude::*;

use arena_client::{elixir_fraction, elixir_gauge, lane_band, project, screen_x};
use arena_shared::{Lane, MatchSnapshot, Side, Tower, Unit, ELIXIR_MAX};

fn side() -> impl Strategy<Value = Side> {
    prop_oneof![Just(Side::Player), Just(Side::Opponent)]
}

fn lane() -> impl Strategy<Value = Lane> {
    prop_oneof![Just(Lane::Left), Just(Lane::Center), Just(Lane::Right)]
}

fn tower() -> impl Strategy<Value = Tower> {
    (side(), lane(), 0.0..2000.0f64).prop_map(|(side, lane, hp)| Tower { side, lane, hp })
}

fn unit() -> impl Strategy<Value = Unit> {
    (side(), lane(), -5.0..20.0f64).prop_map(|(owner, lane, x)| Unit { owner, lane, x })
}

fn snapshot() -> impl Strategy<Value = MatchSnapshot> {
    (
        -5.0..20.0f64,
        0.0..600.0f64,
        prop::collection::vec(tower(), 0..8),
        prop::collection::vec(unit(), 0..24),
    )
        .prop_map(|(elixir, time, towers, units)| MatchSnapshot {
            elixir,
            time,
            towers,
            units,
        })
}

proptest! {
    #[test]
    fn elixir_fraction_stays_in_unit_range(elixir in any::<f64>()) {
        let fraction = elixir_fraction(elixir);
        prop_assert!((0.0..=1.0).contains(&fraction));
    }

    #[test]
    fn elixir_fraction_is_monotonic(a in -20.0..30.0f64, b in -20.0..30.0f64) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(elixir_fraction(low) <= elixir_fraction(high));
    }

    #[test]
    fn full_and_empty_gauge_saturate(extra in 0.0..1.0e6f64) {
        prop_assert_eq!(elixir_fraction(ELIXIR_MAX + extra), 1.0);
        prop_assert_eq!(elixir_fraction(-extra), 0.0);
    }

    #[test]
    fn elixir_readout_is_close_to_clamped_value(elixir in 0.0..10.0f64) {
        let gauge = elixir_gauge(elixir);
        prop_assert!((gauge.display - elixir).abs() <= 0.05 + 1e-9);
    }

    #[test]
    fn screen_position_stays_on_screen(side in side(), progress in any::<f64>()) {
        let x = screen_x(side, progress);
        prop_assert!((0.0..=1.0).contains(&x));
    }

    #[test]
    fn sides_mirror_each_other(progress in 0.0..10.0f64) {
        let player = screen_x(Side::Player, progress);
        let opponent = screen_x(Side::Opponent, progress);
        prop_assert!((player + opponent - 1.0).abs() < 1e-12);
    }

    #[test]
    fn projection_is_deterministic(snapshot in snapshot()) {
        prop_assert_eq!(project(&snapshot), project(&snapshot.clone()));
    }

    #[test]
    fn projection_keeps_every_entity(snapshot in snapshot()) {
        let view = project(&snapshot);

        prop_assert_eq!(view.towers.len(), snapshot.towers.len());
        prop_assert_eq!(view.units.len(), snapshot.units.len());
        for (unit, projected) in snapshot.units.iter().zip(&view.units) {
            prop_assert_eq!(projected.owner, unit.owner);
            prop_assert_eq!(projected.band, lane_band(unit.lane));
            prop_assert!((0.0..=1.0).contains(&projected.x));
        }
    }
}
