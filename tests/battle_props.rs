mod support;

use fleetfog::{Battle, Coordinate, Event, FieldStatus, Settings, Side};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};
use support::fixed_fleet;

fn field() -> impl Strategy<Value = Coordinate> {
    (0usize..10, 0usize..10).prop_map(|(r, c)| Coordinate::from_index(r, c).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn repeated_shot_changes_nothing(seed in any::<u64>(), shots in prop::collection::vec(field(), 1..40)) {
        let mut battle = Battle::new(Settings::default(), SmallRng::seed_from_u64(seed));
        battle.start(fixed_fleet()).unwrap();
        for at in shots {
            while !battle.players_turn() && !battle.won() {
                battle.ai_move();
            }
            if battle.won() {
                break;
            }
            battle.drain_messages();
            let undiscovered = battle.board(Side::Enemy).unwrap().is_undiscovered(at);
            battle.fire(at);
            if undiscovered {
                continue;
            }
            prop_assert_eq!(battle.drain_messages(), vec![Event::AlreadyDiscovered]);
            prop_assert!(battle.players_turn());
        }
    }

    #[test]
    fn visibility_never_leaks_intact_segments(seed in any::<u64>(), shots in prop::collection::vec(field(), 1..60)) {
        let mut battle = Battle::new(Settings::default(), SmallRng::seed_from_u64(seed));
        battle.start(fixed_fleet()).unwrap();
        for at in shots {
            while !battle.players_turn() && !battle.won() {
                battle.ai_move();
            }
            battle.fire(at);
            for side in [Side::Player, Side::Enemy] {
                let fleet = battle.fleet(side).unwrap();
                let visible = battle.board(side).unwrap().composite(true);
                for ship in fleet.ships() {
                    for segment in ship.segments() {
                        let status = visible.get(segment.position()).unwrap();
                        if segment.is_destroyed() {
                            prop_assert!(matches!(status, FieldStatus::Ship | FieldStatus::Sunk));
                        } else {
                            prop_assert_eq!(status, FieldStatus::Empty);
                        }
                    }
                }
            }
        }
    }
}
