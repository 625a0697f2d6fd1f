use proptest::prelude::*;

use pathsteps::codec::{character, program};
use pathsteps::math::wrap;
use pathsteps::model::{CharacterState, PathSegment, ProgramSequence};

const COMMANDS: [&str; 9] = [
    "forward1", "forward2", "forward3", "left45", "left90", "left180", "right45", "right90",
    "right180",
];

fn arb_command() -> impl Strategy<Value = String> {
    prop::sample::select(COMMANDS.to_vec()).prop_map(|s| s.to_string())
}

fn arb_coord() -> impl Strategy<Value = f64> {
    (-26i32..=26).prop_map(|n| n as f64)
}

fn arb_path_segment() -> impl Strategy<Value = PathSegment> {
    (arb_coord(), arb_coord(), arb_coord(), arb_coord()).prop_map(|(x1, y1, x2, y2)| PathSegment {
        x1,
        y1,
        x2,
        y2,
    })
}

fn arb_character_state() -> impl Strategy<Value = CharacterState> {
    (
        arb_coord(),
        arb_coord(),
        0i32..8,
        prop::collection::vec(arb_path_segment(), 0..8),
    )
        .prop_map(|(x, y, eighth, path)| {
            CharacterState::new(x, y, eighth as f64 * 45.0, path)
        })
}

proptest! {
    #[test]
    fn compact_program_text_round_trips(
        tokens in prop::collection::vec(arb_command(), 0..40)
    ) {
        let text = program::encode_compact(&tokens);
        prop_assert_eq!(program::deserialize(&text).unwrap(), tokens);
    }

    #[test]
    fn character_state_round_trips(state in arb_character_state()) {
        let text = character::serialize(&state).unwrap();
        prop_assert_eq!(character::deserialize(&text).unwrap(), state);
    }

    #[test]
    fn wrap_lands_in_range_and_preserves_congruence(
        start in -100i32..100,
        width in 1i32..100,
        val in -10_000.0..10_000.0f64,
    ) {
        let start = start as f64;
        let stop = start + width as f64;
        let wrapped = wrap(start, stop, val);

        prop_assert!(wrapped >= start);
        prop_assert!(wrapped < stop);
        // val and wrapped differ by a whole number of range-widths
        let turns = (val - wrapped) / (stop - start);
        prop_assert!((turns - turns.round()).abs() < 1e-9);
    }

    #[test]
    fn counter_tracks_logical_step_across_inserts(
        tokens in prop::collection::vec(arb_command(), 1..20),
        counter_seed in any::<usize>(),
        index_seed in any::<usize>(),
        inserted in arb_command(),
    ) {
        let counter = counter_seed % tokens.len();
        let index = index_seed % (tokens.len() + 1);
        let before = ProgramSequence::new(tokens, counter);
        let pointed_at = before.current_step().map(|s| s.to_string());

        let after = before.insert_step(index, &inserted);

        prop_assert_eq!(after.step_count(), before.step_count() + 1);
        if index <= counter {
            prop_assert_eq!(after.program_counter(), counter + 1);
        } else {
            prop_assert_eq!(after.program_counter(), counter);
        }
        prop_assert_eq!(
            after.current_step().map(|s| s.to_string()),
            pointed_at
        );
    }

    #[test]
    fn counter_tracks_logical_step_across_deletes(
        tokens in prop::collection::vec(arb_command(), 2..20),
        counter_seed in any::<usize>(),
        index_seed in any::<usize>(),
    ) {
        let counter = counter_seed % tokens.len();
        let index = index_seed % tokens.len();
        let before = ProgramSequence::new(tokens, counter);

        let after = before.delete_step(index);

        prop_assert_eq!(after.step_count(), before.step_count() - 1);
        if index < counter {
            prop_assert_eq!(after.program_counter(), counter - 1);
            // Deleting before the counter keeps it on the same step
            prop_assert_eq!(
                after.current_step().map(|s| s.to_string()),
                before.current_step().map(|s| s.to_string())
            );
        } else {
            prop_assert_eq!(after.program_counter(), counter);
        }
    }
}

#[test]
fn compact_and_mnemonic_encodings_stay_distinct() {
    // Compact form: one character per token
    assert_eq!(program::deserialize("2").unwrap(), vec!["forward2"]);
    // Mnemonic form: short mnemonics, different alphabet
    assert_eq!(program::serialize(&["forward2"]), "f2");
    assert_eq!(program::serialize::<&str>(&[]), "");
    assert_eq!(program::serialize(&["forward1"]), "f1");
}

#[test]
fn character_state_scenario_round_trip() {
    let state = CharacterState::new(0.0, 1.0, 90.0, vec![]);
    assert_eq!(character::serialize(&state).unwrap(), "0ab");
    assert_eq!(character::deserialize("0ab").unwrap(), state);
}

#[test]
fn wrap_scenarios() {
    assert_eq!(wrap(0.0, 10.0, -13.0), 7.0);
    assert_eq!(wrap(-20.0, -10.0, -33.0), -13.0);
}
