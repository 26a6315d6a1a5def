//! Property-based tests for the history engine and store.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated command sequences.

use proptest::prelude::*;
use superstate::core::{CallOptions, Command, History, Transition};
use superstate::{Store, StoreBuilder};

type Digits = Vec<u8>;

fn push() -> Transition<Digits, u8> {
    Transition::new("push", |digits: &Digits, d: Option<&u8>| {
        let mut next = digits.clone();
        next.extend(d.copied());
        next
    })
}

#[derive(Clone, Debug)]
enum Op {
    Push { digit: u8, undoable: bool },
    Undo,
    Redo,
}

prop_compose! {
    fn arbitrary_push()(digit in 0..10u8, undoable in any::<bool>()) -> Op {
        Op::Push { digit, undoable }
    }
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => arbitrary_push(),
        1 => Just(Op::Undo),
        1 => Just(Op::Redo),
    ]
}

fn command(op: &Op) -> Command<Digits, u8> {
    match op {
        Op::Push { digit, undoable } => Command::apply(
            push(),
            Some(*digit),
            CallOptions {
                undoable: *undoable,
            },
        ),
        Op::Undo => Command::Undo,
        Op::Redo => Command::Redo,
    }
}

fn undoable_push(digit: u8) -> Command<Digits, u8> {
    Command::apply(push(), Some(digit), CallOptions::undoable())
}

fn run(ops: &[Op]) -> History<Digits> {
    let mut history = History::new(Vec::new());
    for op in ops {
        history.apply(&command(op)).unwrap();
    }
    history
}

fn snapshot(history: &History<Digits>) -> (Vec<Digits>, usize) {
    (
        history.states().into_iter().cloned().collect(),
        history.pointer(),
    )
}

fn store() -> Store<Digits, u8> {
    StoreBuilder::new()
        .initial(Vec::new())
        .add_transition(push())
        .expose_history_controls(true)
        .build()
        .unwrap()
        .create()
}

proptest! {
    #[test]
    fn invariants_hold_for_any_sequence(ops in prop::collection::vec(arbitrary_op(), 0..40)) {
        let history = run(&ops);

        prop_assert!(!history.is_empty());
        prop_assert!(history.pointer() < history.len());
        prop_assert!(history.initial().is_empty());
        prop_assert_eq!(history.can_undo(), history.pointer() > 0);
        prop_assert_eq!(history.can_redo(), history.pointer() < history.len() - 1);
    }

    #[test]
    fn undo_at_start_is_idempotent(ops in prop::collection::vec(arbitrary_op(), 0..20)) {
        let mut history = run(&ops);
        while history.can_undo() {
            history.apply(&Command::<Digits, u8>::Undo).unwrap();
        }
        let before = snapshot(&history);
        let revision = history.revision();

        history.apply(&Command::<Digits, u8>::Undo).unwrap();

        prop_assert_eq!(snapshot(&history), before);
        prop_assert_eq!(history.revision(), revision);
    }

    #[test]
    fn redo_at_end_is_idempotent(ops in prop::collection::vec(arbitrary_op(), 0..20)) {
        let mut history = run(&ops);
        while history.can_redo() {
            history.apply(&Command::<Digits, u8>::Redo).unwrap();
        }
        let before = snapshot(&history);

        history.apply(&Command::<Digits, u8>::Redo).unwrap();

        prop_assert_eq!(snapshot(&history), before);
    }

    #[test]
    fn undo_all_then_redo_all_round_trips(digits in prop::collection::vec(0..10u8, 1..15)) {
        let mut history = History::new(Vec::new());
        for digit in &digits {
            history.apply(&undoable_push(*digit)).unwrap();
        }
        let finished = history.current().clone();

        for _ in &digits {
            history.apply(&Command::<Digits, u8>::Undo).unwrap();
        }
        prop_assert!(history.current().is_empty());
        prop_assert!(!history.can_undo());

        for _ in &digits {
            history.apply(&Command::<Digits, u8>::Redo).unwrap();
        }
        prop_assert_eq!(history.current(), &finished);
        prop_assert!(!history.can_redo());
    }

    #[test]
    fn new_undoable_action_after_undo_discards_future(
        digits in prop::collection::vec(0..10u8, 1..10),
        undos in 1..10usize,
        digit in 0..10u8,
    ) {
        let mut history = History::new(Vec::new());
        for d in &digits {
            history.apply(&undoable_push(*d)).unwrap();
        }
        let undos = undos.min(digits.len());
        for _ in 0..undos {
            history.apply(&Command::<Digits, u8>::Undo).unwrap();
        }
        let kept: Vec<Digits> = history.states()[..=history.pointer()]
            .iter()
            .map(|s| (*s).clone())
            .collect();

        history.apply(&undoable_push(digit)).unwrap();

        prop_assert!(!history.can_redo());
        prop_assert_eq!(history.len(), kept.len() + 1);
        prop_assert_eq!(history.pointer(), kept.len());
        let states: Vec<Digits> = history.states().into_iter().cloned().collect();
        prop_assert_eq!(&states[..kept.len()], &kept[..]);
    }

    #[test]
    fn in_place_action_never_changes_shape(
        ops in prop::collection::vec(arbitrary_op(), 0..20),
        digit in 0..10u8,
    ) {
        let mut history = run(&ops);
        let (len, pointer) = (history.len(), history.pointer());
        let (can_undo, can_redo) = (history.can_undo(), history.can_redo());

        history
            .apply(&Command::apply(push(), Some(digit), CallOptions::in_place()))
            .unwrap();

        prop_assert_eq!(history.len(), len);
        prop_assert_eq!(history.pointer(), pointer);
        prop_assert_eq!(history.can_undo(), can_undo);
        prop_assert_eq!(history.can_redo(), can_redo);
        prop_assert_eq!(history.current().last(), Some(&digit));
    }

    #[test]
    fn reduce_matches_apply(ops in prop::collection::vec(arbitrary_op(), 0..20), next in arbitrary_op()) {
        let history = run(&ops);
        let mut applied = history.clone();

        let reduced = history.reduce(&command(&next)).unwrap();
        applied.apply(&command(&next)).unwrap();

        prop_assert_eq!(snapshot(&reduced), snapshot(&applied));
        prop_assert_eq!(snapshot(&history), snapshot(&run(&ops)));
    }

    #[test]
    fn store_projection_tracks_engine(ops in prop::collection::vec(arbitrary_op(), 0..30)) {
        let store = store();
        let actions = store.actions();
        for op in &ops {
            match op {
                Op::Push { digit, undoable } => actions
                    .call("push", Some(*digit), CallOptions { undoable: *undoable })
                    .unwrap(),
                Op::Undo => store.undo().unwrap(),
                Op::Redo => store.redo().unwrap(),
            }
        }

        let history = run(&ops);
        let projection = store.projection();
        prop_assert_eq!(projection.state(), history.current());
        prop_assert_eq!(projection.can_undo(), Some(history.can_undo()));
        prop_assert_eq!(projection.can_redo(), Some(history.can_redo()));
        prop_assert_eq!(projection.revision(), history.revision());
    }
}
