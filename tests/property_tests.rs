//! Property-based tests for the guard predicate and path computation.
//!
//! These tests use proptest to verify that the transition rules hold across
//! many generated hierarchies and name sets, not just the handful of shapes
//! the unit tests pin down.

use proptest::prelude::*;
use treestate::{Guard, StateDef, StateMachine, TransitionPath};

/// Register a linear lineage `<prefix>0 -> <prefix>1 -> ...`, each state the
/// parent of the next, and return the names by depth.
fn add_chain(machine: &mut StateMachine, prefix: &str, len: usize) -> Vec<String> {
    let names: Vec<String> = (0..len).map(|i| format!("{prefix}{i}")).collect();
    for (i, name) in names.iter().enumerate() {
        let def = if i == 0 {
            StateDef::new(name.as_str())
        } else {
            StateDef::new(name.as_str()).parent(names[i - 1].as_str())
        };
        machine.add_state(def).unwrap();
    }
    names
}

prop_compose! {
    fn lineage_with_two_depths()
        (len in 1usize..7)
        (len in Just(len), i in 0..len, j in 0..len)
        -> (usize, usize, usize)
    {
        (len, i, j)
    }
}

prop_compose! {
    fn two_lineages_with_depths()
        (a in 1usize..5, b in 1usize..5)
        (a in Just(a), b in Just(b), i in 0..a, j in 0..b)
        -> (usize, usize, usize, usize)
    {
        (a, b, i, j)
    }
}

proptest! {
    #[test]
    fn path_to_self_is_always_empty((len, i, _) in lineage_with_two_depths()) {
        let mut machine = StateMachine::new();
        let names = add_chain(&mut machine, "s", len);

        prop_assert_eq!(
            machine.transition_path(&names[i], &names[i]),
            Some(TransitionPath { exits: 0, enters: 0 })
        );
    }

    #[test]
    fn lineage_paths_meet_at_the_shallower_state((len, i, j) in lineage_with_two_depths()) {
        let mut machine = StateMachine::new();
        let names = add_chain(&mut machine, "s", len);

        // In a single lineage the common ancestor is whichever of the two
        // states sits higher; the counts are the depth differences.
        let meet = i.min(j);
        prop_assert_eq!(
            machine.transition_path(&names[i], &names[j]),
            Some(TransitionPath { exits: i - meet, enters: j - meet })
        );
    }

    #[test]
    fn disjoint_trees_are_crossed_fully((a, b, i, j) in two_lineages_with_depths()) {
        let mut machine = StateMachine::new();
        let left = add_chain(&mut machine, "left", a);
        let right = add_chain(&mut machine, "right", b);

        // No common ancestor: exit the whole source chain, enter the whole
        // target chain, each count including the endpoint itself.
        prop_assert_eq!(
            machine.transition_path(&left[i], &right[j]),
            Some(TransitionPath { exits: i + 1, enters: j + 1 })
        );
    }

    #[test]
    fn siblings_are_always_one_exit_one_enter(
        children in 2usize..6,
        picks in prop::collection::vec(0usize..6, 2)
    ) {
        let a = picks[0] % children;
        let b = picks[1] % children;
        prop_assume!(a != b);

        let mut machine = StateMachine::new();
        machine.add_state(StateDef::new("parent")).unwrap();
        let names: Vec<String> = (0..children).map(|i| format!("c{i}")).collect();
        for name in &names {
            machine
                .add_state(StateDef::new(name.as_str()).parent("parent"))
                .unwrap();
        }

        prop_assert_eq!(
            machine.transition_path(&names[a], &names[b]),
            Some(TransitionPath { exits: 1, enters: 1 })
        );
    }

    #[test]
    fn wildcard_guard_admits_everything_except_self(
        sources in prop::collection::hash_set("[a-z]{1,8}", 1..8),
        target in "[a-z]{1,8}"
    ) {
        let mut machine = StateMachine::new();
        machine.add_state(StateDef::new(target.as_str())).unwrap();
        for source in &sources {
            if source != &target {
                machine.add_state(StateDef::new(source.as_str())).unwrap();
            }
        }

        for source in &sources {
            prop_assert_eq!(
                machine.can_transition(source, &target),
                source != &target
            );
        }
    }

    #[test]
    fn from_set_guard_matches_membership(
        allowed in prop::collection::hash_set("[a-z]{1,8}", 0..6),
        candidate in "[a-z]{1,8}",
        target in "[A-Z]{1,8}"
    ) {
        let mut machine = StateMachine::new();
        machine
            .add_state(StateDef::new(target.as_str()).from(allowed.iter().cloned()))
            .unwrap();

        // Names are disjoint by construction (case), so candidate != target.
        prop_assert_eq!(
            machine.can_transition(&candidate, &target),
            allowed.contains(&candidate)
        );
    }

    #[test]
    fn guard_admits_agrees_with_set_membership(
        members in prop::collection::btree_set("[a-z]{1,8}", 0..8),
        probe in "[a-z]{1,8}"
    ) {
        let guard = Guard::from_states(members.iter().cloned());
        prop_assert_eq!(guard.admits(&probe), members.contains(&probe));
        prop_assert!(Guard::Any.admits(&probe));
    }
}
