//! Monster AI State Machine
//!
//! This example demonstrates a hierarchical machine: nested attack states
//! with enter/exit hooks firing along the ancestor path. It mirrors the
//! simplified Quake-style monster controller.
//!
//! Key concepts:
//! - Nested states (attack -> melee attack -> punch/smash)
//! - Exit hooks running innermost to outermost
//! - Enter hooks running outermost to innermost
//!
//! Run with: cargo run --example monster_ai

use treestate::{StateDef, StateMachine};

fn main() {
    println!("=== Monster AI State Machine ===\n");

    let mut monster = StateMachine::new();

    monster
        .add_state(StateDef::new("idle").from(["smash", "punch", "missile attack"]))
        .unwrap();
    monster
        .add_state(
            StateDef::new("attack")
                .from(["idle"])
                .on_enter(|_| println!("  enter: attack"))
                .on_exit(|_| println!("  exit:  attack")),
        )
        .unwrap();
    monster
        .add_state(
            StateDef::new("melee attack")
                .parent("attack")
                .from(["attack"])
                .on_enter(|_| println!("  enter: melee attack"))
                .on_exit(|_| println!("  exit:  melee attack")),
        )
        .unwrap();
    monster
        .add_state(
            StateDef::new("punch")
                .parent("melee attack")
                .on_enter(|_| println!("  enter: punch"))
                .on_exit(|_| println!("  exit:  punch")),
        )
        .unwrap();
    monster
        .add_state(StateDef::new("smash").parent("melee attack"))
        .unwrap();
    monster
        .add_state(StateDef::new("missile attack").parent("attack"))
        .unwrap();
    monster
        .add_state(StateDef::new("die").from(["smash", "punch", "missile attack"]))
        .unwrap();

    monster.set_initial_state("idle");
    println!("Initial state: {:?}", monster.current_state_name());

    println!("\nidle -> punch (enters attack, melee attack, punch):");
    monster.change_state("punch");

    println!("\npunch -> smash (siblings: only punch exits, smash enters):");
    monster.change_state("smash");

    println!("\nsmash -> die (exits smash, melee attack, attack):");
    monster.change_state("die");

    println!("\nVisited states: {:?}", monster.log().path());
    println!("\n=== Example Complete ===");
}
