//! Media Player State Machine
//!
//! This example demonstrates a flat machine with guard conditions and
//! transition notifications.
//!
//! Key concepts:
//! - Wildcard vs explicit-set guards
//! - Denied transitions reported as events, not errors
//! - Enter hooks observing the transition context
//!
//! Run with: cargo run --example media_player

use treestate::{EventKind, StateDef, StateMachine};

fn main() {
    println!("=== Media Player State Machine ===\n");

    let mut player = StateMachine::new();

    player
        .add_state(StateDef::new("stopped").on_enter(|_| println!("  [hook] stopped")))
        .unwrap();
    player
        .add_state(StateDef::new("playing").on_enter(|ctx| {
            println!("  [hook] playing (was {:?})", ctx.from);
        }))
        .unwrap();
    // Pausing only makes sense while playing.
    player
        .add_state(
            StateDef::new("paused")
                .from(["playing"])
                .on_enter(|_| println!("  [hook] paused")),
        )
        .unwrap();

    player.events().subscribe(EventKind::Denied, |event| {
        println!("  [event] denied: {event:?}");
    });
    player.events().subscribe(EventKind::Completed, |event| {
        println!("  [event] completed: {}", event.to_state());
    });

    println!("Setting initial state to 'stopped':");
    player.set_initial_state("stopped");

    println!("\nTrying to pause while stopped (guard rejects this):");
    player.change_state("paused");
    println!("Still in: {:?}", player.current_state_name());

    println!("\nPlaying, then pausing:");
    player.change_state("playing");
    player.change_state("paused");

    println!("\nVisited states: {:?}", player.log().path());
    println!("\n=== Example Complete ===");
}
