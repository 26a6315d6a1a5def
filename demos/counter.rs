//! Counter With Undo
//!
//! This example drives a counter store through increments, undos and redos.
//!
//! Key concepts:
//! - Undoability is chosen per call
//! - Undo and redo saturate at the ends of history
//! - Subscribers are notified once per effective dispatch
//!
//! Run with: RUST_LOG=superstate=debug cargo run --example counter

use superstate::{CallOptions, Projection, StoreBuilder};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Debug, Default)]
struct Counter {
    count: i64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("superstate=info".parse()?))
        .init();

    println!("=== Counter With Undo ===\n");

    let definition = StoreBuilder::<Counter, i64>::new()
        .initial(Counter::default())
        .transition("increment", |c: &Counter, by: Option<&i64>| Counter {
            count: c.count + by.copied().unwrap_or(1),
        })
        .expose_history_controls(true)
        .build()?;

    let store = definition.create();
    store.subscribe(|projection: &Projection<Counter, i64>| {
        println!(
            "  count = {:>2}  can_undo = {:?}  can_redo = {:?}",
            projection.state().count,
            projection.can_undo(),
            projection.can_redo()
        );
    });

    let increment = store.action("increment")?;

    println!("Two undoable increments:");
    increment.call(None, CallOptions::undoable())?;
    increment.call(None, CallOptions::undoable())?;

    println!("\nUndo twice, then once more at the start (no notification):");
    store.undo()?;
    store.undo()?;
    store.undo()?;

    println!("\nRedo twice:");
    store.redo()?;
    store.redo()?;

    println!("\nIn-place increment by 10 (folded into the current step):");
    increment.call(Some(10), CallOptions::in_place())?;

    println!("\nUndo removes both the last increment and the folded one:");
    store.undo()?;

    println!("\n=== Example Complete ===");
    Ok(())
}
