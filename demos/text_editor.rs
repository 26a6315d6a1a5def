//! Text Editor History
//!
//! This example shows how a new edit after an undo forks the history and
//! discards the old redo branch, and how a view falls back to an inert
//! projection when no store is mounted.
//!
//! Run with: RUST_LOG=superstate=debug cargo run --example text_editor

use superstate::{CallOptions, Store, StoreBuilder};
use tracing_subscriber::EnvFilter;

fn render(label: &str, store: &Store<String, char>) {
    let projection = store.projection();
    println!(
        "{label:<12} text = {:<6} can_undo = {:?}  can_redo = {:?}",
        format!("{:?}", projection.state()),
        projection.can_undo(),
        projection.can_redo()
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("superstate=info".parse()?))
        .init();

    println!("=== Text Editor History ===\n");

    let definition = StoreBuilder::<String, char>::new()
        .initial(String::new())
        .transition("type", |text: &String, c: Option<&char>| {
            let mut next = text.clone();
            next.extend(c);
            next
        })
        .expose_history_controls(true)
        .build()?;

    let detached = definition.project(None);
    println!(
        "Without a store: text = {:?}, actions inert = {}",
        detached.state(),
        detached.actions().is_inert()
    );
    detached.actions().call("type", Some('x'), CallOptions::undoable())?;
    println!("After typing into the detached view: {:?}\n", detached.state());

    let store = definition.create();
    let type_char = store.action("type")?;

    type_char.call(Some('a'), CallOptions::undoable())?;
    render("type 'a'", &store);
    type_char.call(Some('b'), CallOptions::undoable())?;
    render("type 'b'", &store);
    store.undo()?;
    render("undo", &store);
    type_char.call(Some('z'), CallOptions::undoable())?;
    render("type 'z'", &store);
    store.undo()?;
    render("undo", &store);
    store.redo()?;
    render("redo", &store);

    println!("\nThe 'ab' branch was discarded when 'z' was typed.");
    println!("\n=== Example Complete ===");
    Ok(())
}
