//! Checkpoint and Resume
//!
//! This example captures a calculator session mid-entry, serializes it to
//! JSON, and resumes it in a brand-new session - the half-typed operand,
//! the pending operation, and the history tape all come back.
//!
//! Run with: cargo run --example checkpoint_resume

use tally::checkpoint::Checkpoint;
use tally::shell::{Session, TextSurface};

fn main() {
    println!("=== Tally: Checkpoint and Resume ===\n");

    let mut session = Session::new(TextSurface::new());

    println!("Working: 3 + 2 =, then starting 9 × 1.5 but stopping mid-entry");
    for key in ["3", "+", "2", "=", "9", "x", "1", ".", "5"] {
        session.dispatch_key(key);
    }
    println!("  display:    {}", session.surface().primary);
    println!("  expression: {}", session.surface().expression);
    println!("  tape:       {} record(s)", session.tape().len());

    let checkpoint = Checkpoint::capture(session.engine(), session.tape());
    let json = checkpoint.to_json().expect("checkpoint serializes");
    println!("\nCaptured checkpoint {} ({} bytes of JSON)", checkpoint.id, json.len());

    // Process restart: everything above is gone.
    drop(session);

    let (engine, tape) = Checkpoint::from_json(&json)
        .expect("checkpoint deserializes")
        .restore()
        .expect("checkpoint validates");
    let mut resumed = Session::resume(engine, tape, TextSurface::new());

    println!("\nResumed; finishing the multiplication with = :");
    resumed.dispatch_key("=");
    println!("  display: {}", resumed.surface().primary);

    println!("\nHistory tape (newest first):");
    for record in resumed.tape().records() {
        println!("  {} = {}", record.expression, record.result);
    }

    println!("\n=== Example Complete ===");
}
