//! Basic Calculator Session
//!
//! This example drives a scripted session through the calculator shell.
//!
//! Key concepts:
//! - Keyboard input classified into tokens
//! - Left-to-right chaining (`3 + 2 +` evaluates on the second `+`)
//! - Division-by-zero recovery (error, then a clean slate)
//! - The newest-first history tape
//!
//! Run with: cargo run --example basic_session

use tally::shell::{Session, TextSurface};

fn press(session: &mut Session<TextSurface>, keys: &[&str]) {
    for key in keys {
        session.dispatch_key(key);
        println!(
            "  key {key:>9}  ->  display: {:<16} expression: {:?}",
            session.surface().primary,
            session.surface().expression
        );
    }
}

fn main() {
    println!("=== Tally: Basic Session ===\n");

    let mut session = Session::new(TextSurface::new());

    println!("Typing 12.5:");
    press(&mut session, &["1", "2", ".", "5"]);

    println!("\nChained calculation 12.5 + 2 + 4 = :");
    press(&mut session, &["+", "2", "+", "4", "="]);

    println!("\nDivision by zero 8 / 0 = :");
    press(&mut session, &["8", "/", "0", "="]);

    println!("\nThe error resets the slate; typing continues normally:");
    press(&mut session, &["6", "x", "7", "="]);

    println!("\nHistory tape (newest first):");
    for record in session.tape().records() {
        println!("  {} = {}", record.expression, record.result);
    }

    println!("\n=== Example Complete ===");
}
