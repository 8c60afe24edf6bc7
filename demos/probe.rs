//! Report what double-tap-to-wake support the system has.
//!
//! Run with: RUST_LOG=debug cargo run --example probe

use tapwake::{Config, GestureControl, Gestures, find_control_node};

fn main() {
    env_logger::init();

    match find_control_node() {
        Some(node) => println!("FocalTech control node: {}", node.display()),
        None => println!("No FocalTech control node found"),
    }

    let gestures = Gestures::select(&Config::default());
    println!("Backend: {:?}", gestures.kind());
    for name in gestures.property_names() {
        match gestures.property(name) {
            Ok(value) => println!("  {name} = {value:?}"),
            Err(e) => println!("  {name}: {e}"),
        }
    }
}
