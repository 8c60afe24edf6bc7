//! Turn double-tap-to-wake on or off.
//!
//! Run with: cargo run --example toggle -- on [/path/to/node]
//!
//! The optional path is used when no FocalTech controller is found.
//! Writing a control node usually needs root.

use tapwake::{Config, GestureControl, Gestures};

fn main() -> tapwake::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let value = match args.next().as_deref() {
        Some("on" | "1") => true,
        Some("off" | "0") => false,
        _ => {
            eprintln!("usage: toggle on|off [node]");
            std::process::exit(2);
        }
    };

    let mut config = Config::default();
    if let Some(node) = args.next() {
        config = config.with_touchpanel_dt2w_node(node);
    }

    let mut gestures = Gestures::select(&config);
    if !gestures.supported() {
        eprintln!("Double-tap-to-wake is not supported on this device");
        return Ok(());
    }

    gestures.try_set_enabled(value)?;
    println!(
        "Double-tap-to-wake {} ({:?})",
        if gestures.enabled() { "enabled" } else { "disabled" },
        gestures.kind()
    );

    Ok(())
}
