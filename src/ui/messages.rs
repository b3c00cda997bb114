use ansi_term::Colour;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

static COLOR: AtomicBool = AtomicBool::new(true);

/// Enable or disable ANSI colours for every following message.
pub fn set_color(enabled: bool) {
    COLOR.store(enabled, Ordering::Relaxed);
}

fn prefix(colour: Colour, icon: &str) -> String {
    if COLOR.load(Ordering::Relaxed) {
        colour.bold().paint(icon).to_string()
    } else {
        icon.to_string()
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{} {}", prefix(Colour::Blue, ICON_INFO), msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{} {}", prefix(Colour::Green, ICON_OK), msg);
}

/// Warnings go to stderr so report output stays clean.
pub fn warning<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", prefix(Colour::Yellow, ICON_WARN), msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", prefix(Colour::Red, ICON_ERR), msg);
}
