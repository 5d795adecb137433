use std::{cell::Cell, fmt::Display};

use crate::terminal::{banner, colors, format::Detail, logging::PRINT_TARGET};
use colored::*;
use tracing::info;

pub const TOTAL_WIDTH: usize = 64;

thread_local! {
    static KEY_WIDTH: Cell<usize> = const { Cell::new(0) }
}

#[macro_export]
macro_rules! mprint {
    () => {
        $crate::terminal::print::print("");
    };
    ($msg:expr) => {
        $crate::terminal::print::print($msg);
    };
}

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, "{msg}");
}

/// A full-width line of `fill`, with `label` centered in it when given.
fn rule(fill: &str, label: Option<ColoredString>) -> String {
    let Some(label) = label else {
        return fill.repeat(TOTAL_WIDTH).bright_black().to_string();
    };

    let spare = TOTAL_WIDTH.saturating_sub(console::measure_text_width(&label.to_string()));
    let left = spare / 2;
    format!(
        "{}{}{}",
        fill.repeat(left).bright_black(),
        label,
        fill.repeat(spare - left).bright_black()
    )
}

pub fn banner(no_banner: bool, q_level: u8) {
    if no_banner || q_level > 0 {
        return;
    }

    let title = format!("⟦ DUALSTACK v{} ⟧", env!("CARGO_PKG_VERSION"));
    print(&rule("═", Some(title.bright_green().bold())));
    banner::print();
}

/// Section title. Hidden from `-q` on.
pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }
    let title = format!("⟦ {} ⟧", msg.to_uppercase());
    print(&rule("─", Some(title.bright_green())));
}

pub fn fat_separator() {
    print(&rule("═", None));
}

pub fn end_of_program(q_level: u8) {
    if q_level == 0 {
        fat_separator();
    }
}

/// Pads the keys of following `aligned_line` calls to the longest of `keys`.
pub fn set_key_width(keys: &[&str]) {
    KEY_WIDTH.set(keys.iter().map(|key| key.len()).max().unwrap_or(0));
}

pub fn aligned_line(key: &str, value: impl Display) {
    let dots = ".".repeat((KEY_WIDTH.get() + 1).saturating_sub(key.len()));
    print_status(format!(
        "{}{}{} {}",
        key.color(colors::PRIMARY),
        dots.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR),
        value
    ));
}

pub fn print_status<T: AsRef<str>>(msg: T) {
    print(&format!(
        "{} {}",
        ">".color(colors::SEPARATOR),
        msg.as_ref().color(colors::TEXT_DEFAULT)
    ));
}

/// An indexed entry followed by one branch per detail.
pub fn tree(idx: usize, name: &str, details: Vec<Detail>) {
    print(&format!(
        "{}{}{} {}",
        "[".color(colors::SEPARATOR),
        idx.to_string().color(colors::ACCENT),
        "]".color(colors::SEPARATOR),
        name.color(colors::PRIMARY)
    ));
    branches(details);
}

/// Detail lines without an entry above them.
pub fn branches(details: Vec<Detail>) {
    let key_width = details.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    let count = details.len();

    for (i, (key, value)) in details.into_iter().enumerate() {
        let branch = if i + 1 == count { "└─" } else { "├─" };
        print(&format!(
            " {} {}{}{} {}",
            branch.bright_black(),
            key.color(colors::TEXT_DEFAULT),
            ".".repeat(key_width + 1 - key.len()).color(colors::SEPARATOR),
            ":".color(colors::SEPARATOR),
            value
        ));
    }
}

pub fn centerln(msg: &str) {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    print(&format!("{space}{msg}{space}"));
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
