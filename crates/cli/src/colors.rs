// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color utilities for text output.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use std::io::IsTerminal;

use zyro_core::SprintHealth;

use crate::env;

/// ANSI 256-color codes
pub mod codes {
    /// Section headers: pastel cyan/steel blue
    pub const HEADER: u8 = 74;
    /// Secondary details: medium grey
    pub const CONTEXT: u8 = 245;
    /// On-track health: soft green
    pub const GOOD: u8 = 114;
    /// At-risk health: amber
    pub const WARN: u8 = 179;
    /// Behind health: muted red
    pub const BAD: u8 = 167;

    pub const RESET: &str = "\x1b[0m";
}

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    if env::no_color() {
        return false;
    }

    if env::force_color() {
        return true;
    }

    std::io::stdout().is_terminal()
}

/// Format a 256-color ANSI escape sequence for foreground color.
fn fg256(code: u8) -> String {
    format!("\x1b[38;5;{code}m")
}

/// Wrap `text` in the given color when `enabled`.
pub fn paint(code: u8, text: &str, enabled: bool) -> String {
    if enabled {
        format!("{}{}{}", fg256(code), text, codes::RESET)
    } else {
        text.to_string()
    }
}

/// Apply header color (section titles) to text.
pub fn header(text: &str, enabled: bool) -> String {
    paint(codes::HEADER, text, enabled)
}

/// Apply context color (dates, secondary details) to text.
pub fn context(text: &str, enabled: bool) -> String {
    paint(codes::CONTEXT, text, enabled)
}

/// Color code for a health verdict.
pub fn health_code(health: SprintHealth) -> u8 {
    match health {
        SprintHealth::OnTrack => codes::GOOD,
        SprintHealth::AtRisk => codes::WARN,
        SprintHealth::Behind => codes::BAD,
    }
}

/// Render a health verdict, colored by severity.
pub fn health(health: SprintHealth, enabled: bool) -> String {
    paint(health_code(health), health.as_str(), enabled)
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
