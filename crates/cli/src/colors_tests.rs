// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[test]
fn fg256_produces_correct_escape_sequence() {
    assert_eq!(fg256(0), "\x1b[38;5;0m");
    assert_eq!(fg256(114), "\x1b[38;5;114m");
}

#[test]
fn paint_disabled_returns_plain_text() {
    assert_eq!(paint(codes::HEADER, "Burndown", false), "Burndown");
}

#[test]
fn paint_enabled_wraps_with_reset() {
    assert_eq!(
        paint(codes::HEADER, "Burndown", true),
        "\x1b[38;5;74mBurndown\x1b[0m"
    );
}

#[test]
fn header_and_context_use_their_codes() {
    assert!(header("x", true).starts_with(&fg256(codes::HEADER)));
    assert!(context("x", true).starts_with(&fg256(codes::CONTEXT)));
}

#[parameterized(
    on_track = { SprintHealth::OnTrack, codes::GOOD, "on-track" },
    at_risk = { SprintHealth::AtRisk, codes::WARN, "at-risk" },
    behind = { SprintHealth::Behind, codes::BAD, "behind" },
)]
fn health_colors(value: SprintHealth, code: u8, label: &str) {
    assert_eq!(health_code(value), code);
    assert_eq!(health(value, false), label);
    assert_eq!(health(value, true), format!("{}{}{}", fg256(code), label, codes::RESET));
}
