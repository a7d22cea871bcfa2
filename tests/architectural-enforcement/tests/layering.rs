//! Integration Test: Layering
//!
//! **Policy**:
//! - `core` is headless. It knows nothing about terminals.
//! - The session is a pure state machine. It never spawns or does I/O; it
//!   returns commands instead.
//! - Rendering only reads the session and writes into a buffer.
//! - Only the App loop turns `Command::Fetch` into a task.

use std::path::Path;

use architectural_enforcement::find_violations;

fn assert_clean(rule: &str, violations: Vec<String>) {
    assert!(
        violations.is_empty(),
        "\n{}:\n  {}\n",
        rule,
        violations.join("\n  ")
    );
}

#[test]
fn test_core_has_no_terminal_dependencies() {
    let violations = find_violations("core/src", |_, code| {
        code.contains("ratatui") || code.contains("crossterm")
    });
    assert_clean("core must not depend on terminal crates", violations);
}

#[test]
fn test_session_does_no_io() {
    let io_markers = ["tokio::", "reqwest", "std::fs", "std::process", "std::net"];
    let violations = find_violations("core/src", |path, code| {
        path.ends_with("session.rs") && io_markers.iter().any(|m| code.contains(m))
    });
    assert_clean("the session must not perform I/O", violations);
}

#[test]
fn test_render_is_pure() {
    let forbidden = [
        "&mut Session",
        "std::fs",
        "std::io",
        "std::process",
        "tokio::",
        "println!",
        "spawn_fetch",
    ];
    let violations = find_violations("tui/src/render", |_, code| {
        forbidden.iter().any(|f| code.contains(f))
    });
    assert_clean("rendering must only read the session", violations);
}

#[test]
fn test_only_the_app_dispatches_fetches() {
    let violations = find_violations("tui/src", |path: &Path, code| {
        code.contains("spawn_fetch(") && !path.ends_with("app.rs")
    });
    assert_clean("fetches are dispatched from the App loop only", violations);
}
