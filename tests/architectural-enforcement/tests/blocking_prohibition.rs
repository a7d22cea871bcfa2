//! Integration Test: No Sleep, No Blocking I/O
//!
//! **Policy**: Production code in `core` and `tui` MUST NOT sleep or use
//! blocking HTTP. The event loop waits on I/O (terminal events, fetch
//! completions, `tokio::time::interval` ticks) and nothing else.
//! **Exceptions**: test code (`#[cfg(test)]` modules and `tests/` directories).

use architectural_enforcement::find_violations;

const PRODUCTION_DIRS: [&str; 2] = ["core/src", "tui/src"];

fn report(kind: &str, violations: &[String]) {
    if violations.is_empty() {
        return;
    }

    eprintln!("\n{} found in production code:\n", kind);
    for violation in violations {
        eprintln!("  {}", violation);
    }
    panic!(
        "\nFound {} {} violation(s).\nFix these before merging!",
        violations.len(),
        kind
    );
}

#[test]
fn test_no_sleep_in_production_code() {
    let violations: Vec<String> = PRODUCTION_DIRS
        .iter()
        .flat_map(|dir| {
            find_violations(dir, |_, code| {
                code.contains("::sleep(") || code.contains(".sleep(")
            })
        })
        .collect();

    report("sleep call", &violations);
}

#[test]
fn test_no_blocking_http() {
    let violations: Vec<String> = PRODUCTION_DIRS
        .iter()
        .flat_map(|dir| find_violations(dir, |_, code| code.contains("reqwest::blocking")))
        .collect();

    report("blocking HTTP", &violations);
}

#[test]
fn test_no_blocking_terminal_polling() {
    // crossterm::event::poll/read block the thread; the App uses EventStream
    let violations = find_violations("tui/src", |_, code| {
        code.contains("event::poll(") || code.contains("event::read(")
    });

    report("blocking terminal read", &violations);
}
