//! Rendering Tests
//!
//! Drive a session into each mode and draw it into an in-memory buffer.
//! Assertions look at the text of the frame (and a few styles), not at
//! exact positions, so layout tweaks don't break them.

use pretty_assertions::assert_eq;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Modifier;

use movcli_core::{
    Command, FetchError, Key, Mode, PendingFetch, SearchResult, Session, SessionEvent,
};
use movcli_tui::render::render;
use movcli_tui::theme::{Theme, ACCENT_YELLOW};

const BASE: &str = "https://movhub.ws";

// ============================================================================
// Helpers
// ============================================================================

fn session(width: u16, height: u16) -> Session {
    let mut s = Session::new(BASE, 100);
    s.handle(SessionEvent::Resize { width, height });
    s
}

fn type_text(s: &mut Session, text: &str) {
    for c in text.chars() {
        s.handle(SessionEvent::char(c));
    }
}

fn key(s: &mut Session, key: Key) {
    s.handle(SessionEvent::Key(key));
}

fn submit(s: &mut Session, query: &str) -> PendingFetch {
    type_text(s, query);
    match s.handle(SessionEvent::Key(Key::Enter)) {
        Some(Command::Fetch(token)) => token,
        other => panic!("expected a fetch, got {:?}", other),
    }
}

fn item(title: &str, year: u32) -> SearchResult {
    SearchResult {
        title: title.to_string(),
        subtitle: format!("Movie  {}  120m", year),
        target_path: format!("/watch/{}", title.to_lowercase().replace(' ', "-")),
    }
}

fn showing(width: u16, height: u16, items: Vec<SearchResult>) -> Session {
    let mut s = session(width, height);
    let token = submit(&mut s, "alien");
    s.handle(SessionEvent::FetchCompleted {
        token,
        outcome: Ok(items),
    });
    assert_eq!(s.mode(), Mode::Showing);
    s
}

fn failed(width: u16, height: u16, error: FetchError) -> Session {
    let mut s = session(width, height);
    let token = submit(&mut s, "alien");
    s.handle(SessionEvent::FetchCompleted {
        token,
        outcome: Err(error),
    });
    assert_eq!(s.mode(), Mode::Failed);
    s
}

fn draw(s: &Session, width: u16, height: u16) -> Buffer {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    render(s, &Theme::DEFAULT, area, &mut buf);
    buf
}

/// Frame text, one string per row
fn rows(buf: &Buffer) -> Vec<String> {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

fn screen(buf: &Buffer) -> String {
    rows(buf).join("\n")
}

/// Position of the first occurrence of `needle` as (column, row)
fn find(buf: &Buffer, needle: &str) -> Option<(u16, u16)> {
    rows(buf).iter().enumerate().find_map(|(y, row)| {
        row.find(needle)
            .map(|byte| (row[..byte].chars().count() as u16, y as u16))
    })
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn test_nothing_is_drawn_before_first_resize() {
    let s = Session::new(BASE, 100);
    let area = Rect::new(0, 0, 80, 24);
    let mut buf = Buffer::empty(area);
    render(&s, &Theme::DEFAULT, area, &mut buf);
    assert_eq!(buf, Buffer::empty(area));
}

#[test]
fn test_input_screen() {
    let s = session(100, 30);
    let buf = draw(&s, 100, 30);
    let text = screen(&buf);

    assert!(text.contains("MOVCLI"));
    assert!(text.contains("stream anything from your terminal"));
    assert!(text.contains("SEARCH"));
    assert!(text.contains("> search title..."));
    assert!(text.contains("ENTER"));
    assert!(text.contains("CTRL+C"));

    let (x, y) = find(&buf, "MOVCLI").unwrap();
    assert_eq!(buf[(x, y)].fg, ACCENT_YELLOW);
}

#[test]
fn test_input_shows_typed_query_and_cursor() {
    let mut s = session(100, 30);
    type_text(&mut s, "alien");
    key(&mut s, Key::Left);
    let buf = draw(&s, 100, 30);

    assert!(!screen(&buf).contains("search title..."));
    let (x, y) = find(&buf, "> alien").unwrap();
    // Cursor sits on the "n"
    let cursor = &buf[(x + 6, y)];
    assert_eq!(cursor.symbol(), "n");
    assert_eq!(cursor.bg, ACCENT_YELLOW);
}

#[test]
fn test_long_query_scrolls_to_cursor() {
    let mut s = session(100, 30);
    let query = "a".repeat(60) + "END";
    type_text(&mut s, &query);
    let text = screen(&draw(&s, 100, 30));
    assert!(text.contains("aaaEND"));
}

#[test]
fn test_waiting_screen_spins() {
    let mut s = session(100, 30);
    submit(&mut s, "alien");

    assert!(screen(&draw(&s, 100, 30)).contains("| searching for \"alien\""));
    s.handle(SessionEvent::Tick);
    assert!(screen(&draw(&s, 100, 30)).contains("/ searching for \"alien\""));
    s.handle(SessionEvent::Tick);
    s.handle(SessionEvent::Tick);
    assert!(screen(&draw(&s, 100, 30)).contains("\\ searching for \"alien\""));
}

#[test]
fn test_results_screen() {
    let s = showing(100, 30, vec![item("Alien", 1979), item("Aliens", 1986)]);
    let buf = draw(&s, 100, 30);
    let text = screen(&buf);

    assert!(text.contains("RESULTS"));
    assert!(text.contains("2 results for \"alien\""));
    assert!(text.contains("> Alien"));
    assert!(text.contains("  Aliens"));
    assert!(text.contains("Movie  1979  120m"));
    assert!(text.contains("navigate"));
    assert!(text.contains("filter"));

    let (x, y) = find(&buf, "> Alien").unwrap();
    let selected = &buf[(x + 2, y)];
    assert_eq!(selected.fg, ACCENT_YELLOW);
    assert!(selected.modifier.contains(Modifier::BOLD));
}

#[test]
fn test_results_highlight_follows_navigation() {
    let mut s = showing(100, 30, vec![item("Alien", 1979), item("Aliens", 1986)]);
    key(&mut s, Key::Down);
    let text = screen(&draw(&s, 100, 30));

    assert!(text.contains("> Aliens"));
    assert!(!text.contains("> Alien "));
}

#[test]
fn test_results_list_scrolls() {
    let items: Vec<_> = (1..=20)
        .map(|n| item(&format!("Title {:02}", n), 2000))
        .collect();
    // 16 rows leave 9 list rows: three entries per page
    let mut s = showing(80, 16, items);
    key(&mut s, Key::End);
    let text = screen(&draw(&s, 80, 16));

    assert!(text.contains("> Title 20"));
    assert!(text.contains("Title 18"));
    assert!(!text.contains("Title 17"));
    assert!(!text.contains("Title 01"));
    // The header still counts everything
    assert!(text.contains("20 results for \"alien\""));
}

#[test]
fn test_long_titles_are_truncated_to_list_width() {
    let title = "An Extremely Long Title ".repeat(10);
    let s = showing(60, 20, vec![item(&title, 2001)]);
    let buf = draw(&s, 60, 20);

    let (_, y) = find(&buf, "> An Extremely").unwrap();
    let row = &rows(&buf)[y as usize];
    assert!(row.contains('…'));
}

#[test]
fn test_filter_line_replaces_hints() {
    let mut s = showing(100, 30, vec![item("Alien", 1979), item("Predator", 1987)]);
    key(&mut s, Key::Char('/'));
    type_text(&mut s, "pred");
    let text = screen(&draw(&s, 100, 30));

    assert!(text.contains("filter: pred"));
    assert!(!text.contains("navigate"));
    assert!(text.contains("> Predator"));
    assert!(!text.contains("Alien "));
    // The count is of everything fetched
    assert!(text.contains("2 results for \"alien\""));
}

#[test]
fn test_filter_without_matches() {
    let mut s = showing(100, 30, vec![item("Alien", 1979)]);
    key(&mut s, Key::Char('/'));
    type_text(&mut s, "zzz");
    assert!(screen(&draw(&s, 100, 30)).contains("no matches"));
}

#[test]
fn test_error_screen() {
    let s = failed(
        100,
        30,
        FetchError::Network("request timed out after 10s".to_string()),
    );
    let buf = draw(&s, 100, 30);
    let text = screen(&buf);

    assert!(text.contains("ERROR"));
    assert!(text.contains("network error: request timed out after 10s"));
    assert!(text.contains("press ESC to go back"));
}

#[test]
fn test_error_message_wraps() {
    let long = "connection refused ".repeat(8);
    let s = failed(100, 30, FetchError::Network(long));
    let text = screen(&draw(&s, 100, 30));

    let lines_with_message = text
        .lines()
        .filter(|l| l.contains("connection refused"))
        .count();
    assert!(lines_with_message >= 3);
    assert!(text.contains("press ESC to go back"));
}

#[test]
fn test_no_results_message() {
    let s = failed(100, 30, FetchError::NoResults("batman".to_string()));
    assert!(screen(&draw(&s, 100, 30)).contains("no results for \"batman\""));
}

#[test]
fn test_tiny_areas_never_panic() {
    let sessions = vec![
        session(1, 1),
        {
            let mut s = session(1, 1);
            submit(&mut s, "alien");
            s
        },
        showing(1, 1, vec![item("Alien", 1979)]),
        failed(1, 1, FetchError::Decode("unexpected token".to_string())),
    ];

    for s in &sessions {
        for (w, h) in [(1, 1), (2, 2), (5, 3), (9, 4), (20, 7), (58, 11)] {
            draw(s, w, h);
        }
    }
}

#[test]
fn test_render_does_not_depend_on_draw_count() {
    let s = showing(100, 30, vec![item("Alien", 1979)]);
    assert_eq!(draw(&s, 100, 30), draw(&s, 100, 30));
}
