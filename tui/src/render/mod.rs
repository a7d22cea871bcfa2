//! Session Rendering
//!
//! Draws a [`Session`] into a ratatui [`Buffer`]. Rendering is a pure
//! function of the session and the theme: it never mutates the session and
//! does no I/O, so it can be tested by drawing into `Buffer::empty`.
//!
//! Every screen clips to the area it is given; terminals smaller than a box
//! get a truncated box rather than a panic.

mod results;

use std::borrow::Cow;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Widget};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use movcli_core::{Mode, Session};

use crate::theme::Theme;
use crate::widgets::TextBlock;

/// Width of the centered boxes
pub const BOX_WIDTH: u16 = 58;

/// Spinner frames, advanced by ticks while waiting
pub const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

const LOGO: &str = "MOVCLI";
const TAGLINE: &str = "stream anything from your terminal";
const PLACEHOLDER: &str = "search title...";
const DIVIDER: &str = "─";

/// Draw the session's current screen
pub fn render(session: &Session, theme: &Theme, area: Rect, buf: &mut Buffer) {
    // Nothing to lay out until the terminal size is known
    if session.viewport().is_none() || area.is_empty() {
        return;
    }

    match session.mode() {
        Mode::Input => render_input(session, theme, area, buf),
        Mode::Waiting => render_waiting(session, theme, area, buf),
        Mode::Showing => results::render_results(session, theme, area, buf),
        Mode::Failed => render_failed(session, theme, area, buf),
    }
}

// ============================================================================
// Screens
// ============================================================================

fn render_input(session: &Session, theme: &Theme, area: Rect, buf: &mut Buffer) {
    // logo, tagline, divider, label, field, gap, hints + padding + borders
    let inner = boxed(centered(area, BOX_WIDTH, 11), theme.border(), buf);

    if let Some(r) = row(inner, 0) {
        Line::styled(LOGO, theme.logo()).centered().render(r, buf);
    }
    if let Some(r) = row(inner, 1) {
        Line::styled(TAGLINE, theme.tagline()).centered().render(r, buf);
    }
    if let Some(r) = row(inner, 2) {
        divider(r, theme, buf);
    }
    if let Some(r) = row(inner, 3) {
        buf.set_stringn(r.x, r.y, "SEARCH", r.width as usize, theme.label());
    }
    if let Some(r) = row(inner, 4) {
        render_field(session, theme, r, buf);
    }
    if let Some(r) = row(inner, 6) {
        hint_line(theme, &[("ENTER", "search"), ("CTRL+C", "quit")])
            .centered()
            .render(r, buf);
    }
}

fn render_waiting(session: &Session, theme: &Theme, area: Rect, buf: &mut Buffer) {
    let inner = boxed(centered(area, BOX_WIDTH, 5), theme.border(), buf);

    if let Some(r) = row(inner, 0) {
        let frame = SPINNER_FRAMES[session.spinner_frame() % SPINNER_FRAMES.len()];
        let text = format!("{} searching for \"{}\"", frame, session.searched_query());
        Line::styled(truncate(&text, r.width as usize), theme.loading())
            .centered()
            .render(r, buf);
    }
}

fn render_failed(session: &Session, theme: &Theme, area: Rect, buf: &mut Buffer) {
    let message = session
        .last_error()
        .map(|e| e.to_string())
        .unwrap_or_default();
    let text = TextBlock::new(&message).style(theme.body());

    // Inner width of a full-size box
    let text_width = BOX_WIDTH.saturating_sub(8).min(area.width.saturating_sub(8));
    let body = text.height(text_width.max(1));
    // label, gap, message, gap, footer + padding + borders
    let height = body.saturating_add(8);
    let inner = boxed(centered(area, BOX_WIDTH, height), theme.error_border(), buf);

    if let Some(r) = row(inner, 0) {
        buf.set_stringn(r.x, r.y, "ERROR", r.width as usize, theme.label());
    }
    if inner.height > 2 {
        let message_area = Rect::new(
            inner.x,
            inner.y + 2,
            inner.width,
            body.min(inner.height - 2),
        );
        text.render(message_area, buf);
    }
    if let Some(r) = row(inner, body.saturating_add(3)) {
        buf.set_stringn(
            r.x,
            r.y,
            "press ESC to go back",
            r.width as usize,
            theme.hint(),
        );
    }
}

/// Search field: prompt, text scrolled to keep the cursor visible
fn render_field(session: &Session, theme: &Theme, r: Rect, buf: &mut Buffer) {
    let (x, _) = buf.set_stringn(r.x, r.y, "> ", r.width as usize, theme.prompt());
    let width = r.right().saturating_sub(x);
    if width == 0 {
        return;
    }

    let query = session.query();
    if query.is_empty() {
        buf.set_stringn(x, r.y, PLACEHOLDER, width as usize, theme.placeholder());
        buf[(x, r.y)].set_style(theme.cursor());
        return;
    }

    let chars: Vec<char> = query.value().chars().collect();
    let cursor = query.cursor().min(chars.len());
    let start = scroll_start(&chars, cursor, width as usize);

    let before: String = chars[start..cursor].iter().collect();
    let (x, _) = buf.set_stringn(x, r.y, &before, width as usize, theme.body());

    let under = chars.get(cursor).copied().unwrap_or(' ');
    let left = r.right().saturating_sub(x);
    let (x, _) = buf.set_stringn(x, r.y, under.to_string(), left as usize, theme.cursor());

    let after: String = chars.iter().skip(cursor + 1).collect();
    let left = r.right().saturating_sub(x);
    buf.set_stringn(x, r.y, &after, left as usize, theme.body());
}

// ============================================================================
// Helpers
// ============================================================================

/// A `width` x `height` rect centered in `area`, clamped to it
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Draw a rounded box and return its padded interior
fn boxed(area: Rect, border: Style, buf: &mut Buffer) -> Rect {
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(border)
        .padding(Padding::new(3, 3, 1, 1));
    let inner = block.inner(area);
    block.render(area, buf);
    inner
}

/// One-row rect `offset` rows into `area`, if it fits
fn row(area: Rect, offset: u16) -> Option<Rect> {
    (offset < area.height).then(|| Rect::new(area.x, area.y + offset, area.width, 1))
}

fn divider(r: Rect, theme: &Theme, buf: &mut Buffer) {
    buf.set_stringn(
        r.x,
        r.y,
        DIVIDER.repeat(r.width as usize),
        r.width as usize,
        theme.divider(),
    );
}

/// `KEY action  KEY action` with the keys as badges
fn hint_line(theme: &Theme, hints: &[(&str, &str)]) -> Line<'static> {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", theme.hint()));
        }
        spans.push(Span::styled(format!(" {} ", key), theme.key()));
        spans.push(Span::styled(format!(" {}", action), theme.hint()));
    }
    Line::from(spans)
}

/// First character to show so the cursor cell fits in `width` columns
fn scroll_start(chars: &[char], cursor: usize, width: usize) -> usize {
    let columns = |s: &[char]| s.iter().map(|c| c.width().unwrap_or(0)).sum::<usize>();
    let mut start = 0;
    while start < cursor && columns(&chars[start..cursor]) + 1 > width {
        start += 1;
    }
    start
}

/// Cut `text` to `width` columns, marking the cut with an ellipsis
pub fn truncate(text: &str, width: usize) -> Cow<'_, str> {
    if text.width() <= width {
        return Cow::Borrowed(text);
    }
    if width == 0 {
        return Cow::Borrowed("");
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    Cow::Owned(out)
}
