//! Result List Screen
//!
//! ```text
//!                                       (margin)
//!  RESULTS   12 results for "alien"     header
//! ────────────────────────────────────  divider
//! > Alien                               entries: title + metadata,
//!   Movie  1979  117m                   one blank row between them
//!
//!   Aliens
//!   Movie  1986  137m
//! ────────────────────────────────────  divider
//!                                       (gap)
//!  UP/DOWN  navigate   ENTER  open ...  hints or filter
//!                                       (margin)
//! ```

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};

use movcli_core::list::{ITEM_HEIGHT, ITEM_SPACING};
use movcli_core::{Filter, Session, Viewport};

use super::{divider, hint_line, row, truncate};
use crate::theme::Theme;

/// Rows above the first entry
const LIST_TOP: u16 = 3;

pub(super) fn render_results(session: &Session, theme: &Theme, area: Rect, buf: &mut Buffer) {
    let viewport = Viewport::new(area.width, area.height);
    let width = viewport.list_width();
    if width == 0 {
        return;
    }
    let frame = Rect::new(
        area.x + (area.width - width) / 2,
        area.y,
        width,
        area.height,
    );
    let rows = viewport.list_rows();

    if let Some(r) = row(frame, 1) {
        let count = format!(
            "  {} results for \"{}\"",
            session.items().len(),
            session.searched_query()
        );
        let header = Line::from(vec![
            Span::styled(" RESULTS ", theme.list_header()),
            Span::styled(count, theme.count()),
        ]);
        buf.set_line(r.x, r.y, &header, r.width);
    }
    if let Some(r) = row(frame, 2) {
        divider(r, theme, buf);
    }

    if rows > 0 {
        let list_area = Rect::new(frame.x, frame.y + LIST_TOP, width, rows);
        render_entries(session, theme, list_area, buf);
    }

    if let Some(r) = row(frame, LIST_TOP + rows) {
        divider(r, theme, buf);
    }
    if let Some(r) = row(frame, LIST_TOP + rows + 2) {
        let footer = footer_line(session, theme);
        buf.set_line(r.x, r.y, &footer, r.width);
    }
}

fn render_entries(session: &Session, theme: &Theme, area: Rect, buf: &mut Buffer) {
    let visible = session.visible_items();
    if visible.is_empty() {
        if let Some(r) = row(area, 0) {
            buf.set_stringn(r.x, r.y, "  no matches", r.width as usize, theme.hint());
        }
        return;
    }

    let list = session.list();
    let text_width = area.width.saturating_sub(2) as usize;
    let stride = ITEM_HEIGHT + ITEM_SPACING;

    for (slot, (index, item)) in visible.iter().enumerate().skip(list.offset).enumerate() {
        let top = (slot as u16).saturating_mul(stride);
        let Some(title_row) = row(area, top) else {
            break;
        };

        let selected = index == list.highlighted;
        let (marker, title_style, desc_style) = if selected {
            ("> ", theme.selected_title(), theme.selected_desc())
        } else {
            ("  ", theme.normal_title(), theme.normal_desc())
        };

        let title = Line::from(vec![
            Span::styled(marker, title_style),
            Span::styled(truncate(&item.title, text_width), title_style),
        ]);
        buf.set_line(title_row.x, title_row.y, &title, title_row.width);

        if let Some(r) = row(area, top + 1) {
            let desc = Line::from(vec![
                Span::raw("  "),
                Span::styled(truncate(&item.subtitle, text_width), desc_style),
            ]);
            buf.set_line(r.x, r.y, &desc, r.width);
        }
    }
}

fn footer_line<'a>(session: &'a Session, theme: &Theme) -> Line<'a> {
    match &session.list().filter {
        Filter::Editing(text) => Line::from(vec![
            Span::styled("filter: ", theme.label()),
            Span::styled(text.as_str(), theme.body()),
            Span::styled(" ", theme.cursor()),
        ]),
        Filter::Applied(text) => {
            let mut line = Line::from(vec![
                Span::styled("filter: ", theme.label()),
                Span::styled(text.as_str(), theme.body()),
                Span::styled("   ", theme.hint()),
            ]);
            line.spans
                .extend(hint_line(theme, &[("ESC", "clear"), ("/", "edit")]).spans);
            line
        }
        Filter::Off => hint_line(
            theme,
            &[
                ("UP/DOWN", "navigate"),
                ("ENTER", "open"),
                ("ESC", "back"),
                ("/", "filter"),
            ],
        ),
    }
}
