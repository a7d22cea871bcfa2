//! TextBlock Widget
//!
//! A borderless block of wrapped text, clipped to its area.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;
use textwrap::wrap;

/// Wrapped, clipped text
pub struct TextBlock<'a> {
    content: &'a str,
    style: Style,
}

impl<'a> TextBlock<'a> {
    pub fn new(content: &'a str) -> Self {
        Self {
            content,
            style: Style::default(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Wrap the content to `width` columns
    pub fn lines(&self, width: u16) -> Vec<String> {
        if width == 0 {
            return Vec::new();
        }
        self.content
            .lines()
            .flat_map(|line| {
                if line.is_empty() {
                    vec![String::new()]
                } else {
                    wrap(line, width as usize)
                        .into_iter()
                        .map(|cow| cow.to_string())
                        .collect()
                }
            })
            .collect()
    }

    /// Rows needed at `width`
    pub fn height(&self, width: u16) -> u16 {
        self.lines(width).len().min(u16::MAX as usize) as u16
    }
}

impl Widget for TextBlock<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (i, line) in self
            .lines(area.width)
            .iter()
            .take(area.height as usize)
            .enumerate()
        {
            let y = area.y + i as u16;
            buf.set_stringn(area.x, y, line, area.width as usize, self.style);
        }
    }
}
