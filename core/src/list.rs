//! Result List State
//!
//! Highlight, scroll offset and filter for the Showing screen. Indices here
//! are positions in the *visible* (filtered) list, not in the raw items.

use crate::extract::SearchResult;

/// Rows taken by one entry (title + metadata)
pub const ITEM_HEIGHT: u16 = 2;

/// Blank rows between entries
pub const ITEM_SPACING: u16 = 1;

/// Rows of the Showing screen that are not list rows
pub const LIST_CHROME_ROWS: u16 = 7;

/// Horizontal margin around the list
pub const LIST_SIDE_MARGIN: u16 = 8;

/// Widest the list gets on large terminals
pub const MAX_LIST_WIDTH: u16 = 84;

/// Terminal dimensions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Width of the result list
    pub fn list_width(&self) -> u16 {
        self.width.saturating_sub(LIST_SIDE_MARGIN).min(MAX_LIST_WIDTH)
    }

    /// Rows available to list entries
    pub fn list_rows(&self) -> u16 {
        self.height.saturating_sub(LIST_CHROME_ROWS)
    }

    /// Number of entries that fit at once (never zero)
    pub fn page_size(&self) -> usize {
        let stride = ITEM_HEIGHT + ITEM_SPACING;
        // The last entry needs no trailing spacing
        (((self.list_rows() + ITEM_SPACING) / stride) as usize).max(1)
    }
}

/// Title filter on the result list
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Filter {
    /// Showing everything
    #[default]
    Off,
    /// User is typing the filter
    Editing(String),
    /// Filter accepted and in effect
    Applied(String),
}

impl Filter {
    /// The filter text, if any
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Off => None,
            Self::Editing(text) | Self::Applied(text) => Some(text),
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing(_))
    }

    /// Case-insensitive substring match on the title
    pub fn matches(&self, item: &SearchResult) -> bool {
        match self.text() {
            None => true,
            Some(text) if text.is_empty() => true,
            Some(text) => item.title.to_lowercase().contains(&text.to_lowercase()),
        }
    }
}

/// Navigation state of the result list
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListState {
    /// Highlighted position in the visible list
    pub highlighted: usize,
    /// First visible position
    pub offset: usize,
    /// Title filter
    pub filter: Filter,
}

impl ListState {
    /// Indices into `items` that pass the filter, in order
    pub fn visible_indices(&self, items: &[SearchResult]) -> Vec<usize> {
        items
            .iter()
            .enumerate()
            .filter(|(_, item)| self.filter.matches(item))
            .map(|(i, _)| i)
            .collect()
    }

    /// The highlighted item, if the visible list isn't empty
    pub fn selected<'a>(&self, items: &'a [SearchResult]) -> Option<&'a SearchResult> {
        self.visible_indices(items)
            .get(self.highlighted)
            .map(|&i| &items[i])
    }

    /// Move up one entry, wrapping to the bottom
    pub fn move_up(&mut self, len: usize, page: usize) {
        if len == 0 {
            return;
        }
        self.highlighted = if self.highlighted == 0 {
            len - 1
        } else {
            self.highlighted - 1
        };
        self.scroll_into_view(len, page);
    }

    /// Move down one entry, wrapping to the top
    pub fn move_down(&mut self, len: usize, page: usize) {
        if len == 0 {
            return;
        }
        self.highlighted = (self.highlighted + 1) % len;
        self.scroll_into_view(len, page);
    }

    pub fn page_up(&mut self, len: usize, page: usize) {
        self.highlighted = self.highlighted.saturating_sub(page);
        self.scroll_into_view(len, page);
    }

    pub fn page_down(&mut self, len: usize, page: usize) {
        if len == 0 {
            return;
        }
        self.highlighted = (self.highlighted + page).min(len - 1);
        self.scroll_into_view(len, page);
    }

    pub fn first(&mut self, len: usize, page: usize) {
        self.highlighted = 0;
        self.scroll_into_view(len, page);
    }

    pub fn last(&mut self, len: usize, page: usize) {
        self.highlighted = len.saturating_sub(1);
        self.scroll_into_view(len, page);
    }

    /// Reset highlight and scroll (after the visible set changed)
    pub fn reset_position(&mut self) {
        self.highlighted = 0;
        self.offset = 0;
    }

    /// Clamp highlight and offset so the highlight is on screen
    pub fn scroll_into_view(&mut self, len: usize, page: usize) {
        let page = page.max(1);
        if len == 0 {
            self.reset_position();
            return;
        }
        self.highlighted = self.highlighted.min(len - 1);
        if self.highlighted < self.offset {
            self.offset = self.highlighted;
        } else if self.highlighted >= self.offset + page {
            self.offset = self.highlighted + 1 - page;
        }
        self.offset = self.offset.min(len.saturating_sub(page));
    }
}
