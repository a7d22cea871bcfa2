//! Result Extraction
//!
//! Scrapes item blocks out of the HTML fragment embedded in the search
//! envelope. The fragment is split at every item anchor first and each block
//! is matched on its own, so a block missing a span can never borrow spans or
//! a title from the block after it.
//!
//! Blocks that don't carry all five groups (link, three metadata spans,
//! title) are skipped without a trace. The pattern is tied to the upstream
//! markup; if the site changes its layout this yields nothing and the fetcher
//! reports it as "no results".

use std::sync::LazyLock;

use regex::Regex;

/// Opening tag of every item block in the fragment
const ITEM_OPENER: &str = r#"<a class="item""#;

/// Separator between metadata spans in the subtitle
const SUBTITLE_SEPARATOR: &str = "  ";

static ITEM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"(?s)\A<a class="item" href="([^"]+)">"#,
        r#".*?<span>([^<]+)</span>"#,
        r#".*?<span>([^<]+)</span>"#,
        r#".*?<span>([^<]+)</span>"#,
        r#".*?<div class="title">([^<]+)</div>"#,
    ))
    .expect("item pattern is valid")
});

/// One scraped search result
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// Display title
    pub title: String,
    /// Media kind, year/season and duration/episodes joined for display
    pub subtitle: String,
    /// Path relative to the site root (e.g. `/watch/x1`)
    pub target_path: String,
}

impl SearchResult {
    /// Absolute URL of this result under `base_url`
    pub fn url(&self, base_url: &str) -> String {
        let base = base_url.trim_end_matches('/');
        if self.target_path.starts_with('/') {
            format!("{}{}", base, self.target_path)
        } else {
            format!("{}/{}", base, self.target_path)
        }
    }
}

/// Extract every well-formed item block from `html`, in source order
pub fn extract(html: &str) -> Vec<SearchResult> {
    item_blocks(html).filter_map(parse_block).collect()
}

/// Split the fragment into slices that each start at an item anchor
fn item_blocks(html: &str) -> impl Iterator<Item = &str> {
    let starts: Vec<usize> = html.match_indices(ITEM_OPENER).map(|(i, _)| i).collect();
    let ends: Vec<usize> = starts
        .iter()
        .skip(1)
        .copied()
        .chain(std::iter::once(html.len()))
        .collect();

    starts
        .into_iter()
        .zip(ends)
        .map(move |(start, end)| &html[start..end])
}

fn parse_block(block: &str) -> Option<SearchResult> {
    let caps = ITEM_RE.captures(block)?;
    let field = |i: usize| caps.get(i).map(|m| m.as_str().trim());

    let target_path = field(1)?;
    let meta = [field(2)?, field(3)?, field(4)?];
    let title = field(5)?;

    Some(SearchResult {
        title: title.to_string(),
        subtitle: meta.join(SUBTITLE_SEPARATOR),
        target_path: target_path.to_string(),
    })
}
