//! Page layout the results site is expected to follow.
//!
//! Summary page (`total1.php`):
//! - the first `td` of the first `tr.eventInfoTitle` of the first
//!   `table.eventInfo` holds the event title. Later `eventInfo` tables are
//!   never consulted.
//! - `table.resultsTable` holds one header row then one row per team.
//!   Cell 1 is the team name (optionally an anchor to its detail page),
//!   cells from `vp_offset` onwards hold per-round VPs inside `<bdo>`, the
//!   last cell holds the penalty inside `<bdo>`.
//!
//! Detail page (`personal1.php`):
//! - one `table.mpersonal` per match, carrying an anchor with `round=N`.
//! - four header rows, then one row per board. Columns are found by CSS
//!   class, see the [`ColumnRule`] constants below.
//!
//! Site layout drift should only ever need changes in this file.

use scraper::{ElementRef, Selector};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

pub const DEFAULT_EVENT_TITLE: &str = "Bridge Competition Rankings";

pub const ROUND_PARAM: &str = "round=";
pub const MATCH_HEADER_ROWS: usize = 4;
pub const MIN_GAME_CELLS: usize = 6;
pub const NOT_PLAYED: &str = "NP";
pub const LEAD_FALLBACK_FROM_END: usize = 3;

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector must be valid")
}

pub static EVENT_INFO_TABLE: LazyLock<Selector> = LazyLock::new(|| selector("table.eventInfo"));
pub static EVENT_TITLE_ROW: LazyLock<Selector> = LazyLock::new(|| selector("tr.eventInfoTitle"));
pub static RESULTS_TABLE: LazyLock<Selector> = LazyLock::new(|| selector("table.resultsTable"));
pub static MATCH_TABLE: LazyLock<Selector> = LazyLock::new(|| selector("table.mpersonal"));
pub static ROUND_LINK: LazyLock<Selector> = LazyLock::new(|| selector("a[href*='round=']"));
pub static ROW: LazyLock<Selector> = LazyLock::new(|| selector("tr"));
pub static CELL: LazyLock<Selector> = LazyLock::new(|| selector("td"));
pub static ANCHOR: LazyLock<Selector> = LazyLock::new(|| selector("a"));
pub static TEXT_SPAN: LazyLock<Selector> = LazyLock::new(|| selector("bdo"));

/// Column geometry of the results table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultsLayout {
    pub name_cell: usize,
    pub vp_offset: usize,
    pub vp_window: usize,
    pub min_cells: usize,
}

impl Default for ResultsLayout {
    fn default() -> Self {
        Self {
            name_cell: 1,
            vp_offset: 4,
            vp_window: 28,
            min_cells: 5,
        }
    }
}

/// Selects the first cell of a row carrying `class` and none of `excluded`.
#[derive(Debug, Clone, Copy)]
pub struct ColumnRule {
    pub class: &'static str,
    pub excluded: &'static [&'static str],
}

impl ColumnRule {
    pub const fn new(class: &'static str) -> Self {
        Self {
            class,
            excluded: &[],
        }
    }

    pub const fn excluding(class: &'static str, excluded: &'static [&'static str]) -> Self {
        Self { class, excluded }
    }

    pub fn matches(&self, cell: &ElementRef) -> bool {
        let mut has_class = false;
        for class in cell.value().classes() {
            if self.excluded.contains(&class) {
                return false;
            }
            has_class |= class == self.class;
        }
        has_class
    }

    pub fn find<'a>(&self, cells: &[ElementRef<'a>]) -> Option<ElementRef<'a>> {
        cells.iter().find(|cell| self.matches(cell)).copied()
    }
}

/// Board number: anchor text of this cell, kept only if it has a digit.
pub const BOARD: ColumnRule = ColumnRule::new("rank");
/// Contract text. Empty or "NP" means the board was not played.
pub const CONTRACT: ColumnRule = ColumnRule::new("contract");
/// Opening lead: `<bdo>` text, then cell text, then the third-from-last cell.
pub const LEAD: ColumnRule = ColumnRule::new("lead");
/// IMP result. The per-side score columns also carry `res`-like classes.
pub const IMP: ColumnRule = ColumnRule::excluding("res", &["resns", "resew"]);

/// Text of an element with every text node trimmed, then concatenated.
pub fn stripped_text(element: &ElementRef) -> String {
    element.text().map(str::trim).collect()
}

/// Text of an element concatenated, then trimmed at the ends.
pub fn trimmed_text(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Trimmed text of the first `<bdo>` inside `element`.
pub fn text_span(element: &ElementRef) -> Option<String> {
    element.select(&TEXT_SPAN).next().map(|span| trimmed_text(&span))
}
