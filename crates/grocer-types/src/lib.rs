//! Shared value types for grocery item frequency tables.
//!
//! These types carry no I/O of their own; the loader crate produces them and
//! the command-line front end prints or serializes them. [`ItemCount`] is the
//! unit every listing yields, and [`SortOrder`] selects one of the three
//! traversal orders a table supports.
//!
//! ```rust
//! use grocer_types::{ItemCount, SortOrder};
//!
//! let order: SortOrder = "count".parse().unwrap();
//! assert_eq!(order, SortOrder::CountDesc);
//! assert_eq!(ItemCount::new("apple", 2).to_string(), "apple 2");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// Fill character used by histograms when the caller does not pick one.
pub const DEFAULT_BAR_CHAR: char = '#';

/// Fill character used by the interactive menu's histograms.
pub const MENU_BAR_CHAR: char = '*';

/// A normalized item key paired with its accumulated count.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize)]
pub struct ItemCount {
    pub item: String,
    pub count: u64,
}

impl ItemCount {
    pub fn new(item: impl Into<String>, count: u64) -> Self {
        Self {
            item: item.into(),
            count,
        }
    }
}

/// Renders the `<item> <count>` line shared by listings and exports.
impl fmt::Display for ItemCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.item, self.count)
    }
}

/// Traversal order for listings and histograms.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum SortOrder {
    /// Whatever order the underlying map yields. Not stable across runs.
    Unsorted,
    /// Ascending by item key, compared bytewise.
    #[default]
    Alpha,
    /// Highest count first; equal counts fall back to ascending item key.
    CountDesc,
}

impl SortOrder {
    pub const ALL: [SortOrder; 3] = [SortOrder::Unsorted, SortOrder::Alpha, SortOrder::CountDesc];

    /// Heading the menu prints above a listing in this order.
    pub fn heading(self) -> &'static str {
        match self {
            SortOrder::Unsorted => "unsorted",
            SortOrder::Alpha => "A->Z",
            SortOrder::CountDesc => "highest count first",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortOrder::Unsorted => "unsorted",
            SortOrder::Alpha => "alpha",
            SortOrder::CountDesc => "count",
        })
    }
}

#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("unknown sort order `{0}` (expected unsorted, alpha or count)")]
pub struct ParseSortOrderError(pub String);

impl FromStr for SortOrder {
    type Err = ParseSortOrderError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "unsorted" | "none" => Ok(SortOrder::Unsorted),
            "alpha" | "name" => Ok(SortOrder::Alpha),
            "count" | "count-desc" | "highest" => Ok(SortOrder::CountDesc),
            _ => Err(ParseSortOrderError(raw.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_orders_and_aliases() {
        assert_eq!("alpha".parse::<SortOrder>(), Ok(SortOrder::Alpha));
        assert_eq!("Name".parse::<SortOrder>(), Ok(SortOrder::Alpha));
        assert_eq!("HIGHEST".parse::<SortOrder>(), Ok(SortOrder::CountDesc));
        assert_eq!(" unsorted ".parse::<SortOrder>(), Ok(SortOrder::Unsorted));
        assert!("sideways".parse::<SortOrder>().is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for order in SortOrder::ALL {
            assert_eq!(order.to_string().parse::<SortOrder>(), Ok(order));
        }
    }

    #[test]
    fn item_count_renders_listing_line() {
        assert_eq!(ItemCount::new("peas", 0).to_string(), "peas 0");
        let json = serde_json::to_value(ItemCount::new("kale", 4)).unwrap();
        assert_eq!(json["item"], "kale");
        assert_eq!(json["count"], 4);
    }
}
