//! Count grocery items from a plain-text inventory list.
//!
//! Each input line is `<item> [<quantity>]`. The item token is normalized
//! (boundary punctuation stripped, ASCII lowercased) so `Apple,` and `apple`
//! land on the same key; the optional quantity must be a whole positive
//! integer or it silently counts as 1. Blank lines and lines with no usable
//! item are skipped.
//!
//! [`FrequencyTable`] is built once and is read-only afterwards. It never
//! fails a query: a table whose source could not be read reports
//! `is_loaded() == false` and otherwise behaves like an empty table.
//!
//! # Orders
//! - [`SortOrder::Alpha`]: ascending item key.
//! - [`SortOrder::CountDesc`]: highest count first, ties by item key.
//! - [`SortOrder::Unsorted`]: map iteration order, which changes from run to
//!   run. [`FrequencyTable::export`] writes in this order on purpose, matching
//!   the flat `frequency.dat` files produced by earlier versions of the tool.
//!
//! # Example
//! ```
//! use grocer_tally::{FrequencyTable, SortOrder};
//!
//! let table = FrequencyTable::from_lines(["apple", "banana 2", "Apple", "BANANA"]);
//! assert_eq!(table.frequency("APPLE"), 2);
//! assert_eq!(
//!     table.render_histogram(SortOrder::CountDesc, '*'),
//!     vec!["banana ***", "apple **"],
//! );
//! ```
//!
//! For a runnable demo, see `cargo run -p grocer-tally --example summary -- <inventory>`.

pub mod parse;
pub mod table;

pub use grocer_types::{DEFAULT_BAR_CHAR, ItemCount, SortOrder};
pub use parse::{
    DEFAULT_QUANTITY, ParsedLine, is_token_separator, is_word_char, normalize, parse_line, tokens,
};
pub use table::{FrequencyTable, TallyError};
