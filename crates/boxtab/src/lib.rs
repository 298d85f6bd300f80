#![forbid(unsafe_code)]

//! Fixed-width box-drawing text tables.
//!
//! boxtab renders an ordered sequence of records (string-keyed fields) as a
//! bordered table of plain `String` lines, ready for any sink the caller
//! likes. Column widths are derived from one total table width; overlong
//! cell text wraps across sub-lines by word or by character; headers and
//! separator rules can repeat every N data rows; cells and borders pass
//! through pluggable decoration strategies (e.g. ANSI colors).
//!
//! Rendering is pure: a [`Table`] is configured once and every call is a
//! function of that configuration and the input records.
//!
//! # Example
//! ```
//! use boxtab::Table;
//!
//! let rows = vec![
//!     vec![("id".to_string(), "1"), ("name".to_string(), "Ann")],
//! ];
//! let table: Table<Vec<(String, &str)>> = Table::new()
//!     .width(20)
//!     .only_keys(["id", "name"]);
//!
//! let lines = table.build(&rows);
//! assert_eq!(lines, vec![
//!     "┌────────┬─────────┐",
//!     "│     id │    name │",
//!     "├────────┼─────────┤",
//!     "│      1 │     Ann │",
//!     "└────────┴─────────┘",
//! ]);
//! ```

pub mod border;
pub mod decor;
pub mod error;
pub mod layout;
pub mod record;
mod row;
pub mod table;

pub use decor::{BorderDecor, BorderFn, CellDecor, CellFn, IdentityDecor};
pub use error::ConfigError;
pub use record::Record;
pub use table::{Table, TableOptions, WordBreak};
