#![forbid(unsafe_code)]

//! Text primitives for boxtab.
//!
//! This crate provides the cell-level text pipeline used by the table
//! renderer:
//! - [`wrap`] - character and word wrapping bounded by a column's content
//!   budget
//! - [`pad`] - the fixed-width padding formatter applied to every sub-line
//!
//! Widths are measured in `char`s (code units), not display cells: the
//! table layer makes no grapheme-width guarantees.
//!
//! # Example
//! ```
//! use boxtab_text::wrap::{wrap_words, chunk_chars};
//! use boxtab_text::pad::pad_start;
//!
//! let lines = wrap_words("hello wrapped world", 8);
//! assert_eq!(lines, vec!["hello", "wrapped", "world"]);
//!
//! let chunks = chunk_chars("abcdefgh", 3);
//! assert_eq!(chunks, vec!["abc", "def", "gh"]);
//!
//! assert_eq!(pad_start("hi ", 6), "   hi ");
//! ```

pub mod pad;
pub mod wrap;

pub use pad::pad_start;
pub use wrap::{chunk_chars, wrap_words};

/// Number of `char`s in a string.
///
/// The table layer counts code units, so `str::len` (bytes) is never the
/// right measure here.
#[inline]
#[must_use]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}
