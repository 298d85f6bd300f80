#![forbid(unsafe_code)]

//! Cell text wrapping.
//!
//! A cell's column width `w` reserves two chars for border padding, so the
//! content budget handed to these functions is `w - 2` ("limit" below).
//! Two strategies exist:
//! - [`chunk_chars`] - raw fixed-size chunks, used for `WordBreak::All` and
//!   for the no-wrap first-line computation
//! - [`wrap_words`] - greedy word packing with a character-chunk fallback
//!   for words that cannot fit on a line of their own
//!
//! Both guarantee at least one sub-line: an empty input produces a single
//! empty sub-line, so a table row always occupies at least one physical
//! line.
//!
//! # Example
//! ```
//! use boxtab_text::wrap::wrap_words;
//!
//! let lines = wrap_words("a few short words", 9);
//! assert_eq!(lines, vec!["a few", "short", "words"]);
//! ```

use crate::char_len;

/// Split text into consecutive chunks of at most `limit` chars.
///
/// The final chunk may be shorter. An empty input yields exactly one empty
/// chunk, never zero. A `limit` of zero returns the input whole (degenerate
/// configurations clip later, at the padding step).
#[must_use]
pub fn chunk_chars(text: &str, limit: usize) -> Vec<String> {
    if limit == 0 {
        return vec![text.to_string()];
    }
    if text.is_empty() {
        return vec![String::new()];
    }
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(limit)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

/// Greedily pack space-separated words into sub-lines of at most `limit`
/// chars.
///
/// A word joins the current sub-line when that line is non-empty and
/// `line + 1 + word` still fits within `limit` (words are rejoined with a
/// single space). A word that cannot be packed is pushed through
/// [`chunk_chars`]; each chunk becomes its own sub-line and packing resumes
/// after the last chunk. Words are never split unless they alone exceed
/// `limit`.
#[must_use]
pub fn wrap_words(text: &str, limit: usize) -> Vec<String> {
    if limit == 0 {
        return vec![text.to_string()];
    }
    let mut lines: Vec<String> = Vec::new();
    for word in text.split(' ') {
        let word_len = char_len(word);
        if let Some(last) = lines.last_mut() {
            if !last.is_empty() && char_len(last) + 1 + word_len <= limit {
                last.push(' ');
                last.push_str(word);
                continue;
            }
        }
        lines.extend(chunk_chars(word, limit));
    }
    tracing::trace!(limit, sublines = lines.len(), "wrapped cell text");
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // chunk_chars tests
    // ==========================================================================

    #[test]
    fn chunk_shorter_than_limit() {
        assert_eq!(chunk_chars("abc", 10), vec!["abc"]);
    }

    #[test]
    fn chunk_exact_multiple() {
        assert_eq!(chunk_chars("abcdef", 3), vec!["abc", "def"]);
    }

    #[test]
    fn chunk_with_remainder() {
        assert_eq!(chunk_chars("abcdefgh", 3), vec!["abc", "def", "gh"]);
    }

    #[test]
    fn chunk_empty_yields_one_empty_chunk() {
        assert_eq!(chunk_chars("", 5), vec![""]);
    }

    #[test]
    fn chunk_zero_limit_returns_input_whole() {
        assert_eq!(chunk_chars("abc", 0), vec!["abc"]);
    }

    #[test]
    fn chunk_counts_chars_not_bytes() {
        assert_eq!(chunk_chars("абвг", 2), vec!["аб", "вг"]);
    }

    #[test]
    fn chunk_count_is_ceil_of_len_over_limit() {
        // 10 chars at limit 6 -> ceil(10/6) = 2
        assert_eq!(chunk_chars("abcdefghij", 6).len(), 2);
        // 12 chars at limit 6 -> 2
        assert_eq!(chunk_chars("abcdefghijkl", 6).len(), 2);
        // 13 chars at limit 6 -> 3
        assert_eq!(chunk_chars("abcdefghijklm", 6).len(), 3);
    }

    // ==========================================================================
    // wrap_words tests
    // ==========================================================================

    #[test]
    fn words_fit_on_one_line() {
        assert_eq!(wrap_words("a b c", 10), vec!["a b c"]);
    }

    #[test]
    fn words_break_at_limit() {
        assert_eq!(wrap_words("hello world", 6), vec!["hello", "world"]);
    }

    #[test]
    fn words_rejoined_with_single_space() {
        assert_eq!(wrap_words("aa bb cc dd", 5), vec!["aa bb", "cc dd"]);
    }

    #[test]
    fn long_word_hard_split() {
        assert_eq!(
            wrap_words("supercalifragilistic", 8),
            vec!["supercal", "ifragili", "stic"]
        );
    }

    #[test]
    fn packing_resumes_after_split_word() {
        // "abcdefgh" splits into "abcde" + "fgh"; "x" then packs onto "fgh".
        assert_eq!(wrap_words("abcdefgh x", 5), vec!["abcde", "fgh x"]);
    }

    #[test]
    fn empty_input_yields_one_empty_subline() {
        assert_eq!(wrap_words("", 8), vec![""]);
    }

    #[test]
    fn consecutive_spaces_preserved_in_packing() {
        // split(' ') yields an empty word between the doubled spaces; it
        // packs as a bare joining space, matching the greedy packer.
        assert_eq!(wrap_words("a  b", 10), vec!["a  b"]);
    }

    #[test]
    fn word_exactly_at_limit_not_split() {
        assert_eq!(wrap_words("abcde fghij", 5), vec!["abcde", "fghij"]);
    }

    #[test]
    fn zero_limit_returns_input_whole() {
        assert_eq!(wrap_words("a b", 0), vec!["a b"]);
    }
}
