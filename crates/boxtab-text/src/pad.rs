#![forbid(unsafe_code)]

//! Fixed-width padding for cell sub-lines.
//!
//! Every wrapped sub-line is rendered into exactly `width` chars: the table
//! layer appends one trailing space to the content, then this formatter
//! pads on the left with spaces. Content longer than `width` is clipped to
//! its last `width` chars rather than rejected, so degenerate column widths
//! degrade silently.

use crate::char_len;

/// Left-pad `text` with spaces to exactly `width` chars.
///
/// If `text` is already longer than `width`, the last `width` chars are
/// kept (overflow is clipped on the left, not an error).
#[must_use]
pub fn pad_start(text: &str, width: usize) -> String {
    let len = char_len(text);
    if len >= width {
        text.chars().skip(len - width).collect()
    } else {
        let mut out = String::with_capacity(width + text.len());
        for _ in 0..width - len {
            out.push(' ');
        }
        out.push_str(text);
        out
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn output_is_exactly_width_chars(s in "[a-zA-Z ]{0,30}", width in 0usize..40) {
            prop_assert_eq!(char_len(&pad_start(&s, width)), width);
        }

        #[test]
        fn short_input_survives_as_suffix(s in "[a-zA-Z]{0,10}", width in 10usize..40) {
            prop_assert!(pad_start(&s, width).ends_with(&s));
        }
    }
}
