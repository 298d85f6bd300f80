#![forbid(unsafe_code)]

//! Row assembly.
//!
//! A row wraps every column's value independently, then interleaves the
//! resulting sub-lines into aligned physical lines: sub-line `j` of each
//! column sits on physical line `j`, columns that ran out of sub-lines
//! render as blank cells. The output is always a flat line sequence, never
//! nested.

use boxtab_text::{chunk_chars, pad_start, wrap_words};

use crate::border::VERTICAL;
use crate::decor::{BorderDecor, CellDecor};
use crate::table::WordBreak;

/// Everything a row needs from the table configuration.
pub(crate) struct RowContext<'a, R> {
    pub widths: &'a [usize],
    /// Field names per column; display labels when rendering a header row.
    pub keys: &'a [String],
    pub wrap: bool,
    pub word_break: WordBreak,
    pub cell_decor: &'a dyn CellDecor<R>,
    pub border_decor: &'a dyn BorderDecor,
}

/// Render one record (or the header) into physical lines.
pub(crate) fn assemble<R>(
    ctx: &RowContext<'_, R>,
    values: &[String],
    is_header: bool,
    record: Option<&R>,
) -> Vec<String> {
    // Character chunking also backs no-wrap mode: the first chunk is the
    // single line that survives.
    let char_mode = !ctx.wrap || ctx.word_break == WordBreak::All;
    let wrapped: Vec<Vec<String>> = ctx
        .widths
        .iter()
        .zip(values)
        .map(|(&width, value)| {
            let limit = width.saturating_sub(2);
            if char_mode {
                chunk_chars(value, limit)
            } else {
                wrap_words(value, limit)
            }
        })
        .collect();

    let max_lines = wrapped.iter().map(Vec::len).max().unwrap_or(0);
    let separator = ctx.border_decor.apply(VERTICAL);

    let mut lines = Vec::with_capacity(max_lines);
    for j in 0..max_lines {
        let mut line = separator.clone();
        for (i, &width) in ctx.widths.iter().enumerate() {
            if i > 0 {
                line.push_str(&separator);
            }
            let padded = match wrapped[i].get(j) {
                Some(subline) => {
                    let mut content = subline.clone();
                    content.push(' ');
                    pad_start(&content, width)
                }
                None => " ".repeat(width),
            };
            line.push_str(&ctx.cell_decor.apply(&ctx.keys[i], &padded, is_header, record, j));
        }
        line.push_str(&separator);
        lines.push(line);
    }

    if !ctx.wrap {
        lines.truncate(1);
    }
    lines
}
