#![forbid(unsafe_code)]

//! The table builder.
//!
//! [`Table`] carries the immutable configuration plus the decoration
//! strategies and exposes two rendering surfaces:
//! - [`Table::build`] renders a whole record sequence, deriving the column
//!   set from data when `only_keys` is empty and inserting periodic header
//!   blocks and separator rules;
//! - fragment accessors ([`Table::header`], [`Table::row`], …) render the
//!   same pieces one at a time for streaming output. These cannot infer
//!   columns from data and fail with [`ConfigError::MissingOnlyKeys`] when
//!   `only_keys` is empty.
//!
//! Both surfaces produce identical lines for identical configuration and
//! data: stitching `header()`, `row()` per record (with the same rule
//! insertion policy) and `footer()` reproduces `build()` exactly.

use std::collections::HashMap;
use std::fmt;

use crate::border::{bottom_rule, middle_rule, top_rule};
use crate::decor::{BorderDecor, CellDecor, IdentityDecor};
use crate::error::ConfigError;
use crate::layout::column_widths;
use crate::record::Record;
use crate::row::{RowContext, assemble};

/// Wrapping strategy for overflowing cell text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WordBreak {
    /// Break at word boundaries; words longer than the content budget fall
    /// back to character chunks.
    #[default]
    Word,
    /// Break at raw character boundaries.
    All,
}

/// Table configuration.
///
/// Created once (usually through the [`Table`] builder methods) and
/// immutable for the table's lifetime.
#[derive(Debug, Clone)]
pub struct TableOptions {
    /// Total table width in chars, including corner and border characters.
    pub width: usize,
    /// Emit a separator rule after every N data rows; 0 = never.
    pub hr_on_every: usize,
    /// Re-emit the header block after every N data rows; 0 = never. Takes
    /// priority over `hr_on_every` when both fire on the same row.
    pub title_on_every: usize,
    /// Ordered list of field names to display; empty derives the columns
    /// from the data (first-seen order across all records).
    pub only_keys: Vec<String>,
    /// Display labels per field name; unmapped (or empty-string) entries
    /// fall back to the field name itself.
    pub headers: HashMap<String, String>,
    /// Field names dropped even when present in `only_keys` or the derived
    /// column set.
    pub excluded_keys: Vec<String>,
    /// When false, every row renders as a single truncated line.
    pub wrap: bool,
    /// Wrapping strategy.
    pub word_break: WordBreak,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            width: 120,
            hr_on_every: 0,
            title_on_every: 0,
            only_keys: Vec::new(),
            headers: HashMap::new(),
            excluded_keys: Vec::new(),
            wrap: true,
            word_break: WordBreak::Word,
        }
    }
}

/// A configured table renderer.
///
/// Every rendering call is a pure function of the configuration and its
/// input; no state accumulates across calls.
pub struct Table<R> {
    options: TableOptions,
    cell_decor: Box<dyn CellDecor<R>>,
    border_decor: Box<dyn BorderDecor>,
}

impl<R> Default for Table<R> {
    fn default() -> Self {
        Self::with_options(TableOptions::default())
    }
}

impl<R> fmt::Debug for Table<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl<R> Table<R> {
    /// A table with default options and identity decoration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A table with the given options and identity decoration.
    #[must_use]
    pub fn with_options(options: TableOptions) -> Self {
        Self {
            options,
            cell_decor: Box::new(IdentityDecor),
            border_decor: Box::new(IdentityDecor),
        }
    }

    /// The resolved configuration.
    #[must_use]
    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Set the total table width in chars (borders included).
    #[must_use]
    pub fn width(mut self, width: usize) -> Self {
        self.options.width = width;
        self
    }

    /// Emit a separator rule after every `n` data rows (0 = never).
    #[must_use]
    pub fn hr_on_every(mut self, n: usize) -> Self {
        self.options.hr_on_every = n;
        self
    }

    /// Re-emit the header block after every `n` data rows (0 = never).
    #[must_use]
    pub fn title_on_every(mut self, n: usize) -> Self {
        self.options.title_on_every = n;
        self
    }

    /// Display only these fields, in this order.
    #[must_use]
    pub fn only_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.only_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Use `label` as the header text for `key`.
    #[must_use]
    pub fn header_label(mut self, key: impl Into<String>, label: impl Into<String>) -> Self {
        self.options.headers.insert(key.into(), label.into());
        self
    }

    /// Drop these fields even when selected or derived.
    #[must_use]
    pub fn excluded_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.excluded_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Enable or disable wrapping (disabled truncates rows to one line).
    #[must_use]
    pub fn wrap(mut self, wrap: bool) -> Self {
        self.options.wrap = wrap;
        self
    }

    /// Set the wrapping strategy.
    #[must_use]
    pub fn word_break(mut self, word_break: WordBreak) -> Self {
        self.options.word_break = word_break;
        self
    }

    /// Install a cell decoration strategy.
    #[must_use]
    pub fn map_value(mut self, decor: impl CellDecor<R> + 'static) -> Self {
        self.cell_decor = Box::new(decor);
        self
    }

    /// Install a border decoration strategy.
    #[must_use]
    pub fn map_border(mut self, decor: impl BorderDecor + 'static) -> Self {
        self.border_decor = Box::new(decor);
        self
    }

    fn label_for(&self, key: &str) -> String {
        match self.options.headers.get(key) {
            // An empty label means "no custom label", same as absent.
            Some(label) if !label.is_empty() => label.clone(),
            _ => key.to_string(),
        }
    }

    fn labels_for(&self, keys: &[String]) -> Vec<String> {
        keys.iter().map(|key| self.label_for(key)).collect()
    }

    fn apply_exclusions(&self, keys: Vec<String>) -> Vec<String> {
        keys.into_iter()
            .filter(|key| !self.options.excluded_keys.contains(key))
            .collect()
    }

    /// Column set for the fragment accessors: `only_keys` is mandatory.
    fn fragment_keys(&self) -> Result<Vec<String>, ConfigError> {
        if self.options.only_keys.is_empty() {
            return Err(ConfigError::MissingOnlyKeys);
        }
        Ok(self.apply_exclusions(self.options.only_keys.clone()))
    }

    fn row_context<'a>(&'a self, widths: &'a [usize], keys: &'a [String]) -> RowContext<'a, R> {
        RowContext {
            widths,
            keys,
            wrap: self.options.wrap,
            word_break: self.options.word_break,
            cell_decor: self.cell_decor.as_ref(),
            border_decor: self.border_decor.as_ref(),
        }
    }

    /// The header row's physical lines (labels wrapped like any cell).
    fn header_lines(&self, widths: &[usize], labels: &[String]) -> Vec<String> {
        let ctx = self.row_context(widths, labels);
        assemble(&ctx, labels, true, None)
    }

    fn decorated(&self, rule: String) -> String {
        self.border_decor.apply(&rule)
    }
}

impl<R: Record> Table<R> {
    /// Render the whole table.
    ///
    /// When `only_keys` is empty the column set is the union of field names
    /// across every record in first-seen order (a full scan happens before
    /// any line is rendered), minus `excluded_keys`. A header block opens
    /// the table; after each non-final data row at 1-based position `p`, a
    /// full header block is re-emitted when `title_on_every` divides `p`,
    /// else a single rule when `hr_on_every` divides `p`. The bottom rule
    /// closes the sequence.
    pub fn build(&self, records: &[R]) -> Vec<String> {
        let selected = if self.options.only_keys.is_empty() {
            derive_keys(records)
        } else {
            self.options.only_keys.clone()
        };
        let keys = self.apply_exclusions(selected);
        let _span = tracing::debug_span!(
            "table_build",
            records = records.len(),
            columns = keys.len(),
            width = self.options.width
        )
        .entered();

        let labels = self.labels_for(&keys);
        let widths = column_widths(self.options.width, keys.len());
        let ctx = self.row_context(&widths, &keys);

        let mut lines = Vec::new();
        lines.push(self.decorated(top_rule(&widths)));
        lines.extend(self.header_lines(&widths, &labels));
        lines.push(self.decorated(middle_rule(&widths)));

        for (i, record) in records.iter().enumerate() {
            let values: Vec<String> = keys
                .iter()
                .map(|key| record.get(key).unwrap_or_default())
                .collect();
            lines.extend(assemble(&ctx, &values, false, Some(record)));

            let position = i + 1;
            if position == records.len() {
                break;
            }
            if self.options.title_on_every > 0 && position % self.options.title_on_every == 0 {
                lines.push(self.decorated(middle_rule(&widths)));
                lines.extend(self.header_lines(&widths, &labels));
                lines.push(self.decorated(middle_rule(&widths)));
            } else if self.options.hr_on_every > 0 && position % self.options.hr_on_every == 0 {
                lines.push(self.decorated(middle_rule(&widths)));
            }
        }

        lines.push(self.decorated(bottom_rule(&widths)));
        lines
    }

    /// Top rule + header row + middle rule, for opening a streamed table.
    pub fn header(&self) -> Result<Vec<String>, ConfigError> {
        let keys = self.fragment_keys()?;
        let labels = self.labels_for(&keys);
        let widths = column_widths(self.options.width, keys.len());

        let mut lines = Vec::new();
        lines.push(self.decorated(top_rule(&widths)));
        lines.extend(self.header_lines(&widths, &labels));
        lines.push(self.decorated(middle_rule(&widths)));
        Ok(lines)
    }

    /// Middle rule + header row + middle rule, for re-inserting the header
    /// mid-stream.
    pub fn inner_header(&self) -> Result<Vec<String>, ConfigError> {
        let keys = self.fragment_keys()?;
        let labels = self.labels_for(&keys);
        let widths = column_widths(self.options.width, keys.len());

        let mut lines = Vec::new();
        lines.push(self.decorated(middle_rule(&widths)));
        lines.extend(self.header_lines(&widths, &labels));
        lines.push(self.decorated(middle_rule(&widths)));
        Ok(lines)
    }

    /// A single separator rule.
    pub fn horizontal_rule(&self) -> Result<String, ConfigError> {
        let keys = self.fragment_keys()?;
        Ok(self.decorated(middle_rule(&column_widths(self.options.width, keys.len()))))
    }

    /// One record's physical lines.
    pub fn row(&self, record: &R) -> Result<Vec<String>, ConfigError> {
        let keys = self.fragment_keys()?;
        let widths = column_widths(self.options.width, keys.len());
        let values: Vec<String> = keys
            .iter()
            .map(|key| record.get(key).unwrap_or_default())
            .collect();
        let ctx = self.row_context(&widths, &keys);
        Ok(assemble(&ctx, &values, false, Some(record)))
    }

    /// The closing bottom rule.
    pub fn footer(&self) -> Result<String, ConfigError> {
        let keys = self.fragment_keys()?;
        Ok(self.decorated(bottom_rule(&column_widths(self.options.width, keys.len()))))
    }
}

/// Union of field names across all records, first-seen order.
fn derive_keys<R: Record>(records: &[R]) -> Vec<String> {
    let mut keys: Vec<String> = Vec::new();
    for record in records {
        for key in record.keys() {
            if !keys.contains(&key) {
                keys.push(key);
            }
        }
    }
    keys
}
