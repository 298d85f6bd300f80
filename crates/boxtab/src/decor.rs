#![forbid(unsafe_code)]

//! Decoration strategies for cells and borders.
//!
//! Decoration is injected as single-method strategies rather than stored
//! closures, so a decorator can carry state (color palettes, thresholds)
//! and be named in signatures. Closures are adapted through [`CellFn`] and
//! [`BorderFn`].
//!
//! Decorators run after layout: the cell text they receive is already
//! wrapped and padded to its column width, so adding zero-width escape
//! sequences is safe while adding visible characters will distort the
//! grid.

/// Per-cell decoration.
///
/// `record` is `None` for header rows, where `key` carries the display
/// label rather than the field name. `line` is the sub-line index within
/// the row, starting at 0.
pub trait CellDecor<R> {
    /// Decorate one padded cell sub-line.
    fn apply(
        &self,
        key: &str,
        text: &str,
        is_header: bool,
        record: Option<&R>,
        line: usize,
    ) -> String;
}

/// Border decoration, applied to whole horizontal rules and to each
/// vertical separator.
pub trait BorderDecor {
    /// Decorate one border string.
    fn apply(&self, border: &str) -> String;
}

/// The default no-op decoration.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityDecor;

impl<R> CellDecor<R> for IdentityDecor {
    fn apply(
        &self,
        _key: &str,
        text: &str,
        _is_header: bool,
        _record: Option<&R>,
        _line: usize,
    ) -> String {
        text.to_string()
    }
}

impl BorderDecor for IdentityDecor {
    fn apply(&self, border: &str) -> String {
        border.to_string()
    }
}

/// Adapt a closure into a [`CellDecor`].
#[derive(Debug, Clone, Copy)]
pub struct CellFn<F>(pub F);

impl<R, F> CellDecor<R> for CellFn<F>
where
    F: Fn(&str, &str, bool, Option<&R>, usize) -> String,
{
    fn apply(
        &self,
        key: &str,
        text: &str,
        is_header: bool,
        record: Option<&R>,
        line: usize,
    ) -> String {
        (self.0)(key, text, is_header, record, line)
    }
}

/// Adapt a closure into a [`BorderDecor`].
#[derive(Debug, Clone, Copy)]
pub struct BorderFn<F>(pub F);

impl<F> BorderDecor for BorderFn<F>
where
    F: Fn(&str) -> String,
{
    fn apply(&self, border: &str) -> String {
        (self.0)(border)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_cell_decor_passes_through() {
        let text = CellDecor::<()>::apply(&IdentityDecor, "id", "  1 ", false, None, 0);
        assert_eq!(text, "  1 ");
    }

    #[test]
    fn identity_border_decor_passes_through() {
        assert_eq!(BorderDecor::apply(&IdentityDecor, "│"), "│");
    }

    #[test]
    fn cell_fn_adapts_closures() {
        let shout =
            CellFn(|_: &str, text: &str, _: bool, _: Option<&()>, _: usize| text.to_uppercase());
        assert_eq!(shout.apply("k", "ann ", false, None, 0), "ANN ");
    }

    #[test]
    fn border_fn_adapts_closures() {
        let dim = BorderFn(|border: &str| format!("\x1b[2m{border}\x1b[0m"));
        assert_eq!(BorderDecor::apply(&dim, "│"), "\x1b[2m│\x1b[0m");
    }

    #[test]
    fn header_decor_sees_label_and_no_record() {
        let decor = CellFn(|key: &str, text: &str, is_header: bool, record: Option<&()>, _: usize| {
            assert!(is_header);
            assert!(record.is_none());
            assert_eq!(key, "label");
            text.to_string()
        });
        decor.apply("label", "x ", true, None, 0);
    }
}
