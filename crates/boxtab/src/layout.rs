#![forbid(unsafe_code)]

//! Column width planning.
//!
//! A table of `count` columns inside a `total` width spends `count + 1`
//! chars on vertical borders (one before the first column, one after the
//! last, one between each pair), leaving `total - count - 1` chars of
//! content to distribute.

/// Compute per-column content widths for `count` columns in a table
/// `total` chars wide.
///
/// The first `count - 1` columns each get the floor of the even share; the
/// last column absorbs the rounding remainder, so the plan always sums to
/// exactly `total - count - 1`. The right-biased remainder placement is an
/// observable part of the output format and must not be redistributed.
///
/// Degenerate inputs are not validated: a `total` too small for `count`
/// saturates to zero-width columns.
#[must_use]
pub fn column_widths(total: usize, count: usize) -> Vec<usize> {
    if count == 0 {
        return Vec::new();
    }
    let available = total.saturating_sub(count + 1);
    let base = available / count;
    let mut widths = vec![base; count];
    widths[count - 1] = available - base * (count - 1);
    widths
}
