#![forbid(unsafe_code)]

//! Horizontal border rules.
//!
//! Rules are drawn from a column width plan with Unicode box-drawing
//! characters. Decoration is the caller's concern: the table layer passes
//! each finished rule through its [`BorderDecor`](crate::decor::BorderDecor)
//! exactly once.

/// Vertical separator used between and around row cells.
pub const VERTICAL: &str = "│";

/// Top rule: `┌───┬───┐`.
#[must_use]
pub fn top_rule(widths: &[usize]) -> String {
    rule(widths, '┌', '┬', '┐')
}

/// Middle rule: `├───┼───┤`.
#[must_use]
pub fn middle_rule(widths: &[usize]) -> String {
    rule(widths, '├', '┼', '┤')
}

/// Bottom rule: `└───┴───┘`.
#[must_use]
pub fn bottom_rule(widths: &[usize]) -> String {
    rule(widths, '└', '┴', '┘')
}

fn rule(widths: &[usize], left: char, junction: char, right: char) -> String {
    let mut out = String::new();
    out.push(left);
    for (i, width) in widths.iter().enumerate() {
        if i > 0 {
            out.push(junction);
        }
        for _ in 0..*width {
            out.push('─');
        }
    }
    out.push(right);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_rule_shape() {
        assert_eq!(top_rule(&[3, 4]), "┌───┬────┐");
    }

    #[test]
    fn middle_rule_shape() {
        assert_eq!(middle_rule(&[3, 4]), "├───┼────┤");
    }

    #[test]
    fn bottom_rule_shape() {
        assert_eq!(bottom_rule(&[3, 4]), "└───┴────┘");
    }

    #[test]
    fn single_column_has_no_junction() {
        assert_eq!(top_rule(&[5]), "┌─────┐");
    }

    #[test]
    fn empty_plan_collapses_to_corners() {
        assert_eq!(top_rule(&[]), "┌┐");
        assert_eq!(middle_rule(&[]), "├┤");
        assert_eq!(bottom_rule(&[]), "└┘");
    }

    #[test]
    fn zero_width_column_keeps_junctions() {
        assert_eq!(top_rule(&[0, 0]), "┌┬┐");
    }

    #[test]
    fn rule_char_length_matches_table_width() {
        // widths summing to total - n - 1 reproduce the total char count
        let widths = crate::layout::column_widths(40, 3);
        assert_eq!(top_rule(&widths).chars().count(), 40);
    }
}
