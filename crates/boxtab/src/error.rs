#![forbid(unsafe_code)]

//! Errors raised by table configuration checks.

/// Configuration errors.
///
/// Only the single-fragment accessors ([`Table::header`],
/// [`Table::row`], …) raise this: unlike [`Table::build`], they cannot
/// derive the column set from data and require `only_keys` to be set.
///
/// [`Table::header`]: crate::table::Table::header
/// [`Table::row`]: crate::table::Table::row
/// [`Table::build`]: crate::table::Table::build
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A fragment accessor was called with an empty `only_keys`.
    MissingOnlyKeys,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingOnlyKeys => {
                write!(f, "fragment rendering requires a non-empty only_keys")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_missing_option() {
        assert!(ConfigError::MissingOnlyKeys.to_string().contains("only_keys"));
    }
}
