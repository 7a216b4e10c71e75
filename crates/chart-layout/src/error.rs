// File: crates/chart-layout/src/error.rs
// Summary: Error type shared by validation, mapping, touch resolution and style parsing.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// A grouped or stacked set whose inner sets differ in length.
    #[error("data set {set_index} has {found} points, expected {expected} like the first set")]
    InconsistentSeriesLength { set_index: usize, expected: usize, found: usize },
    #[error("invalid label specifier '{0}'")]
    LabelSpecifier(String),
    #[error("invalid chart style: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, LayoutError>;
