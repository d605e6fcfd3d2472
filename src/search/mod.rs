//! Query normalization and the multi-word substring matcher.

mod matcher;

pub use matcher::{Query, filter, highlight_indices};
