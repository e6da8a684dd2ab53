//! Display formatting for terminal output

pub mod report;

pub use report::{double_separator, format_header, label_value_row, separator};
