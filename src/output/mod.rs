//! Output formatting module
//!
//! Provides rich terminal output with colors and tables, plus JSON for
//! machine consumption.

pub mod json;
pub mod tables;
pub mod terminal;

pub use json::{print_json, print_json_value};
pub use tables::print_result_table;
pub use terminal::{
    create_progress_bar, create_spinner, paint_indicator, print_batch_summary, print_error,
    print_header, print_legend, print_overall,
};
