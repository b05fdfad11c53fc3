pub mod formatter;

pub use formatter::{
    format_age, format_catalog, format_json, format_report, format_tsv_row, should_use_colors,
};
