pub mod reader;

pub use reader::{extract_table, read_report};
