use std::path::PathBuf;

use polars::prelude::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("spreadsheet error: {0}")]
    Sheet(#[from] calamine::Error),

    #[error("dataframe error: {0}")]
    DataFrame(#[from] PolarsError),

    #[error("workbook {0} has no sheets")]
    EmptyWorkbook(PathBuf),

    #[error("unexpected report layout: {0}")]
    Layout(String),

    #[error("unknown indicator: {0}")]
    UnknownIndicator(String),

    #[error("no report files found under {0}")]
    NoReports(PathBuf),
}
