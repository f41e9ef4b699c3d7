//! Tabulates financial indicators for a fixed set of banks out of their
//! monthly supervisory report spreadsheets.
//!
//! Reports are located by the `YYYYMM_<report title>.xls` naming convention,
//! sliced at fixed registry offsets, and unioned into one table keyed by
//! (period, institution). Derived supervisory ratios are appended to the
//! assembled table, and single indicators can be pivoted into
//! period x institution comparison views.

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod period;
pub mod registry;
pub mod services;

pub use config::Config;
pub use error::AppError;
pub use models::BankGroup;
pub use services::store::ReportStore;
