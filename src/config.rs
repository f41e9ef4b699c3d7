use std::env;
use std::path::PathBuf;

use chrono::NaiveDate;
use dotenvy::dotenv;

use crate::error::AppError;
use crate::models::BankGroup;

const DEFAULT_START: &str = "20151231";
const DEFAULT_END: &str = "20171231";
const DEFAULT_INDICATOR: &str = "各项贷款";

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the monthly report files.
    pub data_dir: PathBuf,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Indicator the binary prints after assembly.
    pub indicator: String,
    pub group: BankGroup,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        // Load .env file first
        dotenv().ok();

        let data_dir = env::var("BANKTAB_DATA_DIR")
            .map_err(|_| AppError::Config("BANKTAB_DATA_DIR is not set".to_string()))?;

        let start_date = parse_compact_date(
            &env::var("BANKTAB_START_DATE").unwrap_or_else(|_| DEFAULT_START.to_string()),
        )?;
        let end_date = parse_compact_date(
            &env::var("BANKTAB_END_DATE").unwrap_or_else(|_| DEFAULT_END.to_string()),
        )?;
        let indicator =
            env::var("BANKTAB_INDICATOR").unwrap_or_else(|_| DEFAULT_INDICATOR.to_string());
        let group = match env::var("BANKTAB_GROUP") {
            Ok(raw) => raw.parse()?,
            Err(_) => BankGroup::All,
        };

        Ok(Config {
            data_dir: PathBuf::from(data_dir),
            start_date,
            end_date,
            indicator,
            group,
        })
    }
}

/// Parses the compact `YYYYMMDD` form used throughout the report archive.
pub fn parse_compact_date(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw, "%Y%m%d")
        .map_err(|e| AppError::Config(format!("invalid date '{raw}': {e}")))
}
