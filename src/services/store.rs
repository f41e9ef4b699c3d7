use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDate};
use polars::prelude::*;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::AppError;
use crate::models::BankGroup;
use crate::period::month_ends;
use crate::registry;
use crate::services::excel;

/// Index column: the report period (month end).
pub const PERIOD_COL: &str = "期数";
/// Index column: the institution name.
pub const INSTITUTION_COL: &str = "机构名称";

const REPORT_EXT: &str = "xls";

/// The assembled indicator table, one row per (period, institution).
#[derive(Debug)]
pub struct ReportStore {
    data: DataFrame,
}

impl ReportStore {
    pub fn load(config: &Config) -> Result<Self, AppError> {
        Self::from_dir(&config.data_dir, config.start_date, config.end_date)
    }

    /// Walks the month range, slices every report found on disk and unions
    /// the slices into one table. Months without any file are skipped;
    /// derived ratios are appended once the base table stands.
    pub fn from_dir(data_dir: &Path, start: NaiveDate, end: NaiveDate) -> Result<Self, AppError> {
        let banks = BankGroup::All.banks();

        let mut data: Option<DataFrame> = None;
        for period in month_ends(start, end) {
            let mut slices = Vec::new();
            for table in registry::TABLES {
                let path = report_path(data_dir, period, table.name);
                if !path.exists() {
                    debug!("no report file {}, skipping", path.display());
                    continue;
                }
                info!("reading {}", path.display());
                let range = excel::read_report(&path)?;
                slices.push(excel::extract_table(&range, table, banks)?);
            }
            if slices.is_empty() {
                continue;
            }

            let frame = assemble_period(period, banks, slices)?;
            data = Some(match data {
                Some(mut acc) => {
                    acc.vstack_mut(&frame)?;
                    acc
                }
                None => frame,
            });
        }

        let data = data.ok_or_else(|| AppError::NoReports(data_dir.to_path_buf()))?;
        let data = derive_ratios(data)?;
        info!("assembled {} rows x {} columns", data.height(), data.width());

        Ok(Self { data })
    }

    /// The full (period, institution)-indexed table.
    pub fn data(&self) -> &DataFrame {
        &self.data
    }

    /// Pivots one indicator into a period x institution view, columns ordered
    /// by the group's registry order.
    pub fn indicator(&self, name: &str, group: BankGroup) -> Result<DataFrame, AppError> {
        if self.data.column(name).is_err() {
            return Err(AppError::UnknownIndicator(name.to_string()));
        }

        // Period frames were appended in ascending order, so first-occurrence
        // order is already chronological.
        let periods = self
            .data
            .clone()
            .lazy()
            .select([col(PERIOD_COL).unique_stable()])
            .collect()?
            .column(PERIOD_COL)?
            .clone();

        let mut columns = vec![periods];
        for &(bank, _) in group.banks() {
            let rows = self
                .data
                .clone()
                .lazy()
                .filter(col(INSTITUTION_COL).eq(lit(bank)))
                .select([col(name)])
                .collect()?;
            let mut series = rows.column(name)?.clone();
            series.rename(bank);
            columns.push(series);
        }

        Ok(DataFrame::new(columns)?)
    }
}

fn report_path(data_dir: &Path, period: NaiveDate, table_name: &str) -> PathBuf {
    data_dir.join(format!(
        "{:04}{:02}_{}.{}",
        period.year(),
        period.month(),
        table_name,
        REPORT_EXT
    ))
}

/// Joins a period's table slices column-wise and tags them with the period
/// and institution index columns. Tables absent for the period contribute
/// null columns so every period frame shares one schema.
fn assemble_period(
    period: NaiveDate,
    banks: &[(&str, u32)],
    slices: Vec<DataFrame>,
) -> Result<DataFrame, AppError> {
    let height = banks.len();

    let mut by_label: HashMap<String, Series> = HashMap::new();
    for slice in slices {
        for series in slice.get_columns() {
            by_label.insert(series.name().to_string(), series.clone());
        }
    }

    let mut columns = Vec::new();
    columns.push(
        DateChunked::from_naive_date(PERIOD_COL, std::iter::repeat(period).take(height))
            .into_series(),
    );
    columns.push(Series::new(
        INSTITUTION_COL,
        banks.iter().map(|&(name, _)| name).collect::<Vec<_>>(),
    ));
    for table in registry::TABLES {
        for &(label, _) in table.columns {
            let series = by_label
                .remove(label)
                .unwrap_or_else(|| Series::full_null(label, height, &DataType::Float64));
            columns.push(series);
        }
    }

    Ok(DataFrame::new(columns)?)
}

/// Appends the derived supervisory ratios as element-wise column quotients.
fn derive_ratios(data: DataFrame) -> Result<DataFrame, AppError> {
    let ratios: Vec<Expr> = registry::RATIOS
        .iter()
        .map(|r| (col(r.numerator) / col(r.denominator)).alias(r.name))
        .collect();

    Ok(data.lazy().with_columns(ratios).collect()?)
}
