use std::str::FromStr;

use crate::error::AppError;
use crate::registry;

/// One spreadsheet report type with a fixed column layout.
///
/// Column offsets are relative to the data origin: the grid left after the
/// sheet's single header row and the leading institution-name column.
#[derive(Debug, Clone, Copy)]
pub struct IndicatorTable {
    /// Report title; also the file-name component after the `YYYYMM_` prefix.
    pub name: &'static str,
    /// (column label, column offset) in presentation order.
    pub columns: &'static [(&'static str, u32)],
}

/// A derived indicator: element-wise numerator / denominator over base columns.
#[derive(Debug, Clone, Copy)]
pub struct RatioDef {
    pub name: &'static str,
    pub numerator: &'static str,
    pub denominator: &'static str,
}

/// Institution group selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BankGroup {
    /// 大型银行.
    State,
    /// 股份制银行.
    JointStock,
    /// Both groups, state banks first.
    All,
}

impl BankGroup {
    /// Member institutions as (name, row offset), in registry order.
    pub fn banks(self) -> &'static [(&'static str, u32)] {
        match self {
            BankGroup::State => registry::STATE_BANKS,
            BankGroup::JointStock => registry::JOINT_STOCK_BANKS,
            BankGroup::All => registry::all_banks(),
        }
    }
}

impl FromStr for BankGroup {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "d" | "state" => Ok(BankGroup::State),
            "g" | "joint" | "joint-stock" => Ok(BankGroup::JointStock),
            "a" | "all" => Ok(BankGroup::All),
            other => Err(AppError::Config(format!("unknown bank group: {other}"))),
        }
    }
}
