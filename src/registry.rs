//! Fixed offset registries for the monthly supervisory reports.
//!
//! Row and column offsets are compile-time constants tied to the reports'
//! fixed layout. They are relative to the data origin (the cell after the
//! header row and the institution-name column); if the report layout ever
//! shifts, extraction produces wrong values without complaint.

use once_cell::sync::Lazy;

use crate::models::{IndicatorTable, RatioDef};

/// 大型银行 and their fixed row offsets in every report.
pub const STATE_BANKS: &[(&str, u32)] = &[
    ("工商银行", 7),
    ("农业银行", 8),
    ("中国银行", 9),
    ("建设银行", 10),
    ("交通银行", 11),
];

/// 股份制银行 and their fixed row offsets.
pub const JOINT_STOCK_BANKS: &[(&str, u32)] = &[
    ("中信银行", 13),
    ("光大银行", 14),
    ("华夏银行", 15),
    ("平安银行", 17),
    ("招商银行", 18),
    ("浦发银行", 19),
    ("兴业银行", 20),
    ("民生银行", 21),
];

static ALL_BANKS: Lazy<Vec<(&'static str, u32)>> =
    Lazy::new(|| STATE_BANKS.iter().chain(JOINT_STOCK_BANKS).copied().collect());

/// Both groups chained in registry order, state banks first.
pub fn all_banks() -> &'static [(&'static str, u32)] {
    ALL_BANKS.as_slice()
}

/// 贷款质量五级分类情况表.
pub const FIVE_CLASS: IndicatorTable = IndicatorTable {
    name: "贷款质量五级分类情况表",
    columns: &[
        ("各项贷款余额", 0),
        ("正常贷款余额", 4),
        ("关注类贷款", 8),
        ("不良贷款余额", 12),
        ("次级类贷款", 16),
        ("可疑类贷款", 20),
        ("损失类贷款", 24),
        ("逾期贷款", 28),
        ("逾期90天以上", 32),
    ],
};

/// 资产减值准备情况表.
pub const RESERVE: IndicatorTable = IndicatorTable {
    name: "资产减值准备情况表",
    columns: &[("贷款损失准备", 0), ("新提准备金", 1), ("冲销卖出", 2)],
};

/// 资产负债及存贷款情况简表.
pub const BALANCE: IndicatorTable = IndicatorTable {
    name: "资产负债及存贷款情况简表",
    columns: &[
        ("资产总额", 0),
        ("负债总额", 6),
        ("所有者权益", 12),
        ("各项贷款", 17),
        ("贴现及转贴现", 23),
        ("各项存款", 28),
        ("单位存款", 34),
        ("储蓄存款", 39),
        ("本年利润", 44),
    ],
};

/// Every report type read for each period, in assembly order.
pub const TABLES: &[IndicatorTable] = &[FIVE_CLASS, RESERVE, BALANCE];

/// Supervisory ratios appended to the assembled table.
pub const RATIOS: &[RatioDef] = &[
    RatioDef { name: "不良贷款率", numerator: "不良贷款余额", denominator: "各项贷款余额" },
    RatioDef { name: "关注贷款率", numerator: "关注类贷款", denominator: "各项贷款余额" },
    RatioDef { name: "逾期贷款率", numerator: "逾期贷款", denominator: "各项贷款余额" },
    RatioDef { name: "拨备覆盖率", numerator: "贷款损失准备", denominator: "不良贷款余额" },
    RatioDef { name: "贷款拨备率", numerator: "贷款损失准备", denominator: "各项贷款余额" },
    RatioDef { name: "资产利润率", numerator: "本年利润", denominator: "资产总额" },
];
