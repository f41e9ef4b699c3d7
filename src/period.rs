use chrono::{Datelike, Months, NaiveDate};

/// Month-end dates between `start` and `end`, both bounds inclusive.
///
/// Mirrors how the report archive is keyed: one file set per calendar month,
/// stamped with that month's last day.
pub fn month_ends(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let mut month_start = start.with_day(1);
    while let Some(first) = month_start {
        match last_day_of(first) {
            Some(last) if last <= end => {
                if last >= start {
                    out.push(last);
                }
            }
            _ => break,
        }
        month_start = first.checked_add_months(Months::new(1));
    }
    out
}

fn last_day_of(month_start: NaiveDate) -> Option<NaiveDate> {
    month_start.checked_add_months(Months::new(1))?.pred_opt()
}
