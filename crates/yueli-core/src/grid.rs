//! 月历网格构建。
//!
//! 以周日为第一列，把一个月铺进固定 42 格（6 整周），
//! 前后月的溢出日补齐空位，保证网格高度稳定。

use chrono::{Datelike, Days, NaiveDate};

use crate::models::cell::DayCell;
use crate::models::month::YearMonth;
use crate::ports::almanac::AlmanacSource;
use crate::resolver::resolve;

/// 网格格数：6 周 × 7 天
pub const GRID_CELLS: usize = 42;

/// 构建某月的 42 格网格
///
/// `today` 由调用方注入（渲染层传 `Local::now().date_naive()`），
/// 便于测试固定"今天"。`is_today` 只在当月格子上置位，
/// 溢出格即使日期相同也不置位。
pub fn build_grid(
    source: &dyn AlmanacSource,
    month: YearMonth,
    today: NaiveDate,
) -> Vec<DayCell> {
    let first = month.first_day();
    // 周日=0 … 周六=6，即网格需要的前导溢出格数
    let lead = first.weekday().num_days_from_sunday() as u64;
    let start = first
        .checked_sub_days(Days::new(lead))
        .expect("日期在 chrono 支持范围内");

    (0..GRID_CELLS as u64)
        .map(|offset| {
            let date = start
                .checked_add_days(Days::new(offset))
                .expect("日期在 chrono 支持范围内");
            let in_current_month = month.contains(date);
            DayCell {
                date,
                in_current_month,
                is_today: in_current_month && date == today,
                annotation: resolve(source, date),
            }
        })
        .collect()
}
