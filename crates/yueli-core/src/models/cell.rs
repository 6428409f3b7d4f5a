//! 日历格子模型。

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::annotation::Annotation;

/// 月历网格中的一格
///
/// 每次构建网格时新建，渲染后即丢弃。是否选中不在此记录，
/// 由调用方比较 `date` 与当前选中日期得出。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCell {
    /// 公历日期
    pub date: NaiveDate,
    /// 是否属于当前显示的月份（否则为前/后月溢出格）
    pub in_current_month: bool,
    /// 是否今天（仅当月格子会置位）
    pub is_today: bool,
    /// 当天标注
    pub annotation: Annotation,
}

impl DayCell {
    /// 是否周末（周六/周日）
    pub fn is_weekend(&self) -> bool {
        matches!(self.date.weekday(), Weekday::Sat | Weekday::Sun)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::annotation::{DayMark, HolidayStatus};

    fn cell(date: NaiveDate) -> DayCell {
        DayCell {
            date,
            in_current_month: true,
            is_today: false,
            annotation: Annotation {
                mark: DayMark::PlainLunarDay("初一".to_string()),
                holiday_status: HolidayStatus::None,
                holiday_name: String::new(),
            },
        }
    }

    #[test]
    fn weekend_detection() {
        // 2024-02-03 周六，2024-02-04 周日，2024-02-05 周一
        assert!(cell(NaiveDate::from_ymd_opt(2024, 2, 3).unwrap()).is_weekend());
        assert!(cell(NaiveDate::from_ymd_opt(2024, 2, 4).unwrap()).is_weekend());
        assert!(!cell(NaiveDate::from_ymd_opt(2024, 2, 5).unwrap()).is_weekend());
    }
}
