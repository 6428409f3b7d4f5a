//! 年月值类型。
//!
//! 表示日历当前可见的月份，支持前后翻月与按时间先后比较。

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// 年月（month 取值 1-12）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct YearMonth {
    /// 公历年
    pub year: i32,
    /// 公历月（1-12）
    pub month: u32,
}

impl YearMonth {
    /// 构造年月
    pub fn new(year: i32, month: u32) -> Self {
        debug_assert!((1..=12).contains(&month));
        Self { year, month }
    }

    /// 取日期所在的年月
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// 下一个月
    pub fn succ(&self) -> Self {
        if self.month == 12 {
            Self::new(self.year + 1, 1)
        } else {
            Self::new(self.year, self.month + 1)
        }
    }

    /// 上一个月
    pub fn pred(&self) -> Self {
        if self.month == 1 {
            Self::new(self.year - 1, 12)
        } else {
            Self::new(self.year, self.month - 1)
        }
    }

    /// 当月第一天
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).expect("合法年月")
    }

    /// 当月天数
    pub fn day_count(&self) -> u32 {
        let next_first = self.succ().first_day();
        next_first
            .checked_sub_days(Days::new(1))
            .expect("合法年月")
            .day()
    }

    /// 日期是否落在当月
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}
