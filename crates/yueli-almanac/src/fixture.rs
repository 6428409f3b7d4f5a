//! 表驱动的测试数据源。
//!
//! 集成测试用：不碰真实历法数据，按预先注入的表返回结果，
//! 未注入的日期一律按普通日子处理。

use std::collections::HashMap;

use chrono::NaiveDate;

use yueli_core::ports::almanac::{AlmanacDayInfo, AlmanacSource, LegalDayOff};

/// 固定数据的黄历数据源
#[derive(Debug, Default)]
pub struct FixtureAlmanac {
    days: HashMap<NaiveDate, AlmanacDayInfo>,
    holidays: HashMap<NaiveDate, LegalDayOff>,
}

impl FixtureAlmanac {
    /// 空表数据源：所有日期都是普通日子
    pub fn new() -> Self {
        Self::default()
    }

    /// 注入某天的黄历信息
    pub fn with_day(mut self, date: NaiveDate, info: AlmanacDayInfo) -> Self {
        self.days.insert(date, info);
        self
    }

    /// 注入某天的节气
    pub fn with_term(self, date: NaiveDate, term: &str) -> Self {
        let info = AlmanacDayInfo {
            solar_term: Some(term.to_string()),
            ..plain_info(date)
        };
        self.with_day(date, info)
    }

    /// 注入某天的农历节日
    pub fn with_lunar_festival(self, date: NaiveDate, festival: &str) -> Self {
        let info = AlmanacDayInfo {
            lunar_festivals: vec![festival.to_string()],
            ..plain_info(date)
        };
        self.with_day(date, info)
    }

    /// 注入法定节假日安排
    pub fn with_holiday(mut self, date: NaiveDate, name: &str, is_adjusted_workday: bool) -> Self {
        self.holidays.insert(
            date,
            LegalDayOff {
                name: name.to_string(),
                is_adjusted_workday,
            },
        );
        self
    }
}

/// 普通日子的占位信息
fn plain_info(date: NaiveDate) -> AlmanacDayInfo {
    use chrono::Datelike;
    // 占位农历日序：跟公历日对齐即可，测试只关心形状
    let day = date.day().min(29) as u8;
    AlmanacDayInfo {
        solar_term: None,
        lunar_festivals: Vec::new(),
        solar_festivals: Vec::new(),
        lunar_day_of_month: day,
        lunar_month_name: "某月".to_string(),
        lunar_day_name: format!("第{day}日"),
    }
}

impl AlmanacSource for FixtureAlmanac {
    fn day_info(&self, date: NaiveDate) -> AlmanacDayInfo {
        self.days
            .get(&date)
            .cloned()
            .unwrap_or_else(|| plain_info(date))
    }

    fn holiday_info(&self, date: NaiveDate) -> Option<LegalDayOff> {
        self.holidays.get(&date).cloned()
    }
}
