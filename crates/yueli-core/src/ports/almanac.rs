//! 黄历数据端口。
//!
//! 农历换算、节日表、节气与法定节假日安排全部委托给实现方，
//! 核心只消费查询结果。实现：`yueli-almanac` crate（tyme4rs 封装）。
//!
//! 契约为全函数：任何合法日期都返回一个值（可能为空标注），无失败分支。

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 某天的黄历信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlmanacDayInfo {
    /// 当天恰为节气时的节气名
    pub solar_term: Option<String>,
    /// 当天的农历节日（可能多个，按数据源顺序）
    pub lunar_festivals: Vec<String>,
    /// 当天的公历节日（可能多个，按数据源顺序）
    pub solar_festivals: Vec<String>,
    /// 农历日序（1-30）
    pub lunar_day_of_month: u8,
    /// 农历月名（如"正月"、"腊月"）
    pub lunar_month_name: String,
    /// 农历日名（如"初一"、"十五"）
    pub lunar_day_name: String,
}

/// 法定节假日安排表中的一条记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalDayOff {
    /// 节假日名称（如"春节"）
    pub name: String,
    /// 是否调休上班日
    pub is_adjusted_workday: bool,
}

/// 黄历数据源
pub trait AlmanacSource: Send + Sync {
    /// 查询某天的农历/节日/节气信息
    fn day_info(&self, date: NaiveDate) -> AlmanacDayInfo;

    /// 查询法定节假日安排，不在表内返回 None
    fn holiday_info(&self, date: NaiveDate) -> Option<LegalDayOff>;
}
