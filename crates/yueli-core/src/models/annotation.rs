//! 日期标注模型。
//!
//! 一条标注由"当天显示什么文字"（[`DayMark`]）和
//! 法定节假日状态（[`HolidayStatus`]）两部分组成。

use serde::{Deserialize, Serialize};

/// 当天的显示标记
///
/// 同一天只保留一个标记，优先级在解析器中裁决。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayMark {
    /// 节气（立春、冬至等）
    SolarTerm(String),
    /// 农历节日（春节、端午等）
    LunarFestival(String),
    /// 公历节日（元旦、国庆等）
    SolarFestival(String),
    /// 普通日子：初一显示月名（"正月"），其余显示日名（"十五"）
    PlainLunarDay(String),
}

impl DayMark {
    /// 显示文字
    pub fn text(&self) -> &str {
        match self {
            DayMark::SolarTerm(s)
            | DayMark::LunarFestival(s)
            | DayMark::SolarFestival(s)
            | DayMark::PlainLunarDay(s) => s,
        }
    }

    /// 是否节日（农历或公历）
    pub fn is_festival(&self) -> bool {
        matches!(self, DayMark::LunarFestival(_) | DayMark::SolarFestival(_))
    }

    /// 是否节气
    pub fn is_solar_term(&self) -> bool {
        matches!(self, DayMark::SolarTerm(_))
    }
}

/// 法定节假日状态
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HolidayStatus {
    /// 不在节假日安排表内（周末与否由调用方按星期推断）
    #[default]
    None,
    /// 放假（休）
    Holiday,
    /// 调休上班（班）
    Workday,
}

/// 某一天的完整标注
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    /// 显示标记
    pub mark: DayMark,
    /// 法定节假日状态
    pub holiday_status: HolidayStatus,
    /// 节假日名称，不在安排表内时为空串
    pub holiday_name: String,
}

impl Annotation {
    /// 显示文字
    pub fn text(&self) -> &str {
        self.mark.text()
    }
}
