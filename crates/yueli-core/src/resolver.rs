//! 日期标注解析。
//!
//! 把黄历数据源对某一天的查询结果归并成一条 [`Annotation`]。
//! 纯函数，无副作用，对任何合法日期都有结果。

use chrono::NaiveDate;

use crate::models::annotation::{Annotation, DayMark, HolidayStatus};
use crate::ports::almanac::AlmanacSource;

/// 解析某天的显示标注
///
/// 显示标记按优先级取第一个命中项：
/// 节气 > 农历节日 > 公历节日 > 农历日名（初一显示月名）。
/// 同一天有多个节日时只取第一个，其余丢弃。
///
/// 法定节假日状态独立于显示标记查询：命中安排表时，调休上班日记
/// [`HolidayStatus::Workday`]，否则记 [`HolidayStatus::Holiday`]；
/// 不在表内记 [`HolidayStatus::None`]，周末与否由调用方按星期推断。
pub fn resolve(source: &dyn AlmanacSource, date: NaiveDate) -> Annotation {
    let info = source.day_info(date);

    let mark = if let Some(term) = info.solar_term {
        DayMark::SolarTerm(term)
    } else if let Some(festival) = info.lunar_festivals.into_iter().next() {
        DayMark::LunarFestival(festival)
    } else if let Some(festival) = info.solar_festivals.into_iter().next() {
        DayMark::SolarFestival(festival)
    } else if info.lunar_day_of_month == 1 {
        DayMark::PlainLunarDay(info.lunar_month_name)
    } else {
        DayMark::PlainLunarDay(info.lunar_day_name)
    };

    let (holiday_status, holiday_name) = match source.holiday_info(date) {
        Some(entry) => {
            let status = if entry.is_adjusted_workday {
                HolidayStatus::Workday
            } else {
                HolidayStatus::Holiday
            };
            (status, entry.name)
        }
        None => (HolidayStatus::None, String::new()),
    };

    Annotation {
        mark,
        holiday_status,
        holiday_name,
    }
}
