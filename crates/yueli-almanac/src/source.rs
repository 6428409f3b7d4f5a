//! tyme4rs 黄历数据源。
//!
//! 农历换算、节日表、节气与法定节假日安排全部来自 tyme4rs
//! （lunar-javascript 作者的 Rust 库），本模块只做查询结果到
//! 端口类型的映射，不做任何历法计算。

use std::num::NonZeroUsize;

use chrono::{Datelike, NaiveDate};
use lru::LruCache;
use parking_lot::Mutex;
use tracing::debug;

use tyme4rs::tyme::holiday::LegalHoliday;
use tyme4rs::tyme::solar::SolarDay;
use tyme4rs::tyme::Culture;

use yueli_core::ports::almanac::{AlmanacDayInfo, AlmanacSource, LegalDayOff};

/// 默认缓存容量：约三屏网格（42 × 3）再留余量
const DEFAULT_CACHE_SIZE: usize = 256;

/// tyme4rs 封装的黄历数据源
///
/// 查询是纯计算但不算便宜（农历换算 + 节气推算），
/// 翻月时同一天会被反复取到，用 LRU 缓存挡掉重复计算。
pub struct TymeAlmanac {
    /// 按日期缓存的查询结果
    cache: Mutex<LruCache<NaiveDate, AlmanacDayInfo>>,
}

impl TymeAlmanac {
    /// 以默认缓存容量创建
    pub fn new() -> Self {
        Self::with_cache_size(DEFAULT_CACHE_SIZE)
    }

    /// 以指定缓存容量创建
    pub fn with_cache_size(size: usize) -> Self {
        let size = NonZeroUsize::new(size.max(1)).expect("容量非零");
        debug!("初始化黄历数据源 (缓存容量 {size})");
        Self {
            cache: Mutex::new(LruCache::new(size)),
        }
    }

    /// 实际查询 tyme4rs
    fn lookup(date: NaiveDate) -> AlmanacDayInfo {
        let solar = SolarDay::from_ymd(
            date.year() as isize,
            date.month() as usize,
            date.day() as usize,
        );
        let lunar = solar.get_lunar_day();

        // 节气：term_day 的 day_index 为 0 表示当天恰是节气日
        let term_day = solar.get_term_day();
        let solar_term = if term_day.get_day_index() == 0 {
            Some(term_day.get_name())
        } else {
            None
        };

        // tyme4rs 每天至多一个官方节日，端口契约保留序列形状
        let lunar_festivals: Vec<String> = lunar
            .get_festival()
            .map(|f| f.get_name())
            .into_iter()
            .collect();
        let solar_festivals: Vec<String> = solar
            .get_festival()
            .map(|f| f.get_name())
            .into_iter()
            .collect();

        AlmanacDayInfo {
            solar_term,
            lunar_festivals,
            solar_festivals,
            lunar_day_of_month: lunar.get_day() as u8,
            lunar_month_name: lunar.get_lunar_month().get_name(),
            lunar_day_name: lunar.get_name(),
        }
    }
}

impl Default for TymeAlmanac {
    fn default() -> Self {
        Self::new()
    }
}

impl AlmanacSource for TymeAlmanac {
    fn day_info(&self, date: NaiveDate) -> AlmanacDayInfo {
        if let Some(info) = self.cache.lock().get(&date) {
            return info.clone();
        }

        let info = Self::lookup(date);
        self.cache.lock().put(date, info.clone());
        info
    }

    fn holiday_info(&self, date: NaiveDate) -> Option<LegalDayOff> {
        LegalHoliday::from_ymd(
            date.year() as isize,
            date.month() as usize,
            date.day() as usize,
        )
        .map(|holiday| LegalDayOff {
            name: holiday.get_name(),
            is_adjusted_workday: holiday.is_work(),
        })
    }
}
