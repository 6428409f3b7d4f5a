//! 导航 → 网格构建集成测试。
//!
//! 用表驱动数据源走完整的公开 API 流程：
//! 翻月滑动、点选溢出日期、回到今天、网格标注。

use std::time::Duration;

use chrono::NaiveDate;

use yueli_almanac::FixtureAlmanac;
use yueli_core::grid::{build_grid, GRID_CELLS};
use yueli_core::models::annotation::{DayMark, HolidayStatus};
use yueli_core::models::month::YearMonth;
use yueli_core::navigation::{Navigation, SlidePhase};
use yueli_core::resolver::resolve;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn navigation(today: NaiveDate) -> Navigation {
    Navigation::new(today, Duration::from_millis(300), 20.0)
}

/// 2024 年 2 月的样例数据源
fn february_source() -> FixtureAlmanac {
    FixtureAlmanac::new()
        .with_term(date(2024, 2, 4), "立春")
        .with_lunar_festival(date(2024, 2, 10), "春节")
        .with_holiday(date(2024, 2, 10), "春节", false)
        .with_holiday(date(2024, 2, 4), "春节", true)
}

#[test]
fn february_2024_grid_layout_and_annotations() {
    let source = february_source();
    let today = date(2024, 2, 15);
    let grid = build_grid(&source, YearMonth::new(2024, 2), today);

    // 4 格一月溢出 + 29 天 + 9 格三月溢出
    assert_eq!(grid.len(), GRID_CELLS);
    assert_eq!(grid[0].date, date(2024, 1, 28));
    assert_eq!(grid[41].date, date(2024, 3, 9));
    assert_eq!(grid.iter().filter(|c| c.in_current_month).count(), 29);

    // 立春与春节的标注落在正确格子上
    let lichun = grid.iter().find(|c| c.date == date(2024, 2, 4)).unwrap();
    assert_eq!(lichun.annotation.mark, DayMark::SolarTerm("立春".to_string()));
    assert_eq!(lichun.annotation.holiday_status, HolidayStatus::Workday);

    let chunjie = grid.iter().find(|c| c.date == date(2024, 2, 10)).unwrap();
    assert_eq!(
        chunjie.annotation.mark,
        DayMark::LunarFestival("春节".to_string())
    );
    assert_eq!(chunjie.annotation.holiday_status, HolidayStatus::Holiday);
    assert_eq!(chunjie.annotation.holiday_name, "春节");

    // 今天标记唯一
    assert_eq!(grid.iter().filter(|c| c.is_today).count(), 1);
}

#[test]
fn select_spillover_date_slides_and_rebuilds_grid() {
    let source = february_source();
    let today = date(2024, 2, 15);
    let mut nav = navigation(today);

    // 点选 2 月网格里的 3/1 溢出格
    let ticket = nav.select_date(date(2024, 3, 1)).unwrap();
    assert_eq!(nav.phase(), SlidePhase::SlidingUp);
    assert_eq!(nav.pending_month(), Some(YearMonth::new(2024, 3)));

    // 滑动中按目标月份出图
    let pending = nav.pending_month().unwrap();
    let grid = build_grid(&source, pending, today);
    assert!(grid
        .iter()
        .any(|c| c.date == date(2024, 3, 1) && c.in_current_month));

    // 收尾提交
    assert!(nav.finish_slide(ticket.epoch));
    assert_eq!(nav.visible_month(), YearMonth::new(2024, 3));

    // 选中态由调用方比对得出
    let selected = nav.selected_date();
    assert_eq!(grid.iter().filter(|c| c.date == selected).count(), 1);
}

#[test]
fn go_today_during_slide_then_stale_callback() {
    let today = date(2024, 2, 15);
    let mut nav = navigation(today);

    let ticket = nav.next_month().unwrap();
    nav.go_today(today);

    // 迟到的收尾回调不得再动状态
    assert!(!nav.finish_slide(ticket.epoch));
    assert_eq!(nav.visible_month(), YearMonth::new(2024, 2));
    assert_eq!(nav.phase(), SlidePhase::Idle);
    assert!(nav.pending_month().is_none());
}

#[test]
fn resolver_over_fixture_matches_grid_cells() {
    // 网格格子的标注与单独调用解析器一致
    let source = february_source();
    let grid = build_grid(&source, YearMonth::new(2024, 2), date(2024, 2, 15));

    for cell in &grid {
        assert_eq!(cell.annotation, resolve(&source, cell.date));
    }
}

#[test]
fn wheel_sequence_moves_one_month_at_a_time() {
    let mut nav = navigation(date(2024, 2, 15));

    // 阈值之下的抖动不翻月
    assert!(nav.wheel(12.0).is_none());

    // 一次有效滚动 + 动画期间的连续滚动只前进一个月
    let ticket = nav.wheel(60.0).unwrap();
    assert!(nav.wheel(60.0).is_none());
    assert!(nav.wheel(60.0).is_none());
    assert!(nav.finish_slide(ticket.epoch));

    assert_eq!(nav.visible_month(), YearMonth::new(2024, 3));
}
