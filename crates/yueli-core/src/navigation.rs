//! 月份导航状态机。
//!
//! 管理当前可见月份、选中日期与翻月滑动的瞬态。
//! 同一时刻最多一个滑动在途：非 Idle 阶段的翻月请求一律丢弃
//! （回到今天除外，它总是立即生效）。
//!
//! 滑动的收尾由外层在动画时长后回调 [`Navigation::finish_slide`]。
//! 每次被接受的转换都会递增 epoch 计数，收尾回调必须携带当时的
//! epoch 才被认可——"回到今天"打断滑动后，先前排定的回调因 epoch
//! 过期而失效，不会再动状态。

use chrono::NaiveDate;
use std::time::Duration;
use tracing::debug;

use crate::models::month::YearMonth;

/// 滑动阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlidePhase {
    /// 静止
    #[default]
    Idle,
    /// 向上滑出（看下一个月）
    SlidingUp,
    /// 向下滑出（看上一个月）
    SlidingDown,
}

/// 一次被接受的滑动转换
///
/// 外层据此排定一次性的收尾回调：`duration` 后携带 `epoch`
/// 调用 [`Navigation::finish_slide`]。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideTicket {
    /// 本次转换的 epoch，收尾时校验
    pub epoch: u64,
    /// 动画时长
    pub duration: Duration,
}

/// 导航状态机
#[derive(Debug, Clone)]
pub struct Navigation {
    /// 当前可见月份
    visible_month: YearMonth,
    /// 当前选中日期
    selected_date: NaiveDate,
    /// 滑动阶段
    phase: SlidePhase,
    /// 滑动目标月份；不变式：phase != Idle 时必有值
    pending_month: Option<YearMonth>,
    /// 转换代次，用于判停过期的收尾回调
    epoch: u64,
    /// 滑动动画时长
    slide_duration: Duration,
    /// 滚轮噪声阈值
    wheel_threshold: f32,
}

impl Navigation {
    /// 初始状态：可见月 = 今天所在月，选中今天，静止
    pub fn new(today: NaiveDate, slide_duration: Duration, wheel_threshold: f32) -> Self {
        Self {
            visible_month: YearMonth::from_date(today),
            selected_date: today,
            phase: SlidePhase::Idle,
            pending_month: None,
            epoch: 0,
            slide_duration,
            wheel_threshold,
        }
    }

    /// 当前可见月份
    pub fn visible_month(&self) -> YearMonth {
        self.visible_month
    }

    /// 当前选中日期
    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    /// 当前滑动阶段
    pub fn phase(&self) -> SlidePhase {
        self.phase
    }

    /// 滑动目标月份
    pub fn pending_month(&self) -> Option<YearMonth> {
        self.pending_month
    }

    /// 切到上一个月；滑动中请求被丢弃并返回 None
    pub fn prev_month(&mut self) -> Option<SlideTicket> {
        let target = self.visible_month.pred();
        self.begin_slide(target, SlidePhase::SlidingDown)
    }

    /// 切到下一个月；滑动中请求被丢弃并返回 None
    pub fn next_month(&mut self) -> Option<SlideTicket> {
        let target = self.visible_month.succ();
        self.begin_slide(target, SlidePhase::SlidingUp)
    }

    /// 滚轮翻月
    ///
    /// |delta_y| 低于噪声阈值忽略；为正翻下一个月，为负翻上一个月。
    pub fn wheel(&mut self, delta_y: f32) -> Option<SlideTicket> {
        if delta_y.abs() < self.wheel_threshold {
            return None;
        }
        if delta_y > 0.0 {
            self.next_month()
        } else {
            self.prev_month()
        }
    }

    /// 选中日期
    ///
    /// 选中无条件生效；日期不在可见月内时按时间先后
    /// 触发与 prev/next 相同的翻月滑动。
    pub fn select_date(&mut self, date: NaiveDate) -> Option<SlideTicket> {
        self.selected_date = date;

        let target = YearMonth::from_date(date);
        match target.cmp(&self.visible_month) {
            std::cmp::Ordering::Equal => None,
            std::cmp::Ordering::Greater => {
                let next = self.visible_month.succ();
                self.begin_slide(next, SlidePhase::SlidingUp)
            }
            std::cmp::Ordering::Less => {
                let prev = self.visible_month.pred();
                self.begin_slide(prev, SlidePhase::SlidingDown)
            }
        }
    }

    /// 回到今天
    ///
    /// 任何阶段都直接跳转，不走滑动动画。epoch 递增使
    /// 仍在途的收尾回调过期。
    pub fn go_today(&mut self, today: NaiveDate) {
        self.visible_month = YearMonth::from_date(today);
        self.selected_date = today;
        self.phase = SlidePhase::Idle;
        self.pending_month = None;
        self.epoch += 1;
        debug!("回到今天: {today}");
    }

    /// 滑动收尾
    ///
    /// 只有携带当前 epoch 的回调才生效：提交目标月份并回到 Idle。
    /// 过期回调（epoch 不符或已静止）原样返回 false，不改任何状态。
    pub fn finish_slide(&mut self, epoch: u64) -> bool {
        if epoch != self.epoch || self.phase == SlidePhase::Idle {
            debug!("忽略过期的滑动收尾回调 (epoch {epoch})");
            return false;
        }
        if let Some(month) = self.pending_month.take() {
            self.visible_month = month;
        }
        self.phase = SlidePhase::Idle;
        true
    }

    fn begin_slide(&mut self, target: YearMonth, phase: SlidePhase) -> Option<SlideTicket> {
        if self.phase != SlidePhase::Idle {
            debug!("滑动进行中，丢弃翻月请求: {}-{}", target.year, target.month);
            return None;
        }
        self.phase = phase;
        self.pending_month = Some(target);
        self.epoch += 1;
        Some(SlideTicket {
            epoch: self.epoch,
            duration: self.slide_duration,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SLIDE: Duration = Duration::from_millis(300);

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn nav() -> Navigation {
        Navigation::new(date(2024, 2, 15), SLIDE, 20.0)
    }

    #[test]
    fn initial_state() {
        let nav = nav();
        assert_eq!(nav.visible_month(), YearMonth::new(2024, 2));
        assert_eq!(nav.selected_date(), date(2024, 2, 15));
        assert_eq!(nav.phase(), SlidePhase::Idle);
        assert!(nav.pending_month().is_none());
    }

    #[test]
    fn next_month_slides_up_then_commits() {
        let mut nav = nav();
        let ticket = nav.next_month().unwrap();
        assert_eq!(ticket.duration, SLIDE);
        assert_eq!(nav.phase(), SlidePhase::SlidingUp);
        assert_eq!(nav.pending_month(), Some(YearMonth::new(2024, 3)));
        // 提交前可见月不变
        assert_eq!(nav.visible_month(), YearMonth::new(2024, 2));

        assert!(nav.finish_slide(ticket.epoch));
        assert_eq!(nav.visible_month(), YearMonth::new(2024, 3));
        assert_eq!(nav.phase(), SlidePhase::Idle);
        assert!(nav.pending_month().is_none());
    }

    #[test]
    fn prev_month_slides_down() {
        let mut nav = nav();
        let ticket = nav.prev_month().unwrap();
        assert_eq!(nav.phase(), SlidePhase::SlidingDown);
        assert_eq!(nav.pending_month(), Some(YearMonth::new(2024, 1)));
        assert!(nav.finish_slide(ticket.epoch));
        assert_eq!(nav.visible_month(), YearMonth::new(2024, 1));
    }

    #[test]
    fn rapid_double_next_advances_one_month() {
        let mut nav = nav();
        let ticket = nav.next_month().unwrap();
        // 动画未结束的第二次请求被丢弃
        assert!(nav.next_month().is_none());
        assert!(nav.finish_slide(ticket.epoch));
        assert_eq!(nav.visible_month(), YearMonth::new(2024, 3));
    }

    #[test]
    fn wheel_respects_noise_threshold() {
        let mut nav = nav();
        assert!(nav.wheel(10.0).is_none());
        assert!(nav.wheel(-19.9).is_none());
        assert_eq!(nav.phase(), SlidePhase::Idle);

        let ticket = nav.wheel(25.0).unwrap();
        assert_eq!(nav.phase(), SlidePhase::SlidingUp);
        assert!(nav.finish_slide(ticket.epoch));

        let ticket = nav.wheel(-25.0).unwrap();
        assert_eq!(nav.phase(), SlidePhase::SlidingDown);
        assert!(nav.finish_slide(ticket.epoch));
        assert_eq!(nav.visible_month(), YearMonth::new(2024, 2));
    }

    #[test]
    fn select_date_in_visible_month_does_not_slide() {
        let mut nav = nav();
        assert!(nav.select_date(date(2024, 2, 20)).is_none());
        assert_eq!(nav.selected_date(), date(2024, 2, 20));
        assert_eq!(nav.phase(), SlidePhase::Idle);
    }

    #[test]
    fn select_next_month_date_slides_up() {
        let mut nav = nav();
        let ticket = nav.select_date(date(2024, 3, 1)).unwrap();
        assert_eq!(nav.selected_date(), date(2024, 3, 1));
        assert_eq!(nav.phase(), SlidePhase::SlidingUp);
        assert_eq!(nav.pending_month(), Some(YearMonth::new(2024, 3)));
        assert!(nav.finish_slide(ticket.epoch));
        assert_eq!(nav.visible_month(), YearMonth::new(2024, 3));
    }

    #[test]
    fn select_prev_month_date_slides_down() {
        let mut nav = nav();
        let _ = nav.select_date(date(2024, 1, 31)).unwrap();
        assert_eq!(nav.phase(), SlidePhase::SlidingDown);
        assert_eq!(nav.pending_month(), Some(YearMonth::new(2024, 1)));
    }

    #[test]
    fn select_during_slide_updates_selection_only() {
        let mut nav = nav();
        let ticket = nav.next_month().unwrap();
        // 滑动中点选上月日期：选中生效，翻月被丢弃
        assert!(nav.select_date(date(2024, 1, 5)).is_none());
        assert_eq!(nav.selected_date(), date(2024, 1, 5));
        assert_eq!(nav.pending_month(), Some(YearMonth::new(2024, 3)));

        assert!(nav.finish_slide(ticket.epoch));
        assert_eq!(nav.visible_month(), YearMonth::new(2024, 3));
    }

    #[test]
    fn go_today_jumps_directly() {
        let mut nav = nav();
        let ticket = nav.next_month().unwrap();
        assert!(nav.finish_slide(ticket.epoch));
        let ticket = nav.next_month().unwrap();
        assert!(nav.finish_slide(ticket.epoch));
        assert_eq!(nav.visible_month(), YearMonth::new(2024, 4));

        nav.go_today(date(2024, 2, 15));
        assert_eq!(nav.visible_month(), YearMonth::new(2024, 2));
        assert_eq!(nav.selected_date(), date(2024, 2, 15));
        assert_eq!(nav.phase(), SlidePhase::Idle);
    }

    #[test]
    fn go_today_invalidates_inflight_slide() {
        let mut nav = nav();
        let ticket = nav.next_month().unwrap();
        assert_eq!(nav.phase(), SlidePhase::SlidingUp);

        // 滑动中回到今天：直接跳转
        nav.go_today(date(2024, 2, 15));
        assert_eq!(nav.phase(), SlidePhase::Idle);
        assert!(nav.pending_month().is_none());

        // 先前排定的收尾回调过期，不再动状态
        assert!(!nav.finish_slide(ticket.epoch));
        assert_eq!(nav.visible_month(), YearMonth::new(2024, 2));
        assert_eq!(nav.phase(), SlidePhase::Idle);
    }

    #[test]
    fn stale_epoch_after_new_slide_is_ignored() {
        let mut nav = nav();
        let first = nav.next_month().unwrap();
        nav.go_today(date(2024, 2, 15));
        let second = nav.next_month().unwrap();

        // 第一次滑动的回调迟到：epoch 过期
        assert!(!nav.finish_slide(first.epoch));
        assert_eq!(nav.phase(), SlidePhase::SlidingUp);

        assert!(nav.finish_slide(second.epoch));
        assert_eq!(nav.visible_month(), YearMonth::new(2024, 3));
    }

    #[test]
    fn phase_invariant_holds() {
        let mut nav = nav();
        let ticket = nav.next_month().unwrap();
        // 非 Idle 阶段必有 pending_month
        assert!(nav.phase() != SlidePhase::Idle);
        assert!(nav.pending_month().is_some());
        assert!(nav.finish_slide(ticket.epoch));
        assert!(nav.pending_month().is_none());
    }
}
