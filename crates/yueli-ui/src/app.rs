//! 月历主应用。
//!
//! iced 0.13 应用：日历弹窗、托盘事件轮询、托盘时钟。
//! 翻月状态由 [`yueli_core::navigation::Navigation`] 裁决，
//! 这里只负责把用户输入交给状态机、按票据排定滑动收尾回调。

use std::sync::mpsc;
use std::sync::Arc;
use std::time::Duration;

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, Timelike};
use iced::{event, mouse, window, Element, Event, Point, Subscription, Task, Theme};
use tracing::{debug, info};

use yueli_core::config::{AppConfig, ThemePreference};
use yueli_core::grid::build_grid;
use yueli_core::navigation::{Navigation, SlideTicket};
use yueli_core::ports::almanac::AlmanacSource;
use yueli_core::resolver::resolve;

use crate::i18n::{Locale, Strings};
use crate::theme::{ThemeColors, ThemeMode};
use crate::tray::{TrayEvent, TrayManager, TrayRect};
use crate::views::calendar_view::calendar_view;

/// 应用消息（用户操作与事件）
#[derive(Debug, Clone)]
pub enum Message {
    // 导航
    /// 上一个月
    PrevMonth,
    /// 下一个月
    NextMonth,
    /// 回到今天
    GoToday,
    /// 选中日期
    SelectDate(NaiveDate),
    /// 滚轮翻月（deltaY，向下为正）
    Wheel(f32),
    /// 滑动收尾（携带排定时的 epoch）
    SlideFinished(u64),

    // 周期事件
    /// 时钟滴答（每秒）：刷新今天与托盘标题
    ClockTick,
    /// 托盘事件轮询
    PollTray,

    // 窗口
    /// 窗口已创建，记录 ID
    WindowOpened(window::Id),
    /// 隐藏弹窗（失焦/关闭请求）
    HideWindow(window::Id),
}

/// 月历应用状态
pub struct CalendarApp {
    /// 导航状态机
    nav: Navigation,
    /// 黄历数据源
    source: Arc<dyn AlmanacSource>,
    /// 应用配置
    config: AppConfig,
    /// 今天（时钟滴答时刷新，跨天后今天标记随之移动）
    today: NaiveDate,
    /// 界面语言
    locale: Locale,
    /// 主题模式
    theme_mode: ThemeMode,
    /// 弹窗当前是否可见
    window_visible: bool,
    /// 弹窗窗口 ID
    window_id: Option<window::Id>,
    /// 托盘句柄（主线程持有，更新标题用）
    tray: Option<&'static TrayManager>,
    /// 托盘事件接收通道
    tray_rx: Option<mpsc::Receiver<TrayEvent>>,
}

impl CalendarApp {
    /// 创建应用状态
    pub fn new(source: Arc<dyn AlmanacSource>, config: AppConfig) -> Self {
        let locale = config
            .ui
            .language
            .as_deref()
            .and_then(Locale::from_code)
            .unwrap_or_else(Locale::detect_system);
        let theme_mode = match config.ui.theme {
            ThemePreference::Light => ThemeMode::Light,
            ThemePreference::Dark => ThemeMode::Dark,
        };

        let today = Local::now().date_naive();
        let nav = Navigation::new(
            today,
            config.slide_duration(),
            config.calendar.wheel_threshold,
        );

        info!("月历初始化 (locale: {}, 今天: {today})", locale.code());

        Self {
            nav,
            source,
            config,
            today,
            locale,
            theme_mode,
            window_visible: false,
            window_id: None,
            tray: None,
            tray_rx: None,
        }
    }

    /// 挂接托盘句柄与事件通道
    pub fn with_tray(
        mut self,
        manager: &'static TrayManager,
        rx: mpsc::Receiver<TrayEvent>,
    ) -> Self {
        self.tray = Some(manager);
        self.tray_rx = Some(rx);
        self
    }

    /// 指定界面语言
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// 当前文案表
    fn strings(&self) -> &'static Strings {
        Strings::for_locale(self.locale)
    }

    /// 应用标题
    pub fn title(&self) -> String {
        self.strings().app_title.to_string()
    }

    /// 消息处理
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PrevMonth => {
                let ticket = self.nav.prev_month();
                return self.schedule_finish(ticket);
            }

            Message::NextMonth => {
                let ticket = self.nav.next_month();
                return self.schedule_finish(ticket);
            }

            Message::GoToday => {
                self.refresh_today();
                self.nav.go_today(self.today);
            }

            Message::SelectDate(date) => {
                debug!("选中日期: {date}");
                let ticket = self.nav.select_date(date);
                return self.schedule_finish(ticket);
            }

            Message::Wheel(delta_y) => {
                let ticket = self.nav.wheel(delta_y);
                return self.schedule_finish(ticket);
            }

            Message::SlideFinished(epoch) => {
                self.nav.finish_slide(epoch);
            }

            Message::ClockTick => {
                self.refresh_today();
                self.update_tray_clock();
            }

            Message::PollTray => return self.poll_tray(),

            Message::WindowOpened(id) => {
                self.window_id = Some(id);
                debug!("窗口 ID 记录: {id:?}");
            }

            Message::HideWindow(id) => {
                self.window_visible = false;
                return window::change_mode(id, window::Mode::Hidden);
            }
        }

        Task::none()
    }

    /// 视图
    pub fn view(&self) -> Element<'_, Message> {
        // 滑动中直接渲染目标月份；状态机保证同时至多一个滑动在途
        let month = self
            .nav
            .pending_month()
            .unwrap_or_else(|| self.nav.visible_month());
        let cells = build_grid(self.source.as_ref(), month, self.today);
        let selected = self.nav.selected_date();
        let annotation = resolve(self.source.as_ref(), selected);
        let colors = ThemeColors::for_mode(self.theme_mode);

        calendar_view(&cells, month, selected, &annotation, colors, self.strings())
    }

    /// 主题
    pub fn theme(&self) -> Theme {
        match self.theme_mode {
            ThemeMode::Light => Theme::Light,
            ThemeMode::Dark => Theme::Dark,
        }
    }

    /// 订阅：时钟、托盘轮询、窗口/滚轮事件
    pub fn subscription(&self) -> Subscription<Message> {
        let window_events = event::listen_with(|event, _status, id| match event {
            // 失焦或点关闭都只隐藏弹窗（exit_on_close_request(false) 前提）
            Event::Window(window::Event::CloseRequested) => Some(Message::HideWindow(id)),
            Event::Window(window::Event::Unfocused) => Some(Message::HideWindow(id)),
            Event::Window(window::Event::Opened { .. }) => Some(Message::WindowOpened(id)),
            Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                Some(Message::Wheel(wheel_delta(delta)))
            }
            _ => None,
        });

        Subscription::batch([
            iced::time::every(Duration::from_secs(1)).map(|_| Message::ClockTick),
            iced::time::every(Duration::from_millis(100)).map(|_| Message::PollTray),
            window_events,
        ])
    }

    /// 按票据排定一次性滑动收尾回调；请求被丢弃时无事发生
    fn schedule_finish(&self, ticket: Option<SlideTicket>) -> Task<Message> {
        match ticket {
            Some(ticket) => Task::perform(tokio::time::sleep(ticket.duration), move |_| {
                Message::SlideFinished(ticket.epoch)
            }),
            None => Task::none(),
        }
    }

    /// 刷新"今天"
    fn refresh_today(&mut self) {
        let now = Local::now().date_naive();
        if now != self.today {
            info!("跨天: {} → {now}", self.today);
            self.today = now;
        }
    }

    /// 更新托盘时钟标题
    fn update_tray_clock(&self) {
        if !self.config.tray.show_clock {
            return;
        }
        let Some(tray) = self.tray else { return };
        let title = tray_clock(Local::now().naive_local(), self.locale, self.strings());
        tray.set_title(&title);
    }

    /// 处理积压的托盘事件
    fn poll_tray(&mut self) -> Task<Message> {
        let mut events = Vec::new();
        if let Some(rx) = &self.tray_rx {
            while let Ok(event) = rx.try_recv() {
                events.push(event);
            }
        }

        let mut tasks = Vec::new();
        for event in events {
            debug!("托盘事件: {:?}", event);
            match event {
                TrayEvent::ToggleWindow(anchor) => {
                    if self.window_visible {
                        tasks.push(self.hide_window());
                    } else {
                        tasks.push(self.show_window(anchor));
                    }
                }
                TrayEvent::GoToday => {
                    self.refresh_today();
                    self.nav.go_today(self.today);
                    if !self.window_visible {
                        tasks.push(self.show_window(None));
                    }
                }
                TrayEvent::Quit => {
                    info!("托盘退出请求");
                    tasks.push(iced::exit());
                }
            }
        }

        Task::batch(tasks)
    }

    /// 隐藏弹窗
    fn hide_window(&mut self) -> Task<Message> {
        self.window_visible = false;
        match self.window_id {
            Some(id) => window::change_mode(id, window::Mode::Hidden),
            None => Task::none(),
        }
    }

    /// 显示弹窗并定位到托盘图标下方
    fn show_window(&mut self, anchor: Option<TrayRect>) -> Task<Message> {
        self.window_visible = true;

        #[cfg(target_os = "macos")]
        crate::native_macos::activate_app();

        let Some(id) = self.window_id else {
            return Task::none();
        };

        let mut tasks = vec![window::change_mode(id, window::Mode::Windowed)];
        if let Some(rect) = anchor {
            tasks.push(window::move_to(id, self.popover_position(rect)));
        }
        tasks.push(window::gain_focus(id));
        Task::batch(tasks)
    }

    /// 弹窗位置：水平居中对齐托盘图标，垂直在其下方
    fn popover_position(&self, rect: TrayRect) -> Point {
        // TODO: 处理多显示器与 HiDPI 缩放因子（目前按主屏坐标近似）
        let x = (rect.x + rect.width / 2.0 - f64::from(self.config.window.width) / 2.0).max(0.0);
        let y = rect.y + rect.height + f64::from(self.config.window.tray_gap);
        Point::new(x as f32, y as f32)
    }
}

/// iced 滚轮增量 → deltaY（向下为正）约定
fn wheel_delta(delta: mouse::ScrollDelta) -> f32 {
    // iced 滚轮向上为正；一行滚动按 40px 折算
    match delta {
        mouse::ScrollDelta::Lines { y, .. } => -y * 40.0,
        mouse::ScrollDelta::Pixels { y, .. } => -y,
    }
}

/// 托盘时钟标题
fn tray_clock(now: NaiveDateTime, locale: Locale, strings: &Strings) -> String {
    let week = strings.clock_week_days[now.weekday().num_days_from_sunday() as usize];
    match locale {
        Locale::Zh => format!(
            "{}月{}日 {} {:02}:{:02}",
            now.month(),
            now.day(),
            week,
            now.hour(),
            now.minute()
        ),
        Locale::En => format!(
            "{}/{} {} {:02}:{:02}",
            now.month(),
            now.day(),
            week,
            now.hour(),
            now.minute()
        ),
    }
}
