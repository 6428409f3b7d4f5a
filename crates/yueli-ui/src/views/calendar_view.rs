//! 日历弹窗视图组合。
//!
//! 头部（年月 + 翻月/今天按钮）、周标题、月网格、底部选中日详情。

use chrono::{Datelike, NaiveDate};
use iced::widget::{button, column, horizontal_space, row, text};
use iced::{Alignment, Element, Length};

use yueli_core::models::annotation::Annotation;
use yueli_core::models::cell::DayCell;
use yueli_core::models::month::YearMonth;

use crate::app::Message;
use crate::i18n::Strings;
use crate::theme::{color, ThemeColors};
use crate::views::month_grid::month_grid;

/// 组合完整日历视图
pub fn calendar_view<'a>(
    cells: &[DayCell],
    visible: YearMonth,
    selected: NaiveDate,
    selected_annotation: &Annotation,
    colors: ThemeColors,
    strings: &'static Strings,
) -> Element<'a, Message> {
    column![
        header(visible, colors, strings),
        week_header(colors, strings),
        month_grid(cells, selected, colors),
        footer(selected, selected_annotation, colors),
    ]
    .spacing(8)
    .padding(12)
    .into()
}

/// 头部：年月标题 + 导航按钮
fn header(
    visible: YearMonth,
    colors: ThemeColors,
    strings: &'static Strings,
) -> Element<'static, Message> {
    let title = text(format!("{}年 {}月", visible.year, visible.month))
        .size(18)
        .color(color(colors.text_primary));

    let prev = button(text("‹").size(16))
        .padding([2.0, 10.0])
        .on_press(Message::PrevMonth);
    let today = button(text(strings.today_button).size(13))
        .padding([2.0, 10.0])
        .on_press(Message::GoToday);
    let next = button(text("›").size(16))
        .padding([2.0, 10.0])
        .on_press(Message::NextMonth);

    row![title, horizontal_space(), prev, today, next]
        .spacing(6)
        .align_y(Alignment::Center)
        .into()
}

/// 周标题：周日起首列
fn week_header(colors: ThemeColors, strings: &'static Strings) -> Element<'static, Message> {
    let mut header = row![].spacing(2);
    for (index, day) in strings.week_days.iter().enumerate() {
        let day_color = if index == 0 || index == 6 {
            colors.weekend
        } else {
            colors.text_secondary
        };
        header = header.push(
            text(*day)
                .size(12)
                .color(color(day_color))
                .width(Length::Fill)
                .align_x(Alignment::Center),
        );
    }
    header.into()
}

/// 底部：选中日期详情（公历 + 农历文字 + 节假日名）
fn footer(
    selected: NaiveDate,
    annotation: &Annotation,
    colors: ThemeColors,
) -> Element<'static, Message> {
    let mut detail = format!(
        "{}年{}月{}日 {}",
        selected.year(),
        selected.month(),
        selected.day(),
        annotation.text()
    );
    if !annotation.holiday_name.is_empty() {
        detail.push(' ');
        detail.push_str(&annotation.holiday_name);
    }

    row![text(detail).size(13).color(color(colors.text_secondary))]
        .padding([4.0, 2.0])
        .into()
}
