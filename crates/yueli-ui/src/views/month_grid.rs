//! 月历网格视图。
//!
//! 6×7 的日期格按钮：公历日号 + 农历/节日/节气小字 + "休/班"角标。
//! 是否选中由调用方传入的选中日期比对得出，格子数据本身不带选中位。

use chrono::{Datelike, NaiveDate};
use iced::widget::{button, column, row, text};
use iced::{Alignment, Background, Element, Length};

use yueli_core::models::annotation::{DayMark, HolidayStatus};
use yueli_core::models::cell::DayCell;

use crate::app::Message;
use crate::theme::{color, ThemeColors};

/// 格子高度
const CELL_HEIGHT: f32 = 58.0;

/// 构建 6×7 网格
pub fn month_grid<'a>(
    cells: &[DayCell],
    selected: NaiveDate,
    colors: ThemeColors,
) -> Element<'a, Message> {
    let mut grid = column![].spacing(2);
    for week in cells.chunks(7) {
        let mut week_row = row![].spacing(2);
        for cell in week {
            week_row = week_row.push(day_cell(cell, selected, colors));
        }
        grid = grid.push(week_row);
    }
    grid.into()
}

/// 单个日期格
fn day_cell<'a>(cell: &DayCell, selected: NaiveDate, colors: ThemeColors) -> Element<'a, Message> {
    let is_selected = cell.date == selected;

    let number_color = if is_selected {
        colors.on_accent
    } else if !cell.in_current_month {
        colors.text_faded
    } else if cell.is_weekend() {
        colors.weekend
    } else {
        colors.text_primary
    };

    let mark_color = if is_selected {
        colors.on_accent
    } else if !cell.in_current_month {
        colors.text_faded
    } else {
        match cell.annotation.mark {
            DayMark::SolarTerm(_) => colors.solar_term,
            DayMark::LunarFestival(_) | DayMark::SolarFestival(_) => colors.festival,
            DayMark::PlainLunarDay(_) => colors.text_secondary,
        }
    };

    let mut number_line = row![text(cell.date.day().to_string())
        .size(15)
        .color(color(number_color))]
    .spacing(2)
    .align_y(Alignment::Center);

    match cell.annotation.holiday_status {
        HolidayStatus::Holiday => {
            number_line = number_line.push(text("休").size(9).color(color(colors.rest_badge)));
        }
        HolidayStatus::Workday => {
            number_line = number_line.push(text("班").size(9).color(color(colors.work_badge)));
        }
        HolidayStatus::None => {}
    }

    let content = column![
        number_line,
        text(cell.annotation.text().to_string())
            .size(10)
            .color(color(mark_color)),
    ]
    .spacing(2)
    .align_x(Alignment::Center);

    let background = if is_selected {
        Some(colors.accent)
    } else if cell.is_today {
        Some(colors.today_fill)
    } else {
        None
    };
    let hover_fill = colors.hover_fill;

    button(content)
        .width(Length::Fill)
        .height(Length::Fixed(CELL_HEIGHT))
        .padding(4)
        .on_press(Message::SelectDate(cell.date))
        .style(move |_theme, status| {
            let mut style = button::Style {
                background: background.map(|rgb| Background::Color(color(rgb))),
                text_color: color(number_color),
                border: iced::border::rounded(8.0),
                ..button::Style::default()
            };
            if matches!(status, button::Status::Hovered) && background.is_none() {
                style.background = Some(Background::Color(color(hover_fill)));
            }
            style
        })
        .into()
}
