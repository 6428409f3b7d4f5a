//! 日历视图。
//!
//! 头部导航、周标题、42 格月网格与底部详情。

pub mod calendar_view;
pub mod month_grid;
