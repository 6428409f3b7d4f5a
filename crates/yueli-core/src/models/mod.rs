//! 月历领域模型。
//!
//! 日历网格与标注用到的核心数据结构。
//! 全部为值类型，由渲染层持有，每次构建即丢弃，无共享可变状态。

pub mod annotation;
pub mod cell;
pub mod month;
