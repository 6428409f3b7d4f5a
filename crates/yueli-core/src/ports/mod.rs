//! 端口接口（trait）。
//!
//! 六边形架构的端口层：核心只依赖这里的 trait，
//! 具体数据来源由适配器 crate（`yueli-almanac`）实现，
//! 在 `yueli-app` 中以 `Arc<dyn T>` 注入。

pub mod almanac;
