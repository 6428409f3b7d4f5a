//! # yueli-almanac
//!
//! [`yueli_core::ports::almanac::AlmanacSource`] 端口的适配器 crate。
//!
//! - [`source`] — tyme4rs 封装的真实数据源（带 LRU 缓存）
//! - [`fixture`] — 表驱动的测试数据源

pub mod fixture;
pub mod source;

pub use fixture::FixtureAlmanac;
pub use source::TymeAlmanac;
