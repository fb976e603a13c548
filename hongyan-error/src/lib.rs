#![deny(missing_docs, unsafe_code)]
//! # Error
//!
//! 鸿雁消息队列客户端的错误描述与分类
//!

mod classify;
mod code;
mod descriptor;
mod error;

pub use classify::*;
pub use code::*;
pub use descriptor::*;
pub use error::*;

/// 调用方对一个错误的处置方式
///
/// 按分类标志的优先级（致命 > 中止事务 > 重试 > 记录）得出，
/// 仅作为便捷视图，分类标志本身仍可单独读取。
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Disposition {
    /// 客户端实例已不可用，必须销毁
    Fatal,

    /// 当前事务必须中止后才能继续事务操作
    AbortTransaction,

    /// 可以原样重试触发错误的操作
    Retry,

    /// 记录日志后继续
    Report,
}
