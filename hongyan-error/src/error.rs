use crate::ErrorDescriptor;

/// 未知错误码
///
/// [`ErrorCode::try_from`](crate::ErrorCode) 收到枚举范围外的值时返回；
/// 描述构造路径在本地恢复该错误，不会将其暴露给应用代码。
#[derive(Debug, Clone, Copy, Eq, PartialEq, thiserror::Error)]
#[error("Unknown error code: {0}")]
pub struct UnknownErrorCode(pub i16);

/// 客户端级操作的结果
///
/// 致命及事务性失败通过 `Err` 抛出；单条消息的投递失败作为数据返回，
/// 不使用该别名。
pub type Result<T> = std::result::Result<T, ErrorDescriptor>;
