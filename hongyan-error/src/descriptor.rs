use crate::{classify, Classification, Disposition, ErrorCode, UnknownErrorCode};
use serde::Serialize;
use std::borrow::Cow;

/// 错误描述
///
/// 客户端内部在操作异常完成时构造，构造后不可变，应用代码只读。
/// 调用方应根据分类标志决定控制流，`name` 与 `message` 仅用于诊断。
///
/// 应用代码无法直接构造：
///
/// ```compile_fail
/// use hongyan_error::{ErrorCode, ErrorDescriptor};
///
/// let _ = ErrorDescriptor {
///     code: ErrorCode::Unknown,
///     message: "".into(),
/// };
/// ```
#[derive(Debug, Clone, Serialize, thiserror::Error)]
#[error("{code}: {message}")]
pub struct ErrorDescriptor {
    code: ErrorCode,
    message: Cow<'static, str>,
}

impl ErrorDescriptor {
    /// 用已知错误码构造错误描述，没有动态诊断信息时回退到静态描述
    pub(crate) fn new(code: ErrorCode, message: Option<String>) -> Self {
        let message = match message {
            Some(message) if !message.is_empty() => Cow::Owned(message),
            _ => Cow::Borrowed(code.description()),
        };

        Self { code, message }
    }

    /// 用原始错误码构造错误描述
    ///
    /// 错误码超出枚举范围时在本地恢复为 [`ErrorCode::Unknown`]，
    /// 绝不产生二次失败掩盖原始问题。
    pub(crate) fn from_raw(code: i16, message: Option<String>) -> Self {
        let code = ErrorCode::try_from(code).unwrap_or_else(|UnknownErrorCode(raw)| {
            tracing::warn!(code = raw, "Unknown error code.");
            ErrorCode::Unknown
        });

        Self::new(code, message)
    }

    /// 获取原始错误码
    pub fn code(&self) -> i16 {
        self.code.code()
    }

    /// 获取错误码的稳定名称
    pub fn name(&self) -> &'static str {
        self.code.name()
    }

    /// 获取诊断信息，不保证跨版本稳定，不应用于分支判断
    pub fn message(&self) -> &str {
        &self.message
    }

    /// 客户端实例是否已进入不可恢复状态，必须销毁
    pub fn is_fatal(&self) -> bool {
        classify(self.code).fatal
    }

    /// 触发错误的操作是否可以原样重试
    pub fn is_retriable(&self) -> bool {
        classify(self.code).retriable
    }

    /// 处于活动事务中时，当前事务是否必须中止
    pub fn txn_requires_abort(&self) -> bool {
        classify(self.code).txn_requires_abort
    }

    /// 获取建议的处置方式
    pub fn disposition(&self) -> Disposition {
        let Classification {
            fatal,
            retriable,
            txn_requires_abort,
        } = classify(self.code);

        if fatal {
            Disposition::Fatal
        } else if txn_requires_abort {
            Disposition::AbortTransaction
        } else if retriable {
            Disposition::Retry
        } else {
            Disposition::Report
        }
    }
}

#[cfg(test)]
mod test {
    use super::ErrorDescriptor;
    use crate::{Disposition, ErrorCode};

    #[test]
    fn accessors() {
        let descriptor = ErrorDescriptor::new(
            ErrorCode::UnknownTopicOrPart,
            Some("Topic hongyan.dev not found on broker 3".to_string()),
        );

        assert_eq!(descriptor.code(), 3);
        assert_eq!(descriptor.name(), "UNKNOWN_TOPIC_OR_PART");
        assert_eq!(
            descriptor.message(),
            "Topic hongyan.dev not found on broker 3"
        );
        assert!(!descriptor.is_fatal());
        assert!(descriptor.is_retriable());
        assert!(!descriptor.txn_requires_abort());
    }

    #[test]
    fn accessors_are_idempotent() {
        let descriptor = ErrorDescriptor::new(ErrorCode::BrokerNotAvailable, None);

        assert_eq!(descriptor.code(), descriptor.code());
        assert_eq!(descriptor.name(), descriptor.name());
        assert_eq!(descriptor.message(), descriptor.message());
        assert_eq!(descriptor.is_fatal(), descriptor.is_fatal());
        assert_eq!(descriptor.is_retriable(), descriptor.is_retriable());
        assert_eq!(
            descriptor.txn_requires_abort(),
            descriptor.txn_requires_abort()
        );
    }

    #[test]
    fn message_falls_back_to_description() {
        let descriptor = ErrorDescriptor::new(ErrorCode::BrokerNotAvailable, None);
        assert_eq!(descriptor.message(), "Broker: Broker not available");

        let descriptor = ErrorDescriptor::new(ErrorCode::BrokerNotAvailable, Some(String::new()));
        assert_eq!(descriptor.message(), "Broker: Broker not available");
    }

    #[test]
    fn from_raw_known_code() {
        let descriptor = ErrorDescriptor::from_raw(8, None);
        assert_eq!(descriptor.code(), 8);
        assert_eq!(descriptor.name(), "BROKER_NOT_AVAILABLE");
    }

    #[test]
    fn from_raw_out_of_range_recovers() {
        let descriptor = ErrorDescriptor::from_raw(9999, None);
        assert_eq!(descriptor.code(), ErrorCode::Unknown.code());
        assert_eq!(descriptor.name(), "UNKNOWN");
        assert!(!descriptor.message().is_empty());

        // 动态诊断信息在恢复后保留
        let descriptor = ErrorDescriptor::from_raw(9999, Some("raw code 9999".to_string()));
        assert_eq!(descriptor.message(), "raw code 9999");
    }

    #[test]
    fn fenced_instance_is_fatal() {
        let descriptor = ErrorDescriptor::new(ErrorCode::FencedInstanceId, None);
        assert!(descriptor.is_fatal());
        assert!(!descriptor.is_retriable());
        assert_eq!(descriptor.disposition(), Disposition::Fatal);
    }

    #[test]
    fn txn_abort_without_fatal() {
        let descriptor = ErrorDescriptor::new(ErrorCode::TransactionCoordinatorFenced, None);
        assert!(descriptor.txn_requires_abort());
        assert!(!descriptor.is_fatal());
        assert_eq!(descriptor.disposition(), Disposition::AbortTransaction);
    }

    #[test]
    fn disposition_priority() {
        assert_eq!(
            ErrorDescriptor::new(ErrorCode::ProducerFenced, None).disposition(),
            Disposition::Fatal
        );
        assert_eq!(
            ErrorDescriptor::new(ErrorCode::OutOfOrderSequenceNumber, None).disposition(),
            Disposition::AbortTransaction
        );
        assert_eq!(
            ErrorDescriptor::new(ErrorCode::RequestTimedOut, None).disposition(),
            Disposition::Retry
        );
        assert_eq!(
            ErrorDescriptor::new(ErrorCode::TopicAlreadyExists, None).disposition(),
            Disposition::Report
        );
    }

    #[test]
    fn display() {
        let descriptor = ErrorDescriptor::new(ErrorCode::QueueFull, None);
        assert_eq!(descriptor.to_string(), "QUEUE_FULL: Local: Queue full");
    }

    #[test]
    fn propagates_as_error() {
        fn commit() -> crate::Result<()> {
            Err(ErrorDescriptor::new(ErrorCode::Fenced, None))
        }

        fn run() -> crate::Result<()> {
            commit()?;
            unreachable!()
        }

        let error = run().unwrap_err();
        assert!(error.is_fatal());

        let boxed: Box<dyn std::error::Error + Send + Sync> = Box::new(error);
        assert_eq!(
            boxed.to_string(),
            "FENCED: Local: This instance has been fenced by a newer instance"
        );
    }

    #[test]
    fn serialize() {
        let descriptor = ErrorDescriptor::new(ErrorCode::MsgTimedOut, None);
        assert_eq!(
            serde_json::to_value(&descriptor).unwrap(),
            serde_json::json!({
                "code": "MSG_TIMED_OUT",
                "message": "Local: Message timed out",
            })
        );
    }
}
