use crate::UnknownErrorCode;
use serde::Serialize;
use std::fmt;

/// 错误码
///
/// 负值为客户端本地产生的错误，正值为服务端上报的错误，
/// `0` 表示无错误、不存在对应的枚举值。
/// 枚举值与名称、描述的映射是全射且不会跨版本改变。
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(i16)]
pub enum ErrorCode {
    /// 本地：与服务端的传输失败
    Transport = -195,
    /// 本地：消息超时
    MsgTimedOut = -192,
    /// 本地：所有服务端连接均已断开
    AllBrokersDown = -187,
    /// 本地：队列已满
    QueueFull = -184,
    /// 本地：当前状态下不允许该操作
    InvalidState = -172,
    /// 本地：实例已被更新的实例隔离
    Fenced = -144,
    /// 未知的服务端错误
    Unknown = -1,
    /// 服务端：位移超出范围
    OffsetOutOfRange = 1,
    /// 服务端：消息损坏
    CorruptMessage = 2,
    /// 服务端：未知的主题或分区
    UnknownTopicOrPart = 3,
    /// 服务端：首领不可用
    LeaderNotAvailable = 5,
    /// 服务端：不是该分区的首领
    NotLeaderForPartition = 6,
    /// 服务端：请求超时
    RequestTimedOut = 7,
    /// 服务端：服务端不可用
    BrokerNotAvailable = 8,
    /// 服务端：副本不可用
    ReplicaNotAvailable = 9,
    /// 服务端：消息过大
    MsgSizeTooLarge = 10,
    /// 服务端：响应返回前连接断开
    NetworkException = 13,
    /// 服务端：协调者加载中
    CoordinatorLoadInProgress = 14,
    /// 服务端：协调者不可用
    CoordinatorNotAvailable = 15,
    /// 服务端：不是协调者
    NotCoordinator = 16,
    /// 服务端：主题不合法
    InvalidTopic = 17,
    /// 服务端：消息批次超过服务端允许的大小
    RecordListTooLarge = 18,
    /// 服务端：同步副本数不足
    NotEnoughReplicas = 19,
    /// 服务端：消息写入的同步副本数不足
    NotEnoughReplicasAfterAppend = 20,
    /// 服务端：消费组代数不合法
    IllegalGeneration = 22,
    /// 服务端：未知成员
    UnknownMemberId = 25,
    /// 服务端：消费组再均衡进行中
    RebalanceInProgress = 27,
    /// 服务端：提交位移数据大小不合法
    InvalidCommitOffsetSize = 28,
    /// 服务端：主题鉴权失败
    TopicAuthorizationFailed = 29,
    /// 服务端：消费组鉴权失败
    GroupAuthorizationFailed = 30,
    /// 服务端：集群鉴权失败
    ClusterAuthorizationFailed = 31,
    /// 服务端：版本不支持
    UnsupportedVersion = 35,
    /// 服务端：主题已存在
    TopicAlreadyExists = 36,
    /// 服务端：请求不合法
    InvalidRequest = 42,
    /// 服务端：序列号乱序
    OutOfOrderSequenceNumber = 45,
    /// 服务端：序列号重复
    DuplicateSequenceNumber = 46,
    /// 服务端：生产者纪元过期
    InvalidProducerEpoch = 47,
    /// 服务端：事务状态不合法
    InvalidTxnState = 48,
    /// 服务端：生产者 ID 与事务 ID 不匹配
    InvalidProducerIdMapping = 49,
    /// 服务端：事务超时时间超过服务端允许的最大值
    InvalidTransactionTimeout = 50,
    /// 服务端：同一事务上存在并发操作
    ConcurrentTransactions = 51,
    /// 服务端：事务协调者已被隔离
    TransactionCoordinatorFenced = 52,
    /// 服务端：事务 ID 鉴权失败
    TransactionalIdAuthorizationFailed = 53,
    /// 服务端：操作未被执行
    OperationNotAttempted = 55,
    /// 服务端：存储错误
    StorageError = 56,
    /// 服务端：SASL 认证失败
    SaslAuthenticationFailed = 58,
    /// 服务端：未知生产者 ID
    UnknownProducerId = 59,
    /// 服务端：消费组已达最大成员数
    GroupMaxSizeReached = 81,
    /// 服务端：静态成员被同组同实例 ID 的消费者隔离
    FencedInstanceId = 82,
    /// 服务端：生产者被更新的事务生产者实例隔离
    ProducerFenced = 90,
}

impl ErrorCode {
    /// 全部错误码
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::Transport,
        ErrorCode::MsgTimedOut,
        ErrorCode::AllBrokersDown,
        ErrorCode::QueueFull,
        ErrorCode::InvalidState,
        ErrorCode::Fenced,
        ErrorCode::Unknown,
        ErrorCode::OffsetOutOfRange,
        ErrorCode::CorruptMessage,
        ErrorCode::UnknownTopicOrPart,
        ErrorCode::LeaderNotAvailable,
        ErrorCode::NotLeaderForPartition,
        ErrorCode::RequestTimedOut,
        ErrorCode::BrokerNotAvailable,
        ErrorCode::ReplicaNotAvailable,
        ErrorCode::MsgSizeTooLarge,
        ErrorCode::NetworkException,
        ErrorCode::CoordinatorLoadInProgress,
        ErrorCode::CoordinatorNotAvailable,
        ErrorCode::NotCoordinator,
        ErrorCode::InvalidTopic,
        ErrorCode::RecordListTooLarge,
        ErrorCode::NotEnoughReplicas,
        ErrorCode::NotEnoughReplicasAfterAppend,
        ErrorCode::IllegalGeneration,
        ErrorCode::UnknownMemberId,
        ErrorCode::RebalanceInProgress,
        ErrorCode::InvalidCommitOffsetSize,
        ErrorCode::TopicAuthorizationFailed,
        ErrorCode::GroupAuthorizationFailed,
        ErrorCode::ClusterAuthorizationFailed,
        ErrorCode::UnsupportedVersion,
        ErrorCode::TopicAlreadyExists,
        ErrorCode::InvalidRequest,
        ErrorCode::OutOfOrderSequenceNumber,
        ErrorCode::DuplicateSequenceNumber,
        ErrorCode::InvalidProducerEpoch,
        ErrorCode::InvalidTxnState,
        ErrorCode::InvalidProducerIdMapping,
        ErrorCode::InvalidTransactionTimeout,
        ErrorCode::ConcurrentTransactions,
        ErrorCode::TransactionCoordinatorFenced,
        ErrorCode::TransactionalIdAuthorizationFailed,
        ErrorCode::OperationNotAttempted,
        ErrorCode::StorageError,
        ErrorCode::SaslAuthenticationFailed,
        ErrorCode::UnknownProducerId,
        ErrorCode::GroupMaxSizeReached,
        ErrorCode::FencedInstanceId,
        ErrorCode::ProducerFenced,
    ];

    /// 获取原始错误码
    pub const fn code(self) -> i16 {
        self as i16
    }

    /// 获取错误码的稳定名称
    pub const fn name(self) -> &'static str {
        match self {
            ErrorCode::Transport => "TRANSPORT",
            ErrorCode::MsgTimedOut => "MSG_TIMED_OUT",
            ErrorCode::AllBrokersDown => "ALL_BROKERS_DOWN",
            ErrorCode::QueueFull => "QUEUE_FULL",
            ErrorCode::InvalidState => "INVALID_STATE",
            ErrorCode::Fenced => "FENCED",
            ErrorCode::Unknown => "UNKNOWN",
            ErrorCode::OffsetOutOfRange => "OFFSET_OUT_OF_RANGE",
            ErrorCode::CorruptMessage => "CORRUPT_MESSAGE",
            ErrorCode::UnknownTopicOrPart => "UNKNOWN_TOPIC_OR_PART",
            ErrorCode::LeaderNotAvailable => "LEADER_NOT_AVAILABLE",
            ErrorCode::NotLeaderForPartition => "NOT_LEADER_FOR_PARTITION",
            ErrorCode::RequestTimedOut => "REQUEST_TIMED_OUT",
            ErrorCode::BrokerNotAvailable => "BROKER_NOT_AVAILABLE",
            ErrorCode::ReplicaNotAvailable => "REPLICA_NOT_AVAILABLE",
            ErrorCode::MsgSizeTooLarge => "MSG_SIZE_TOO_LARGE",
            ErrorCode::NetworkException => "NETWORK_EXCEPTION",
            ErrorCode::CoordinatorLoadInProgress => "COORDINATOR_LOAD_IN_PROGRESS",
            ErrorCode::CoordinatorNotAvailable => "COORDINATOR_NOT_AVAILABLE",
            ErrorCode::NotCoordinator => "NOT_COORDINATOR",
            ErrorCode::InvalidTopic => "INVALID_TOPIC",
            ErrorCode::RecordListTooLarge => "RECORD_LIST_TOO_LARGE",
            ErrorCode::NotEnoughReplicas => "NOT_ENOUGH_REPLICAS",
            ErrorCode::NotEnoughReplicasAfterAppend => "NOT_ENOUGH_REPLICAS_AFTER_APPEND",
            ErrorCode::IllegalGeneration => "ILLEGAL_GENERATION",
            ErrorCode::UnknownMemberId => "UNKNOWN_MEMBER_ID",
            ErrorCode::RebalanceInProgress => "REBALANCE_IN_PROGRESS",
            ErrorCode::InvalidCommitOffsetSize => "INVALID_COMMIT_OFFSET_SIZE",
            ErrorCode::TopicAuthorizationFailed => "TOPIC_AUTHORIZATION_FAILED",
            ErrorCode::GroupAuthorizationFailed => "GROUP_AUTHORIZATION_FAILED",
            ErrorCode::ClusterAuthorizationFailed => "CLUSTER_AUTHORIZATION_FAILED",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::TopicAlreadyExists => "TOPIC_ALREADY_EXISTS",
            ErrorCode::InvalidRequest => "INVALID_REQUEST",
            ErrorCode::OutOfOrderSequenceNumber => "OUT_OF_ORDER_SEQUENCE_NUMBER",
            ErrorCode::DuplicateSequenceNumber => "DUPLICATE_SEQUENCE_NUMBER",
            ErrorCode::InvalidProducerEpoch => "INVALID_PRODUCER_EPOCH",
            ErrorCode::InvalidTxnState => "INVALID_TXN_STATE",
            ErrorCode::InvalidProducerIdMapping => "INVALID_PRODUCER_ID_MAPPING",
            ErrorCode::InvalidTransactionTimeout => "INVALID_TRANSACTION_TIMEOUT",
            ErrorCode::ConcurrentTransactions => "CONCURRENT_TRANSACTIONS",
            ErrorCode::TransactionCoordinatorFenced => "TRANSACTION_COORDINATOR_FENCED",
            ErrorCode::TransactionalIdAuthorizationFailed => {
                "TRANSACTIONAL_ID_AUTHORIZATION_FAILED"
            }
            ErrorCode::OperationNotAttempted => "OPERATION_NOT_ATTEMPTED",
            ErrorCode::StorageError => "STORAGE_ERROR",
            ErrorCode::SaslAuthenticationFailed => "SASL_AUTHENTICATION_FAILED",
            ErrorCode::UnknownProducerId => "UNKNOWN_PRODUCER_ID",
            ErrorCode::GroupMaxSizeReached => "GROUP_MAX_SIZE_REACHED",
            ErrorCode::FencedInstanceId => "FENCED_INSTANCE_ID",
            ErrorCode::ProducerFenced => "PRODUCER_FENCED",
        }
    }

    /// 获取错误码的静态描述，在没有动态诊断信息时作为错误信息使用
    pub const fn description(self) -> &'static str {
        match self {
            ErrorCode::Transport => "Local: Broker transport failure",
            ErrorCode::MsgTimedOut => "Local: Message timed out",
            ErrorCode::AllBrokersDown => "Local: All broker connections are down",
            ErrorCode::QueueFull => "Local: Queue full",
            ErrorCode::InvalidState => "Local: Erroneous state",
            ErrorCode::Fenced => "Local: This instance has been fenced by a newer instance",
            ErrorCode::Unknown => "Unknown broker error",
            ErrorCode::OffsetOutOfRange => "Broker: Offset out of range",
            ErrorCode::CorruptMessage => "Broker: Corrupt message",
            ErrorCode::UnknownTopicOrPart => "Broker: Unknown topic or partition",
            ErrorCode::LeaderNotAvailable => "Broker: Leader not available",
            ErrorCode::NotLeaderForPartition => "Broker: Not leader for partition",
            ErrorCode::RequestTimedOut => "Broker: Request timed out",
            ErrorCode::BrokerNotAvailable => "Broker: Broker not available",
            ErrorCode::ReplicaNotAvailable => "Broker: Replica not available",
            ErrorCode::MsgSizeTooLarge => "Broker: Message size too large",
            ErrorCode::NetworkException => "Broker: Broker disconnected before response received",
            ErrorCode::CoordinatorLoadInProgress => "Broker: Coordinator load in progress",
            ErrorCode::CoordinatorNotAvailable => "Broker: Coordinator not available",
            ErrorCode::NotCoordinator => "Broker: Not coordinator",
            ErrorCode::InvalidTopic => "Broker: Invalid topic",
            ErrorCode::RecordListTooLarge => {
                "Broker: Message batch larger than configured server segment size"
            }
            ErrorCode::NotEnoughReplicas => "Broker: Not enough in-sync replicas",
            ErrorCode::NotEnoughReplicasAfterAppend => {
                "Broker: Message(s) written to insufficient number of in-sync replicas"
            }
            ErrorCode::IllegalGeneration => "Broker: Specified group generation id is not valid",
            ErrorCode::UnknownMemberId => "Broker: Unknown member",
            ErrorCode::RebalanceInProgress => "Broker: Group rebalance in progress",
            ErrorCode::InvalidCommitOffsetSize => "Broker: Commit offset data size is not valid",
            ErrorCode::TopicAuthorizationFailed => "Broker: Topic authorization failed",
            ErrorCode::GroupAuthorizationFailed => "Broker: Group authorization failed",
            ErrorCode::ClusterAuthorizationFailed => "Broker: Cluster authorization failed",
            ErrorCode::UnsupportedVersion => "Broker: Unsupported version",
            ErrorCode::TopicAlreadyExists => "Broker: Topic already exists",
            ErrorCode::InvalidRequest => "Broker: Invalid request",
            ErrorCode::OutOfOrderSequenceNumber => "Broker: Out of order sequence number",
            ErrorCode::DuplicateSequenceNumber => "Broker: Duplicate sequence number",
            ErrorCode::InvalidProducerEpoch => {
                "Broker: Producer attempted an operation with an old epoch"
            }
            ErrorCode::InvalidTxnState => {
                "Broker: Producer attempted a transactional operation in an invalid state"
            }
            ErrorCode::InvalidProducerIdMapping => {
                "Broker: Producer attempted to use a producer id which is not currently assigned \
                 to its transactional id"
            }
            ErrorCode::InvalidTransactionTimeout => {
                "Broker: Transaction timeout is larger than the maximum value allowed by the broker"
            }
            ErrorCode::ConcurrentTransactions => {
                "Broker: Producer attempted to update a transaction while another concurrent \
                 operation on the same transaction was ongoing"
            }
            ErrorCode::TransactionCoordinatorFenced => {
                "Broker: Transaction coordinator is no longer the current coordinator for this \
                 producer"
            }
            ErrorCode::TransactionalIdAuthorizationFailed => {
                "Broker: Transactional Id authorization failed"
            }
            ErrorCode::OperationNotAttempted => "Broker: Operation not attempted",
            ErrorCode::StorageError => "Broker: Disk error when trying to access log file on disk",
            ErrorCode::SaslAuthenticationFailed => "Broker: SASL authentication failed",
            ErrorCode::UnknownProducerId => "Broker: Unknown producer id",
            ErrorCode::GroupMaxSizeReached => "Broker: Consumer group has reached maximum size",
            ErrorCode::FencedInstanceId => {
                "Broker: Static consumer fenced by other consumer with same group instance id"
            }
            ErrorCode::ProducerFenced => {
                "Broker: Producer fenced by a newer transactional producer instance"
            }
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl TryFrom<i16> for ErrorCode {
    type Error = UnknownErrorCode;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        Self::ALL
            .iter()
            .copied()
            .find(|code| code.code() == value)
            .ok_or(UnknownErrorCode(value))
    }
}
