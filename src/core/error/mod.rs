//! 统一错误处理系统
//!
//! ## 设计理念
//!
//! 1. 元数据服务返回的失败状态（`MetaError`）原样保留，通过 `#[from]` 转换为 `DBError::Meta`
//! 2. 本地故障（内存超限、格式化失败、内部错误）各自对应一个变体，便于调用方区分
//! 3. `DBResult<T>` 提供统一的返回类型，简化错误传播

use thiserror::Error;

pub mod codes;
pub mod meta;

pub use codes::{ErrorCode, PublicError, ToPublicError};
pub use meta::{MetaError, MetaResult};

/// 统一的数据库错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DBError {
    #[error(transparent)]
    Meta(#[from] MetaError),

    #[error("内存限制超出: {0}")]
    MemoryLimitExceeded(String),

    #[error("schema 格式化错误: {0}")]
    SchemaFormat(String),

    #[error("IO错误: {0}")]
    Io(String),

    #[error("内部错误: {0}")]
    Internal(String),
}

/// 统一的结果类型
pub type DBResult<T> = Result<T, DBError>;

/// 执行器对外可见的失败分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// 元数据服务明确返回失败
    AuthorityFailure,
    /// 本地内存不足
    ResourceExhausted,
    /// 其他本地故障
    InternalFault,
    /// 成功返回的 schema 无法格式化
    FormatFailure,
}

impl DBError {
    /// 按失败原因分类
    pub fn failure_kind(&self) -> FailureKind {
        match self {
            DBError::Meta(_) => FailureKind::AuthorityFailure,
            DBError::MemoryLimitExceeded(_) => FailureKind::ResourceExhausted,
            DBError::SchemaFormat(_) => FailureKind::FormatFailure,
            DBError::Io(_) | DBError::Internal(_) => FailureKind::InternalFault,
        }
    }

    pub fn memory_exceeded(detail: impl Into<String>) -> Self {
        DBError::MemoryLimitExceeded(detail.into())
    }
}

impl ToPublicError for DBError {
    fn to_error_code(&self) -> ErrorCode {
        match self {
            DBError::Meta(me) => me.to_error_code(),
            DBError::MemoryLimitExceeded(_) => ErrorCode::ResourceExhausted,
            DBError::SchemaFormat(_) => ErrorCode::DataFormatError,
            DBError::Io(_) | DBError::Internal(_) => ErrorCode::InternalError,
        }
    }

    fn to_public_message(&self) -> String {
        match self {
            // IO 细节不对外暴露
            DBError::Io(_) => "IO操作失败".to_string(),
            _ => self.to_string(),
        }
    }
}

impl From<std::io::Error> for DBError {
    fn from(err: std::io::Error) -> Self {
        DBError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for DBError {
    fn from(err: serde_json::Error) -> Self {
        DBError::Internal(err.to_string())
    }
}
