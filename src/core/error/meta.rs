//! 元数据服务错误类型
//!
//! 元数据服务（meta authority）返回的失败状态。执行器不改写这些状态，
//! 只负责记录日志并原样放入执行结果。

use thiserror::Error;

use crate::core::error::codes::{ErrorCode, ToPublicError};
use crate::core::types::SpaceId;

/// 元数据服务结果类型
pub type MetaResult<T> = Result<T, MetaError>;

/// 元数据服务返回的失败状态
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MetaError {
    #[error("图空间不存在: {0}")]
    SpaceNotFound(SpaceId),
    #[error("标签不存在: {0}")]
    TagNotFound(String),
    #[error("标签已存在: {0}")]
    TagExisted(String),
    #[error("属性已存在: {0}")]
    ColumnExisted(String),
    #[error("属性不存在: {0}")]
    ColumnNotFound(String),
    #[error("无效的schema: {0}")]
    InvalidSchema(String),
    #[error("元数据冲突: {0}")]
    Conflict(String),
    #[error("leader 已变更: {0}")]
    LeaderChanged(String),
    #[error("RPC 调用失败: {0}")]
    RpcFailure(String),
    #[error("请求超时: {0}")]
    Timeout(String),
}

impl ToPublicError for MetaError {
    fn to_error_code(&self) -> ErrorCode {
        match self {
            MetaError::SpaceNotFound(_) | MetaError::TagNotFound(_) | MetaError::ColumnNotFound(_) => {
                ErrorCode::ResourceNotFound
            }
            MetaError::TagExisted(_) | MetaError::ColumnExisted(_) => ErrorCode::ResourceAlreadyExists,
            MetaError::InvalidSchema(_) => ErrorCode::InvalidSchema,
            MetaError::Conflict(_) => ErrorCode::Conflict,
            MetaError::LeaderChanged(_) | MetaError::RpcFailure(_) => ErrorCode::ServiceUnavailable,
            MetaError::Timeout(_) => ErrorCode::Timeout,
        }
    }

    fn to_public_message(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_error_codes() {
        assert_eq!(MetaError::TagNotFound("person".into()).to_error_code(), ErrorCode::ResourceNotFound);
        assert_eq!(MetaError::TagExisted("person".into()).to_error_code(), ErrorCode::ResourceAlreadyExists);
        assert_eq!(MetaError::Timeout("10s".into()).to_error_code(), ErrorCode::Timeout);
    }

    #[test]
    fn test_meta_error_message_is_verbatim() {
        let err = MetaError::TagNotFound("person".into());
        assert_eq!(err.to_public_message(), err.to_string());
        assert!(err.to_string().contains("person"));
    }
}
