//! 对外错误码定义
//!
//! 执行结果中的状态统一映射为这里的错误码，数值按类别分段：
//! 02xx 执行，03xx schema，05xx 资源，09xx 系统。

use serde::{Deserialize, Serialize};

/// 对外错误码
///
/// 数值是客户端可见的契约，新增只追加，不复用已有数值。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    Success = 0,

    /// 元数据服务超时
    Timeout = 201,
    /// 内存额度不足
    ResourceExhausted = 202,
    /// 元数据并发修改冲突
    Conflict = 203,
    /// 无法从 schema 还原结果
    DataFormatError = 205,

    /// 元数据服务拒绝的 schema
    InvalidSchema = 304,

    /// 图空间、标签或属性不存在
    ResourceNotFound = 500,
    /// 标签或属性已存在
    ResourceAlreadyExists = 501,

    InternalError = 900,
    /// 元数据服务不可达或 leader 切换中
    ServiceUnavailable = 901,
}

impl ErrorCode {
    pub fn as_i32(&self) -> i32 {
        *self as i32
    }

    /// 调用方未提供消息时使用的文本
    pub fn default_message(&self) -> &'static str {
        match self {
            ErrorCode::Success => "成功",
            ErrorCode::Timeout => "执行超时",
            ErrorCode::ResourceExhausted => "资源不足",
            ErrorCode::Conflict => "并发冲突",
            ErrorCode::DataFormatError => "数据格式化失败",
            ErrorCode::InvalidSchema => "无效的schema",
            ErrorCode::ResourceNotFound => "资源未找到",
            ErrorCode::ResourceAlreadyExists => "资源已存在",
            ErrorCode::InternalError => "内部服务器错误",
            ErrorCode::ServiceUnavailable => "服务不可用",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.as_i32(), self.default_message())
    }
}

/// 执行结果对外暴露的状态
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicError {
    pub code: ErrorCode,
    pub message: String,
}

impl PublicError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn success() -> Self {
        Self::new(ErrorCode::Success, ErrorCode::Success.default_message())
    }
}

/// 内部错误到对外状态的映射
pub trait ToPublicError {
    fn to_public_error(&self) -> PublicError {
        PublicError::new(self.to_error_code(), self.to_public_message())
    }

    fn to_error_code(&self) -> ErrorCode;

    fn to_public_message(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::ResourceExhausted.to_string(), "202 (资源不足)");
        assert_eq!(ErrorCode::Success.as_i32(), 0);
    }

    #[test]
    fn test_error_code_serializes_by_name() {
        let json = serde_json::to_string(&ErrorCode::ResourceNotFound).expect("serialize code");
        assert_eq!(json, "\"ResourceNotFound\"");
    }

    #[test]
    fn test_public_error() {
        let err = PublicError::new(ErrorCode::ResourceNotFound, "标签不存在");
        assert_eq!(err.code, ErrorCode::ResourceNotFound);
        assert_eq!(err.message, "标签不存在");

        let ok = PublicError::success();
        assert_eq!(ok.code, ErrorCode::Success);
        assert_eq!(ok.message, "成功");
    }
}
