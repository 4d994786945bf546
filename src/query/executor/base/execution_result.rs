//! 执行结果类型
//!
//! 每次命令执行恰好产生一个 `ExecutionResult`：
//! 仅状态的成功、带数据集的成功，或只带分类状态的失败。

use crate::core::error::{DBError, DBResult, ErrorCode, FailureKind, PublicError, ToPublicError};
use crate::core::DataSet;

/// 执行结果类型
#[derive(Debug, Clone, PartialEq)]
pub enum ExecutionResult {
    /// 成功执行，无数据返回
    Success,
    /// 成功执行，返回结构化数据集
    DataSet(DataSet),
    /// 执行失败，不含任何数据行
    Error(DBError),
}

impl ExecutionResult {
    pub fn is_success(&self) -> bool {
        !matches!(self, ExecutionResult::Error(_))
    }

    /// 获取结果中的行数
    pub fn count(&self) -> usize {
        match self {
            ExecutionResult::DataSet(ds) => ds.rows.len(),
            ExecutionResult::Success | ExecutionResult::Error(_) => 0,
        }
    }

    pub fn dataset(&self) -> Option<&DataSet> {
        match self {
            ExecutionResult::DataSet(ds) => Some(ds),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&DBError> {
        match self {
            ExecutionResult::Error(e) => Some(e),
            _ => None,
        }
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        self.error().map(DBError::failure_kind)
    }

    /// 对外状态码
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ExecutionResult::Error(e) => e.to_error_code(),
            _ => ErrorCode::Success,
        }
    }

    /// 对外状态
    pub fn status(&self) -> PublicError {
        match self {
            ExecutionResult::Error(e) => e.to_public_error(),
            _ => PublicError::success(),
        }
    }

    /// 转换为 `DBResult`，成功时数据集可能为空
    pub fn into_result(self) -> DBResult<Option<DataSet>> {
        match self {
            ExecutionResult::Success => Ok(None),
            ExecutionResult::DataSet(ds) => Ok(Some(ds)),
            ExecutionResult::Error(e) => Err(e),
        }
    }
}

impl From<DBError> for ExecutionResult {
    fn from(err: DBError) -> Self {
        ExecutionResult::Error(err)
    }
}
