//! 标签命令的通用执行流程
//!
//! 派发 -> 在 runner 上恢复 -> 校验 -> 转换 -> 完成。
//! 每种命令只提供要调用的元数据操作和响应到结果的转换。

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use log::{debug, warn};
use tokio::task::JoinError;

use crate::common::memory::{MemoryReservation, MemoryTracker};
use crate::core::error::{DBError, DBResult, MetaResult};
use crate::core::types::SpaceId;
use crate::core::DataSet;
use crate::meta::{MetaClient, MetaFuture};
use crate::query::executor::base::{ExecutionContext, ExecutionResult};
use crate::query::planner::TagCommandKind;

/// 单个标签命令：元数据操作 + 响应转换
pub trait TagOperation: Send + 'static {
    /// 元数据服务成功时返回的载荷
    type Response: Send + 'static;

    fn kind(&self) -> TagCommandKind;

    /// 目标标签名，作用于整个图空间的命令返回空串
    fn target(&self) -> &str;

    /// 请求本身占用的内存估算
    fn request_size(&self) -> usize {
        self.target().len()
    }

    /// 发出唯一一次元数据请求
    fn dispatch(&self, client: &dyn MetaClient, space_id: SpaceId) -> MetaFuture<Self::Response>;

    /// 把成功载荷转换为执行结果
    fn transform(&self, response: Self::Response, memory: &Arc<MemoryTracker>) -> DBResult<ExecutionResult>;
}

/// 执行一次标签命令，所有失败都以分类状态返回
pub async fn run_pipeline<O: TagOperation>(
    op: O,
    client: &dyn MetaClient,
    memory: &Arc<MemoryTracker>,
    ctx: &ExecutionContext,
) -> ExecutionResult {
    let space_id = ctx.space_id();
    let kind = op.kind();
    let target = op.target().to_string();

    let request_guard = match memory.reserve(op.request_size()) {
        Ok(guard) => guard,
        Err(e) => return fail(space_id, kind, &target, e),
    };

    // 构造请求时的 panic 同样不能越过执行器
    let pending = match panic::catch_unwind(AssertUnwindSafe(|| op.dispatch(client, space_id))) {
        Ok(pending) => pending,
        Err(payload) => return fail(space_id, kind, &target, classify_panic(payload)),
    };
    debug!("SpaceId: {}, {} `{}' dispatched", space_id, kind.action(), target);

    let memory = Arc::clone(memory);
    let continuation = ctx.runner().spawn(async move {
        let response = pending.await;
        drop(request_guard);
        complete(op, space_id, response, &memory)
    });

    match continuation.await {
        Ok(result) => result,
        Err(e) => fail(space_id, kind, &target, classify_join_error(e)),
    }
}

fn complete<O: TagOperation>(
    op: O,
    space_id: SpaceId,
    response: MetaResult<O::Response>,
    memory: &Arc<MemoryTracker>,
) -> ExecutionResult {
    let response = match response {
        Ok(response) => response,
        Err(status) => return fail(space_id, op.kind(), op.target(), status.into()),
    };
    match op.transform(response, memory) {
        Ok(result) => result,
        Err(e) => fail(space_id, op.kind(), op.target(), e),
    }
}

fn fail(space_id: SpaceId, kind: TagCommandKind, target: &str, error: DBError) -> ExecutionResult {
    if target.is_empty() {
        warn!("SpaceId: {}, {} failed: {}", space_id, kind.action(), error);
    } else {
        warn!("SpaceId: {}, {} `{}' failed: {}", space_id, kind.action(), target, error);
    }
    ExecutionResult::Error(error)
}

/// 后续逻辑 panic 或被取消时的状态
fn classify_join_error(err: JoinError) -> DBError {
    if err.is_cancelled() {
        return DBError::Internal("continuation was cancelled".to_string());
    }
    match err.try_into_panic() {
        Ok(payload) => classify_panic(payload),
        Err(err) => DBError::Internal(err.to_string()),
    }
}

fn classify_panic(payload: Box<dyn Any + Send>) -> DBError {
    // 以 DBError 为载荷的 panic（如内存分配失败）保留原分类
    let payload = match payload.downcast::<DBError>() {
        Ok(error) => return *error,
        Err(payload) => payload,
    };
    if let Some(msg) = payload.downcast_ref::<&str>() {
        DBError::Internal(msg.to_string())
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        DBError::Internal(msg.clone())
    } else {
        DBError::Internal("unknown panic in continuation".to_string())
    }
}

/// 为数据集申请内存额度，逐行增长，超限时整体失败
pub(crate) fn reserve_rows(memory: &Arc<MemoryTracker>, dataset: &DataSet) -> DBResult<MemoryReservation> {
    let mut guard = memory.reserve(std::mem::size_of::<DataSet>())?;
    for row in &dataset.rows {
        guard.grow(row.estimated_size())?;
    }
    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::FailureKind;

    #[test]
    fn test_classify_panic_payloads() {
        let err = classify_panic(Box::new("boom"));
        assert_eq!(err, DBError::Internal("boom".to_string()));

        let err = classify_panic(Box::new(String::from("bad payload")));
        assert_eq!(err, DBError::Internal("bad payload".to_string()));

        let err = classify_panic(Box::new(DBError::memory_exceeded("alloc")));
        assert_eq!(err.failure_kind(), FailureKind::ResourceExhausted);

        let err = classify_panic(Box::new(17_u8));
        assert_eq!(err.failure_kind(), FailureKind::InternalFault);
    }

    #[test]
    fn test_reserve_rows_refuses_large_dataset() {
        use crate::core::{Row, Value};

        let memory = Arc::new(MemoryTracker::new(256));
        let rows = (0..32).map(|i| Row::new(vec![Value::Int(i)])).collect();
        let dataset = DataSet::with_rows(vec!["n".to_string()], rows);
        let err = reserve_rows(&memory, &dataset).expect_err("dataset exceeds limit");
        assert_eq!(err.failure_kind(), FailureKind::ResourceExhausted);
        assert_eq!(memory.current_usage(), 0);
    }
}
