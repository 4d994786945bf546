//! 执行上下文
//!
//! 一次命令执行的全部外部输入：图空间 ID 与 runner。
//! 由调用方从会话中解析一次后显式传入，执行期间不变。

use crate::core::types::SpaceId;
use crate::query::executor::runner::Runner;

/// 执行上下文
#[derive(Debug, Clone)]
pub struct ExecutionContext {
    space_id: SpaceId,
    runner: Runner,
}

impl ExecutionContext {
    pub fn new(space_id: SpaceId, runner: Runner) -> Self {
        Self { space_id, runner }
    }

    pub fn space_id(&self) -> SpaceId {
        self.space_id
    }

    pub fn runner(&self) -> &Runner {
        &self.runner
    }
}
