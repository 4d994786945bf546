//! 集成测试共享工具模块
//!
//! 提供测试基础设施和辅助函数，供所有集成测试使用

#![allow(dead_code)]

pub mod assertions;
pub mod data_fixtures;

use std::sync::Arc;

use graphdb_ddl::common::memory::MemoryTracker;
use graphdb_ddl::core::types::SpaceId;
use graphdb_ddl::meta::{MemMetaClient, MetaClient};
use graphdb_ddl::query::executor::runner::Runner;
use graphdb_ddl::query::executor::{ExecutionContext, ExecutionResult, TagExecutor};
use graphdb_ddl::query::planner::TagCommand;

pub const TEST_SPACE: SpaceId = 1;

/// 测试用元数据服务与执行器
///
/// 每个测试持有独立的内存元数据服务，互不影响
pub struct TestMeta {
    client: Arc<MemMetaClient>,
    executor: TagExecutor,
    ctx: ExecutionContext,
}

impl TestMeta {
    /// 在当前 tokio 运行时中创建，默认不限制内存
    pub fn new() -> Self {
        Self::with_memory(Arc::new(MemoryTracker::unlimited()))
    }

    pub fn with_memory(memory: Arc<MemoryTracker>) -> Self {
        let client = Arc::new(MemMetaClient::with_spaces(&[TEST_SPACE]));
        let meta: Arc<dyn MetaClient> = client.clone();
        let runner = Runner::current().expect("测试需要在 tokio 运行时中执行");
        Self {
            client,
            executor: TagExecutor::new(1, meta, memory),
            ctx: ExecutionContext::new(TEST_SPACE, runner),
        }
    }

    pub fn client(&self) -> &Arc<MemMetaClient> {
        &self.client
    }

    pub fn executor(&self) -> &TagExecutor {
        &self.executor
    }

    /// 在测试图空间中执行命令
    pub async fn run(&mut self, command: impl Into<TagCommand>) -> ExecutionResult {
        self.executor.execute(command.into(), &self.ctx).await
    }

    /// 在指定图空间中执行命令
    pub async fn run_in(&mut self, space_id: SpaceId, command: impl Into<TagCommand>) -> ExecutionResult {
        let ctx = ExecutionContext::new(space_id, self.ctx.runner().clone());
        self.executor.execute(command.into(), &ctx).await
    }
}
