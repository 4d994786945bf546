//! 标签管理执行器
//!
//! 提供标签的创建、修改、描述、删除、列出和显示建表语句功能。
//! 六种命令共用 [`pipeline`] 中的执行流程，每次执行恰好发出一次元数据请求，
//! 并产生恰好一个结果或一个分类状态。

pub mod alter_tag;
pub mod create_tag;
pub mod desc_tag;
pub mod drop_tag;
pub mod pipeline;
pub mod show_create_tag;
pub mod show_tags;


use std::sync::Arc;
use std::time::Instant;

use log::debug;

pub use alter_tag::AlterTagExecutor;
pub use create_tag::CreateTagExecutor;
pub use desc_tag::DescTagExecutor;
pub use drop_tag::DropTagExecutor;
pub use pipeline::{run_pipeline, TagOperation};
pub use show_create_tag::ShowCreateTagExecutor;
pub use show_tags::ShowTagsExecutor;

use crate::common::memory::MemoryTracker;
use crate::meta::MetaClient;
use crate::query::executor::base::{ExecutionContext, ExecutionResult, ExecutorStats};
use crate::query::planner::TagCommand;

/// 标签 DDL 执行器
///
/// 持有元数据客户端与内存追踪器，按命令类型选择对应的操作。
pub struct TagExecutor {
    id: i64,
    meta_client: Arc<dyn MetaClient>,
    memory: Arc<MemoryTracker>,
    stats: ExecutorStats,
}

impl TagExecutor {
    pub fn new(id: i64, meta_client: Arc<dyn MetaClient>, memory: Arc<MemoryTracker>) -> Self {
        Self {
            id,
            meta_client,
            memory,
            stats: ExecutorStats::new(),
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        "TagExecutor"
    }

    pub fn stats(&self) -> &ExecutorStats {
        &self.stats
    }

    pub fn memory(&self) -> &Arc<MemoryTracker> {
        &self.memory
    }

    /// 执行一条标签命令
    ///
    /// 所有失败都以 [`ExecutionResult::Error`] 返回，不会 panic 到调用方。
    pub async fn execute(&mut self, command: TagCommand, ctx: &ExecutionContext) -> ExecutionResult {
        let start = Instant::now();
        let kind = command.kind();
        let client = self.meta_client.as_ref();
        let memory = &self.memory;

        let result = match command {
            TagCommand::Create(node) => {
                run_pipeline(CreateTagExecutor::new(node), client, memory, ctx).await
            }
            TagCommand::Desc(node) => {
                run_pipeline(DescTagExecutor::new(node), client, memory, ctx).await
            }
            TagCommand::Drop(node) => {
                run_pipeline(DropTagExecutor::new(node), client, memory, ctx).await
            }
            TagCommand::Show(node) => {
                run_pipeline(ShowTagsExecutor::new(node), client, memory, ctx).await
            }
            TagCommand::ShowCreate(node) => {
                run_pipeline(ShowCreateTagExecutor::new(node), client, memory, ctx).await
            }
            TagCommand::Alter(node) => {
                run_pipeline(AlterTagExecutor::new(node), client, memory, ctx).await
            }
        };

        self.stats.add_exec_time(start.elapsed());
        self.stats.add_row(result.count());
        self.stats.record_execution(!result.is_success());
        self.stats.set_memory_peak(self.memory.peak_usage());
        debug!(
            "Executor {} ({}) finished {}: {}",
            self.id,
            self.name(),
            kind,
            self.stats.to_formatted_string()
        );
        result
    }
}

impl std::fmt::Debug for TagExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TagExecutor")
            .field("id", &self.id)
            .field("stats", &self.stats)
            .finish()
    }
}
