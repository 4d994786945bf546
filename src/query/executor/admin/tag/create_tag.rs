//! CreateTagExecutor - 创建标签执行器
//!
//! 负责在指定图空间中创建新的标签。IF NOT EXISTS 由元数据服务判定。

use std::sync::Arc;

use super::pipeline::TagOperation;
use crate::common::memory::MemoryTracker;
use crate::core::error::DBResult;
use crate::core::types::{SpaceId, TagId};
use crate::meta::{MetaClient, MetaFuture};
use crate::query::executor::base::{ExecutionResult, ResultBuilder};
use crate::query::planner::{CreateTag, TagCommandKind};

/// 创建标签执行器
#[derive(Debug)]
pub struct CreateTagExecutor {
    node: CreateTag,
}

impl CreateTagExecutor {
    pub fn new(node: CreateTag) -> Self {
        Self { node }
    }
}

impl TagOperation for CreateTagExecutor {
    type Response = TagId;

    fn kind(&self) -> TagCommandKind {
        TagCommandKind::CreateTag
    }

    fn target(&self) -> &str {
        self.node.name()
    }

    fn request_size(&self) -> usize {
        self.node.name().len() + self.node.schema().estimated_size()
    }

    fn dispatch(&self, client: &dyn MetaClient, space_id: SpaceId) -> MetaFuture<TagId> {
        client.create_tag_schema(
            space_id,
            self.node.name(),
            self.node.schema(),
            self.node.if_not_exists(),
        )
    }

    fn transform(&self, _tag_id: TagId, _memory: &Arc<MemoryTracker>) -> DBResult<ExecutionResult> {
        ResultBuilder::new().build()
    }
}
