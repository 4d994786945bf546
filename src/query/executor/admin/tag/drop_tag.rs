//! DropTagExecutor - 删除标签执行器
//!
//! 负责删除指定的标签。IF EXISTS 由元数据服务判定。

use std::sync::Arc;

use super::pipeline::TagOperation;
use crate::common::memory::MemoryTracker;
use crate::core::error::DBResult;
use crate::core::types::SpaceId;
use crate::meta::{MetaClient, MetaFuture};
use crate::query::executor::base::{ExecutionResult, ResultBuilder};
use crate::query::planner::{DropTag, TagCommandKind};

/// 删除标签执行器
#[derive(Debug)]
pub struct DropTagExecutor {
    node: DropTag,
}

impl DropTagExecutor {
    pub fn new(node: DropTag) -> Self {
        Self { node }
    }
}

impl TagOperation for DropTagExecutor {
    type Response = bool;

    fn kind(&self) -> TagCommandKind {
        TagCommandKind::DropTag
    }

    fn target(&self) -> &str {
        self.node.tag_name()
    }

    fn dispatch(&self, client: &dyn MetaClient, space_id: SpaceId) -> MetaFuture<bool> {
        client.drop_tag_schema(space_id, self.node.tag_name(), self.node.if_exists())
    }

    fn transform(&self, _dropped: bool, _memory: &Arc<MemoryTracker>) -> DBResult<ExecutionResult> {
        ResultBuilder::new().build()
    }
}
