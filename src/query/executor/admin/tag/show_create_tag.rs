//! ShowCreateTagExecutor - 显示建标签语句执行器
//!
//! 根据元数据服务返回的 schema 还原 CREATE TAG 语句。

use std::sync::Arc;

use super::pipeline::{reserve_rows, TagOperation};
use crate::common::memory::MemoryTracker;
use crate::core::error::DBResult;
use crate::core::types::{Schema, SpaceId};
use crate::meta::{MetaClient, MetaFuture};
use crate::query::executor::base::{ExecutionResult, ResultBuilder};
use crate::query::planner::{ShowCreateTag, TagCommandKind};
use crate::query::util::to_show_create_schema;

/// 显示建标签语句执行器
#[derive(Debug)]
pub struct ShowCreateTagExecutor {
    node: ShowCreateTag,
}

impl ShowCreateTagExecutor {
    pub fn new(node: ShowCreateTag) -> Self {
        Self { node }
    }
}

impl TagOperation for ShowCreateTagExecutor {
    type Response = Schema;

    fn kind(&self) -> TagCommandKind {
        TagCommandKind::ShowCreateTag
    }

    fn target(&self) -> &str {
        self.node.tag_name()
    }

    fn dispatch(&self, client: &dyn MetaClient, space_id: SpaceId) -> MetaFuture<Schema> {
        client.get_tag_schema(space_id, self.node.tag_name())
    }

    fn transform(&self, schema: Schema, memory: &Arc<MemoryTracker>) -> DBResult<ExecutionResult> {
        let dataset = to_show_create_schema(true, self.node.tag_name(), &schema)?;
        let _guard = reserve_rows(memory, &dataset)?;
        ResultBuilder::new().value(dataset).build()
    }
}
