//! DescTagExecutor - 描述标签执行器
//!
//! 负责查看指定标签的属性定义，每个属性一行。

use std::sync::Arc;

use super::pipeline::{reserve_rows, TagOperation};
use crate::common::memory::MemoryTracker;
use crate::core::error::DBResult;
use crate::core::types::{Schema, SpaceId};
use crate::meta::{MetaClient, MetaFuture};
use crate::query::executor::base::{ExecutionResult, ResultBuilder};
use crate::query::planner::{DescTag, TagCommandKind};
use crate::query::util::to_desc_schema;

/// 描述标签执行器
#[derive(Debug)]
pub struct DescTagExecutor {
    node: DescTag,
}

impl DescTagExecutor {
    pub fn new(node: DescTag) -> Self {
        Self { node }
    }
}

impl TagOperation for DescTagExecutor {
    type Response = Schema;

    fn kind(&self) -> TagCommandKind {
        TagCommandKind::DescTag
    }

    fn target(&self) -> &str {
        self.node.tag_name()
    }

    fn dispatch(&self, client: &dyn MetaClient, space_id: SpaceId) -> MetaFuture<Schema> {
        client.get_tag_schema(space_id, self.node.tag_name())
    }

    fn transform(&self, schema: Schema, memory: &Arc<MemoryTracker>) -> DBResult<ExecutionResult> {
        let dataset = to_desc_schema(&schema)?;
        let _guard = reserve_rows(memory, &dataset)?;
        ResultBuilder::new().value(dataset).build()
    }
}
