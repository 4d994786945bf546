//! AlterTagExecutor - 修改标签执行器
//!
//! 负责修改已存在标签的属性定义与 schema 选项。
//! 修改项按语句顺序原样转发，去重与冲突检查由元数据服务负责。

use std::sync::Arc;

use super::pipeline::TagOperation;
use crate::common::memory::MemoryTracker;
use crate::core::error::DBResult;
use crate::core::types::{AlterSchemaItem, PropertyDef, SpaceId};
use crate::meta::{MetaClient, MetaFuture};
use crate::query::executor::base::{ExecutionResult, ResultBuilder};
use crate::query::planner::{AlterTag, TagCommandKind};

/// 修改标签执行器
#[derive(Debug)]
pub struct AlterTagExecutor {
    node: AlterTag,
}

impl AlterTagExecutor {
    pub fn new(node: AlterTag) -> Self {
        Self { node }
    }
}

impl TagOperation for AlterTagExecutor {
    type Response = bool;

    fn kind(&self) -> TagCommandKind {
        TagCommandKind::AlterTag
    }

    fn target(&self) -> &str {
        self.node.tag_name()
    }

    fn request_size(&self) -> usize {
        let items: usize = self
            .node
            .items()
            .iter()
            .map(|item| match item {
                AlterSchemaItem::Add(props) | AlterSchemaItem::Change(props) => {
                    props.len() * std::mem::size_of::<PropertyDef>()
                }
                AlterSchemaItem::Drop(names) => names.iter().map(String::len).sum(),
            })
            .sum();
        self.node.tag_name().len() + items
    }

    fn dispatch(&self, client: &dyn MetaClient, space_id: SpaceId) -> MetaFuture<bool> {
        client.alter_tag_schema(
            space_id,
            self.node.tag_name(),
            self.node.items(),
            self.node.schema_prop(),
        )
    }

    fn transform(&self, _altered: bool, _memory: &Arc<MemoryTracker>) -> DBResult<ExecutionResult> {
        ResultBuilder::new().build()
    }
}
