//! ShowTagsExecutor - 列出标签执行器
//!
//! 负责列出图空间中的所有标签。输出按名称去重并按字典序升序排列，
//! 与元数据服务返回的顺序无关。

use std::collections::BTreeSet;
use std::sync::Arc;

use super::pipeline::TagOperation;
use crate::common::memory::MemoryTracker;
use crate::core::error::DBResult;
use crate::core::types::{SpaceId, TagItem};
use crate::core::{Row, Value};
use crate::meta::{MetaClient, MetaFuture};
use crate::query::executor::base::{ExecutionResult, ResultBuilder};
use crate::query::planner::{ShowTags, TagCommandKind};

/// 列出标签执行器
#[derive(Debug)]
pub struct ShowTagsExecutor {
    _node: ShowTags,
}

impl ShowTagsExecutor {
    pub fn new(node: ShowTags) -> Self {
        Self { _node: node }
    }
}

impl TagOperation for ShowTagsExecutor {
    type Response = Vec<TagItem>;

    fn kind(&self) -> TagCommandKind {
        TagCommandKind::ShowTags
    }

    fn target(&self) -> &str {
        ""
    }

    fn dispatch(&self, client: &dyn MetaClient, space_id: SpaceId) -> MetaFuture<Vec<TagItem>> {
        client.list_tag_schemas(space_id)
    }

    fn transform(&self, tag_items: Vec<TagItem>, memory: &Arc<MemoryTracker>) -> DBResult<ExecutionResult> {
        let names: BTreeSet<String> = tag_items.into_iter().map(|item| item.tag_name).collect();

        let mut guard = memory.reserve(0)?;
        let mut rows = Vec::with_capacity(names.len());
        for name in names {
            let row = Row::new(vec![Value::String(name)]);
            guard.grow(row.estimated_size())?;
            rows.push(row);
        }

        ResultBuilder::new()
            .col_names(vec!["Name".to_string()])
            .rows(rows)
            .build()
    }
}
