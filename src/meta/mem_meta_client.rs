//! 内存元数据服务
//!
//! 单进程内的 `MetaClient` 实现，供嵌入式使用和测试。
//! 存在性保护（IF EXISTS / IF NOT EXISTS）在这里判定，执行器不做本地预检查。

use dashmap::DashMap;
use futures::future::{self, FutureExt};
use std::collections::HashMap;
use std::collections::HashSet;
use std::sync::atomic::{AtomicI32, Ordering};

use super::meta_client::{MetaClient, MetaFuture};
use crate::core::error::{MetaError, MetaResult};
use crate::core::types::{AlterSchemaItem, Schema, SchemaProp, SpaceId, TagId, TagItem};

/// 内存元数据服务
#[derive(Debug)]
pub struct MemMetaClient {
    spaces: DashMap<SpaceId, HashMap<String, TagItem>>,
    next_tag_id: AtomicI32,
}

impl MemMetaClient {
    pub fn new() -> Self {
        Self {
            spaces: DashMap::new(),
            next_tag_id: AtomicI32::new(1),
        }
    }

    /// 创建带有指定图空间的服务
    pub fn with_spaces(space_ids: &[SpaceId]) -> Self {
        let client = Self::new();
        for id in space_ids {
            client.add_space(*id);
        }
        client
    }

    /// 注册图空间，已存在时不做任何事
    pub fn add_space(&self, space_id: SpaceId) {
        self.spaces.entry(space_id).or_default();
    }

    pub fn tag_count(&self, space_id: SpaceId) -> usize {
        self.spaces.get(&space_id).map(|tags| tags.len()).unwrap_or(0)
    }

    fn create_tag(
        &self,
        space_id: SpaceId,
        name: &str,
        schema: &Schema,
        if_not_exists: bool,
    ) -> MetaResult<TagId> {
        let mut tags = self
            .spaces
            .get_mut(&space_id)
            .ok_or(MetaError::SpaceNotFound(space_id))?;

        if let Some(existing) = tags.get(name) {
            return if if_not_exists {
                Ok(existing.tag_id)
            } else {
                Err(MetaError::TagExisted(name.to_string()))
            };
        }

        validate_schema(name, schema)?;
        let tag_id = self.next_tag_id.fetch_add(1, Ordering::SeqCst);
        tags.insert(
            name.to_string(),
            TagItem::new(tag_id, name.to_string(), 0, schema.clone()),
        );
        Ok(tag_id)
    }

    fn get_tag(&self, space_id: SpaceId, name: &str) -> MetaResult<Schema> {
        let tags = self
            .spaces
            .get(&space_id)
            .ok_or(MetaError::SpaceNotFound(space_id))?;
        tags.get(name)
            .map(|item| item.schema.clone())
            .ok_or_else(|| MetaError::TagNotFound(name.to_string()))
    }

    fn drop_tag(&self, space_id: SpaceId, name: &str, if_exists: bool) -> MetaResult<bool> {
        let mut tags = self
            .spaces
            .get_mut(&space_id)
            .ok_or(MetaError::SpaceNotFound(space_id))?;
        match tags.remove(name) {
            Some(_) => Ok(true),
            None if if_exists => Ok(true),
            None => Err(MetaError::TagNotFound(name.to_string())),
        }
    }

    fn list_tags(&self, space_id: SpaceId) -> MetaResult<Vec<TagItem>> {
        let tags = self
            .spaces
            .get(&space_id)
            .ok_or(MetaError::SpaceNotFound(space_id))?;
        let mut items: Vec<TagItem> = tags.values().cloned().collect();
        items.sort_by_key(|item| item.tag_id);
        Ok(items)
    }

    fn alter_tag(
        &self,
        space_id: SpaceId,
        name: &str,
        items: &[AlterSchemaItem],
        schema_prop: &SchemaProp,
    ) -> MetaResult<bool> {
        let mut tags = self
            .spaces
            .get_mut(&space_id)
            .ok_or(MetaError::SpaceNotFound(space_id))?;
        let tag = tags
            .get_mut(name)
            .ok_or_else(|| MetaError::TagNotFound(name.to_string()))?;

        // 在副本上按请求顺序应用，全部成功后才替换
        let mut schema = tag.schema.clone();
        for item in items {
            apply_alter_item(&mut schema, item)?;
        }
        if let Some(duration) = schema_prop.ttl_duration {
            schema.schema_prop.ttl_duration = Some(duration);
        }
        if let Some(col) = &schema_prop.ttl_col {
            // 空列名表示删除 TTL
            schema.schema_prop.ttl_col = if col.is_empty() { None } else { Some(col.clone()) };
        }
        if let Some(comment) = &schema_prop.comment {
            schema.schema_prop.comment = Some(comment.clone());
        }
        validate_schema(name, &schema)?;

        tag.schema = schema;
        tag.version += 1;
        Ok(true)
    }
}

impl Default for MemMetaClient {
    fn default() -> Self {
        Self::new()
    }
}

fn apply_alter_item(schema: &mut Schema, item: &AlterSchemaItem) -> MetaResult<()> {
    match item {
        AlterSchemaItem::Add(props) => {
            for prop in props {
                if schema.column(&prop.name).is_some() {
                    return Err(MetaError::ColumnExisted(prop.name.clone()));
                }
                schema.columns.push(prop.clone());
            }
        }
        AlterSchemaItem::Change(props) => {
            for prop in props {
                let column = schema
                    .columns
                    .iter_mut()
                    .find(|c| c.name == prop.name)
                    .ok_or_else(|| MetaError::ColumnNotFound(prop.name.clone()))?;
                *column = prop.clone();
            }
        }
        AlterSchemaItem::Drop(names) => {
            for name in names {
                if schema.schema_prop.ttl_col.as_deref() == Some(name.as_str()) {
                    return Err(MetaError::InvalidSchema(format!(
                        "column `{}' is used as ttl_col",
                        name
                    )));
                }
                let before = schema.columns.len();
                schema.columns.retain(|c| &c.name != name);
                if schema.columns.len() == before {
                    return Err(MetaError::ColumnNotFound(name.clone()));
                }
            }
        }
    }
    Ok(())
}

fn validate_schema(tag_name: &str, schema: &Schema) -> MetaResult<()> {
    let mut seen = HashSet::new();
    for column in &schema.columns {
        if column.name.is_empty() {
            return Err(MetaError::InvalidSchema(format!(
                "empty property name in tag `{}'",
                tag_name
            )));
        }
        if !seen.insert(column.name.as_str()) {
            return Err(MetaError::InvalidSchema(format!(
                "duplicate property `{}' in tag `{}'",
                column.name, tag_name
            )));
        }
    }

    if let Some(ttl_col) = &schema.schema_prop.ttl_col {
        let column = schema.column(ttl_col).ok_or_else(|| {
            MetaError::InvalidSchema(format!("ttl_col `{}' is not a property", ttl_col))
        })?;
        if !column.data_type.is_ttl_compatible() {
            return Err(MetaError::InvalidSchema(format!(
                "ttl_col `{}' must be an integer or timestamp",
                ttl_col
            )));
        }
    }
    Ok(())
}

impl MetaClient for MemMetaClient {
    fn create_tag_schema(
        &self,
        space_id: SpaceId,
        name: &str,
        schema: &Schema,
        if_not_exists: bool,
    ) -> MetaFuture<TagId> {
        future::ready(self.create_tag(space_id, name, schema, if_not_exists)).boxed()
    }

    fn get_tag_schema(&self, space_id: SpaceId, name: &str) -> MetaFuture<Schema> {
        future::ready(self.get_tag(space_id, name)).boxed()
    }

    fn drop_tag_schema(&self, space_id: SpaceId, name: &str, if_exists: bool) -> MetaFuture<bool> {
        future::ready(self.drop_tag(space_id, name, if_exists)).boxed()
    }

    fn list_tag_schemas(&self, space_id: SpaceId) -> MetaFuture<Vec<TagItem>> {
        future::ready(self.list_tags(space_id)).boxed()
    }

    fn alter_tag_schema(
        &self,
        space_id: SpaceId,
        name: &str,
        items: &[AlterSchemaItem],
        schema_prop: &SchemaProp,
    ) -> MetaFuture<bool> {
        future::ready(self.alter_tag(space_id, name, items, schema_prop)).boxed()
    }
}
