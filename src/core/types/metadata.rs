//! 元数据类型定义
//!
//! 执行器与元数据服务之间交换的 schema 结构

use serde::{Deserialize, Serialize};

use super::property::PropertyDef;

/// 图空间 ID
pub type SpaceId = i32;
/// 标签 ID
pub type TagId = i32;
/// schema 版本号
pub type SchemaVer = i64;

/// schema 级别选项
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SchemaProp {
    pub ttl_duration: Option<i64>,
    pub ttl_col: Option<String>,
    pub comment: Option<String>,
}

impl SchemaProp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ttl(mut self, duration: i64, col: String) -> Self {
        self.ttl_duration = Some(duration);
        self.ttl_col = Some(col);
        self
    }

    pub fn with_comment(mut self, comment: String) -> Self {
        self.comment = Some(comment);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.ttl_duration.is_none() && self.ttl_col.is_none() && self.comment.is_none()
    }
}

/// 标签 schema：有序属性列表 + schema 选项
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Schema {
    pub columns: Vec<PropertyDef>,
    pub schema_prop: SchemaProp,
}

impl Schema {
    pub fn new(columns: Vec<PropertyDef>) -> Self {
        Self {
            columns,
            schema_prop: SchemaProp::default(),
        }
    }

    pub fn with_schema_prop(mut self, schema_prop: SchemaProp) -> Self {
        self.schema_prop = schema_prop;
        self
    }

    pub fn column(&self, name: &str) -> Option<&PropertyDef> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn estimated_size(&self) -> usize {
        self.columns
            .iter()
            .map(|c| std::mem::size_of::<PropertyDef>() + c.name.len())
            .sum::<usize>()
            + std::mem::size_of::<SchemaProp>()
    }
}

/// 标签概要
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagItem {
    pub tag_id: TagId,
    pub tag_name: String,
    pub version: SchemaVer,
    pub schema: Schema,
}

impl TagItem {
    pub fn new(tag_id: TagId, tag_name: String, version: SchemaVer, schema: Schema) -> Self {
        Self {
            tag_id,
            tag_name,
            version,
            schema,
        }
    }
}

/// schema 修改操作类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlterSchemaOp {
    Add,
    Change,
    Drop,
}

/// schema 修改项
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AlterSchemaItem {
    Add(Vec<PropertyDef>),
    Change(Vec<PropertyDef>),
    Drop(Vec<String>),
}

impl AlterSchemaItem {
    pub fn add_property(property: PropertyDef) -> Self {
        AlterSchemaItem::Add(vec![property])
    }

    pub fn change_property(property: PropertyDef) -> Self {
        AlterSchemaItem::Change(vec![property])
    }

    pub fn drop_property(property_name: String) -> Self {
        AlterSchemaItem::Drop(vec![property_name])
    }

    pub fn op(&self) -> AlterSchemaOp {
        match self {
            AlterSchemaItem::Add(_) => AlterSchemaOp::Add,
            AlterSchemaItem::Change(_) => AlterSchemaOp::Change,
            AlterSchemaItem::Drop(_) => AlterSchemaOp::Drop,
        }
    }

    /// 该修改项涉及的属性名
    pub fn property_names(&self) -> Vec<&str> {
        match self {
            AlterSchemaItem::Add(props) | AlterSchemaItem::Change(props) => {
                props.iter().map(|p| p.name.as_str()).collect()
            }
            AlterSchemaItem::Drop(names) => names.iter().map(String::as_str).collect(),
        }
    }
}
