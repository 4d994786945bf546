//! 标签操作相关的计划节点
//!
//! 由规划器产生、执行器只读的 DDL 命令描述。

use std::fmt;

use crate::core::types::{AlterSchemaItem, Schema, SchemaProp};

/// 标签命令类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagCommandKind {
    CreateTag,
    DescTag,
    DropTag,
    ShowTags,
    ShowCreateTag,
    AlterTag,
}

impl TagCommandKind {
    pub fn name(&self) -> &'static str {
        match self {
            TagCommandKind::CreateTag => "CreateTag",
            TagCommandKind::DescTag => "DescTag",
            TagCommandKind::DropTag => "DropTag",
            TagCommandKind::ShowTags => "ShowTags",
            TagCommandKind::ShowCreateTag => "ShowCreateTag",
            TagCommandKind::AlterTag => "AlterTag",
        }
    }

    /// 日志中使用的动作描述
    pub fn action(&self) -> &'static str {
        match self {
            TagCommandKind::CreateTag => "Create tag",
            TagCommandKind::DescTag => "Desc tag",
            TagCommandKind::DropTag => "Drop tag",
            TagCommandKind::ShowTags => "Show tags",
            TagCommandKind::ShowCreateTag => "Show create tag",
            TagCommandKind::AlterTag => "Alter tag",
        }
    }

    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            TagCommandKind::CreateTag | TagCommandKind::DropTag | TagCommandKind::AlterTag
        )
    }
}

impl fmt::Display for TagCommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 创建标签计划节点
#[derive(Debug, Clone)]
pub struct CreateTag {
    pub name: String,
    pub schema: Schema,
    pub if_not_exists: bool,
}

impl CreateTag {
    pub fn new(name: &str, schema: Schema, if_not_exists: bool) -> Self {
        Self {
            name: name.to_string(),
            schema,
            if_not_exists,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn if_not_exists(&self) -> bool {
        self.if_not_exists
    }
}

/// 描述标签计划节点
#[derive(Debug, Clone)]
pub struct DescTag {
    pub tag_name: String,
}

impl DescTag {
    pub fn new(tag_name: &str) -> Self {
        Self {
            tag_name: tag_name.to_string(),
        }
    }

    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }
}

/// 删除标签计划节点
#[derive(Debug, Clone)]
pub struct DropTag {
    pub if_exists: bool,
    pub tag_name: String,
}

impl DropTag {
    pub fn new(if_exists: bool, tag_name: &str) -> Self {
        Self {
            if_exists,
            tag_name: tag_name.to_string(),
        }
    }

    pub fn if_exists(&self) -> bool {
        self.if_exists
    }

    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }
}

/// 显示标签列表计划节点
#[derive(Debug, Clone, Default)]
pub struct ShowTags;

impl ShowTags {
    pub fn new() -> Self {
        Self
    }
}

/// 显示创建标签计划节点
#[derive(Debug, Clone)]
pub struct ShowCreateTag {
    pub tag_name: String,
}

impl ShowCreateTag {
    pub fn new(tag_name: &str) -> Self {
        Self {
            tag_name: tag_name.to_string(),
        }
    }

    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }
}

/// 修改标签计划节点
///
/// 修改项按语句中出现的顺序保存，执行器原样转发。
#[derive(Debug, Clone)]
pub struct AlterTag {
    pub tag_name: String,
    pub items: Vec<AlterSchemaItem>,
    pub schema_prop: SchemaProp,
}

impl AlterTag {
    pub fn new(tag_name: &str, items: Vec<AlterSchemaItem>, schema_prop: SchemaProp) -> Self {
        Self {
            tag_name: tag_name.to_string(),
            items,
            schema_prop,
        }
    }

    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    pub fn items(&self) -> &[AlterSchemaItem] {
        &self.items
    }

    pub fn schema_prop(&self) -> &SchemaProp {
        &self.schema_prop
    }
}

/// 标签命令
#[derive(Debug, Clone)]
pub enum TagCommand {
    Create(CreateTag),
    Desc(DescTag),
    Drop(DropTag),
    Show(ShowTags),
    ShowCreate(ShowCreateTag),
    Alter(AlterTag),
}

impl TagCommand {
    pub fn kind(&self) -> TagCommandKind {
        match self {
            TagCommand::Create(_) => TagCommandKind::CreateTag,
            TagCommand::Desc(_) => TagCommandKind::DescTag,
            TagCommand::Drop(_) => TagCommandKind::DropTag,
            TagCommand::Show(_) => TagCommandKind::ShowTags,
            TagCommand::ShowCreate(_) => TagCommandKind::ShowCreateTag,
            TagCommand::Alter(_) => TagCommandKind::AlterTag,
        }
    }

    /// 目标标签名；SHOW TAGS 作用于整个图空间，返回空串
    pub fn target_name(&self) -> &str {
        match self {
            TagCommand::Create(n) => n.name(),
            TagCommand::Desc(n) => n.tag_name(),
            TagCommand::Drop(n) => n.tag_name(),
            TagCommand::Show(_) => "",
            TagCommand::ShowCreate(n) => n.tag_name(),
            TagCommand::Alter(n) => n.tag_name(),
        }
    }
}

impl From<CreateTag> for TagCommand {
    fn from(node: CreateTag) -> Self {
        TagCommand::Create(node)
    }
}

impl From<DescTag> for TagCommand {
    fn from(node: DescTag) -> Self {
        TagCommand::Desc(node)
    }
}

impl From<DropTag> for TagCommand {
    fn from(node: DropTag) -> Self {
        TagCommand::Drop(node)
    }
}

impl From<ShowTags> for TagCommand {
    fn from(node: ShowTags) -> Self {
        TagCommand::Show(node)
    }
}

impl From<ShowCreateTag> for TagCommand {
    fn from(node: ShowCreateTag) -> Self {
        TagCommand::ShowCreate(node)
    }
}

impl From<AlterTag> for TagCommand {
    fn from(node: AlterTag) -> Self {
        TagCommand::Alter(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_kind_and_target() {
        let cmd: TagCommand = DropTag::new(true, "person").into();
        assert_eq!(cmd.kind(), TagCommandKind::DropTag);
        assert_eq!(cmd.target_name(), "person");
        assert!(cmd.kind().is_mutation());

        let show: TagCommand = ShowTags::new().into();
        assert_eq!(show.target_name(), "");
        assert!(!show.kind().is_mutation());
    }

    #[test]
    fn test_kind_action_text() {
        assert_eq!(TagCommandKind::ShowCreateTag.action(), "Show create tag");
        assert_eq!(TagCommandKind::AlterTag.to_string(), "AlterTag");
    }
}
