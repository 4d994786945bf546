//! 元数据服务客户端接口
//!
//! 每个方法在调用时立即发出请求，返回一个 `'static` 的 future，
//! 这样执行器可以把等待响应的后续逻辑交给任意 runner 线程。

use futures::future::BoxFuture;

use crate::core::error::MetaResult;
use crate::core::types::{AlterSchemaItem, Schema, SchemaProp, SpaceId, TagId, TagItem};

/// 元数据请求的异步结果
pub type MetaFuture<T> = BoxFuture<'static, MetaResult<T>>;

/// 元数据服务客户端
///
/// 实现必须支持并发的独立调用。超时、取消与重试都属于客户端自身，
/// 执行器只会看到最终的失败状态。
pub trait MetaClient: Send + Sync {
    fn create_tag_schema(
        &self,
        space_id: SpaceId,
        name: &str,
        schema: &Schema,
        if_not_exists: bool,
    ) -> MetaFuture<TagId>;

    fn get_tag_schema(&self, space_id: SpaceId, name: &str) -> MetaFuture<Schema>;

    fn drop_tag_schema(&self, space_id: SpaceId, name: &str, if_exists: bool) -> MetaFuture<bool>;

    fn list_tag_schemas(&self, space_id: SpaceId) -> MetaFuture<Vec<TagItem>>;

    fn alter_tag_schema(
        &self,
        space_id: SpaceId,
        name: &str,
        items: &[AlterSchemaItem],
        schema_prop: &SchemaProp,
    ) -> MetaFuture<bool>;
}
