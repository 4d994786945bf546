//! 元数据服务访问层
//!
//! `MetaClient` 是执行器唯一依赖的远端接口；`MemMetaClient` 是进程内实现。

pub mod mem_meta_client;
pub mod meta_client;

pub use mem_meta_client::MemMetaClient;
pub use meta_client::{MetaClient, MetaFuture};
