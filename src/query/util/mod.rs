pub mod schema_util;

pub use schema_util::{to_desc_schema, to_show_create_schema};
