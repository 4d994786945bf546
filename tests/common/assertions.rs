//! 自定义断言辅助模块
//!
//! 提供测试中的常用断言函数

use graphdb_ddl::core::{DataSet, FailureKind, Value};
use graphdb_ddl::query::executor::ExecutionResult;

/// 断言执行成功且不返回数据
pub fn assert_success(result: &ExecutionResult) {
    assert_eq!(result, &ExecutionResult::Success, "执行应该成功且无数据返回");
}

/// 断言执行成功并返回数据集
pub fn assert_dataset(result: &ExecutionResult) -> &DataSet {
    result.dataset().expect("执行应该返回数据集")
}

/// 断言执行失败并属于指定分类，错误消息包含给定文本
pub fn assert_failure(result: &ExecutionResult, kind: FailureKind, expected_msg: &str) {
    assert_eq!(result.failure_kind(), Some(kind), "失败分类不匹配: {:?}", result);
    assert_eq!(result.count(), 0, "失败结果不应包含数据行");
    let msg = result.error().map(|e| e.to_string()).unwrap_or_default();
    assert!(
        msg.contains(expected_msg),
        "错误消息应包含 '{}', 实际是 '{}'",
        expected_msg,
        msg
    );
}

/// 断言某列的值依次为给定字符串
pub fn assert_string_column(dataset: &DataSet, column: &str, expected: &[&str]) {
    let actual: Vec<&Value> = dataset.column(column).expect("列应该存在");
    let expected: Vec<Value> = expected.iter().map(|s| Value::String(s.to_string())).collect();
    assert_eq!(
        actual,
        expected.iter().collect::<Vec<_>>(),
        "{}列的值不匹配",
        column
    );
}
