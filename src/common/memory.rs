//! 内存管理模块
//!
//! 提供查询执行过程中的内存使用监控和限制功能。
//! 执行器在派发请求和构造结果行之前先向跟踪器申请额度，超出限制时得到
//! `DBError::MemoryLimitExceeded`，而不是让进程在分配时崩溃。

use crate::config::ExecutorConfig;
use crate::core::error::{DBError, DBResult};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// 内存使用跟踪器
#[derive(Debug)]
pub struct MemoryTracker {
    /// 当前内存使用量
    current_usage: AtomicUsize,
    /// 峰值内存使用量
    peak_usage: AtomicUsize,
    /// 内存限制
    limit: usize,
    /// 是否启用检查
    enabled: bool,
}

impl MemoryTracker {
    /// 创建新的内存跟踪器
    pub fn new(limit: usize) -> Self {
        Self {
            current_usage: AtomicUsize::new(0),
            peak_usage: AtomicUsize::new(0),
            limit,
            enabled: true,
        }
    }

    /// 不做限制的跟踪器
    pub fn unlimited() -> Self {
        Self {
            enabled: false,
            ..Self::new(usize::MAX)
        }
    }

    pub fn from_config(config: &ExecutorConfig) -> Self {
        if config.check_memory {
            Self::new(config.max_query_memory)
        } else {
            Self::unlimited()
        }
    }

    /// 分配内存
    pub fn allocate(&self, size: usize) -> DBResult<()> {
        let current = self.current_usage.fetch_add(size, Ordering::AcqRel);
        let total = current.saturating_add(size);

        if self.enabled && total > self.limit {
            // 回滚分配
            self.current_usage.fetch_sub(size, Ordering::AcqRel);
            return Err(DBError::memory_exceeded(format!(
                "current={}, requested={}, limit={}",
                current, size, self.limit
            )));
        }

        self.peak_usage.fetch_max(total, Ordering::AcqRel);
        Ok(())
    }

    /// 释放内存
    pub fn deallocate(&self, size: usize) {
        self.current_usage.fetch_sub(size, Ordering::AcqRel);
    }

    /// 申请额度，返回的守卫在析构时归还
    pub fn reserve(self: &Arc<Self>, size: usize) -> DBResult<MemoryReservation> {
        self.allocate(size)?;
        Ok(MemoryReservation {
            tracker: Arc::clone(self),
            size,
        })
    }

    /// 获取当前内存使用量
    pub fn current_usage(&self) -> usize {
        self.current_usage.load(Ordering::Acquire)
    }

    pub fn peak_usage(&self) -> usize {
        self.peak_usage.load(Ordering::Acquire)
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl Default for MemoryTracker {
    fn default() -> Self {
        Self::from_config(&ExecutorConfig::default())
    }
}

/// 已申请的内存额度
#[derive(Debug)]
pub struct MemoryReservation {
    tracker: Arc<MemoryTracker>,
    size: usize,
}

impl MemoryReservation {
    pub fn size(&self) -> usize {
        self.size
    }

    /// 在当前额度上继续追加
    pub fn grow(&mut self, additional: usize) -> DBResult<()> {
        self.tracker.allocate(additional)?;
        self.size += additional;
        Ok(())
    }
}

impl Drop for MemoryReservation {
    fn drop(&mut self) {
        self.tracker.deallocate(self.size);
    }
}
