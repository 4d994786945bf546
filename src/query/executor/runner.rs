//! 执行 runner
//!
//! 元数据请求返回后，后续逻辑在调用方提供的 runner 上继续执行，
//! 不保证与发出请求的线程相同。runner 作为显式依赖传入，而不是从线程局部状态获取。

use std::future::Future;

use tokio::runtime::{Builder, Handle, Runtime};
use tokio::task::JoinHandle;

use crate::config::ExecutorConfig;
use crate::core::error::{DBError, DBResult};

/// 后续逻辑的执行位置
#[derive(Debug, Clone)]
pub struct Runner {
    handle: Handle,
}

impl Runner {
    pub fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// 使用当前所在的 tokio 运行时
    pub fn current() -> DBResult<Self> {
        Handle::try_current()
            .map(Self::new)
            .map_err(|e| DBError::Internal(format!("no runtime available for runner: {}", e)))
    }

    pub fn spawn<F>(&self, future: F) -> JoinHandle<F::Output>
    where
        F: Future + Send + 'static,
        F::Output: Send + 'static,
    {
        self.handle.spawn(future)
    }

    pub fn handle(&self) -> &Handle {
        &self.handle
    }
}

/// 独立的 runner 线程池
///
/// 拥有一个多线程 tokio 运行时，供不在运行时内的调用方使用。
#[derive(Debug)]
pub struct RunnerPool {
    runtime: Runtime,
    worker_threads: usize,
}

impl RunnerPool {
    pub fn build(config: &ExecutorConfig) -> DBResult<Self> {
        let worker_threads = config.effective_worker_threads();
        let runtime = Builder::new_multi_thread()
            .worker_threads(worker_threads)
            .thread_name("graphdb-runner")
            .enable_time()
            .build()?;
        log::info!("Runner pool started with {} worker threads", worker_threads);
        Ok(Self {
            runtime,
            worker_threads,
        })
    }

    pub fn runner(&self) -> Runner {
        Runner::new(self.runtime.handle().clone())
    }

    pub fn worker_threads(&self) -> usize {
        self.worker_threads
    }

    /// 在当前线程上等待 future 完成
    pub fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }
}
