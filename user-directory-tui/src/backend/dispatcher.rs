//! 后台任务调度器

use std::sync::Arc;

use anyhow::Result;
use tokio::runtime::{Builder, Runtime};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::Instrument;
use user_directory_client::UserDirectory;

use super::Command;
use crate::message::BackendEvent;

/// 持有运行时与客户端，把 [`Command`] 变成异步任务
pub struct Backend {
    runtime: Runtime,
    client: Arc<dyn UserDirectory>,
    tx: UnboundedSender<BackendEvent>,
    rx: UnboundedReceiver<BackendEvent>,
}

impl Backend {
    /// 创建调度器（两个工作线程足够本应用的并发量）
    pub fn new(client: Arc<dyn UserDirectory>) -> Result<Self> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("user-directory-backend")
            .enable_all()
            .build()?;
        let (tx, rx) = mpsc::unbounded_channel();

        Ok(Self {
            runtime,
            client,
            tx,
            rx,
        })
    }

    /// 在后台执行 `command`，不阻塞调用方
    pub fn dispatch(&self, command: Command) {
        let span = tracing::debug_span!("command", ?command);
        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();

        self.runtime.spawn(
            async move {
                tracing::debug!("started");
                let event = command.run(client.as_ref()).await;
                if tx.send(event).is_err() {
                    log::debug!("Backend channel closed, dropping result");
                }
            }
            .instrument(span),
        );
    }

    /// 取出所有已完成的结果
    pub fn drain(&mut self) -> Vec<BackendEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.rx.try_recv() {
            events.push(event);
        }
        events
    }
}
