use std::future::Future;
use std::sync::Arc;
use tokio::sync::{Semaphore, mpsc::Receiver};
use tokio::task::JoinHandle;
use twilight_gateway::Event;

use super::PriorityClass;
use crate::context::Context;

pub struct EnqueuedEvent {
    pub event: Event,
    pub enqueue_at: std::time::Instant,
}

pub struct Worker;

impl Worker {
    /// Drains `rx`, running each event on its own task under a permit from `sem`.
    pub fn spawn<F, Fut>(
        ctx: Arc<Context>,
        sem: Arc<Semaphore>,
        mut rx: Receiver<EnqueuedEvent>,
        priority: PriorityClass,
        handler: F,
    ) -> JoinHandle<()>
    where
        F: Fn(Arc<Context>, Event) -> Fut + Send + Sync + 'static + Copy,
        Fut: Future<Output = ()> + Send + 'static,
    {
        tokio::spawn(async move {
            while let Some(EnqueuedEvent { event, enqueue_at }) = rx.recv().await {
                metrics::histogram!("bot_queue_wait_seconds", "priority" => priority.as_str())
                    .record(enqueue_at.elapsed().as_secs_f64());

                let Ok(permit) = sem.clone().acquire_owned().await else {
                    tracing::info!(priority = priority.as_str(), "semaphore closed, exit worker");
                    break;
                };

                let ctx = ctx.clone();
                tokio::spawn(async move {
                    let _permit = permit;
                    handler(ctx, event).await;
                });
            }
        })
    }
}
