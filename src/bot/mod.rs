pub mod worker;

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::{Semaphore, mpsc};
use tokio_util::sync::CancellationToken;
use twilight_gateway::{Event, EventTypeFlags, Shard, StreamExt as _};

use crate::{context::Context, dispatch::dispatch_event, services::health::HealthService};

use worker::{EnqueuedEvent, Worker};

const NORMAL_QUEUE_CAP: usize = 256;
const NORMAL_PERMITS: usize = 32;
const LOW_QUEUE_CAP: usize = 24;
const LOW_PERMITS: usize = 8;
const MAX_RECEIVE_FAILURES: usize = 5;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PriorityClass {
    Normal,
    Low,
    Ignore,
}

impl PriorityClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriorityClass::Normal => "normal",
            PriorityClass::Low => "low",
            PriorityClass::Ignore => "ignore",
        }
    }

    pub fn classify(event: &Event) -> Self {
        match event {
            Event::MessageCreate(_) => PriorityClass::Normal,
            Event::Ready(_) => PriorityClass::Low,
            _ => PriorityClass::Ignore,
        }
    }
}

fn event_type(e: &Event) -> &'static str {
    match e {
        Event::MessageCreate(_) => "message_create",
        Event::Ready(_) => "ready",
        _ => "other",
    }
}

pub struct Bot {
    shard: Shard,
    ctx: Arc<Context>,
    normal_tx: mpsc::Sender<EnqueuedEvent>,
    low_tx: mpsc::Sender<EnqueuedEvent>,
}

impl Bot {
    pub fn new(ctx: Arc<Context>, shard: Shard) -> Self {
        let (normal_tx, normal_rx) = mpsc::channel(NORMAL_QUEUE_CAP);
        let (low_tx, low_rx) = mpsc::channel(LOW_QUEUE_CAP);

        Worker::spawn(
            ctx.clone(),
            Arc::new(Semaphore::new(NORMAL_PERMITS)),
            normal_rx,
            PriorityClass::Normal,
            dispatch_event,
        );
        Worker::spawn(
            ctx.clone(),
            Arc::new(Semaphore::new(LOW_PERMITS)),
            low_rx,
            PriorityClass::Low,
            dispatch_event,
        );

        Self { shard, ctx, normal_tx, low_tx }
    }

    fn sender(&self, priority: PriorityClass) -> Option<&mpsc::Sender<EnqueuedEvent>> {
        match priority {
            PriorityClass::Normal => Some(&self.normal_tx),
            PriorityClass::Low => Some(&self.low_tx),
            PriorityClass::Ignore => None,
        }
    }

    pub async fn run(mut self, shutdown: CancellationToken) -> anyhow::Result<()> {
        let mut failure_count = 0usize;

        loop {
            tokio::select! {
                _ = shutdown.cancelled() => break,
                item = self.shard.next_event(EventTypeFlags::all()) => {
                    let Some(item) = item else { break };
                    let event = match item {
                        Ok(event) => event,
                        Err(source) => {
                            tracing::warn!(?source, "error receiving event");
                            failure_count += 1;
                            if failure_count >= MAX_RECEIVE_FAILURES {
                                HealthService::set_discord(false);
                            }
                            continue;
                        }
                    };

                    failure_count = 0;
                    self.ctx.cache.update(&event);
                    HealthService::set_discord(self.shard.state().is_identified());

                    let priority = PriorityClass::classify(&event);
                    let Some(tx) = self.sender(priority) else { continue };

                    let start = Instant::now();
                    let ev_type = event_type(&event);
                    if let Err(e) = tx.send(EnqueuedEvent { event, enqueue_at: start }).await {
                        tracing::warn!(error = ?e, priority = priority.as_str(), "event queue closed");
                        break;
                    }

                    metrics::histogram!("bot_queue_enqueue_block_seconds", "priority" => priority.as_str())
                        .record(start.elapsed().as_secs_f64());
                    metrics::counter!("bot_events_total",
                        "priority" => priority.as_str(),
                        "event_type" => ev_type,
                        "result" => "enqueued").increment(1);
                }
            }
        }

        HealthService::set_discord(false);
        HealthService::set_ready(false);

        Ok(())
    }
}
