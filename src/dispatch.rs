use std::sync::Arc;
use twilight_gateway::Event;

use crate::{
    context::Context,
    events::{message_create, ready},
};

pub async fn dispatch_event(ctx: Arc<Context>, event: Event) {
    match event {
        Event::MessageCreate(boxed) => message_create::handle(ctx, (*boxed).0).await,
        Event::Ready(boxed) => ready::handle(ctx, *boxed).await,
        _ => {}
    }
}
