//! # Handler chain
//!
//! Runs a sequence of handlers for one incoming message. Each handler has optional
//! before/handle/after: all before run in order (any false stops the chain); then handle runs
//! until Stop or Reply; then all after run in reverse with the final response.

use crate::core::{Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Chain of handlers: before (all) → handle (until Stop/Reply) → after (reverse).
#[derive(Clone, Default)]
pub struct HandlerChain {
    handlers: Vec<Arc<dyn Handler>>,
}

fn handler_name(h: &Arc<dyn Handler>) -> &'static str {
    std::any::type_name_of_val(h.as_ref())
}

fn response_kind(response: &HandlerResponse) -> &'static str {
    match response {
        HandlerResponse::Continue => "Continue",
        HandlerResponse::Stop => "Stop",
        HandlerResponse::Ignore => "Ignore",
        HandlerResponse::Reply(_) => "Reply",
    }
}

impl HandlerChain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a handler.
    pub fn add_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    /// Runs all before → handle until Stop/Reply → all after in reverse.
    #[instrument(skip(self, message))]
    pub async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            message_id = %message.id,
            "step: handler_chain started"
        );

        if !self.run_before(message).await? {
            return Ok(HandlerResponse::Stop);
        }
        let response = self.run_handle(message).await?;
        self.run_after(message, &response).await?;

        info!(
            user_id = message.user.id,
            response_type = response_kind(&response),
            "step: handler_chain finished"
        );
        Ok(response)
    }

    async fn run_before(&self, message: &Message) -> Result<bool> {
        for h in &self.handlers {
            if !h.before(message).await? {
                info!(
                    user_id = message.user.id,
                    handler = handler_name(h),
                    "step: before returned false, chain stopped"
                );
                return Ok(false);
            }
        }
        Ok(true)
    }

    async fn run_handle(&self, message: &Message) -> Result<HandlerResponse> {
        for h in &self.handlers {
            let name = handler_name(h);
            let response = h.handle(message).await?;
            debug!(handler = name, response = ?response, "Handler processed");
            match response {
                HandlerResponse::Stop | HandlerResponse::Reply(_) => {
                    info!(
                        user_id = message.user.id,
                        handler = name,
                        response_type = response_kind(&response),
                        "step: handler chain stopped by handler"
                    );
                    return Ok(response);
                }
                HandlerResponse::Continue | HandlerResponse::Ignore => {}
            }
        }
        Ok(HandlerResponse::Continue)
    }

    async fn run_after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        for h in self.handlers.iter().rev() {
            h.after(message, response).await?;
        }
        Ok(())
    }
}
