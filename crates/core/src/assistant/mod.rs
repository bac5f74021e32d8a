//! Conversational assistant over the live network snapshot.
//!
//! The remote model is an external collaborator behind one narrow seam:
//! [`AssistantTransport`] forwards a system instruction, the role-tagged
//! history and the new user message, and yields free text or an error.
//! Everything above the seam — history bookkeeping, the registry-name
//! preamble, the fixed apology on failure — is plain, testable code.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use chaka_transit::prelude::*;
use itertools::Itertools;
use tracing::error;

pub mod gemini;

pub use gemini::GeminiTransport;

/// Substituted for the reply whenever the transport fails, in any way.
pub const FALLBACK_REPLY: &str =
    "I'm having trouble connecting to the traffic control center right now. Please try again later.";

const WELCOME: &str =
    "Hi! I am your Dhaka transit assistant. Ask me about routes, fares, or traffic tips!";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Model,
}

impl ChatRole {
    /// Wire label, matching the remote endpoint's role vocabulary.
    pub fn label(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Model => "model",
        }
    }
}

#[derive(Clone, Debug)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub text: String,
}

impl ChatTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Model,
            text: text.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AssistantError {
    #[error("transport: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed reply: {0}")]
    MalformedReply(String),
}

/// Forward one user turn to the remote model.
///
/// Single request/response; no retry, no timeout tuning, no streaming.
pub trait AssistantTransport: Send + Sync {
    fn send<'a>(
        &'a self,
        system_instruction: &'a str,
        history: &'a [ChatTurn],
        message: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, AssistantError>> + Send + 'a>>;
}

/// Build the instruction preamble, embedding the names (only the names) of
/// everything currently in both registries so edits show up immediately.
pub fn system_instruction(network: &BusNetwork) -> String {
    let buses = network.buses().iter().map(|b| b.name.as_str()).join(", ");
    let stops = network.stops().iter().map(|s| s.name.as_str()).join(", ");

    format!(
        "You are \"Chaka Assistant\", a helpful and knowledgeable local transit expert \
for Dhaka, Bangladesh.\n\
You have access to a specific database of buses: {buses}.\n\
You know stops like: {stops}.\n\
\n\
Your goals:\n\
1. Help users find the best bus for their route.\n\
2. Estimate costs and times based on typical Dhaka traffic (which is heavy).\n\
3. Be friendly and use local context (e.g., mention traffic at Farmgate).\n\
4. Keep answers concise.\n\
\n\
If the user asks about a route, explain which buses go there.\n\
If the user asks about general Dhaka info, provide it.\n\
Do not invent buses outside Dhaka; for services missing from your short list you \
may fall back on general knowledge of Dhaka transit."
    )
}

/// Conversation state plus the transport.
///
/// `ask` takes `&mut self`, so one request is in flight at a time — the
/// equivalent of the disabled send button while a reply is loading.
pub struct Assistant {
    transport: Arc<dyn AssistantTransport>,
    history: Vec<ChatTurn>,
}

impl Assistant {
    pub fn new(transport: Arc<dyn AssistantTransport>) -> Self {
        Self {
            transport,
            history: vec![ChatTurn::model(WELCOME)],
        }
    }

    /// Full conversation, welcome turn included
    pub fn history(&self) -> &[ChatTurn] {
        &self.history
    }

    /// Send one user turn and record both sides of the exchange.
    ///
    /// Never fails: a transport error is logged and the fixed fallback
    /// string stands in for the reply, so the conversation continues.
    pub async fn ask(&mut self, message: &str, network: &BusNetwork) -> String {
        let instruction = system_instruction(network);
        let transport = self.transport.clone();

        let reply = match transport.send(&instruction, &self.history, message).await {
            Ok(text) => text,
            Err(err) => {
                error!(%err, "assistant transport failed");
                FALLBACK_REPLY.to_owned()
            }
        };

        self.history.push(ChatTurn::user(message));
        self.history.push(ChatTurn::model(reply.clone()));
        reply
    }
}
