//! Gateway operations: validate, default, forward, shape.

pub mod request_parser;
pub mod response_mapper;

use chatgate_types::protocol::ChatCompletionRequest;
use chatgate_types::{
    ChatMessage, ChatRequest, CompletionParams, CompletionResult, ConversationRequest, GatewayError,
};
use tracing::{debug, warn};

use crate::upstream::CompletionClient;

/// Single-turn chat: the message is sent as one `user` turn.
pub async fn chat(
    client: &CompletionClient,
    request: ChatRequest,
) -> Result<CompletionResult, GatewayError> {
    let params = request.params();
    forward(client, params, vec![ChatMessage::user(request.message)]).await
}

/// Multi-turn chat: the history is forwarded as received.
pub async fn conversation(
    client: &CompletionClient,
    request: ConversationRequest,
) -> Result<CompletionResult, GatewayError> {
    let params = request.params();
    forward(client, params, request.messages).await
}

async fn forward(
    client: &CompletionClient,
    params: CompletionParams,
    messages: Vec<ChatMessage>,
) -> Result<CompletionResult, GatewayError> {
    let model = params.model.clone();
    debug!(
        model = %model,
        messages = messages.len(),
        max_tokens = ?params.max_tokens,
        temperature = ?params.temperature,
        "Forwarding completion request"
    );

    let upstream_request = ChatCompletionRequest::new(params, messages);
    client
        .complete(&upstream_request)
        .await
        .and_then(|response| response_mapper::map_completion(model, response))
        .map_err(|e| {
            warn!(kind = e.kind(), status = ?e.status(), "Upstream completion failed: {}", e);
            GatewayError::from(e)
        })
}
