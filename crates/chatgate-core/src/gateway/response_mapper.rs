// Response mapping from the upstream completion to the gateway result

use chatgate_types::protocol::ChatCompletionResponse;
use chatgate_types::CompletionResult;

use crate::upstream::UpstreamError;

/// Shape an upstream completion into a `CompletionResult`.
///
/// `model` is the requested model, echoed back rather than the provider's
/// resolved snapshot name. Missing usage is reported as zeros.
pub fn map_completion(
    model: String,
    response: ChatCompletionResponse,
) -> Result<CompletionResult, UpstreamError> {
    let ChatCompletionResponse { choices, usage, .. } = response;
    let choice = choices
        .into_iter()
        .next()
        .ok_or_else(|| UpstreamError::InvalidResponse("upstream returned no choices".to_string()))?;

    Ok(CompletionResult::new(choice.message.content, model, usage.unwrap_or_default()))
}
