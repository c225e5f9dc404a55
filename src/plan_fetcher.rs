use thiserror::Error;
use tracing::{debug, warn};

use crate::api_connection::{ApiConnectionError, GenerateContentRequest, Provider};
use crate::meal_plan::{MealPlan, PlanValidationError};
use crate::plan_request::PlanRequest;
use crate::prompt_builder::build_plan_prompt;

#[derive(Debug, Error)]
pub enum PlanFetchError {
    #[error(transparent)]
    Connection(#[from] ApiConnectionError),
    #[error("reply has no candidate text")]
    NoCandidate,
    #[error("reply text is empty after stripping markdown fences")]
    EmptyReply,
    #[error("reply is not a meal plan: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("reply failed validation: {0}")]
    Invalid(#[from] PlanValidationError),
}

/// Drops ```json / ``` fence markers wherever they appear and trims the rest.
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_string()
}

/// Turns the model's text into a validated plan.
pub fn parse_plan_reply(text: &str) -> Result<MealPlan, PlanFetchError> {
    let content = strip_code_fences(text);
    if content.is_empty() {
        return Err(PlanFetchError::EmptyReply);
    }

    let plan: MealPlan = serde_json::from_str(&content).map_err(|e| {
        debug!(error = %e, content = %content, "failed to deserialize plan reply");
        PlanFetchError::Malformed(e)
    })?;
    plan.validate()?;
    Ok(plan)
}

/// One round trip to the remote generator. Every failure is reported; the
/// caller decides whether to fall back.
pub async fn fetch_remote_plan(provider: &Provider, request: &PlanRequest) -> Result<MealPlan, PlanFetchError> {
    let prompt = build_plan_prompt(request);
    let response = provider
        .call_generate_content(&GenerateContentRequest::from_prompt(prompt))
        .await?;

    if let Some(usage) = &response.usage_metadata {
        debug!(
            prompt_tokens = ?usage.prompt_token_count,
            reply_tokens = ?usage.candidates_token_count,
            total_tokens = ?usage.total_token_count,
            "plan reply token usage"
        );
    }

    let text = response.first_text().ok_or(PlanFetchError::NoCandidate)?;
    debug!(raw = %text, "raw plan reply");

    let plan = parse_plan_reply(text)?;
    let expected = request.plan_duration.days();
    if plan.day_count() != expected {
        warn!(
            expected,
            received = plan.day_count(),
            "remote plan day count differs from requested duration"
        );
    }
    Ok(plan)
}
