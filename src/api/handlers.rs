use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::Instrument;
use uuid::Uuid;

use super::{
    error::ApiError,
    types::{
        ActionsRequest, ActionsResponse, DraftRequest, DraftResponse, HealthResponse,
        ImproveRequest, ImproveResponse, ReplyRequest, ReplyResponse, SummarizeRequest,
        SummarizeResponse,
    },
    AppState,
};
use crate::{actions::parse_action_items, prompts::PromptRequest};

type ApiResult<T> = Result<Json<T>, ApiError>;

/// Builds the prompt, calls the model once and logs any failure under `operation`.
async fn run_prompt(
    state: &AppState,
    operation: &'static str,
    request: &impl PromptRequest,
) -> Result<String, ApiError> {
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("generate", %operation, %request_id);

    async {
        let prompt = request.prompt();
        tracing::debug!(prompt_len = prompt.len(), "calling model");

        state
            .generator
            .generate(request.system_instruction(), &prompt)
            .await
            .map_err(|e| {
                tracing::error!("{operation} error: {e}");
                ApiError::internal(e)
            })
    }
    .instrument(span)
    .await
}

pub async fn summarize(
    State(state): State<AppState>,
    payload: Result<Json<SummarizeRequest>, JsonRejection>,
) -> ApiResult<SummarizeResponse> {
    let Json(req) = payload?;
    let summary = run_prompt(&state, "summarize", &req).await?;
    Ok(Json(SummarizeResponse { summary }))
}

pub async fn extract_actions(
    State(state): State<AppState>,
    payload: Result<Json<ActionsRequest>, JsonRejection>,
) -> ApiResult<ActionsResponse> {
    let Json(req) = payload?;
    let raw = run_prompt(&state, "extract-actions", &req).await?;
    Ok(Json(ActionsResponse {
        actions: parse_action_items(&raw),
    }))
}

pub async fn draft(
    State(state): State<AppState>,
    payload: Result<Json<DraftRequest>, JsonRejection>,
) -> ApiResult<DraftResponse> {
    let Json(req) = payload?;
    let draft = run_prompt(&state, "draft", &req).await?;
    Ok(Json(DraftResponse { draft }))
}

pub async fn improve(
    State(state): State<AppState>,
    payload: Result<Json<ImproveRequest>, JsonRejection>,
) -> ApiResult<ImproveResponse> {
    let Json(req) = payload?;
    let improved = run_prompt(&state, "improve", &req).await?;
    Ok(Json(ImproveResponse { improved }))
}

pub async fn quick_reply(
    State(state): State<AppState>,
    payload: Result<Json<ReplyRequest>, JsonRejection>,
) -> ApiResult<ReplyResponse> {
    let Json(req) = payload?;
    let reply = run_prompt(&state, "quick-reply", &req).await?;
    Ok(Json(ReplyResponse { reply }))
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".into(),
        api_key_configured: state.api_key_configured,
    })
}
