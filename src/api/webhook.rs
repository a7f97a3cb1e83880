use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::bot::{BotService, IncomingMessage};
use crate::infrastructure::AppState;

/// Context parameter carrying the previously selected menu option
pub const OPTION_PARAM: &str = "opcao";

/// Inbound payload. Accepts the conversational platform's `queryResult`
/// envelope, the same fields at the top level, or a bare `message`.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WebhookRequest {
    #[serde(default)]
    pub query_result: Option<QueryResult>,
    #[serde(default)]
    pub query_text: Option<String>,
    #[serde(default)]
    pub output_contexts: Vec<OutputContext>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    #[serde(default)]
    pub query_text: Option<String>,
    #[serde(default)]
    pub output_contexts: Vec<OutputContext>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct OutputContext {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub parameters: Map<String, Value>,
}

impl OutputContext {
    /// The option number stored under [`OPTION_PARAM`], as a number or a
    /// numeric string. Platforms often send whole numbers as `4.0`.
    fn option(&self) -> Option<i64> {
        match self.parameters.get(OPTION_PARAM)? {
            Value::Number(n) => n.as_i64().or_else(|| {
                n.as_f64()
                    .filter(|f| f.fract() == 0.0)
                    .map(|f| f as i64)
            }),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

impl WebhookRequest {
    fn contexts(&self) -> impl Iterator<Item = &OutputContext> {
        self.query_result
            .iter()
            .flat_map(|qr| qr.output_contexts.iter())
            .chain(self.output_contexts.iter())
    }

    pub fn into_message(self) -> IncomingMessage {
        let context_option = self
            .contexts()
            .filter_map(OutputContext::option)
            .find(|n| (1..=4).contains(n));

        let text = self
            .query_result
            .and_then(|qr| qr.query_text)
            .or(self.query_text)
            .or(self.message)
            .unwrap_or_default();

        IncomingMessage {
            text,
            context_option,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WebhookResponse {
    pub fulfillment_text: String,
}

#[utoipa::path(
    post,
    path = "/webhook",
    request_body = WebhookRequest,
    responses(
        (status = 200, description = "Reply text for the user", body = WebhookResponse)
    )
)]
pub async fn handle_webhook(
    State(state): State<AppState>,
    Json(payload): Json<WebhookRequest>,
) -> Json<WebhookResponse> {
    let message = payload.into_message();
    let reply = BotService::respond(&state, &message).await;

    Json(WebhookResponse {
        fulfillment_text: reply.text,
    })
}
