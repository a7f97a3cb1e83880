use crate::api;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::webhook::handle_webhook,
    ),
    components(
        schemas(
            api::webhook::WebhookRequest,
            api::webhook::QueryResult,
            api::webhook::OutputContext,
            api::webhook::WebhookResponse,
        )
    ),
    tags(
        (name = "iptv-webhook", description = "Menu-driven chatbot webhook")
    )
)]
pub struct ApiDoc;
