use crate::domain::Completion;

use super::messages;

/// Ask the completion service, never failing: any problem becomes one of
/// two fixed replies.
pub async fn converse(completion: &dyn Completion, user_text: &str, role_hint: &str) -> String {
    if !completion.is_configured() {
        return messages::COMPLETION_UNAVAILABLE.to_string();
    }

    match completion.complete(role_hint, user_text).await {
        Ok(Some(text)) => text,
        Ok(None) => {
            tracing::warn!("Completion returned no text");
            messages::COMPLETION_FAILED.to_string()
        }
        Err(e) => {
            tracing::error!("Completion request failed: {}", e);
            messages::COMPLETION_FAILED.to_string()
        }
    }
}
