//! Request router: one inbound message in, one reply out.

use crate::domain::DomainError;
use crate::infrastructure::AppState;

use super::catalog::build_catalog_reply;
use super::conversation::converse;
use super::intent::{extract_option, is_menu_request, is_trivial_query, strip_option_prefix};
use super::messages;
use super::models::{IncomingMessage, MenuOption, Reply};

pub struct BotService;

impl BotService {
    /// Always produces a reply. Errors from the catalog or metadata path end
    /// here as the generic apology.
    pub async fn respond(state: &AppState, message: &IncomingMessage) -> Reply {
        let text = match Self::dispatch(state, message).await {
            Ok(text) => text,
            Err(e) => {
                tracing::error!("Failed to process message: {}", e);
                messages::GENERIC_ERROR.to_string()
            }
        };
        Reply { text }
    }

    async fn dispatch(state: &AppState, message: &IncomingMessage) -> Result<String, DomainError> {
        let raw = message.text.trim();

        if is_menu_request(raw) {
            tracing::info!("Menu requested");
            return Ok(messages::MAIN_MENU.to_string());
        }

        let option = extract_option(raw, message.context_option);
        tracing::info!("Routing message to {:?}", option);
        tracing::debug!("Message text: {}", raw);

        match option {
            MenuOption::NewCustomer => Ok(messages::NEW_CUSTOMER.to_string()),
            MenuOption::Payment => Ok(messages::payment(&state.settings.pix_key)),
            MenuOption::Support => {
                Ok(converse(state.completion.as_ref(), raw, messages::SUPPORT_ROLE).await)
            }
            MenuOption::Catalog => {
                // Under an active catalog context the whole text is the title
                let from_context = message
                    .context_option
                    .and_then(MenuOption::from_number)
                    .is_some();
                let query = if from_context {
                    raw.to_string()
                } else {
                    strip_option_prefix(raw)
                };
                if is_trivial_query(&query) {
                    return Ok(messages::CATALOG_PROMPT.to_string());
                }
                build_catalog_reply(state.catalog.as_ref(), state.metadata.as_ref(), &query).await
            }
            MenuOption::None => {
                Ok(converse(state.completion.as_ref(), raw, messages::FALLBACK_ROLE).await)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        CatalogEntry, CatalogRepository, Completion, MediaKind, MetadataHit, MetadataLookup,
    };
    use crate::infrastructure::BotSettings;
    use async_trait::async_trait;
    use std::sync::Arc;

    struct StaticCatalog(Result<Vec<&'static str>, ()>);

    #[async_trait]
    impl CatalogRepository for StaticCatalog {
        async fn find_matches(&self, _term: &str) -> Result<Vec<CatalogEntry>, DomainError> {
            match &self.0 {
                Ok(titles) => Ok(titles
                    .iter()
                    .map(|t| CatalogEntry {
                        title: t.to_string(),
                    })
                    .collect()),
                Err(()) => Err(DomainError::Database("database is locked".to_string())),
            }
        }
    }

    struct NoMetadata;

    #[async_trait]
    impl MetadataLookup for NoMetadata {
        fn is_configured(&self) -> bool {
            true
        }

        async fn search(
            &self,
            _kind: MediaKind,
            _query: &str,
        ) -> Result<Vec<MetadataHit>, DomainError> {
            Ok(vec![])
        }

        async fn season_count(&self, _id: i64) -> Result<Option<u32>, DomainError> {
            Ok(None)
        }

        fn poster_url(&self, path: &str) -> String {
            path.to_string()
        }
    }

    struct EchoCompletion;

    #[async_trait]
    impl Completion for EchoCompletion {
        fn is_configured(&self) -> bool {
            true
        }

        async fn complete(
            &self,
            instruction: &str,
            text: &str,
        ) -> Result<Option<String>, DomainError> {
            Ok(Some(format!("[{}] {}", instruction, text)))
        }
    }

    fn state_with(catalog: StaticCatalog) -> AppState {
        AppState::new(
            Arc::new(catalog),
            Arc::new(NoMetadata),
            Arc::new(EchoCompletion),
            BotSettings {
                pix_key: "pix-123".to_string(),
            },
        )
    }

    async fn reply(state: &AppState, text: &str, context_option: Option<i64>) -> String {
        let message = IncomingMessage {
            text: text.to_string(),
            context_option,
        };
        BotService::respond(state, &message).await.text
    }

    #[tokio::test]
    async fn test_greeting_overrides_any_context() {
        let state = state_with(StaticCatalog(Ok(vec!["Matrix"])));
        for context in [None, Some(1), Some(2), Some(3), Some(4)] {
            for text in ["oi", "Olá!", "boa tarde", "menu", "voltar"] {
                assert_eq!(reply(&state, text, context).await, messages::MAIN_MENU);
            }
        }
    }

    #[tokio::test]
    async fn test_static_options() {
        let state = state_with(StaticCatalog(Ok(vec![])));
        assert_eq!(reply(&state, "1", None).await, messages::NEW_CUSTOMER);
        assert!(reply(&state, "2", None).await.contains("pix-123"));
    }

    #[tokio::test]
    async fn test_support_and_fallback_use_different_roles() {
        let state = state_with(StaticCatalog(Ok(vec![])));

        let support = reply(&state, "minha tv travou", Some(3)).await;
        assert!(support.starts_with(&format!("[{}]", messages::SUPPORT_ROLE)));

        let fallback = reply(&state, "quanto custa?", None).await;
        assert!(fallback.starts_with(&format!("[{}]", messages::FALLBACK_ROLE)));
        assert!(fallback.ends_with("quanto custa?"));
    }

    #[tokio::test]
    async fn test_catalog_prompts_for_title() {
        let state = state_with(StaticCatalog(Ok(vec!["Matrix"])));
        assert_eq!(reply(&state, "4", None).await, messages::CATALOG_PROMPT);
        assert_eq!(reply(&state, "opção 4", None).await, messages::CATALOG_PROMPT);
        assert_eq!(reply(&state, "2", Some(4)).await, messages::CATALOG_PROMPT);
        assert_eq!(reply(&state, "  ", Some(4)).await, messages::CATALOG_PROMPT);
    }

    #[tokio::test]
    async fn test_catalog_search_with_context() {
        let state = state_with(StaticCatalog(Ok(vec!["Matrix"])));
        assert_eq!(
            reply(&state, "Matrix", Some(4)).await,
            messages::catalog_without_details("Matrix")
        );
        assert_eq!(
            reply(&state, "4 Matrix", None).await,
            messages::catalog_without_details("Matrix")
        );
    }

    #[tokio::test]
    async fn test_context_search_keeps_leading_number_in_title() {
        let state = state_with(StaticCatalog(Ok(vec![])));
        assert_eq!(
            reply(&state, "2 Coelhos", Some(4)).await,
            messages::catalog_not_found("2 Coelhos")
        );
        assert_eq!(
            reply(&state, "3 Idiotas", Some(4)).await,
            messages::catalog_not_found("3 Idiotas")
        );

        let state = state_with(StaticCatalog(Ok(vec!["2 Fast 2 Furious"])));
        assert_eq!(
            reply(&state, "2 Fast 2 Furious", Some(4)).await,
            messages::catalog_without_details("2 Fast 2 Furious")
        );
    }

    #[tokio::test]
    async fn test_store_failure_becomes_generic_error() {
        let state = state_with(StaticCatalog(Err(())));
        assert_eq!(reply(&state, "Matrix", Some(4)).await, messages::GENERIC_ERROR);
    }
}
