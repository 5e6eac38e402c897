use rust_i18n::t;

use crate::ai::chat::{list_models, AnuraChat};
use crate::ai::interaction::host::HostInteraction;
use crate::ai::interaction::panel::render_response_panel;
use crate::settings::Settings;

/// End-to-end orchestration of one "ask about this code" action.
///
/// The session owns no credential and no model list; everything is fetched
/// fresh per invocation, so rotating the token or the upstream model set
/// takes effect on the next run without any invalidation step.
pub struct Session {
    chat: AnuraChat,
    base_url_override: Option<String>,
}

impl Session {
    /// Creates a new session
    ///
    /// # Arguments
    /// * `base_url_override` - Endpoint base URL taking precedence over the
    ///   settings file, used by tests and the `--base-url` flag
    pub fn new(base_url_override: Option<String>) -> Self {
        Self {
            chat: AnuraChat::new(),
            base_url_override,
        }
    }

    /// Runs the full flow: selection → model list → model pick → question →
    /// cancellable dispatch → result panel.
    ///
    /// Every failure is reported through the host; nothing escapes as an
    /// error. A dismissed picker or prompt aborts silently - the user chose
    /// to walk away, there is nothing to report.
    pub async fn ask(&self, host: &dyn HostInteraction) {
        let selected = match host.selected_text().await {
            Some(text) if !text.is_empty() => text,
            _ => {
                host.show_warning(&t!("chat.select_code_first"));
                return;
            }
        };

        let config = self.api_config();

        let models = match list_models(&config).await {
            Ok(models) => models,
            Err(err) => {
                log::warn!("Fetching models failed: {}", err);
                host.show_error(&t!("chat.fetch_models_failed", details = err.to_string()));
                return;
            }
        };
        if models.is_empty() {
            host.show_error(&t!("chat.no_models_available"));
            return;
        }

        let model = match host
            .pick_one(&t!("chat.pick_model_placeholder"), &models)
            .await
        {
            Some(model) => model,
            None => return,
        };

        let question = match host
            .prompt_text(
                &t!("chat.enter_query_prompt"),
                &t!("chat.enter_query_placeholder"),
            )
            .await
        {
            Some(question) if !question.is_empty() => question,
            _ => return,
        };

        let cancel = host.begin_progress(&t!("chat.querying"));
        let result = self
            .chat
            .ask(&config, &selected, &question, &model, cancel)
            .await;
        host.end_progress();

        match result {
            Ok(answer) => {
                let html = render_response_panel(&model, &question, &answer);
                host.display_panel(&t!("chat.panel_title", model = &model), &html);
            }
            Err(err) => host.show_error(&err.to_string()),
        }
    }

    /// Prompts for an API token and stores it in the settings file.
    pub async fn configure(&self, host: &dyn HostInteraction) {
        let token = match host
            .prompt_text(&t!("chat.enter_token_prompt"), "")
            .await
        {
            Some(token) if !token.is_empty() => token,
            _ => return,
        };

        match Settings::store_token(&token) {
            Ok(()) => host.show_info(&t!("chat.token_saved")),
            Err(err) => host.show_error(&err.to_string()),
        }
    }

    /// Builds the per-call API configuration. Settings (and through them the
    /// credential) are re-read on every invocation by design.
    fn api_config(&self) -> crate::ai::network::ApiConfig {
        let settings = Settings::load().unwrap_or_else(|err| {
            log::warn!("Falling back to default settings: {}", err);
            Settings::default()
        });

        let mut config = settings.api_config();
        if let Some(base_url) = &self.base_url_override {
            config.api_url = Some(base_url.clone());
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use tokio_util::sync::CancellationToken;

    /// Scripted host that records everything the session tells it.
    #[derive(Default)]
    struct MockHost {
        selection: Option<String>,
        warnings: Mutex<Vec<String>>,
        errors: Mutex<Vec<String>>,
        picks_offered: Mutex<Vec<Vec<String>>>,
    }

    #[async_trait]
    impl HostInteraction for MockHost {
        async fn selected_text(&self) -> Option<String> {
            self.selection.clone()
        }

        async fn pick_one(&self, _placeholder: &str, options: &[String]) -> Option<String> {
            self.picks_offered.lock().push(options.to_vec());
            None
        }

        async fn prompt_text(&self, _prompt: &str, _placeholder: &str) -> Option<String> {
            None
        }

        fn show_info(&self, _message: &str) {}

        fn show_warning(&self, message: &str) {
            self.warnings.lock().push(message.to_string());
        }

        fn show_error(&self, message: &str) {
            self.errors.lock().push(message.to_string());
        }

        fn display_panel(&self, _title: &str, _html: &str) {}

        fn begin_progress(&self, _title: &str) -> CancellationToken {
            CancellationToken::new()
        }

        fn end_progress(&self) {}
    }

    #[tokio::test]
    async fn test_missing_selection_warns_and_stops() {
        let host = MockHost::default();
        Session::new(Some("http://127.0.0.1:9".to_string()))
            .ask(&host)
            .await;

        assert_eq!(host.warnings.lock().len(), 1);
        // The flow never reached the model list.
        assert!(host.picks_offered.lock().is_empty());
        assert!(host.errors.lock().is_empty());
    }

    #[tokio::test]
    async fn test_empty_selection_warns_and_stops() {
        let host = MockHost {
            selection: Some(String::new()),
            ..MockHost::default()
        };
        Session::new(Some("http://127.0.0.1:9".to_string()))
            .ask(&host)
            .await;

        assert_eq!(host.warnings.lock().len(), 1);
        assert!(host.picks_offered.lock().is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_reported() {
        let host = MockHost {
            selection: Some("fn main() {}".to_string()),
            ..MockHost::default()
        };
        // Nothing listens here; the model fetch fails and the session must
        // report it instead of propagating.
        Session::new(Some("http://127.0.0.1:9".to_string()))
            .ask(&host)
            .await;

        assert_eq!(host.errors.lock().len(), 1);
        assert!(host.picks_offered.lock().is_empty());
    }
}
