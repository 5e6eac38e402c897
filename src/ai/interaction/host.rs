use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// Narrow interface over the hosting surface.
///
/// The session orchestrator only ever talks to the host through this trait,
/// so the request/response core carries no dependency on a concrete UI. A
/// host may be a terminal, an editor bridge, or a scripted stand-in in
/// tests.
#[async_trait]
pub trait HostInteraction: Send + Sync {
    /// The text the user currently has selected, if any.
    async fn selected_text(&self) -> Option<String>;

    /// Asks the user to choose one of `options`. `None` means the picker
    /// was dismissed without a choice.
    async fn pick_one(&self, placeholder: &str, options: &[String]) -> Option<String>;

    /// Asks the user for a line of text. `None` means the prompt was
    /// dismissed.
    async fn prompt_text(&self, prompt: &str, placeholder: &str) -> Option<String>;

    fn show_info(&self, message: &str);

    fn show_warning(&self, message: &str);

    fn show_error(&self, message: &str);

    /// Presents a rendered HTML document to the user.
    fn display_panel(&self, title: &str, html: &str);

    /// Starts a cancellable progress indication for `title`. The returned
    /// token is triggered if the user cancels while the work runs.
    fn begin_progress(&self, title: &str) -> CancellationToken;

    /// Ends the progress indication started by [`begin_progress`].
    ///
    /// [`begin_progress`]: HostInteraction::begin_progress
    fn end_progress(&self);
}
