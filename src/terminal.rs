use std::fs;
use std::io::Write;
use std::path::PathBuf;

use async_trait::async_trait;
use parking_lot::Mutex;
use rust_i18n::t;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::ai::interaction::HostInteraction;
use crate::constants::APP_DIR_NAME;

/// Terminal implementation of the host interface.
///
/// Selection comes from a file argument or piped stdin, pickers and prompts
/// are interactive line reads, progress is cancellable with Ctrl-C, and
/// panels are written as standalone HTML files under the user data
/// directory. Model and question can be preset from the command line so the
/// whole flow also works non-interactively.
pub struct TerminalHost {
    selection: Option<String>,
    preset_model: Option<String>,
    preset_question: Option<String>,
    progress: Mutex<Option<JoinHandle<()>>>,
}

impl TerminalHost {
    pub fn new(
        selection: Option<String>,
        preset_model: Option<String>,
        preset_question: Option<String>,
    ) -> Self {
        Self {
            selection,
            preset_model,
            preset_question,
            progress: Mutex::new(None),
        }
    }

    /// Reads one line from stdin without blocking the runtime. `None` on
    /// EOF or a read failure.
    async fn read_line(&self) -> Option<String> {
        tokio::task::spawn_blocking(|| {
            let mut line = String::new();
            match std::io::stdin().read_line(&mut line) {
                Ok(0) => None,
                Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
                Err(_) => None,
            }
        })
        .await
        .ok()
        .flatten()
    }

    fn write_panel_file(html: &str) -> Result<PathBuf, String> {
        let dir = dirs::data_local_dir()
            .map(|dir| dir.join(APP_DIR_NAME).join("panels"))
            .ok_or_else(|| t!("settings.error.no_config_dir").to_string())?;
        fs::create_dir_all(&dir)
            .map_err(|e| t!("chat.panel_write_failed", details = e.to_string()).to_string())?;

        let file_name = chrono::Local::now()
            .format("response-%Y%m%d-%H%M%S.html")
            .to_string();
        let path = dir.join(file_name);
        fs::write(&path, html)
            .map_err(|e| t!("chat.panel_write_failed", details = e.to_string()).to_string())?;
        Ok(path)
    }
}

/// Resolves a picker answer: a 1-based index or an exact option name.
fn parse_choice(input: &str, options: &[String]) -> Option<String> {
    if let Ok(index) = input.parse::<usize>() {
        if index >= 1 && index <= options.len() {
            return Some(options[index - 1].clone());
        }
    }
    options.iter().find(|option| *option == input).cloned()
}

#[async_trait]
impl HostInteraction for TerminalHost {
    async fn selected_text(&self) -> Option<String> {
        self.selection.clone()
    }

    async fn pick_one(&self, placeholder: &str, options: &[String]) -> Option<String> {
        if let Some(preset) = &self.preset_model {
            if options.contains(preset) {
                return Some(preset.clone());
            }
            self.show_warning(&t!("chat.preset_model_unknown", model = preset));
        }

        println!("{}", placeholder);
        for (index, option) in options.iter().enumerate() {
            println!("  {}. {}", index + 1, option);
        }

        loop {
            print!("> ");
            std::io::stdout().flush().ok();

            let line = self.read_line().await?;
            if line.is_empty() {
                return None;
            }
            match parse_choice(&line, options) {
                Some(choice) => return Some(choice),
                None => println!("{}", t!("chat.invalid_choice", max = options.len())),
            }
        }
    }

    async fn prompt_text(&self, prompt: &str, placeholder: &str) -> Option<String> {
        if let Some(preset) = &self.preset_question {
            return Some(preset.clone());
        }

        if placeholder.is_empty() {
            println!("{}", prompt);
        } else {
            println!("{} ({})", prompt, placeholder);
        }
        print!("> ");
        std::io::stdout().flush().ok();

        self.read_line().await
    }

    fn show_info(&self, message: &str) {
        println!("{}", message);
    }

    fn show_warning(&self, message: &str) {
        eprintln!("\x1B[33m{}\x1B[0m", message);
    }

    fn show_error(&self, message: &str) {
        eprintln!("\x1B[31m{}\x1B[0m", message);
    }

    fn display_panel(&self, title: &str, html: &str) {
        match Self::write_panel_file(html) {
            Ok(path) => {
                self.show_info(title);
                self.show_info(&t!("chat.panel_saved", path = path.display().to_string()));
            }
            Err(details) => self.show_error(&details),
        }
    }

    fn begin_progress(&self, title: &str) -> CancellationToken {
        let token = CancellationToken::new();
        eprintln!("{} ({})", title, t!("chat.cancel_hint"));

        let watcher = token.clone();
        let handle = tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                watcher.cancel();
            }
        });
        *self.progress.lock() = Some(handle);

        token
    }

    fn end_progress(&self) {
        if let Some(handle) = self.progress.lock().take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<String> {
        vec![
            "llama3.1:8b".to_string(),
            "qwen2.5:7b".to_string(),
            "phi4:14b".to_string(),
        ]
    }

    #[test]
    fn test_parse_choice_by_index() {
        assert_eq!(parse_choice("1", &options()).as_deref(), Some("llama3.1:8b"));
        assert_eq!(parse_choice("3", &options()).as_deref(), Some("phi4:14b"));
    }

    #[test]
    fn test_parse_choice_by_name() {
        assert_eq!(
            parse_choice("qwen2.5:7b", &options()).as_deref(),
            Some("qwen2.5:7b")
        );
    }

    #[test]
    fn test_parse_choice_rejects_out_of_range_and_unknown() {
        assert_eq!(parse_choice("0", &options()), None);
        assert_eq!(parse_choice("4", &options()), None);
        assert_eq!(parse_choice("gpt-4", &options()), None);
    }

    #[tokio::test]
    async fn test_preset_model_is_confirmed_against_options() {
        let host = TerminalHost::new(None, Some("qwen2.5:7b".to_string()), None);
        assert_eq!(
            host.pick_one("pick", &options()).await.as_deref(),
            Some("qwen2.5:7b")
        );
    }

    #[tokio::test]
    async fn test_preset_question_answers_prompt() {
        let host = TerminalHost::new(None, None, Some("what is this?".to_string()));
        assert_eq!(
            host.prompt_text("prompt", "").await.as_deref(),
            Some("what is this?")
        );
    }
}
