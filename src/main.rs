use std::fs;
use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use askpad::ai::interaction::Session;
use askpad::error::{AppError, Result};
use askpad::logger::setup_logger;
use askpad::terminal::TerminalHost;

/// Askpad - ask AI about a piece of code
#[derive(Parser, Debug)]
#[command(name = "askpad")]
#[command(about = "Ask AI about a piece of code, right from your terminal")]
#[command(after_help = r#"Examples:
    # Ask about a file interactively
    askpad ask src/main.rs

    # Pipe the code in and skip the prompts
    cat src/main.rs | askpad ask -m "llama3.1:8b" -q "What does this function do?"

    # Point at a different Anura deployment
    askpad --base-url http://localhost:8080/api/v1 ask src/main.rs

    # Store the Lilypad API token
    askpad configure
"#)]
struct Cli {
    /// Anura API base URL
    #[arg(long, env = "ASKPAD_BASE_URL")]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Ask a question about a piece of code
    Ask {
        /// File holding the code to ask about; piped stdin when omitted
        file: Option<PathBuf>,

        /// Model to use, skipping the interactive picker
        #[arg(short, long)]
        model: Option<String>,

        /// Question to ask, skipping the interactive prompt
        #[arg(short, long)]
        question: Option<String>,
    },
    /// Store the Lilypad API token in the settings file
    Configure,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_locale();
    setup_logger();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}", err);
            eprintln!("\x1B[31m{}\x1B[0m", err);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let session = Session::new(cli.base_url);

    match cli.command {
        Command::Ask {
            file,
            model,
            question,
        } => {
            let selection = read_selection(file.as_deref())?;
            let host = TerminalHost::new(selection, model, question);
            session.ask(&host).await;
        }
        Command::Configure => {
            let host = TerminalHost::new(None, None, None);
            session.configure(&host).await;
        }
    }

    Ok(())
}

/// The "selected text" of a terminal session: a file argument, or stdin
/// when something was piped in.
fn read_selection(file: Option<&Path>) -> Result<Option<String>> {
    match file {
        Some(path) => fs::read_to_string(path)
            .map(Some)
            .map_err(|e| AppError::General {
                message: format!("failed to read {}: {}", path.display(), e),
            }),
        None => {
            let mut stdin = std::io::stdin();
            if stdin.is_terminal() {
                return Ok(None);
            }
            let mut selection = String::new();
            stdin
                .read_to_string(&mut selection)
                .map_err(|e| AppError::General {
                    message: format!("failed to read stdin: {}", e),
                })?;
            Ok(Some(selection))
        }
    }
}

fn init_locale() {
    let locale = locale_config::Locale::user_default().to_string();
    if locale.starts_with("zh") {
        rust_i18n::set_locale("zh");
    }
}
