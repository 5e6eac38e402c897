use rust_i18n::t;
use std::fs::File;

use crate::constants::{APP_DIR_NAME, LOG_FILE_NAME};

/// Simplifies file paths by extracting relevant parts from cargo registry paths
///
/// # Arguments
/// * `file_path` - The file path to simplify
///
/// # Returns
/// A simplified version of the file path
fn simplify_file_path(file_path: &str) -> String {
    if file_path.contains(APP_DIR_NAME) {
        if let Some(pos) = file_path.rfind("/src/") {
            return file_path[(pos + 1)..].to_string();
        }
    }

    if let Some((_, suffix)) = file_path.split_once(".cargo/registry/src/") {
        if let Some(first_slash) = suffix.find('/') {
            suffix[(first_slash + 1)..].to_string()
        } else {
            suffix.to_string()
        }
    } else {
        file_path.to_string()
    }
}

/// Formats log messages for console output with a simplified format
///
/// # Features
/// * Simplified time format (HH:MM:SS)
/// * Concise log format for console viewing
fn console_log_formatter(
    out: fern::FormatCallback,
    message: &std::fmt::Arguments,
    record: &log::Record,
) {
    let level = record.level();
    let level_color = match level {
        log::Level::Error => "\x1B[31m", // red
        log::Level::Warn => "\x1B[33m",  // yellow
        log::Level::Info => "\x1B[32m",  // green
        log::Level::Debug => "\x1B[0m",  // normal
        log::Level::Trace => "\x1B[35m", // purple
    };
    let reset = "\x1B[0m";

    out.finish(format_args!(
        "{}{}[{}] {}:{} {}{}",
        level_color,
        chrono::Local::now().format("%H:%M:%S.%3f "),
        get_level(level),
        simplify_file_path(record.file().unwrap_or("")),
        record.line().unwrap_or(0),
        message,
        reset,
    ))
}

/// Formats log messages for file output with detailed information
///
/// # Features
/// * Complete date-time format (YYYY-MM-DD HH:MM:SS)
/// * Includes file location, preserving context for troubleshooting
fn file_log_formatter(
    out: fern::FormatCallback,
    message: &std::fmt::Arguments,
    record: &log::Record,
) {
    out.finish(format_args!(
        "{}[{}] {}:{} {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S.%3f"),
        get_level(record.level()),
        simplify_file_path(record.file().unwrap_or("")),
        record.line().unwrap_or(0),
        message
    ))
}

/// Sets up the application logger with console and file outputs.
///
/// The console only shows warnings and errors so log lines never interleave
/// with interactive prompts; the file keeps everything from info up.
pub fn setup_logger() {
    // 初始化日志目录和文件
    let log_dir = dirs::data_local_dir()
        .map(|dir| dir.join(APP_DIR_NAME).join("logs"))
        .expect(&t!("main.failed_to_retrieve_log_directory"));
    std::fs::create_dir_all(&log_dir).expect(&t!("main.failed_to_create_log_directory"));
    let log_file_path = log_dir.join(LOG_FILE_NAME);
    File::create(&log_file_path).expect(&t!("main.failed_to_create_log_file"));

    let base_dispatcher = fern::Dispatch::new().level(log::LevelFilter::Debug);

    // 控制台日志分发器 - 使用简洁格式
    let stderr_dispatcher = fern::Dispatch::new()
        .level(log::LevelFilter::Warn)
        .format(console_log_formatter)
        .chain(std::io::stderr());

    // 文件日志分发器 - 使用详细格式
    let file_dispatcher = fern::Dispatch::new()
        .level(log::LevelFilter::Info)
        .filter(|record| {
            record.target().contains(APP_DIR_NAME) || record.level() < log::LevelFilter::Info
        })
        .format(file_log_formatter)
        .chain(fern::log_file(&log_file_path).expect(&t!("main.failed_to_create_log_file")));

    base_dispatcher
        .chain(stderr_dispatcher)
        .chain(file_dispatcher)
        .apply()
        .expect(&t!("main.failed_to_initialize_logger"));

    log::debug!(
        "Logger initialized successfully, log file path: {:?}",
        log_file_path
    );
}

fn get_level(level: log::Level) -> &'static str {
    match level {
        log::Level::Error => "E",
        log::Level::Warn => "W",
        log::Level::Info => "I",
        log::Level::Debug => "D",
        log::Level::Trace => "T",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simplify_file_path() {
        assert_eq!(
            simplify_file_path("/home/dev/askpad/src/ai/mod.rs"),
            "src/ai/mod.rs"
        );
        assert_eq!(
            simplify_file_path(
                "/home/dev/.cargo/registry/src/index.crates.io-6f17d22bba15001f/reqwest-0.12.8/src/lib.rs"
            ),
            "reqwest-0.12.8/src/lib.rs"
        );
        assert_eq!(simplify_file_path("plain.rs"), "plain.rs");
    }
}
