// modules
pub mod ai;
pub mod constants;
pub mod error;
pub mod logger;
pub mod settings;
pub mod terminal;

use rust_i18n::i18n;

// Initialize internationalization with the "i18n" directory
// - Base directory is the crate root, so translations live in i18n/
i18n!("i18n", fallback = "en");
