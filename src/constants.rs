// =================================================
// Anura API endpoints
// =================================================
// The base URL can be overridden from the settings file or the command
// line; the endpoint paths are fixed.
pub const DEFAULT_API_BASE_URL: &str = "https://anura-testnet.lilypad.tech/api/v1";
pub const MODELS_ENDPOINT: &str = "models";
pub const CHAT_COMPLETIONS_ENDPOINT: &str = "chat/completions";

// Environment variable consulted when no token is stored in the settings.
pub const API_TOKEN_ENV: &str = "LILYPAD_API_TOKEN";

// =================================================
// Fixed completion request parameters
// =================================================
pub const COMPLETION_MAX_TOKENS: u32 = 2048;
pub const COMPLETION_TEMPERATURE: f64 = 0.7;
pub const SYSTEM_PROMPT: &str = "You are an AI assistant analyzing code.";

// Directory name used under the user's config/data directories.
pub const APP_DIR_NAME: &str = "askpad";
pub const SETTINGS_FILE_NAME: &str = "config.yml";
pub const LOG_FILE_NAME: &str = "askpad.log";
