use thiserror::Error;

/// The single, unified error type for the application.
///
/// Module-specific errors are wrapped transparently so their localized
/// display strings pass through unchanged.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Ai(#[from] crate::ai::error::AiError),

    #[error(transparent)]
    Settings(#[from] crate::settings::SettingsError),

    #[error("{message}")]
    General { message: String },
}

/// A universal Result type for fallible functions across the crate.
pub type Result<T> = std::result::Result<T, AppError>;
