mod client;
mod types;

pub use client::{ApiClient, DefaultApiClient};
pub use types::*;
