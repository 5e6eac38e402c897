mod completion;
mod list_models;
mod response;

pub use completion::AnuraChat;
pub use list_models::list_models;
pub use response::first_assistant_reply;
