mod host;
mod panel;
mod session;

pub use host::HostInteraction;
pub use panel::render_response_panel;
pub use session::Session;
