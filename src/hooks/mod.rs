pub mod use_chat;
pub mod use_session;

pub use use_chat::*;
pub use use_session::*;
