pub mod chat_store;
pub mod session_store;

pub use chat_store::*;
pub use session_store::*;
