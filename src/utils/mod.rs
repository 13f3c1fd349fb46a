pub mod constants;
pub mod notify;
pub mod storage;

pub use constants::*;
pub use notify::*;
pub use storage::*;
