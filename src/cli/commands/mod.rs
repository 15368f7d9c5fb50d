mod command_result;
mod context;
pub mod export;
pub mod import;
pub mod init;

pub use command_result::*;
