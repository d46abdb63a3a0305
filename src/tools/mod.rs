//! Tool surface: four text-returning task operations.

pub mod adapter;
pub mod reply;

pub use adapter::TaskTools;
pub use reply::ToolReply;
