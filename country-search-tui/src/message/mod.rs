//! Message 层：Event 层与 Update 层之间传递的消息
//!
//!     src/message/mod.rs
//!         mod app;        // AppMessage 主消息
//!         mod search;     // SearchMessage 搜索面板消息

mod app;
mod search;

pub use app::AppMessage;
pub use search::SearchMessage;
