//! Event 层：把键盘输入翻译为 [`AppMessage`](crate::message::AppMessage)
//!
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//! 焦点在输入框时，可打印字符进入搜索词，Esc 清空；
//! 焦点在结果列表时，j/k 移动选中项，q 退出。
//! ↑/↓/Enter/Tab/Ctrl+C 在两个面板中都生效。

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
