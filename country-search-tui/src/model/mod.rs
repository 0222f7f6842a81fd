//! Model 层：应用状态
//!
//!     src/model/mod.rs
//!         mod app;        // App 主状态
//!         mod focus;      // 焦点面板
//!
//! 搜索结果本身不在 Model 中复制一份，而是保存在 [`SearchSession`] 的
//! 内存容器里；App 只记录选中项以及最近一次看到的列表版本号。
//!
//! [`SearchSession`]: crate::backend::SearchSession

mod app;
mod focus;

pub use app::App;
pub use focus::FocusPanel;
