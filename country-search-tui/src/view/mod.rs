//! View 层：只读取状态，把它画到终端上
//!
//!     src/view/mod.rs
//!         mod layout;         // 主布局
//!         mod theme;          // 颜色与样式
//!         mod components;     // 状态栏
//!         mod pages;          // 搜索页

mod components;
mod layout;
mod pages;
mod theme;

pub use layout::render;
