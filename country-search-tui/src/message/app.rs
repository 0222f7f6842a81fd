//! 应用主消息

use super::SearchMessage;

/// 应用主消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 切换焦点面板（输入框 / 结果列表）
    ToggleFocus,

    /// 搜索相关消息
    Search(SearchMessage),

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
