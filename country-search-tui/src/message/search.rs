//! 搜索面板消息

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchMessage {
    /// 输入字符
    Type(char),
    /// 删除最后一个字符
    Backspace,
    /// 清空输入
    Clear,
    /// 选中上一条结果
    SelectPrevious,
    /// 选中下一条结果
    SelectNext,
    /// 打开选中的结果
    Activate,
}
