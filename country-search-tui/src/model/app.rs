//! 应用主状态

use super::FocusPanel;
use crate::backend::SearchSession;

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 结果列表中选中的条目
    pub selected: Option<usize>,

    /// 上次同步时的列表版本号
    seen_revision: u64,

    /// 搜索会话
    pub session: SearchSession,
}

impl App {
    pub fn new(session: SearchSession) -> Self {
        Self {
            should_quit: false,
            focus: FocusPanel::default(),
            selected: None,
            seen_revision: session.list_revision(),
            session,
        }
    }

    /// 列表被重新渲染时，选中项回到第一条（或清空）
    pub fn sync_results(&mut self) {
        let revision = self.session.list_revision();
        if revision == self.seen_revision {
            return;
        }
        self.seen_revision = revision;
        self.selected = if self.result_count() == 0 { None } else { Some(0) };
    }

    pub fn result_count(&self) -> usize {
        self.session.list_entries().len()
    }

    pub fn select_next(&mut self) {
        let count = self.result_count();
        if count == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) if i + 1 < count => i + 1,
            Some(_) => 0,
            None => 0,
        });
    }

    pub fn select_previous(&mut self) {
        let count = self.result_count();
        if count == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(match self.selected {
            Some(0) | None => count - 1,
            Some(i) => i - 1,
        });
    }
}
