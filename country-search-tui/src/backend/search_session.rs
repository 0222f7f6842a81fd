//! 搜索会话

use std::sync::Arc;

use anyhow::Result;
use country_search_core::render::Element;
use country_search_core::{
    Container, MemoryContainer, MemoryInput, Notification, NotificationLog, PageHandles,
    SearchConfig, SearchController, SearchInput,
};
use country_search_provider::{CountryClient, CountrySource};
use tokio::runtime::Handle;

/// The page the controller drives, kept in memory for the terminal.
pub struct SearchSession {
    controller: SearchController,
    input: Arc<MemoryInput>,
    list: Arc<MemoryContainer>,
    detail: Arc<MemoryContainer>,
    notifications: Arc<NotificationLog>,
}

impl SearchSession {
    /// 使用 HTTP 客户端创建会话
    pub fn new(config: &SearchConfig, runtime: Handle) -> Result<Self> {
        let client = CountryClient::new(&config.client_config())?;
        Ok(Self::with_source(Arc::new(client), config, runtime))
    }

    pub fn with_source(
        source: Arc<dyn CountrySource>,
        config: &SearchConfig,
        runtime: Handle,
    ) -> Self {
        let input = Arc::new(MemoryInput::default());
        let list = Arc::new(MemoryContainer::new());
        let detail = Arc::new(MemoryContainer::new());
        let notifications = Arc::new(NotificationLog::new());

        let page = PageHandles {
            input: input.clone(),
            list: list.clone(),
            detail: detail.clone(),
        };
        let controller =
            SearchController::new(source, page, notifications.clone(), config, runtime);

        Self {
            controller,
            input,
            list,
            detail,
            notifications,
        }
    }

    // === 输入 ===

    pub fn query(&self) -> String {
        self.input.value()
    }

    pub fn type_char(&self, c: char) {
        self.input.push(c);
        self.controller.on_input();
    }

    pub fn backspace(&self) {
        self.input.pop();
        self.controller.on_input();
    }

    pub fn clear_query(&self) {
        self.input.set("");
        self.controller.on_input();
    }

    /// 激活列表中第 `index` 个条目（等价于点击）
    pub fn activate(&self, index: usize) {
        self.controller.on_list_click(vec![index]);
    }

    // === 渲染结果 ===

    pub fn list_entries(&self) -> Vec<Element> {
        self.list.children()
    }

    pub fn list_revision(&self) -> u64 {
        self.list.revision()
    }

    pub fn detail(&self) -> Vec<Element> {
        self.detail.children()
    }

    pub fn latest_notification(&self) -> Option<Notification> {
        self.notifications.latest()
    }

    pub fn is_searching(&self) -> bool {
        self.controller.search_pending()
    }
}
