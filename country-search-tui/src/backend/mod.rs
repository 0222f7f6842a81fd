//! Backend 层：配置加载与搜索会话
//!
//! - `config_service`: 读取 `<config dir>/country-search/config.json`
//! - `search_session`: 把 [`SearchController`](country_search_core::SearchController)
//!   与内存中的页面容器绑定在一起，供 UI 层读取

mod config_service;
mod search_session;

pub use config_service::{ConfigService, LocalConfigService, APP_DIR};
pub use search_session::SearchSession;
