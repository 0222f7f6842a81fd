//! 业务逻辑服务层

pub mod notifications;
mod search_controller;

pub use search_controller::SearchController;
