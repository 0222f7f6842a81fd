//! Country Search Core Library
//!
//! Everything between the page surface and the data client:
//! - Debounced input handling
//! - Rendering of results into list and detail containers
//! - The search controller tying both to a [`CountrySource`]
//!
//! The page is abstracted through traits ([`SearchInput`], [`Container`],
//! [`Notifier`]) injected at construction, so the controller can drive any
//! host surface.
//!
//! [`CountrySource`]: country_search_provider::CountrySource

pub mod config;
pub mod debounce;
pub mod render;
pub mod services;
pub mod traits;
mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use config::SearchConfig;
pub use debounce::Debounced;
pub use render::Renderer;
pub use services::SearchController;
pub use traits::{
    Container, MemoryContainer, MemoryInput, Notification, NotificationLog, Notifier,
    PageHandles, SearchInput, Severity,
};
