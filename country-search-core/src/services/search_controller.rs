//! Search controller
//!
//! Wires input changes and list clicks to the data source, the renderer and
//! the notifier. Every fetch takes a generation number; a response is only
//! applied while its generation is still the latest, so a slow earlier
//! request can never overwrite a newer render. The generation lock is held
//! for the whole render, so a newer request waits for it to finish.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use country_search_provider::{CountryRecord, CountrySource};
use tokio::runtime::Handle;

use crate::config::SearchConfig;
use crate::debounce::Debounced;
use crate::render::{entry_id, markup, Renderer, Tag, ENTRY_NAME_ATTR};
use crate::services::notifications::{self, GENERIC_FAILURE, NO_MATCH};
use crate::traits::{Notifier, PageHandles};
use crate::utils::lock;

/// Search controller
///
/// Stateless between events apart from the debounce timer, the generation
/// counter and the records of the last render.
pub struct SearchController {
    inner: Arc<ControllerInner>,
    debounced: Debounced,
    runtime: Handle,
}

struct ControllerInner {
    source: Arc<dyn CountrySource>,
    page: PageHandles,
    renderer: Renderer,
    notifier: Arc<dyn Notifier>,
    reuse_cached_records: bool,
    generation: Mutex<u64>,
    /// Records of the last render, keyed by list entry id
    rendered: Mutex<HashMap<String, CountryRecord>>,
}

impl SearchController {
    /// Create a controller.
    ///
    /// `runtime` runs the debounce timer and the fetches triggered from
    /// [`on_input`](Self::on_input) and [`on_list_click`](Self::on_list_click).
    pub fn new(
        source: Arc<dyn CountrySource>,
        page: PageHandles,
        notifier: Arc<dyn Notifier>,
        config: &SearchConfig,
        runtime: Handle,
    ) -> Self {
        let inner = Arc::new(ControllerInner {
            source,
            renderer: Renderer::new(Arc::clone(&page.list), Arc::clone(&page.detail)),
            page,
            notifier,
            reuse_cached_records: config.reuse_cached_records,
            generation: Mutex::new(0),
            rendered: Mutex::new(HashMap::new()),
        });

        let debounced = {
            let inner = Arc::clone(&inner);
            let spawner = runtime.clone();
            Debounced::new(
                move || {
                    let inner = Arc::clone(&inner);
                    spawner.spawn(async move { inner.search().await });
                },
                config.debounce_delay(),
                runtime.clone(),
            )
        };

        Self {
            inner,
            debounced,
            runtime,
        }
    }

    /// Input changed: (re)schedule a search after the debounce delay.
    pub fn on_input(&self) {
        self.debounced.call();
    }

    /// List clicked: resolve the clicked entry in the background.
    ///
    /// `target` is the path of the clicked node inside the list container.
    pub fn on_list_click(&self, target: Vec<usize>) {
        let inner = Arc::clone(&self.inner);
        self.runtime
            .spawn(async move { inner.list_click(&target).await });
    }

    /// Run a search for the current input value right away.
    pub async fn handle_search(&self) {
        self.inner.search().await;
    }

    /// Resolve a click on the node at `target` inside the list container.
    pub async fn handle_list_click(&self, target: &[usize]) {
        self.inner.list_click(target).await;
    }

    /// Whether a debounced search is waiting to fire.
    pub fn search_pending(&self) -> bool {
        self.debounced.is_pending()
    }

    /// Generation of the most recent request.
    pub fn generation(&self) -> u64 {
        *lock(&self.inner.generation)
    }
}

impl ControllerInner {
    fn next_generation(&self) -> u64 {
        let mut current = lock(&self.generation);
        *current += 1;
        *current
    }

    /// Generation lock, if `generation` is still the latest.
    fn latest(&self, generation: u64) -> Option<MutexGuard<'_, u64>> {
        let current = lock(&self.generation);
        (*current == generation).then_some(current)
    }

    fn show(&self, results: &[CountryRecord]) {
        self.renderer.render_list(results);

        let mut rendered = lock(&self.rendered);
        rendered.clear();
        rendered.extend(
            results
                .iter()
                .enumerate()
                .map(|(index, record)| (entry_id(index), record.clone())),
        );
    }

    async fn search(&self) {
        let term = self.page.input.value().trim().to_string();

        if term.is_empty() {
            // a pending response must not repopulate the cleared list
            let mut current = lock(&self.generation);
            *current += 1;
            self.page.list.clear();
            return;
        }

        let generation = self.next_generation();
        log::debug!("search #{generation}: '{term}'");

        let outcome = self.source.search(&term).await;
        let Some(current) = self.latest(generation) else {
            log::debug!("discarding stale response #{generation} for '{term}'");
            return;
        };

        match outcome {
            Ok(results) => {
                self.show(&results);
                drop(current);
                let notification = notifications::classify(results.len());
                self.notifier
                    .notify(notification.severity, &notification.message);
            }
            Err(e) => {
                drop(current);
                log::warn!("search for '{term}' failed: {e}");
                self.notifier.failure(NO_MATCH);
            }
        }
    }

    async fn list_click(&self, target: &[usize]) {
        let entries = self.page.list.children();
        let Some(entry) = markup::closest(&entries, target, Tag::Li) else {
            return;
        };

        let id = entry.id().unwrap_or_default().to_string();
        let name = entry
            .attr(ENTRY_NAME_ATTR)
            .or(entry.id())
            .unwrap_or_default()
            .to_string();

        if self.reuse_cached_records {
            let cached = lock(&self.rendered).get(&id).cloned();
            if let Some(record) = cached {
                log::debug!("showing '{name}' from the last result set");
                let mut current = lock(&self.generation);
                *current += 1;
                self.show(&[record]);
                return;
            }
            log::debug!("'{id}' not in the last result set, fetching '{name}'");
        }

        let generation = self.next_generation();
        let outcome = self.source.search(&name).await;
        let Some(current) = self.latest(generation) else {
            log::debug!("discarding stale response #{generation} for '{name}'");
            return;
        };

        match outcome {
            Ok(results) => self.show(&results),
            Err(e) => {
                drop(current);
                log::warn!("lookup of '{name}' failed: {e}");
                self.notifier.failure(GENERIC_FAILURE);
            }
        }
    }
}
