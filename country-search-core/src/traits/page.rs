//! Page surface abstraction
//!
//! The controller never looks up page elements itself; the host hands them
//! over as [`PageHandles`].

use std::sync::{Arc, Mutex};

use crate::render::{markup, Element};
use crate::utils::lock;

/// Text input the user types search terms into.
pub trait SearchInput: Send + Sync {
    /// Current raw value, untrimmed.
    fn value(&self) -> String;
}

/// A container whose content is replaced wholesale on every render.
pub trait Container: Send + Sync {
    /// Replace all content with `children`.
    fn replace(&self, children: Vec<Element>);

    /// Set the container's own inline style.
    fn set_style(&self, css: &str);

    /// Snapshot of the current content.
    fn children(&self) -> Vec<Element>;

    fn clear(&self) {
        self.replace(Vec::new());
    }
}

/// Page elements the controller reads from and renders into.
#[derive(Clone)]
pub struct PageHandles {
    pub input: Arc<dyn SearchInput>,
    pub list: Arc<dyn Container>,
    pub detail: Arc<dyn Container>,
}

/// In-memory search input
#[derive(Debug, Default)]
pub struct MemoryInput {
    value: Mutex<String>,
}

impl MemoryInput {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: Mutex::new(value.into()),
        }
    }

    pub fn set(&self, value: impl Into<String>) {
        *lock(&self.value) = value.into();
    }

    /// Append a typed character.
    pub fn push(&self, c: char) {
        lock(&self.value).push(c);
    }

    /// Remove the last character, as Backspace does.
    pub fn pop(&self) {
        lock(&self.value).pop();
    }
}

impl SearchInput for MemoryInput {
    fn value(&self) -> String {
        lock(&self.value).clone()
    }
}

#[derive(Debug, Default)]
struct ContainerState {
    children: Vec<Element>,
    style: Option<String>,
    revision: u64,
}

/// In-memory container
///
/// Default implementation used by the terminal host and tests.
#[derive(Debug, Default)]
pub struct MemoryContainer {
    state: Mutex<ContainerState>,
}

impl MemoryContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.state).children.is_empty()
    }

    pub fn style(&self) -> Option<String> {
        lock(&self.state).style.clone()
    }

    /// Number of content replacements so far; lets hosts notice re-renders.
    pub fn revision(&self) -> u64 {
        lock(&self.state).revision
    }

    pub fn to_html(&self) -> String {
        markup::to_html(&lock(&self.state).children)
    }
}

impl Container for MemoryContainer {
    fn replace(&self, children: Vec<Element>) {
        let mut state = lock(&self.state);
        state.children = children;
        state.revision += 1;
    }

    fn set_style(&self, css: &str) {
        lock(&self.state).style = Some(css.to_string());
    }

    fn children(&self) -> Vec<Element> {
        lock(&self.state).children.clone()
    }
}
