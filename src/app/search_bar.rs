use crate::core::debounce::Debouncer;
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_PLACEHOLDER: &str = "Rechercher...";

pub type SearchCallback = Arc<dyn Fn(String) + Send + Sync>;

/// Search input state. The query updates on every keystroke; `on_search`
/// only hears about it once typing pauses for the debounce delay.
pub struct SearchBar {
    placeholder: String,
    query: String,
    debouncer: Debouncer,
    on_search: Option<SearchCallback>,
}

impl SearchBar {
    pub fn new(debounce: Duration) -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            query: String::new(),
            debouncer: Debouncer::new(debounce),
            on_search: None,
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_on_search<F>(mut self, on_search: F) -> Self
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.on_search = Some(Arc::new(on_search));
        self
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// The clear button is only shown while there is something to clear.
    pub fn shows_clear_button(&self) -> bool {
        !self.query.is_empty()
    }

    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// New input content. Must run inside a tokio runtime.
    pub fn input(&mut self, value: impl Into<String>) {
        self.query = value.into();
        let Some(on_search) = self.on_search.clone() else {
            return;
        };
        let value = self.query.clone();
        self.debouncer.schedule(move || on_search(value));
    }

    /// Clear button: empties the query and notifies right away.
    pub fn clear(&mut self) {
        self.debouncer.cancel();
        self.query.clear();
        if let Some(on_search) = &self.on_search {
            on_search(String::new());
        }
    }
}
