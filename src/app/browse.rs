use crate::app::search_bar::SearchBar;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver};

/// Line typed to press the clear button.
pub const CLEAR_COMMAND: &str = ":clear";

/// A search bar fed line by line, with its debounced notifications queued
/// for the caller instead of handled in a callback.
pub struct SearchSession {
    bar: SearchBar,
    queries: UnboundedReceiver<String>,
}

impl SearchSession {
    pub fn new(debounce: Duration, placeholder: &str) -> Self {
        let (tx, queries) = mpsc::unbounded_channel();
        let bar = SearchBar::new(debounce)
            .with_placeholder(placeholder)
            .with_on_search(move |value| {
                let _ = tx.send(value);
            });
        Self { bar, queries }
    }

    pub fn search_bar(&self) -> &SearchBar {
        &self.bar
    }

    /// One input line: the new box content, or `:clear`.
    pub fn input(&mut self, line: String) {
        if line.trim() == CLEAR_COMMAND {
            self.bar.clear();
        } else {
            self.bar.input(line);
        }
    }

    /// Next debounced query. Cancel safe, usable in `select!`.
    pub async fn next_query(&mut self) -> Option<String> {
        self.queries.recv().await
    }

    /// Ends the session. Returns, in order, every query not handed out yet:
    /// those already queued, then the one whose timer is still running.
    pub async fn finish(mut self) -> Vec<String> {
        let mut remaining = Vec::new();
        while let Ok(query) = self.queries.try_recv() {
            remaining.push(query);
        }

        // At most one timer is alive and the queue is empty, so the next
        // message is the one it sends.
        if self.bar.is_pending() {
            if let Some(query) = self.queries.recv().await {
                remaining.push(query);
            }
        }

        tracing::debug!("Search session closed with {} late queries", remaining.len());
        remaining
    }
}
