use iced::widget::image;
use std::collections::{HashMap, HashSet};

/// In-memory thumbnail store keyed by request URL. Plays the role the
/// browser's own image cache played for the original tool: a URL is fetched
/// at most once and every pane showing it shares the decoded handle.
pub struct ThumbnailCache {
    loaded: HashMap<String, image::Handle>,
    pending: HashSet<String>,
}

impl ThumbnailCache {
    pub(in crate::app) fn new() -> Self {
        ThumbnailCache {
            loaded: HashMap::new(),
            pending: HashSet::new(),
        }
    }

    pub(in crate::app) fn get(&self, url: &str) -> Option<&image::Handle> {
        self.loaded.get(url)
    }

    /// Whether the URL is already loaded or has a fetch in flight.
    pub(in crate::app) fn is_known(&self, url: &str) -> bool {
        self.loaded.contains_key(url) || self.pending.contains(url)
    }

    pub(in crate::app) fn mark_pending(&mut self, url: String) {
        self.pending.insert(url);
    }

    pub(in crate::app) fn insert(&mut self, url: String, handle: image::Handle) {
        self.pending.remove(&url);
        self.loaded.insert(url, handle);
    }

    /// Forget a failed fetch so a later transition can retry it.
    pub(in crate::app) fn forget(&mut self, url: &str) {
        self.pending.remove(url);
    }
}
