use iced::widget::image::Handle;
use std::collections::{HashMap, VecDeque};

use crate::error::ImageError;

/// Download state of one remote image
#[derive(Debug, Clone)]
pub enum ImageState {
    Loading,
    Ready(Handle),
    Failed,
}

/// In-memory image handles, keyed by source URL
///
/// Each URL is requested at most once while it is tracked; failures are
/// remembered so a broken link isn't retried on every render.
#[derive(Debug, Default)]
pub struct ImageCache {
    entries: HashMap<String, ImageState>,
}

impl ImageCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `url` as loading
    ///
    /// Returns `true` if the caller should start the download.
    pub fn begin(&mut self, url: &str) -> bool {
        if self.entries.contains_key(url) {
            return false;
        }
        self.entries.insert(url.to_string(), ImageState::Loading);
        true
    }

    /// Record the outcome of a download started with `begin`
    ///
    /// Results for URLs that are no longer tracked are dropped.
    pub fn finish(&mut self, url: String, result: Result<Handle, ImageError>) {
        let Some(slot) = self.entries.get_mut(&url) else {
            tracing::debug!("Discarding image for untracked {url}");
            return;
        };

        *slot = match result {
            Ok(handle) => ImageState::Ready(handle),
            Err(e) => {
                tracing::warn!("⚠️  Image unavailable ({url}): {e}");
                ImageState::Failed
            }
        };
    }

    /// Stop tracking a download that was never started
    pub fn forget(&mut self, url: &str) {
        if matches!(self.entries.get(url), Some(ImageState::Loading)) {
            self.entries.remove(url);
        }
    }

    /// Drop every handle
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn get(&self, url: &str) -> Option<&ImageState> {
        self.entries.get(url)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Image downloads waiting for a free slot
///
/// At most `limit` downloads run at once. The rest wait in order and are
/// released as running ones complete.
#[derive(Debug)]
pub struct DownloadQueue {
    pending: VecDeque<String>,
    in_flight: usize,
    limit: usize,
}

impl DownloadQueue {
    pub fn new(limit: usize) -> Self {
        Self {
            pending: VecDeque::new(),
            in_flight: 0,
            limit: limit.max(1),
        }
    }

    pub fn push(&mut self, url: String) {
        self.pending.push_back(url);
    }

    /// Remove every waiting URL, returning them
    ///
    /// Downloads already running are unaffected.
    pub fn clear_pending(&mut self) -> Vec<String> {
        self.pending.drain(..).collect()
    }

    /// Take as many waiting URLs as there are free slots
    pub fn start_next(&mut self) -> Vec<String> {
        let free = self.limit.saturating_sub(self.in_flight);
        let batch: Vec<String> = self
            .pending
            .drain(..free.min(self.pending.len()))
            .collect();
        self.in_flight += batch.len();
        batch
    }

    /// A running download finished, freeing its slot
    pub fn complete(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pixel() -> Handle {
        Handle::from_rgba(1, 1, vec![0u8; 4])
    }

    #[test]
    fn test_begin_only_once_per_url() {
        let mut cache = ImageCache::new();

        assert!(cache.begin("https://example.com/a.jpg"));
        assert!(!cache.begin("https://example.com/a.jpg"));
        assert!(cache.begin("https://example.com/b.jpg"));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_finish_records_result() {
        let mut cache = ImageCache::new();
        cache.begin("a");
        cache.begin("b");

        cache.finish("a".to_string(), Ok(pixel()));
        cache.finish("b".to_string(), Err(ImageError::Decode("bad".to_string())));

        assert!(matches!(cache.get("a"), Some(ImageState::Ready(_))));
        assert!(matches!(cache.get("b"), Some(ImageState::Failed)));
        assert!(!cache.begin("b"));
    }

    #[test]
    fn test_finish_ignores_untracked_url() {
        let mut cache = ImageCache::new();
        cache.begin("a");
        cache.clear();

        cache.finish("a".to_string(), Ok(pixel()));

        assert!(cache.get("a").is_none());
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn test_forget_only_drops_loading_entries() {
        let mut cache = ImageCache::new();
        cache.begin("waiting");
        cache.begin("done");
        cache.finish("done".to_string(), Ok(pixel()));

        cache.forget("waiting");
        cache.forget("done");

        assert!(cache.get("waiting").is_none());
        assert!(matches!(cache.get("done"), Some(ImageState::Ready(_))));
        assert!(cache.begin("waiting"));
    }

    #[test]
    fn test_queue_respects_limit() {
        let mut queue = DownloadQueue::new(2);
        for url in ["a", "b", "c", "d"] {
            queue.push(url.to_string());
        }

        assert_eq!(queue.start_next(), vec!["a", "b"]);
        assert!(queue.start_next().is_empty());
        assert_eq!((queue.in_flight(), queue.pending()), (2, 2));

        queue.complete();
        assert_eq!(queue.start_next(), vec!["c"]);
        assert_eq!((queue.in_flight(), queue.pending()), (2, 1));
    }

    #[test]
    fn test_queue_clear_pending_keeps_running_downloads() {
        let mut queue = DownloadQueue::new(1);
        queue.push("a".to_string());
        queue.push("b".to_string());
        queue.start_next();

        assert_eq!(queue.clear_pending(), vec!["b"]);
        assert_eq!((queue.in_flight(), queue.pending()), (1, 0));
    }

    #[test]
    fn test_queue_limit_is_at_least_one() {
        let mut queue = DownloadQueue::new(0);
        queue.push("a".to_string());

        assert_eq!(queue.start_next(), vec!["a"]);
    }
}
