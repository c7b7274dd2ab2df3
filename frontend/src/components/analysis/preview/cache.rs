//! Per-file preview cache backing the citation chips.
//!
//! One entry per file id, following `Absent -> Loading -> {Ready | Failed}`.
//! The cache is plain data owned by the component state and mutated only
//! from `update`, so a `Loading` entry is always visible before the fetch it
//! announces is spawned. It never revokes URLs behind the owner's back:
//! `release_all` is the teardown hook, and `complete` hands back any URL it
//! displaced so the caller can revoke it.

use std::collections::HashMap;

use super::acquire::revoke_object_url;

#[derive(Debug, Clone, PartialEq)]
pub enum PreviewState {
    /// An acquisition is in flight.
    Loading,
    /// Bytes were fetched and wrapped in an object URL.
    Ready {
        object_url: String,
        content_type: String,
    },
    /// The last explicit request failed. Not retried automatically; the next
    /// request re-attempts.
    Failed,
}

#[derive(Debug, Default)]
pub struct PreviewCache {
    entries: HashMap<String, PreviewState>,
}

impl PreviewCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, file_id: &str) -> Option<&PreviewState> {
        self.entries.get(file_id)
    }

    /// The cached object URL, if the entry is `Ready`.
    pub fn ready_url(&self, file_id: &str) -> Option<&str> {
        match self.entries.get(file_id) {
            Some(PreviewState::Ready { object_url, .. }) => Some(object_url),
            _ => None,
        }
    }

    /// Whether an explicit request for `file_id` must hit the network.
    /// `Absent` and `Failed` both qualify; `Loading` does not block a caller
    /// that wants its own fetch (there is no in-flight deduplication).
    pub fn needs_fetch(&self, file_id: &str) -> bool {
        !matches!(
            self.entries.get(file_id),
            Some(PreviewState::Loading) | Some(PreviewState::Ready { .. })
        )
    }

    /// Marks `file_id` as `Loading` and reports whether the caller should
    /// actually issue a fetch. Returns `false` for entries already `Loading`
    /// or `Ready`, which is what makes repeated prefetch passes idempotent.
    pub fn begin(&mut self, file_id: &str) -> bool {
        if !self.needs_fetch(file_id) {
            return false;
        }
        self.entries
            .insert(file_id.to_string(), PreviewState::Loading);
        true
    }

    /// Stores a finished acquisition. Returns the object URL of any entry it
    /// displaced (a duplicate fetch landed first); the caller must revoke it
    /// so exactly one live handle per file remains.
    pub fn complete(
        &mut self,
        file_id: &str,
        object_url: String,
        content_type: String,
    ) -> Option<String> {
        let previous = self.entries.insert(
            file_id.to_string(),
            PreviewState::Ready {
                object_url,
                content_type,
            },
        );
        match previous {
            Some(PreviewState::Ready { object_url, .. }) => Some(object_url),
            _ => None,
        }
    }

    /// Drops the entry entirely (back to `Absent`). Used when a best-effort
    /// prefetch fails: a later explicit request should retry silently.
    pub fn reset(&mut self, file_id: &str) {
        self.entries.remove(file_id);
    }

    /// Marks a click-path failure so the UI can show a retry-eligible state.
    pub fn mark_failed(&mut self, file_id: &str) {
        self.entries
            .insert(file_id.to_string(), PreviewState::Failed);
    }

    /// Empties the cache and returns every live object URL exactly once.
    pub fn drain(&mut self) -> Vec<String> {
        self.entries
            .drain()
            .filter_map(|(_, state)| match state {
                PreviewState::Ready { object_url, .. } => Some(object_url),
                _ => None,
            })
            .collect()
    }

    /// Teardown: revokes every live object URL and clears the cache. Must
    /// run when the owning view unmounts, or the handles outlive it for the
    /// rest of the session.
    pub fn release_all(&mut self) {
        for url in self.drain() {
            revoke_object_url(&url);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_is_idempotent_for_loading_and_ready() {
        let mut cache = PreviewCache::new();
        assert!(cache.begin("a"));
        // Second prefetch pass while the first is in flight: no new fetch.
        assert!(!cache.begin("a"));

        let displaced = cache.complete("a", "blob:1".to_string(), "application/pdf".to_string());
        assert!(displaced.is_none());
        // Prefetch over a Ready entry issues nothing either.
        assert!(!cache.begin("a"));
        assert_eq!(cache.ready_url("a"), Some("blob:1"));
    }

    #[test]
    fn prefetch_failure_reverts_to_absent() {
        let mut cache = PreviewCache::new();
        cache.begin("a");
        cache.reset("a");
        assert!(cache.state("a").is_none());
        assert!(cache.needs_fetch("a"));
    }

    #[test]
    fn click_failure_is_marked_but_retryable() {
        let mut cache = PreviewCache::new();
        cache.begin("a");
        cache.mark_failed("a");
        assert_eq!(cache.state("a"), Some(&PreviewState::Failed));
        assert!(cache.needs_fetch("a"));
        assert!(cache.begin("a"));
    }

    #[test]
    fn duplicate_completion_surfaces_displaced_url() {
        let mut cache = PreviewCache::new();
        cache.begin("a");
        cache.complete("a", "blob:old".to_string(), "application/pdf".to_string());
        let displaced = cache.complete("a", "blob:new".to_string(), "application/pdf".to_string());
        assert_eq!(displaced.as_deref(), Some("blob:old"));
        assert_eq!(cache.ready_url("a"), Some("blob:new"));
    }

    #[test]
    fn drain_returns_each_url_exactly_once_and_empties() {
        let mut cache = PreviewCache::new();
        cache.begin("a");
        cache.complete("a", "blob:a".to_string(), "application/pdf".to_string());
        cache.begin("b");
        cache.complete("b", "blob:b".to_string(), "image/png".to_string());
        cache.begin("c"); // still loading, owns no URL

        let mut urls = cache.drain();
        urls.sort();
        assert_eq!(urls, vec!["blob:a".to_string(), "blob:b".to_string()]);
        assert!(cache.is_empty());
        assert!(cache.drain().is_empty());
    }
}
