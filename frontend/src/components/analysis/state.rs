//! Runtime state of the analysis panel.
//!
//! The panel owns the preview cache for its lifetime: previews are fetched
//! into it, handed to the viewer from it, and revoked from `destroy` when
//! the panel unmounts. No other view shares the cache, so every mutation
//! happens on the event loop through `update`.

use crate::components::analysis::preview::cache::PreviewCache;

pub struct AnalysisPanel {
    /// Object-URL cache, keyed by file id. Exclusively owned.
    pub cache: PreviewCache,

    /// URL currently shown in the viewer iframe (a cached object URL).
    pub viewer_url: Option<String>,

    /// Page the viewer should jump to, appended as a `#page=N` fragment.
    pub viewer_page: Option<u32>,

    /// True between opening the viewer and the iframe's load event.
    pub viewer_loading: bool,

    /// A click that arrived before its file was cached: `(file_id, page)`.
    /// The viewer opens as soon as that file's fetch completes.
    pub pending_open: Option<(String, Option<u32>)>,
}

impl AnalysisPanel {
    pub fn new() -> Self {
        Self {
            cache: PreviewCache::new(),
            viewer_url: None,
            viewer_page: None,
            viewer_loading: false,
            pending_open: None,
        }
    }
}
