#[derive(Clone)]
pub enum Msg {
    /// Scan every cited text and fetch previews for files not yet cached.
    Prefetch,
    /// A citation chip was activated.
    OpenReference {
        file_id: String,
        page: Option<u32>,
    },
    /// Bytes for a file arrived; `requested` distinguishes a click-driven
    /// fetch from a background prefetch.
    PreviewFetched {
        file_id: String,
        bytes: Vec<u8>,
        content_type: String,
        requested: bool,
    },
    PreviewFailed {
        file_id: String,
        requested: bool,
    },
    ViewerLoaded,
    CloseViewer,
}
