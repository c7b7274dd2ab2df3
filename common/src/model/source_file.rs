use serde::{Deserialize, Serialize};

/// One uploaded document belonging to an RFP.
///
/// The backend returns these in a stable order (the `position` column of the
/// `files` table), and that order is the contract: a citation of the form
/// `doc_3` addresses the third entry of the list as served. The ordinal is
/// therefore never stored on the struct itself; it is always derived from
/// the element's position in the list at hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceFile {
    /// Stable identifier assigned by the backend on upload (UUID string).
    pub id: String,
    /// Original filename as uploaded. Absent for legacy rows that predate
    /// filename capture.
    pub name: Option<String>,
    /// MIME type recorded at upload time.
    pub content_type: Option<String>,
}
