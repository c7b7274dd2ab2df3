use crate::model::analysis::RfpAnalysis;
use crate::model::source_file::SourceFile;
use serde::{Deserialize, Serialize};

/// Full payload of `GET /api/rfps/{rfp_id}`.
///
/// `files` is ordered by upload position; ordinal citations (`doc_N`)
/// resolve against this exact order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RfpDetail {
    pub id: String,
    pub title: Option<String>,
    pub status: Option<String>,
    pub analysis: Option<RfpAnalysis>,
    #[serde(default)]
    pub files: Vec<SourceFile>,
}
