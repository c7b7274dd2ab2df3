//! Properties of the analysis panel.

use common::model::analysis::RfpAnalysis;
use common::model::source_file::SourceFile;
use yew::prelude::*;

/// Data the RFP detail view hands to the panel.
///
/// `files` must arrive in the same order the analysis was produced against:
/// ordinal citations (`doc_N`) resolve purely by position in this list.
#[derive(Properties, PartialEq, Clone)]
pub struct AnalysisPanelProps {
    pub analysis: RfpAnalysis,
    #[prop_or_default]
    pub files: Vec<SourceFile>,
}
