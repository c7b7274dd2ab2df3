//! Classifies a free-text source label for badge styling.

/// Where a datum came from, as far as the badge is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceOrigin {
    /// Backed by an RFP document.
    Document,
    /// Inferred by the model.
    Ai,
    Unknown,
}

/// Classifies the label alone. Document tokens win over AI tokens when a
/// label somehow carries both.
pub fn classify(source_label: Option<&str>) -> SourceOrigin {
    let Some(label) = source_label else {
        return SourceOrigin::Unknown;
    };
    let lower = label.to_lowercase();
    if lower.contains("rfp") || lower.contains("documento") {
        SourceOrigin::Document
    } else if lower.contains("ia") || lower.contains("ai") {
        SourceOrigin::Ai
    } else {
        SourceOrigin::Unknown
    }
}

/// Classifies a label in the presence of an optional reference document.
///
/// A populated reference is itself evidence the datum came from a source
/// document, so it upgrades an `Unknown` label (but never contradicts a
/// definite one).
pub fn classify_with_reference(
    source_label: Option<&str>,
    reference_document: Option<&str>,
) -> SourceOrigin {
    match classify(source_label) {
        SourceOrigin::Unknown if reference_document.is_some_and(|r| !r.trim().is_empty()) => {
            SourceOrigin::Document
        }
        origin => origin,
    }
}
