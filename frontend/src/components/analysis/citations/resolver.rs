//! Resolves a citation's raw reference to a concrete file of the RFP.
//!
//! Strategies are tried in order, first match wins:
//! 1. ordinal (`doc_3` / `doc3`) against the file list position, 1-based;
//! 2. exact filename equality, case-insensitive;
//! 3. containment in either direction (truncated or extended names);
//! 4. equality with the extension stripped from both sides.
//!
//! The ordinal path is authoritative for model-generated citations, which
//! always use the `doc_N` scheme; the name strategies only cover citations
//! that quote a filename directly. Nothing here fails: an unresolvable
//! reference is simply `None` and renders as an inert tag.

use common::model::source_file::SourceFile;
use regex::Regex;

/// Returns the best-matching file for `raw_reference`, or `None`.
pub fn resolve<'a>(raw_reference: &str, files: &'a [SourceFile]) -> Option<&'a SourceFile> {
    // Citations usually read "doc_2, Página 5": the document part is
    // whatever precedes the first comma.
    let candidate = raw_reference
        .split(',')
        .next()
        .unwrap_or(raw_reference)
        .trim();

    if let Some(index) = ordinal_index(candidate) {
        return files.get(index);
    }

    if candidate.is_empty() {
        // An empty needle would containment-match every filename.
        return None;
    }
    let candidate_lower = candidate.to_lowercase();

    // Exact filename, extension retained.
    if let Some(file) = files.iter().find(|f| {
        f.name
            .as_deref()
            .is_some_and(|n| n.to_lowercase() == candidate_lower)
    }) {
        return Some(file);
    }

    // Containment either way: the model frequently abbreviates or pads
    // filenames when quoting them.
    if let Some(file) = files.iter().find(|f| {
        f.name.as_deref().is_some_and(|n| {
            let name_lower = n.to_lowercase();
            name_lower.contains(&candidate_lower) || candidate_lower.contains(&name_lower)
        })
    }) {
        return Some(file);
    }

    // Last resort: compare with the trailing `.ext` stripped from both.
    let candidate_stem = strip_extension(&candidate_lower);
    files.iter().find(|f| {
        f.name
            .as_deref()
            .is_some_and(|n| strip_extension(&n.to_lowercase()) == candidate_stem)
    })
}

/// Parses `doc_<N>` / `doc<N>` (case-insensitive) into a 0-based list index.
/// `doc_0` and anything non-numeric return `None`.
fn ordinal_index(candidate: &str) -> Option<usize> {
    let re = Regex::new(r"(?i)^doc_?(\d+)$").unwrap();
    let caps = re.captures(candidate)?;
    let n: usize = caps[1].parse().ok()?;
    n.checked_sub(1)
}

/// Drops a trailing `.<ext>`, leaving hidden-file style names (".env") and
/// extensionless names untouched.
fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) if idx > 0 => &name[..idx],
        _ => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(id: &str, name: Option<&str>) -> SourceFile {
        SourceFile {
            id: id.to_string(),
            name: name.map(str::to_string),
            content_type: None,
        }
    }

    fn sample_files() -> Vec<SourceFile> {
        vec![
            file("a", None),
            file("b", Some("Anexo.pdf")),
            file("c", Some("Bases_Tecnicas_Licitacion.docx")),
        ]
    }

    #[test]
    fn ordinal_round_trip() {
        let files = sample_files();
        for k in 1..=files.len() {
            let resolved = resolve(&format!("doc_{}", k), &files).unwrap();
            assert_eq!(resolved.id, files[k - 1].id);
        }
    }

    #[test]
    fn ordinal_without_underscore_and_with_page_suffix() {
        let files = sample_files();
        assert_eq!(resolve("doc2, Página 5", &files).unwrap().id, "b");
        assert_eq!(resolve(" Doc_3 , Pg 1", &files).unwrap().id, "c");
    }

    #[test]
    fn out_of_range_ordinals_are_none() {
        let files = sample_files();
        assert!(resolve("doc_0", &files).is_none());
        assert!(resolve(&format!("doc_{}", files.len() + 1), &files).is_none());
    }

    #[test]
    fn exact_match_is_case_insensitive() {
        let files = vec![file("x", Some("Anexo.pdf"))];
        assert_eq!(resolve("anexo.pdf, Pagina 3", &files).unwrap().id, "x");
    }

    #[test]
    fn containment_matches_both_directions() {
        let files = sample_files();
        // Truncated quote of the real name.
        assert_eq!(resolve("Bases_Tecnicas", &files).unwrap().id, "c");
        // Quote longer than the real name.
        assert_eq!(resolve("el archivo Anexo.pdf adjunto", &files).unwrap().id, "b");
    }

    #[test]
    fn extension_stripped_match() {
        let files = vec![file("x", Some("Propuesta.docx"))];
        assert_eq!(resolve("Propuesta.pdf", &files).unwrap().id, "x");
    }

    #[test]
    fn no_match_returns_none() {
        let files = sample_files();
        assert!(resolve("NoSuchFile.docx, Pag 1", &files).is_none());
    }

    #[test]
    fn empty_candidate_never_matches() {
        let files = sample_files();
        assert!(resolve("", &files).is_none());
        assert!(resolve(", Página 4", &files).is_none());
    }

    #[test]
    fn nameless_files_resolve_only_by_ordinal() {
        let files = vec![file("a", None)];
        assert_eq!(resolve("doc_1", &files).unwrap().id, "a");
        assert!(resolve("a", &files).is_none());
    }
}
