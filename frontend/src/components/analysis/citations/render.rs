//! Builds the renderable node sequence for a piece of cited analysis text.
//!
//! Composes the parser, resolver, and page extractor into a flat tree the
//! view walks: plain nodes render as-is, reference nodes become interactive
//! chips when their file resolved. Node keys derive from the byte span so
//! re-renders keep the virtual DOM stable.

use common::model::source_file::SourceFile;

use super::page::extract_page;
use super::parser::{self, Segment};
use super::resolver::resolve;

#[derive(Debug, Clone, PartialEq)]
pub enum RenderNode {
    Text {
        value: String,
        span_start: usize,
    },
    Reference {
        /// Trimmed raw reference, shown inside the chip.
        display: String,
        /// The matched label ("Fuente" / "Source"), cosmetic only.
        label: String,
        file: Option<SourceFile>,
        page: Option<u32>,
        span_start: usize,
    },
}

impl RenderNode {
    pub fn clickable(&self) -> bool {
        matches!(self, RenderNode::Reference { file: Some(_), .. })
    }

    /// Byte offset of the node in the source text; the view uses it as the
    /// virtual DOM key.
    pub fn span_start(&self) -> usize {
        match self {
            RenderNode::Text { span_start, .. } | RenderNode::Reference { span_start, .. } => {
                *span_start
            }
        }
    }
}

/// Parses `text` and resolves every citation against `files`, preserving
/// original order and dropping nothing. Recomputed on every render; all of
/// it is synchronous and allocation-light.
pub fn build(text: &str, files: &[SourceFile]) -> Vec<RenderNode> {
    let mut nodes = Vec::new();
    let mut cursor = 0usize;

    for segment in parser::parse(text) {
        match segment {
            Segment::Text { value } => {
                let span_start = cursor;
                cursor += value.len();
                nodes.push(RenderNode::Text { value, span_start });
            }
            Segment::Citation {
                label,
                raw_reference,
                span_start,
                span_end,
            } => {
                let file = resolve(&raw_reference, files).cloned();
                let page = extract_page(&raw_reference);
                nodes.push(RenderNode::Reference {
                    display: raw_reference.trim().to_string(),
                    label,
                    file,
                    page,
                    span_start,
                });
                cursor = span_end;
            }
        }
    }

    nodes
}

/// File ids referenced by resolvable citations in `text`, deduplicated,
/// in first-appearance order. This is what the prefetch pass scans.
pub fn referenced_file_ids(text: &str, files: &[SourceFile]) -> Vec<String> {
    let mut ids: Vec<String> = Vec::new();
    for node in build(text, files) {
        if let RenderNode::Reference {
            file: Some(file), ..
        } = node
        {
            if !ids.contains(&file.id) {
                ids.push(file.id);
            }
        }
    }
    ids
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

    #[test]
    fn end_to_end_scenario() {
        let files = vec![file("a", None), file("b", Some("Anexo.pdf"))];
        let nodes = build("El plazo es 12 meses [Fuente: doc_2, Página 5].", &files);

        assert_eq!(nodes.len(), 3);
        assert_eq!(
            nodes[0],
            RenderNode::Text {
                value: "El plazo es 12 meses ".to_string(),
                span_start: 0,
            }
        );
        match &nodes[1] {
            RenderNode::Reference {
                display,
                file,
                page,
                ..
            } => {
                assert_eq!(display, "doc_2, Página 5");
                assert_eq!(file.as_ref().unwrap().id, "b");
                assert_eq!(*page, Some(5));
            }
            other => panic!("expected reference, got {:?}", other),
        }
        assert!(nodes[1].clickable());
        assert!(matches!(&nodes[2], RenderNode::Text { value, .. } if value == "."));
    }

    #[test]
    fn unresolved_reference_is_inert_and_verbatim() {
        let files = vec![file("a", Some("Anexo.pdf"))];
        let nodes = build("Ver [Fuente: NoSuchFile.docx, Pag 1].", &files);
        match &nodes[1] {
            RenderNode::Reference { display, file, .. } => {
                assert_eq!(display, "NoSuchFile.docx, Pag 1");
                assert!(file.is_none());
            }
            other => panic!("expected reference, got {:?}", other),
        }
        assert!(!nodes[1].clickable());
    }

    #[test]
    fn keys_are_strictly_increasing() {
        let files = vec![file("a", None), file("b", None)];
        let nodes = build("x [Fuente: doc_1] y [Fuente: doc_2] z", &files);
        let keys: Vec<_> = nodes.iter().map(RenderNode::span_start).collect();
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn plain_text_is_a_single_node() {
        let nodes = build("sin citas aquí", &[]);
        assert_eq!(nodes.len(), 1);
        assert!(!nodes[0].clickable());
    }

    #[test]
    fn referenced_ids_dedupe_in_order() {
        let files = vec![file("a", None), file("b", None)];
        let ids = referenced_file_ids(
            "[Fuente: doc_2] [Fuente: doc_1] [Fuente: doc_2] [Fuente: doc_9]",
            &files,
        );
        assert_eq!(ids, vec!["b".to_string(), "a".to_string()]);
    }
}
