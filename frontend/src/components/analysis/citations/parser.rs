//! Splits analysis text into plain segments and inline citation segments.
//!
//! Citations look like `[Fuente: doc_2, Página 5]` or `[Source: Anexo.pdf,
//! Pg 10]`. Only the literal labels `Fuente` and `Source` are recognized,
//! case-sensitively; anything else between brackets stays plain text. The
//! bracket-excluding character class keeps an unterminated `[Fuente:` from
//! swallowing the rest of the line.

use regex::Regex;

/// One slice of the input text, in original order.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Literal text between citations (or the whole input when no citation
    /// matched).
    Text { value: String },
    /// A recognized citation. `raw_reference` is the verbatim content after
    /// the label's colon, untrimmed, so the original character stream can be
    /// reconstructed. `span_start`/`span_end` are byte offsets of the whole
    /// bracketed match in the input.
    Citation {
        label: String,
        raw_reference: String,
        span_start: usize,
        span_end: usize,
    },
}

/// Segments `text` into plain and citation parts, losing no characters.
///
/// Zero matches yield a single text segment equal to the whole input, which
/// callers treat as "nothing to link", never as an error.
pub fn parse(text: &str) -> Vec<Segment> {
    let re = Regex::new(r"\[(Fuente|Source):([^\]]*)\]").unwrap();

    let mut segments = Vec::new();
    let mut cursor = 0;

    for caps in re.captures_iter(text) {
        let mat = caps.get(0).unwrap();
        if mat.start() > cursor {
            segments.push(Segment::Text {
                value: text[cursor..mat.start()].to_string(),
            });
        }
        segments.push(Segment::Citation {
            label: caps[1].to_string(),
            raw_reference: caps[2].to_string(),
            span_start: mat.start(),
            span_end: mat.end(),
        });
        cursor = mat.end();
    }

    if cursor < text.len() || segments.is_empty() {
        segments.push(Segment::Text {
            value: text[cursor..].to_string(),
        });
    }

    segments
}
