//! Pulls a 1-based page number out of a citation's raw reference.
//!
//! The model phrases pages many ways: "Página 24", "Pag 9", "page 3",
//! "Pg. 10", "pág: 7", or just "doc_2, 15". A labeled token wins; failing
//! that, the first digit run after the first comma is used. The number is
//! passed through unvalidated: clamping to the document's real page count is
//! the viewer's problem.

use regex::Regex;

pub fn extract_page(raw_reference: &str) -> Option<u32> {
    // `p[áa]g` covers pag/pág/página/page (trailing letters are eaten by
    // `\p{L}*`); `pg` covers the terse form.
    let labeled = Regex::new(r"(?i)(?:p[áa]g|pg)\p{L}*\.?\s*:?\s*(\d+)").unwrap();
    if let Some(caps) = labeled.captures(raw_reference) {
        return caps[1].parse().ok();
    }

    // Terse references omit the word entirely ("Anexo.pdf, 12"): take the
    // first digit run after the first comma.
    let after_comma = &raw_reference[raw_reference.find(',')? + 1..];
    let digits = Regex::new(r"\d+").unwrap();
    digits.find(after_comma)?.as_str().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labeled_variants_all_extract() {
        for raw in [
            "doc_1, Página 24",
            "doc_1, Page 24",
            "doc_1, Pg 24",
            "doc_1, pág 24",
            "doc_1, pag. 24",
            "doc_1, Pagina: 24",
            "doc_1 PÁGINA 24",
        ] {
            assert_eq!(extract_page(raw), Some(24), "failed on {:?}", raw);
        }
    }

    #[test]
    fn bare_ordinal_has_no_page() {
        assert_eq!(extract_page("doc_1"), None);
    }

    #[test]
    fn falls_back_to_digits_after_comma() {
        assert_eq!(extract_page("Anexo.pdf, 12"), Some(12));
        assert_eq!(extract_page("doc_3, sección 2"), Some(2));
    }

    #[test]
    fn digits_before_the_comma_do_not_count_as_fallback() {
        // The `1` of doc_1 sits before the comma; nothing after it has digits.
        assert_eq!(extract_page("doc_1, sin página indicada"), None);
    }

    #[test]
    fn no_digits_at_all() {
        assert_eq!(extract_page("Anexo.pdf, portada"), None);
        assert_eq!(extract_page(""), None);
    }

    #[test]
    fn filename_with_page_like_word_uses_fallback() {
        assert_eq!(extract_page("paginas_maestro.pdf, 7"), Some(7));
    }
}
