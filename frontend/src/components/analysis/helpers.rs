//! Support functions for the analysis panel: collecting the cited text
//! fields of an analysis, rendering the markdown summary, and showing
//! toast notifications.

use common::model::analysis::RfpAnalysis;
use pulldown_cmark::{html, Parser};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::virtual_dom::AttrValue;

/// Every free-text field of the analysis that may embed citations, in
/// display order. The prefetch pass scans exactly these, so a file cited
/// anywhere in the visible panel is fetched before the user clicks it.
pub fn cited_texts(analysis: &RfpAnalysis) -> Vec<&str> {
    let mut texts: Vec<&str> = Vec::new();
    if let Some(duration) = analysis.project_duration.as_deref() {
        texts.push(duration);
    }
    texts.extend(analysis.risks.iter().map(|r| r.risk.as_str()));
    texts.extend(analysis.penalties.iter().map(|p| p.description.as_str()));
    texts.extend(analysis.slas.iter().map(|s| s.description.as_str()));
    texts.extend(analysis.opportunities.iter().map(String::as_str));
    texts.extend(analysis.recommendation_reasons.iter().map(String::as_str));
    texts
}

/// Renders the executive summary as HTML.
///
/// Normalizes line endings and strips invisible leading characters before
/// parsing, matching what the model tends to emit.
pub fn markdown_html(text: &str) -> AttrValue {
    let normalized = text
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .trim_start_matches(|c: char| c == '\u{feff}' || c == '\u{200b}')
        .to_string();

    let parser = Parser::new(&normalized);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    AttrValue::from(html_output)
}

/// Displays a temporary notification at the bottom of the screen and
/// removes it after a few seconds. Used for preview failures and other
/// non-blocking feedback (messages in Spanish).
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();
                style.set_property("font-family", "Arial, sans-serif").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(3000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}
