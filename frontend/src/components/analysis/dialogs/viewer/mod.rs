use crate::components::analysis::Msg::{CloseViewer, ViewerLoaded};
use crate::components::analysis::AnalysisPanel;
use yew::html::Scope;
use yew::prelude::*;

pub fn viewer_dialog(panel: &AnalysisPanel, link: &Scope<AnalysisPanel>) -> Html {
    let Some(url) = &panel.viewer_url else {
        return html! {};
    };

    // Browser PDF viewers honor the #page fragment; other formats simply
    // open at the start.
    let src = match panel.viewer_page {
        Some(page) => format!("{}#page={}", url, page),
        None => url.clone(),
    };

    let on_close = link.callback(|_: MouseEvent| CloseViewer);

    // Callback for when the iframe finishes loading -> hide the overlay
    let on_iframe_load = link.callback(|_: Event| ViewerLoaded);

    let iframe_style = if panel.viewer_loading {
        "width:100%;height:100%;border:none;background:#fff;border-radius:4px;visibility:hidden;"
    } else {
        "width:100%;height:100%;border:none;background:#fff;border-radius:4px;visibility:visible;"
    };

    html! {
        <div style="position:fixed;top:0;left:0;width:100vw;height:100vh;background:rgba(0,0,0,0.8);z-index:9999;display:flex;flex-direction:column;align-items:center;justify-content:center;">
            <button
                onclick={on_close}
                style="position:absolute;top:16px;right:24px;z-index:10000;padding:0.5rem 1rem;font-size:1.25rem;background:#fff;border:none;border-radius:4px;cursor:pointer;"
            >
                { "✕" }
            </button>

            <div style="position:relative;width:85vw;height:85vh;">
                <iframe
                    src={src}
                    style={iframe_style}
                    onload={on_iframe_load}
                />

                {
                    if panel.viewer_loading {
                        // White overlay covering the iframe until it loads
                        html! {
                            <div style="position:absolute;top:0;left:0;width:100%;height:100%;display:flex;align-items:center;justify-content:center;background:#fff;z-index:10001;">
                                <div style="background:transparent;padding:24px;border-radius:8px;display:flex;flex-direction:column;align-items:center;">
                                    <div class="spin" style="width:48px;height:48px;border:6px solid #ccc;border-top-color:#1976d2;border-radius:50%;animation:spin 1s linear infinite;"></div>
                                    <div style="margin-top:12px;color:#000;">{"Cargando documento..."}</div>
                                </div>
                                <style>{r#"
                                        @keyframes spin { from { transform: rotate(0deg); } to { transform: rotate(360deg); } }
                                    "#}</style>
                            </div>
                        }
                    } else {
                        html! { <></> }
                    }
                }
            </div>
        </div>
    }
}
