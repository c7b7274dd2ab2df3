//! Update function for the analysis panel, Elm-style: mutate state from a
//! `Msg`, return whether the view must re-render.
//!
//! All cache mutations happen here, on the event loop. A `Loading` entry is
//! written before its fetch is spawned, and object URLs are created inside
//! this function from delivered bytes. A fetch that outlives the panel
//! sends its message into a destroyed scope, so nothing is created and
//! nothing leaks.

use gloo_console::error;
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::helpers::{cited_texts, show_toast};
use super::messages::Msg;
use super::state::AnalysisPanel;
use crate::components::analysis::citations::render::referenced_file_ids;
use crate::components::analysis::preview::acquire;

pub fn update(panel: &mut AnalysisPanel, ctx: &Context<AnalysisPanel>, msg: Msg) -> bool {
    match msg {
        Msg::Prefetch => {
            let props = ctx.props();
            for text in cited_texts(&props.analysis) {
                for file_id in referenced_file_ids(text, &props.files) {
                    // `begin` refuses files already Loading or Ready, which
                    // keeps repeated prefetch passes from re-fetching.
                    if panel.cache.begin(&file_id) {
                        spawn_fetch(ctx.link().clone(), file_id, false);
                    }
                }
            }
            false
        }

        Msg::OpenReference { file_id, page } => {
            if let Some(url) = panel.cache.ready_url(&file_id) {
                panel.viewer_url = Some(url.to_string());
                panel.viewer_page = page;
                panel.viewer_loading = true;
                return true;
            }

            // Not cached yet: issue a fetch of our own (even if a prefetch
            // is still in flight) and open the viewer when it lands.
            panel.cache.begin(&file_id);
            panel.pending_open = Some((file_id.clone(), page));
            show_toast("Preparando la vista previa del documento...");
            spawn_fetch(ctx.link().clone(), file_id, true);
            false
        }

        Msg::PreviewFetched {
            file_id,
            bytes,
            content_type,
            requested,
        } => match acquire::object_url_for(&bytes, &content_type) {
            Ok(object_url) => {
                let viewer_url = object_url.clone();
                if let Some(displaced) = panel.cache.complete(&file_id, object_url, content_type) {
                    // A duplicate fetch won the race; keep one live handle.
                    acquire::revoke_object_url(&displaced);
                }
                match panel.pending_open.take() {
                    Some((pending_id, page)) if pending_id == file_id => {
                        panel.viewer_url = Some(viewer_url);
                        panel.viewer_page = page;
                        panel.viewer_loading = true;
                    }
                    other => panel.pending_open = other,
                }
                true
            }
            Err(err) => {
                error!(format!("vista previa de {}: {}", file_id, err));
                preview_failed(panel, &file_id, requested)
            }
        },

        Msg::PreviewFailed { file_id, requested } => preview_failed(panel, &file_id, requested),

        Msg::ViewerLoaded => {
            panel.viewer_loading = false;
            true
        }

        Msg::CloseViewer => {
            // The object URL stays in the cache; reopening costs nothing.
            panel.viewer_url = None;
            panel.viewer_page = None;
            panel.viewer_loading = false;
            true
        }
    }
}

/// Cache bookkeeping for a failed acquisition. Prefetch failures revert the
/// entry to absent so a later click retries silently; click failures are
/// marked and reported to the user.
fn preview_failed(panel: &mut AnalysisPanel, file_id: &str, requested: bool) -> bool {
    if requested {
        panel.cache.mark_failed(file_id);
        if panel
            .pending_open
            .as_ref()
            .is_some_and(|(pending_id, _)| pending_id == file_id)
        {
            panel.pending_open = None;
        }
        show_toast("No se puede previsualizar el documento en este momento.");
        true
    } else {
        panel.cache.reset(file_id);
        false
    }
}

fn spawn_fetch(link: Scope<AnalysisPanel>, file_id: String, requested: bool) {
    spawn_local(async move {
        match acquire::fetch_preview(&file_id).await {
            Ok((bytes, content_type)) => link.send_message(Msg::PreviewFetched {
                file_id,
                bytes,
                content_type,
                requested,
            }),
            Err(err) => {
                error!(format!("descarga de {} falló: {}", file_id, err));
                link.send_message(Msg::PreviewFailed { file_id, requested });
            }
        }
    });
}
