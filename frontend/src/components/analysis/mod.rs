//! Analysis panel: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, and the
//! citation/preview machinery.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `AnalysisPanelProps`, `AnalysisPanel`).
//! - Provide the `Component` implementation that delegates to
//!   `update::update` and `view::view`.
//! - Kick off the preview prefetch on first render and whenever the props
//!   change, and release every cached object URL when the panel unmounts.

use yew::prelude::*;

pub mod citations;
mod dialogs;
mod helpers;
mod messages;
pub mod preview;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::AnalysisPanelProps;
pub use state::AnalysisPanel;

impl Component for AnalysisPanel {
    type Message = Msg;
    type Properties = AnalysisPanelProps;

    fn create(_ctx: &Context<Self>) -> Self {
        AnalysisPanel::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            ctx.link().send_message(Msg::Prefetch);
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        // New text or file list: prefetch whatever is newly cited. Files
        // already cached are skipped, so this is safe on every change.
        ctx.link().send_message(Msg::Prefetch);
        true
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        // Object URLs are never garbage-collected; this is the single
        // teardown point that keeps them from outliving the panel.
        self.cache.release_all();
    }
}
