//! Application root: loads the RFP named in the `?rfp=` query parameter and
//! mounts the analysis panel with its ordered file list.

use common::model::rfp::RfpDetail;
use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::analysis::AnalysisPanel;

pub enum AppMsg {
    DetailLoaded(Box<RfpDetail>),
    LoadFailed(String),
}

pub struct App {
    detail: Option<RfpDetail>,
    error: Option<String>,
    loaded: bool,
}

impl Component for App {
    type Message = AppMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            detail: None,
            error: None,
            loaded: false,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AppMsg::DetailLoaded(detail) => {
                self.detail = Some(*detail);
                self.error = None;
            }
            AppMsg::LoadFailed(message) => {
                self.error = Some(message);
            }
        }
        true
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        if let Some(error) = &self.error {
            return html! {
                <div style="margin:32px auto;max-width:640px;color:#c62828;">
                    { format!("No se pudo cargar el RFP: {}", error) }
                </div>
            };
        }

        match &self.detail {
            Some(detail) => match &detail.analysis {
                Some(analysis) => html! {
                    <AnalysisPanel analysis={analysis.clone()} files={detail.files.clone()} />
                },
                None => html! {
                    <div style="margin:32px auto;max-width:640px;color:#666;">
                        { "El análisis de este RFP aún está en proceso." }
                    </div>
                },
            },
            None => html! {
                <div style="margin:32px auto;max-width:640px;color:#666;">
                    { "Cargando análisis..." }
                </div>
            },
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            let Some(rfp_id) = rfp_id_from_location() else {
                ctx.link().send_message(AppMsg::LoadFailed(
                    "falta el parámetro ?rfp= en la URL".to_string(),
                ));
                return;
            };

            let link = ctx.link().clone();
            spawn_local(async move {
                let response = Request::get(&format!("/api/rfps/{}", rfp_id)).send().await;
                match response {
                    Ok(resp) if resp.status() == 200 => match resp.json::<RfpDetail>().await {
                        Ok(detail) => link.send_message(AppMsg::DetailLoaded(Box::new(detail))),
                        Err(err) => link.send_message(AppMsg::LoadFailed(err.to_string())),
                    },
                    Ok(resp) => {
                        link.send_message(AppMsg::LoadFailed(format!("HTTP {}", resp.status())))
                    }
                    Err(err) => link.send_message(AppMsg::LoadFailed(err.to_string())),
                }
            });
        }
    }
}

/// Reads the RFP id from the page URL (`?rfp=<id>`).
fn rfp_id_from_location() -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    let query = search.strip_prefix('?').unwrap_or(&search);
    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == "rfp" && !value.is_empty()).then(|| value.to_string())
    })
}
