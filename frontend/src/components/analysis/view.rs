//! View rendering for the analysis panel.
//!
//! Cited free-text fields go through the citation render tree: plain nodes
//! render verbatim, resolved references become clickable chips, unresolved
//! ones stay as inert tags with the original bracketed text. The executive
//! summary renders as markdown, and the viewer dialog overlays everything
//! while a preview is open.

use common::model::analysis::{Budget, CertificationRequirement, RfpAnalysis};
use common::model::source_file::SourceFile;
use num_format::{Locale, ToFormattedString};
use yew::html::Scope;
use yew::prelude::*;

use super::helpers::markdown_html;
use super::messages::Msg;
use super::state::AnalysisPanel;
use crate::components::analysis::citations::origin::{classify_with_reference, SourceOrigin};
use crate::components::analysis::citations::render::{build, RenderNode};
use crate::components::analysis::dialogs::viewer::viewer_dialog;

pub fn view(panel: &AnalysisPanel, ctx: &Context<AnalysisPanel>) -> Html {
    let link = ctx.link();
    let analysis = &ctx.props().analysis;
    let files = &ctx.props().files;

    html! {
        <div class="analysis-panel" style="max-width:960px;margin:0 auto;padding:16px;">
            { header(analysis) }
            { summary_section(analysis) }
            { duration_section(analysis, files, link) }
            { budget_section(analysis) }
            { risks_section(analysis, files, link) }
            { penalties_section(analysis, files, link) }
            { slas_section(analysis, files, link) }
            { cited_list_section("Oportunidades", &analysis.opportunities, files, link) }
            { cited_list_section("Razones de la recomendación", &analysis.recommendation_reasons, files, link) }
            { certifications_section(analysis) }
            { viewer_dialog(panel, link) }
        </div>
    }
}

/// Renders one cited text: the node tree becomes spans and chips, keyed by
/// span offset so re-renders keep the DOM stable.
fn evidence_text(text: &str, files: &[SourceFile], link: &Scope<AnalysisPanel>) -> Html {
    let nodes = build(text, files)
        .into_iter()
        .map(|node| match node {
            RenderNode::Text { value, span_start } => {
                html! { <span key={span_start.to_string()}>{ value }</span> }
            }
            RenderNode::Reference {
                display,
                label,
                file,
                page,
                span_start,
            } => match file {
                Some(file) => {
                    let file_id = file.id.clone();
                    let onclick = link.callback(move |_: MouseEvent| Msg::OpenReference {
                        file_id: file_id.clone(),
                        page,
                    });
                    let title = match &file.name {
                        Some(name) => format!("Abrir {}", name),
                        None => "Abrir documento citado".to_string(),
                    };
                    html! {
                        <button
                            key={span_start.to_string()}
                            class="cita-chip"
                            title={title}
                            onclick={onclick}
                            style="display:inline;border:none;background:#e3f2fd;color:#1565c0;border-radius:10px;padding:0 6px;font-size:0.85em;cursor:pointer;"
                        >
                            { format!("[{}: {}]", label, display) }
                        </button>
                    }
                }
                None => html! {
                    <span
                        key={span_start.to_string()}
                        class="cita-chip inerte"
                        title="Documento no encontrado en este RFP"
                        style="display:inline;background:#eeeeee;color:#757575;border-radius:10px;padding:0 6px;font-size:0.85em;"
                    >
                        { format!("[{}: {}]", label, display) }
                    </span>
                },
            },
        })
        .collect::<Html>();

    html! { <span class="evidence-text">{ nodes }</span> }
}

fn header(analysis: &RfpAnalysis) -> Html {
    let subtitle = [
        analysis.client_name.as_deref(),
        analysis.country.as_deref(),
        analysis.category.as_deref(),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(" · ");

    html! {
        <div class="analysis-header" style="margin-bottom:16px;">
            <h1 style="margin:0 0 4px 0;">
                { analysis.title.clone().unwrap_or_else(|| "RFP sin título".to_string()) }
            </h1>
            { if !subtitle.is_empty() { html! { <div style="color:#666;">{ subtitle }</div> } } else { html! {} } }
            { recommendation_line(analysis) }
        </div>
    }
}

fn recommendation_line(analysis: &RfpAnalysis) -> Html {
    let Some(recommendation) = &analysis.recommendation else {
        return html! {};
    };
    let confidence = analysis
        .confidence_score
        .map(|score| format!(" (confianza {:.0}%)", score * 100.0))
        .unwrap_or_default();
    let color = if recommendation.to_uppercase().starts_with("GO") {
        "#2e7d32"
    } else {
        "#c62828"
    };
    html! {
        <div style={format!("margin-top:8px;font-weight:bold;color:{};", color)}>
            { format!("{}{}", recommendation, confidence) }
        </div>
    }
}

fn summary_section(analysis: &RfpAnalysis) -> Html {
    let Some(summary) = &analysis.summary else {
        return html! {};
    };
    html! {
        <div class="analysis-section">
            <h2>{ "Resumen ejecutivo" }</h2>
            <div class="markdown-summary">{ Html::from_html_unchecked(markdown_html(summary)) }</div>
        </div>
    }
}

fn duration_section(analysis: &RfpAnalysis, files: &[SourceFile], link: &Scope<AnalysisPanel>) -> Html {
    let Some(duration) = &analysis.project_duration else {
        return html! {};
    };
    html! {
        <div class="analysis-section">
            <h2>{ "Duración estimada" }</h2>
            <p>{ evidence_text(duration, files, link) }</p>
        </div>
    }
}

fn budget_section(analysis: &RfpAnalysis) -> Html {
    let Some(budget) = &analysis.budget else {
        return html! {};
    };
    html! {
        <div class="analysis-section">
            <h2>{ "Presupuesto" }</h2>
            <p>{ budget_line(budget) }</p>
            {
                match &budget.notes {
                    Some(notes) => html! { <p style="color:#666;">{ notes.clone() }</p> },
                    None => html! {},
                }
            }
        </div>
    }
}

fn budget_line(budget: &Budget) -> String {
    let currency = budget.currency.as_deref().unwrap_or("USD");
    match (budget.amount_min, budget.amount_max) {
        (Some(min), Some(max)) => format!(
            "{} – {} {}",
            min.to_formatted_string(&Locale::es),
            max.to_formatted_string(&Locale::es),
            currency
        ),
        (Some(min), None) => format!("desde {} {}", min.to_formatted_string(&Locale::es), currency),
        (None, Some(max)) => format!("hasta {} {}", max.to_formatted_string(&Locale::es), currency),
        (None, None) => "Sin monto declarado".to_string(),
    }
}

fn risks_section(analysis: &RfpAnalysis, files: &[SourceFile], link: &Scope<AnalysisPanel>) -> Html {
    if analysis.risks.is_empty() {
        return html! {};
    }
    html! {
        <div class="analysis-section">
            <h2>{ "Riesgos" }</h2>
            <ul>
                { for analysis.risks.iter().map(|risk| html! {
                    <li style="margin-bottom:6px;">
                        { severity_chip(risk.severity.as_deref()) }
                        { evidence_text(&risk.risk, files, link) }
                        {
                            match &risk.mitigation {
                                Some(mitigation) => html! {
                                    <div style="color:#666;font-size:0.9em;">
                                        { format!("Mitigación: {}", mitigation) }
                                    </div>
                                },
                                None => html! {},
                            }
                        }
                    </li>
                }) }
            </ul>
        </div>
    }
}

fn severity_chip(severity: Option<&str>) -> Html {
    let (color, text) = match severity.map(str::to_lowercase).as_deref() {
        Some("high") => ("#d32f2f", "Alta"),
        Some("medium") => ("#f57c00", "Media"),
        Some("low") => ("#388e3c", "Baja"),
        _ => ("#9e9e9e", "N/D"),
    };
    html! {
        <span style={format!(
            "background:{};color:#fff;border-radius:10px;padding:0 8px;margin-right:6px;font-size:0.8em;",
            color
        )}>
            { text }
        </span>
    }
}

fn penalties_section(analysis: &RfpAnalysis, files: &[SourceFile], link: &Scope<AnalysisPanel>) -> Html {
    if analysis.penalties.is_empty() {
        return html! {};
    }
    html! {
        <div class="analysis-section">
            <h2>{ "Multas" }</h2>
            <ul>
                { for analysis.penalties.iter().map(|penalty| html! {
                    <li style="margin-bottom:6px;">
                        { evidence_text(&penalty.description, files, link) }
                        {
                            match &penalty.amount {
                                Some(amount) => html! { <span style="margin-left:6px;color:#666;">{ format!("({})", amount) }</span> },
                                None => html! {},
                            }
                        }
                        { if penalty.is_high { warning_chip("Monto alto") } else { html! {} } }
                    </li>
                }) }
            </ul>
        </div>
    }
}

fn slas_section(analysis: &RfpAnalysis, files: &[SourceFile], link: &Scope<AnalysisPanel>) -> Html {
    if analysis.slas.is_empty() {
        return html! {};
    }
    html! {
        <div class="analysis-section">
            <h2>{ "SLAs" }</h2>
            <ul>
                { for analysis.slas.iter().map(|sla| html! {
                    <li style="margin-bottom:6px;">
                        { evidence_text(&sla.description, files, link) }
                        {
                            match &sla.metric {
                                Some(metric) => html! { <span style="margin-left:6px;color:#666;">{ format!("({})", metric) }</span> },
                                None => html! {},
                            }
                        }
                        { if sla.is_aggressive { warning_chip("Agresivo") } else { html! {} } }
                    </li>
                }) }
            </ul>
        </div>
    }
}

fn warning_chip(text: &'static str) -> Html {
    html! {
        <span style="background:#fff3e0;color:#e65100;border-radius:10px;padding:0 8px;margin-left:6px;font-size:0.8em;">
            { text }
        </span>
    }
}

fn cited_list_section(
    title: &'static str,
    items: &[String],
    files: &[SourceFile],
    link: &Scope<AnalysisPanel>,
) -> Html {
    if items.is_empty() {
        return html! {};
    }
    html! {
        <div class="analysis-section">
            <h2>{ title }</h2>
            <ul>
                { for items.iter().map(|item| html! {
                    <li style="margin-bottom:6px;">{ evidence_text(item, files, link) }</li>
                }) }
            </ul>
        </div>
    }
}

fn certifications_section(analysis: &RfpAnalysis) -> Html {
    if analysis.certifications.is_empty() {
        return html! {};
    }
    html! {
        <div class="analysis-section">
            <h2>{ "Certificaciones requeridas" }</h2>
            <ul>
                { for analysis.certifications.iter().map(|cert| html! {
                    <li style="margin-bottom:6px;">
                        { cert.name.clone() }
                        { origin_badge(cert) }
                    </li>
                }) }
            </ul>
        </div>
    }
}

/// Badge describing where a datum came from. Purely presentational.
fn origin_badge(cert: &CertificationRequirement) -> Html {
    let origin = classify_with_reference(
        cert.source.as_deref(),
        cert.reference_document.as_deref(),
    );
    let (background, color, text) = match origin {
        SourceOrigin::Document => ("#e8f5e9", "#2e7d32", "Documento"),
        SourceOrigin::Ai => ("#ede7f6", "#5e35b1", "IA"),
        SourceOrigin::Unknown => ("#eeeeee", "#757575", "Sin origen"),
    };
    html! {
        <span style={format!(
            "background:{};color:{};border-radius:10px;padding:0 8px;margin-left:6px;font-size:0.8em;",
            background, color
        )}>
            { text }
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_line_formats_ranges() {
        let budget = Budget {
            amount_min: Some(500_000),
            amount_max: Some(1_200_000),
            currency: Some("USD".to_string()),
            notes: None,
        };
        assert_eq!(budget_line(&budget), "500.000 – 1.200.000 USD");

        let open_ended = Budget {
            amount_min: None,
            amount_max: Some(80_000),
            currency: None,
            notes: None,
        };
        assert_eq!(budget_line(&open_ended), "hasta 80.000 USD");

        let empty = Budget {
            amount_min: None,
            amount_max: None,
            currency: None,
            notes: None,
        };
        assert_eq!(budget_line(&empty), "Sin monto declarado");
    }
}
