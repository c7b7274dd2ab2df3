use serde::{Deserialize, Serialize};

/// Structured result of analyzing an RFP's documents.
///
/// This mirrors the JSON schema the analysis service asks the model for.
/// The free-text fields (`project_duration`, `Risk::risk`,
/// `Penalty::description`, `Sla::description`, `opportunities`,
/// `recommendation_reasons`) may embed inline citations such as
/// `[Fuente: doc_2, Página 5]`; the frontend turns those into navigable
/// references against the RFP's file list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RfpAnalysis {
    pub title: Option<String>,
    pub client_name: Option<String>,
    pub country: Option<String>,
    pub category: Option<String>,
    /// Executive summary, markdown-formatted.
    pub summary: Option<String>,
    /// Estimated duration, usually cited ("12 meses [Fuente: doc_1, Pag 4]").
    pub project_duration: Option<String>,
    #[serde(default)]
    pub budget: Option<Budget>,
    #[serde(default)]
    pub risks: Vec<Risk>,
    #[serde(default)]
    pub penalties: Vec<Penalty>,
    #[serde(default)]
    pub slas: Vec<Sla>,
    #[serde(default)]
    pub opportunities: Vec<String>,
    #[serde(default)]
    pub recommendation_reasons: Vec<String>,
    #[serde(default)]
    pub certifications: Vec<CertificationRequirement>,
    pub confidence_score: Option<f64>,
    /// "GO" or "NO_GO" plus a short justification.
    pub recommendation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub amount_min: Option<i64>,
    pub amount_max: Option<i64>,
    pub currency: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Risk {
    /// Description of the risk, possibly cited.
    pub risk: String,
    /// "high" / "medium" / "low".
    pub severity: Option<String>,
    pub mitigation: Option<String>,
    /// "financial" / "technical" / "legal".
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Penalty {
    pub description: String,
    pub amount: Option<String>,
    #[serde(default)]
    pub is_high: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sla {
    pub description: String,
    pub metric: Option<String>,
    #[serde(default)]
    pub is_aggressive: bool,
}

/// A certification the RFP asks for.
///
/// `source` is a free-text label describing where the datum came from
/// ("RFP", "documento adjunto", "inferido por IA", ...); `reference_document`
/// optionally names the concrete document backing it. Both feed the origin
/// badge shown next to the requirement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertificationRequirement {
    pub name: String,
    pub source: Option<String>,
    pub reference_document: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_analyzer_output() {
        let doc = r#"{
            "title": "Renovación plataforma de pagos",
            "client_name": "Banco Andino",
            "country": "Chile",
            "category": "desarrollo",
            "summary": "Resumen ejecutivo.",
            "project_duration": "12 meses [Fuente: doc_1, Pag 4]",
            "budget": {"amount_min": 500000, "amount_max": 800000, "currency": "USD", "notes": null},
            "risks": [
                {"risk": "Multas altas [Fuente: doc_2, Página 9]", "severity": "high", "mitigation": null, "category": "financial"}
            ],
            "penalties": [],
            "opportunities": ["Ampliación regional [Fuente: doc_1, Pag 2]"],
            "recommendation_reasons": [],
            "certifications": [
                {"name": "ISO 27001", "source": "RFP", "reference_document": "Anexo_Tecnico.pdf"}
            ],
            "confidence_score": 0.82,
            "recommendation": "GO"
        }"#;

        let analysis: RfpAnalysis = serde_json::from_str(doc).unwrap();
        assert_eq!(analysis.risks.len(), 1);
        assert_eq!(analysis.risks[0].severity.as_deref(), Some("high"));
        assert_eq!(analysis.budget.as_ref().unwrap().amount_max, Some(800_000));
        assert_eq!(analysis.certifications[0].source.as_deref(), Some("RFP"));
        // Fields the analyzer omits entirely fall back to empty collections.
        assert!(analysis.slas.is_empty());
    }
}
