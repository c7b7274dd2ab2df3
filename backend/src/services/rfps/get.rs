//! Retrieval of a single RFP's detail.
//!
//! Backend logic for `GET /api/rfps/{rfp_id}`: the record row, its analysis
//! JSON parsed into `RfpAnalysis`, and the file list sorted by the
//! `position` column. That sort order is a contract with the frontend:
//! ordinal citations address the list by position, so it must match the
//! order the analysis was produced against.

use actix_web::web;
use common::model::rfp::RfpDetail;
use common::model::source_file::SourceFile;
use rusqlite::{params, Connection};

use crate::db;

/// Actix web handler for `GET /api/rfps/{rfp_id}`.
pub async fn process(rfp_id: web::Path<String>) -> impl actix_web::Responder {
    match get_rfp(&rfp_id).await {
        Ok(Some(detail)) => actix_web::HttpResponse::Ok().json(detail),
        Ok(None) => actix_web::HttpResponse::NotFound().body("RFP no encontrado"),
        Err(e) => actix_web::HttpResponse::ServiceUnavailable()
            .body(format!("Error consultando el RFP: {}", e)),
    }
}

pub async fn get_rfp(rfp_id: &str) -> Result<Option<RfpDetail>, String> {
    let conn = db::open().map_err(|e| e.to_string())?;
    load_detail(&conn, rfp_id)
}

/// Assembles the detail from an open connection. Split from `get_rfp` so
/// tests can run against an in-memory database.
pub(crate) fn load_detail(conn: &Connection, rfp_id: &str) -> Result<Option<RfpDetail>, String> {
    let mut stmt = conn
        .prepare("SELECT id, title, status, analysis FROM rfps WHERE id = ?1")
        .map_err(|e| e.to_string())?;
    let mut rows = stmt
        .query_map(params![rfp_id], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, Option<String>>(1)?,
                row.get::<_, Option<String>>(2)?,
                row.get::<_, Option<String>>(3)?,
            ))
        })
        .map_err(|e| e.to_string())?;

    let (id, title, status, analysis_json) = match rows.next() {
        Some(Ok(row)) => row,
        Some(Err(e)) => return Err(e.to_string()),
        None => return Ok(None),
    };

    let analysis = analysis_json
        .map(|json| serde_json::from_str(&json))
        .transpose()
        .map_err(|e| e.to_string())?;

    let files = load_files(conn, rfp_id)?;

    Ok(Some(RfpDetail {
        id,
        title,
        status,
        analysis,
        files,
    }))
}

/// The RFP's files, ordered by upload position.
pub(crate) fn load_files(conn: &Connection, rfp_id: &str) -> Result<Vec<SourceFile>, String> {
    let mut stmt = conn
        .prepare(
            "SELECT id, name, content_type FROM files WHERE rfp_id = ?1 ORDER BY position ASC",
        )
        .map_err(|e| e.to_string())?;
    let file_iter = stmt
        .query_map(params![rfp_id], |row| {
            Ok(SourceFile {
                id: row.get(0)?,
                name: row.get(1)?,
                content_type: row.get(2)?,
            })
        })
        .map_err(|e| e.to_string())?;

    Ok(file_iter.filter_map(Result::ok).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::rfps::save::store;
    use common::model::analysis::RfpAnalysis;

    fn test_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        crate::db::create_schema(&conn).unwrap();
        conn
    }

    #[test]
    fn save_then_load_round_trips_the_analysis() {
        let conn = test_conn();
        let detail = RfpDetail {
            id: "rfp-1".to_string(),
            title: Some("Licitación pagos".to_string()),
            status: Some("ANALYZED".to_string()),
            analysis: Some(RfpAnalysis {
                title: Some("Licitación pagos".to_string()),
                client_name: Some("Banco Andino".to_string()),
                country: None,
                category: None,
                summary: Some("Resumen.".to_string()),
                project_duration: Some("12 meses [Fuente: doc_1, Pag 4]".to_string()),
                budget: None,
                risks: vec![],
                penalties: vec![],
                slas: vec![],
                opportunities: vec![],
                recommendation_reasons: vec![],
                certifications: vec![],
                confidence_score: Some(0.9),
                recommendation: Some("GO".to_string()),
            }),
            files: vec![],
        };

        store(&conn, &detail).unwrap();
        let loaded = load_detail(&conn, "rfp-1").unwrap().unwrap();
        assert_eq!(loaded.title.as_deref(), Some("Licitación pagos"));
        assert_eq!(
            loaded
                .analysis
                .as_ref()
                .unwrap()
                .project_duration
                .as_deref(),
            Some("12 meses [Fuente: doc_1, Pag 4]")
        );
    }

    #[test]
    fn missing_rfp_is_none() {
        let conn = test_conn();
        assert!(load_detail(&conn, "nope").unwrap().is_none());
    }

    #[test]
    fn files_come_back_in_position_order() {
        let conn = test_conn();
        // Inserted out of order on purpose.
        for (id, name, position) in [
            ("f2", "Anexo.pdf", 2),
            ("f1", "Bases.pdf", 1),
            ("f3", "Formulario.xlsx", 3),
        ] {
            conn.execute(
                "INSERT INTO files (id, rfp_id, name, content_type, path, position)
                 VALUES (?1, 'rfp-1', ?2, NULL, '/tmp/x', ?3)",
                params![id, name, position],
            )
            .unwrap();
        }

        let files = load_files(&conn, "rfp-1").unwrap();
        let ids: Vec<_> = files.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["f1", "f2", "f3"]);
    }
}
