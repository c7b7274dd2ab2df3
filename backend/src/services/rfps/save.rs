use actix_web::{web, Responder};
use common::model::rfp::RfpDetail;
use rusqlite::{params, Connection};

use crate::db;

pub async fn process(payload: web::Json<RfpDetail>) -> impl Responder {
    match save_rfp(&payload).await {
        Ok(_) => actix_web::HttpResponse::Ok().body("RFP guardado correctamente"),
        Err(e) => actix_web::HttpResponse::ServiceUnavailable()
            .body(format!("Error al guardar el RFP: {}", e)),
    }
}

pub async fn save_rfp(payload: &RfpDetail) -> Result<(), String> {
    if payload.id.trim().is_empty() {
        return Err("El id del RFP no puede estar vacío".to_string());
    }
    let conn = db::open().map_err(|e| e.to_string())?;
    store(&conn, payload)
}

/// Upserts the record. The `files` field of the payload is ignored: files
/// are owned by the storage endpoints and their `position` column.
pub(crate) fn store(conn: &Connection, payload: &RfpDetail) -> Result<(), String> {
    let analysis_json = payload
        .analysis
        .as_ref()
        .map(serde_json::to_string)
        .transpose()
        .map_err(|e| e.to_string())?;

    conn.execute(
        "INSERT OR REPLACE INTO rfps (id, title, status, analysis) VALUES (?1, ?2, ?3, ?4)",
        params![&payload.id, &payload.title, &payload.status, analysis_json],
    )
    .map_err(|e| e.to_string())?;

    Ok(())
}
