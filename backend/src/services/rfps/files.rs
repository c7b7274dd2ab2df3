use actix_web::{web, Responder};

use crate::db;
use crate::services::rfps::get::load_files;

/// Actix web handler for `GET /api/rfps/{rfp_id}/files`: the RFP's file
/// list in upload order.
pub async fn process(rfp_id: web::Path<String>) -> impl Responder {
    let conn = match db::open() {
        Ok(conn) => conn,
        Err(e) => {
            return actix_web::HttpResponse::ServiceUnavailable()
                .body(format!("Error abriendo la base de datos: {}", e))
        }
    };

    match load_files(&conn, &rfp_id) {
        Ok(files) => actix_web::HttpResponse::Ok().json(files),
        Err(e) => actix_web::HttpResponse::ServiceUnavailable()
            .body(format!("Error consultando archivos: {}", e)),
    }
}
