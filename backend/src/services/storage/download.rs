//! Serves a stored file's bytes for preview or download.
//!
//! This is the transport behind the frontend's preview cache: the response
//! carries the content type recorded at upload time (falling back to
//! octet-stream) and an inline disposition so browsers render rather than
//! save. The database row is the single source of truth for where the
//! bytes live.

use actix_files::NamedFile;
use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{web, HttpRequest, HttpResponse};
use rusqlite::params;

use crate::db;

pub async fn process(req: HttpRequest, file_id: web::Path<String>) -> HttpResponse {
    let record = match lookup(&file_id) {
        Ok(Some(record)) => record,
        Ok(None) => return HttpResponse::NotFound().body("Archivo no encontrado"),
        Err(e) => {
            return HttpResponse::ServiceUnavailable()
                .body(format!("Error consultando el archivo: {}", e))
        }
    };
    let (path, name, content_type) = record;

    match NamedFile::open_async(&path).await {
        Ok(file) => {
            let mime = content_type
                .as_deref()
                .and_then(|ct| ct.parse::<mime_guess::mime::Mime>().ok())
                .unwrap_or(mime_guess::mime::APPLICATION_OCTET_STREAM);
            let disposition = ContentDisposition {
                disposition: DispositionType::Inline,
                parameters: name
                    .map(|n| vec![DispositionParam::Filename(n)])
                    .unwrap_or_default(),
            };
            file.set_content_type(mime)
                .set_content_disposition(disposition)
                .into_response(&req)
        }
        Err(_) => HttpResponse::NotFound().body("Archivo físico no encontrado"),
    }
}

type FileRecord = (String, Option<String>, Option<String>);

/// `(path, name, content_type)` for the file, or `None` if unknown.
fn lookup(file_id: &str) -> Result<Option<FileRecord>, String> {
    let conn = db::open().map_err(|e| e.to_string())?;
    let mut stmt = conn
        .prepare("SELECT path, name, content_type FROM files WHERE id = ?1")
        .map_err(|e| e.to_string())?;
    let mut rows = stmt
        .query_map(params![file_id], |row| {
            Ok((row.get(0)?, row.get(1)?, row.get(2)?))
        })
        .map_err(|e| e.to_string())?;

    match rows.next() {
        Some(Ok(record)) => Ok(Some(record)),
        Some(Err(e)) => Err(e.to_string()),
        None => Ok(None),
    }
}
