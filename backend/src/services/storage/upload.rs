use actix_multipart::Multipart;
use actix_web::{web, HttpResponse, Responder};
use common::model::source_file::SourceFile;
use futures_util::StreamExt;
use md5::Context;
use rusqlite::{params, Connection};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::config;
use crate::db;

/// HTTP handler wrapper that converts the internal result to an
/// `HttpResponse`.
///
/// - On success: `200 OK` with the stored `SourceFile` records as JSON.
/// - On failure: `400 Bad Request` with the error message.
pub async fn process(rfp_id: web::Path<String>, payload: Multipart) -> impl Responder {
    match upload_files(&rfp_id, payload).await {
        Ok(files) => HttpResponse::Ok().json(files),
        Err(e) => HttpResponse::BadRequest().body(format!("Error: {}", e)),
    }
}

/// Streams every `file` part of the multipart payload to disk and records
/// it for the RFP, preserving upload order via the `position` column.
pub async fn upload_files(
    rfp_id: &str,
    mut payload: Multipart,
) -> Result<Vec<SourceFile>, Box<dyn std::error::Error>> {
    fs::create_dir_all(config::STORAGE_DIR)?;
    let conn = db::open()?;
    let mut stored: Vec<SourceFile> = Vec::new();

    while let Some(item) = payload.next().await {
        let mut field = item?;
        let field_name = field
            .content_disposition()
            .and_then(|cd| cd.get_name().map(|n| n.to_string()));
        if field_name.as_deref() != Some("file") {
            continue;
        }

        let filename = field
            .content_disposition()
            .and_then(|cd| cd.get_filename().map(|f| f.to_string()))
            .unwrap_or_default();
        if filename.is_empty() {
            return Err("Cada parte 'file' debe llevar nombre de archivo".into());
        }

        let declared_type = field.content_type().map(|m| m.to_string());
        let file_id = uuid::Uuid::new_v4().to_string();

        // Stream to a temporary name while hashing; the final name derives
        // from the content hash so identical uploads share disk storage.
        let part_path = Path::new(config::STORAGE_DIR).join(format!("{}.part", file_id));
        let mut hasher = Context::new();
        {
            let file = File::create(&part_path)?;
            let mut writer = BufWriter::new(file);
            while let Some(chunk) = field.next().await {
                let chunk = chunk?;
                hasher.consume(&chunk);
                writer.write_all(&chunk)?;
            }
            writer.flush()?;
        }

        let digest = format!("{:x}", hasher.finalize());
        let extension = Path::new(&filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!(".{}", e.to_lowercase()))
            .unwrap_or_default();
        let final_path = Path::new(config::STORAGE_DIR).join(format!("{}{}", digest, extension));
        if final_path.exists() {
            fs::remove_file(&part_path)?;
        } else {
            fs::rename(&part_path, &final_path)?;
        }

        let content_type = declared_type.unwrap_or_else(|| {
            mime_guess::from_path(&filename)
                .first_or_octet_stream()
                .to_string()
        });

        let record = SourceFile {
            id: file_id,
            name: Some(filename),
            content_type: Some(content_type),
        };
        register_file(&conn, rfp_id, &record, &final_path.to_string_lossy())?;
        stored.push(record);
    }

    if stored.is_empty() {
        return Err("No se envió ningún archivo".into());
    }
    Ok(stored)
}

/// Inserts the file row with the next `position` for this RFP. Citations of
/// the form `doc_N` address the list sorted by this column, so positions
/// only ever grow.
pub(crate) fn register_file(
    conn: &Connection,
    rfp_id: &str,
    file: &SourceFile,
    path: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let position: i64 = conn.query_row(
        "SELECT COALESCE(MAX(position), 0) + 1 FROM files WHERE rfp_id = ?1",
        params![rfp_id],
        |row| row.get(0),
    )?;
    conn.execute(
        "INSERT INTO files (id, rfp_id, name, content_type, path, position)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![&file.id, rfp_id, &file.name, &file.content_type, path, position],
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        crate::db::create_schema(&conn).unwrap();
        conn
    }

    fn record(id: &str, name: &str) -> SourceFile {
        SourceFile {
            id: id.to_string(),
            name: Some(name.to_string()),
            content_type: None,
        }
    }

    #[test]
    fn positions_grow_in_registration_order() {
        let conn = test_conn();
        register_file(&conn, "rfp-1", &record("f1", "Bases.pdf"), "/tmp/a").unwrap();
        register_file(&conn, "rfp-1", &record("f2", "Anexo.pdf"), "/tmp/b").unwrap();
        // A second RFP starts its own numbering.
        register_file(&conn, "rfp-2", &record("f3", "Otro.pdf"), "/tmp/c").unwrap();

        let positions: Vec<(String, i64)> = conn
            .prepare("SELECT id, position FROM files ORDER BY rfp_id, position")
            .unwrap()
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))
            .unwrap()
            .filter_map(Result::ok)
            .collect();
        assert_eq!(
            positions,
            vec![
                ("f1".to_string(), 1),
                ("f2".to_string(), 2),
                ("f3".to_string(), 1),
            ]
        );
    }
}
