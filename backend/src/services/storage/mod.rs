//! Manages the documents attached to an RFP: upload and download.
//!
//! Uploaded bytes land on disk under a content-hash name (re-uploads of the
//! same file share storage) while the database keeps the original filename,
//! MIME type, and upload position. The download endpoint is what the
//! frontend's preview cache calls: it serves the stored bytes with the
//! recorded content type so the browser viewer can render them directly.
//!
//! The provided routes are:
//! - `POST /api/storage/{rfp_id}/upload`: multipart/form-data with one or
//!   more `file` parts. Each part is streamed to disk, hashed, and recorded
//!   with the next `position` for the RFP. Responds with the stored
//!   `SourceFile` records.
//! - `GET /api/storage/files/{file_id}/download`: serves a stored file
//!   inline with its recorded content type.

use actix_web::web::{get, post, scope};
use actix_web::Scope;

mod download;
mod upload;

const API_PATH: &str = "/api/storage";

/// Configures and returns the Actix scope for storage routes.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/{rfp_id}/upload", post().to(upload::process))
        .route("/files/{file_id}/download", get().to(download::process))
}
