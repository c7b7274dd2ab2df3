//! # RFP Service Module
//!
//! Aggregates the API endpoints for RFP records: fetching the full detail
//! (analysis plus ordered file list) and persisting an analysis document.
//! The analysis itself is produced elsewhere; this module only stores and
//! serves it.
//!
//! ## Sub-modules:
//! - `get`: Retrieves an RFP's detail, including the file list in the
//!   upload order that ordinal citations resolve against.
//! - `save`: Creates or updates an RFP record and its analysis JSON.
//! - `files`: Serves just the ordered file list of an RFP.

mod files;
mod get;
mod save;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

/// The base path for all RFP-related API endpoints.
const API_PATH: &str = "/api/rfps";

/// Configures and returns the Actix `Scope` for RFP routes.
///
/// # Registered Routes:
///
/// *   **`POST /save`**: Upserts an RFP record. Expects an `RfpDetail` JSON
///     payload; the embedded file list is ignored (files are managed by the
///     storage endpoints).
/// *   **`GET /{rfp_id}`**: Full detail: record fields, the parsed analysis
///     document, and the file list ordered by upload position.
/// *   **`GET /{rfp_id}/files`**: Only the ordered file list.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/save", post().to(save::process))
        .route("/{rfp_id}", get().to(get::process))
        .route("/{rfp_id}/files", get().to(files::process))
}
