//! Fetches preview bytes from the backend and wraps them in object URLs.
//!
//! The storage backend occasionally hands back a Word document re-encoded as
//! base64 text (a leftover of an older transport), which corrupts the zip
//! signature a viewer expects. `normalize_preview_payload` undoes that
//! before the blob is created; everything else passes through untouched.

use base64::{engine::general_purpose, Engine as _};
use gloo_net::http::Request;

/// Zip local-file-header magic; DOCX/XLSX are zip containers.
const ZIP_SIGNATURE: &[u8] = b"PK";

/// Fetches the raw bytes and content type for one file. Runs inside
/// `spawn_local`; the caller turns the result into a cache transition.
pub async fn fetch_preview(file_id: &str) -> Result<(Vec<u8>, String), String> {
    let response = Request::get(&format!("/api/storage/files/{}/download", file_id))
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if response.status() != 200 {
        return Err(format!("descarga rechazada (HTTP {})", response.status()));
    }

    let content_type = response
        .headers()
        .get("content-type")
        .unwrap_or_else(|| "application/octet-stream".to_string());

    let bytes = response.binary().await.map_err(|e| e.to_string())?;
    let bytes = normalize_preview_payload(bytes, &content_type);
    Ok((bytes, content_type))
}

/// Undoes base64 re-encoding of zip-based payloads.
///
/// Applies only when the content type claims a zip container (or is the
/// opaque octet-stream) and the bytes lack the `PK` signature but decode as
/// base64 into something that has it. Anything ambiguous is returned as-is:
/// a wrong guess here would corrupt a perfectly good file.
pub fn normalize_preview_payload(bytes: Vec<u8>, content_type: &str) -> Vec<u8> {
    if !zip_based(content_type) || bytes.starts_with(ZIP_SIGNATURE) {
        return bytes;
    }
    let Ok(text) = std::str::from_utf8(&bytes) else {
        return bytes;
    };
    match general_purpose::STANDARD.decode(text.trim()) {
        Ok(decoded) if decoded.starts_with(ZIP_SIGNATURE) => decoded,
        _ => bytes,
    }
}

fn zip_based(content_type: &str) -> bool {
    let ct = content_type.to_lowercase();
    ct.contains("officedocument")
        || ct.contains("msword")
        || ct.contains("zip")
        || ct.contains("octet-stream")
}

/// Wraps bytes in a revocable object URL carrying the given MIME type.
pub fn object_url_for(bytes: &[u8], content_type: &str) -> Result<String, String> {
    let blob = gloo_file::Blob::new_with_options(bytes, Some(content_type));
    web_sys::Url::create_object_url_with_blob(blob.as_ref())
        .map_err(|e| format!("no se pudo crear la URL del blob: {:?}", e))
}

/// Releases one object URL. Revoking an already-revoked URL is a no-op in
/// every browser, but the cache never calls this twice for the same handle.
pub fn revoke_object_url(url: &str) {
    let _ = web_sys::Url::revoke_object_url(url);
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCX_MIME: &str =
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

    #[test]
    fn genuine_zip_passes_through() {
        let payload = b"PK\x03\x04rest-of-archive".to_vec();
        assert_eq!(
            normalize_preview_payload(payload.clone(), DOCX_MIME),
            payload
        );
    }

    #[test]
    fn base64_reencoded_docx_is_decoded() {
        let original = b"PK\x03\x04contenido".to_vec();
        let encoded = general_purpose::STANDARD.encode(&original).into_bytes();
        assert_eq!(normalize_preview_payload(encoded, DOCX_MIME), original);
    }

    #[test]
    fn base64_with_surrounding_whitespace_is_decoded() {
        let original = b"PK\x03\x04contenido".to_vec();
        let mut encoded = format!("\n{}\n", general_purpose::STANDARD.encode(&original));
        encoded.push(' ');
        assert_eq!(
            normalize_preview_payload(encoded.into_bytes(), "application/octet-stream"),
            original
        );
    }

    #[test]
    fn pdf_payloads_are_never_touched() {
        // Valid base64 of a PK payload, but the declared type is PDF.
        let encoded = general_purpose::STANDARD
            .encode(b"PK\x03\x04contenido")
            .into_bytes();
        assert_eq!(
            normalize_preview_payload(encoded.clone(), "application/pdf"),
            encoded
        );
    }

    #[test]
    fn base64_of_non_zip_content_is_left_alone() {
        let encoded = general_purpose::STANDARD.encode(b"texto plano").into_bytes();
        assert_eq!(
            normalize_preview_payload(encoded.clone(), DOCX_MIME),
            encoded
        );
    }

    #[test]
    fn invalid_base64_is_left_alone() {
        let payload = b"esto no es base64!!".to_vec();
        assert_eq!(
            normalize_preview_payload(payload.clone(), DOCX_MIME),
            payload
        );
    }
}
