//! Inline image embedding
//!
//! Task images are stored inside the task record as `data:` URLs.

use base64::Engine;
use std::path::Path;
use tracing::debug;

use crate::{Error, Result};

/// Guess a mime type from the file extension
pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("bmp") => "image/bmp",
        _ => "application/octet-stream",
    }
}

/// Encode raw bytes as a `data:` URL
pub fn to_data_url(mime: &str, bytes: &[u8]) -> String {
    format!(
        "data:{};base64,{}",
        mime,
        base64::engine::general_purpose::STANDARD.encode(bytes)
    )
}

/// Read a local file and return it as a `data:` URL
pub async fn embed_image(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path).await.map_err(|e| {
        Error::Image(format!("Failed to read {}: {}", path.display(), e))
    })?;

    debug!("Embedding {} ({} bytes)", path.display(), bytes.len());
    Ok(to_data_url(mime_for_path(path), &bytes))
}
