use std::path::Path;

use axum::extract::multipart::Field;
use axum::http::StatusCode;
use chrono::Utc;
use tracing::debug;

use crate::models::error::Error;

const ALLOWED_MIME_TYPES: &[&str] = &["image/jpeg"];

pub struct UploadedImage {
    pub filename: String,
}

/// Persists one multipart image field to the content directory.
///
/// The declared media type is checked against the allow-list before
/// any bytes are read; on rejection nothing is written to disk.
pub async fn save_image(field: Field<'_>, content_dir: &Path) -> Result<UploadedImage, Error> {
    let original = match field.file_name() {
        Some(name) => name.to_string(),
        None => return Err(Error::new(StatusCode::BAD_REQUEST, "No image uploaded")),
    };

    if !is_allowed_type(field.content_type()) {
        return Err(Error::new(
            StatusCode::BAD_REQUEST,
            "Invalid file type. Only JPEG files are allowed.",
        ));
    }

    let data = field.bytes().await?;
    let filename = generate_filename(&original);

    tokio::fs::write(content_dir.join(&filename), &data).await?;
    debug!("Stored upload {} as {}", original, filename);

    Ok(UploadedImage { filename })
}

fn is_allowed_type(content_type: Option<&str>) -> bool {
    content_type.is_some_and(|mime| ALLOWED_MIME_TYPES.contains(&mime))
}

/// Millisecond prefix keeps repeated uploads of the same file apart.
fn generate_filename(original: &str) -> String {
    format!("{}-{}", Utc::now().timestamp_millis(), original)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jpeg_is_the_only_allowed_type() {
        assert!(is_allowed_type(Some("image/jpeg")));
        assert!(!is_allowed_type(Some("image/png")));
        assert!(!is_allowed_type(Some("text/plain")));
        assert!(!is_allowed_type(None));
    }

    #[test]
    fn generated_filename_keeps_original_name_after_millis_prefix() {
        let filename = generate_filename("valid.jpg");
        let (prefix, rest) = filename.split_once('-').unwrap();
        assert!(prefix.parse::<i64>().is_ok());
        assert_eq!(rest, "valid.jpg");
    }
}
