//! Image file loading for the composer

use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use wam_core::prelude::*;
use wam_core::ImageAttachment;

/// Media type guessed from the file extension
pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

/// Read `path` and embed it as a base64 `data:` URL
pub async fn read_image_attachment(path: &Path) -> Result<ImageAttachment> {
    let bytes = tokio::fs::read(path).await?;
    let data_url = format!("data:{};base64,{}", mime_for_path(path), STANDARD.encode(&bytes));
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok(ImageAttachment::new(file_name, data_url, bytes.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_mime_for_path() {
        assert_eq!(mime_for_path(Path::new("a.PNG")), "image/png");
        assert_eq!(mime_for_path(Path::new("a.jpeg")), "image/jpeg");
        assert_eq!(mime_for_path(Path::new("a.webp")), "image/webp");
        assert_eq!(mime_for_path(Path::new("a.txt")), "application/octet-stream");
        assert_eq!(mime_for_path(Path::new("noext")), "application/octet-stream");
    }

    #[tokio::test]
    async fn test_read_image_attachment() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("banner.gif");
        std::fs::write(&path, b"GIF89a").unwrap();

        let image = read_image_attachment(&path).await.unwrap();

        assert_eq!(image.file_name(), "banner.gif");
        assert_eq!(image.byte_len(), 6);
        assert_eq!(image.data_url(), "data:image/gif;base64,R0lGODlh");
        assert_eq!(image.mime(), "image/gif");
    }

    #[tokio::test]
    async fn test_unsupported_type_still_loads() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("notes.txt");
        std::fs::write(&path, b"hi").unwrap();

        let image = read_image_attachment(&path).await.unwrap();
        assert!(image.data_url().starts_with("data:application/octet-stream;base64,"));
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let temp = tempdir().unwrap();
        let result = read_image_attachment(&temp.path().join("missing.png")).await;
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
