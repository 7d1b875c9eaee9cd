//! Thumbnail downloads.
//!
//! Each article's thumbnail is fetched over HTTP and written into the run's
//! image directory, named after the slugified article title. A failed
//! download never fails the run; the article simply ends up with no picture
//! filename in the spreadsheet.

use std::path::Path;

use reqwest::Client;
use tracing::{info, warn};

use crate::utils::slugify_title;

/// Download one thumbnail into `images_dir`, named after `title`.
///
/// Returns the filename on success, `None` on any failure (non-200 status,
/// network error, file I/O error). Failures are logged at `warn` and
/// swallowed.
pub async fn download_thumbnail(
    client: &Client,
    image_url: &str,
    images_dir: &Path,
    title: &str,
) -> Option<String> {
    let filename = format!("{}.{}", slugify_title(title), extension_for(image_url));
    let target = images_dir.join(&filename);

    let response = match client.get(image_url).send().await {
        Ok(res) => res,
        Err(e) => {
            warn!(%image_url, error = %e, "Thumbnail request failed");
            return None;
        }
    };
    if !response.status().is_success() {
        warn!(%image_url, status = %response.status(), "Thumbnail request was not successful");
        return None;
    }

    let bytes = match response.bytes().await {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!(%image_url, error = %e, "Failed to read thumbnail body");
            return None;
        }
    };
    if let Err(e) = tokio::fs::write(&target, &bytes).await {
        warn!(path = %target.display(), error = %e, "Failed to write thumbnail file");
        return None;
    }

    info!(path = %target.display(), bytes = bytes.len(), "Downloaded thumbnail");
    Some(filename)
}

/// File extension for a thumbnail URL, falling back to `jpg`.
fn extension_for(image_url: &str) -> String {
    url::Url::parse(image_url)
        .ok()
        .and_then(|parsed| {
            Path::new(parsed.path())
                .extension()
                .map(|ext| ext.to_string_lossy().to_string())
        })
        .unwrap_or_else(|| "jpg".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_from_url_path() {
        assert_eq!(
            extension_for("https://static.example.com/images/thumb.png"),
            "png"
        );
    }

    #[test]
    fn test_extension_ignores_query_string() {
        assert_eq!(
            extension_for("https://static.example.com/thumb.webp?quality=75&auto=format"),
            "webp"
        );
    }

    #[test]
    fn test_extension_fallback() {
        assert_eq!(extension_for("https://static.example.com/thumb"), "jpg");
        assert_eq!(extension_for("not a url"), "jpg");
    }

    #[tokio::test]
    async fn test_download_failure_yields_none() {
        let tmp = tempfile::tempdir().unwrap();
        let client = Client::new();
        // Nothing listens on this port.
        let result =
            download_thumbnail(&client, "http://127.0.0.1:1/thumb.jpg", tmp.path(), "A Title")
                .await;
        assert!(result.is_none());
    }
}
