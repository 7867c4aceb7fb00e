//! QR code rendering service.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{ImageFormat, Luma};
use qrcode::QrCode;
use serde_json::json;
use tracing::{debug, warn};

use crate::domain::entities::QrArtifact;
use crate::error::AppError;
use crate::utils::code_generator;

/// Directory, relative to the static root, that holds generated images.
pub const QR_DIR: &str = "qrcodes";

/// Length of the random file name of each image.
const QR_NAME_LENGTH: usize = 8;

/// Minimum edge of the rendered image in pixels.
const QR_MIN_SIZE: u32 = 256;

/// Service rendering QR codes into PNG files under the static-asset root.
pub struct QrService {
    static_root: PathBuf,
}

impl QrService {
    /// Creates a QR service writing below `static_root`.
    pub fn new(static_root: impl Into<PathBuf>) -> Self {
        Self {
            static_root: static_root.into(),
        }
    }

    /// Root directory that returned paths are relative to.
    pub fn static_root(&self) -> &Path {
        &self.static_root
    }

    /// Renders a QR code for `url` and stores it as a PNG.
    ///
    /// The input is encoded verbatim; no scheme normalization is applied.
    /// The image is written to a temporary file first and renamed into place,
    /// so a returned path always refers to a complete file.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the data does not fit in a QR code,
    /// PNG encoding fails, or the file cannot be written.
    pub async fn generate(&self, url: &str) -> Result<QrArtifact, AppError> {
        let data = url.to_string();
        let png = tokio::task::spawn_blocking(move || render_png(&data))
            .await
            .map_err(|e| qr_error("QR rendering task failed", e))??;

        let name = format!("{}.png", code_generator::generate(QR_NAME_LENGTH)?);
        let dir = self.static_root.join(QR_DIR);

        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| qr_error("Cannot create QR directory", e))?;

        write_file(&dir.join(&name), &png).await?;

        let file = format!("{}/{}", QR_DIR, name);
        debug!(file = %file, bytes = png.len(), "QR code saved");

        Ok(QrArtifact {
            original_url: url.to_string(),
            file,
        })
    }
}

/// Encodes `data` as a QR code and returns the PNG bytes.
fn render_png(data: &str) -> Result<Vec<u8>, AppError> {
    let code = QrCode::new(data.as_bytes()).map_err(|e| qr_error("Cannot Generate QR Code", e))?;

    let image = code
        .render::<Luma<u8>>()
        .min_dimensions(QR_MIN_SIZE, QR_MIN_SIZE)
        .build();

    let mut png = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .map_err(|e| qr_error("Cannot encode QR image", e))?;

    Ok(png)
}

/// Writes `bytes` to `path` through a sibling temporary file.
async fn write_file(path: &Path, bytes: &[u8]) -> Result<(), AppError> {
    let tmp_path = path.with_extension("png.tmp");

    let result = async {
        tokio::fs::write(&tmp_path, bytes).await?;
        tokio::fs::rename(&tmp_path, path).await
    }
    .await;

    if let Err(e) = result {
        if let Err(cleanup) = tokio::fs::remove_file(&tmp_path).await
            && cleanup.kind() != std::io::ErrorKind::NotFound
        {
            warn!(path = %tmp_path.display(), error = %cleanup, "Failed to remove partial QR file");
        }
        return Err(qr_error("Cannot save QR image", e));
    }

    Ok(())
}

fn qr_error(message: &str, e: impl std::fmt::Display) -> AppError {
    AppError::internal(message, json!({ "reason": e.to_string() }))
}
