//! DTOs for QR code endpoint.

use serde::Serialize;

use crate::domain::entities::QrArtifact;

/// Response for a generated QR image.
///
/// `qr_file` is relative to the static root and served under `/static/`.
#[derive(Debug, Serialize)]
pub struct QrResponse {
    pub original_url: String,
    pub qr_file: String,
}

impl From<QrArtifact> for QrResponse {
    fn from(artifact: QrArtifact) -> Self {
        Self {
            original_url: artifact.original_url,
            qr_file: artifact.file,
        }
    }
}
