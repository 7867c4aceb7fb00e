//! QR artifact entity.

/// A rendered QR image written under the static-asset root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrArtifact {
    /// The exact string encoded in the image.
    pub original_url: String,
    /// Path relative to the static-asset root, e.g. `qrcodes/Ab3dE9xY.png`.
    pub file: String,
}
