//! Brand images: logo, payment QR code and signature
//!
//! Assets are decoded once and shared read-only between renders. A missing
//! or broken file never fails a render; the layout draws a placeholder
//! instead.

use pdf_core::ImageXObject;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// The three brand images
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AssetKind {
    Logo,
    QrCode,
    Signature,
}

impl AssetKind {
    pub const ALL: [AssetKind; 3] = [AssetKind::Logo, AssetKind::QrCode, AssetKind::Signature];

    /// File name inside the asset directory
    pub fn file_name(&self) -> &'static str {
        match self {
            AssetKind::Logo => "logo.png",
            AssetKind::QrCode => "qr-code.png",
            AssetKind::Signature => "signature.png",
        }
    }
}

/// Load outcome of one asset
#[derive(Debug, Clone)]
pub enum AssetState {
    Ready(Arc<ImageXObject>),
    Missing,
    /// The file exists but could not be read or decoded
    Unreadable(String),
}

impl AssetState {
    pub fn is_ready(&self) -> bool {
        matches!(self, AssetState::Ready(_))
    }
}

/// Source of brand images for the layout
pub trait ImageProvider: Send + Sync {
    fn image(&self, kind: AssetKind) -> AssetState;
}

/// Decoded brand images
#[derive(Debug, Clone)]
pub struct AssetSet {
    logo: AssetState,
    qr_code: AssetState,
    signature: AssetState,
}

impl AssetSet {
    /// A set with every asset missing
    pub fn empty() -> Self {
        Self {
            logo: AssetState::Missing,
            qr_code: AssetState::Missing,
            signature: AssetState::Missing,
        }
    }

    /// Load and decode every asset from `dir`
    pub fn load_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        let mut set = Self::empty();

        for kind in AssetKind::ALL {
            let path = dir.join(kind.file_name());
            let state = if !path.exists() {
                warn!(path = %path.display(), "brand asset not found");
                AssetState::Missing
            } else {
                match std::fs::read(&path) {
                    Ok(bytes) => decode(kind, &bytes),
                    Err(e) => {
                        warn!(path = %path.display(), error = %e, "failed to read brand asset");
                        AssetState::Unreadable(e.to_string())
                    }
                }
            };
            if state.is_ready() {
                info!(path = %path.display(), "loaded brand asset");
            }
            set.set(kind, state);
        }

        set
    }

    /// Replace one asset with the decoded `bytes`
    pub fn with_bytes(mut self, kind: AssetKind, bytes: &[u8]) -> Self {
        self.set(kind, decode(kind, bytes));
        self
    }

    pub fn set(&mut self, kind: AssetKind, state: AssetState) {
        match kind {
            AssetKind::Logo => self.logo = state,
            AssetKind::QrCode => self.qr_code = state,
            AssetKind::Signature => self.signature = state,
        }
    }

    pub fn get(&self, kind: AssetKind) -> &AssetState {
        match kind {
            AssetKind::Logo => &self.logo,
            AssetKind::QrCode => &self.qr_code,
            AssetKind::Signature => &self.signature,
        }
    }
}

impl Default for AssetSet {
    fn default() -> Self {
        Self::empty()
    }
}

impl ImageProvider for AssetSet {
    fn image(&self, kind: AssetKind) -> AssetState {
        self.get(kind).clone()
    }
}

fn decode(kind: AssetKind, bytes: &[u8]) -> AssetState {
    match ImageXObject::decode(bytes) {
        Ok(image) => AssetState::Ready(Arc::new(image)),
        Err(e) => {
            warn!(asset = kind.file_name(), error = %e, "failed to decode brand asset");
            AssetState::Unreadable(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageFormat, Rgb, RgbImage};

    fn png() -> Vec<u8> {
        let mut bytes = Vec::new();
        DynamicImage::ImageRgb8(RgbImage::from_pixel(4, 4, Rgb([10, 20, 30])))
            .write_to(&mut std::io::Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_file_names() {
        assert_eq!(AssetKind::Logo.file_name(), "logo.png");
        assert_eq!(AssetKind::QrCode.file_name(), "qr-code.png");
        assert_eq!(AssetKind::Signature.file_name(), "signature.png");
    }

    #[test]
    fn test_empty_dir_is_all_missing() {
        let dir = tempfile::tempdir().unwrap();
        let set = AssetSet::load_dir(dir.path());
        for kind in AssetKind::ALL {
            assert!(matches!(set.image(kind), AssetState::Missing));
        }
    }

    #[test]
    fn test_load_dir_distinguishes_missing_and_broken() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("logo.png"), png()).unwrap();
        std::fs::write(dir.path().join("qr-code.png"), b"not a png").unwrap();

        let set = AssetSet::load_dir(dir.path());
        assert!(set.image(AssetKind::Logo).is_ready());
        assert!(matches!(set.image(AssetKind::QrCode), AssetState::Unreadable(_)));
        assert!(matches!(set.image(AssetKind::Signature), AssetState::Missing));
    }

    #[test]
    fn test_with_bytes() {
        let set = AssetSet::empty().with_bytes(AssetKind::Signature, &png());
        assert!(set.get(AssetKind::Signature).is_ready());
        assert!(!set.get(AssetKind::Logo).is_ready());
    }
}
