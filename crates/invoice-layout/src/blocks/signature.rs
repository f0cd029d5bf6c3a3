//! Signature block in the bottom-right corner

use super::Composer;
use crate::assets::{AssetKind, ImageProvider};
use crate::styles::StyleRole;
use pdf_core::INCH;

const BLOCK_WIDTH: f64 = 1.5 * INCH;
const IMAGE_WIDTH: f64 = 1.0 * INCH;
const IMAGE_HEIGHT: f64 = 0.5 * INCH;

/// Signature image with its bottom at `base`, caption hanging below it
pub fn place_signature(
    composer: &mut Composer<'_>,
    base: f64,
    caption: &str,
    assets: &dyn ImageProvider,
) {
    let x = composer.page().right_edge() - BLOCK_WIDTH;

    composer.image_box(
        AssetKind::Signature,
        &assets.image(AssetKind::Signature),
        x + (BLOCK_WIDTH - IMAGE_WIDTH) / 2.0,
        base,
        IMAGE_WIDTH,
        IMAGE_HEIGHT,
    );

    let caption = composer.wrap(caption, StyleRole::Caption, BLOCK_WIDTH);
    let y = base - 0.1 * INCH - caption.height();
    composer.paragraph(caption, x, y);
}
