//! Built-in "image not found" poster.

use std::sync::{Arc, LazyLock};

use image::{DynamicImage, Rgba, RgbaImage};

use crate::domain::entities::CachedImage;

/// Placeholder width in pixels (poster aspect 2:3).
pub const PLACEHOLDER_WIDTH: u32 = 300;
/// Placeholder height in pixels.
pub const PLACEHOLDER_HEIGHT: u32 = 450;

const BACKGROUND: Rgba<u8> = Rgba([224, 224, 224, 255]);
const STROKE: Rgba<u8> = Rgba([160, 160, 160, 255]);
const STROKE_WIDTH: i64 = 6;

static NOT_FOUND: LazyLock<CachedImage> = LazyLock::new(|| Arc::new(render_not_found()));

/// Returns the shared placeholder served for missing posters.
/// Every call returns the same allocation.
#[must_use]
pub fn image_not_found() -> CachedImage {
    Arc::clone(&NOT_FOUND)
}

fn render_not_found() -> DynamicImage {
    let w = i64::from(PLACEHOLDER_WIDTH);
    let h = i64::from(PLACEHOLDER_HEIGHT);
    let buffer = RgbaImage::from_fn(PLACEHOLDER_WIDTH, PLACEHOLDER_HEIGHT, |x, y| {
        let (x, y) = (i64::from(x), i64::from(y));
        // Distance from each diagonal, scaled by the longer side.
        let d1 = (x * h - y * w).abs() / h.max(w);
        let d2 = ((w - x) * h - y * w).abs() / h.max(w);
        let border = x < STROKE_WIDTH
            || y < STROKE_WIDTH
            || x >= w - STROKE_WIDTH
            || y >= h - STROKE_WIDTH;
        if border || d1 < STROKE_WIDTH / 2 || d2 < STROKE_WIDTH / 2 {
            STROKE
        } else {
            BACKGROUND
        }
    });
    DynamicImage::ImageRgba8(buffer)
}

#[cfg(test)]
mod tests {
    use image::GenericImageView;

    use super::*;

    #[test]
    fn test_placeholder_is_shared() {
        let a = image_not_found();
        let b = image_not_found();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_placeholder_dimensions() {
        let img = image_not_found();
        assert_eq!(img.dimensions(), (PLACEHOLDER_WIDTH, PLACEHOLDER_HEIGHT));
        assert_eq!(img.get_pixel(0, 0), STROKE);
        assert_eq!(img.get_pixel(PLACEHOLDER_WIDTH / 2, 40), BACKGROUND);
    }
}
