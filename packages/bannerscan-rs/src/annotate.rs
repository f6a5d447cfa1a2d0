//! Image loading, saving and rectangle outlines shared by the stages.
use std::path::Path;

use image::{DynamicImage, Rgb, Rgba};
use imageproc::drawing::{draw_hollow_rect_mut, Canvas};
use imageproc::rect::Rect;

use crate::error::{ScanError, ScanResult};
use crate::geometry::BoundingBox;

pub const HIGHLIGHT: Rgb<u8> = Rgb([255, 0, 0]);
pub const HIGHLIGHT_RGBA: Rgba<u8> = Rgba([255, 0, 0, 255]);

pub fn load_image(path: &Path) -> ScanResult<DynamicImage> {
    image::open(path).map_err(|source| ScanError::ImageLoad {
        path: path.to_path_buf(),
        source,
    })
}

/// Saves in the image's own color type, so RGBA captures keep their alpha.
pub fn save_image(image: &DynamicImage, path: &Path) -> ScanResult<()> {
    image.save(path).map_err(|source| ScanError::ImageSave {
        path: path.to_path_buf(),
        source,
    })
}

/// Draws an outline `width` pixels thick, growing inward from the box edges.
///
/// Edges outside the canvas are not drawn. Each ring is clamped to one pixel
/// beyond the canvas so arbitrary OCR coordinates stay drawable.
pub fn draw_outline<C: Canvas>(canvas: &mut C, bounds: &BoundingBox, width: u32, color: C::Pixel) {
    let (canvas_w, canvas_h) = canvas.dimensions();
    if canvas_w == 0 || canvas_h == 0 {
        return;
    }
    let (canvas_w, canvas_h) = (i64::from(canvas_w), i64::from(canvas_h));

    for i in 0..i64::from(width) {
        let (left, top) = (i64::from(bounds.min_x) + i, i64::from(bounds.min_y) + i);
        let (right, bottom) = (i64::from(bounds.max_x) - i, i64::from(bounds.max_y) - i);
        if left > right || top > bottom {
            break;
        }
        if right < 0 || bottom < 0 || left >= canvas_w || top >= canvas_h {
            continue;
        }

        let (left, right) = (left.clamp(-1, canvas_w), right.clamp(-1, canvas_w));
        let (top, bottom) = (top.clamp(-1, canvas_h), bottom.clamp(-1, canvas_h));
        let rect = Rect::at(left as i32, top as i32)
            .of_size((right - left + 1) as u32, (bottom - top + 1) as u32);
        draw_hollow_rect_mut(canvas, rect, color);
    }
}
