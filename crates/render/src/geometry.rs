//! Pixel-level implementations of the queued image operations.

use image::{
    imageops::{self, FilterType},
    RgbaImage,
};

use crate::handle::{BlendMode, FitMode, ImageOp};

pub(crate) fn apply(image: RgbaImage, op: ImageOp) -> RgbaImage {
    match op {
        ImageOp::Blur { sigma } => imageops::blur(&image, sigma),
        ImageOp::CircleMask => circle_mask(image),
        ImageOp::Resize { width, height, fit } => resize(&image, width, height, fit),
        ImageOp::Composite {
            source,
            blend,
            left,
            top,
        } => composite(image, &source, blend, left, top),
    }
}

/// Zero the alpha of every pixel outside the centered circle with diameter
/// `min(width, height)`. The distance test uses pixel centers, so the result
/// is deterministic for any input size.
pub(crate) fn circle_mask(mut image: RgbaImage) -> RgbaImage {
    let (width, height) = image.dimensions();
    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;
    let radius = width.min(height) as f32 / 2.0;
    let radius_sq = radius * radius;

    for (x, y, pixel) in image.enumerate_pixels_mut() {
        let dx = x as f32 + 0.5 - center_x;
        let dy = y as f32 + 0.5 - center_y;

        if dx * dx + dy * dy > radius_sq {
            pixel[3] = 0;
        }
    }

    image
}

pub(crate) fn resize(image: &RgbaImage, width: u32, height: u32, fit: FitMode) -> RgbaImage {
    match fit {
        FitMode::Fill => imageops::resize(image, width, height, FilterType::Lanczos3),
        FitMode::Cover => {
            let (source_width, source_height) = image.dimensions();
            let scale = f64::max(
                f64::from(width) / f64::from(source_width),
                f64::from(height) / f64::from(source_height),
            );

            let scaled_width = ((f64::from(source_width) * scale).round() as u32).max(width);
            let scaled_height = ((f64::from(source_height) * scale).round() as u32).max(height);
            let scaled = imageops::resize(image, scaled_width, scaled_height, FilterType::Lanczos3);

            let left = (scaled_width - width) / 2;
            let top = (scaled_height - height) / 2;
            imageops::crop_imm(&scaled, left, top, width, height).to_image()
        }
    }
}

fn composite(
    mut destination: RgbaImage,
    source: &RgbaImage,
    blend: BlendMode,
    left: i64,
    top: i64,
) -> RgbaImage {
    match blend {
        BlendMode::Over => {
            imageops::overlay(&mut destination, source, left, top);
            destination
        }
        BlendMode::Multiply => multiply(destination, source, left, top),
    }
}

/// Per-channel multiply, weighted by source alpha:
/// `out = dst·(1 − sa) + (dst·src / 255)·sa`, destination alpha kept.
/// Wherever the source is fully transparent the destination is untouched, and
/// wherever it is opaque the destination is darkened by the source.
fn multiply(mut destination: RgbaImage, source: &RgbaImage, left: i64, top: i64) -> RgbaImage {
    let (dst_width, dst_height) = destination.dimensions();

    for (source_x, source_y, source_pixel) in source.enumerate_pixels() {
        let x = left + i64::from(source_x);
        let y = top + i64::from(source_y);

        if x < 0 || y < 0 || x >= i64::from(dst_width) || y >= i64::from(dst_height) {
            continue;
        }

        let pixel = destination.get_pixel_mut(x as u32, y as u32);
        let source_alpha = u16::from(source_pixel[3]);
        let inverse_alpha = 255 - source_alpha;

        for channel in 0..3 {
            let plain = mul_div255(u16::from(pixel[channel]), inverse_alpha);
            let multiplied = mul_div255(
                u16::from(pixel[channel]),
                u16::from(source_pixel[channel]),
            );
            pixel[channel] =
                plain.saturating_add(mul_div255(u16::from(multiplied), source_alpha));
        }
    }

    destination
}

fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn solid(width: u32, height: u32, color: [u8; 4]) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba(color))
    }

    #[test]
    fn circle_mask_clears_corners_and_keeps_the_center() {
        let masked = circle_mask(solid(64, 64, [10, 20, 30, 255]));

        assert_eq!(masked.get_pixel(0, 0)[3], 0);
        assert_eq!(masked.get_pixel(63, 0)[3], 0);
        assert_eq!(masked.get_pixel(0, 63)[3], 0);
        assert_eq!(masked.get_pixel(63, 63)[3], 0);
        assert_eq!(*masked.get_pixel(32, 32), Rgba([10, 20, 30, 255]));
        // Midpoints of the edges lie on the circle.
        assert_eq!(masked.get_pixel(0, 32)[3], 255);
    }

    #[test]
    fn circle_mask_on_non_square_input_uses_the_short_side() {
        let masked = circle_mask(solid(100, 40, [255, 255, 255, 255]));

        // Outside the centered 40px circle.
        assert_eq!(masked.get_pixel(10, 20)[3], 0);
        assert_eq!(masked.get_pixel(50, 20)[3], 255);
    }

    #[test]
    fn resize_fill_stretches_to_exact_dimensions() {
        let resized = resize(&solid(10, 30, [5, 5, 5, 255]), 20, 20, FitMode::Fill);
        assert_eq!(resized.dimensions(), (20, 20));
    }

    #[test]
    fn resize_cover_crops_the_overflowing_axis() {
        let resized = resize(&solid(100, 50, [5, 5, 5, 255]), 40, 40, FitMode::Cover);
        assert_eq!(resized.dimensions(), (40, 40));
    }

    #[test]
    fn multiply_with_opaque_source_scales_each_channel() {
        let out = multiply(
            solid(2, 2, [200, 100, 50, 255]),
            &solid(2, 2, [128, 255, 0, 255]),
            0,
            0,
        );

        let pixel = out.get_pixel(0, 0);
        assert_eq!(pixel[0], ((200u32 * 128 + 127) / 255) as u8);
        assert_eq!(pixel[1], 100);
        assert_eq!(pixel[2], 0);
        assert_eq!(pixel[3], 255);
    }

    #[test]
    fn multiply_with_transparent_source_is_a_noop() {
        let out = multiply(
            solid(2, 2, [200, 100, 50, 255]),
            &solid(2, 2, [0, 0, 0, 0]),
            0,
            0,
        );
        assert_eq!(*out.get_pixel(1, 1), Rgba([200, 100, 50, 255]));
    }

    #[test]
    fn multiply_ignores_source_pixels_outside_the_destination() {
        let out = multiply(
            solid(2, 2, [200, 100, 50, 255]),
            &solid(4, 4, [0, 0, 0, 255]),
            1,
            1,
        );

        assert_eq!(*out.get_pixel(0, 0), Rgba([200, 100, 50, 255]));
        assert_eq!(*out.get_pixel(1, 1), Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn over_with_transparent_source_keeps_the_destination() {
        let out = composite(
            solid(2, 2, [200, 100, 50, 255]),
            &solid(2, 2, [255, 255, 255, 0]),
            BlendMode::Over,
            0,
            0,
        );
        assert_eq!(*out.get_pixel(0, 0), Rgba([200, 100, 50, 255]));
    }

    #[test]
    fn blur_of_constant_image_is_constant() {
        let expected = [40, 80, 120, 255];
        let blurred = apply(solid(16, 16, expected), ImageOp::Blur { sigma: 3.0 });

        let pixel = blurred.get_pixel(8, 8);
        for channel in 0..4 {
            assert!((i32::from(pixel[channel]) - i32::from(expected[channel])).abs() <= 1);
        }
    }
}
