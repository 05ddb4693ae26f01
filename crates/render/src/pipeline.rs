//! The compositing pipeline.
//!
//! Two render strategies share the blur/crop/normalize primitives and the
//! final circular crop; they differ only in blend mode and geometry. The
//! canvas size is a fixed contract of the pipeline: callers hand in flags
//! already sized to [`CANVAS_SIZE`], either from the flag table or by
//! fill-fitting a custom image.

use std::io::Cursor;

use image::{DynamicImage, ImageFormat};

use crate::{
    errors::RenderError,
    handle::{BlendMode, FitMode, ImageHandle},
};

/// Side length of the square flag canvas.
pub const CANVAS_SIZE: u32 = 1024;
/// Side length of the avatar in overlay mode.
pub const AVATAR_SIZE: u32 = 944;
/// Border left on every side in overlay mode; the avatar is centered.
pub const AVATAR_OFFSET: u32 = (CANVAS_SIZE - AVATAR_SIZE) / 2;
/// Blur strength applied to the flag when blending.
pub const BLEND_BLUR_SIGMA: f32 = 25.0;

/// Render strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Tint the flag through a multiply blend with the avatar's silhouette.
    Mask,
    /// Place the circle-cropped avatar atop the flag with a flag-colored
    /// border around it.
    Overlay,
}

/// Composite `avatar` onto `flag` and circle-crop the result.
///
/// Blurring is an orthogonal pre-step: with `blend` set, the flag is blurred
/// before compositing so the edge where the two images meet is softened.
pub fn render(
    mut flag: ImageHandle,
    avatar: ImageHandle,
    mode: RenderMode,
    blend: bool,
) -> ImageHandle {
    if blend {
        flag = flag.blur(BLEND_BLUR_SIGMA);
    }

    flag = match mode {
        RenderMode::Mask => {
            let avatar = avatar.circle_mask();

            flag.composite(avatar, BlendMode::Multiply, 0, 0)
        }
        RenderMode::Overlay => {
            let avatar = avatar
                .circle_mask()
                .normalize()
                .resize(AVATAR_SIZE, AVATAR_SIZE, FitMode::Cover);

            flag.composite(
                avatar,
                BlendMode::Over,
                i64::from(AVATAR_OFFSET),
                i64::from(AVATAR_OFFSET),
            )
        }
    };

    flag.normalize().circle_mask()
}

/// Losslessly encode a rendered image, materializing any pending operations.
pub fn encode_png(image: ImageHandle) -> Result<Vec<u8>, RenderError> {
    let buffer = image.into_buffer();

    let mut bytes = Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(buffer)
        .write_to(&mut bytes, ImageFormat::Png)
        .map_err(RenderError::Encode)?;

    Ok(bytes.into_inner())
}
