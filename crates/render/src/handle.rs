//! Lazy image handles.
//!
//! An [`ImageHandle`] is either a concrete pixel buffer or a buffer with a
//! queue of operations that have not been applied yet. Operations that only
//! transform the image are queued; anything that has to read pixel data (a
//! composite source, PNG encoding) forces the queue to be applied first.

use image::RgbaImage;

use crate::geometry;

/// Resize policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitMode {
    /// Stretch to exactly the target dimensions, ignoring aspect ratio.
    Fill,
    /// Scale to cover the target dimensions, preserving aspect ratio and
    /// cropping the overflow.
    Cover,
}

/// How a composite source is combined with the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlendMode {
    /// Plain alpha compositing; opaque source pixels replace the destination.
    Over,
    /// Per-channel multiply; the source darkens the destination beneath it.
    Multiply,
}

#[derive(Debug, Clone)]
pub enum ImageOp {
    Blur { sigma: f32 },
    CircleMask,
    Resize { width: u32, height: u32, fit: FitMode },
    Composite {
        source: RgbaImage,
        blend: BlendMode,
        left: i64,
        top: i64,
    },
}

#[derive(Debug, Clone)]
pub enum ImageHandle {
    Pending { base: RgbaImage, ops: Vec<ImageOp> },
    Materialized(RgbaImage),
}

impl From<RgbaImage> for ImageHandle {
    fn from(buffer: RgbaImage) -> Self {
        Self::Materialized(buffer)
    }
}

impl ImageHandle {
    /// The dimensions the image will have once materialized. Resizes are the
    /// only queued operations that change them.
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            Self::Materialized(buffer) => buffer.dimensions(),
            Self::Pending { base, ops } => {
                ops.iter().fold(base.dimensions(), |dims, op| match op {
                    ImageOp::Resize { width, height, .. } => (*width, *height),
                    _ => dims,
                })
            }
        }
    }

    pub fn is_materialized(&self) -> bool {
        matches!(self, Self::Materialized(_))
    }

    /// Queue a gaussian blur.
    pub fn blur(self, sigma: f32) -> Self {
        self.queue(ImageOp::Blur { sigma })
    }

    /// Queue a circular alpha mask sized to the bounding square, centered.
    /// Corners outside the circle become fully transparent.
    pub fn circle_mask(self) -> Self {
        self.queue(ImageOp::CircleMask)
    }

    pub fn resize(self, width: u32, height: u32, fit: FitMode) -> Self {
        self.queue(ImageOp::Resize { width, height, fit })
    }

    /// Queue a composite of `source` onto this image at (`left`, `top`).
    /// Compositing reads the source's pixels, so the source is materialized
    /// here; the destination stays lazy.
    pub fn composite(self, source: Self, blend: BlendMode, left: i64, top: i64) -> Self {
        let source = source.into_buffer();
        self.queue(ImageOp::Composite {
            source,
            blend,
            left,
            top,
        })
    }

    /// Flush every queued operation into a concrete pixel buffer.
    pub fn normalize(self) -> Self {
        Self::Materialized(self.into_buffer())
    }

    pub fn into_buffer(self) -> RgbaImage {
        match self {
            Self::Materialized(buffer) => buffer,
            Self::Pending { base, ops } => ops.into_iter().fold(base, geometry::apply),
        }
    }

    fn queue(self, op: ImageOp) -> Self {
        match self {
            Self::Materialized(base) => Self::Pending {
                base,
                ops: vec![op],
            },
            Self::Pending { base, mut ops } => {
                ops.push(op);
                Self::Pending { base, ops }
            }
        }
    }
}
