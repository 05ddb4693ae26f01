//! Pride-flag avatar compositing.
//!
//! The pipeline works on [`ImageHandle`]s, lazy rasters that queue their
//! operations until something needs to read actual pixels. [`flags`] resolves
//! flag names and aliases to source canvases, [`loader`] fetches and decodes
//! remote images, and [`pipeline`] combines the two into the final circular
//! render.

pub mod errors;
pub mod flags;
pub mod handle;
pub mod loader;
pub mod pipeline;

mod geometry;

pub use errors::RenderError;
pub use handle::{BlendMode, FitMode, ImageHandle};
pub use loader::ImageLoader;
pub use pipeline::{render, RenderMode};
