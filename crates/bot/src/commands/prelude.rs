pub use anyhow::{anyhow, Context as _};
pub use poise::serenity_prelude as serenity;
pub use tracing::{debug, error, info, instrument, warn};

pub use utility::here;

pub use crate::{Context, Error};
