//! Fetching and decoding of remote images.

use tracing::instrument;

use crate::{errors::RenderError, handle::ImageHandle};

static USER_AGENT: &str = concat!("pride-bot/", env!("CARGO_PKG_VERSION"));

/// HTTP image fetcher. The inner client reuses connections across requests;
/// decoded images are handed out by value and live only as long as the
/// request that asked for them.
#[derive(Debug, Clone)]
pub struct ImageLoader {
    client: reqwest::Client,
}

impl ImageLoader {
    pub fn new() -> Result<Self, RenderError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(RenderError::HttpClientCreation)?;

        Ok(Self { client })
    }

    /// Download `url` and decode it into an image handle. Network errors and
    /// unsupported formats are returned to the caller; there is no retry.
    #[instrument(skip(self))]
    pub async fn load(&self, url: &str) -> Result<ImageHandle, RenderError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|source| RenderError::Fetch {
                url: url.to_owned(),
                source,
            })?;

        let bytes = response.bytes().await.map_err(|source| RenderError::Fetch {
            url: url.to_owned(),
            source,
        })?;

        let image = image::load_from_memory(&bytes).map_err(RenderError::Decode)?;

        Ok(ImageHandle::from(image.to_rgba8()))
    }
}
