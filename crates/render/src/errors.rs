//! Types for the errors that can occur while fetching and rendering images.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Error creating HTTP client: {0:?}")]
    /// An error occurred while creating the HTTP client.
    HttpClientCreation(#[source] reqwest::Error),

    #[error("Error fetching image from {url}: {source:?}")]
    /// The image could not be downloaded.
    Fetch {
        /// The URL that was requested.
        url: String,
        #[source]
        /// The error that was encountered.
        source: reqwest::Error,
    },

    #[error("Error decoding image: {0:?}")]
    /// The downloaded bytes were not a supported image format.
    Decode(#[source] image::ImageError),

    #[error("Error encoding image: {0:?}")]
    /// The rendered image could not be encoded as PNG.
    Encode(#[source] image::ImageError),
}
