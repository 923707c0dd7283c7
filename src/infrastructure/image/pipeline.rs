//! Network fetch and decode for a single image.

use std::sync::Arc;

use reqwest::Url;
use tracing::{debug, warn};

use crate::domain::entities::CachedImage;
use crate::domain::errors::ImageError;
use crate::domain::ports::HttpTransport;

use super::placeholder::image_not_found;

const NOT_FOUND: u16 = 404;

/// Turns a URL into a decoded image or a typed failure.
///
/// Issues exactly one GET per call. Never touches the cache; the caller
/// decides what to store.
#[derive(Clone)]
pub struct FetchDecodePipeline {
    transport: Arc<dyn HttpTransport>,
}

impl FetchDecodePipeline {
    /// Creates a pipeline over the given transport.
    #[must_use]
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }

    /// Downloads and decodes `url`.
    ///
    /// A 404 resolves to the shared "image not found" placeholder.
    ///
    /// # Errors
    /// Returns [`ImageError::Transport`] on network failure,
    /// [`ImageError::BadStatus`] for any other non-2xx status and
    /// [`ImageError::Decode`] if the body is not a supported image.
    pub async fn fetch(&self, url: &Url) -> Result<CachedImage, ImageError> {
        debug!(url = %url, "Downloading image from network");

        let response = self.transport.get(url).await.map_err(|e| {
            warn!(url = %url, error = %e, "Image request failed");
            ImageError::from(e)
        })?;

        if response.status == NOT_FOUND {
            debug!(url = %url, "Image not found, using placeholder");
            return Ok(image_not_found());
        }

        if !response.is_success() {
            warn!(url = %url, status = response.status, "Unexpected image response status");
            return Err(ImageError::bad_status(response.status));
        }

        let body = response.body;
        let decoded = tokio::task::spawn_blocking(move || image::load_from_memory(&body))
            .await
            .map_err(|e| ImageError::decode(format!("decode task panicked: {e}")))?
            .map_err(|e| {
                warn!(url = %url, error = %e, "Failed to decode image");
                ImageError::decode(e.to_string())
            })?;

        debug!(
            url = %url,
            width = decoded.width(),
            height = decoded.height(),
            "Image decoded"
        );
        Ok(Arc::new(decoded))
    }
}

impl std::fmt::Debug for FetchDecodePipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchDecodePipeline").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::domain::errors::TransportError;
    use crate::domain::ports::HttpResponse;
    use crate::domain::ports::mocks::MockHttpTransport;
    use crate::infrastructure::image::test_support::png_bytes;

    fn url() -> Url {
        Url::parse("https://img.example.com/poster.png").unwrap()
    }

    fn pipeline_returning(status: u16, body: Vec<u8>) -> FetchDecodePipeline {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_get()
            .times(1)
            .returning(move |_| Ok(HttpResponse::new(status, body.clone())));
        FetchDecodePipeline::new(Arc::new(transport))
    }

    #[tokio::test]
    async fn test_decodes_success_body() {
        let pipeline = pipeline_returning(200, png_bytes(4, 6));

        let img = pipeline.fetch(&url()).await.unwrap();
        assert_eq!((img.width(), img.height()), (4, 6));
    }

    #[tokio::test]
    async fn test_passes_url_to_transport() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_get()
            .withf(|u| u.as_str() == "https://img.example.com/poster.png")
            .times(1)
            .returning(|_| Ok(HttpResponse::new(200, png_bytes(1, 1))));
        let pipeline = FetchDecodePipeline::new(Arc::new(transport));

        tokio_test::assert_ok!(pipeline.fetch(&url()).await);
    }

    #[tokio::test]
    async fn test_not_found_yields_placeholder() {
        let pipeline = pipeline_returning(404, Vec::new());

        let img = pipeline.fetch(&url()).await.unwrap();
        assert!(Arc::ptr_eq(&img, &image_not_found()));
    }

    #[test_case(199 ; "below success range")]
    #[test_case(301 ; "redirect")]
    #[test_case(403 ; "forbidden")]
    #[test_case(500 ; "server error")]
    #[test_case(503 ; "unavailable")]
    #[tokio::test]
    async fn test_bad_status(status: u16) {
        let pipeline = pipeline_returning(status, png_bytes(1, 1));

        let err = pipeline.fetch(&url()).await.unwrap_err();
        assert_eq!(err, ImageError::bad_status(status));
    }

    #[test_case(200 ; "ok")]
    #[test_case(299 ; "upper bound")]
    #[tokio::test]
    async fn test_success_range_is_inclusive(status: u16) {
        let pipeline = pipeline_returning(status, png_bytes(2, 2));
        tokio_test::assert_ok!(pipeline.fetch(&url()).await);
    }

    #[tokio::test]
    async fn test_garbage_body_is_decode_error() {
        let pipeline = pipeline_returning(200, b"<html>not an image</html>".to_vec());

        let err = pipeline.fetch(&url()).await.unwrap_err();
        assert!(matches!(err, ImageError::Decode { .. }));
    }

    #[tokio::test]
    async fn test_empty_success_body_is_decode_error() {
        let pipeline = pipeline_returning(204, Vec::new());

        let err = pipeline.fetch(&url()).await.unwrap_err();
        assert!(matches!(err, ImageError::Decode { .. }));
    }

    #[tokio::test]
    async fn test_transport_error_passes_through() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_get()
            .times(1)
            .returning(|_| Err(TransportError::Connect("dns failure".to_string())));
        let pipeline = FetchDecodePipeline::new(Arc::new(transport));

        let err = pipeline.fetch(&url()).await.unwrap_err();
        assert_eq!(
            err,
            ImageError::Transport(TransportError::Connect("dns failure".to_string()))
        );
    }
}
