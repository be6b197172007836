use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::api::error::ApiError;
use crate::api::types::{Layer, LayerId};

/// HTTP client for the layer API.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct LayerClient {
    client: Client,
    base_url: Url,
}

impl LayerClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let parsed =
            Url::parse(base_url).map_err(|_| ApiError::InvalidBaseUrl(base_url.to_string()))?;
        if parsed.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl(base_url.to_string()));
        }

        // No request timeout: a hung request keeps its view loading.
        let client = Client::builder()
            .build()
            .map_err(|source| ApiError::Request {
                endpoint: parsed.to_string(),
                source,
            })?;

        Ok(Self {
            client,
            base_url: parsed,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `GET /api/layer`
    pub async fn layer_ids(&self) -> Result<Vec<LayerId>, ApiError> {
        let url = self.endpoint(&["api", "layer"])?;
        self.get_json(url).await
    }

    /// `GET /api/layer/{id}`
    pub async fn layer(&self, id: &LayerId) -> Result<Layer, ApiError> {
        let url = self.endpoint(&["api", "layer", id.as_str()])?;
        self.get_json(url).await
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// The status code is not inspected: an error page decodes like any
    /// other body and fails as `ApiError::Decode`.
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        let endpoint = url.path().to_string();
        tracing::trace!(endpoint = %endpoint, "GET");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| ApiError::Request {
                endpoint: endpoint.clone(),
                source,
            })?;

        let body = response.bytes().await.map_err(|source| ApiError::Request {
            endpoint: endpoint.clone(),
            source,
        })?;

        serde_json::from_slice(&body).map_err(|source| ApiError::Decode { endpoint, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_extend_the_base_path() {
        let client = LayerClient::new("http://127.0.0.1:8080").unwrap();
        let url = client.endpoint(&["api", "layer"]).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/api/layer");

        let client = LayerClient::new("http://localhost/dive/").unwrap();
        let url = client.endpoint(&["api", "layer", "abc"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost/dive/api/layer/abc");
    }

    #[test]
    fn identifier_is_a_single_encoded_segment() {
        let client = LayerClient::new("http://127.0.0.1:8080").unwrap();
        let url = client.endpoint(&["api", "layer", "a/b c"]).unwrap();
        assert_eq!(url.path(), "/api/layer/a%2Fb%20c");
    }

    #[test]
    fn rejects_unusable_base_urls() {
        assert!(matches!(
            LayerClient::new("not a url"),
            Err(ApiError::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            LayerClient::new("mailto:someone@example.com"),
            Err(ApiError::InvalidBaseUrl(_))
        ));
    }
}
