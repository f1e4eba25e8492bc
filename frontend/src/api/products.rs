use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde_json::json;

use crate::api::client::ApiClient;
use crate::api::types::{ApiError, Product, ProductCreateResponse, ProductListResponse};

impl ApiClient {
    pub async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().get(format!("{}/products", base_url)))
            .await?;

        let status = response.status();
        Self::handle_unauthorized_status(status);
        if status.is_success() {
            response
                .json::<ProductListResponse>()
                .await
                .map(|body| body.items)
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    /// Asks the backend for a draft product populated with its defaults.
    pub async fn create_product(&self) -> Result<Product, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .post(format!("{}/products", base_url))
                    .json(&json!({})),
            )
            .await?;

        let status = response.status();
        Self::handle_unauthorized_status(status);
        if status.is_success() {
            response
                .json::<ProductCreateResponse>()
                .await
                .map(ProductCreateResponse::into_product)
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    pub async fn delete_product(&self, product_id: &str) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().delete(format!(
                "{}/products/{}",
                base_url,
                encode_path_segment(product_id)
            )))
            .await?;

        let status = response.status();
        Self::handle_unauthorized_status(status);
        if status.is_success() {
            Ok(())
        } else {
            Err(Self::error_from_response(response).await)
        }
    }
}

pub(crate) fn encode_path_segment(value: &str) -> String {
    utf8_percent_encode(value, NON_ALPHANUMERIC).to_string()
}
