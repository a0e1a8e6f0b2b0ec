//! # Inventory Service Client
//!
//! Thin typed wrapper over the inventory/pricing HTTP API.
//!
//! ## Endpoints
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Inventory API Surface                             │
//! │                                                                         │
//! │  GET  /products          → [Product]                                   │
//! │  GET  /products/{id}     → [Product] (zero or one; callers take [0])   │
//! │  POST /products          ← ProductDraft                                │
//! │  PUT  /products/{id}     ← ProductDraft                                │
//! │  GET  /bundles           → [Bundle]                                    │
//! │  GET  /bundles/{id}      → [Bundle] (zero or one; callers take [0])    │
//! │  POST /bundles           ← BundleDraft                                 │
//! │  PUT  /bundles/{id}      ← BundleDraft                                 │
//! │  POST /purchase          ← {products, bundles} → {totalCost}           │
//! │                                                                         │
//! │  Rejections carry `{error: string}` in the body. Timeouts are left to  │
//! │  the transport's defaults; this subsystem configures none.             │
//! │                                                                         │
//! │  Create/update drafts are form-validated client-side before any        │
//! │  request is built; an invalid draft never goes on the wire.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use store_core::types::{
    Bundle, BundleDraft, Product, ProductDraft, PurchaseReceipt, PurchaseRequest, ServerErrorBody,
};
use store_core::validation::{validate_bundle_draft, validate_product_draft};

use crate::error::{ClientError, ClientResult};

/// Default base URL of the inventory service (local development).
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001/api";

/// Environment variable overriding the base URL.
pub const BASE_URL_ENV: &str = "STORE_API_URL";

// =============================================================================
// Store Client
// =============================================================================

/// Typed client for the inventory/pricing service.
///
/// Cheap to clone: `reqwest::Client` is an `Arc` around a connection pool.
#[derive(Debug, Clone)]
pub struct StoreClient {
    client: Client,
    base_url: String,
}

impl StoreClient {
    /// Creates a client against an explicit base URL.
    ///
    /// A trailing slash on `base_url` is tolerated.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        StoreClient {
            client: Client::new(),
            base_url,
        }
    }

    /// Creates a client from `STORE_API_URL`, falling back to the local
    /// development default.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        StoreClient::new(base_url)
    }

    /// The configured base URL (without trailing slash).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // -------------------------------------------------------------------------
    // Products
    // -------------------------------------------------------------------------

    /// Lists all products.
    pub async fn list_products(&self) -> ClientResult<Vec<Product>> {
        self.get_json("/products").await
    }

    /// Fetches one product by id.
    ///
    /// The service answers with an array of zero or one element; this
    /// returns element 0 when present.
    pub async fn get_product(&self, id: &str) -> ClientResult<Option<Product>> {
        let mut rows: Vec<Product> = self.get_json(&format!("/products/{}", id)).await?;
        Ok(if rows.is_empty() {
            None
        } else {
            Some(rows.swap_remove(0))
        })
    }

    /// Creates a product.
    ///
    /// The draft is validated first; an invalid form never goes on the wire.
    pub async fn create_product(&self, draft: &ProductDraft) -> ClientResult<()> {
        validate_product_draft(draft)?;
        self.send_json(self.client.post(self.url("/products")), draft)
            .await
    }

    /// Updates an existing product. The draft is validated first.
    pub async fn update_product(&self, id: &str, draft: &ProductDraft) -> ClientResult<()> {
        validate_product_draft(draft)?;
        self.send_json(
            self.client.put(self.url(&format!("/products/{}", id))),
            draft,
        )
        .await
    }

    // -------------------------------------------------------------------------
    // Bundles
    // -------------------------------------------------------------------------

    /// Lists all bundles.
    pub async fn list_bundles(&self) -> ClientResult<Vec<Bundle>> {
        self.get_json("/bundles").await
    }

    /// Lists the bundles associated with one product.
    ///
    /// The service exposes no product-scoped bundle route, so this fetches
    /// the full list and filters on `product_id` client-side.
    pub async fn bundles_for_product(&self, product_id: &str) -> ClientResult<Vec<Bundle>> {
        let bundles = self.list_bundles().await?;
        Ok(bundles
            .into_iter()
            .filter(|b| b.product_id == product_id)
            .collect())
    }

    /// Fetches one bundle by id (array of zero or one; element 0).
    pub async fn get_bundle(&self, id: &str) -> ClientResult<Option<Bundle>> {
        let mut rows: Vec<Bundle> = self.get_json(&format!("/bundles/{}", id)).await?;
        Ok(if rows.is_empty() {
            None
        } else {
            Some(rows.swap_remove(0))
        })
    }

    /// Creates a bundle.
    ///
    /// The draft is validated first; an invalid form never goes on the wire.
    pub async fn create_bundle(&self, draft: &BundleDraft) -> ClientResult<()> {
        validate_bundle_draft(draft)?;
        self.send_json(self.client.post(self.url("/bundles")), draft)
            .await
    }

    /// Updates an existing bundle. The draft is validated first.
    pub async fn update_bundle(&self, id: &str, draft: &BundleDraft) -> ClientResult<()> {
        validate_bundle_draft(draft)?;
        self.send_json(
            self.client.put(self.url(&format!("/bundles/{}", id))),
            draft,
        )
        .await
    }

    // -------------------------------------------------------------------------
    // Purchase
    // -------------------------------------------------------------------------

    /// Submits one atomic purchase and returns the server-settled receipt.
    ///
    /// The payload is never split into per-item calls: partial application
    /// of a multi-item order is exactly what this API shape avoids.
    pub async fn purchase(&self, request: &PurchaseRequest) -> ClientResult<PurchaseReceipt> {
        debug!(
            products = request.products.len(),
            bundles = request.bundles.len(),
            "POST /purchase"
        );

        let response = self
            .client
            .post(self.url("/purchase"))
            .json(request)
            .send()
            .await
            .map_err(|e| ClientError::RequestFailed(e.to_string()))?;

        match response.status() {
            StatusCode::OK => response
                .json::<PurchaseReceipt>()
                .await
                .map_err(|e| ClientError::ResponseParseFailed(e.to_string())),
            status => Err(Self::rejection(status, response).await),
        }
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        debug!(path = %path, "GET");

        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| ClientError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            response
                .json::<T>()
                .await
                .map_err(|e| ClientError::ResponseParseFailed(e.to_string()))
        } else {
            Err(Self::rejection(status, response).await)
        }
    }

    async fn send_json<B: Serialize>(
        &self,
        builder: reqwest::RequestBuilder,
        body: &B,
    ) -> ClientResult<()> {
        let response = builder
            .json(body)
            .send()
            .await
            .map_err(|e| ClientError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(Self::rejection(status, response).await)
        }
    }

    /// Turns a non-success response into the richest error we can build:
    /// the server's `{error}` body when it parses, a bare status otherwise.
    async fn rejection(status: StatusCode, response: Response) -> ClientError {
        let body = response.text().await.unwrap_or_default();
        match serde_json::from_str::<ServerErrorBody>(&body) {
            Ok(parsed) => ClientError::Rejected {
                status: status.as_u16(),
                message: parsed.error,
            },
            Err(_) => ClientError::UnexpectedStatus {
                status: status.as_u16(),
            },
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
