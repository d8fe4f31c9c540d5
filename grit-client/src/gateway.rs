//! Store gateway implementation

use crate::{GatewayConfig, GatewayError, GatewayResult, RowQuery};
use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use shared::{
    HeroImage, HeroImageCreate, HeroImageUpdate, Product, ProductCreate, ProductUpdate,
    StoredAsset,
};

/// Bucket holding product photos
pub const PRODUCT_IMAGES_BUCKET: &str = "product-images";
/// Bucket holding uploaded site assets (logo, footer video)
pub const ASSETS_BUCKET: &str = "assets";
/// Bucket holding hero carousel images
pub const HERO_IMAGES_BUCKET: &str = "hero-images";

const PRODUCTS_TABLE: &str = "products";
const HERO_IMAGES_TABLE: &str = "hero_images";

// ============================================================================
// StoreGateway Trait
// ============================================================================

/// Gateway to the hosted data service
///
/// Storefront list reads exclude `hidden_on_home` rows and come back ordered
/// by ascending id; the admin read asks for every row. Every call is a single
/// request/response with no retry.
#[async_trait]
pub trait StoreGateway: Send + Sync {
    /// All customer-visible products
    async fn fetch_products(&self) -> GatewayResult<Vec<Product>>;

    /// Single product lookup; a missing row is `None`, not an error
    async fn fetch_product_by_id(&self, id: i64) -> GatewayResult<Option<Product>>;

    /// Customer-visible products in one category
    async fn fetch_products_by_category(&self, category: &str) -> GatewayResult<Vec<Product>>;

    /// Every product row, hidden ones included (admin listing)
    async fn fetch_products_admin(&self) -> GatewayResult<Vec<Product>>;

    /// Insert a product; the backend assigns the id
    async fn insert_product(&self, draft: ProductCreate) -> GatewayResult<Product>;

    /// Partial update by id
    async fn update_product(&self, id: i64, changes: ProductUpdate) -> GatewayResult<Product>;

    /// Permanent removal by id
    async fn delete_product(&self, id: i64) -> GatewayResult<()>;

    /// Active hero images, display order first, newest first within an order
    async fn fetch_hero_images(&self) -> GatewayResult<Vec<HeroImage>>;

    async fn insert_hero_image(&self, draft: HeroImageCreate) -> GatewayResult<HeroImage>;

    async fn update_hero_image(&self, id: i64, changes: HeroImageUpdate)
    -> GatewayResult<HeroImage>;

    async fn delete_hero_image(&self, id: i64) -> GatewayResult<()>;

    /// Upload raw bytes into a bucket, returning the public URL
    async fn upload_object(&self, bucket: &str, name: &str, bytes: Vec<u8>)
    -> GatewayResult<String>;

    /// List a bucket's objects with resolved public URLs
    async fn list_objects(&self, bucket: &str) -> GatewayResult<Vec<StoredAsset>>;

    async fn delete_object(&self, bucket: &str, name: &str) -> GatewayResult<()>;

    /// Public URL for an object; pure string derivation, no request
    fn public_url(&self, bucket: &str, name: &str) -> String;
}

// ============================================================================
// NetworkGateway - HTTP implementation
// ============================================================================

/// Network gateway (HTTP)
#[derive(Debug, Clone)]
pub struct NetworkGateway {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

/// Object row as returned by the bucket list endpoint
#[derive(Debug, Deserialize)]
struct ObjectRow {
    name: String,
    updated_at: Option<String>,
}

impl NetworkGateway {
    /// Create a new network gateway
    pub fn new(base_url: &str, api_key: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Create a network gateway from a configuration
    pub fn from_config(config: &GatewayConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }

    fn rows_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn object_url(&self, bucket: &str, name: &str) -> String {
        format!("{}/storage/v1/object/{}/{}", self.base_url, bucket, name)
    }

    fn with_auth(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        req.header("apikey", &self.api_key)
            .header(
                reqwest::header::AUTHORIZATION,
                format!("Bearer {}", self.api_key),
            )
    }

    async fn get_rows<T: DeserializeOwned>(
        &self,
        table: &str,
        query: RowQuery,
    ) -> GatewayResult<Vec<T>> {
        let req = self
            .client
            .get(self.rows_url(table))
            .query(&query.params());

        let resp = self.with_auth(req).send().await?;
        Self::handle_response(resp).await
    }

    /// Write returning the representation; the backend answers with a row array
    async fn write_rows<T: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
    ) -> GatewayResult<Vec<T>> {
        let req = self.with_auth(req).header("Prefer", "return=representation");
        let resp = req.send().await?;
        Self::handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(resp: reqwest::Response) -> GatewayResult<T> {
        let status = resp.status();

        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(GatewayError::from_status(status, text));
        }

        resp.json().await.map_err(Into::into)
    }

    fn single_row<T>(mut rows: Vec<T>, what: &str) -> GatewayResult<T> {
        if rows.is_empty() {
            return Err(GatewayError::NotFound(what.to_string()));
        }
        Ok(rows.remove(0))
    }
}

#[async_trait]
impl StoreGateway for NetworkGateway {
    async fn fetch_products(&self) -> GatewayResult<Vec<Product>> {
        self.get_rows(
            PRODUCTS_TABLE,
            RowQuery::select_all()
                .eq("hidden_on_home", false)
                .order_asc("id"),
        )
        .await
    }

    async fn fetch_product_by_id(&self, id: i64) -> GatewayResult<Option<Product>> {
        let rows: Vec<Product> = self
            .get_rows(PRODUCTS_TABLE, RowQuery::select_all().eq("id", id).limit(1))
            .await?;
        Ok(rows.into_iter().next())
    }

    async fn fetch_products_by_category(&self, category: &str) -> GatewayResult<Vec<Product>> {
        self.get_rows(
            PRODUCTS_TABLE,
            RowQuery::select_all()
                .eq("category", category)
                .eq("hidden_on_home", false)
                .order_asc("id"),
        )
        .await
    }

    async fn fetch_products_admin(&self) -> GatewayResult<Vec<Product>> {
        self.get_rows(PRODUCTS_TABLE, RowQuery::select_all().order_asc("id"))
            .await
    }

    async fn insert_product(&self, draft: ProductCreate) -> GatewayResult<Product> {
        let req = self
            .client
            .post(self.rows_url(PRODUCTS_TABLE))
            .json(&[draft]);
        let rows: Vec<Product> = self.write_rows(req).await?;
        Self::single_row(rows, "inserted product")
    }

    async fn update_product(&self, id: i64, changes: ProductUpdate) -> GatewayResult<Product> {
        let req = self
            .client
            .patch(self.rows_url(PRODUCTS_TABLE))
            .query(&[("id", format!("eq.{id}"))])
            .json(&changes);
        let rows: Vec<Product> = self.write_rows(req).await?;
        Self::single_row(rows, &format!("product {id}"))
    }

    async fn delete_product(&self, id: i64) -> GatewayResult<()> {
        let req = self
            .client
            .delete(self.rows_url(PRODUCTS_TABLE))
            .query(&[("id", format!("eq.{id}"))]);
        let resp = self.with_auth(req).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(GatewayError::from_status(status, text));
        }
        Ok(())
    }

    async fn fetch_hero_images(&self) -> GatewayResult<Vec<HeroImage>> {
        self.get_rows(
            HERO_IMAGES_TABLE,
            RowQuery::select_all()
                .eq("is_active", true)
                .order_asc("display_order")
                .order_desc("created_at"),
        )
        .await
    }

    async fn insert_hero_image(&self, draft: HeroImageCreate) -> GatewayResult<HeroImage> {
        let req = self
            .client
            .post(self.rows_url(HERO_IMAGES_TABLE))
            .json(&[draft]);
        let rows: Vec<HeroImage> = self.write_rows(req).await?;
        Self::single_row(rows, "inserted hero image")
    }

    async fn update_hero_image(
        &self,
        id: i64,
        changes: HeroImageUpdate,
    ) -> GatewayResult<HeroImage> {
        let req = self
            .client
            .patch(self.rows_url(HERO_IMAGES_TABLE))
            .query(&[("id", format!("eq.{id}"))])
            .json(&changes);
        let rows: Vec<HeroImage> = self.write_rows(req).await?;
        Self::single_row(rows, &format!("hero image {id}"))
    }

    async fn delete_hero_image(&self, id: i64) -> GatewayResult<()> {
        let req = self
            .client
            .delete(self.rows_url(HERO_IMAGES_TABLE))
            .query(&[("id", format!("eq.{id}"))]);
        let resp = self.with_auth(req).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(GatewayError::from_status(status, text));
        }
        Ok(())
    }

    async fn upload_object(
        &self,
        bucket: &str,
        name: &str,
        bytes: Vec<u8>,
    ) -> GatewayResult<String> {
        let content_type = mime_guess::from_path(name).first_or_octet_stream();
        tracing::debug!(bucket = %bucket, name = %name, size = bytes.len(), "Uploading object");

        let req = self
            .client
            .post(self.object_url(bucket, name))
            .header(reqwest::header::CONTENT_TYPE, content_type.as_ref())
            .body(bytes);
        let resp = self.with_auth(req).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(GatewayError::from_status(status, text));
        }

        Ok(self.public_url(bucket, name))
    }

    async fn list_objects(&self, bucket: &str) -> GatewayResult<Vec<StoredAsset>> {
        let url = format!("{}/storage/v1/object/list/{}", self.base_url, bucket);
        let body = serde_json::json!({ "prefix": "", "limit": 200 });

        let req = self.client.post(url).json(&body);
        let resp = self.with_auth(req).send().await?;
        let rows: Vec<ObjectRow> = Self::handle_response(resp).await?;

        tracing::debug!(bucket = %bucket, count = rows.len(), "Listed bucket objects");
        Ok(rows
            .into_iter()
            .map(|row| StoredAsset {
                url: self.public_url(bucket, &row.name),
                name: row.name,
                updated_at: row.updated_at,
            })
            .collect())
    }

    async fn delete_object(&self, bucket: &str, name: &str) -> GatewayResult<()> {
        let req = self.client.delete(self.object_url(bucket, name));
        let resp = self.with_auth(req).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(GatewayError::from_status(status, text));
        }
        Ok(())
    }

    fn public_url(&self, bucket: &str, name: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url, bucket, name
        )
    }
}
