//! Scripted in-process gateway backing the integration tests.
//!
//! Behaves like a healthy backend until a test flips one of the
//! switches. Unlike the per-call scripting inside the crate's unit
//! suites, these tests only need a live row store, a response delay,
//! and coarse offline/write toggles.

#![allow(dead_code)]

use async_trait::async_trait;
use grit_client::{GatewayError, GatewayResult, StoreGateway};
use parking_lot::Mutex;
use shared::{
    HeroImage, HeroImageCreate, HeroImageUpdate, Product, ProductCreate, ProductUpdate,
    StoredAsset,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use storefront::{Config, MemoryPrefStore, Storefront};

pub const PASSWORD: &str = "grit-admin";

pub fn product(id: i64, name: &str, price: f64) -> Product {
    Product {
        id,
        name: name.to_string(),
        price,
        original_price: price,
        image_url: format!("https://cdn.test/product-images/{id}.png"),
        category: "keyboard".to_string(),
        rating: 4.5,
        reviews: 10,
        description: format!("{name} description"),
        features: vec![],
        in_stock: true,
        discount: 0,
        hidden_on_home: false,
    }
}

pub fn draft(name: &str, price: f64) -> ProductCreate {
    ProductCreate {
        name: name.to_string(),
        price,
        original_price: price,
        image_url: String::new(),
        category: "accessory".to_string(),
        rating: 0.0,
        reviews: 0,
        description: format!("{name} description"),
        features: vec![],
        in_stock: true,
        discount: 0,
        hidden_on_home: false,
    }
}

/// A storefront wired to the given gateway, prefs held in memory
pub fn session_with(gateway: Arc<TestGateway>) -> Arc<Storefront> {
    let config = Config::with_overrides("test-data", 0, PASSWORD);
    Storefront::new(
        config,
        gateway as Arc<dyn StoreGateway>,
        Arc::new(MemoryPrefStore::new()),
    )
}

#[derive(Default)]
struct GatewayState {
    products: Vec<Product>,
    hero_images: Vec<HeroImage>,
    objects: Vec<StoredAsset>,
    uploads: Vec<(String, String)>,
    removed_objects: Vec<(String, String)>,
    fetch_delay: Duration,
    offline: bool,
    write_fail: bool,
    next_id: i64,
}

pub struct TestGateway {
    state: Mutex<GatewayState>,
    fetch_calls: AtomicUsize,
}

impl TestGateway {
    pub fn seeded(products: Vec<Product>) -> Arc<Self> {
        let next_id = products.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        Arc::new(Self {
            state: Mutex::new(GatewayState {
                products,
                next_id,
                ..GatewayState::default()
            }),
            fetch_calls: AtomicUsize::new(0),
        })
    }

    pub fn set_fetch_delay(&self, delay: Duration) {
        self.state.lock().fetch_delay = delay;
    }

    pub fn set_offline(&self, offline: bool) {
        self.state.lock().offline = offline;
    }

    pub fn set_write_fail(&self, fail: bool) {
        self.state.lock().write_fail = fail;
    }

    pub fn set_hero_images(&self, rows: Vec<HeroImage>) {
        self.state.lock().hero_images = rows;
    }

    /// Backing rows, hidden ones included
    pub fn rows(&self) -> Vec<Product> {
        self.state.lock().products.clone()
    }

    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    pub fn uploads(&self) -> Vec<(String, String)> {
        self.state.lock().uploads.clone()
    }

    pub fn removed_objects(&self) -> Vec<(String, String)> {
        self.state.lock().removed_objects.clone()
    }

    fn read_guard(&self) -> GatewayResult<()> {
        if self.state.lock().offline {
            Err(GatewayError::Internal("backend offline".to_string()))
        } else {
            Ok(())
        }
    }

    fn write_guard(&self) -> GatewayResult<()> {
        if self.state.lock().write_fail {
            Err(GatewayError::Internal("write rejected".to_string()))
        } else {
            Ok(())
        }
    }

    async fn lag(&self) {
        let delay = self.state.lock().fetch_delay;
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl StoreGateway for TestGateway {
    async fn fetch_products(&self) -> GatewayResult<Vec<Product>> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        self.lag().await;
        self.read_guard()?;

        let mut rows: Vec<Product> = self
            .state
            .lock()
            .products
            .iter()
            .filter(|p| !p.hidden_on_home)
            .cloned()
            .collect();
        rows.sort_by_key(|p| p.id);
        Ok(rows)
    }

    async fn fetch_product_by_id(&self, id: i64) -> GatewayResult<Option<Product>> {
        self.lag().await;
        self.read_guard()?;
        Ok(self.state.lock().products.iter().find(|p| p.id == id).cloned())
    }

    async fn fetch_products_by_category(&self, category: &str) -> GatewayResult<Vec<Product>> {
        let rows = self.fetch_products().await?;
        Ok(rows.into_iter().filter(|p| p.category == category).collect())
    }

    async fn fetch_products_admin(&self) -> GatewayResult<Vec<Product>> {
        self.read_guard()?;
        let mut rows = self.state.lock().products.clone();
        rows.sort_by_key(|p| p.id);
        Ok(rows)
    }

    async fn insert_product(&self, draft: ProductCreate) -> GatewayResult<Product> {
        self.write_guard()?;

        let mut state = self.state.lock();
        let id = state.next_id;
        state.next_id += 1;

        let row = Product {
            id,
            name: draft.name,
            price: draft.price,
            original_price: draft.original_price,
            image_url: draft.image_url,
            category: draft.category,
            rating: draft.rating,
            reviews: draft.reviews,
            description: draft.description,
            features: draft.features,
            in_stock: draft.in_stock,
            discount: draft.discount,
            hidden_on_home: draft.hidden_on_home,
        };
        state.products.push(row.clone());
        Ok(row)
    }

    async fn update_product(&self, id: i64, changes: ProductUpdate) -> GatewayResult<Product> {
        self.write_guard()?;

        let mut state = self.state.lock();
        let row = state
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| GatewayError::NotFound(format!("product {id}")))?;

        if let Some(name) = changes.name {
            row.name = name;
        }
        if let Some(price) = changes.price {
            row.price = price;
        }
        if let Some(original_price) = changes.original_price {
            row.original_price = original_price;
        }
        if let Some(image_url) = changes.image_url {
            row.image_url = image_url;
        }
        if let Some(category) = changes.category {
            row.category = category;
        }
        if let Some(rating) = changes.rating {
            row.rating = rating;
        }
        if let Some(reviews) = changes.reviews {
            row.reviews = reviews;
        }
        if let Some(description) = changes.description {
            row.description = description;
        }
        if let Some(features) = changes.features {
            row.features = features;
        }
        if let Some(in_stock) = changes.in_stock {
            row.in_stock = in_stock;
        }
        if let Some(discount) = changes.discount {
            row.discount = discount;
        }
        if let Some(hidden_on_home) = changes.hidden_on_home {
            row.hidden_on_home = hidden_on_home;
        }

        Ok(row.clone())
    }

    async fn delete_product(&self, id: i64) -> GatewayResult<()> {
        self.write_guard()?;
        self.state.lock().products.retain(|p| p.id != id);
        Ok(())
    }

    async fn fetch_hero_images(&self) -> GatewayResult<Vec<HeroImage>> {
        self.read_guard()?;
        let mut rows: Vec<HeroImage> = self
            .state
            .lock()
            .hero_images
            .iter()
            .filter(|h| h.is_active)
            .cloned()
            .collect();
        rows.sort_by_key(|h| h.display_order);
        Ok(rows)
    }

    async fn insert_hero_image(&self, draft: HeroImageCreate) -> GatewayResult<HeroImage> {
        self.write_guard()?;

        let mut state = self.state.lock();
        let id = state.next_id;
        state.next_id += 1;

        let row = HeroImage {
            id,
            image_url: draft.image_url,
            title: draft.title,
            subtitle: draft.subtitle,
            description: draft.description,
            image_file_name: draft.image_file_name,
            button_text: draft.button_text,
            button_link: draft.button_link,
            display_order: draft.display_order,
            is_active: draft.is_active,
            created_at: None,
            updated_at: None,
        };
        state.hero_images.push(row.clone());
        Ok(row)
    }

    async fn update_hero_image(
        &self,
        id: i64,
        changes: HeroImageUpdate,
    ) -> GatewayResult<HeroImage> {
        self.write_guard()?;

        let mut state = self.state.lock();
        let row = state
            .hero_images
            .iter_mut()
            .find(|h| h.id == id)
            .ok_or_else(|| GatewayError::NotFound(format!("hero image {id}")))?;

        if let Some(image_url) = changes.image_url {
            row.image_url = image_url;
        }
        if let Some(title) = changes.title {
            row.title = title;
        }
        if let Some(subtitle) = changes.subtitle {
            row.subtitle = subtitle;
        }
        if let Some(description) = changes.description {
            row.description = description;
        }
        if let Some(button_text) = changes.button_text {
            row.button_text = Some(button_text);
        }
        if let Some(button_link) = changes.button_link {
            row.button_link = Some(button_link);
        }
        if let Some(display_order) = changes.display_order {
            row.display_order = display_order;
        }
        if let Some(is_active) = changes.is_active {
            row.is_active = is_active;
        }

        Ok(row.clone())
    }

    async fn delete_hero_image(&self, id: i64) -> GatewayResult<()> {
        self.write_guard()?;
        self.state.lock().hero_images.retain(|h| h.id != id);
        Ok(())
    }

    async fn upload_object(
        &self,
        bucket: &str,
        name: &str,
        _bytes: Vec<u8>,
    ) -> GatewayResult<String> {
        self.write_guard()?;

        let url = self.public_url(bucket, name);
        let mut state = self.state.lock();
        state.uploads.push((bucket.to_string(), name.to_string()));
        state.objects.push(StoredAsset {
            name: name.to_string(),
            url: url.clone(),
            updated_at: None,
        });
        Ok(url)
    }

    async fn list_objects(&self, bucket: &str) -> GatewayResult<Vec<StoredAsset>> {
        self.read_guard()
            .map_err(|_| GatewayError::Internal(format!("cannot list {bucket}")))?;
        Ok(self.state.lock().objects.clone())
    }

    async fn delete_object(&self, bucket: &str, name: &str) -> GatewayResult<()> {
        self.write_guard()?;

        let mut state = self.state.lock();
        state
            .removed_objects
            .push((bucket.to_string(), name.to_string()));
        state.objects.retain(|o| o.name != name);
        Ok(())
    }

    fn public_url(&self, bucket: &str, name: &str) -> String {
        format!("https://cdn.test/storage/v1/object/public/{bucket}/{name}")
    }
}
