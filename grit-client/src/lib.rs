//! Grit Client - HTTP gateway to the hosted data service
//!
//! Row-oriented CRUD over the `products` and `hero_images` tables plus the
//! storage bucket API. Pure request/response: no retries, no caching, no
//! pagination.

pub mod config;
pub mod error;
pub mod gateway;
pub mod query;

pub use config::GatewayConfig;
pub use error::{GatewayError, GatewayResult};
pub use gateway::{
    ASSETS_BUCKET, HERO_IMAGES_BUCKET, NetworkGateway, PRODUCT_IMAGES_BUCKET, StoreGateway,
};
pub use query::RowQuery;
