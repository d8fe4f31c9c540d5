//! Product Model

use serde::{Deserialize, Serialize};

/// Product row as stored in the `products` table
///
/// Prices travel as plain JSON numbers; monetary arithmetic happens in the
/// cart through decimal helpers, never on these fields directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Assigned by the backend, immutable afterwards
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub original_price: f64,
    /// May be empty when no image has been uploaded yet
    #[serde(default)]
    pub image_url: String,
    /// Free-text tag; resolved to [`super::category::Category`] for display
    pub category: String,
    /// 0.0 - 5.0
    pub rating: f64,
    pub reviews: i32,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    pub in_stock: bool,
    /// Percentage, 0-100
    pub discount: i32,
    /// Suppresses the product from all customer-facing listings
    #[serde(default)]
    pub hidden_on_home: bool,
}

/// Create product payload (backend assigns the id)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub price: f64,
    pub original_price: f64,
    #[serde(default)]
    pub image_url: String,
    pub category: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub reviews: i32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default = "default_true")]
    pub in_stock: bool,
    #[serde(default)]
    pub discount: i32,
    #[serde(default)]
    pub hidden_on_home: bool,
}

/// Update product payload (partial, only set fields are written)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviews: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden_on_home: Option<bool>,
}

fn default_true() -> bool {
    true
}
