//! Hero Image Model

use serde::{Deserialize, Serialize};

/// Hero image row as stored in the `hero_images` table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroImage {
    pub id: i64,
    pub image_url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub description: String,
    /// Object name inside the hero bucket, kept for deletion
    pub image_file_name: Option<String>,
    pub button_text: Option<String>,
    pub button_link: Option<String>,
    #[serde(default)]
    pub display_order: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Create hero image payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroImageCreate {
    pub image_url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub description: String,
    pub image_file_name: Option<String>,
    pub button_text: Option<String>,
    pub button_link: Option<String>,
    #[serde(default)]
    pub display_order: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Update hero image payload (partial)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HeroImageUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_order: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

fn default_true() -> bool {
    true
}
