//! Carousel Slide Model

use serde::{Deserialize, Serialize};

/// Display-ready hero carousel slide derived from a hero image row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselSlide {
    pub id: i64,
    pub image: String,
    pub header: String,
    pub description: String,
    pub link: Option<String>,
}
