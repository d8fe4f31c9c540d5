//! Shared data models for the GritGear storefront
//!
//! Wire-format types exchanged with the hosted data service plus the
//! presentation-side category/icon resolution. No I/O lives here.

pub mod models;

pub use models::asset::{AssetKind, StoredAsset};
pub use models::carousel::CarouselSlide;
pub use models::category::{Category, CategoryIcon};
pub use models::hero_image::{HeroImage, HeroImageCreate, HeroImageUpdate};
pub use models::product::{Product, ProductCreate, ProductUpdate};
