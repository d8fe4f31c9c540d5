pub mod asset;
pub mod carousel;
pub mod category;
pub mod hero_image;
pub mod product;
