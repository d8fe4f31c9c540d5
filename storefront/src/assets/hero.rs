//! Hero carousel derivation.

use shared::{CarouselSlide, HeroImage};

/// Carousel length cap
pub const MAX_SLIDES: usize = 5;

const DEFAULT_HEADER: &str = "Premium Tech Gear";
const DEFAULT_DESCRIPTION: &str = "Discover the latest in gaming and professional equipment.";

/// Slides shown when no usable hero rows exist or the fetch failed
pub fn default_slides() -> Vec<CarouselSlide> {
    vec![
        CarouselSlide {
            id: 1,
            image: "/products/keyboard.png".to_string(),
            header: "Premium Gaming Keyboards".to_string(),
            description: "Experience ultimate precision and performance with our collection of high-end mechanical keyboards designed for gamers and professionals.".to_string(),
            link: Some("/product/1".to_string()),
        },
        CarouselSlide {
            id: 2,
            image: "/products/mouse.png".to_string(),
            header: "Ergonomic Gaming Mice".to_string(),
            description: "Dominate your games with precision-engineered mice featuring advanced sensors and customizable RGB lighting.".to_string(),
            link: Some("/product/2".to_string()),
        },
        CarouselSlide {
            id: 3,
            image: "/products/headphones.png".to_string(),
            header: "Immersive Audio Experience".to_string(),
            description: "Crystal clear sound and premium comfort with our selection of gaming headsets and professional audio equipment.".to_string(),
            link: Some("/product/3".to_string()),
        },
        CarouselSlide {
            id: 4,
            image: "/products/speaker.png".to_string(),
            header: "Studio-Quality Speakers".to_string(),
            description: "Transform your setup with powerful speakers that deliver rich, detailed sound for music, gaming, and entertainment.".to_string(),
            link: Some("/product/4".to_string()),
        },
    ]
}

/// Map active hero rows to carousel slides.
///
/// Rows with a blank title are dropped and at most [`MAX_SLIDES`]
/// survive. When nothing usable remains the default slides take over, so
/// the carousel is never empty.
pub fn carousel_slides(rows: &[HeroImage]) -> Vec<CarouselSlide> {
    let slides: Vec<CarouselSlide> = rows
        .iter()
        .filter(|row| row.is_active)
        .filter(|row| !row.title.trim().is_empty())
        .take(MAX_SLIDES)
        .map(slide_from_row)
        .collect();

    if slides.is_empty() {
        default_slides()
    } else {
        slides
    }
}

fn slide_from_row(row: &HeroImage) -> CarouselSlide {
    let header = if row.title.is_empty() {
        DEFAULT_HEADER.to_string()
    } else {
        row.title.clone()
    };

    let description = if !row.description.is_empty() {
        row.description.clone()
    } else if !row.subtitle.is_empty() {
        row.subtitle.clone()
    } else {
        DEFAULT_DESCRIPTION.to_string()
    };

    CarouselSlide {
        id: row.id,
        image: row.image_url.clone(),
        header,
        description,
        link: row.button_link.clone(),
    }
}
