//! Compiled-in sample catalog.
//!
//! Substituted whenever the live backend is unreachable, too slow, or
//! returns an empty product list. Sample rows are never written back to
//! the backend and their ids are only meaningful within a fallback
//! session.

use shared::Product;

/// Products shown when the backend cannot supply any
pub fn sample_catalog() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            name: "Razer Kraken X Gaming Headset".to_string(),
            price: 999.99,
            original_price: 1199.99,
            image_url:
                "https://images.unsplash.com/photo-1544866092-1677b00f868b?w=400&h=400&fit=crop&crop=center"
                    .to_string(),
            category: "audio".to_string(),
            rating: 4.5,
            reviews: 24,
            description: "Premium gaming headset with 7.1 surround sound".to_string(),
            features: vec![
                "7.1 Surround Sound".to_string(),
                "Lightweight Design".to_string(),
                "Noise Cancelling".to_string(),
            ],
            in_stock: true,
            discount: 17,
            hidden_on_home: false,
        },
        Product {
            id: 2,
            name: "Ajazz AK820 Pro Mechanical Keyboard".to_string(),
            price: 1299.99,
            original_price: 1499.99,
            image_url:
                "https://images.unsplash.com/photo-1526738549149-8e07eca6c147?w=400&h=400&fit=crop&crop=center"
                    .to_string(),
            category: "keyboard".to_string(),
            rating: 4.8,
            reviews: 12,
            description: "Customizable TFT screen with hot-swappable switches".to_string(),
            features: vec![
                "TFT Screen".to_string(),
                "Hot-swappable".to_string(),
                "Tri-mode Connectivity".to_string(),
            ],
            in_stock: true,
            discount: 13,
            hidden_on_home: false,
        },
        Product {
            id: 3,
            name: "HKC 27\" QHD Gaming Monitor".to_string(),
            price: 2499.99,
            original_price: 2999.99,
            image_url:
                "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=400&h=400&fit=crop&crop=center"
                    .to_string(),
            category: "monitor".to_string(),
            rating: 4.7,
            reviews: 23,
            description: "180Hz refresh rate with 1ms response time".to_string(),
            features: vec![
                "180Hz Refresh Rate".to_string(),
                "1ms Response Time".to_string(),
                "QHD Resolution".to_string(),
            ],
            in_stock: true,
            discount: 17,
            hidden_on_home: false,
        },
        Product {
            id: 4,
            name: "Ajazz AJ139 V2 Gaming Mouse".to_string(),
            price: 899.99,
            original_price: 1099.99,
            image_url:
                "https://images.unsplash.com/photo-1526170375885-4d8ecf77b99f?w=400&h=400&fit=crop&crop=center"
                    .to_string(),
            category: "mouse".to_string(),
            rating: 4.6,
            reviews: 23,
            description: "18,000 DPI with magnetic charging dock".to_string(),
            features: vec![
                "18,000 DPI".to_string(),
                "Magnetic Dock".to_string(),
                "RGB Lighting".to_string(),
            ],
            in_stock: true,
            discount: 18,
            hidden_on_home: false,
        },
        Product {
            id: 5,
            name: "Premium Gaming Setup Bundle".to_string(),
            price: 3999.99,
            original_price: 4999.99,
            image_url:
                "https://images.unsplash.com/photo-1586953208448-b95a79798f07?w=400&h=400&fit=crop&crop=center"
                    .to_string(),
            category: "accessory".to_string(),
            rating: 4.9,
            reviews: 42,
            description: "Complete gaming setup with all peripherals".to_string(),
            features: vec![
                "Complete Setup".to_string(),
                "Premium Quality".to_string(),
                "Warranty Included".to_string(),
            ],
            in_stock: true,
            discount: 20,
            hidden_on_home: false,
        },
        Product {
            id: 6,
            name: "Wireless Gaming Headset Pro".to_string(),
            price: 1499.99,
            original_price: 1799.99,
            image_url:
                "https://images.unsplash.com/photo-1544866092-1677b00f868b?w=400&h=400&fit=crop&crop=center"
                    .to_string(),
            category: "audio".to_string(),
            rating: 4.4,
            reviews: 18,
            description: "Premium wireless gaming headset with noise cancellation".to_string(),
            features: vec![
                "Wireless".to_string(),
                "Noise Cancelling".to_string(),
                "Long Battery Life".to_string(),
            ],
            in_stock: true,
            discount: 17,
            hidden_on_home: false,
        },
    ]
}
