//! Product Source

use crate::models::Product;

/// Products shown by the card showcase
pub fn list_products() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            name: "Wireless Headphones".to_string(),
            description: "Over-ear, 30 hour battery, active noise cancelling.".to_string(),
            image: "/products/headphones.jpg".to_string(),
            price_cents: 12999,
            rating: 4,
        },
        Product {
            id: 2,
            name: "Mechanical Keyboard".to_string(),
            description: "Tenkeyless layout with hot-swappable switches.".to_string(),
            image: "/products/keyboard.jpg".to_string(),
            price_cents: 8950,
            rating: 5,
        },
        Product {
            id: 3,
            name: "Desk Lamp".to_string(),
            description: "Dimmable LED with adjustable colour temperature.".to_string(),
            image: "/products/lamp.jpg".to_string(),
            price_cents: 3400,
            rating: 3,
        },
    ]
}
