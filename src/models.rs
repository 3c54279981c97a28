//! Frontend Models
//!
//! Plain data shown by the demos. Collections of these are owned by a
//! manager component and replaced wholesale on every change.

use serde::{Deserialize, Serialize};

/// Movie shown in the search demo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: u32,
    pub title: String,
    pub year: u16,
    pub poster: Option<String>,
    /// Score out of 10
    pub rating: f32,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub is_favorite: bool,
}

impl Movie {
    /// Copy of this movie with the favorite flag set to `is_favorite`
    pub fn with_favorite(&self, is_favorite: bool) -> Self {
        Self {
            is_favorite,
            ..self.clone()
        }
    }
}

/// Product shown in the compound card demo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub image: String,
    /// Price in cents to keep arithmetic exact
    pub price_cents: u32,
    /// Whole stars, 0..=5
    pub rating: u8,
}
