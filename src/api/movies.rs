//! Movie Source
//!
//! Simulated search over a fixed catalog.

use crate::models::Movie;
use super::latency;

// ========================
// Catalog
// ========================

const CATALOG: &[(u32, &str, u16, f32, &[&str])] = &[
    (1, "The Shawshank Redemption", 1994, 9.3, &["Drama"]),
    (2, "Spirited Away", 2001, 8.6, &["Animation", "Fantasy"]),
    (3, "The Matrix", 1999, 8.7, &["Action", "Sci-Fi"]),
    (4, "Parasite", 2019, 8.5, &["Thriller", "Drama"]),
    (5, "Alien", 1979, 8.5, &["Horror", "Sci-Fi"]),
    (6, "Amélie", 2001, 8.3, &["Comedy", "Romance"]),
    (7, "Mad Max: Fury Road", 2015, 8.1, &["Action"]),
    (8, "Arrival", 2016, 7.9, &["Drama", "Sci-Fi"]),
    (9, "My Neighbor Totoro", 1988, 8.1, &["Animation", "Family"]),
    (10, "Heat", 1995, 8.3, &["Crime", "Thriller"]),
];

/// All movies in the catalog, none marked favorite
pub fn catalog() -> Vec<Movie> {
    CATALOG
        .iter()
        .map(|(id, title, year, rating, genres)| Movie {
            id: *id,
            title: title.to_string(),
            year: *year,
            poster: Some(format!("/posters/{}.jpg", id)),
            rating: *rating,
            genres: genres.iter().map(|g| g.to_string()).collect(),
            is_favorite: false,
        })
        .collect()
}

/// Case-insensitive title/genre match. A blank query matches everything.
pub fn matches_query(movie: &Movie, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    movie.title.to_lowercase().contains(&query)
        || movie.genres.iter().any(|g| g.to_lowercase().contains(&query))
}

// ========================
// Commands
// ========================

/// Search the catalog after `delay_ms` of simulated latency
pub async fn search_movies(query: &str, delay_ms: u32) -> Vec<Movie> {
    latency(delay_ms).await;
    catalog().into_iter().filter(|m| matches_query(m, query)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_unique() {
        let movies = catalog();
        let mut ids: Vec<u32> = movies.iter().map(|m| m.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), movies.len());
        assert!(movies.iter().all(|m| !m.is_favorite));
    }

    #[test]
    fn test_matches_query() {
        let movies = catalog();
        let matrix = movies.iter().find(|m| m.id == 3).unwrap();

        assert!(matches_query(matrix, ""));
        assert!(matches_query(matrix, "   "));
        assert!(matches_query(matrix, "matrix"));
        assert!(matches_query(matrix, "SCI"));
        assert!(!matches_query(matrix, "totoro"));
    }

    #[test]
    fn test_genre_query_filters_catalog() {
        let hits: Vec<u32> = catalog()
            .into_iter()
            .filter(|m| matches_query(m, "animation"))
            .map(|m| m.id)
            .collect();
        assert_eq!(hits, vec![2, 9]);
    }
}
