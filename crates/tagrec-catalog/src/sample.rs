//! Built-in reference dataset: 8 items and 5 users.
//!
//! Used by the demo binaries and the integration tests; a deployment
//! would normally point `FileCatalogSource` at real JSON feeds instead.

use tagrec_core::error::Result;
use tagrec_core::normalize::parse_tags;
use tagrec_core::types::{Item, UserRecord};

use crate::{CatalogStore, InMemoryUserDirectory};

fn item(id: u32, name: &str, category: &str, tags: &str, price: f64, rating: f64) -> Item {
    Item {
        id,
        name: name.to_string(),
        category: category.to_string(),
        tags: parse_tags(tags),
        price,
        rating,
    }
}

pub fn sample_items() -> Vec<Item> {
    vec![
        item(101, "Smartphone", "Electronics", "electronics,mobile", 699.99, 4.5),
        item(102, "Laptop", "Electronics", "electronics,laptop", 999.99, 4.7),
        item(103, "T-shirt", "Clothing", "clothing,t-shirt", 19.99, 4.0),
        item(104, "Jeans", "Clothing", "clothing,pants", 49.99, 4.2),
        item(105, "Book: Python Programming", "Books", "books,programming", 29.99, 4.8),
        item(106, "Toy Car", "Toys", "toys,kids", 14.99, 3.9),
        item(107, "Basketball", "Sports", "sports,basketball", 29.99, 4.5),
        item(108, "Watch", "Accessories", "accessories,watches", 199.99, 4.1),
    ]
}

fn user(
    username: &str,
    age: u32,
    gender: &str,
    location: &str,
    preferences: &str,
    purchases: &[&str],
) -> UserRecord {
    UserRecord {
        username: username.to_string(),
        age,
        gender: gender.to_string(),
        location: location.to_string(),
        preferences: preferences.to_string(),
        purchase_history: purchases.iter().map(|p| (*p).to_string()).collect(),
    }
}

pub fn sample_users() -> Vec<UserRecord> {
    vec![
        user("Kishore", 25, "M", "Chennai", "electronics,clothing", &["Smartphone", "Laptop"]),
        user("John", 30, "F", "Mumbai", "books,toys", &["Book: Python Programming"]),
        user("Karthik", 22, "M", "Kolkata", "sports,electronics", &["Basketball"]),
        user("Tilak", 28, "F", "Hyderabad", "clothing,accessories", &["T-shirt", "Jeans"]),
        user("Dhanush", 35, "M", "Bangalore", "books,electronics", &["Toy Car", "Watch"]),
    ]
}

pub fn sample_catalog() -> Result<CatalogStore> {
    CatalogStore::load(sample_items())
}

pub fn sample_directory() -> Result<InMemoryUserDirectory> {
    InMemoryUserDirectory::load(sample_users())
}
