//! tagrec-catalog
//!
//! Validated, immutable catalog storage plus the in-memory user directory
//! and the JSON loaders that feed them. See `sample` for the built-in
//! reference dataset used by demos and tests.

pub mod directory;
pub mod loader;
pub mod sample;
pub mod store;

pub use directory::InMemoryUserDirectory;
pub use loader::FileCatalogSource;
pub use store::CatalogStore;
