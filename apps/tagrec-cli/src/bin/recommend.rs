use std::env;
use std::process;

use tagrec_catalog::{sample, CatalogStore, FileCatalogSource, InMemoryUserDirectory};
use tagrec_core::config::Config;
use tagrec_core::error::Error;
use tagrec_core::traits::CatalogSource;
use tagrec_match::{Recommendations, Recommender};

/// Prefer JSON feeds named in config (`catalog.items_path` /
/// `catalog.users_path`); fall back to the built-in sample dataset.
fn load_data() -> anyhow::Result<(CatalogStore, InMemoryUserDirectory)> {
    if let Ok(config) = Config::load() {
        if let Ok(source) = FileCatalogSource::from_config(&config) {
            let catalog = CatalogStore::load(source.load_items()?)?;
            let directory = InMemoryUserDirectory::load(source.load_users()?)?;
            return Ok((catalog, directory));
        }
    }
    tracing::debug!("no catalog paths configured, using built-in sample data");
    Ok((sample::sample_catalog()?, sample::sample_directory()?))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <username>", args[0]);
        eprintln!("Example: {} Kishore", args[0]);
        process::exit(1);
    }
    let username = &args[1];

    let (catalog, directory) = load_data()?;
    let recommender = Recommender::new(directory, catalog);

    println!("🛒 tagrec-recommend\n==================");
    println!("User: {}", username);
    match recommender.get_recommendations(username) {
        Ok(Recommendations::Ranked(ids)) => {
            println!("\n🎯 {} recommendations:", ids.len());
            for (i, id) in ids.iter().enumerate() {
                let item = recommender.catalog().get_by_id(*id)?;
                println!(
                    "  {}. {} (id={}) - ${:.2}, rating {:.1}",
                    i + 1,
                    item.name,
                    item.id,
                    item.price,
                    item.rating
                );
            }
        }
        Ok(Recommendations::NoMatches) => {
            println!("\nNo new recommendations available.");
        }
        Err(Error::UserNotFound(name)) => {
            eprintln!("Username '{}' not found. Please enter a valid username.", name);
            process::exit(1);
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
