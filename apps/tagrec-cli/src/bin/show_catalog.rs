use tagrec_catalog::sample;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let catalog = sample::sample_catalog()?;
    println!("🛒 tagrec-show-catalog\n======================");
    println!("{} items loaded", catalog.len());
    for item in catalog.all_items() {
        let tags: Vec<&str> = item.tags.iter().map(String::as_str).collect();
        println!(
            "  id={}  {:<26} {:<12} ${:>7.2}  rating {:.1}  tags: {}",
            item.id,
            item.name,
            item.category,
            item.price,
            item.rating,
            tags.join(",")
        );
    }
    Ok(())
}
