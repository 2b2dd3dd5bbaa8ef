use catalog::Dataset;
use std::path::Path;
use std::time::Instant;

fn main() {
    let data_dir = Path::new("data");

    println!("Loading seed data...\n");

    let start = Instant::now();
    let dataset = Dataset::load_from_dir(data_dir).expect("Failed to load seed data");
    let elapsed = start.elapsed();

    println!("=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Techniques: {}", dataset.techniques.len());
    println!("Accounts: {}", dataset.accounts.len());

    for (category, stats) in dataset.techniques.category_stats() {
        println!(
            "  {:<14} {} techniques, {} min total (shortest {} min)",
            category.as_str(),
            stats.technique_count,
            stats.total_minutes,
            stats.shortest_minutes
        );
    }
}
