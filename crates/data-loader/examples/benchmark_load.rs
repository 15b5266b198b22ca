use data_loader::CandidateStore;
use std::path::Path;
use std::time::Instant;

fn main() {
    let path = Path::new("data/candidates.csv");

    println!("Loading candidate dataset...\n");

    let start = Instant::now();
    let store = CandidateStore::load_from_file(path)
        .expect("Failed to load dataset");
    let elapsed = start.elapsed();

    println!("\n=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Candidates: {}", store.len());
    println!("\nPerformance: {:.0} candidates/second",
             store.len() as f64 / elapsed.as_secs_f64());
}
