use breed_fetcher::{BreedFetcher, CachingBreedFetcher, StaticBreedFetcher};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let source = StaticBreedFetcher::new()
        .with_breed("hound", ["afghan", "basset", "blood", "english", "ibizan"])
        .with_breed("retriever", ["chesapeake", "curly", "flatcoated", "golden"])
        .with_breed("husky", Vec::<String>::new());
    let fetcher = CachingBreedFetcher::new(source);

    for breed in ["hound", "retriever", "hound", "husky", "unicorn", "hound", "unicorn"] {
        match fetcher.sub_breeds(breed) {
            Ok(sub_breeds) => println!("{breed}: {sub_breeds:?}"),
            Err(err) => println!("{breed}: {err}"),
        }
    }

    println!("Calls made: {}", fetcher.calls_made());
    println!("Cache stats: {:?}", fetcher.stats());

    Ok(())
}
