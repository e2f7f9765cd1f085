pub mod cache;
mod error;
mod local;


use std::sync::Arc;

pub use cache::{CacheStats, CachingBreedFetcher};
pub use error::{Error, Result};
pub use local::StaticBreedFetcher;

/// A source of sub-breed names, keyed by breed name.
///
/// Breed names are matched exactly; implementations must not normalize case
/// or whitespace. An empty list is a valid answer and is distinct from
/// [`Error::BreedNotFound`].
pub trait BreedFetcher {
    /// Fetch the sub-breeds of `breed`.
    fn sub_breeds(&self, breed: &str) -> Result<Vec<String>>;
}

impl<T: BreedFetcher + ?Sized> BreedFetcher for &T {
    fn sub_breeds(&self, breed: &str) -> Result<Vec<String>> {
        (**self).sub_breeds(breed)
    }
}

impl<T: BreedFetcher + ?Sized> BreedFetcher for Box<T> {
    fn sub_breeds(&self, breed: &str) -> Result<Vec<String>> {
        (**self).sub_breeds(breed)
    }
}

impl<T: BreedFetcher + ?Sized> BreedFetcher for Arc<T> {
    fn sub_breeds(&self, breed: &str) -> Result<Vec<String>> {
        (**self).sub_breeds(breed)
    }
}
