use crate::{BreedFetcher, Error, Result};
use std::collections::HashMap;

/// In-memory [`BreedFetcher`] backed by a fixed table of breeds.
#[derive(Clone, Debug, Default)]
pub struct StaticBreedFetcher {
    breeds: HashMap<String, Vec<String>>,
}

impl StaticBreedFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `breed` with its sub-breeds, replacing any previous list.
    pub fn with_breed<I, S>(mut self, breed: impl Into<String>, sub_breeds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.breeds.insert(
            breed.into(),
            sub_breeds.into_iter().map(Into::into).collect(),
        );
        self
    }
}

impl<K: Into<String>> FromIterator<(K, Vec<String>)> for StaticBreedFetcher {
    fn from_iter<T: IntoIterator<Item = (K, Vec<String>)>>(iter: T) -> Self {
        Self {
            breeds: iter
                .into_iter()
                .map(|(breed, sub_breeds)| (breed.into(), sub_breeds))
                .collect(),
        }
    }
}

impl BreedFetcher for StaticBreedFetcher {
    fn sub_breeds(&self, breed: &str) -> Result<Vec<String>> {
        self.breeds
            .get(breed)
            .cloned()
            .ok_or_else(|| Error::BreedNotFound(breed.to_string()))
    }
}
