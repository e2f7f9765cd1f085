/// Errors produced by a [`BreedFetcher`](crate::BreedFetcher).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Breed not found: {0}")]
    BreedNotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breed_not_found_display() {
        let error = Error::BreedNotFound("unicorn".to_string());
        assert_eq!(error.to_string(), "Breed not found: unicorn");
    }
}
