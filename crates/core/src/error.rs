/// Errors raised while parsing entry model values from raw input.
///
/// Form validation problems are not errors; see [`crate::validation::ValidationErrors`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    #[error("health check rating out of range: {0} (expected 0..=3)")]
    RatingOutOfRange(u64),
    #[error("invalid health check rating: {0:?}")]
    InvalidRating(String),
}

pub type ModelResult<T> = std::result::Result<T, ModelError>;
