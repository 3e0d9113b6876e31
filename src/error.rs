use thiserror::Error;

/// Every generated candidate already existed in the store.
///
/// Recoverable: the caller may retry later or widen the code space.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "cannot generate unique code for {model} after {attempts} attempts (last code: {})",
    .last_code.as_deref().unwrap_or("none")
)]
pub struct GenerationExhausted {
    /// Entity the code was generated for.
    pub model: String,
    /// Number of candidates tried.
    pub attempts: u32,
    /// Last candidate tried, `None` when no attempt was allowed.
    pub last_code: Option<String>,
}

/// Failure of a uniqueness-checked generation.
///
/// Exhaustion is a business outcome; `Store` carries the collaborator's own
/// error unchanged and signals an infrastructure problem.
#[derive(Debug, Error)]
pub enum UniqueCodeError<E>
where
    E: std::error::Error + 'static,
{
    #[error(transparent)]
    Exhausted(#[from] GenerationExhausted),

    #[error(transparent)]
    Store(E),
}

impl<E> UniqueCodeError<E>
where
    E: std::error::Error + 'static,
{
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted(_))
    }

    pub fn exhausted(&self) -> Option<&GenerationExhausted> {
        match self {
            Self::Exhausted(e) => Some(e),
            Self::Store(_) => None,
        }
    }

    /// The store error, if that is what stopped generation.
    pub fn into_store_error(self) -> Option<E> {
        match self {
            Self::Store(e) => Some(e),
            Self::Exhausted(_) => None,
        }
    }
}

/// Invalid codegen configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse codegen config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid codegen config: {0}")]
    Invalid(String),
}
