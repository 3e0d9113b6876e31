use std::fmt;

use serde_json::Value;
use tracing::{debug, trace, warn};

use super::code::{make_code, DEFAULT_CODE_LEN, DEFAULT_CODE_PREFIX};
use super::store::{Filter, RecordStore};
use crate::error::{GenerationExhausted, UniqueCodeError};

/// Field the candidate code is written to when none is given.
pub const DEFAULT_FIELD: &str = "code";
/// Attempt budget when none is given.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;

/// Produces one candidate code per call.
pub type CodeGeneratorFn = Box<dyn FnMut() -> String + Send>;

/// Options for [`ensure_unique_code`].
///
/// Defaults: field `"code"`, an empty base filter, 10 attempts, and
/// candidates from `make_code("CODE", 6)`.
pub struct UniqueCodeOptions {
    /// Record field the code is stored in.
    pub field: String,
    /// Filter every existence check is scoped to, e.g. a branch id.
    pub base_filter: Filter,
    pub max_attempts: u32,
    generator: CodeGeneratorFn,
}

impl Default for UniqueCodeOptions {
    fn default() -> Self {
        Self {
            field: DEFAULT_FIELD.to_string(),
            base_filter: Filter::new(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            generator: Box::new(|| make_code(DEFAULT_CODE_PREFIX, DEFAULT_CODE_LEN)),
        }
    }
}

impl UniqueCodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.field = field.into();
        self
    }

    pub fn base_filter(mut self, filter: Filter) -> Self {
        self.base_filter = filter;
        self
    }

    pub fn max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn generator(mut self, generator: impl FnMut() -> String + Send + 'static) -> Self {
        self.generator = Box::new(generator);
        self
    }
}

impl fmt::Debug for UniqueCodeOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UniqueCodeOptions")
            .field("field", &self.field)
            .field("base_filter", &self.base_filter)
            .field("max_attempts", &self.max_attempts)
            .finish_non_exhaustive()
    }
}

/// Generate codes until one is absent from `store`.
///
/// Each candidate is checked with `base_filter` plus `field = candidate`;
/// a candidate value overrides a base entry under the same key. Checks run
/// one at a time. Only collisions consume an attempt: a store error is
/// returned at once as [`UniqueCodeError::Store`] and nothing is retried.
///
/// The returned code was free when checked. Two concurrent callers can still
/// both receive the same code, so the store needs its own unique index.
pub async fn ensure_unique_code<S>(
    store: &S,
    options: UniqueCodeOptions,
) -> Result<String, UniqueCodeError<S::Error>>
where
    S: RecordStore + ?Sized,
{
    let UniqueCodeOptions {
        field,
        base_filter,
        max_attempts,
        mut generator,
    } = options;
    let model = store.model_name();
    let mut last_code = None;

    for attempt in 1..=max_attempts {
        let code = generator();

        let mut filter = base_filter.clone();
        filter.insert(field.clone(), Value::String(code.clone()));

        if !store.exists(&filter).await.map_err(UniqueCodeError::Store)? {
            trace!(model, field = %field, attempt, code = %code, "unique code found");
            return Ok(code);
        }

        debug!(model, field = %field, attempt, code = %code, "code collision");
        last_code = Some(code);
    }

    let err = GenerationExhausted {
        model: model.to_string(),
        attempts: max_attempts,
        last_code,
    };
    warn!(model, field = %field, attempts = max_attempts, "{err}");
    Err(err.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::MemoryStore;

    #[test]
    fn default_options() {
        let mut options = UniqueCodeOptions::default();
        assert_eq!(options.field, "code");
        assert!(options.base_filter.is_empty());
        assert_eq!(options.max_attempts, 10);

        let code = (options.generator)();
        assert!(code.starts_with("CODE-"));
        assert_eq!(code.len(), 11);
    }

    #[test]
    fn debug_skips_generator() {
        let dbg = format!("{:?}", UniqueCodeOptions::new().field("sku"));
        assert!(dbg.contains("\"sku\""));
        assert!(dbg.contains(".."));
    }

    #[tokio::test]
    async fn default_generator_against_empty_store() {
        let store = MemoryStore::new("Order");
        let code = ensure_unique_code(&store, UniqueCodeOptions::default())
            .await
            .unwrap();
        assert!(code.starts_with("CODE-"));
    }

    #[tokio::test]
    async fn zero_budget_is_exhausted_without_checks() {
        let store = MemoryStore::new("Order");
        let err = ensure_unique_code(&store, UniqueCodeOptions::new().max_attempts(0))
            .await
            .unwrap_err();
        let exhausted = err.exhausted().unwrap();
        assert_eq!(exhausted.model, "Order");
        assert_eq!(exhausted.attempts, 0);
        assert_eq!(exhausted.last_code, None);
    }

    #[tokio::test]
    async fn candidate_overrides_base_filter_field() {
        let store = MemoryStore::new("Order");
        store.insert_field("code", "TAKEN");

        let mut base = Filter::new();
        base.insert("code".into(), Value::String("TAKEN".into()));

        let code = ensure_unique_code(
            &store,
            UniqueCodeOptions::new()
                .base_filter(base)
                .generator(|| "FREE".to_string()),
        )
        .await
        .unwrap();
        assert_eq!(code, "FREE");
    }
}
