//! Short, human-legible codes for business records.
//!
//! Builders produce slugs, SKUs, bill and session codes from a secure random
//! source. [`ensure_unique_code`] retries a builder until a [`RecordStore`]
//! reports the candidate as unused.
//!
//! ```no_run
//! use recordcode::{ensure_unique_code, make_bill_code_today, MemoryStore, UniqueCodeOptions};
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let bills = MemoryStore::new("Bill");
//! let code = ensure_unique_code(
//!     &bills,
//!     UniqueCodeOptions::new().generator(make_bill_code_today),
//! )
//! .await?;
//! bills.insert_field("code", code);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod core;
pub mod error;

pub use crate::config::CodegenConfig;
pub use crate::core::code::{
    make_bill_code, make_bill_code_today, make_code, make_session_code, make_session_code_today,
    make_sku_from_name, DEFAULT_CODE_LEN, DEFAULT_CODE_PREFIX, DEFAULT_SKU_LEN,
};
pub use crate::core::format::{pad, to_slug, yyyymmdd};
pub use crate::core::random::{
    random_bytes, random_digits, random_string, Codegen, RandomSource, DEFAULT_DIGITS_LEN,
    DEFAULT_RANDOM_BYTES, DEFAULT_STRING_LEN,
};
pub use crate::core::store::{Filter, MemoryStore, RecordStore};
pub use crate::core::unique::{
    ensure_unique_code, CodeGeneratorFn, UniqueCodeOptions, DEFAULT_FIELD, DEFAULT_MAX_ATTEMPTS,
};
pub use crate::error::{ConfigError, GenerationExhausted, UniqueCodeError};
