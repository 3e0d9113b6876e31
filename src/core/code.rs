//! Domain-shaped code builders.
//!
//! Each builder combines the random primitives of [`Codegen`] with the
//! formatters in `core::format`:
//!
//! | builder                | shape                  |
//! |------------------------|------------------------|
//! | `make_sku_from_name`   | `CAFEPHOX7K2Q`         |
//! | `make_bill_code`       | `BILL-20251022-4821`   |
//! | `make_session_code`    | `SES-20251022-AB12`    |
//! | `make_code`            | `CODE-9F3KQZ`          |

use chrono::{Datelike, Local};

use super::format::{to_slug, yyyymmdd};
use super::random::{Codegen, RandomSource};

/// Default total length of a SKU.
pub const DEFAULT_SKU_LEN: usize = 12;
/// Default prefix for generic codes.
pub const DEFAULT_CODE_PREFIX: &str = "CODE";
/// Default length of the random part of a generic code.
pub const DEFAULT_CODE_LEN: usize = 6;

/// Head used when the name has no sluggable characters.
const SKU_FALLBACK_HEAD: &str = "SKU";
/// Shortest head taken from the name.
const SKU_MIN_HEAD: usize = 3;
/// Room reserved for the random tail when the name is long.
const SKU_MIN_TAIL: usize = 3;
const BILL_DIGITS: usize = 4;
const SESSION_CHARS: usize = 4;

impl<R: RandomSource> Codegen<R> {
    /// Build an uppercase SKU of `max` characters from a product name.
    ///
    /// The head is the hyphen-free slug of `name`, between 3 and `max - 3`
    /// characters long (`"SKU"` if the slug is empty); the rest is a random
    /// alphanumeric tail. When `max` is below the 3-character head floor the
    /// result is the head alone and is longer than `max`.
    pub fn make_sku_from_name(&mut self, name: &str, max: usize) -> String {
        let base = to_slug(name).replace('-', "");
        let available = if base.is_empty() {
            SKU_MIN_HEAD
        } else {
            base.len()
        };
        let head_len = SKU_MIN_HEAD.max(max.saturating_sub(SKU_MIN_TAIL).min(available));

        let source = if base.is_empty() {
            SKU_FALLBACK_HEAD
        } else {
            base.as_str()
        };
        // slugs are pure ASCII, so byte slicing stays on char boundaries
        let head = &source[..head_len.min(source.len())];
        let tail = self.random_string(max.saturating_sub(head.len()));

        format!("{head}{tail}").to_ascii_uppercase()
    }

    /// `BILL-YYYYMMDD-DDDD`.
    pub fn make_bill_code<D: Datelike>(&mut self, date: &D) -> String {
        format!(
            "BILL-{}-{}",
            yyyymmdd(date),
            self.random_digits(BILL_DIGITS)
        )
    }

    /// `SES-YYYYMMDD-XXXX` with an uppercase alphanumeric tail.
    pub fn make_session_code<D: Datelike>(&mut self, date: &D) -> String {
        format!(
            "SES-{}-{}",
            yyyymmdd(date),
            self.random_string(SESSION_CHARS).to_ascii_uppercase()
        )
    }

    /// `PREFIX-XXXXXX`: the uppercased prefix and `len` uppercase
    /// alphanumeric characters.
    pub fn make_code(&mut self, prefix: &str, len: usize) -> String {
        format!(
            "{}-{}",
            prefix.to_uppercase(),
            self.random_string(len).to_ascii_uppercase()
        )
    }
}

pub fn make_sku_from_name(name: &str, max: usize) -> String {
    Codegen::new().make_sku_from_name(name, max)
}

pub fn make_bill_code<D: Datelike>(date: &D) -> String {
    Codegen::new().make_bill_code(date)
}

/// Bill code for today's local date.
pub fn make_bill_code_today() -> String {
    make_bill_code(&Local::now())
}

pub fn make_session_code<D: Datelike>(date: &D) -> String {
    Codegen::new().make_session_code(date)
}

/// Session code for today's local date.
pub fn make_session_code_today() -> String {
    make_session_code(&Local::now())
}

pub fn make_code(prefix: &str, len: usize) -> String {
    Codegen::new().make_code(prefix, len)
}
