use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::code::{make_code, DEFAULT_CODE_LEN, DEFAULT_CODE_PREFIX};
use crate::core::unique::{UniqueCodeOptions, DEFAULT_FIELD, DEFAULT_MAX_ATTEMPTS};
use crate::error::ConfigError;

/// Serializable settings for a uniqueness-checked code.
///
/// Every field is optional in JSON and falls back to the defaults of
/// [`UniqueCodeOptions`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodegenConfig {
    /// Record field the code is stored in.
    pub field: String,
    /// Attempt budget.
    pub max_attempts: u32,
    /// Code prefix, uppercased on output.
    pub prefix: String,
    /// Number of random characters after the prefix.
    pub length: usize,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            field: DEFAULT_FIELD.to_string(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            prefix: DEFAULT_CODE_PREFIX.to_string(),
            length: DEFAULT_CODE_LEN,
        }
    }
}

impl CodegenConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read codegen config {}", path.display()))?;
        Self::from_json(&data)
            .with_context(|| format!("failed to load codegen config {}", path.display()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.field.is_empty() {
            return Err(ConfigError::Invalid("field must not be empty".into()));
        }
        if self.length == 0 {
            return Err(ConfigError::Invalid("length must be at least 1".into()));
        }
        Ok(())
    }

    /// Options generating `PREFIX-XXXX` codes with these settings.
    pub fn into_options(self) -> UniqueCodeOptions {
        let CodegenConfig {
            field,
            max_attempts,
            prefix,
            length,
        } = self;
        UniqueCodeOptions::new()
            .field(field)
            .max_attempts(max_attempts)
            .generator(move || make_code(&prefix, length))
    }
}
