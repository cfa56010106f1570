use crate::types::*;
use std::path::PathBuf;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Booklet configuration
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BookletOptions {
    // Input
    pub input_file: PathBuf,

    // Output
    pub output_file: PathBuf,

    /// Size of one source page; inferred from the first page when `None`
    pub page_size: Option<PageSize>,

    // Mixed page sizes
    pub dimension_policy: DimensionPolicy,
}

impl BookletOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| ImposeError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ImposeError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if self.input_file.as_os_str().is_empty() {
            return Err(ImposeError::Config("No input file specified".to_string()));
        }

        if self.output_file.as_os_str().is_empty() {
            return Err(ImposeError::Config("No output file specified".to_string()));
        }

        if self.input_file == self.output_file {
            return Err(ImposeError::Config(format!(
                "Output would overwrite the input: {}",
                self.input_file.display()
            )));
        }

        if let Some(size) = self.page_size {
            if !size.is_valid() {
                return Err(ImposeError::Config(format!(
                    "Page size must be positive, got {}",
                    size
                )));
            }
        }

        Ok(())
    }
}
