//! Path management for budgetmgr
//!
//! ## Path Resolution Order
//!
//! 1. `BUDGETMGR_DATA_DIR` environment variable (if set)
//! 2. The platform config directory for `budgetmgr`
//!    (`~/.config/budgetmgr` on Linux, `%APPDATA%\budgetmgr\config` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::{BudgetError, BudgetResult};

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "BUDGETMGR_DATA_DIR";

/// Manages all paths used by budgetmgr
#[derive(Debug, Clone)]
pub struct BudgetPaths {
    base_dir: PathBuf,
}

impl BudgetPaths {
    /// Resolve paths from the environment
    ///
    /// # Errors
    ///
    /// Returns a config error if no home directory can be determined.
    pub fn new() -> BudgetResult<Self> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create BudgetPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (`<base>/data/`)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Default directory for summary exports (`<base>/exports/`)
    pub fn export_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Flat-file transaction store
    pub fn transactions_file(&self) -> PathBuf {
        self.data_dir().join("transactions.json")
    }

    /// Flat-file budget store
    pub fn budgets_file(&self) -> PathBuf {
        self.data_dir().join("budgets.json")
    }

    /// SQLite database
    pub fn database_file(&self) -> PathBuf {
        self.data_dir().join("ledger.db")
    }

    /// Ensure all required directories exist
    ///
    /// Creates the base, data and export directories.
    pub fn ensure_directories(&self) -> BudgetResult<()> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| BudgetError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| BudgetError::Io(format!("Failed to create data directory: {}", e)))?;

        std::fs::create_dir_all(self.export_dir())
            .map_err(|e| BudgetError::Io(format!("Failed to create export directory: {}", e)))?;

        Ok(())
    }
}

fn resolve_default_path() -> BudgetResult<PathBuf> {
    ProjectDirs::from("", "", "budgetmgr")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| BudgetError::Config("Could not determine home directory".into()))
}
