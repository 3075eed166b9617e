//! Configuration loading and management

use crate::core::error::Result;
use crate::schema;
use serde::{Deserialize, Serialize};

/// Where the ledger lives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Spreadsheet holding both tables
    pub spreadsheet: String,

    /// Table with the account rows
    pub users_table: String,

    /// Table with the invoice rows
    pub invoices_table: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            spreadsheet: "QuanLyGiatUi_HaiAu".to_string(),
            users_table: schema::USERS_TABLE.to_string(),
            invoices_table: schema::INVOICES_TABLE.to_string(),
        }
    }
}

/// Complete configuration for the ledger service
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WashbookConfig {
    pub store: StoreConfig,
}

impl WashbookConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }
}
