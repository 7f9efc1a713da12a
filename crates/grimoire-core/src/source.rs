//! Tolerant loading of the YAML source tables.
//!
//! A missing or empty file is not an error — it yields an empty table,
//! so the process stays available with every source document absent.

use crate::kb::KnowledgeBase;
use anyhow::{Context, Result};
use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// Conventional file names under the mappings directory.
pub const GUIDES_FILE: &str = "guides.yaml";
pub const ROUTES_FILE: &str = "mplus-routes.yaml";
pub const RAID_FILE: &str = "raid.yaml";
pub const MURLOC_FILE: &str = "murloc.yaml";

/// Load one YAML source table. Missing or blank files yield
/// `Value::Null` (an empty table); an unreadable or unparsable file is
/// an error with path context.
pub fn load_yaml(path: &Path) -> Result<Value> {
    if !path.exists() {
        tracing::debug!("source table {} missing, using empty table", path.display());
        return Ok(Value::Null);
    }
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read source table {}", path.display()))?;
    if raw.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_yaml::from_str(&raw)
        .with_context(|| format!("failed to parse source table {}", path.display()))
}

impl KnowledgeBase {
    /// Load the four conventional source tables from a mappings
    /// directory and build the knowledge base. Every table is optional.
    pub fn load_dir(dir: &Path) -> Result<Self> {
        let guides = load_yaml(&dir.join(GUIDES_FILE))?;
        let routes = load_yaml(&dir.join(ROUTES_FILE))?;
        let raid = load_yaml(&dir.join(RAID_FILE))?;
        let murloc = load_yaml(&dir.join(MURLOC_FILE))?;
        Ok(Self::build(&guides, &routes, &raid, &murloc))
    }
}
