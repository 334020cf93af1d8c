//! Scope configuration store.
//!
//! # Storage layout
//!
//! ```text
//! <root>/
//!   config/
//!     system.yaml     (mapping: section name -> key -> value)
//!     <module>.yaml   (module overrides, same shape)
//! ```
//!
//! A missing scope file reads as an empty mapping — absent configuration
//! means "use defaults", never an error. Malformed YAML is an error with
//! the offending path attached.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::types::{ConfigSection, ModuleName};

/// Subsection of the system scope holding the flat site keys
/// (`sitename`, `slogan`, `salt`).
pub const SITE_SECTION: &str = "site";

/// Read access to scoped configuration.
pub trait ConfigSource {
    /// The named subsection of a scope's configuration.
    ///
    /// Empty when the scope or the subsection is absent.
    fn section(&self, scope: &ModuleName, section: &str) -> Result<ConfigSection, ConfigError>;

    /// A flat site-level value, served from the system [`SITE_SECTION`].
    fn scalar(&self, key: &str) -> Result<Option<String>, ConfigError> {
        Ok(self.section(&ModuleName::system(), SITE_SECTION)?.remove(key))
    }
}

/// One scope file: section name -> key -> value.
type ScopeConfig = BTreeMap<String, ConfigSection>;

/// YAML-file-backed [`ConfigSource`] rooted at an explicit directory.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    root: PathBuf,
}

impl ConfigStore {
    /// Store rooted at `root`. No I/O happens until a lookup.
    pub fn open(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `<root>/config/<scope>.yaml` — pure, no I/O.
    pub fn scope_path(&self, scope: &ModuleName) -> PathBuf {
        self.root.join("config").join(format!("{}.yaml", scope.0))
    }

    fn load_scope(&self, scope: &ModuleName) -> Result<ScopeConfig, ConfigError> {
        let path = self.scope_path(scope);
        if !path.exists() {
            return Ok(ScopeConfig::new());
        }
        let contents = std::fs::read_to_string(&path)?;
        serde_yaml::from_str(&contents).map_err(|e| ConfigError::Parse { path, source: e })
    }
}

impl ConfigSource for ConfigStore {
    fn section(&self, scope: &ModuleName, section: &str) -> Result<ConfigSection, ConfigError> {
        Ok(self.load_scope(scope)?.remove(section).unwrap_or_default())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
