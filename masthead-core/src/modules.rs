//! Per-module registry.
//!
//! # Storage layout
//!
//! ```text
//! <root>/
//!   modules/
//!     <name>.yaml   (one record per installed module)
//! ```
//!
//! Reading an unregistered module is a real error — page assembly must not
//! silently invent a module title.

use std::path::PathBuf;

use crate::error::ConfigError;
use crate::types::{ModuleInfo, ModuleName};

/// Read access to the module registry.
pub trait Modules {
    /// The registry record for `module`.
    fn read(&self, module: &ModuleName) -> Result<ModuleInfo, ConfigError>;
}

/// YAML-file-backed [`Modules`] rooted at an explicit directory.
#[derive(Debug, Clone)]
pub struct ModuleRegistry {
    root: PathBuf,
}

impl ModuleRegistry {
    /// Registry rooted at `root`. No I/O happens until a lookup.
    pub fn open(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `<root>/modules/<name>.yaml` — pure, no I/O.
    pub fn module_path(&self, module: &ModuleName) -> PathBuf {
        self.root.join("modules").join(format!("{}.yaml", module.0))
    }

    /// Atomically save a module record.
    ///
    /// Write flow: serialize → `.yaml.tmp` sibling → rename. The `.tmp`
    /// stays in the target directory (same filesystem).
    pub fn save(&self, info: &ModuleInfo) -> Result<(), ConfigError> {
        let path = self.module_path(&info.name);
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let tmp = path.with_file_name(format!("{}.yaml.tmp", info.name.0));
        let yaml = serde_yaml::to_string(info)?;
        std::fs::write(&tmp, yaml)?;
        std::fs::rename(&tmp, &path)?;
        Ok(())
    }
}

impl Modules for ModuleRegistry {
    fn read(&self, module: &ModuleName) -> Result<ModuleInfo, ConfigError> {
        let path = self.module_path(module);
        if !path.exists() {
            return Err(ConfigError::ModuleNotFound { path });
        }
        let contents = std::fs::read_to_string(&path)?;
        serde_yaml::from_str(&contents).map_err(|e| ConfigError::Parse { path, source: e })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
