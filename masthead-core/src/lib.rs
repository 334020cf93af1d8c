//! Masthead core library — configuration store, module registry, locale
//! interface, shared domain types.
//!
//! Public API surface:
//! - [`types`] — newtypes, [`SectionKind`], registry records
//! - [`error`] — [`ConfigError`]
//! - [`config`] — [`ConfigSource`] / [`ConfigStore`]
//! - [`modules`] — [`Modules`] / [`ModuleRegistry`]
//! - [`i18n`] — [`Localizer`] / [`StaticLocale`]
//! - [`html`] — escaping for generated markup

pub mod config;
pub mod error;
pub mod html;
pub mod i18n;
pub mod modules;
pub mod types;

pub use config::{ConfigSource, ConfigStore};
pub use error::ConfigError;
pub use i18n::{Localizer, StaticLocale};
pub use modules::{ModuleRegistry, Modules};
pub use types::{ConfigSection, ModuleInfo, ModuleName, SectionKind};
