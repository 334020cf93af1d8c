//! # masthead-assemble
//!
//! Deferred-slot assembly of the `<head>` and foot regions of an HTML
//! response. Section content collected during body rendering is merged
//! into the final document at completion time — into anchored slots where
//! the template placed them, immediately before `</head>`/`</body>`
//! otherwise.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use masthead_assemble::Assembler;
//! use masthead_core::{ConfigStore, ModuleRegistry, StaticLocale};
//!
//! fn assemble(body: &str) -> Result<String, masthead_assemble::AssembleError> {
//!     let config = ConfigStore::open("/var/www/site");
//!     let modules = ModuleRegistry::open("/var/www/site");
//!     let i18n = StaticLocale::new("en", "UTF-8");
//!
//!     let mut assembler = Assembler::new(&config, &modules, &i18n);
//!     assembler.init_strategy()?;
//!     assembler.boot_strategy(None)?;
//!     assembler.render_strategy(None)?;
//!     Ok(assembler.complete_strategy(body))
//! }
//! ```

pub mod assembler;
pub mod error;
pub mod placeholder;
pub mod sections;

pub use assembler::Assembler;
pub use error::AssembleError;
pub use sections::{HeadLink, HeadMeta, HeadStyle, HeadTitle, Scripts, SectionSet};
