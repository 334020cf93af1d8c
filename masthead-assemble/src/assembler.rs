//! Page assembly over the framework render lifecycle.
//!
//! One [`Assembler`] serves exactly one render pass of one response. The
//! lifecycle hooks run in order: [`Assembler::init_strategy`] once per
//! request, [`Assembler::boot_strategy`] once the active module is known,
//! [`Assembler::render_strategy`] before body rendering completes, and
//! [`Assembler::complete_strategy`] over the final document.

use std::collections::BTreeMap;

use log::debug;

use masthead_core::config::ConfigSource;
use masthead_core::i18n::Localizer;
use masthead_core::modules::Modules;
use masthead_core::types::{ConfigSection, ModuleName, SectionKind};

use crate::error::AssembleError;
use crate::placeholder;
use crate::sections::SectionSet;

/// Separator between title segments, module title and site name.
const TITLE_SEPARATOR: &str = " - ";

/// Byte offset of the first case-insensitive (ASCII) occurrence of `needle`.
///
/// A match at offset 0 is a match; the returned offset always sits on a
/// char boundary because the needle starts with an ASCII byte.
fn find_ci(haystack: &str, needle: &str) -> Option<usize> {
    let h = haystack.as_bytes();
    let n = needle.as_bytes();
    if n.is_empty() || h.len() < n.len() {
        return None;
    }
    (0..=h.len() - n.len()).find(|&i| h[i..i + n.len()].eq_ignore_ascii_case(n))
}

/// Deferred-slot assembler for the head and foot regions of a document.
///
/// Collaborators are injected; the assembler holds no ambient state beyond
/// the request-scoped section containers and slot labels.
pub struct Assembler<'a> {
    config: &'a dyn ConfigSource,
    modules: &'a dyn Modules,
    i18n: &'a dyn Localizer,
    sections: SectionSet,
    labels: BTreeMap<SectionKind, String>,
    page_vars: ConfigSection,
}

impl<'a> Assembler<'a> {
    pub fn new(
        config: &'a dyn ConfigSource,
        modules: &'a dyn Modules,
        i18n: &'a dyn Localizer,
    ) -> Self {
        Self {
            config,
            modules,
            i18n,
            sections: SectionSet::default(),
            labels: BTreeMap::new(),
            page_vars: ConfigSection::new(),
        }
    }

    /// The section containers, read-only.
    pub fn sections(&self) -> &SectionSet {
        &self.sections
    }

    /// The section containers, for direct configuration during rendering.
    pub fn sections_mut(&mut self) -> &mut SectionSet {
        &mut self.sections
    }

    /// Slot labels recorded by [`Assembler::anchor`] during this pass.
    pub fn labels(&self) -> &BTreeMap<SectionKind, String> {
        &self.labels
    }

    /// Variables exported to the root view model by
    /// [`Assembler::init_strategy`].
    pub fn page_vars(&self) -> &ConfigSection {
        &self.page_vars
    }

    /// Record a deferred slot for `section` and return its marker, to be
    /// embedded at the call site in the body.
    ///
    /// An empty or unknown section name is a no-op: nothing is recorded,
    /// nothing is configured, and `None` comes back. Anchoring a section
    /// again replaces its previous label with the same marker value.
    pub fn anchor(
        &mut self,
        section: &str,
        indent: Option<usize>,
    ) -> Result<Option<String>, AssembleError> {
        let Some(kind) = SectionKind::from_name(section) else {
            return Ok(None);
        };
        if let Some(indent) = indent {
            self.sections.set_indent(kind, indent);
        }
        let salt = self.config.scalar("salt")?.unwrap_or_default();
        let label = placeholder::marker(&salt, kind);
        debug!("anchored {kind} slot");
        self.labels.insert(kind, label.clone());
        Ok(Some(label))
    }

    /// One-time per-request setup from the system `general` configuration.
    ///
    /// Sets the title separator, queues the configured foot script (raw
    /// markup when it already carries a `<script` tag, a source reference
    /// otherwise), and exports the remaining general values as page
    /// variables with `locale`/`charset` overridden by non-empty answers
    /// from the localization service.
    pub fn init_strategy(&mut self) -> Result<(), AssembleError> {
        self.sections.title.set_separator(TITLE_SEPARATOR);

        let mut general = self.config.section(&ModuleName::system(), "general")?;

        if let Some(foot) = general.remove("foot_script") {
            if !foot.is_empty() {
                if foot.to_lowercase().contains("<script") {
                    self.sections.foot_scripts.append_raw(&foot);
                } else {
                    self.sections.foot_scripts.append_file(&foot);
                }
            }
        }

        let locale = self.i18n.locale();
        if !locale.is_empty() {
            general.insert("locale".to_owned(), locale);
        }
        let charset = self.i18n.charset();
        if !charset.is_empty() {
            general.insert("charset".to_owned(), charset);
        }
        self.page_vars = general;
        Ok(())
    }

    /// Load head metadata for the active module, merged over system
    /// defaults.
    ///
    /// A non-empty module `head_title` overrides the system one. For every
    /// other system meta key the module value wins when non-empty; a
    /// module override that is present but empty suppresses the key
    /// entirely. Keys are appended in sorted order, followed by the six
    /// Dublin Core site-identity properties.
    pub fn boot_strategy(&mut self, module: Option<&ModuleName>) -> Result<(), AssembleError> {
        let mut meta = self.config.section(&ModuleName::system(), "head_meta")?;
        let mut head_title = meta.remove("head_title").unwrap_or_default();

        let mut overrides = ConfigSection::new();
        if let Some(module) = module.filter(|m| !m.is_system()) {
            overrides = self.config.section(module, "head_meta")?;
            if let Some(title) = overrides.remove("head_title") {
                if !title.is_empty() {
                    head_title = title;
                }
            }
        }
        if !head_title.is_empty() {
            self.sections.title.set(head_title);
        }

        for (key, value) in &meta {
            let effective = match overrides.get(key) {
                Some(v) => v.as_str(),
                None => value.as_str(),
            };
            if effective.is_empty() {
                continue;
            }
            self.sections.meta.append_name(key, effective);
        }

        let sitename = self.config.scalar("sitename")?.unwrap_or_default();
        let slogan = self.config.scalar("slogan")?.unwrap_or_default();
        let locale = self.i18n.locale();
        let description = format!("{sitename} - {slogan}");

        let meta = &mut self.sections.meta;
        meta.append_property("dc:title", &sitename, Some(&locale));
        meta.append_property("dc:subject", &slogan, Some(&locale));
        meta.append_property("dc:description", &description, Some(&locale));
        meta.append_property("dc:type", "text", None);
        meta.append_property("dc:publisher", &sitename, None);
        meta.append_property("dc:language", &locale, None);
        Ok(())
    }

    /// Canonicalize the title: the site slogan becomes the sole segment on
    /// bare system pages, then a site-name postfix is established.
    /// Idempotent once a postfix exists.
    pub fn render_strategy(&mut self, module: Option<&ModuleName>) -> Result<(), AssembleError> {
        let separator = self.sections.title.separator().to_owned();

        let is_system = module.map(|m| m.is_system()).unwrap_or(true);
        if is_system && self.sections.title.count() == 0 {
            let slogan = self.config.scalar("slogan")?.unwrap_or_default();
            self.sections.title.set(slogan);
        }

        if self.sections.title.postfix().is_none() {
            let mut postfix = self.config.scalar("sitename")?.unwrap_or_default();
            if let Some(module) = module.filter(|m| !m.is_system()) {
                let info = self.modules.read(module)?;
                postfix = format!("{}{separator}{postfix}", info.title);
            }
            if self.sections.title.count() > 0 {
                postfix = format!("{separator}{postfix}");
            }
            self.sections.title.set_postfix(postfix);
        }
        Ok(())
    }

    /// Merge rendered sections into the final document.
    ///
    /// The five head sections render in fixed order; each recorded slot is
    /// substituted in place (first occurrence of its marker), the rest
    /// accumulate into an implicit block spliced immediately before
    /// `</head>`. The foot script then goes into its slot or immediately
    /// before `</body>`. Both markers are matched case-insensitively; a
    /// match at offset 0 counts. A missing marker skips the splice for
    /// that region only — the content comes back otherwise untouched.
    pub fn complete_strategy(&mut self, content: &str) -> String {
        let mut content = content.to_owned();

        let mut head = String::new();
        for kind in SectionKind::head() {
            let mut rendered = self.sections.render(*kind);
            if !rendered.is_empty() {
                rendered.push('\n');
            }
            if let Some(label) = self.labels.get(kind) {
                debug!("substituting {kind} slot");
                content = content.replacen(label.as_str(), &rendered, 1);
            } else if !rendered.is_empty() {
                head.push_str(&rendered);
                head.push('\n');
            }
        }
        if !head.is_empty() {
            match find_ci(&content, "</head>") {
                Some(pos) => content.insert_str(pos, &format!("\n{head}\n")),
                None => debug!("no </head> marker; implicit head block dropped"),
            }
        }

        let rendered = self.sections.render(SectionKind::FootScript);
        if let Some(label) = self.labels.get(&SectionKind::FootScript) {
            debug!("substituting footScript slot");
            content = content.replacen(label.as_str(), &rendered, 1);
        } else if !rendered.is_empty() {
            match find_ci(&content, "</body>") {
                Some(pos) => content.insert_str(pos, &format!("\n{rendered}\n\n")),
                None => debug!("no </body> marker; foot script dropped"),
            }
        }

        content
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
