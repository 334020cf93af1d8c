//! Form elements: the multi-line text field and the tag input built on it.

use log::debug;

use masthead_core::html::escape;
use masthead_core::i18n::Localizer;
use masthead_core::types::ModuleName;

use crate::error::FormError;
use crate::store::TagStore;

/// Default row count for multi-line fields.
const DEFAULT_ROWS: u32 = 2;

// ---------------------------------------------------------------------------
// TextField
// ---------------------------------------------------------------------------

/// A multi-line text field.
#[derive(Debug, Clone)]
pub struct TextField {
    name: String,
    value: Option<String>,
    label: Option<String>,
    rows: u32,
}

impl TextField {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            label: None,
            rows: DEFAULT_ROWS,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn set_rows(&mut self, rows: u32) {
        self.rows = rows;
    }

    /// The explicitly set value, if any.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = Some(value.into());
    }

    /// The explicitly set label, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = Some(label.into());
    }

    /// Escaped textarea markup with the current value.
    pub fn render(&self) -> String {
        format!(
            "<textarea name=\"{}\" rows=\"{}\">{}</textarea>",
            escape(&self.name),
            self.rows,
            escape(self.value.as_deref().unwrap_or_default()),
        )
    }
}

// ---------------------------------------------------------------------------
// TagInput
// ---------------------------------------------------------------------------

/// Tag input element: a text field whose value mirrors the tag store.
///
/// Only the value- and label-resolution hooks differ from a plain
/// [`TextField`]: without an explicit value, an element keyed to a
/// (module, item) pair resolves its value from the store once and caches
/// it; the label defaults to the localized `"Tags"` string on first
/// access.
pub struct TagInput<'a> {
    field: TextField,
    store: &'a dyn TagStore,
    i18n: &'a dyn Localizer,
    module: Option<ModuleName>,
    item: Option<String>,
    kind: Option<String>,
}

impl<'a> TagInput<'a> {
    pub fn new(name: impl Into<String>, store: &'a dyn TagStore, i18n: &'a dyn Localizer) -> Self {
        Self {
            field: TextField::new(name),
            store,
            i18n,
            module: None,
            item: None,
            kind: None,
        }
    }

    /// Key the element to an existing tagged item.
    pub fn for_item(mut self, module: ModuleName, item: impl Into<String>) -> Self {
        self.module = Some(module);
        self.item = Some(item.into());
        self
    }

    /// Restrict the lookup to one tag type.
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Pre-set the editable value; the store will not be consulted.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.field.set_value(value);
        self
    }

    /// Pre-set the label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.field.set_label(label);
        self
    }

    /// The underlying text field.
    pub fn field(&self) -> &TextField {
        &self.field
    }

    /// Resolve the editable value.
    ///
    /// Without an explicit value, a (module, item) key resolves to the
    /// store's ordered tags joined by single spaces; the result is cached
    /// on the field, an empty answer included. Elements without a key
    /// resolve to the empty string.
    pub fn value(&mut self) -> Result<String, FormError> {
        if self.field.value().is_none() {
            if let (Some(module), Some(item)) = (&self.module, &self.item) {
                let tags = self.store.get(module, item, self.kind.as_deref())?;
                debug!("resolved {} tags for {module}:{item}", tags.len());
                self.field.set_value(tags.join(" "));
            }
        }
        Ok(self.field.value().unwrap_or_default().to_owned())
    }

    /// Resolve the label, defaulting to the localized `"Tags"` string.
    pub fn label(&mut self) -> String {
        if self.field.label().is_none() {
            let label = self.i18n.text("Tags");
            self.field.set_label(label);
        }
        self.field.label().unwrap_or_default().to_owned()
    }

    /// Textarea markup with the resolved value.
    pub fn render(&mut self) -> Result<String, FormError> {
        self.value()?;
        Ok(self.field.render())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
