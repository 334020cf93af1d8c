//! Section containers for head/foot markup.
//!
//! Each container collects entries during body rendering and renders to a
//! string at completion time. Rendering is entry-per-line; the configured
//! indent is applied to every emitted line. All state is request-scoped and
//! never shared across render passes.

use masthead_core::html::escape;
use masthead_core::types::SectionKind;

/// Prefix every line of every entry with `indent` spaces and join with
/// newlines. Empty entries render nothing.
fn render_entries(indent: usize, entries: &[String]) -> String {
    if entries.is_empty() {
        return String::new();
    }
    let pad = " ".repeat(indent);
    entries
        .iter()
        .flat_map(|entry| entry.lines())
        .map(|line| format!("{pad}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

// ---------------------------------------------------------------------------
// HeadTitle
// ---------------------------------------------------------------------------

/// Document title: ordered segments, a separator, an optional postfix.
///
/// The postfix is appended verbatim after the joined segments — callers
/// that want a separator in front of it bake it into the postfix.
#[derive(Debug, Clone, Default)]
pub struct HeadTitle {
    segments: Vec<String>,
    separator: String,
    postfix: Option<String>,
    indent: usize,
}

impl HeadTitle {
    pub fn set_separator(&mut self, separator: impl Into<String>) {
        self.separator = separator.into();
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Number of title segments set so far.
    pub fn count(&self) -> usize {
        self.segments.len()
    }

    /// Replace all segments with a single one.
    pub fn set(&mut self, title: impl Into<String>) {
        self.segments = vec![title.into()];
    }

    /// Append a segment.
    pub fn append(&mut self, segment: impl Into<String>) {
        self.segments.push(segment.into());
    }

    pub fn postfix(&self) -> Option<&str> {
        self.postfix.as_deref()
    }

    pub fn set_postfix(&mut self, postfix: impl Into<String>) {
        self.postfix = Some(postfix.into());
    }

    pub fn set_indent(&mut self, indent: usize) {
        self.indent = indent;
    }

    /// One `<title>` line, or empty when nothing was set.
    pub fn render(&self) -> String {
        if self.segments.is_empty() && self.postfix.is_none() {
            return String::new();
        }
        let joined = self
            .segments
            .iter()
            .map(|s| escape(s))
            .collect::<Vec<_>>()
            .join(&self.separator);
        let postfix = self.postfix.as_deref().map(escape).unwrap_or_default();
        render_entries(self.indent, &[format!("<title>{joined}{postfix}</title>")])
    }
}

// ---------------------------------------------------------------------------
// HeadMeta
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MetaKey {
    Name,
    Property,
}

/// One `<meta />` entry.
#[derive(Debug, Clone)]
struct MetaEntry {
    key: MetaKey,
    ident: String,
    content: String,
    lang: Option<String>,
}

/// Named and property meta entries, in append order.
#[derive(Debug, Clone, Default)]
pub struct HeadMeta {
    entries: Vec<MetaEntry>,
    indent: usize,
}

impl HeadMeta {
    /// Append a `name`-keyed meta entry.
    pub fn append_name(&mut self, name: &str, content: &str) {
        self.entries.push(MetaEntry {
            key: MetaKey::Name,
            ident: name.to_owned(),
            content: content.to_owned(),
            lang: None,
        });
    }

    /// Append a `property`-keyed meta entry, optionally language-tagged.
    pub fn append_property(&mut self, property: &str, content: &str, lang: Option<&str>) {
        self.entries.push(MetaEntry {
            key: MetaKey::Property,
            ident: property.to_owned(),
            content: content.to_owned(),
            lang: lang.map(str::to_owned),
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn set_indent(&mut self, indent: usize) {
        self.indent = indent;
    }

    pub fn render(&self) -> String {
        let lines: Vec<String> = self
            .entries
            .iter()
            .map(|entry| {
                let key = match entry.key {
                    MetaKey::Name => "name",
                    MetaKey::Property => "property",
                };
                let lang = entry
                    .lang
                    .as_deref()
                    .map(|l| format!(" lang=\"{}\"", escape(l)))
                    .unwrap_or_default();
                format!(
                    "<meta {key}=\"{}\" content=\"{}\"{lang} />",
                    escape(&entry.ident),
                    escape(&entry.content),
                )
            })
            .collect();
        render_entries(self.indent, &lines)
    }
}

// ---------------------------------------------------------------------------
// HeadLink
// ---------------------------------------------------------------------------

/// One `<link />` entry.
#[derive(Debug, Clone)]
struct LinkEntry {
    rel: String,
    href: String,
    mime: Option<String>,
}

/// Ordered link entries.
#[derive(Debug, Clone, Default)]
pub struct HeadLink {
    entries: Vec<LinkEntry>,
    indent: usize,
}

impl HeadLink {
    /// Append a stylesheet reference.
    pub fn append_stylesheet(&mut self, href: &str) {
        self.entries.push(LinkEntry {
            rel: "stylesheet".to_owned(),
            href: href.to_owned(),
            mime: Some("text/css".to_owned()),
        });
    }

    /// Append a generic link entry.
    pub fn append(&mut self, rel: &str, href: &str) {
        self.entries.push(LinkEntry {
            rel: rel.to_owned(),
            href: href.to_owned(),
            mime: None,
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn set_indent(&mut self, indent: usize) {
        self.indent = indent;
    }

    pub fn render(&self) -> String {
        let lines: Vec<String> = self
            .entries
            .iter()
            .map(|entry| {
                let mime = entry
                    .mime
                    .as_deref()
                    .map(|m| format!(" type=\"{}\"", escape(m)))
                    .unwrap_or_default();
                format!(
                    "<link rel=\"{}\" href=\"{}\"{mime} />",
                    escape(&entry.rel),
                    escape(&entry.href),
                )
            })
            .collect();
        render_entries(self.indent, &lines)
    }
}

// ---------------------------------------------------------------------------
// HeadStyle
// ---------------------------------------------------------------------------

/// Ordered inline CSS blocks.
#[derive(Debug, Clone, Default)]
pub struct HeadStyle {
    blocks: Vec<String>,
    indent: usize,
}

impl HeadStyle {
    /// Append a CSS block; the text is emitted unescaped.
    pub fn append(&mut self, css: &str) {
        self.blocks.push(css.to_owned());
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn set_indent(&mut self, indent: usize) {
        self.indent = indent;
    }

    pub fn render(&self) -> String {
        let entries: Vec<String> = self
            .blocks
            .iter()
            .map(|css| format!("<style>\n{css}\n</style>"))
            .collect();
        render_entries(self.indent, &entries)
    }
}

// ---------------------------------------------------------------------------
// Scripts
// ---------------------------------------------------------------------------

/// One script entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptEntry {
    /// External script reference.
    File { src: String },
    /// Inline code block, emitted unescaped.
    Inline { code: String },
    /// Pre-rendered markup, emitted byte-for-byte.
    Raw { markup: String },
}

/// Ordered script entries for one region of the document.
#[derive(Debug, Clone, Default)]
pub struct Scripts {
    entries: Vec<ScriptEntry>,
    indent: usize,
}

impl Scripts {
    /// Append an external script reference.
    pub fn append_file(&mut self, src: &str) {
        self.entries.push(ScriptEntry::File {
            src: src.to_owned(),
        });
    }

    /// Append an inline code block.
    pub fn append_script(&mut self, code: &str) {
        self.entries.push(ScriptEntry::Inline {
            code: code.to_owned(),
        });
    }

    /// Append pre-rendered markup verbatim.
    pub fn append_raw(&mut self, markup: &str) {
        self.entries.push(ScriptEntry::Raw {
            markup: markup.to_owned(),
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn set_indent(&mut self, indent: usize) {
        self.indent = indent;
    }

    pub fn render(&self) -> String {
        let entries: Vec<String> = self
            .entries
            .iter()
            .map(|entry| match entry {
                ScriptEntry::File { src } => {
                    format!("<script src=\"{}\"></script>", escape(src))
                }
                ScriptEntry::Inline { code } => format!("<script>\n{code}\n</script>"),
                ScriptEntry::Raw { markup } => markup.clone(),
            })
            .collect();
        render_entries(self.indent, &entries)
    }
}

// ---------------------------------------------------------------------------
// SectionSet
// ---------------------------------------------------------------------------

/// All six section containers for one render pass.
#[derive(Debug, Clone, Default)]
pub struct SectionSet {
    pub title: HeadTitle,
    pub meta: HeadMeta,
    pub links: HeadLink,
    pub styles: HeadStyle,
    pub scripts: Scripts,
    pub foot_scripts: Scripts,
}

impl SectionSet {
    /// Render one section; empty string when it has no content.
    pub fn render(&self, kind: SectionKind) -> String {
        match kind {
            SectionKind::HeadTitle => self.title.render(),
            SectionKind::HeadMeta => self.meta.render(),
            SectionKind::HeadLink => self.links.render(),
            SectionKind::HeadStyle => self.styles.render(),
            SectionKind::HeadScript => self.scripts.render(),
            SectionKind::FootScript => self.foot_scripts.render(),
        }
    }

    /// Set the line indent for one section.
    pub fn set_indent(&mut self, kind: SectionKind, indent: usize) {
        match kind {
            SectionKind::HeadTitle => self.title.set_indent(indent),
            SectionKind::HeadMeta => self.meta.set_indent(indent),
            SectionKind::HeadLink => self.links.set_indent(indent),
            SectionKind::HeadStyle => self.styles.set_indent(indent),
            SectionKind::HeadScript => self.scripts.set_indent(indent),
            SectionKind::FootScript => self.foot_scripts.set_indent(indent),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_renders_segments_separator_and_postfix() {
        let mut title = HeadTitle::default();
        title.set_separator(" - ");
        title.append("Latest Posts");
        title.set_postfix(" - Blog - Example");
        assert_eq!(
            title.render(),
            "<title>Latest Posts - Blog - Example</title>"
        );
    }

    #[test]
    fn title_set_replaces_all_segments() {
        let mut title = HeadTitle::default();
        title.append("one");
        title.append("two");
        assert_eq!(title.count(), 2);
        title.set("only");
        assert_eq!(title.count(), 1);
        assert_eq!(title.render(), "<title>only</title>");
    }

    #[test]
    fn empty_title_renders_nothing() {
        assert_eq!(HeadTitle::default().render(), "");
    }

    #[test]
    fn title_with_postfix_only_still_renders() {
        let mut title = HeadTitle::default();
        title.set_postfix("Example");
        assert_eq!(title.render(), "<title>Example</title>");
    }

    #[test]
    fn title_segments_are_escaped() {
        let mut title = HeadTitle::default();
        title.set("Q&A <news>");
        assert_eq!(title.render(), "<title>Q&amp;A &lt;news&gt;</title>");
    }

    #[test]
    fn meta_renders_name_and_property_entries() {
        let mut meta = HeadMeta::default();
        meta.append_name("keywords", "demo, example");
        meta.append_property("dc:title", "Example", Some("en"));
        assert_eq!(
            meta.render(),
            "<meta name=\"keywords\" content=\"demo, example\" />\n\
             <meta property=\"dc:title\" content=\"Example\" lang=\"en\" />"
        );
    }

    #[test]
    fn meta_content_is_escaped() {
        let mut meta = HeadMeta::default();
        meta.append_name("description", "a \"quoted\" & odd value");
        assert_eq!(
            meta.render(),
            "<meta name=\"description\" content=\"a &quot;quoted&quot; &amp; odd value\" />"
        );
    }

    #[test]
    fn links_render_stylesheet_with_type() {
        let mut links = HeadLink::default();
        links.append_stylesheet("/css/site.css");
        links.append("canonical", "https://example.org/");
        assert_eq!(
            links.render(),
            "<link rel=\"stylesheet\" href=\"/css/site.css\" type=\"text/css\" />\n\
             <link rel=\"canonical\" href=\"https://example.org/\" />"
        );
    }

    #[test]
    fn styles_wrap_blocks() {
        let mut styles = HeadStyle::default();
        styles.append("body { margin: 0; }");
        assert_eq!(styles.render(), "<style>\nbody { margin: 0; }\n</style>");
    }

    #[test]
    fn scripts_render_file_inline_and_raw() {
        let mut scripts = Scripts::default();
        scripts.append_file("/js/app.js");
        scripts.append_script("init();");
        scripts.append_raw("<script async src=\"/js/extra.js\"></script>");
        assert_eq!(
            scripts.render(),
            "<script src=\"/js/app.js\"></script>\n\
             <script>\ninit();\n</script>\n\
             <script async src=\"/js/extra.js\"></script>"
        );
    }

    #[test]
    fn empty_sections_render_empty_strings() {
        let set = SectionSet::default();
        assert_eq!(set.render(SectionKind::HeadMeta), "");
        assert_eq!(set.render(SectionKind::FootScript), "");
    }

    #[test]
    fn indent_applies_to_every_line() {
        let mut scripts = Scripts::default();
        scripts.set_indent(4);
        scripts.append_file("/js/app.js");
        scripts.append_script("a();\nb();");
        assert_eq!(
            scripts.render(),
            "    <script src=\"/js/app.js\"></script>\n\
             \x20   <script>\n\
             \x20   a();\n\
             \x20   b();\n\
             \x20   </script>"
        );
    }

    #[test]
    fn section_set_set_indent_routes_to_container() {
        let mut set = SectionSet::default();
        set.set_indent(SectionKind::HeadScript, 2);
        set.scripts.append_file("/js/app.js");
        assert_eq!(set.render(SectionKind::HeadScript), "  <script src=\"/js/app.js\"></script>");
    }
}
