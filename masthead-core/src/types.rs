//! Domain types shared across the masthead workspace.
//!
//! Persisted types are serializable/deserializable via serde + serde_yaml.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One named subsection of one scope's configuration.
pub type ConfigSection = BTreeMap<String, String>;

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed module (configuration scope) name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModuleName(pub String);

impl ModuleName {
    /// The reserved system scope name.
    pub const SYSTEM: &'static str = "system";

    /// The reserved system scope.
    pub fn system() -> Self {
        Self(Self::SYSTEM.to_owned())
    }

    /// Whether this is the reserved system scope.
    pub fn is_system(&self) -> bool {
        self.0 == Self::SYSTEM
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for ModuleName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ModuleName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

/// A named category of head/foot markup handled by a dedicated container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SectionKind {
    HeadTitle,
    HeadMeta,
    HeadLink,
    HeadStyle,
    HeadScript,
    FootScript,
}

impl SectionKind {
    /// The five head sections in assembly order.
    pub fn head() -> &'static [SectionKind] {
        &[
            SectionKind::HeadTitle,
            SectionKind::HeadMeta,
            SectionKind::HeadLink,
            SectionKind::HeadStyle,
            SectionKind::HeadScript,
        ]
    }

    /// Canonical section name, as used in anchors and placeholder markers.
    pub fn name(&self) -> &'static str {
        match self {
            SectionKind::HeadTitle => "headTitle",
            SectionKind::HeadMeta => "headMeta",
            SectionKind::HeadLink => "headLink",
            SectionKind::HeadStyle => "headStyle",
            SectionKind::HeadScript => "headScript",
            SectionKind::FootScript => "footScript",
        }
    }

    /// Parse a canonical section name.
    pub fn from_name(name: &str) -> Option<SectionKind> {
        match name {
            "headTitle" => Some(SectionKind::HeadTitle),
            "headMeta" => Some(SectionKind::HeadMeta),
            "headLink" => Some(SectionKind::HeadLink),
            "headStyle" => Some(SectionKind::HeadStyle),
            "headScript" => Some(SectionKind::HeadScript),
            "footScript" => Some(SectionKind::FootScript),
            _ => None,
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Registry records
// ---------------------------------------------------------------------------

/// A module record in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleInfo {
    pub name: ModuleName,
    /// Display title, used in page-title postfixes.
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub installed_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ModuleInfo {
    /// Fresh record with both timestamps set to now.
    pub fn new(name: impl Into<ModuleName>, title: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            name: name.into(),
            title: title.into(),
            version: None,
            installed_at: now,
            updated_at: now,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn module_name_display() {
        assert_eq!(ModuleName::from("blog").to_string(), "blog");
        assert_eq!(ModuleName::system().to_string(), "system");
    }

    #[test]
    fn module_name_system_check() {
        assert!(ModuleName::system().is_system());
        assert!(!ModuleName::from("blog").is_system());
    }

    #[rstest]
    #[case("headTitle", Some(SectionKind::HeadTitle))]
    #[case("headMeta", Some(SectionKind::HeadMeta))]
    #[case("headLink", Some(SectionKind::HeadLink))]
    #[case("headStyle", Some(SectionKind::HeadStyle))]
    #[case("headScript", Some(SectionKind::HeadScript))]
    #[case("footScript", Some(SectionKind::FootScript))]
    #[case("headtitle", None)]
    #[case("", None)]
    fn section_kind_from_name(#[case] name: &str, #[case] expected: Option<SectionKind>) {
        assert_eq!(SectionKind::from_name(name), expected);
    }

    #[test]
    fn section_names_roundtrip() {
        for kind in SectionKind::head() {
            assert_eq!(SectionKind::from_name(kind.name()), Some(*kind));
        }
        assert_eq!(
            SectionKind::from_name(SectionKind::FootScript.name()),
            Some(SectionKind::FootScript)
        );
    }

    #[test]
    fn head_order_is_fixed() {
        let names: Vec<&str> = SectionKind::head().iter().map(|k| k.name()).collect();
        assert_eq!(
            names,
            vec!["headTitle", "headMeta", "headLink", "headStyle", "headScript"]
        );
    }

    #[test]
    fn module_info_serde_roundtrip() {
        let info = ModuleInfo::new("blog", "Blog");
        let yaml = serde_yaml::to_string(&info).expect("serialize");
        let back: ModuleInfo = serde_yaml::from_str(&yaml).expect("deserialize");
        assert_eq!(back, info);
    }

    #[test]
    fn module_info_version_omitted_when_none() {
        let info = ModuleInfo::new("blog", "Blog");
        let yaml = serde_yaml::to_string(&info).expect("serialize");
        assert!(!yaml.contains("version"));
    }
}
