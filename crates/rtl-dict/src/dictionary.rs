use indexmap::IndexMap;
use serde::Deserialize;

use crate::messages;

/// Which section of the dictionary a key belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Prefix,
    Suffix,
}

impl Section {
    /// Lowercase name used in user-facing messages.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Section::Prefix => "prefix",
            Section::Suffix => "suffix",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The two-section mapping of RTL naming conventions to explanations.
///
/// The JSON representation has exactly two top-level keys, `"Prefixes"`
/// and `"Suffixes"`, each an object mapping the literal prefix or suffix
/// text (e.g. `"aref_"`, `"_req"`) to a free-text explanation. Insertion
/// order is preserved so listings come out in file order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Dictionary {
    #[serde(rename = "Prefixes")]
    prefixes: IndexMap<String, String>,
    #[serde(rename = "Suffixes")]
    suffixes: IndexMap<String, String>,
}

impl Dictionary {
    #[must_use]
    pub fn new(prefixes: IndexMap<String, String>, suffixes: IndexMap<String, String>) -> Self {
        Self { prefixes, suffixes }
    }

    /// The hard-coded fallback used when the backing file is empty or
    /// cannot be parsed.
    #[must_use]
    pub fn builtin() -> Self {
        let mut prefixes = IndexMap::new();
        prefixes.insert(
            "aref_".to_string(),
            "Indicates that the signal is to do with the auto-refresh logic.".to_string(),
        );
        prefixes.insert(
            "mmu_".to_string(),
            "Indicates that the signal is coming from the memory-management unit.".to_string(),
        );

        let mut suffixes = IndexMap::new();
        suffixes.insert("_req".to_string(), "Indicates a request line.".to_string());
        suffixes.insert(
            "_ctrl".to_string(),
            "Indicates a control signal or a signal from a control block.".to_string(),
        );

        Self { prefixes, suffixes }
    }

    /// Exact, case-sensitive lookup in the given section. No trimming or
    /// case folding is applied to `key`.
    #[must_use]
    pub fn lookup(&self, section: Section, key: &str) -> Option<&str> {
        let entries = match section {
            Section::Prefix => &self.prefixes,
            Section::Suffix => &self.suffixes,
        };
        entries.get(key).map(String::as_str)
    }

    pub fn prefixes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.prefixes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn suffixes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.suffixes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Render the whole dictionary as one block: the prefixes header, every
    /// prefix entry in insertion order, then the suffixes header and every
    /// suffix entry.
    #[must_use]
    pub fn render_listing(&self) -> String {
        let mut out = String::from(messages::PREFIX_SECTION_HEADER);
        for (key, explanation) in self.prefixes() {
            out.push_str(&messages::explanation(key, explanation));
            out.push('\n');
        }
        out.push_str(messages::SUFFIX_SECTION_HEADER);
        for (key, explanation) in self.suffixes() {
            out.push_str(&messages::explanation(key, explanation));
            out.push('\n');
        }
        out
    }
}
