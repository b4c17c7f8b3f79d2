//! Static catalog of tools the palette can jump to.
//!
//! The index is built once at startup from the registered tools and never
//! mutated afterwards. Each entry carries a precomputed lowercase haystack so
//! the filter does no per-keystroke allocation on the item side.

/// One navigable tool in the palette index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolEntry {
    /// Stable identifier, maps 1:1 to a tool panel.
    pub id: String,
    /// Display label shown in the palette list.
    pub label: String,
    /// Free-text keywords, used only for matching.
    pub keywords: String,
    /// Lowercased `label + " " + keywords`, computed at construction.
    haystack: String,
}

impl ToolEntry {
    /// Create a new entry, precomputing the searchable haystack.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        keywords: impl Into<String>,
    ) -> Self {
        let id = id.into();
        let label = label.into();
        let keywords = keywords.into();
        let haystack = format!("{label} {keywords}").to_lowercase();
        Self {
            id,
            label,
            keywords,
            haystack,
        }
    }

    /// Searchable text for this entry (lowercase).
    #[must_use]
    pub fn haystack(&self) -> &str {
        &self.haystack
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haystack_is_lowercased_concat() {
        let entry = ToolEntry::new("uuid", "UUID v4", "Generator ID");
        assert_eq!(entry.haystack(), "uuid v4 generator id");
    }

    #[test]
    fn test_fields_preserved() {
        let entry = ToolEntry::new("calc", "Calculator", "math arithmetic");
        assert_eq!(entry.id, "calc");
        assert_eq!(entry.label, "Calculator");
        assert_eq!(entry.keywords, "math arithmetic");
    }
}
