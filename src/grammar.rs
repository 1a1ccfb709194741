//! Section grammar — marker and entry patterns per section kind.
//!
//! Two layers on purpose: the marker regexes are loose so that sloppy
//! headers still open their section during segmentation, while the
//! canonical strings are what a well-formed header must equal exactly.

use regex::Regex;
use std::sync::LazyLock;

static RE_PARAMETERS_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ *# *=== *Parameters:").unwrap());

static RE_ATTRIBUTES_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ *# *=== *Attributes:").unwrap());

static RE_RETURNS_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ *# *=== *Returns: *").unwrap());

static RE_PARAM_ENTRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^# \* <tt>:(\w+)</tt>").unwrap());

static RE_RETURN_ENTRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^# \* <tt>([:\w]+)</tt>").unwrap());

static RE_SUB_ENTRY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^# \*\* \S").unwrap());

/// Prefix that distinguishes a (possibly malformed) sub-entry from a
/// malformed primary entry.
pub const SUB_PREFIX: &str = "# **";

/// The four sections a documentation block segments into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Description,
    Parameters,
    Attributes,
    Returns,
}

impl SectionKind {
    /// Plural name, as spelled in marker lines.
    pub fn name(&self) -> &'static str {
        match self {
            SectionKind::Description => "Description",
            SectionKind::Parameters => "Parameters",
            SectionKind::Attributes => "Attributes",
            SectionKind::Returns => "Returns",
        }
    }

    /// Singular name, as used in body diagnostics.
    pub fn label(&self) -> &'static str {
        match self {
            SectionKind::Description => "Description",
            SectionKind::Parameters => "Parameter",
            SectionKind::Attributes => "Attribute",
            SectionKind::Returns => "Return",
        }
    }

    /// Exact text a well-formed marker line must carry. The description
    /// has no marker.
    pub fn canonical_marker(&self) -> Option<&'static str> {
        match self {
            SectionKind::Description => None,
            SectionKind::Parameters => Some("# === Parameters:"),
            SectionKind::Attributes => Some("# === Attributes:"),
            SectionKind::Returns => Some("# === Returns:"),
        }
    }
}

/// Whether a comment text opens the given section during segmentation.
pub fn is_marker(kind: SectionKind, text: &str) -> bool {
    match kind {
        SectionKind::Description => false,
        SectionKind::Parameters => RE_PARAMETERS_MARKER.is_match(text),
        SectionKind::Attributes => RE_ATTRIBUTES_MARKER.is_match(text),
        SectionKind::Returns => RE_RETURNS_MARKER.is_match(text),
    }
}

/// Whether a body line is a well-formed primary entry for the section.
/// Parameters and attributes document symbols (`<tt>:name</tt>`);
/// returns document types (`<tt>Type</tt>`).
pub fn is_entry(kind: SectionKind, text: &str) -> bool {
    match kind {
        SectionKind::Description => false,
        SectionKind::Parameters | SectionKind::Attributes => RE_PARAM_ENTRY.is_match(text),
        SectionKind::Returns => RE_RETURN_ENTRY.is_match(text),
    }
}

/// Whether a body line is a well-formed sub-entry (`# ** detail`).
pub fn is_sub_entry(text: &str) -> bool {
    RE_SUB_ENTRY.is_match(text)
}

/// Extract the documented name from a primary entry, if the line is one.
pub fn entry_name(kind: SectionKind, text: &str) -> Option<String> {
    let re = match kind {
        SectionKind::Description => return None,
        SectionKind::Parameters | SectionKind::Attributes => &RE_PARAM_ENTRY,
        SectionKind::Returns => &RE_RETURN_ENTRY,
    };
    re.captures(text).map(|caps| caps[1].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loose_markers_open_sections() {
        assert!(is_marker(SectionKind::Parameters, "# === Parameters:"));
        assert!(is_marker(SectionKind::Parameters, "#  ===  Parameters:"));
        assert!(is_marker(SectionKind::Parameters, "# ===Parameters: extra"));
        assert!(!is_marker(SectionKind::Parameters, "# === Parameters"));
        assert!(is_marker(SectionKind::Attributes, "# === Attributes:"));
        assert!(is_marker(SectionKind::Returns, "# === Returns:"));
        assert!(!is_marker(SectionKind::Returns, "# === Parameters:"));
    }

    #[test]
    fn canonical_markers() {
        assert_eq!(
            SectionKind::Parameters.canonical_marker(),
            Some("# === Parameters:")
        );
        assert_eq!(SectionKind::Description.canonical_marker(), None);
    }

    #[test]
    fn param_entries_need_symbol_form() {
        assert!(is_entry(SectionKind::Parameters, "# * <tt>:p1</tt>"));
        assert!(is_entry(SectionKind::Parameters, "# * <tt>:p1</tt> the thing"));
        assert!(!is_entry(SectionKind::Parameters, "# * <tt>p1</tt>"));
        assert!(!is_entry(SectionKind::Parameters, "# <tt>:p1</tt>"));
        assert!(is_entry(SectionKind::Attributes, "# * <tt>:id</tt> Candidate id"));
    }

    #[test]
    fn return_entries_take_types() {
        assert!(is_entry(SectionKind::Returns, "# * <tt>Boolean</tt>"));
        assert!(is_entry(SectionKind::Returns, "# * <tt>:sym</tt>"));
        assert!(!is_entry(SectionKind::Returns, "# <tt>Boolean</tt>"));
    }

    #[test]
    fn sub_entries() {
        assert!(is_sub_entry("# ** detail text"));
        assert!(!is_sub_entry("# **"));
        assert!(!is_sub_entry("# ** "));
        assert!(!is_sub_entry("# **glued"));
    }

    #[test]
    fn entry_name_extraction() {
        assert_eq!(
            entry_name(SectionKind::Parameters, "# * <tt>:options</tt> extras"),
            Some("options".to_string())
        );
        assert_eq!(entry_name(SectionKind::Parameters, "# * <tt>options</tt>"), None);
        assert_eq!(
            entry_name(SectionKind::Returns, "# * <tt>Boolean</tt>"),
            Some("Boolean".to_string())
        );
    }
}
