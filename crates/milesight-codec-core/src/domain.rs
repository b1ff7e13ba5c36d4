//! Enumerated value domains.
//!
//! One static `(code, label)` table per field is the single source of truth:
//! the decoder maps codes to labels, the encoder validates a label or a code
//! and resolves it to the wire code.

use std::fmt::Write as _;

/// Label emitted by the decoder for a code missing from its domain.
pub const UNKNOWN_LABEL: &str = "unknown";

/// Finite `(code, label)` table for one enumerated field.
///
/// # Examples
/// ```
/// use milesight_codec_core::EnumDomain;
///
/// static MODE: EnumDomain = EnumDomain::new("mode", &[(0, "auto"), (1, "manual")]);
///
/// assert_eq!(MODE.label(1), Some("manual"));
/// assert_eq!(MODE.code_for_label("auto"), Some(0));
/// assert_eq!(MODE.label_or_unknown(9), "unknown");
/// ```
#[derive(Debug)]
pub struct EnumDomain {
    name: &'static str,
    entries: &'static [(i64, &'static str)],
}

impl EnumDomain {
    pub const fn new(name: &'static str, entries: &'static [(i64, &'static str)]) -> Self {
        Self { name, entries }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn label(&self, code: i64) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == code)
            .map(|(_, label)| *label)
    }

    pub fn label_or_unknown(&self, code: i64) -> &'static str {
        self.label(code).unwrap_or(UNKNOWN_LABEL)
    }

    pub fn code_for_label(&self, label: &str) -> Option<i64> {
        self.entries
            .iter()
            .find(|(_, candidate)| *candidate == label)
            .map(|(code, _)| *code)
    }

    pub fn contains(&self, code: i64) -> bool {
        self.label(code).is_some()
    }

    pub fn codes(&self) -> impl Iterator<Item = i64> + '_ {
        self.entries.iter().map(|(code, _)| *code)
    }

    /// Human-readable list of the allowed values, e.g. `[0 (no), 1 (yes)]`.
    pub fn describe(&self) -> String {
        let mut out = String::from("[");
        for (index, (code, label)) in self.entries.iter().enumerate() {
            if index > 0 {
                out.push_str(", ");
            }
            let _ = write!(out, "{code} ({label})");
        }
        out.push(']');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::EnumDomain;

    static ENABLE: EnumDomain = EnumDomain::new("enable", &[(0, "disable"), (2, "enable")]);

    #[test]
    fn lookups_work_in_both_directions() {
        assert_eq!(ENABLE.name(), "enable");
        assert_eq!(ENABLE.label(2), Some("enable"));
        assert_eq!(ENABLE.code_for_label("disable"), Some(0));
        assert!(ENABLE.contains(0));
        assert!(!ENABLE.contains(1));
        assert_eq!(ENABLE.codes().collect::<Vec<_>>(), vec![0, 2]);
    }

    #[test]
    fn label_match_is_exact() {
        assert_eq!(ENABLE.code_for_label("Enable"), None);
        assert_eq!(ENABLE.code_for_label(" enable"), None);
    }

    #[test]
    fn describe_lists_codes_and_labels() {
        assert_eq!(ENABLE.describe(), "[0 (disable), 2 (enable)]");
    }
}
