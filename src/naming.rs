//! External field name and number resolution.
//!
//! A member's visible name is derived from layered override sources, highest
//! first:
//! 1. explicit per-member name marker (literal wins);
//! 2. per-member case-format marker (conflict with 1 is fatal);
//! 3. declaring-type case-format marker;
//! 4. the natural declared name, unchanged.
//!
//! Declared names are assumed lower-camel (the default convention); the
//! case-format ladder converts out of that.

use crate::error::{Result, TypeInfoError};
use crate::model::{
    find_marker, Marker, CASE_FORMAT_MARKER, DESCRIPTION_MARKER, FIELD_NAME_MARKER,
    FIELD_NUMBER_MARKER,
};

// ------------------------------ Case formats ------------------------------ //

/// Target naming conventions accepted by the case-format marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaseFormat {
    LowerHyphen,
    LowerUnderscore,
    LowerCamel,
    UpperCamel,
    UpperUnderscore,
}

impl CaseFormat {
    /// Parse the marker's literal. The accepted spellings are the converter
    /// names themselves.
    pub fn parse(s: &str) -> Option<CaseFormat> {
        match s {
            "LOWER_HYPHEN" => Some(CaseFormat::LowerHyphen),
            "LOWER_UNDERSCORE" => Some(CaseFormat::LowerUnderscore),
            "LOWER_CAMEL" => Some(CaseFormat::LowerCamel),
            "UPPER_CAMEL" => Some(CaseFormat::UpperCamel),
            "UPPER_UNDERSCORE" => Some(CaseFormat::UpperUnderscore),
            _ => None,
        }
    }

    /// Convert a lower-camel `name` into this format.
    pub fn from_lower_camel(self, name: &str) -> String {
        let words = split_lower_camel(name);
        match self {
            CaseFormat::LowerHyphen => words.join("-"),
            CaseFormat::LowerUnderscore => words.join("_"),
            CaseFormat::UpperUnderscore => words
                .iter()
                .map(|w| w.to_uppercase())
                .collect::<Vec<_>>()
                .join("_"),
            CaseFormat::LowerCamel => {
                let mut out = String::new();
                for (i, w) in words.iter().enumerate() {
                    if i == 0 {
                        out.push_str(w);
                    } else {
                        out.push_str(&capitalize(w));
                    }
                }
                out
            }
            CaseFormat::UpperCamel => words.iter().map(|w| capitalize(w)).collect(),
        }
    }
}

/// Split a lower-camel identifier into lowercase words. A word boundary sits
/// before every uppercase character.
fn split_lower_camel(name: &str) -> Vec<String> {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    for c in name.chars() {
        if c.is_uppercase() && !current.is_empty() {
            words.push(current);
            current = String::new();
        }
        current.extend(c.to_lowercase());
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

// --------------------------- Name / number / docs -------------------------- //

/// Apply the name-override ladder to `natural` (the declared name, already
/// prefix-stripped for accessors). `member_name` is only used in error
/// messages.
pub fn resolved_name(
    natural: &str,
    member_markers: &[Marker],
    declaring_markers: &[Marker],
    member_name: &str,
) -> Result<String> {
    let name_override = find_marker(member_markers, FIELD_NAME_MARKER);
    let member_case = find_marker(member_markers, CASE_FORMAT_MARKER);
    let declaring_case = find_marker(declaring_markers, CASE_FORMAT_MARKER);

    if let Some(m) = name_override {
        if member_case.is_some() {
            return Err(TypeInfoError::ConfigurationConflict {
                member: member_name.to_string(),
                name_marker: FIELD_NAME_MARKER,
                case_marker: CASE_FORMAT_MARKER,
            });
        }
        return Ok(m.value.clone().unwrap_or_default());
    }

    // Member-level case format shadows the declaring type's default.
    if let Some(m) = member_case.or(declaring_case) {
        let literal = m.value.as_deref().unwrap_or("");
        let format = CaseFormat::parse(literal).ok_or_else(|| TypeInfoError::UnknownCaseFormat {
            member: member_name.to_string(),
            value: literal.to_string(),
        })?;
        return Ok(format.from_lower_camel(natural));
    }

    Ok(natural.to_string())
}

/// Explicit number marker wins; otherwise the zero-based declaration index.
pub fn resolved_number(index: u32, markers: &[Marker], member_name: &str) -> Result<u32> {
    match find_marker(markers, FIELD_NUMBER_MARKER) {
        None => Ok(index),
        Some(m) => {
            let literal = m.value.as_deref().unwrap_or("");
            literal
                .parse::<u32>()
                .map_err(|_| TypeInfoError::InvalidFieldNumber {
                    member: member_name.to_string(),
                    value: literal.to_string(),
                })
        }
    }
}

/// Literal of the description marker, if present.
pub fn description(markers: &[Marker]) -> Option<String> {
    find_marker(markers, DESCRIPTION_MARKER).and_then(|m| m.value.clone())
}

// --------------------------- Accessor prefixes ----------------------------- //

/// Strip `prefix` from an accessor name and lowercase the first remaining
/// character (`getUserId` -> `userId`). `None` when the prefix is missing or
/// nothing remains after it.
pub fn strip_accessor_prefix(name: &str, prefix: &str) -> Option<String> {
    let rest = name.strip_prefix(prefix)?;
    let mut chars = rest.chars();
    let first = chars.next()?;
    let mut out: String = first.to_lowercase().collect();
    out.push_str(chars.as_str());
    Some(out)
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Marker;

    fn marker(designator: &str, value: &str) -> Marker {
        Marker::with_value("app.schema", designator, value)
    }

    #[test]
    fn default_path_keeps_the_natural_name() {
        let name = resolved_name("userId", &[], &[], "userId").unwrap();
        assert_eq!(name, "userId");
    }

    #[test]
    fn explicit_name_override_wins() {
        let ms = vec![marker(FIELD_NAME_MARKER, "uid")];
        assert_eq!(resolved_name("userId", &ms, &[], "userId").unwrap(), "uid");
    }

    #[test]
    fn name_override_beats_declaring_type_case_format() {
        let ms = vec![marker(FIELD_NAME_MARKER, "uid")];
        let ds = vec![marker(CASE_FORMAT_MARKER, "UPPER_UNDERSCORE")];
        assert_eq!(resolved_name("userId", &ms, &ds, "userId").unwrap(), "uid");
    }

    #[test]
    fn name_plus_case_format_on_the_member_is_a_conflict() {
        let ms = vec![
            marker(FIELD_NAME_MARKER, "uid"),
            marker(CASE_FORMAT_MARKER, "UPPER_UNDERSCORE"),
        ];
        let err = resolved_name("userId", &ms, &[], "userId").unwrap_err();
        assert!(matches!(err, TypeInfoError::ConfigurationConflict { ref member, .. } if member == "userId"));
    }

    #[test]
    fn member_case_format_converts_from_lower_camel() {
        let ms = vec![marker(CASE_FORMAT_MARKER, "UPPER_UNDERSCORE")];
        assert_eq!(
            resolved_name("userId", &ms, &[], "userId").unwrap(),
            "USER_ID"
        );
    }

    #[test]
    fn declaring_type_case_format_is_the_fallback() {
        let ds = vec![marker(CASE_FORMAT_MARKER, "LOWER_UNDERSCORE")];
        assert_eq!(
            resolved_name("userId", &[], &ds, "userId").unwrap(),
            "user_id"
        );
    }

    #[test]
    fn member_case_format_shadows_declaring_case_format() {
        let ms = vec![marker(CASE_FORMAT_MARKER, "UPPER_CAMEL")];
        let ds = vec![marker(CASE_FORMAT_MARKER, "LOWER_UNDERSCORE")];
        assert_eq!(resolved_name("userId", &ms, &ds, "userId").unwrap(), "UserId");
    }

    #[test]
    fn unknown_case_format_literal_is_fatal() {
        let ms = vec![marker(CASE_FORMAT_MARKER, "SPONGE_CASE")];
        let err = resolved_name("userId", &ms, &[], "userId").unwrap_err();
        assert!(matches!(err, TypeInfoError::UnknownCaseFormat { ref value, .. } if value == "SPONGE_CASE"));
    }

    #[test]
    fn all_case_formats_render() {
        assert_eq!(CaseFormat::LowerHyphen.from_lower_camel("userId"), "user-id");
        assert_eq!(CaseFormat::LowerUnderscore.from_lower_camel("userId"), "user_id");
        assert_eq!(CaseFormat::LowerCamel.from_lower_camel("userId"), "userId");
        assert_eq!(CaseFormat::UpperCamel.from_lower_camel("userId"), "UserId");
        assert_eq!(CaseFormat::UpperUnderscore.from_lower_camel("userId"), "USER_ID");
    }

    #[test]
    fn number_defaults_to_the_declaration_index() {
        assert_eq!(resolved_number(3, &[], "x").unwrap(), 3);
    }

    #[test]
    fn number_marker_overrides_the_index() {
        let ms = vec![marker(FIELD_NUMBER_MARKER, "12")];
        assert_eq!(resolved_number(3, &ms, "x").unwrap(), 12);
    }

    #[test]
    fn malformed_number_literal_is_fatal() {
        for bad in ["-1", "12.5", "twelve", ""] {
            let ms = vec![marker(FIELD_NUMBER_MARKER, bad)];
            let err = resolved_number(0, &ms, "x").unwrap_err();
            assert!(matches!(err, TypeInfoError::InvalidFieldNumber { ref value, .. } if value == bad));
        }
    }

    #[test]
    fn prefix_stripping_lowercases_the_first_letter() {
        assert_eq!(strip_accessor_prefix("getUserId", "get").as_deref(), Some("userId"));
        assert_eq!(strip_accessor_prefix("isActive", "is").as_deref(), Some("active"));
        assert_eq!(strip_accessor_prefix("setAmount", "set").as_deref(), Some("amount"));
        assert_eq!(strip_accessor_prefix("userId", "get"), None);
        // nothing left after the prefix
        assert_eq!(strip_accessor_prefix("get", "get"), None);
    }
}
