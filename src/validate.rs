//! Pure validation predicates.
//!
//! These functions are consulted by [`IniDocument`] before any mutation
//! commits; they never touch state themselves. Each check reports the first
//! violated rule so callers get a precise diagnostic.
//!
//! [`IniDocument`]: crate::IniDocument

use crate::error::{IniError, NameRule, ValueRule};
use crate::value_type::ValueType;

/// Check a group name: non-blank, no `[`/`]`, no newline.
pub fn check_group_name(name: &str) -> Result<(), IniError> {
    let rule = if name.trim().is_empty() {
        NameRule::Empty
    } else if name.contains('[') || name.contains(']') {
        NameRule::Bracket
    } else if name.contains('\n') {
        NameRule::Newline
    } else {
        return Ok(());
    };

    Err(IniError::InvalidName {
        name: name.to_string(),
        rule,
    })
}

/// Check a key and its value against the generic rules plus the key's
/// declared type, if any.
///
/// `declared` is the registry lookup result for `(group, key)`; `None` means
/// untyped, which skips the boolean/numeric checks but not the name checks.
pub fn check_key_value(
    group: &str,
    key: &str,
    value: &str,
    declared: Option<ValueType>,
) -> Result<(), IniError> {
    check_key_name(key, declared)?;

    if value.contains('\n') {
        return Err(invalid_value(group, key, value, ValueRule::Newline));
    }

    match declared {
        Some(ValueType::Boolean) if !is_valid_boolean(value) => {
            Err(invalid_value(group, key, value, ValueRule::NotBoolean))
        }
        Some(ValueType::Integer) if !is_valid_number(value) => {
            Err(invalid_value(group, key, value, ValueRule::NotNumeric))
        }
        _ => Ok(()),
    }
}

/// Check a key name: non-blank, no newline, no `=`. Brackets are rejected
/// unless the key is declared [`ValueType::LocaleString`], whose keys carry
/// a bracketed locale suffix (e.g. `Name[fr]`).
fn check_key_name(key: &str, declared: Option<ValueType>) -> Result<(), IniError> {
    let locale_string = declared == Some(ValueType::LocaleString);

    let rule = if key.trim().is_empty() {
        NameRule::Empty
    } else if key.contains('\n') {
        NameRule::Newline
    } else if key.contains('=') {
        NameRule::Equals
    } else if !locale_string && (key.contains('[') || key.contains(']')) {
        NameRule::Bracket
    } else {
        return Ok(());
    };

    Err(IniError::InvalidName {
        name: key.to_string(),
        rule,
    })
}

fn invalid_value(group: &str, key: &str, value: &str, rule: ValueRule) -> IniError {
    IniError::InvalidValue {
        group: group.to_string(),
        key: key.to_string(),
        value: value.to_string(),
        rule,
    }
}

/// `true` if the value is case-insensitively `true` or `false`.
pub fn is_valid_boolean(value: &str) -> bool {
    value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("false")
}

/// `true` if the value parses as a 64-bit float, surrounding whitespace
/// allowed.
///
/// Intentionally lax: a key declared [`ValueType::Integer`] accepts any
/// numeric literal, `"3.14"` and `"1e3"` included. Kept for compatibility
/// with existing documents rather than tightened to integer syntax.
pub fn is_valid_number(value: &str) -> bool {
    value.trim().parse::<f64>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_name_valid() {
        assert!(check_group_name("Desktop Entry").is_ok());
        assert!(check_group_name("X-Custom Ext").is_ok());
    }

    #[test]
    fn test_group_name_rejections() {
        let blank = check_group_name("   ").unwrap_err();
        assert_eq!(
            blank,
            IniError::InvalidName {
                name: "   ".to_string(),
                rule: NameRule::Empty,
            }
        );

        let bracket = check_group_name("Desk[top").unwrap_err();
        assert!(matches!(
            bracket,
            IniError::InvalidName {
                rule: NameRule::Bracket,
                ..
            }
        ));

        let newline = check_group_name("Desk\ntop").unwrap_err();
        assert!(matches!(
            newline,
            IniError::InvalidName {
                rule: NameRule::Newline,
                ..
            }
        ));
    }

    #[test]
    fn test_key_name_rejections() {
        for (key, rule) in [
            ("", NameRule::Empty),
            (" \t ", NameRule::Empty),
            ("a\nb", NameRule::Newline),
            ("a=b", NameRule::Equals),
            ("Name[fr]", NameRule::Bracket),
        ] {
            let err = check_key_value("g", key, "v", None).unwrap_err();
            assert_eq!(
                err,
                IniError::InvalidName {
                    name: key.to_string(),
                    rule,
                },
                "key {:?}",
                key
            );
        }
    }

    #[test]
    fn test_locale_string_key_allows_brackets() {
        assert!(check_key_value("g", "Name[fr]", "v", Some(ValueType::LocaleString)).is_ok());
        // Other declared types still reject brackets.
        assert!(check_key_value("g", "Name[fr]", "v", Some(ValueType::String)).is_err());
    }

    #[test]
    fn test_value_newline_rejected() {
        let err = check_key_value("g", "k", "a\nb", None).unwrap_err();
        assert!(matches!(
            err,
            IniError::InvalidValue {
                rule: ValueRule::Newline,
                ..
            }
        ));
    }

    #[test]
    fn test_is_valid_boolean() {
        assert!(is_valid_boolean("true"));
        assert!(is_valid_boolean("False"));
        assert!(is_valid_boolean("TRUE"));
        assert!(!is_valid_boolean("yes"));
        assert!(!is_valid_boolean("1"));
        assert!(!is_valid_boolean(""));
        assert!(!is_valid_boolean(" true"));
    }

    #[test]
    fn test_is_valid_number() {
        assert!(is_valid_number("0"));
        assert!(is_valid_number("-17"));
        assert!(is_valid_number("3.14"));
        assert!(is_valid_number("1e3"));
        assert!(is_valid_number(" 42 "));
        assert!(!is_valid_number("abc"));
        assert!(!is_valid_number(""));
        assert!(!is_valid_number("1,2"));
    }

    #[test]
    fn test_typed_checks_skipped_when_untyped() {
        // Untyped keys take any newline-free value.
        assert!(check_key_value("g", "k", "yes", None).is_ok());
        assert!(check_key_value("g", "k", "abc", None).is_ok());
    }
}
