use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Declared value type for a (group, key) pair.
///
/// Declaring a type never stores a typed value: values are always kept as
/// raw strings, and the declaration only narrows which writes are accepted
/// for that key. Keys with no declaration are untyped and receive only the
/// generic name/value checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueType {
    /// A string that may carry a bracketed locale suffix on its key,
    /// e.g. `Name[fr]`.
    LocaleString,
    /// A comma-separated list of strings.
    Strings,
    String,
    /// A comma-separated list of integers.
    Integers,
    Integer,
    /// Case-insensitive `true` or `false`.
    Boolean,
    /// A list of `x,y` coordinate pairs.
    Points,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueType::LocaleString => write!(f, "locale_string"),
            ValueType::Strings => write!(f, "strings"),
            ValueType::String => write!(f, "string"),
            ValueType::Integers => write!(f, "integers"),
            ValueType::Integer => write!(f, "integer"),
            ValueType::Boolean => write!(f, "boolean"),
            ValueType::Points => write!(f, "points"),
        }
    }
}

impl FromStr for ValueType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "locale_string" => Ok(ValueType::LocaleString),
            "strings" => Ok(ValueType::Strings),
            "string" => Ok(ValueType::String),
            "integers" => Ok(ValueType::Integers),
            "integer" => Ok(ValueType::Integer),
            "boolean" => Ok(ValueType::Boolean),
            "points" => Ok(ValueType::Points),
            _ => Err(format!(
                "Invalid value type '{}'. Valid options: locale_string, strings, string, \
                 integers, integer, boolean, points",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_type_display() {
        assert_eq!(format!("{}", ValueType::LocaleString), "locale_string");
        assert_eq!(format!("{}", ValueType::Boolean), "boolean");
        assert_eq!(format!("{}", ValueType::Integer), "integer");
    }

    #[test]
    fn test_value_type_from_str() {
        assert_eq!(
            ValueType::from_str("locale_string").unwrap(),
            ValueType::LocaleString
        );
        assert_eq!(ValueType::from_str("BOOLEAN").unwrap(), ValueType::Boolean);
        assert_eq!(ValueType::from_str("Points").unwrap(), ValueType::Points);
    }

    #[test]
    fn test_value_type_from_str_invalid() {
        assert!(ValueType::from_str("float").is_err());
        assert!(ValueType::from_str("").is_err());
    }

    #[test]
    fn test_value_type_json_roundtrip() {
        let value_type = ValueType::LocaleString;
        let json = serde_json::to_string(&value_type).unwrap();
        assert_eq!(json, "\"locale_string\"");

        let parsed: ValueType = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, value_type);
    }
}
