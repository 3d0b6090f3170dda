//! Per-key type declarations.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::value_type::ValueType;

/// Records which [`ValueType`] governs validation for each (group, key)
/// pair.
///
/// The registry is optional metadata: a pair with no declaration is simply
/// untyped and receives only the generic checks. A semantic layer (such as a
/// desktop-entry wrapper) is expected to declare its standard keys before
/// writing values, since declarations affect subsequent writes only, never
/// retroactively.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRegistry {
    declarations: BTreeMap<String, BTreeMap<String, ValueType>>,
}

impl TypeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare the type for `(group, key)`. Unconditional upsert, last write
    /// wins. Names are not validated here; they are checked when a value is
    /// actually written under them.
    pub fn declare(
        &mut self,
        group: impl Into<String>,
        key: impl Into<String>,
        value_type: ValueType,
    ) {
        self.declarations
            .entry(group.into())
            .or_default()
            .insert(key.into(), value_type);
    }

    /// Look up the declared type for `(group, key)`. `None` means untyped.
    pub fn lookup(&self, group: &str, key: &str) -> Option<ValueType> {
        self.declarations.get(group)?.get(key).copied()
    }

    /// `true` if no types have been declared.
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}
