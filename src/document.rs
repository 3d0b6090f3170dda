//! The group-keyed store.
//!
//! An [`IniDocument`] holds named groups of key/value string pairs and
//! enforces the naming and typing rules on every mutation. Validation runs
//! before anything is written, so a rejected call leaves the document
//! untouched.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::IniError;
use crate::registry::TypeRegistry;
use crate::validate;
use crate::value_type::ValueType;

/// Default group name used by [`IniDocument::new`].
pub const DEFAULT_GROUP: &str = "default";

/// In-memory model of an INI-style document.
///
/// Groups map key names to raw string values; an embedded [`TypeRegistry`]
/// optionally narrows validation per key. Single-argument `*_default`
/// operations target the default group chosen at construction.
///
/// Groups and keys are created on first write ([`add`](Self::add)
/// auto-creates its group) and removed only by explicit removal calls;
/// empty groups are never garbage-collected.
///
/// Not internally synchronized: callers sharing a document across threads
/// must provide their own locking.
///
/// Deserializing bypasses write-time validation, so after building a
/// document from serialized or otherwise bulk data, run
/// [`check_all_valid`](Self::check_all_valid) to assert the rules hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IniDocument {
    default_group: String,
    groups: BTreeMap<String, BTreeMap<String, String>>,
    types: TypeRegistry,
}

impl IniDocument {
    /// Create an empty document with [`DEFAULT_GROUP`] as the default group.
    pub fn new() -> Self {
        Self::with_default_group(DEFAULT_GROUP)
    }

    /// Create an empty document with the given default group name. The
    /// group itself is not created until first written to.
    pub fn with_default_group(name: impl Into<String>) -> Self {
        Self {
            default_group: name.into(),
            groups: BTreeMap::new(),
            types: TypeRegistry::new(),
        }
    }

    /// Deep-copy this document with a different default group, then re-run
    /// [`check_all_valid`](Self::check_all_valid) on the copy.
    ///
    /// The copy shares nothing with the original; mutating one never
    /// affects the other. (A plain [`Clone`] keeps the default group.)
    pub fn clone_with_default_group(
        &self,
        name: impl Into<String>,
    ) -> Result<IniDocument, IniError> {
        let copy = IniDocument {
            default_group: name.into(),
            groups: self.groups.clone(),
            types: self.types.clone(),
        };
        copy.check_all_valid()?;
        Ok(copy)
    }

    /// The group targeted by the `*_default` operations.
    pub fn default_group(&self) -> &str {
        &self.default_group
    }

    /// Create an empty group. Idempotent: creating an existing group is a
    /// no-op.
    pub fn add_group(&mut self, name: &str) -> Result<(), IniError> {
        validate::check_group_name(name)?;
        self.groups.entry(name.to_string()).or_default();
        Ok(())
    }

    /// Insert or overwrite `key` in `group` with `value`, creating the
    /// group if absent.
    ///
    /// The group name, key name, and value are validated first (consulting
    /// the type registry for the key); on rejection nothing is mutated, not
    /// even the group auto-creation.
    pub fn add(&mut self, group: &str, key: &str, value: impl Into<String>) -> Result<(), IniError> {
        let value = value.into();
        validate::check_group_name(group)?;
        validate::check_key_value(group, key, &value, self.types.lookup(group, key))?;

        self.groups
            .entry(group.to_string())
            .or_default()
            .insert(key.to_string(), value);
        Ok(())
    }

    /// [`add`](Self::add) targeting the default group.
    pub fn add_default(&mut self, key: &str, value: impl Into<String>) -> Result<(), IniError> {
        let group = self.default_group.clone();
        self.add(&group, key, value)
    }

    /// The value stored under `key` in `group`, if any.
    pub fn get(&self, group: &str, key: &str) -> Option<&str> {
        self.groups.get(group)?.get(key).map(String::as_str)
    }

    /// [`get`](Self::get) targeting the default group.
    pub fn get_default(&self, key: &str) -> Option<&str> {
        self.get(&self.default_group, key)
    }

    /// The default-group value for `key`, split on commas.
    ///
    /// Segments are not trimmed and empty segments are preserved:
    /// `"a,,b"` yields `["a", "", "b"]`. Callers wanting cleaned lists must
    /// filter themselves.
    pub fn get_as_list(&self, key: &str) -> Option<Vec<&str>> {
        Some(self.get_default(key)?.split(',').collect())
    }

    /// `true` if the group exists, even if empty.
    pub fn contains_group(&self, group: &str) -> bool {
        self.groups.contains_key(group)
    }

    /// `true` if `key` exists in `group`.
    pub fn contains_key(&self, group: &str, key: &str) -> bool {
        self.groups
            .get(group)
            .map_or(false, |data| data.contains_key(key))
    }

    /// [`contains_key`](Self::contains_key) targeting the default group.
    pub fn contains_default_key(&self, key: &str) -> bool {
        self.contains_key(&self.default_group, key)
    }

    /// Remove `key` from `group` and return its value. Fails if the group
    /// or the key does not exist; the group itself stays, even if emptied.
    pub fn remove(&mut self, group: &str, key: &str) -> Result<String, IniError> {
        let data = self
            .groups
            .get_mut(group)
            .ok_or_else(|| IniError::GroupNotFound(group.to_string()))?;

        data.remove(key).ok_or_else(|| IniError::KeyNotFound {
            group: group.to_string(),
            key: key.to_string(),
        })
    }

    /// [`remove`](Self::remove) targeting the default group.
    pub fn remove_default(&mut self, key: &str) -> Result<String, IniError> {
        let group = self.default_group.clone();
        self.remove(&group, key)
    }

    /// Remove a group and all its keys. Fails if the group does not exist.
    pub fn remove_group(&mut self, group: &str) -> Result<(), IniError> {
        match self.groups.remove(group) {
            Some(_) => Ok(()),
            None => Err(IniError::GroupNotFound(group.to_string())),
        }
    }

    /// All group names in lexicographic order.
    pub fn group_names(&self) -> Vec<&str> {
        self.groups.keys().map(String::as_str).collect()
    }

    /// A snapshot copy of a group's key/value pairs. Mutating the returned
    /// map never affects the document.
    pub fn group(&self, name: &str) -> Option<BTreeMap<String, String>> {
        self.groups.get(name).cloned()
    }

    /// Iterate over `(group name, key/value map)` pairs in lexicographic
    /// group order. This is the read surface for serializers.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeMap<String, String>)> {
        self.groups.iter().map(|(name, data)| (name.as_str(), data))
    }

    /// `true` if the document holds no groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Declare the type governing validation for `(group, key)`.
    /// Declarations apply to subsequent writes only; already-stored values
    /// are not re-checked (use [`check_all_valid`](Self::check_all_valid)
    /// for that).
    pub fn declare_type(
        &mut self,
        group: impl Into<String>,
        key: impl Into<String>,
        value_type: ValueType,
    ) {
        self.types.declare(group, key, value_type);
    }

    /// The declared type for `(group, key)`, or `None` if untyped.
    pub fn declared_type(&self, group: &str, key: &str) -> Option<ValueType> {
        self.types.lookup(group, key)
    }

    /// Re-validate every stored group name and key/value pair against the
    /// current type registry. Reports the first violation found.
    pub fn check_all_valid(&self) -> Result<(), IniError> {
        for (group, data) in &self.groups {
            validate::check_group_name(group)?;
            for (key, value) in data {
                validate::check_key_value(group, key, value, self.types.lookup(group, key))?;
            }
        }
        Ok(())
    }
}

impl Default for IniDocument {
    fn default() -> Self {
        Self::new()
    }
}
