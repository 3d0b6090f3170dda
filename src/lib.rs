//! INI-style document core.
//!
//! In-memory model for INI-style configuration documents as used by the
//! freedesktop Desktop Entry format: named groups of key/value string
//! pairs, with optional per-key type declarations that tighten validation.
//!
//! Values are always stored as raw strings; a declared [`ValueType`] only
//! narrows which writes are accepted. Every mutation is validated before it
//! commits, so stored names never contain `[`, `]`, `=`, or newlines and
//! stored values never contain newlines - a text serializer built on top
//! can render `[Group]` / `Key=Value` lines without re-escaping.
//!
//! This crate is a pure data structure: no IO, no logging, and no internal
//! synchronization (callers sharing a document across threads must lock
//! externally). Rendering to text and the desktop-entry semantic layer live
//! in separate crates.
//!
//! ```
//! use ini_style_core::{IniDocument, ValueType};
//!
//! let mut doc = IniDocument::with_default_group("Desktop Entry");
//! doc.declare_type("Desktop Entry", "NoDisplay", ValueType::Boolean);
//!
//! doc.add_default("Name", "Firefox")?;
//! doc.add_default("NoDisplay", "false")?;
//! assert_eq!(doc.get_default("Name"), Some("Firefox"));
//!
//! assert!(doc.add_default("NoDisplay", "maybe").is_err());
//! # Ok::<(), ini_style_core::IniError>(())
//! ```

pub mod document;
pub mod error;
pub mod registry;
pub mod validate;
pub mod value_type;

pub use document::{IniDocument, DEFAULT_GROUP};
pub use error::{IniError, NameRule, ValueRule};
pub use registry::TypeRegistry;
pub use validate::{is_valid_boolean, is_valid_number};
pub use value_type::ValueType;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
